//! API layer - HTTP handlers

mod health;
mod product;

pub use health::health_routes;
pub use product::{AppState, product_routes};
