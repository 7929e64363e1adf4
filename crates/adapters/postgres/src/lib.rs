//! kiosk-adapter-postgres - PostgreSQL 适配器

mod connection;
mod migration;

pub use connection::*;
pub use migration::*;
