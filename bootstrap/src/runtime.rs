//! 服务运行时

use kiosk_config::AppConfig;
use kiosk_telemetry::{init_tracing, init_tracing_json};
use tracing::info;

/// 初始化服务运行时
pub fn init_runtime(config: &AppConfig) {
    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(config.log_level());
    } else {
        init_tracing(config.log_level());
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}
