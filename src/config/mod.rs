mod app_config;

pub use app_config::{
    AppConfig, BackendConfig, GuardConfig, LogFormat, LoggingConfig, ServerConfig, SessionConfig,
};
