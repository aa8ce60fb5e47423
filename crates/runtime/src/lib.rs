mod config;
pub mod logging;
mod settings;

pub use config::{
    PROGRAM_LOG_LEVEL, PROGRAM_NAME, default_settings_path, vigia_config_dir,
};
pub use settings::{AuditSettings, DEFAULT_BATCH_SIZE, DEFAULT_ROOT_LABEL};
