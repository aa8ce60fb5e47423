use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "vigia";
pub const PROGRAM_LOG_LEVEL: &str = "VIGIA_LOG_LEVEL";

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directory holding the settings file.
///
/// `XDG_CONFIG_HOME` wins when set and non-empty, otherwise the platform
/// config dir reported by the `dirs` crate.
pub fn vigia_config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg).join(PROGRAM_NAME);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(PROGRAM_NAME)
}

/// Default settings file path.
pub fn default_settings_path() -> PathBuf {
    vigia_config_dir().join(SETTINGS_FILE_NAME)
}
