use std::path::PathBuf;

/// Environment variable that relocates the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "MY_ALARM_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/my-alarm unless overridden)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("my-alarm"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the stored user record path, next to the config file
pub fn get_user_path() -> PathBuf {
    get_config_dir().join("user.json")
}

/// File name of the log inside [`get_log_dir`].
pub const LOG_FILE_NAME: &str = "my-alarm.log";

/// Directory for the log file
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("my-alarm")
}

pub fn get_log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

/// Expand a path string, handling ~ and relative paths
pub fn expand_path(path_str: &str) -> PathBuf {
    let home_dir = get_home_dir();

    if let Some(rest) = path_str.strip_prefix("~/") {
        home_dir.join(rest)
    } else if path_str == "~" {
        home_dir
    } else {
        PathBuf::from(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_path("~/alarms.toml"), get_home_dir().join("alarms.toml"));
        assert_eq!(expand_path("~"), get_home_dir());
        assert_eq!(expand_path("/etc/x"), PathBuf::from("/etc/x"));
    }

    #[test]
    fn test_log_path_is_log_file_in_log_dir() {
        let path = get_log_path();
        assert_eq!(path.parent(), Some(get_log_dir().as_path()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
    }

    #[test]
    fn test_user_path_is_next_to_config() {
        assert_eq!(get_user_path().parent(), get_config_path().parent());
    }
}
