use std::fs;
use std::path::PathBuf;

use beacon_common::PlatformError;

const APP_NAME: &str = "beacon";

/// Returns the platform-specific configuration directory for Beacon.
///
/// - macOS: `~/Library/Application Support/beacon`
/// - Linux: `$XDG_CONFIG_HOME/beacon` (defaults to `~/.config/beacon`)
/// - Windows: `%APPDATA%\beacon`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Beacon.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the log directory (`data_dir()/logs`).
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Creates the config directory, and the log directory when file logging
/// is on, if they do not already exist.
pub fn ensure_dirs(file_logging: bool) -> Result<(), PlatformError> {
    for dir in required_dirs(file_logging)? {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}

fn required_dirs(file_logging: bool) -> Result<Vec<PathBuf>, PlatformError> {
    let mut dirs = vec![config_dir()?];
    if file_logging {
        dirs.push(log_dir()?);
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_beacon() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("beacon"),
            "config_dir should end with 'beacon', got: {path:?}"
        );
    }

    #[test]
    fn log_dir_is_inside_data_dir() {
        let log = log_dir().unwrap();
        let data = data_dir().unwrap();
        assert!(
            log.starts_with(&data),
            "log_dir should be inside data_dir: log={log:?}, data={data:?}"
        );
        assert_eq!(log.file_name().unwrap().to_str().unwrap(), "logs");
    }

    #[test]
    fn log_dir_only_required_with_file_logging() {
        let log = log_dir().unwrap();

        let without = required_dirs(false).unwrap();
        assert_eq!(without, vec![config_dir().unwrap()]);

        let with = required_dirs(true).unwrap();
        assert!(with.contains(&log));
    }
}
