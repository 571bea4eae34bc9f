//! Where the config file lives, and seeding it on first run.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use beacon_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `<platform config dir>/beacon/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    beacon_platform::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .map_err(|e| ConfigError::Location(e.to_string()))
}

/// Write the commented default config to `path`.
///
/// An existing file is left untouched, so a concurrent first run cannot
/// clobber a file the user already edited.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |reason: String| ConfigError::WriteError {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already exists at {}, not overwriting", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_error(e.to_string())),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| write_error(e.to_string()))?;

    info!("created default config at {}", path.display());
    Ok(())
}
