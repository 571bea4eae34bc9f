//! Reading config files.

use std::io::ErrorKind;
use std::path::Path;

use beacon_common::ConfigError;
use tracing::info;

use super::paths::{create_default_config, default_config_path};
use crate::schema::BeaconConfig;

/// Parse the TOML file at `path`. Fields it omits take their defaults.
///
/// Values are not range-checked here; [`crate::load_config_from`] does that.
pub fn load_from_path(path: &Path) -> Result<BeaconConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: BeaconConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the config at the platform default path, seeding it with the
/// commented template on first run.
pub fn load_default() -> Result<BeaconConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(BeaconConfig::default())
        }
        result => result,
    }
}
