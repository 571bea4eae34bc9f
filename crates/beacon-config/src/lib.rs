//! Beacon configuration system.
//!
//! TOML-based configuration for the presence publisher, the push
//! notification bridge, and logging. All sections use defaults, so a
//! missing or partial file works out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::BeaconConfig;

use beacon_common::ConfigError;
use std::path::Path;

/// Load and validate config from the platform default path.
///
/// Creates a commented default file on first run.
pub fn load_config() -> Result<BeaconConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<BeaconConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nkeep_days = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[presence]\nenabled = false\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(!config.presence.enabled);
    }
}
