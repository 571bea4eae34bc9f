//! Configuration schema types for Beacon.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod notifications;
mod presence;
mod system;

pub use notifications::*;
pub use presence::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Beacon.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeaconConfig {
    pub presence: PresenceConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}
