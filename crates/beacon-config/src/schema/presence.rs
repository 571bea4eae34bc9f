//! Rich presence configuration types.

use serde::{Deserialize, Serialize};

/// Client id registered for the browser with the presence service.
pub const DEFAULT_CLIENT_ID: i64 = 565573138146918421;

/// Rich presence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    pub enabled: bool,
    /// Application client id used to authenticate the IPC connection.
    pub client_id: i64,
    /// Fixed publish period in milliseconds (valid range: 1000-60000).
    pub publish_interval_ms: u32,
    /// How long to wait for the login handshake (valid range: 1-60).
    pub handshake_timeout_secs: u32,
    /// Shown as the details line when no tab can be read.
    pub app_name: String,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: DEFAULT_CLIENT_ID,
            publish_interval_ms: 3000,
            handshake_timeout_secs: 10,
            app_name: "Beacon Browser".to_string(),
        }
    }
}
