//! Push notification configuration types.

use serde::{Deserialize, Serialize};

/// Push notification bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub enabled: bool,
    /// Sender identifier passed to the delivery service on start.
    pub sender_id: String,
    /// Relay alert clicks back to the host as `notification-clicked`.
    pub forward_clicks: bool,
    /// Application name attached to desktop alerts.
    pub app_name: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sender_id: "424242424242".to_string(),
            forward_clicks: true,
            app_name: "Beacon Browser".to_string(),
        }
    }
}
