//! Seams between the bridge and the outside world.

use beacon_common::{AlertId, BridgeError};
use beacon_platform::DesktopAlert;
use tokio::sync::mpsc;
use tracing::debug;

use crate::types::{Alert, BridgeInput};

/// Outbound signals to the host process.
pub trait ServiceSignals: Send + Sync {
    /// Ask the host to start the delivery service for `sender_id`.
    fn start_service(&self, sender_id: &str) -> Result<(), BridgeError>;

    /// Forward a fresh registration token (`fcm-ready`).
    fn fcm_ready(&self, token: &str) -> Result<(), BridgeError>;

    /// Report that the user activated an alert.
    fn notification_clicked(&self, id: &AlertId, from: &str) -> Result<(), BridgeError>;
}

/// Where visible alerts are rendered.
pub trait AlertSurface: Send + Sync {
    fn show(&self, alert: &Alert) -> Result<(), BridgeError>;
}

/// Native desktop notifications. Clicks are queued back into the bridge
/// inbox as [`BridgeInput::AlertClicked`].
pub struct DesktopAlerts {
    app_name: String,
    inbox: mpsc::UnboundedSender<BridgeInput>,
}

impl DesktopAlerts {
    pub fn new(app_name: impl Into<String>, inbox: mpsc::UnboundedSender<BridgeInput>) -> Self {
        Self {
            app_name: app_name.into(),
            inbox,
        }
    }
}

impl AlertSurface for DesktopAlerts {
    fn show(&self, alert: &Alert) -> Result<(), BridgeError> {
        let desktop = DesktopAlert::new(&self.app_name, &alert.title, &alert.body);
        let inbox = self.inbox.clone();
        let id = alert.id.clone();
        beacon_platform::notify(&desktop, move || {
            if inbox.send(BridgeInput::AlertClicked(id)).is_err() {
                debug!("alert clicked after the bridge stopped");
            }
        })?;
        Ok(())
    }
}
