//! The running subsystems and the host-message loop that drives them.

mod boot;
mod dispatch;
mod shutdown;

use beacon_notify::{BridgeInput, Subscription};
use beacon_presence::{PresenceHandle, SharedBrowserState};
use tokio::sync::mpsc;

/// Notification bridge inbox and its running pump.
pub struct NotificationServices {
    inbox: mpsc::UnboundedSender<BridgeInput>,
    subscription: Subscription,
}

/// Everything started at boot and torn down at exit.
pub struct Services {
    browser: SharedBrowserState,
    presence: Option<PresenceHandle>,
    notifications: Option<NotificationServices>,
}

impl Services {
    pub fn presence_enabled(&self) -> bool {
        self.presence.is_some()
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications.is_some()
    }
}
