//! Push-notification bridge.
//!
//! Events from the background delivery service arrive through a
//! [`Subscription`] and are handled by the [`NotificationBridge`], which
//! forwards registration tokens to the host and shows visible messages on an
//! [`AlertSurface`].

pub mod bridge;
pub mod ports;
pub mod subscription;
pub mod types;

pub use bridge::{BridgeConfig, NotificationBridge};
pub use ports::{AlertSurface, DesktopAlerts, ServiceSignals};
pub use subscription::{subscribe, Subscription};
pub use types::{
    Alert, BridgeInput, ChannelState, Disposition, NotificationContent, NotificationEvent,
    NotificationPayload,
};
