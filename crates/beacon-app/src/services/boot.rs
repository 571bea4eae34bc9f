//! Startup: build shared state, then start presence and notifications
//! according to config.

use std::sync::Arc;
use std::time::Duration;

use beacon_common::AppIdentity;
use beacon_config::BeaconConfig;
use beacon_notify::{
    subscribe, AlertSurface, BridgeConfig, BridgeInput, DesktopAlerts, NotificationBridge,
};
use beacon_presence::{
    DiscordTransport, PresenceHandle, PresenceSupervisor, Publisher, SharedBrowserState,
    SupervisorConfig,
};
use tokio::sync::mpsc;

use super::{NotificationServices, Services};
use crate::host_link::HostLink;

impl Services {
    /// Start every enabled subsystem with native desktop alerts.
    pub fn start(config: &BeaconConfig, link: HostLink) -> Self {
        let app_name = config.notifications.app_name.clone();
        Self::start_with(config, link, move |inbox| -> Arc<dyn AlertSurface> {
            Arc::new(DesktopAlerts::new(app_name, inbox))
        })
    }

    /// Start every enabled subsystem, rendering alerts on the surface
    /// built by `make_alerts` from the bridge inbox.
    pub fn start_with<F>(config: &BeaconConfig, link: HostLink, make_alerts: F) -> Self
    where
        F: FnOnce(mpsc::UnboundedSender<BridgeInput>) -> Arc<dyn AlertSurface>,
    {
        let identity = AppIdentity::new(&config.presence.app_name, env!("CARGO_PKG_VERSION"));
        let browser = SharedBrowserState::new(identity);

        let presence = if config.presence.enabled {
            Some(start_presence(config, &browser))
        } else {
            tracing::info!("Presence disabled by config");
            None
        };

        let notifications = if config.notifications.enabled {
            Some(start_notifications(config, link, make_alerts))
        } else {
            tracing::info!("Notifications disabled by config");
            None
        };

        Self {
            browser,
            presence,
            notifications,
        }
    }
}

fn start_presence(config: &BeaconConfig, browser: &SharedBrowserState) -> PresenceHandle {
    let presence = &config.presence;
    let supervisor_config = SupervisorConfig::new(
        Duration::from_millis(u64::from(presence.publish_interval_ms)),
        Duration::from_secs(u64::from(presence.handshake_timeout_secs)),
    );

    PresenceSupervisor::initialize(
        DiscordTransport::new(presence.client_id),
        Publisher::new(),
        Arc::new(browser.clone()),
        supervisor_config,
    )
    .start()
}

fn start_notifications<F>(config: &BeaconConfig, link: HostLink, make_alerts: F) -> NotificationServices
where
    F: FnOnce(mpsc::UnboundedSender<BridgeInput>) -> Arc<dyn AlertSurface>,
{
    let (inbox, rx) = mpsc::unbounded_channel();
    let alerts = make_alerts(inbox.clone());

    let mut bridge = NotificationBridge::new(
        BridgeConfig {
            sender_id: config.notifications.sender_id.clone(),
            forward_clicks: config.notifications.forward_clicks,
        },
        Arc::new(link),
        alerts,
    );
    if let Err(e) = bridge.start() {
        tracing::warn!(error = %e, "Failed to request notification service start");
    }

    NotificationServices {
        inbox,
        subscription: subscribe(bridge, rx),
    }
}
