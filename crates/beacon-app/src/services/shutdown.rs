//! Graceful shutdown: clear presence, then stop the notification pump.

use super::Services;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl Services {
    /// Tear down all subsystems. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Presence (stop publishing, clear the activity, disconnect)
    /// 2. Notifications (stop the pump; this drops the bridge's host link)
    pub async fn shutdown(&mut self) {
        if self.presence.is_none() && self.notifications.is_none() {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut presence) = self.presence.take() {
            presence.shutdown().await;
        }

        if let Some(mut notifications) = self.notifications.take() {
            let handled = notifications.subscription.dispose().await;
            tracing::info!(handled, "Notification bridge stopped");
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use beacon_common::BridgeError;
    use beacon_config::BeaconConfig;
    use beacon_notify::{Alert, AlertSurface, NotificationEvent, NotificationPayload};
    use beacon_presence::AppStateSource;

    use crate::host_link::protocol::HostSignal;
    use crate::host_link::{HostLink, HostMessage};
    use crate::services::dispatch::Flow;
    use crate::services::Services;

    #[derive(Default)]
    struct Shown(Mutex<Vec<Alert>>);

    impl AlertSurface for Shown {
        fn show(&self, alert: &Alert) -> Result<(), BridgeError> {
            self.0.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    fn config(notifications: bool) -> BeaconConfig {
        let mut config = BeaconConfig::default();
        config.presence.enabled = false;
        config.notifications.enabled = notifications;
        config
    }

    fn services(notifications: bool) -> (Services, Arc<Shown>, tokio::sync::mpsc::UnboundedReceiver<HostSignal>) {
        let (link, signals) = HostLink::new();
        let shown = Arc::new(Shown::default());
        let surface: Arc<dyn AlertSurface> = shown.clone();
        let services = Services::start_with(&config(notifications), link, move |_| surface);
        (services, shown, signals)
    }

    #[tokio::test]
    async fn shutdown_with_nothing_enabled_is_a_no_op() {
        let (mut services, _, _) = services(false);
        assert!(!services.presence_enabled());
        assert!(!services.notifications_enabled());
        services.shutdown().await;
        services.shutdown().await;
    }

    #[tokio::test]
    async fn boot_requests_service_start_once() {
        let (mut services, _, mut signals) = services(true);
        services.shutdown().await;

        assert_eq!(
            signals.recv().await,
            Some(HostSignal::StartService {
                sender_id: BeaconConfig::default().notifications.sender_id
            })
        );
        // The bridge owned the last link; it is gone after shutdown.
        assert_eq!(signals.recv().await, None);
    }

    #[tokio::test]
    async fn dispatch_routes_messages_then_shutdown_drains() {
        let (mut services, shown, mut signals) = services(true);

        assert_eq!(
            services.dispatch(HostMessage::TabSelected {
                url: "https://example.com".into(),
                audible: true,
            }),
            Flow::Continue
        );
        let tab = services.browser.selected_tab().unwrap();
        assert_eq!(tab.url, "https://example.com");
        assert!(tab.audible);

        services.dispatch(HostMessage::Push(NotificationEvent::ServiceStarted {
            token: "tok".into(),
        }));
        services.dispatch(HostMessage::Push(NotificationEvent::MessageReceived {
            payload: serde_json::from_str(r#"{"from":"42","notification":{"title":"T","body":"B"}}"#)
                .unwrap(),
        }));
        services.dispatch(HostMessage::Push(NotificationEvent::MessageReceived {
            payload: NotificationPayload {
                from: "42".into(),
                ..Default::default()
            },
        }));
        assert_eq!(services.dispatch(HostMessage::Shutdown), Flow::Stop);

        // Let the pump drain before stopping it.
        tokio::task::yield_now().await;
        services.shutdown().await;
        services.shutdown().await;

        let shown = shown.0.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!((shown[0].title.as_str(), shown[0].body.as_str()), ("T", "B"));

        let mut sent = Vec::new();
        while let Some(signal) = signals.recv().await {
            sent.push(signal);
        }
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[1],
            HostSignal::FcmReady {
                token: "tok".into()
            }
        );
    }

    #[tokio::test]
    async fn push_is_dropped_when_notifications_disabled() {
        let (mut services, shown, _) = services(false);
        let flow = services.dispatch(HostMessage::Push(NotificationEvent::ServiceError {
            error: "boom".into(),
        }));
        assert_eq!(flow, Flow::Continue);
        services.shutdown().await;
        assert!(shown.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn tabs_cleared_and_identity_update_browser_state() {
        let (mut services, _, _) = services(false);
        services.dispatch(HostMessage::TabsCleared);
        services.dispatch(HostMessage::Identity {
            name: "Beacon Nightly".into(),
            version: "9.9.9".into(),
        });
        assert!(services.browser.selected_tab().is_err());
        assert_eq!(services.browser.identity().label(), "Beacon Nightly 9.9.9");
        services.shutdown().await;
    }
}
