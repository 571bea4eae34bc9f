//! Decides what happens to each push-notification event.

use std::collections::VecDeque;
use std::sync::Arc;

use beacon_common::{AlertId, BridgeError};
use tracing::{debug, info, warn};

use crate::ports::{AlertSurface, ServiceSignals};
use crate::types::{Alert, ChannelState, Disposition, NotificationEvent};

/// Alerts remembered for click correlation. Older ones are forgotten.
const MAX_TRACKED_ALERTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub sender_id: String,
    pub forward_clicks: bool,
}

/// Relays delivery-service events to the host and the alert surface.
pub struct NotificationBridge {
    config: BridgeConfig,
    signals: Arc<dyn ServiceSignals>,
    alerts: Arc<dyn AlertSurface>,
    state: ChannelState,
    start_requested: bool,
    recent: VecDeque<Alert>,
}

impl NotificationBridge {
    pub fn new(
        config: BridgeConfig,
        signals: Arc<dyn ServiceSignals>,
        alerts: Arc<dyn AlertSurface>,
    ) -> Self {
        Self {
            config,
            signals,
            alerts,
            state: ChannelState::Uninitialized,
            start_requested: false,
            recent: VecDeque::new(),
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Request the delivery service start. Only the first call sends
    /// anything; later calls return `AlreadyStarted`.
    pub fn start(&mut self) -> Result<(), BridgeError> {
        if self.start_requested {
            return Err(BridgeError::AlreadyStarted);
        }
        self.start_requested = true;
        self.state = ChannelState::Starting;
        info!(sender_id = %self.config.sender_id, "Requesting notification service start");
        self.signals.start_service(&self.config.sender_id)
    }

    pub fn handle(&mut self, event: NotificationEvent) -> Disposition {
        match event {
            NotificationEvent::ServiceStarted { token } => {
                info!("Notification service started");
                self.state = ChannelState::Started;
                if let Err(e) = self.signals.fcm_ready(&token) {
                    warn!(error = %e, "Failed to forward registration token");
                }
                Disposition::Forwarded { token }
            }
            NotificationEvent::ServiceError { error } => {
                warn!(error = %error, "Notification service error");
                self.state = ChannelState::Erred;
                Disposition::Logged
            }
            NotificationEvent::TokenUpdated { token } => {
                info!(token_len = token.len(), "Notification token updated");
                Disposition::Logged
            }
            NotificationEvent::MessageReceived { payload } => {
                self.state = ChannelState::Receiving;
                let visible = payload
                    .visible_content()
                    .map(|(title, body)| (title.to_string(), body.to_string()));
                match visible {
                    Some((title, body)) => {
                        let alert = Alert::new(payload.from, title, body);
                        info!(id = %alert.id, from = %alert.from, "Showing notification");
                        if let Err(e) = self.alerts.show(&alert) {
                            warn!(error = %e, "Failed to show notification");
                        }
                        self.remember(alert.clone());
                        Disposition::Alerted(alert)
                    }
                    None => {
                        let data = payload.data.unwrap_or_default();
                        info!(from = %payload.from, ?data, "Received data-only notification");
                        Disposition::Silent { data }
                    }
                }
            }
        }
    }

    /// The user activated a previously shown alert.
    pub fn on_alert_clicked(&mut self, id: &AlertId) -> Option<Alert> {
        let Some(pos) = self.recent.iter().position(|a| &a.id == id) else {
            warn!(id = %id, "Click for unknown notification ignored");
            return None;
        };
        let alert = self.recent.remove(pos)?;
        info!(id = %alert.id, from = %alert.from, "Notification clicked");

        if self.config.forward_clicks {
            if let Err(e) = self.signals.notification_clicked(&alert.id, &alert.from) {
                warn!(error = %e, "Failed to forward notification click");
            }
        } else {
            debug!("Click forwarding disabled");
        }
        Some(alert)
    }

    fn remember(&mut self, alert: Alert) {
        if self.recent.len() == MAX_TRACKED_ALERTS {
            self.recent.pop_front();
        }
        self.recent.push_back(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NotificationContent, NotificationPayload};
    use beacon_common::PlatformError;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Start(String),
        Ready(String),
        Clicked(AlertId, String),
    }

    #[derive(Default)]
    struct FakeSignals {
        sent: Mutex<Vec<Sent>>,
    }

    impl ServiceSignals for FakeSignals {
        fn start_service(&self, sender_id: &str) -> Result<(), BridgeError> {
            self.sent.lock().unwrap().push(Sent::Start(sender_id.into()));
            Ok(())
        }

        fn fcm_ready(&self, token: &str) -> Result<(), BridgeError> {
            self.sent.lock().unwrap().push(Sent::Ready(token.into()));
            Ok(())
        }

        fn notification_clicked(&self, id: &AlertId, from: &str) -> Result<(), BridgeError> {
            self.sent
                .lock()
                .unwrap()
                .push(Sent::Clicked(id.clone(), from.into()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        shown: Mutex<Vec<Alert>>,
        fail: bool,
    }

    impl AlertSurface for FakeSurface {
        fn show(&self, alert: &Alert) -> Result<(), BridgeError> {
            if self.fail {
                return Err(PlatformError::NotificationError("no daemon".into()).into());
            }
            self.shown.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    fn bridge_with(
        forward_clicks: bool,
        surface: FakeSurface,
    ) -> (NotificationBridge, Arc<FakeSignals>, Arc<FakeSurface>) {
        let signals = Arc::new(FakeSignals::default());
        let surface = Arc::new(surface);
        let bridge = NotificationBridge::new(
            BridgeConfig {
                sender_id: "424242424242".into(),
                forward_clicks,
            },
            signals.clone(),
            surface.clone(),
        );
        (bridge, signals, surface)
    }

    fn bridge() -> (NotificationBridge, Arc<FakeSignals>, Arc<FakeSurface>) {
        bridge_with(true, FakeSurface::default())
    }

    fn message(title: Option<&str>, body: Option<&str>) -> NotificationEvent {
        NotificationEvent::MessageReceived {
            payload: NotificationPayload {
                from: "424242424242".into(),
                notification: Some(NotificationContent {
                    title: title.map(String::from),
                    body: body.map(String::from),
                }),
                data: None,
            },
        }
    }

    #[test]
    fn start_is_sent_exactly_once() {
        let (mut bridge, signals, _) = bridge();
        assert_eq!(bridge.state(), ChannelState::Uninitialized);

        bridge.start().unwrap();
        assert!(matches!(bridge.start(), Err(BridgeError::AlreadyStarted)));

        assert_eq!(bridge.state(), ChannelState::Starting);
        assert_eq!(
            *signals.sent.lock().unwrap(),
            vec![Sent::Start("424242424242".into())]
        );
    }

    #[test]
    fn service_started_forwards_token() {
        let (mut bridge, signals, _) = bridge();
        bridge.start().unwrap();

        let disposition = bridge.handle(NotificationEvent::ServiceStarted {
            token: "tok-1".into(),
        });

        assert_eq!(
            disposition,
            Disposition::Forwarded {
                token: "tok-1".into()
            }
        );
        assert_eq!(bridge.state(), ChannelState::Started);
        assert_eq!(signals.sent.lock().unwrap()[1], Sent::Ready("tok-1".into()));
    }

    #[test]
    fn service_error_and_token_update_are_logged_only() {
        let (mut bridge, signals, surface) = bridge();

        let d = bridge.handle(NotificationEvent::TokenUpdated {
            token: "tok-2".into(),
        });
        assert_eq!(d, Disposition::Logged);

        let d = bridge.handle(NotificationEvent::ServiceError {
            error: "SERVICE_NOT_AVAILABLE".into(),
        });
        assert_eq!(d, Disposition::Logged);
        assert_eq!(bridge.state(), ChannelState::Erred);

        assert!(signals.sent.lock().unwrap().is_empty());
        assert!(surface.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn visible_message_shows_one_alert() {
        let (mut bridge, _, surface) = bridge();

        let d = bridge.handle(message(Some("T"), Some("B")));

        let shown = surface.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "T");
        assert_eq!(shown[0].body, "B");
        assert_eq!(d, Disposition::Alerted(shown[0].clone()));
        assert_eq!(bridge.state(), ChannelState::Receiving);
    }

    #[test]
    fn data_only_message_shows_nothing() {
        let (mut bridge, _, surface) = bridge();
        let data = BTreeMap::from([("k".to_string(), "v".to_string())]);

        let d = bridge.handle(NotificationEvent::MessageReceived {
            payload: NotificationPayload {
                from: "424242424242".into(),
                notification: None,
                data: Some(data.clone()),
            },
        });

        assert_eq!(d, Disposition::Silent { data });
        assert!(surface.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_body_is_silent() {
        let (mut bridge, _, surface) = bridge();
        let d = bridge.handle(message(Some("T"), None));
        assert_eq!(
            d,
            Disposition::Silent {
                data: BTreeMap::new()
            }
        );
        assert!(surface.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn surface_failure_keeps_the_decision() {
        let (mut bridge, _, _) = bridge_with(
            true,
            FakeSurface {
                fail: true,
                ..Default::default()
            },
        );
        let d = bridge.handle(message(Some("T"), Some("B")));
        assert!(matches!(d, Disposition::Alerted(_)));
    }

    #[test]
    fn click_is_forwarded_once() {
        let (mut bridge, signals, _) = bridge();
        let Disposition::Alerted(alert) = bridge.handle(message(Some("T"), Some("B"))) else {
            panic!("expected an alert");
        };

        let clicked = bridge.on_alert_clicked(&alert.id).unwrap();
        assert_eq!(clicked, alert);
        assert!(bridge.on_alert_clicked(&alert.id).is_none());

        assert_eq!(
            *signals.sent.lock().unwrap(),
            vec![Sent::Clicked(alert.id.clone(), "424242424242".into())]
        );
    }

    #[test]
    fn click_forwarding_can_be_disabled() {
        let (mut bridge, signals, _) = bridge_with(false, FakeSurface::default());
        let Disposition::Alerted(alert) = bridge.handle(message(None, Some("B"))) else {
            panic!("expected an alert");
        };
        assert_eq!(alert.title, "");

        assert!(bridge.on_alert_clicked(&alert.id).is_some());
        assert!(signals.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_click_is_ignored() {
        let (mut bridge, signals, _) = bridge();
        assert!(bridge.on_alert_clicked(&AlertId::new()).is_none());
        assert!(signals.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn only_recent_alerts_are_tracked() {
        let (mut bridge, _, _) = bridge();
        let Disposition::Alerted(first) = bridge.handle(message(Some("T"), Some("0"))) else {
            panic!("expected an alert");
        };
        for i in 0..MAX_TRACKED_ALERTS {
            bridge.handle(message(Some("T"), Some(&i.to_string())));
        }
        assert!(bridge.on_alert_clicked(&first.id).is_none());
    }
}
