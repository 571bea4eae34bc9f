//! The bridge's event pump.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::bridge::NotificationBridge;
use crate::types::BridgeInput;

/// Running pump. Dropping it stops the pump without waiting.
pub struct Subscription {
    cancel: CancellationToken,
    task: Option<JoinHandle<usize>>,
}

/// Start feeding `inbox` into `bridge`, one input at a time in arrival order.
pub fn subscribe(
    mut bridge: NotificationBridge,
    mut inbox: mpsc::UnboundedReceiver<BridgeInput>,
) -> Subscription {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let task = tokio::spawn(async move {
        let mut handled = 0usize;
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                input = inbox.recv() => {
                    let Some(input) = input else { break };
                    match input {
                        BridgeInput::Event(event) => {
                            let kind = event.kind();
                            let disposition = bridge.handle(event);
                            debug!(kind, ?disposition, "Notification event handled");
                        }
                        BridgeInput::AlertClicked(id) => {
                            bridge.on_alert_clicked(&id);
                        }
                    }
                    handled += 1;
                }
            }
        }
        handled
    });

    Subscription {
        cancel,
        task: Some(task),
    }
}

impl Subscription {
    /// Stop the pump and wait for it. Returns how many inputs were handled;
    /// calls after the first return 0.
    pub async fn dispose(&mut self) -> usize {
        let Some(task) = self.task.take() else {
            return 0;
        };
        self.cancel.cancel();
        match task.await {
            Ok(handled) => handled,
            Err(e) => {
                error!(error = %e, "Notification pump failed");
                0
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeConfig;
    use crate::ports::{AlertSurface, ServiceSignals};
    use crate::types::{Alert, NotificationEvent};
    use beacon_common::{AlertId, BridgeError};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        tokens: Mutex<Vec<String>>,
        alerts: Mutex<Vec<Alert>>,
    }

    impl ServiceSignals for Recorder {
        fn start_service(&self, _sender_id: &str) -> Result<(), BridgeError> {
            Ok(())
        }

        fn fcm_ready(&self, token: &str) -> Result<(), BridgeError> {
            self.tokens.lock().unwrap().push(token.into());
            Ok(())
        }

        fn notification_clicked(&self, _id: &AlertId, _from: &str) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    impl AlertSurface for Recorder {
        fn show(&self, alert: &Alert) -> Result<(), BridgeError> {
            self.alerts.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    fn bridge(recorder: &Arc<Recorder>) -> NotificationBridge {
        NotificationBridge::new(
            BridgeConfig {
                sender_id: "1".into(),
                forward_clicks: true,
            },
            recorder.clone(),
            recorder.clone(),
        )
    }

    fn started(token: &str) -> BridgeInput {
        BridgeInput::Event(NotificationEvent::ServiceStarted {
            token: token.into(),
        })
    }

    #[tokio::test]
    async fn handles_inputs_in_order_until_closed() {
        let recorder = Arc::new(Recorder::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let mut sub = subscribe(bridge(&recorder), rx);

        tx.send(started("a")).unwrap();
        tx.send(started("b")).unwrap();
        tx.send(BridgeInput::AlertClicked(AlertId::new())).unwrap();
        drop(tx);

        // Channel closed: the pump drains and stops on its own.
        while !sub.task.as_ref().unwrap().is_finished() {
            tokio::task::yield_now().await;
        }
        assert_eq!(sub.dispose().await, 3);
        assert_eq!(*recorder.tokens.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn dispose_stops_the_pump_and_is_idempotent() {
        let recorder = Arc::new(Recorder::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let mut sub = subscribe(bridge(&recorder), rx);

        tx.send(started("a")).unwrap();
        tokio::task::yield_now().await;

        assert_eq!(sub.dispose().await, 1);
        assert_eq!(sub.dispose().await, 0);

        // Nothing is handled after disposal.
        let _ = tx.send(started("late"));
        tokio::task::yield_now().await;
        assert_eq!(*recorder.tokens.lock().unwrap(), vec!["a"]);
    }
}
