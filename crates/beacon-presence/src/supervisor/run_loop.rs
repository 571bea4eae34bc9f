//! The supervisor task: one login attempt, the publish loop, then teardown.

use std::sync::Arc;

use beacon_common::PresenceError;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::types::{ConnectionState, SupervisorConfig};
use crate::app_state::AppStateSource;
use crate::publisher::{Publisher, SnapshotOutcome};
use crate::transport::PresenceTransport;

pub(super) struct Session<T> {
    pub transport: T,
    pub publisher: Publisher,
    pub source: Arc<dyn AppStateSource>,
    pub config: SupervisorConfig,
    pub state_tx: watch::Sender<ConnectionState>,
    pub cancel: CancellationToken,
}

enum LoginOutcome {
    Ready,
    Failed(PresenceError),
    Cancelled,
}

impl<T: PresenceTransport> Session<T> {
    pub(super) async fn run(mut self) {
        self.set_state(ConnectionState::Connecting);
        info!(transport = self.transport.name(), "Connecting presence service...");

        let ready = match self.login().await {
            LoginOutcome::Ready => {
                info!(transport = self.transport.name(), "Presence service ready");
                self.set_state(ConnectionState::Ready);
                self.publish_until_cancelled().await;
                true
            }
            LoginOutcome::Failed(e) => {
                warn!(
                    transport = self.transport.name(),
                    error = %e,
                    "Presence login failed, presence disabled until restart"
                );
                self.set_state(ConnectionState::Disabled);
                self.cancel.cancelled().await;
                false
            }
            LoginOutcome::Cancelled => false,
        };

        self.teardown(ready).await;
    }

    async fn login(&mut self) -> LoginOutcome {
        let timeout = self.config.handshake_timeout;
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => LoginOutcome::Cancelled,
            result = tokio::time::timeout(timeout, self.transport.login()) => match result {
                Ok(Ok(())) => LoginOutcome::Ready,
                Ok(Err(e)) => LoginOutcome::Failed(e),
                Err(_) => LoginOutcome::Failed(PresenceError::HandshakeTimeout(timeout)),
            },
        }
    }

    async fn publish_until_cancelled(&mut self) {
        // The first tick completes immediately, giving the publish on Ready.
        let mut ticker = tokio::time::interval(self.config.publish_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => self.publish().await,
            }
        }
    }

    async fn publish(&mut self) {
        let outcome = self.publisher.compute_snapshot(self.source.as_ref());
        if let SnapshotOutcome::Fallback { reason, .. } = &outcome {
            debug!(reason = %reason, "Tab state unreadable, publishing idle presence");
        }

        if let Err(e) = self.transport.set_activity(outcome.snapshot()).await {
            debug!(error = %e, "Failed to update presence");
        }
    }

    async fn teardown(&mut self, ready: bool) {
        if ready {
            if let Err(e) = self.transport.clear_activity().await {
                debug!(error = %e, "Failed to clear presence");
            }
        }
        self.transport.destroy().await;
        self.set_state(ConnectionState::Destroyed);
        info!(transport = self.transport.name(), "Presence connection closed");
    }

    fn set_state(&self, state: ConnectionState) {
        self.state_tx.send_replace(state);
    }
}
