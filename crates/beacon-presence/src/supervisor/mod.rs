//! Owns the presence connection and drives periodic publishing.
//!
//! The supervisor performs exactly one login. Snapshots are only sent once
//! the connection is `Ready`; a failed login leaves presence `Disabled`
//! for the rest of the session.

mod run_loop;
mod types;

pub use types::{ConnectionState, SupervisorConfig};

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::app_state::AppStateSource;
use crate::publisher::Publisher;
use crate::transport::PresenceTransport;
use run_loop::Session;

/// A configured, not yet started, presence connection.
pub struct PresenceSupervisor<T> {
    session: Session<T>,
    state_rx: watch::Receiver<ConnectionState>,
}

impl<T: PresenceTransport + 'static> PresenceSupervisor<T> {
    /// Wire up the supervisor. Nothing touches the transport until
    /// [`start`](Self::start).
    pub fn initialize(
        transport: T,
        publisher: Publisher,
        source: Arc<dyn AppStateSource>,
        config: SupervisorConfig,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);
        Self {
            session: Session {
                transport,
                publisher,
                source,
                config,
                state_tx,
                cancel: CancellationToken::new(),
            },
            state_rx,
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Spawn the login attempt and publish loop onto the current runtime.
    pub fn start(self) -> PresenceHandle {
        let cancel = self.session.cancel.clone();
        let task = tokio::spawn(self.session.run());
        PresenceHandle {
            state_rx: self.state_rx,
            cancel,
            task: Some(task),
        }
    }
}

/// Handle to a running supervisor.
///
/// Dropping the handle cancels the supervisor; its teardown then runs in
/// the background. Call [`shutdown`](Self::shutdown) to wait for it.
pub struct PresenceHandle {
    state_rx: watch::Receiver<ConnectionState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PresenceHandle {
    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe_state(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }

    /// Stop publishing, clear the activity, and close the connection.
    ///
    /// Safe to call more than once; later calls return immediately.
    pub async fn shutdown(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        self.cancel.cancel();
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Presence supervisor task failed");
        }
    }
}

impl Drop for PresenceHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
