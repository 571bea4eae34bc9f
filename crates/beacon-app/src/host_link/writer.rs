//! Outbound half of the host link.

use beacon_common::{AlertId, BridgeError};
use beacon_notify::ServiceSignals;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::protocol::HostSignal;

/// Queues signals for the host. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HostLink {
    tx: mpsc::UnboundedSender<HostSignal>,
}

impl HostLink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, signal: HostSignal) -> Result<(), BridgeError> {
        self.tx.send(signal).map_err(|_| BridgeError::LinkClosed)
    }
}

impl ServiceSignals for HostLink {
    fn start_service(&self, sender_id: &str) -> Result<(), BridgeError> {
        self.send(HostSignal::StartService {
            sender_id: sender_id.to_string(),
        })
    }

    fn fcm_ready(&self, token: &str) -> Result<(), BridgeError> {
        self.send(HostSignal::FcmReady {
            token: token.to_string(),
        })
    }

    fn notification_clicked(&self, id: &AlertId, from: &str) -> Result<(), BridgeError> {
        self.send(HostSignal::NotificationClicked {
            id: id.clone(),
            from: from.to_string(),
        })
    }
}

/// Write queued signals to `out`, one JSON object per line.
///
/// Finishes once every [`HostLink`] clone is dropped or the output fails.
pub fn spawn_writer<W>(mut rx: mpsc::UnboundedReceiver<HostSignal>, mut out: W) -> JoinHandle<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(signal) = rx.recv().await {
            let mut line = match serde_json::to_string(&signal) {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode host signal");
                    continue;
                }
            };
            line.push('\n');

            let written = async {
                out.write_all(line.as_bytes()).await?;
                out.flush().await
            };
            if let Err(e) = written.await {
                tracing::warn!(error = %e, "Host link closed, dropping outbound signals");
                break;
            }
        }
    })
}
