//! Host message dispatch: routes each message to the subsystem that owns it.

use std::future::Future;

use beacon_common::{AppIdentity, TabInfo};
use beacon_notify::BridgeInput;
use tokio::io::AsyncBufRead;

use super::Services;
use crate::host_link::{HostMessage, HostReader};

/// Whether the host loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Services {
    /// Dispatch host messages until the host asks to stop, its input ends,
    /// or `interrupt` resolves.
    pub async fn serve<R, F>(&self, reader: &mut HostReader<R>, interrupt: F)
    where
        R: AsyncBufRead + Unpin,
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        loop {
            tokio::select! {
                msg = reader.next_message() => match msg {
                    Some(msg) => {
                        if self.dispatch(msg) == Flow::Stop {
                            break;
                        }
                    }
                    None => {
                        tracing::info!("Host closed stdin");
                        break;
                    }
                },
                () = &mut interrupt => {
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }
    }

    pub fn dispatch(&self, msg: HostMessage) -> Flow {
        match msg {
            HostMessage::TabSelected { url, audible } => {
                self.browser.select_tab(TabInfo { url, audible });
            }
            HostMessage::TabsCleared => self.browser.clear_tabs(),
            HostMessage::Identity { name, version } => {
                tracing::info!("Host identified as {name} {version}");
                self.browser.set_identity(AppIdentity::new(name, version));
            }
            HostMessage::Push(event) => self.forward(BridgeInput::Event(event)),
            HostMessage::AlertClicked { id } => self.forward(BridgeInput::AlertClicked(id)),
            HostMessage::Shutdown => {
                tracing::info!("Shutdown requested by host");
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    fn forward(&self, input: BridgeInput) {
        let Some(notifications) = &self.notifications else {
            tracing::debug!(?input, "Notifications disabled, dropping input");
            return;
        };
        if notifications.inbox.send(input).is_err() {
            tracing::warn!("Notification bridge stopped, dropping input");
        }
    }
}
