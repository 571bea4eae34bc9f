//! JSON-lines protocol between the browser host and the bridge.

use beacon_common::AlertId;
use beacon_notify::NotificationEvent;
use serde::{Deserialize, Serialize};

/// Messages read from the host on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostMessage {
    /// Focus moved to a tab.
    TabSelected {
        url: String,
        #[serde(default)]
        audible: bool,
    },
    /// The last tab was closed.
    TabsCleared,
    /// Host application name and version.
    Identity { name: String, version: String },
    /// An event from the background delivery service.
    Push(NotificationEvent),
    /// The user activated an alert the host rendered itself.
    AlertClicked { id: AlertId },
    Shutdown,
}

/// Signals written to the host on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal")]
pub enum HostSignal {
    StartService {
        sender_id: String,
    },
    #[serde(rename = "fcm-ready")]
    FcmReady { token: String },
    #[serde(rename = "notification-clicked")]
    NotificationClicked { id: AlertId, from: String },
}

/// Parse one line from the host. Blank and malformed lines yield `None`.
pub fn parse_line(line: &str) -> Option<HostMessage> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str(line) {
        Ok(msg) => Some(msg),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping malformed host message");
            None
        }
    }
}
