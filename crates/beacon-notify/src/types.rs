//! Push-notification event model.

use std::collections::BTreeMap;

use beacon_common::AlertId;
use serde::{Deserialize, Serialize};

/// A signal raised by the background delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal")]
pub enum NotificationEvent {
    ServiceStarted { token: String },
    ServiceError { error: String },
    TokenUpdated { token: String },
    MessageReceived { payload: NotificationPayload },
}

impl NotificationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationEvent::ServiceStarted { .. } => "ServiceStarted",
            NotificationEvent::ServiceError { .. } => "ServiceError",
            NotificationEvent::TokenUpdated { .. } => "TokenUpdated",
            NotificationEvent::MessageReceived { .. } => "MessageReceived",
        }
    }
}

/// A delivered push message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl NotificationPayload {
    /// Title and body when this message should be shown to the user.
    ///
    /// A non-empty body is what makes a message visible. A missing title
    /// is rendered as empty.
    pub fn visible_content(&self) -> Option<(&str, &str)> {
        let content = self.notification.as_ref()?;
        let body = content.body.as_deref().filter(|b| !b.is_empty())?;
        Some((content.title.as_deref().unwrap_or_default(), body))
    }
}

/// Lifecycle of the delivery channel as observed by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Uninitialized,
    Starting,
    Started,
    Receiving,
    Erred,
}

/// A visible notification handed to the alert surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub from: String,
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn new(from: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: AlertId::new(),
            from: from.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// What the bridge did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The registration token was forwarded to the host.
    Forwarded { token: String },
    /// Logged with no further effect.
    Logged,
    /// Materialized as a visible alert.
    Alerted(Alert),
    /// Data-only message; nothing shown.
    Silent { data: BTreeMap<String, String> },
}

/// Input to the bridge's event pump, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeInput {
    Event(NotificationEvent),
    AlertClicked(AlertId),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> NotificationPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn body_makes_a_message_visible() {
        let p = payload(r#"{"from":"42","notification":{"title":"T","body":"B"}}"#);
        assert_eq!(p.visible_content(), Some(("T", "B")));
    }

    #[test]
    fn data_only_message_is_silent() {
        let p = payload(r#"{"from":"42","data":{"k":"v"}}"#);
        assert_eq!(p.visible_content(), None);
        assert_eq!(p.data.unwrap()["k"], "v");
    }

    #[test]
    fn empty_body_is_silent() {
        let p = payload(r#"{"from":"42","notification":{"title":"T","body":""}}"#);
        assert_eq!(p.visible_content(), None);
    }

    #[test]
    fn missing_title_renders_empty() {
        let p = payload(r#"{"from":"42","notification":{"body":"B"}}"#);
        assert_eq!(p.visible_content(), Some(("", "B")));
    }

    #[test]
    fn events_are_tagged_by_signal() {
        let event: NotificationEvent =
            serde_json::from_str(r#"{"signal":"ServiceStarted","token":"abc"}"#).unwrap();
        assert_eq!(
            event,
            NotificationEvent::ServiceStarted {
                token: "abc".into()
            }
        );

        let event: NotificationEvent = serde_json::from_str(
            r#"{"signal":"MessageReceived","payload":{"from":"42","data":{"k":"v"}}}"#,
        )
        .unwrap();
        assert_eq!(event.kind(), "MessageReceived");
    }
}
