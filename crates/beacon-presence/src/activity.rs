//! The activity snapshot sent to the presence service.

use serde::Serialize;

/// Details line while a tab is in focus.
pub const BROWSING_DETAILS: &str = "Browsing on";
/// Details line while the focused tab is playing audio.
pub const LISTENING_DETAILS: &str = "Listening to audio on";
/// State line when no tab can be read.
pub const IDLE_STATE: &str = "Idle";

const ONLINE_SMALL_TEXT: &str = "Browsing a webpage";
const IDLE_SMALL_TEXT: &str = "Idle";

/// Asset keys uploaded for the application on the presence service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKey {
    Logo,
    Online,
    Idle,
}

impl ImageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageKey::Logo => "logo",
            ImageKey::Online => "online",
            ImageKey::Idle => "idle",
        }
    }
}

/// Point-in-time summary of what the user is doing.
///
/// Recomputed on every publish tick. Only `start_timestamp` is carried over
/// between snapshots; it is fixed when the publisher is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    pub details: String,
    pub state: String,
    /// Unix seconds.
    pub start_timestamp: i64,
    pub large_image_key: ImageKey,
    pub large_image_text: String,
    pub small_image_key: ImageKey,
    pub small_image_text: String,
    /// Always false: a browsing session is not joinable.
    pub instance: bool,
}

impl ActivitySnapshot {
    /// Snapshot for a readable, focused tab.
    pub fn browsing(
        hostname: impl Into<String>,
        audible: bool,
        start_timestamp: i64,
        large_image_text: impl Into<String>,
    ) -> Self {
        let details = if audible {
            LISTENING_DETAILS
        } else {
            BROWSING_DETAILS
        };
        Self {
            details: details.to_string(),
            state: hostname.into(),
            start_timestamp,
            large_image_key: ImageKey::Logo,
            large_image_text: large_image_text.into(),
            small_image_key: ImageKey::Online,
            small_image_text: ONLINE_SMALL_TEXT.to_string(),
            instance: false,
        }
    }

    /// The fixed fallback used whenever tab state cannot be read.
    pub fn idle(
        app_name: impl Into<String>,
        start_timestamp: i64,
        large_image_text: impl Into<String>,
    ) -> Self {
        Self {
            details: app_name.into(),
            state: IDLE_STATE.to_string(),
            start_timestamp,
            large_image_key: ImageKey::Logo,
            large_image_text: large_image_text.into(),
            small_image_key: ImageKey::Idle,
            small_image_text: IDLE_SMALL_TEXT.to_string(),
            instance: false,
        }
    }
}
