use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config location unavailable: {0}")]
    Location(String),

    #[error("failed to write config {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("notification error: {0}")]
    NotificationError(String),
}

/// Failures talking to the external presence service.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("presence service unavailable: {0}")]
    Unavailable(String),

    #[error("presence handshake timed out after {0:?}")]
    HandshakeTimeout(Duration),

    #[error("presence connection is not ready")]
    NotReady,

    #[error("failed to transmit activity: {0}")]
    Transmit(String),
}

/// Failures reading the host application's state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("application state has not been initialized")]
    NotInitialized,

    #[error("no tab is selected")]
    NoSelectedTab,

    #[error("invalid tab url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("tab url '{0}' has no host")]
    MissingHost(String),

    #[error("application state unreadable: {0}")]
    Unreadable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("notification service already started")]
    AlreadyStarted,

    #[error("host link closed")]
    LinkClosed,

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Presence(#[from] PresenceError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
