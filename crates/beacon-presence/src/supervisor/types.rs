use std::fmt;
use std::time::Duration;

/// Lifecycle of the presence connection.
///
/// `Disconnected -> Connecting -> Ready -> Destroyed` on the happy path.
/// A failed or timed-out login lands in `Disabled` until shutdown; there is
/// no second login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Ready,
    Disabled,
    Destroyed,
}

impl ConnectionState {
    /// True once shutdown has completed.
    pub fn is_terminal(self) -> bool {
        matches!(self, ConnectionState::Destroyed)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Ready => "ready",
            ConnectionState::Disabled => "disabled",
            ConnectionState::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

/// Timing knobs for the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisorConfig {
    pub publish_interval: Duration,
    pub handshake_timeout: Duration,
}

impl SupervisorConfig {
    pub fn new(publish_interval: Duration, handshake_timeout: Duration) -> Self {
        Self {
            publish_interval,
            handshake_timeout,
        }
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            publish_interval: Duration::from_millis(3000),
            handshake_timeout: Duration::from_secs(10),
        }
    }
}
