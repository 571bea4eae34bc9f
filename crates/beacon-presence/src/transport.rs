//! Connection to an external presence service.

use async_trait::async_trait;
use beacon_common::PresenceError;

use crate::activity::ActivitySnapshot;

/// A long-lived connection to a presence service.
///
/// Owned exclusively by the supervisor, which guarantees `set_activity`
/// and `clear_activity` are only called after a successful `login`.
#[async_trait]
pub trait PresenceTransport: Send {
    /// Returns the name of this transport (for logging).
    fn name(&self) -> &'static str;

    /// Authenticate and wait for the service to become ready.
    async fn login(&mut self) -> Result<(), PresenceError>;

    /// Replace the displayed activity.
    async fn set_activity(&mut self, snapshot: &ActivitySnapshot) -> Result<(), PresenceError>;

    /// Remove the displayed activity.
    async fn clear_activity(&mut self) -> Result<(), PresenceError>;

    /// Close the connection. Called exactly once, at shutdown.
    async fn destroy(&mut self);
}
