//! Rich presence for the Beacon browser.
//!
//! The [`Publisher`] turns browser state into [`ActivitySnapshot`]s and the
//! [`PresenceSupervisor`] sends them to a [`PresenceTransport`] on a fixed
//! interval once the connection is ready.

pub mod activity;
pub mod app_state;
pub mod discord;
pub mod publisher;
pub mod supervisor;
pub mod transport;

pub use activity::{ActivitySnapshot, ImageKey};
pub use app_state::{hostname, AppStateSource, SharedBrowserState};
pub use discord::DiscordTransport;
pub use publisher::{Publisher, SnapshotOutcome};
pub use supervisor::{ConnectionState, PresenceHandle, PresenceSupervisor, SupervisorConfig};
pub use transport::PresenceTransport;
