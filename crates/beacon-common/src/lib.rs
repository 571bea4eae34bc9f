pub mod errors;
pub mod id;
pub mod types;

pub use errors::{
    BeaconError, BridgeError, ConfigError, PlatformError, PresenceError, StateError,
};
pub use id::{new_id, AlertId};
pub use types::{AppIdentity, TabInfo};

pub type Result<T> = std::result::Result<T, BeaconError>;
