pub mod notifications;
pub mod paths;

pub use notifications::{notify, DesktopAlert};
pub use paths::{config_dir, data_dir, ensure_dirs, log_dir};
