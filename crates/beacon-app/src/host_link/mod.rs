//! stdin/stdout link to the browser host.

pub mod protocol;
pub mod reader;
pub mod writer;

pub use protocol::HostMessage;
pub use reader::HostReader;
pub use writer::{spawn_writer, HostLink};
