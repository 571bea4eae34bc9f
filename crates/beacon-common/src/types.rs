use serde::{Deserialize, Serialize};

/// Name and version of the host browser, as shown to peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    pub name: String,
    pub version: String,
}

impl AppIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// `"<name> <version>"`, used as the large image caption.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// The browser tab currently in focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub url: String,
    /// True while the tab is producing audio output.
    #[serde(default)]
    pub audible: bool,
}
