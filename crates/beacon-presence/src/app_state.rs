//! Read-only view of the host browser's state.

use std::sync::{Arc, RwLock};

use beacon_common::{AppIdentity, StateError, TabInfo};
use tracing::warn;

/// Source of the application state that snapshots are computed from.
pub trait AppStateSource: Send + Sync {
    /// The currently focused tab.
    fn selected_tab(&self) -> Result<TabInfo, StateError>;

    /// Name and version of the host application.
    fn identity(&self) -> AppIdentity;
}

#[derive(Debug)]
struct BrowserState {
    initialized: bool,
    selected: Option<TabInfo>,
    identity: AppIdentity,
}

/// Browser state shared between the host link (writer) and the publisher (reader).
///
/// Cheap to clone; all clones see the same state. Reads before the host
/// has reported any tab state fail with `StateError::NotInitialized`.
#[derive(Debug, Clone)]
pub struct SharedBrowserState {
    inner: Arc<RwLock<BrowserState>>,
}

impl SharedBrowserState {
    pub fn new(identity: AppIdentity) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BrowserState {
                initialized: false,
                selected: None,
                identity,
            })),
        }
    }

    pub fn select_tab(&self, tab: TabInfo) {
        self.update(|state| {
            state.initialized = true;
            state.selected = Some(tab);
        });
    }

    /// Records that no tab is open.
    pub fn clear_tabs(&self) {
        self.update(|state| {
            state.initialized = true;
            state.selected = None;
        });
    }

    pub fn set_identity(&self, identity: AppIdentity) {
        self.update(|state| state.identity = identity);
    }

    fn update(&self, f: impl FnOnce(&mut BrowserState)) {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(e) => warn!("browser state lock poisoned, update dropped: {e}"),
        }
    }
}

impl AppStateSource for SharedBrowserState {
    fn selected_tab(&self) -> Result<TabInfo, StateError> {
        let state = self
            .inner
            .read()
            .map_err(|e| StateError::Unreadable(e.to_string()))?;
        if !state.initialized {
            return Err(StateError::NotInitialized);
        }
        state.selected.clone().ok_or(StateError::NoSelectedTab)
    }

    fn identity(&self) -> AppIdentity {
        match self.inner.read() {
            Ok(state) => state.identity.clone(),
            Err(poisoned) => poisoned.into_inner().identity.clone(),
        }
    }
}

/// Extract the host from a tab URL.
pub fn hostname(raw: &str) -> Result<String, StateError> {
    let parsed = url::Url::parse(raw).map_err(|e| StateError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .ok_or_else(|| StateError::MissingHost(raw.to_string()))
}
