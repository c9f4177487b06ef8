//! Loader policy settings

use serde::{Deserialize, Serialize};

/// Host policy consulted by the coordinator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// When enabled, a new batch starts directly in visible mode; otherwise
    /// it starts silent and may escalate later. Read once at batch creation.
    pub auto_reload_enabled: bool,
}

impl LoaderSettings {
    /// Settings with auto-reload enabled.
    pub fn with_auto_reload() -> Self {
        Self {
            auto_reload_enabled: true,
        }
    }
}
