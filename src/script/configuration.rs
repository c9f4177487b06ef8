//! Resolved dependency configuration payload

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dependency configuration produced by the host's resolver for one script.
///
/// The coordination core never interprets this payload; it only forwards it
/// to the configuration sink. The fields cover what script hosts typically
/// resolve; anything else rides along in `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefinedConfiguration {
    /// Binary dependency roots to put on the script's classpath.
    pub classpath: Vec<PathBuf>,

    /// Source roots attached for navigation.
    pub source_roots: Vec<PathBuf>,

    /// Imports implicitly available to the script body.
    pub implicit_imports: Vec<String>,

    /// Resolver-specific extras, passed through untouched.
    pub metadata: Option<serde_json::Value>,
}

impl RefinedConfiguration {
    /// A configuration with only classpath entries, convenient in tests and
    /// simple resolvers.
    pub fn with_classpath(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            classpath: entries.into_iter().collect(),
            ..Self::default()
        }
    }
}
