//! Refresh request identity

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identity of one refresh request instance.
///
/// Identity is minted per [`ScriptRequest::new`] call, not derived from the
/// artifact path: two requests created independently for the same path are
/// distinct, while a `Clone` of a request keeps the id and therefore counts
/// as the same request for queue deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// One unit of work: "refresh the dependency configuration for this script".
///
/// Carries no ordering information beyond arrival order; the batch queue
/// processes requests FIFO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptRequest {
    id: RequestId,
    path: PathBuf,
}

impl ScriptRequest {
    /// Create a request for the script artifact at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            id: RequestId::generate(),
            path: path.into(),
        }
    }

    /// The identity of this request instance.
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// The script artifact this request refers to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
