//! Dashboard count aggregates.

use serde::Serialize;

/// Entity counts shown on the association dashboard.
///
/// Each count independently degrades to zero when its query fails.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DirectoryStats {
    pub members: i64,
    pub events: i64,
    pub projects: i64,
}
