use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// A stored study project with its full payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
    /// The study document exactly as it was last saved
    pub data: Value,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Listing row: everything but the payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub name: String,
    pub updated_at: OffsetDateTime,
}

/// Result of a save-by-name: the row id and whether a new row was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub id: i32,
    pub created: bool,
}
