//! Snapshot decoding for the REST wire shape.
//!
//! The backend delivers task collections as JSON. Two quirks of that shape
//! are normalized here, immediately after fetch, so the rest of the engine
//! never sees them:
//!
//! - `assignedTo` is either a bare employee id string or a populated
//!   object; both become a single [`Assignee`] shape.
//! - Dates arrive as `"YYYY-MM-DD"` or RFC 3339 timestamps. Unparsable
//!   values normalize to `None` rather than failing the whole snapshot;
//!   such tasks are later excluded from timeline layout.
//!
//! Only a structurally malformed document is an error.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{Assignee, Comment, Priority, Task, TaskId, TaskStatus};

/// Snapshot decoding error
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Assignee as delivered on the wire: raw id or populated reference
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AssigneeRecord {
    /// Legacy fallback: bare identifier string
    Id(String),
    /// Populated employee reference
    Populated {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl AssigneeRecord {
    /// Normalize into the single internal shape
    pub fn normalize(self) -> Assignee {
        match self {
            AssigneeRecord::Id(id) => Assignee::from_id(id),
            AssigneeRecord::Populated { id, name } => Assignee { id, name },
        }
    }
}

/// Comment as delivered on the wire
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Task as delivered on the wire
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(alias = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<AssigneeRecord>,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    #[serde(default)]
    pub budget: Decimal,
    #[serde(default)]
    pub spent: Decimal,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<CommentRecord>,
}

impl TaskRecord {
    /// Normalize a wire record into the domain model
    pub fn normalize(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status,
            blocked: self.blocked,
            priority: self.priority,
            start_date: self.start_date.as_deref().and_then(parse_date),
            due_date: self.due_date.as_deref().and_then(parse_date),
            assigned_to: self.assigned_to.map(AssigneeRecord::normalize),
            dependencies: self.dependencies,
            budget: self.budget,
            spent: self.spent,
            progress: self.progress.clamp(0, 100) as u8,
            tags: self.tags,
            comments: self
                .comments
                .into_iter()
                .map(|c| Comment {
                    author: c.author,
                    content: c.content,
                    created_at: c.created_at,
                })
                .collect(),
        }
    }
}

/// Parse a wire date: plain `YYYY-MM-DD` or an RFC 3339 timestamp.
/// Anything else is treated as absent.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Decode a JSON task collection into normalized domain tasks
pub fn tasks_from_json(json: &str) -> Result<Vec<Task>, SnapshotError> {
    let records: Vec<TaskRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(TaskRecord::normalize).collect())
}

// ============================================================================
// Tests
// ============================================================================
