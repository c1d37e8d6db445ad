//! # projboard-core
//!
//! Core domain model for the projboard view-model engine.
//!
//! This crate provides:
//! - Domain types: `Project`, `Task`, `Assignee`, `Comment`
//! - Status and priority enums with their display conventions
//! - The `TimeWindow` layout reference frame
//! - Snapshot decoding for the REST wire shape (`snapshot` module)
//!
//! The model is a read-only snapshot: the engine never mutates stored
//! tasks, it only derives view-models from the collection it is handed.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use projboard_core::{Priority, Project, Task, TaskStatus};
//!
//! let mut project = Project::new(
//!     "Website relaunch",
//!     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
//! );
//! project.tasks.push(
//!     Task::new("t-1")
//!         .title("Design mockups")
//!         .priority(Priority::High)
//!         .starts(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap())
//!         .due(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
//! );
//! project.tasks.push(
//!     Task::new("t-2")
//!         .title("Implement landing page")
//!         .depends_on("t-1")
//!         .status(TaskStatus::InProgress),
//! );
//!
//! assert_eq!(project.get_task("t-2").unwrap().dependencies, vec!["t-1"]);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod snapshot;

pub use snapshot::{SnapshotError, TaskRecord};

// ============================================================================
// Type Aliases
// ============================================================================

/// Unique identifier for a task (opaque, unique within a project)
pub type TaskId = String;

/// Unique identifier for an employee
pub type EmployeeId = String;

// ============================================================================
// Status & Priority
// ============================================================================

/// Workflow status of a task.
///
/// The `blocked` flag on [`Task`] overlays any non-terminal status and is
/// tracked independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Get the display string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    /// Completed and cancelled tasks take no further work
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority as used by the list and board views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    /// Extension used by some board views on top of the base low/medium/high
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Assignee & Comment
// ============================================================================

/// Normalized employee reference.
///
/// The wire format delivers assignees either as a bare id string or as a
/// populated object; both are normalized into this single shape at the
/// snapshot boundary so downstream code never branches on representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Employee identifier
    pub id: EmployeeId,
    /// Display name, when the reference was populated
    pub name: Option<String>,
}

impl Assignee {
    /// Create an assignee from a bare identifier
    pub fn from_id(id: impl Into<EmployeeId>) -> Self {
        Self { id: id.into(), name: None }
    }

    /// Create a fully populated assignee
    pub fn named(id: impl Into<EmployeeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Display label; unresolved references degrade to a placeholder
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Employee #{}", self.id),
        }
    }
}

/// A comment attached to a task
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Task
// ============================================================================

/// A single unit of work within a project.
///
/// Dates are optional: records with absent or unparsable dates survive the
/// snapshot boundary and are simply excluded from timeline layout.
/// Dependencies are plain id references resolved by lookup at view time;
/// the graph is not validated for cycles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the project
    pub id: TaskId,
    /// Short title shown in lists and bars
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Workflow status
    pub status: TaskStatus,
    /// Explicit blocked flag, independent of dependency completion state
    pub blocked: bool,
    /// Priority
    pub priority: Priority,
    /// Planned start date
    pub start_date: Option<NaiveDate>,
    /// Planned due date (expected >= start_date, not enforced on write)
    pub due_date: Option<NaiveDate>,
    /// Normalized assignee reference
    pub assigned_to: Option<Assignee>,
    /// Ids of tasks this task depends on (same project)
    pub dependencies: Vec<TaskId>,
    /// Allocated budget
    pub budget: Decimal,
    /// Amount spent so far (not constrained to <= budget)
    pub spent: Decimal,
    /// Completion percentage as stored; read through `effective_progress`
    pub progress: u8,
    /// Free-text labels
    pub tags: Vec<String>,
    /// Ordered comment thread
    pub comments: Vec<Comment>,
}

impl Task {
    /// Create a new task with the given id
    pub fn new(id: impl Into<TaskId>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            description: String::new(),
            status: TaskStatus::default(),
            blocked: false,
            priority: Priority::default(),
            start_date: None,
            due_date: None,
            assigned_to: None,
            dependencies: Vec::new(),
            budget: Decimal::ZERO,
            spent: Decimal::ZERO,
            progress: 0,
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Set the task title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the workflow status
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the blocked flag
    pub fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Set the priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the planned start date
    pub fn starts(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the planned due date
    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Assign to an employee
    pub fn assign(mut self, assignee: Assignee) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    /// Add a dependency on another task
    pub fn depends_on(mut self, task_id: impl Into<TaskId>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Set the allocated budget
    pub fn budget(mut self, budget: Decimal) -> Self {
        self.budget = budget;
        self
    }

    /// Set the spent amount
    pub fn spent(mut self, spent: Decimal) -> Self {
        self.spent = spent;
        self
    }

    /// Set the completion percentage
    pub fn progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Completion percentage clamped to 0-100.
    ///
    /// `progress` is stored as delivered and is independent of `status`
    /// (a completed task is not forced to 100); every read goes through
    /// this clamp.
    pub fn effective_progress(&self) -> u8 {
        self.progress.min(100)
    }

    /// The task's `[start, due]` interval, when both dates are known
    pub fn window(&self) -> Option<TimeWindow> {
        match (self.start_date, self.due_date) {
            (Some(start), Some(end)) => Some(TimeWindow { start, end }),
            _ => None,
        }
    }

    /// Display label for the assignee column
    pub fn assignee_label(&self) -> Option<String> {
        self.assigned_to.as_ref().map(Assignee::label)
    }
}

// ============================================================================
// Time Window
// ============================================================================

/// A `[start, end]` date interval used as a layout reference frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Elapsed days between the window boundaries
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Inclusive calendar-day count of the window grid
    pub fn grid_days(&self) -> i64 {
        self.span_days() + 1
    }

    /// Clamp a date into the window
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.max(self.start).min(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

// ============================================================================
// Project
// ============================================================================

/// A project owning a task collection and the timeline window all task
/// bars are mapped against.
///
/// Project-level `budget`/`spent` are tracked independently of the task
/// roll-up; both exist side by side and the views decide which to show.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Project start date
    pub start: NaiveDate,
    /// Project end date
    pub end: NaiveDate,
    /// Project-level budget (independent of the task roll-up)
    pub budget: Decimal,
    /// Project-level spend (independent of the task roll-up)
    pub spent: Decimal,
    /// Owned task collection; tasks live and die with the project
    pub tasks: Vec<Task>,
    /// Team members, informational only to the view layer
    pub team: Vec<Assignee>,
}

impl Project {
    /// Create a new project with the given name and timeline window
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            start,
            end,
            budget: Decimal::ZERO,
            spent: Decimal::ZERO,
            tasks: Vec::new(),
            team: Vec::new(),
        }
    }

    /// Get a task by id
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The layout reference frame for this project's timeline
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start,
            end: self.end,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
