//! Compound task filtering.
//!
//! Produces the visible task subset every downstream view works from.
//! Filtering is pure and order-preserving; all active criteria combine
//! with logical AND.

use projboard_core::{EmployeeId, Priority, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Filter criteria as driven by the list/board toolbars.
///
/// `None` fields are inactive ("all"); the default matches everything.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Exact status match
    pub status: Option<TaskStatus>,
    /// Exact priority match
    pub priority: Option<Priority>,
    /// Match against the normalized assignee id
    pub assignee: Option<EmployeeId>,
    /// Case-insensitive substring over title or description
    pub search: Option<String>,
    /// When false, completed tasks are hidden
    pub show_completed: bool,
    /// When false, blocked tasks are hidden
    pub show_blocked: bool,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            priority: None,
            assignee: None,
            search: None,
            show_completed: true,
            show_blocked: true,
        }
    }
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to an exact status
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to an exact priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restrict to tasks assigned to the given employee
    pub fn assignee(mut self, id: impl Into<EmployeeId>) -> Self {
        self.assignee = Some(id.into());
        self
    }

    /// Free-text search over title and description
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Toggle visibility of completed tasks
    pub fn show_completed(mut self, show: bool) -> Self {
        self.show_completed = show;
        self
    }

    /// Toggle visibility of blocked tasks
    pub fn show_blocked(mut self, show: bool) -> Self {
        self.show_blocked = show;
        self
    }

    /// Whether a single task passes every active criterion
    pub fn matches(&self, task: &Task) -> bool {
        if !self.show_completed && task.status == TaskStatus::Completed {
            return false;
        }
        if !self.show_blocked && task.blocked {
            return false;
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(assignee) = &self.assignee {
            match &task.assigned_to {
                Some(a) if &a.id == assignee => {}
                _ => return false,
            }
        }
        if let Some(term) = self.search.as_deref() {
            let term = term.trim().to_lowercase();
            // A term that trims to empty is inactive, not match-nothing
            if !term.is_empty()
                && !task.title.to_lowercase().contains(&term)
                && !task.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving input order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
