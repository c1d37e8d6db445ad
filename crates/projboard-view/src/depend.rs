//! Dependency resolution, blocking, and overdue classification.
//!
//! Blocking is flag-driven: a task is blocked when its explicit `blocked`
//! flag is set. Dependency lists are display-only in the default policy;
//! deriving blocked state from incomplete dependencies is an explicit
//! opt-in, never a silent behavior change.

use std::collections::HashMap;

use chrono::NaiveDate;
use projboard_core::{Task, TaskStatus};

/// How blocked state is decided
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockingPolicy {
    /// Only the explicit `blocked` flag counts (source behavior)
    #[default]
    ExplicitFlag,
    /// Opt-in extension: the flag, or any incomplete dependency
    WithDependencies,
}

/// Whether a task is overdue at the given date.
///
/// Requires a due date; the exact due date is not overdue, one day after
/// is. Completed tasks are never overdue regardless of dates.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    match task.due_date {
        Some(due) => today > due && task.status != TaskStatus::Completed,
        None => false,
    }
}

/// Id-keyed lookup over a task snapshot, used to resolve dependency
/// references at view time.
#[derive(Debug)]
pub struct DependencyIndex<'a> {
    by_id: HashMap<&'a str, &'a Task>,
}

impl<'a> DependencyIndex<'a> {
    /// Build an index over the task collection
    pub fn new(tasks: &'a [Task]) -> Self {
        let by_id = tasks.iter().map(|t| (t.id.as_str(), t)).collect();
        Self { by_id }
    }

    /// Look up a task by id
    pub fn get(&self, id: &str) -> Option<&'a Task> {
        self.by_id.get(id).copied()
    }

    /// Whether the task is blocked under the given policy
    pub fn is_blocked(&self, task: &Task, policy: BlockingPolicy) -> bool {
        match policy {
            BlockingPolicy::ExplicitFlag => task.blocked,
            BlockingPolicy::WithDependencies => {
                task.blocked || self.has_incomplete_dependencies(task)
            }
        }
    }

    /// Whether any resolvable dependency of the task is not completed.
    ///
    /// Unresolvable ids never block; references degrade, they don't fail.
    pub fn has_incomplete_dependencies(&self, task: &Task) -> bool {
        task.dependencies
            .iter()
            .filter_map(|id| self.get(id))
            .any(|dep| dep.status != TaskStatus::Completed)
    }

    /// Display labels for the task's dependencies, in declaration order.
    ///
    /// Resolvable ids render as the referenced task's title; unresolvable
    /// ids fall back to `"Task #<id>"`.
    pub fn dependency_labels(&self, task: &Task) -> Vec<String> {
        task.dependencies
            .iter()
            .map(|id| match self.get(id) {
                Some(dep) => dep.title.clone(),
                None => format!("Task #{id}"),
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
