//! # projboard-view
//!
//! Pure view-model computation for project task boards.
//!
//! This crate provides:
//! - Timeline bar geometry and axis ticks (`timeline`)
//! - Dependency resolution, blocking and overdue state (`depend`)
//! - Task statistics and budget roll-ups (`stats`)
//! - Compound task filtering (`filter`)
//! - Budget variance classification and the pace heuristic (`variance`)
//! - [`build_project_view`], the assembled pipeline the presentation
//!   layer consumes
//!
//! Data flows one direction: snapshot -> filter -> {timeline, resolver,
//! aggregator} -> variance. Every function is a pure function of its
//! inputs; there is no I/O and no retained state, so rapid re-invocation
//! from UI event handlers is safe by construction.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use projboard_core::{Project, Task};
//! use projboard_view::{build_project_view, TaskFilter, ViewOptions};
//!
//! let mut project = Project::new(
//!     "Onboarding portal",
//!     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
//! );
//! project.tasks.push(
//!     Task::new("t-1")
//!         .title("Draft welcome flow")
//!         .starts(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap())
//!         .due(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
//! );
//!
//! let options = ViewOptions::new(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
//! let view = build_project_view(&project, &TaskFilter::default(), &options);
//! assert_eq!(view.rows.len(), 1);
//! assert!(view.rows[0].span.is_some());
//! ```

use chrono::NaiveDate;
use projboard_core::{Priority, Project, TaskStatus};
use serde::{Deserialize, Serialize};

pub mod depend;
pub mod filter;
pub mod stats;
pub mod timeline;
pub mod variance;

pub use depend::{is_overdue, BlockingPolicy, DependencyIndex};
pub use filter::TaskFilter;
pub use stats::{BudgetRollup, TaskStats};
pub use timeline::{axis_ticks, task_span, TaskSpan, TimeScale, Zoom};
pub use variance::{classify, BudgetVariance, PaceIndicator, VarianceStatus};

// ============================================================================
// View Options
// ============================================================================

/// Knobs the presentation layer controls per render
#[derive(Clone, Copy, Debug)]
pub struct ViewOptions {
    /// Timeline zoom factor
    pub zoom: Zoom,
    /// Axis tick stride
    pub scale: TimeScale,
    /// "Now" for overdue classification
    pub today: NaiveDate,
    /// Blocking policy (flag-driven unless explicitly opted in)
    pub blocking: BlockingPolicy,
}

impl ViewOptions {
    /// Defaults at the given date: zoom 1.0, weekly ticks, flag-driven
    /// blocking
    pub fn new(today: NaiveDate) -> Self {
        Self {
            zoom: Zoom::default(),
            scale: TimeScale::default(),
            today,
            blocking: BlockingPolicy::default(),
        }
    }

    pub fn zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn scale(mut self, scale: TimeScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn blocking(mut self, policy: BlockingPolicy) -> Self {
        self.blocking = policy;
        self
    }
}

// ============================================================================
// View Models
// ============================================================================

/// Render-ready state for one task row
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub blocked: bool,
    pub overdue: bool,
    /// Clamped completion percentage
    pub progress: u8,
    /// Bar geometry; `None` when the task has no usable dates
    pub span: Option<TaskSpan>,
    /// Assignee display label, when assigned
    pub assignee: Option<String>,
    /// Dependency titles in declaration order, with fallbacks for
    /// unresolvable ids
    pub dependencies: Vec<String>,
}

/// The full view-model for one project, consumed by the timeline, list
/// and finance views alike
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectView {
    pub project_id: String,
    pub name: String,
    /// Axis tick dates for the selected scale
    pub ticks: Vec<NaiveDate>,
    /// Visible tasks after filtering, in snapshot order
    pub rows: Vec<TaskRow>,
    /// Counts over the visible tasks
    pub stats: TaskStats,
    /// Budget roll-up over the visible tasks
    pub rollup: BudgetRollup,
    /// Percent of rolled-up budget consumed
    pub percent_spent: f64,
    /// Mean clamped task progress (0 for an empty set)
    pub percent_complete: f64,
    /// Budget health badge
    pub variance: BudgetVariance,
    /// Shared bar-color heuristic
    pub pace: PaceIndicator,
}

/// Run the full pipeline for one project snapshot.
///
/// Filters the task collection, lays visible tasks out on the timeline,
/// resolves dependency and blocking state, aggregates statistics and
/// budgets, and classifies budget variance. Dependency references are
/// resolved against the whole snapshot, so a dependency hidden by the
/// filter still renders by title.
pub fn build_project_view(
    project: &Project,
    filter: &TaskFilter,
    options: &ViewOptions,
) -> ProjectView {
    let window = project.window();
    let index = DependencyIndex::new(&project.tasks);
    let visible = filter.apply(&project.tasks);

    let rows: Vec<TaskRow> = visible
        .iter()
        .map(|task| TaskRow {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            priority: task.priority,
            blocked: index.is_blocked(task, options.blocking),
            overdue: is_overdue(task, options.today),
            progress: task.effective_progress(),
            span: task_span(task, window, options.zoom),
            assignee: task.assignee_label(),
            dependencies: index.dependency_labels(task),
        })
        .collect();

    let stats = TaskStats::aggregate(visible.iter().copied(), options.today);
    let rollup = BudgetRollup::aggregate(visible.iter().copied());

    let percent_spent = rollup.percent_spent();
    let percent_complete = mean_progress(&visible);
    let variance = classify(percent_spent, percent_complete);
    let pace = PaceIndicator::from_percentages(percent_spent, percent_complete);

    ProjectView {
        project_id: project.id.clone(),
        name: project.name.clone(),
        ticks: axis_ticks(window, options.scale),
        rows,
        stats,
        rollup,
        percent_spent,
        percent_complete,
        variance,
        pace,
    }
}

/// Unweighted mean of clamped task progress; 0 for an empty collection
fn mean_progress(tasks: &[&projboard_core::Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let sum: u32 = tasks.iter().map(|t| u32::from(t.effective_progress())).sum();
    f64::from(sum) / tasks.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
