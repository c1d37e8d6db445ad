//! Timeline bar geometry and axis ticks.
//!
//! Maps a task's `[start, due]` interval into a proportional horizontal
//! span inside the project window, scaled by the zoom factor. The display
//! scale (day/week/month) only drives the axis tick walk, never the bar
//! math.

use chrono::{Months, NaiveDate};
use projboard_core::{Task, TimeWindow};
use serde::{Deserialize, Serialize};

/// Zoom bounds and step as used by the timeline toolbar
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;

/// Multiplicative scaling factor for bar geometry, clamped to
/// [`ZOOM_MIN`, `ZOOM_MAX`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Zoom {
    /// Create a zoom factor, clamped into the supported range
    pub fn new(factor: f64) -> Self {
        Self(factor.clamp(ZOOM_MIN, ZOOM_MAX))
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Step the factor up by one notch
    pub fn zoom_in(&mut self) {
        self.0 = (self.0 + ZOOM_STEP).min(ZOOM_MAX);
    }

    /// Step the factor down by one notch
    pub fn zoom_out(&mut self) {
        self.0 = (self.0 - ZOOM_STEP).max(ZOOM_MIN);
    }
}

/// Controls what stride the axis tick walk uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeScale {
    Day,
    #[default]
    Week,
    Month,
}

/// Horizontal placement of a task bar, in percent of the chart width
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskSpan {
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Compute the bar span for a task inside the project window.
///
/// Returns `None` when either task date is missing; such tasks are
/// excluded from layout rather than failing it. The task interval is
/// clamped into the window first, so a task logically starting before or
/// ending after the project bounds never yields a negative or
/// out-of-range offset.
///
/// Offsets are measured in elapsed days over the window span; widths are
/// measured against the inclusive day grid the chart columns are drawn
/// on. A degenerate window collapses every span to zero.
pub fn task_span(task: &Task, window: TimeWindow, zoom: Zoom) -> Option<TaskSpan> {
    let task_window = task.window()?;

    let span_days = window.span_days();
    if span_days <= 0 {
        return Some(TaskSpan {
            left_percent: 0.0,
            width_percent: 0.0,
        });
    }

    let start = window.clamp(task_window.start);
    let due = window.clamp(task_window.end).max(start);

    let offset_days = (start - window.start).num_days();
    let task_days = (due - start).num_days();

    let scale = 100.0 * zoom.factor();
    Some(TaskSpan {
        left_percent: offset_days as f64 / span_days as f64 * scale,
        width_percent: task_days as f64 / window.grid_days() as f64 * scale,
    })
}

/// Generate axis tick dates from the window start to its end.
///
/// Walks by 1 day, 7 days, or 1 calendar month; the end boundary is
/// always included even when the stride does not land on it.
pub fn axis_ticks(window: TimeWindow, scale: TimeScale) -> Vec<NaiveDate> {
    let mut ticks = Vec::new();
    if window.end < window.start {
        return ticks;
    }

    let mut cursor = window.start;
    while cursor <= window.end {
        ticks.push(cursor);
        cursor = match scale {
            TimeScale::Day => cursor + chrono::Duration::days(1),
            TimeScale::Week => cursor + chrono::Duration::days(7),
            TimeScale::Month => match cursor.checked_add_months(Months::new(1)) {
                Some(next) => next,
                None => break,
            },
        };
    }

    if ticks.last() != Some(&window.end) {
        ticks.push(window.end);
    }
    ticks
}

// ============================================================================
// Tests
// ============================================================================
