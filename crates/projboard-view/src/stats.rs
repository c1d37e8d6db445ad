//! Per-project statistics and budget roll-ups.
//!
//! Everything here is recomputed in full from the snapshot on every call;
//! collections are small (tens to low hundreds of tasks per project) and
//! the pure-function contract keeps rapid UI-driven recomputation safe.

use chrono::NaiveDate;
use projboard_core::{Task, TaskStatus};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depend::is_overdue;

/// Task counts for the dashboard tiles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub blocked: usize,
    pub overdue: usize,
}

impl TaskStats {
    /// Count stats over a task collection (already filtered, where the
    /// caller wants filtered numbers).
    pub fn aggregate<'a, I>(tasks: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Cancelled => {}
            }
            if task.blocked {
                stats.blocked += 1;
            }
            if is_overdue(task, today) {
                stats.overdue += 1;
            }
        }
        stats
    }
}

/// Additive budget roll-up over a task collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRollup {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
}

impl BudgetRollup {
    /// Sum task budgets and spend. No currency conversion; amounts are
    /// plain additive totals.
    pub fn aggregate<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut rollup = Self::default();
        for task in tasks {
            rollup.total_budget += task.budget;
            rollup.total_spent += task.spent;
        }
        rollup
    }

    /// Percent of the budget consumed; 0 when there is no budget,
    /// never a division by zero.
    pub fn percent_spent(&self) -> f64 {
        if self.total_budget.is_zero() {
            return 0.0;
        }
        (self.total_spent / self.total_budget * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        let stats = TaskStats::aggregate([], date(2026, 1, 1));
        assert_eq!(stats, TaskStats::default());

        let rollup = BudgetRollup::aggregate([]);
        assert_eq!(rollup.percent_spent(), 0.0);
    }

    #[test]
    fn counts_by_status_flag_and_due_date() {
        let today = date(2026, 2, 1);
        let tasks = vec![
            Task::new("a"),
            Task::new("b").status(TaskStatus::InProgress).blocked(true),
            Task::new("c").status(TaskStatus::Completed),
            // overdue and blocked
            Task::new("d")
                .status(TaskStatus::InProgress)
                .blocked(true)
                .due(date(2026, 1, 20)),
            // past due but completed, so not overdue
            Task::new("e")
                .status(TaskStatus::Completed)
                .due(date(2026, 1, 20)),
            Task::new("f").status(TaskStatus::Cancelled),
        ];

        let stats = TaskStats::aggregate(&tasks, today);
        assert_eq!(
            stats,
            TaskStats {
                total: 6,
                pending: 1,
                in_progress: 2,
                completed: 2,
                blocked: 2,
                overdue: 1,
            }
        );
    }

    #[test]
    fn reference_budget_rollup() {
        // Budgets {100, 200, 300}, spent {50, 250, 0} => 600 / 300 / 50%
        let tasks = vec![
            Task::new("a").budget(dec!(100)).spent(dec!(50)),
            Task::new("b").budget(dec!(200)).spent(dec!(250)),
            Task::new("c").budget(dec!(300)).spent(dec!(0)),
        ];

        let rollup = BudgetRollup::aggregate(&tasks);
        assert_eq!(rollup.total_budget, dec!(600));
        assert_eq!(rollup.total_spent, dec!(300));
        assert_eq!(rollup.percent_spent(), 50.0);
    }

    #[test]
    fn zero_budget_with_spend_stays_finite() {
        let tasks = vec![Task::new("a").spent(dec!(120))];
        let rollup = BudgetRollup::aggregate(&tasks);
        assert_eq!(rollup.total_spent, dec!(120));
        assert_eq!(rollup.percent_spent(), 0.0);
    }

    #[test]
    fn overspend_exceeds_one_hundred_percent() {
        let tasks = vec![Task::new("a").budget(dec!(200)).spent(dec!(300))];
        let rollup = BudgetRollup::aggregate(&tasks);
        assert_eq!(rollup.percent_spent(), 150.0);
    }
}
