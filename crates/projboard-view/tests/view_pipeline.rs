//! Integration tests for the full view pipeline.
//!
//! These exercise the snapshot -> filter -> layout/aggregate -> variance
//! flow end to end, including ingest from the REST wire shape.

use chrono::NaiveDate;
use projboard_core::{snapshot, Priority, Project, Task, TaskStatus};
use projboard_view::{
    build_project_view, classify, BudgetRollup, PaceIndicator, TaskFilter, TaskStats,
    VarianceStatus, ViewOptions, Zoom,
};
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// January window, mid-month task: the reference layout numbers
#[test]
fn january_layout_scenario() {
    let mut project = Project::new("Layout", date(2026, 1, 1), date(2026, 1, 31));
    project.tasks.push(
        Task::new("t-1")
            .title("Mid-month work")
            .starts(date(2026, 1, 8))
            .due(date(2026, 1, 15)),
    );

    let view = build_project_view(
        &project,
        &TaskFilter::default(),
        &ViewOptions::new(date(2026, 1, 10)),
    );
    let span = view.rows[0].span.expect("task has both dates");
    assert!((span.left_percent - 23.3).abs() < 0.1);
    assert!((span.width_percent - 22.6).abs() < 0.1);

    // Doubling zoom doubles both values
    let zoomed = build_project_view(
        &project,
        &TaskFilter::default(),
        &ViewOptions::new(date(2026, 1, 10)).zoom(Zoom::new(2.0)),
    );
    let zoomed_span = zoomed.rows[0].span.unwrap();
    assert!((zoomed_span.left_percent - 2.0 * span.left_percent).abs() < 1e-9);
    assert!((zoomed_span.width_percent - 2.0 * span.width_percent).abs() < 1e-9);
}

/// Budgets {100, 200, 300} with spent {50, 250, 0} roll up to 600/300/50%
#[test]
fn budget_rollup_scenario() {
    let tasks = vec![
        Task::new("a").budget(dec!(100)).spent(dec!(50)).progress(80),
        Task::new("b").budget(dec!(200)).spent(dec!(250)).progress(20),
        Task::new("c").budget(dec!(300)).spent(dec!(0)),
    ];

    let rollup = BudgetRollup::aggregate(&tasks);
    assert_eq!(rollup.total_budget, dec!(600));
    assert_eq!(rollup.total_spent, dec!(300));
    assert_eq!(rollup.percent_spent(), 50.0);
}

#[test]
fn variance_reference_points() {
    let even = classify(50.0, 50.0);
    assert_eq!(even.status, VarianceStatus::Within);
    assert_eq!(even.deviation, 0.0);

    let over = classify(70.0, 50.0);
    assert_eq!(over.status, VarianceStatus::Exceeded);
    assert_eq!(over.deviation, 20.0);

    assert_eq!(
        PaceIndicator::from_percentages(70.0, 50.0),
        PaceIndicator::Overrun
    );
}

/// Ingest the wire shape, then run the whole pipeline over it
#[test]
fn snapshot_to_view() {
    let json = r#"[
        {
            "id": "t-1",
            "title": "Qualify leads",
            "status": "completed",
            "startDate": "2026-01-01",
            "dueDate": "2026-01-07",
            "assignedTo": "emp-1",
            "budget": 400,
            "spent": 380,
            "progress": 100
        },
        {
            "id": "t-2",
            "title": "Prepare proposals",
            "status": "in_progress",
            "priority": "high",
            "startDate": "2026-01-05",
            "dueDate": "2026-01-09",
            "assignedTo": {"_id": "emp-2", "name": "Priya Shah"},
            "dependencies": ["t-1"],
            "budget": 600,
            "spent": 150,
            "progress": 35
        },
        {
            "id": "t-3",
            "title": "Contract review",
            "blocked": true,
            "startDate": "not-a-date",
            "dueDate": "2026-01-20"
        }
    ]"#;

    let mut project = Project::new("Q1 sales push", date(2026, 1, 1), date(2026, 1, 31));
    project.tasks = snapshot::tasks_from_json(json).expect("snapshot decodes");

    let view = build_project_view(
        &project,
        &TaskFilter::default(),
        &ViewOptions::new(date(2026, 1, 12)),
    );

    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[0].assignee.as_deref(), Some("Employee #emp-1"));
    assert_eq!(view.rows[1].assignee.as_deref(), Some("Priya Shah"));
    assert_eq!(view.rows[1].dependencies, vec!["Qualify leads".to_string()]);

    // t-2 is past due and not completed; t-1 is completed and exempt
    assert!(!view.rows[0].overdue);
    assert!(view.rows[1].overdue);

    // Unparsable start date excludes t-3 from layout but not from the list
    assert!(view.rows[2].span.is_none());
    assert!(view.rows[2].blocked);

    assert_eq!(
        view.stats,
        TaskStats {
            total: 3,
            pending: 1,
            in_progress: 1,
            completed: 1,
            blocked: 1,
            overdue: 1,
        }
    );
    assert_eq!(view.rollup.total_budget, dec!(1000));
    assert_eq!(view.rollup.total_spent, dec!(530));
    assert_eq!(view.percent_spent, 53.0);
}

/// Filtered views feed filtered aggregates
#[test]
fn filtered_aggregates() {
    let mut project = Project::new("Board", date(2026, 1, 1), date(2026, 3, 31));
    project.tasks = vec![
        Task::new("t-1")
            .priority(Priority::High)
            .status(TaskStatus::Completed)
            .budget(dec!(100))
            .spent(dec!(100)),
        Task::new("t-2").priority(Priority::High).budget(dec!(100)),
        Task::new("t-3").priority(Priority::Low).budget(dec!(900)),
    ];

    let view = build_project_view(
        &project,
        &TaskFilter::new().priority(Priority::High),
        &ViewOptions::new(date(2026, 2, 1)),
    );

    assert_eq!(view.stats.total, 2);
    assert_eq!(view.rollup.total_budget, dec!(200));
    assert_eq!(view.percent_spent, 50.0);
}
