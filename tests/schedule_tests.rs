use cpm_schedule::{
    Activity, Catalog, Instant, Schedule, ScheduleError, Task, parse_catalog, schedule,
    schedule_all,
};
use std::collections::HashMap;
use std::sync::Arc;

const FOUR_TASKS: &str = "
A / 1 /
B / 2 / A
C / 3 / A B
D / 4 / A
";

const SEVEN_TASKS: &str = "
A / 1 /
B / 2 / A
C / 3 / A B
D / 4 / A
E / 4 /
F / 2 / E
G / 1 / F
";

fn at(units: i32) -> Instant {
    Instant::from(units)
}

fn names(activities: Vec<&Activity>) -> Vec<String> {
    activities.into_iter().map(|a| a.name().to_string()).collect()
}

#[test]
fn four_task_project() {
    let catalog = parse_catalog(FOUR_TASKS).unwrap();
    let s = schedule(&catalog).unwrap();

    let expected: HashMap<&str, (i32, i32)> =
        HashMap::from([("A", (0, 1)), ("D", (1, 5)), ("B", (1, 3)), ("C", (3, 6))]);
    for (name, (start, finish)) in expected {
        let a = s.get(name).unwrap();
        assert_eq!((a.start(), a.finish()), (at(start), at(finish)), "{name}");
    }
    assert_eq!(s.max_finish(), at(6));
    assert_eq!(names(s.critical_path()), ["A", "B", "C"]);
    assert_eq!(s.get("D").unwrap().slack(), at(1));
    assert!(s.is_feasible());
}

#[test]
fn four_task_project_equals_hand_built_timetable() {
    let catalog = parse_catalog(FOUR_TASKS).unwrap();
    let computed = schedule(&catalog).unwrap();

    let task = |name: &str| catalog.get(name).unwrap().clone();
    let mut expected = Schedule::new();
    expected
        .add(Activity::with_latest_finish(task("A"), at(0), at(1), at(1)).unwrap())
        .unwrap();
    expected
        .add(Activity::with_latest_finish(task("D"), at(1), at(5), at(6)).unwrap())
        .unwrap();
    expected
        .add(Activity::with_latest_finish(task("B"), at(1), at(3), at(3)).unwrap())
        .unwrap();
    expected
        .add(Activity::with_latest_finish(task("C"), at(3), at(6), at(6)).unwrap())
        .unwrap();

    assert_eq!(computed, expected);
}

#[test]
fn two_task_cycle_has_no_schedule() {
    let catalog = parse_catalog("A / 1 / B\nB / 2 / A").unwrap();
    let err = schedule(&catalog).unwrap_err();
    assert!(matches!(err, ScheduleError::CyclicDependency { .. }));
}

#[test]
fn self_dependency_is_a_cycle() {
    let catalog = parse_catalog("A / 1 / A").unwrap();
    assert_eq!(
        schedule(&catalog).unwrap_err(),
        ScheduleError::CyclicDependency {
            tasks: vec!["A".into()]
        }
    );
}

#[test]
fn unknown_prerequisite_aborts_scheduling() {
    let catalog = parse_catalog("A / 1 /\nB / 1 / Q").unwrap();
    assert!(matches!(
        schedule(&catalog),
        Err(ScheduleError::UnknownPrerequisite { .. })
    ));
}

#[test]
fn adding_activity_twice_fails() {
    let a = Arc::new(Task::root("A", 1).unwrap());
    let mut s = Schedule::new();
    s.add(Activity::new(a.clone(), at(0), at(1)).unwrap()).unwrap();

    let other = Arc::new(Task::root("A", 5).unwrap());
    let err = s.add(Activity::new(other, at(6), at(11)).unwrap()).unwrap_err();
    assert_eq!(err, ScheduleError::DuplicateTask("A".into()));
}

#[test]
fn activity_shorter_than_duration_is_invalid() {
    let task = Arc::new(Task::root("A", 2).unwrap());
    assert!(matches!(
        Activity::new(task, at(3), at(4)),
        Err(ScheduleError::InvalidActivity { .. })
    ));
}

#[test]
fn seven_task_project() {
    let catalog = parse_catalog(SEVEN_TASKS).unwrap();
    let s = schedule(&catalog).unwrap();

    for (name, start) in [
        ("E", 0),
        ("A", 0),
        ("D", 1),
        ("B", 1),
        ("C", 3),
        ("F", 4),
        ("G", 6),
    ] {
        assert_eq!(s.get(name).unwrap().start(), at(start), "{name}");
    }
    assert_eq!(s.max_finish(), at(7));
    assert_eq!(names(s.critical_path()), ["E", "F", "G"]);
    assert_eq!(names(s.critical_chain()), ["E", "F", "G"]);
    assert_eq!(
        names(s.ordered_by_start()),
        ["A", "E", "B", "D", "C", "F", "G"]
    );
    assert_eq!(
        names(s.ordered_by_start_desc()),
        ["G", "F", "C", "D", "B", "E", "A"]
    );
    assert_eq!(names(s.terminal_activities()), ["C", "D", "G"]);
}

#[test]
fn seven_task_project_max_slack_is_d() {
    let s = schedule(&parse_catalog(SEVEN_TASKS).unwrap()).unwrap();
    assert_eq!(s.max_slack(), Some(at(2)));
    assert_eq!(s.max_slack_activity().unwrap().name(), "D");
}

#[test]
fn max_slack_ties_go_to_catalog_order() {
    // B and C both have slack 3; B comes first in the catalog.
    let s = schedule(&parse_catalog("A / 4 /\nB / 1 /\nC / 1 /").unwrap()).unwrap();
    assert_eq!(s.max_slack(), Some(at(3)));
    assert_eq!(s.max_slack_activity().unwrap().name(), "B");
}

#[test]
fn fractional_schedule_serializes_as_numbers() {
    let s = schedule(&parse_catalog("A / 1.5 /\nB / 2.25 / A").unwrap()).unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json[1]["start"], 1.5);
    assert_eq!(json[1]["finish"], 3.75);
    assert_eq!(json[1]["slack"], 0);
    assert_eq!(s.summary().to_cli_summary(), "tasks=2, critical=2, finish=3.75, crit_path=A->B");
}

#[test]
fn get_unknown_task() {
    let s = schedule(&parse_catalog(FOUR_TASKS).unwrap()).unwrap();
    assert_eq!(
        s.get("Z").unwrap_err(),
        ScheduleError::UnknownTask("Z".into())
    );
    // The schedule is still usable afterwards.
    assert_eq!(s.get("A").unwrap().finish(), at(1));
}

#[test]
fn scheduling_twice_gives_equal_schedules() {
    let catalog = parse_catalog(SEVEN_TASKS).unwrap();
    assert_eq!(schedule(&catalog).unwrap(), schedule(&catalog).unwrap());
}

#[test]
fn catalog_order_does_not_change_dates() {
    let forward = parse_catalog(SEVEN_TASKS).unwrap();
    let reversed_text: Vec<&str> = SEVEN_TASKS.lines().rev().collect();
    let reversed = parse_catalog(&reversed_text.join("\n")).unwrap();
    assert_eq!(schedule(&forward).unwrap(), schedule(&reversed).unwrap());
}

#[test]
fn empty_catalog_gives_empty_schedule() {
    let s = schedule(&Catalog::default()).unwrap();
    assert!(s.is_empty());
    assert_eq!(s.max_finish(), Instant::ZERO);
    assert!(s.critical_path().is_empty());
    assert_eq!(s.max_slack(), None);
    assert!(s.is_feasible());
}

#[test]
fn summary_reports_critical_chain() {
    let s = schedule(&parse_catalog(FOUR_TASKS).unwrap()).unwrap();
    let summary = s.summary();
    assert_eq!(summary.task_count, 4);
    assert_eq!(summary.critical_count, 3);
    assert_eq!(summary.critical_chain, ["A", "B", "C"]);
    assert_eq!(
        summary.to_cli_summary(),
        "tasks=4, critical=3, finish=6, crit_path=A->B->C"
    );
}

#[test]
fn schedule_all_keeps_input_order_and_errors() {
    let catalogs = vec![
        parse_catalog(FOUR_TASKS).unwrap(),
        parse_catalog("A / 1 / B\nB / 2 / A").unwrap(),
        parse_catalog(SEVEN_TASKS).unwrap(),
    ];
    let results = schedule_all(&catalogs);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().max_finish(), at(6));
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().max_finish(), at(7));
}

#[test]
fn schedule_serializes_task_names() {
    let s = schedule(&parse_catalog("A / 1 /\nB / 2 / A").unwrap()).unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json[0]["task"], "A");
    assert_eq!(json[1]["start"], 1);
    assert_eq!(json[1]["slack"], 0);
}

#[test]
fn schedule_frame_is_in_start_order() {
    let s = schedule(&parse_catalog(SEVEN_TASKS).unwrap()).unwrap();
    let df = s.to_dataframe().unwrap();
    assert_eq!(df.height(), 7);
    let tasks = df.column("task").unwrap().str().unwrap();
    assert_eq!(tasks.get(0), Some("A"));
    assert_eq!(tasks.get(6), Some("G"));
    let slack = df.column("slack").unwrap().f64().unwrap();
    assert_eq!(slack.get(0), Some(1.0));
}
