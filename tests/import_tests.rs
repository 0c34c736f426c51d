use cpm_schedule::{
    ImportError, Instant, ScheduleError, load_catalog_from_csv, load_catalog_from_json,
    load_catalog_from_text, read_catalog_csv, read_catalog_json, schedule,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn text_file_loads_and_schedules() {
    let file = temp_file("A / 1 /\nB / 2 / A\nC / 3 / A B\nD / 4 / A\n");
    let catalog = load_catalog_from_text(file.path()).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(schedule(&catalog).unwrap().max_finish(), Instant::from(6));
}

#[test]
fn csv_reads_space_separated_prerequisites() {
    let csv = "name,duration,prerequisites\nA,1,\nB,2,A\nC,3,A B\n";
    let catalog = read_catalog_csv(csv.as_bytes()).unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), ["A", "B", "C"]);
    assert_eq!(catalog.get("C").unwrap().prerequisites(), ["A", "B"]);
}

#[test]
fn csv_accepts_fractional_durations() {
    let csv = "name,duration,prerequisites\nA,1.5,\nB,2.25,A\n";
    let catalog = read_catalog_csv(csv.as_bytes()).unwrap();
    assert_eq!(catalog.get("B").unwrap().duration(), Instant::from_ticks(2_250_000));
    assert_eq!(schedule(&catalog).unwrap().max_finish().to_string(), "3.75");
}

#[test]
fn json_accepts_fractional_durations() {
    let json = r#"{ "tasks": [
        { "name": "A", "duration": 1.5 },
        { "name": "B", "duration": 2.25, "prerequisites": ["A"] }
    ] }"#;
    let catalog = read_catalog_json(json.as_bytes()).unwrap();
    assert_eq!(schedule(&catalog).unwrap().max_finish(), Instant::from_ticks(3_750_000));
}

#[test]
fn csv_file_with_duplicate_task_is_rejected() {
    let file = temp_file("name,duration,prerequisites\nA,1,\nA,2,\n");
    let err = load_catalog_from_csv(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Schedule(ScheduleError::DuplicateTask(_))
    ));
}

#[test]
fn csv_bad_duration_is_a_csv_error() {
    let err = read_catalog_csv("name,duration,prerequisites\nA,soon,\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::Csv(_)));
}

#[test]
fn json_carries_metadata() {
    let json = r#"{
        "metadata": { "name": "Kitchen", "description": "Renovation" },
        "tasks": [
            { "name": "Demolish", "duration": 2 },
            { "name": "Plumbing", "duration": 3, "prerequisites": ["Demolish"] },
            { "name": "Tiles", "duration": 1, "prerequisites": ["Plumbing"] }
        ]
    }"#;
    let catalog = read_catalog_json(json.as_bytes()).unwrap();
    assert_eq!(catalog.metadata().name, "Kitchen");
    assert_eq!(catalog.metadata().description, "Renovation");
    assert_eq!(schedule(&catalog).unwrap().max_finish(), Instant::from(6));
}

#[test]
fn json_metadata_defaults_when_missing() {
    let file = temp_file(r#"{ "tasks": [ { "name": "A", "duration": 1 } ] }"#);
    let catalog = load_catalog_from_json(file.path()).unwrap();
    assert_eq!(catalog.metadata().name, "New Project");
}

#[test]
fn json_negative_duration_is_rejected() {
    let err = read_catalog_json(r#"{ "tasks": [ { "name": "A", "duration": -3 } ] }"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, ImportError::Json(_)));
    assert!(err.to_string().contains("negative duration"));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_catalog_from_text("/nonexistent/catalog.txt").unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
}
