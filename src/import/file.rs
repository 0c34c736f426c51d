use super::{ImportResult, text};
use crate::catalog::Catalog;
use crate::instant::Instant;
use crate::metadata::ProjectMetadata;
use crate::task::Task;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    metadata: ProjectMetadata,
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct TaskCsvRecord {
    name: String,
    duration: Instant,
    #[serde(default)]
    prerequisites: String,
}

impl TaskCsvRecord {
    fn into_task(self) -> ImportResult<Task> {
        let prerequisites = self.prerequisites.split_whitespace();
        Ok(Task::new(self.name.trim(), self.duration, prerequisites)?)
    }
}

pub fn load_catalog_from_text<P: AsRef<Path>>(path: P) -> ImportResult<Catalog> {
    let contents = fs::read_to_string(path)?;
    text::parse_catalog(&contents)
}

/// Header `name,duration,prerequisites`; prerequisites are space separated and
/// durations may be fractional.
pub fn read_catalog_csv<R: Read>(reader: R) -> ImportResult<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut tasks = Vec::new();
    for record in reader.deserialize::<TaskCsvRecord>() {
        tasks.push(record?.into_task()?);
    }
    Ok(Catalog::new(tasks)?)
}

pub fn load_catalog_from_csv<P: AsRef<Path>>(path: P) -> ImportResult<Catalog> {
    read_catalog_csv(File::open(path)?)
}

/// `{ "metadata": {...}, "tasks": [{ "name", "duration", "prerequisites" }] }`;
/// `metadata` and each `prerequisites` list are optional.
pub fn read_catalog_json<R: Read>(reader: R) -> ImportResult<Catalog> {
    let file: CatalogFile = serde_json::from_reader(reader)?;
    Ok(Catalog::new(file.tasks)?.with_metadata(file.metadata))
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> ImportResult<Catalog> {
    read_catalog_json(File::open(path)?)
}
