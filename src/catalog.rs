use crate::error::ScheduleResult;
use crate::metadata::ProjectMetadata;
use crate::task::Task;
use crate::task_validation;
use std::collections::HashMap;
use std::sync::Arc;

/// An ordered, read-only set of uniquely named tasks.
///
/// Insertion order is kept for display and as the tie-break wherever the
/// scheduler has to pick between independent tasks. It never changes the
/// computed dates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tasks: Vec<Arc<Task>>,
    index: HashMap<String, usize>,
    metadata: ProjectMetadata,
}

impl Catalog {
    /// Fails with `DuplicateTask` when two tasks share a name.
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> ScheduleResult<Self> {
        let tasks: Vec<Task> = tasks.into_iter().collect();
        task_validation::validate_task_collection(&tasks)?;

        let index = tasks
            .iter()
            .enumerate()
            .map(|(position, task)| (task.name().to_string(), position))
            .collect();

        Ok(Self {
            tasks: tasks.into_iter().map(Arc::new).collect(),
            index,
            metadata: ProjectMetadata::default(),
        })
    }

    pub fn with_metadata(mut self, metadata: ProjectMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> impl ExactSizeIterator<Item = &Arc<Task>> {
        self.tasks.iter()
    }

    /// Task at a catalog position. Panics when out of range, like slice indexing.
    pub fn task(&self, position: usize) -> &Arc<Task> {
        &self.tasks[position]
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Task>> {
        self.position(name).map(|position| &self.tasks[position])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|task| task.name())
    }
}
