use crate::instant::Instant;
use crate::error::ScheduleResult;
use crate::task_validation;
use serde::{Deserialize, Serialize};

/// A named unit of work with a fixed duration and the tasks that must finish first.
///
/// Tasks are immutable once built; the catalog shares them with every activity
/// scheduled from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    name: String,
    duration: Instant,
    prerequisites: Vec<String>,
}

#[derive(Deserialize)]
struct TaskRecord {
    name: String,
    duration: Instant,
    #[serde(default)]
    prerequisites: Vec<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = crate::error::ScheduleError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Task::new(record.name, record.duration, record.prerequisites)
    }
}

impl Task {
    pub fn new<I, S>(
        name: impl Into<String>,
        duration: impl Into<Instant>,
        prerequisites: I,
    ) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let task = Self {
            name: name.into(),
            duration: duration.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        };
        task_validation::validate_task(&task)?;
        Ok(task)
    }

    /// A task without prerequisites.
    pub fn root(name: impl Into<String>, duration: impl Into<Instant>) -> ScheduleResult<Self> {
        Self::new(name, duration, Vec::<String>::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Instant {
        self.duration
    }

    /// Prerequisite names in declaration order.
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.prerequisites.iter().any(|p| p == name)
    }
}
