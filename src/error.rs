use crate::instant::Instant;
use thiserror::Error;

/// Failures raised while building a catalog, a dependency graph or a schedule.
///
/// Every variant aborts the computation it was raised from; nothing is retried
/// and no substitute schedule is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("task {task} lists unknown prerequisite {prerequisite}")]
    UnknownPrerequisite { task: String, prerequisite: String },

    #[error("cyclic dependency between tasks: {}", tasks.join(", "))]
    CyclicDependency { tasks: Vec<String> },

    #[error("task {0} is already present")]
    DuplicateTask(String),

    #[error("no activity for task {0}")]
    UnknownTask(String),

    #[error(
        "activity for task {task} spans [{start}, {finish}] which does not fit duration {duration}"
    )]
    InvalidActivity {
        task: String,
        start: Instant,
        finish: Instant,
        duration: Instant,
    },

    #[error("task {task} has negative duration {duration}")]
    NegativeDuration { task: String, duration: Instant },

    #[error("dates for task {task} overflow the timeline")]
    Overflow { task: String },

    #[error("task {task} lists prerequisite {prerequisite} more than once")]
    DuplicatePrerequisite { task: String, prerequisite: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
