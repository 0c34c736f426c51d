use crate::error::{ScheduleError, ScheduleResult};
pub use crate::instant::Instant;
use crate::task::Task;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// A task placed on the timeline.
///
/// `start` and `finish` come from the forward pass, `latest_finish` and `slack`
/// from the backward pass. All fields are fixed once the activity exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(serialize_with = "serialize_task_name")]
    task: Arc<Task>,
    start: Instant,
    finish: Instant,
    latest_start: Instant,
    latest_finish: Instant,
    slack: Instant,
}

fn serialize_task_name<S: Serializer>(task: &Arc<Task>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(task.name())
}

impl Activity {
    /// An activity with no float recorded: its latest finish is its finish.
    ///
    /// Fails with `InvalidActivity` when `finish - start` is shorter than the
    /// task duration.
    pub fn new(task: Arc<Task>, start: Instant, finish: Instant) -> ScheduleResult<Self> {
        Self::with_latest_finish(task, start, finish, finish)
    }

    /// Fails with `InvalidActivity` when the span is shorter than the duration,
    /// when `start` is negative, or when `latest_finish` precedes `finish`.
    pub fn with_latest_finish(
        task: Arc<Task>,
        start: Instant,
        finish: Instant,
        latest_finish: Instant,
    ) -> ScheduleResult<Self> {
        let invalid = || ScheduleError::InvalidActivity {
            task: task.name().to_string(),
            start,
            finish,
            duration: task.duration(),
        };
        if start.is_negative() || latest_finish < finish {
            return Err(invalid());
        }
        let span = finish.checked_sub(start).ok_or_else(invalid)?;
        if span < task.duration() {
            return Err(invalid());
        }
        let slack = latest_finish.checked_sub(finish).ok_or_else(invalid)?;
        let latest_start = latest_finish
            .checked_sub(task.duration())
            .ok_or_else(invalid)?;
        Ok(Self {
            task,
            start,
            finish,
            latest_start,
            latest_finish,
            slack,
        })
    }

    pub fn task(&self) -> &Arc<Task> {
        &self.task
    }

    pub fn name(&self) -> &str {
        self.task.name()
    }

    pub fn duration(&self) -> Instant {
        self.task.duration()
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn finish(&self) -> Instant {
        self.finish
    }

    pub fn latest_start(&self) -> Instant {
        self.latest_start
    }

    pub fn latest_finish(&self) -> Instant {
        self.latest_finish
    }

    pub fn slack(&self) -> Instant {
        self.slack
    }

    pub fn is_critical(&self) -> bool {
        self.slack.is_zero()
    }
}

/// Forward-pass output for one task: earliest dates only.
///
/// Never handed to callers; the backward pass turns it into an [`Activity`].
#[derive(Debug, Clone)]
pub(crate) struct ProvisionalActivity {
    task: Arc<Task>,
    start: Instant,
    finish: Instant,
}

impl ProvisionalActivity {
    /// Fails with `Overflow` when `start + duration` leaves the timeline.
    pub(crate) fn at(task: Arc<Task>, start: Instant) -> ScheduleResult<Self> {
        let finish = start
            .checked_add(task.duration())
            .ok_or_else(|| ScheduleError::Overflow {
                task: task.name().to_string(),
            })?;
        Ok(Self {
            task,
            start,
            finish,
        })
    }

    pub(crate) fn start(&self) -> Instant {
        self.start
    }

    pub(crate) fn finish(&self) -> Instant {
        self.finish
    }

    pub(crate) fn duration(&self) -> Instant {
        self.task.duration()
    }

    pub(crate) fn finalize(self, latest_finish: Instant) -> ScheduleResult<Activity> {
        let activity =
            Activity::with_latest_finish(self.task, self.start, self.finish, latest_finish)?;
        debug_assert_eq!(
            activity.latest_finish().checked_sub(activity.finish()),
            activity.latest_start().checked_sub(activity.start())
        );
        Ok(activity)
    }
}
