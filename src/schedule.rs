use crate::activity::{Activity, Instant};
use crate::error::{ScheduleError, ScheduleResult};
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub task_count: usize,
    pub critical_count: usize,
    pub critical_chain: Vec<String>,
    pub project_finish: Instant,
}

impl ScheduleSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.task_count));
        parts.push(format!("critical={}", self.critical_count));
        parts.push(format!("finish={}", self.project_finish));
        if !self.critical_chain.is_empty() {
            parts.push(format!("crit_path={}", self.critical_chain.join("->")));
        }
        parts.join(", ")
    }
}

/// Timetable: one activity per task, keyed by task name.
///
/// Equality is structural: two schedules are equal when they hold the same
/// activities, whatever order they were added in.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    activities: Vec<Activity>,
    index: HashMap<String, usize>,
    max_finish: Instant,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_passes(
        activities: Vec<Activity>,
        project_finish: Instant,
    ) -> ScheduleResult<Self> {
        let mut schedule = Self {
            activities: Vec::with_capacity(activities.len()),
            index: HashMap::with_capacity(activities.len()),
            max_finish: Instant::ZERO,
        };
        for activity in activities {
            schedule.add(activity)?;
        }
        debug_assert_eq!(schedule.max_finish, project_finish);
        schedule.max_finish = project_finish;
        Ok(schedule)
    }

    /// Fails with `DuplicateTask` when an activity for the same task exists.
    pub fn add(&mut self, activity: Activity) -> ScheduleResult<()> {
        if self.index.contains_key(activity.name()) {
            return Err(ScheduleError::DuplicateTask(activity.name().to_string()));
        }
        self.max_finish = self.max_finish.max(activity.finish());
        self.index
            .insert(activity.name().to_string(), self.activities.len());
        self.activities.push(activity);
        Ok(())
    }

    /// Fails with `UnknownTask` when no activity carries that name.
    pub fn get(&self, name: &str) -> ScheduleResult<&Activity> {
        self.find(name)
            .ok_or_else(|| ScheduleError::UnknownTask(name.to_string()))
    }

    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.index.get(name).map(|&idx| &self.activities[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activities in insertion order (catalog order for computed schedules).
    pub fn activities(&self) -> impl ExactSizeIterator<Item = &Activity> {
        self.activities.iter()
    }

    /// True when every activity starts no earlier than each of its
    /// prerequisites finishes. A prerequisite without an activity in this
    /// schedule makes it infeasible.
    pub fn is_feasible(&self) -> bool {
        self.activities.iter().all(|activity| {
            activity.task().prerequisites().iter().all(|prerequisite| {
                self.find(prerequisite)
                    .is_some_and(|before| activity.start() >= before.finish())
            })
        })
    }

    /// Ascending start; equal starts keep insertion order.
    pub fn ordered_by_start(&self) -> Vec<&Activity> {
        let mut ordered: Vec<&Activity> = self.activities.iter().collect();
        ordered.sort_by_key(|activity| activity.start());
        ordered
    }

    /// Descending start; equal starts in reverse insertion order.
    pub fn ordered_by_start_desc(&self) -> Vec<&Activity> {
        let mut ordered: Vec<&Activity> = self.activities.iter().rev().collect();
        ordered.sort_by_key(|activity| Reverse(activity.start()));
        ordered
    }

    /// Zero-slack activities in start order.
    ///
    /// Activities built with [`Activity::new`] record no float, so in a
    /// hand-assembled schedule every one of them has slack 0 and shows up here.
    /// Use [`Activity::with_latest_finish`] to give them a latest finish.
    pub fn critical_path(&self) -> Vec<&Activity> {
        self.ordered_by_start()
            .into_iter()
            .filter(|activity| activity.is_critical())
            .collect()
    }

    /// One connected run of zero-slack activities ending at the project finish.
    ///
    /// Starts from the first terminal critical activity finishing at
    /// `max_finish` and walks back through critical prerequisites whose finish
    /// meets the current start.
    pub fn critical_chain(&self) -> Vec<&Activity> {
        let Some(last) = self
            .terminal_activities()
            .into_iter()
            .find(|activity| activity.is_critical() && activity.finish() == self.max_finish)
        else {
            return Vec::new();
        };

        let mut chain = vec![last];
        let mut current = last;
        loop {
            let start = current.start();
            let previous = current
                .task()
                .prerequisites()
                .iter()
                .filter_map(|name| self.find(name))
                .find(|before| before.is_critical() && before.finish() == start);
            match previous {
                Some(previous) => {
                    chain.push(previous);
                    current = previous;
                }
                None => break,
            }
        }
        chain.reverse();
        chain
    }

    /// Largest slack in the schedule; `None` when it is empty.
    pub fn max_slack(&self) -> Option<Instant> {
        self.activities.iter().map(Activity::slack).max()
    }

    /// The activity with the largest slack. Ties go to the one added first.
    pub fn max_slack_activity(&self) -> Option<&Activity> {
        self.activities
            .iter()
            .reduce(|best, activity| if activity.slack() > best.slack() { activity } else { best })
    }

    /// Activities that are no other activity's prerequisite, in insertion order.
    pub fn terminal_activities(&self) -> Vec<&Activity> {
        let required: HashSet<&str> = self
            .activities
            .iter()
            .flat_map(|activity| activity.task().prerequisites())
            .map(String::as_str)
            .collect();
        self.activities
            .iter()
            .filter(|activity| !required.contains(activity.name()))
            .collect()
    }

    /// Project completion time; zero for an empty schedule.
    pub fn max_finish(&self) -> Instant {
        self.max_finish
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            task_count: self.len(),
            critical_count: self.activities.iter().filter(|a| a.is_critical()).count(),
            critical_chain: self
                .critical_chain()
                .into_iter()
                .map(|activity| activity.name().to_string())
                .collect(),
            project_finish: self.max_finish,
        }
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .activities
                .iter()
                .all(|activity| other.find(activity.name()) == Some(activity))
    }
}

impl Eq for Schedule {}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.activities)
    }
}
