use crate::error::{ScheduleError, ScheduleResult};
use crate::task::Task;
use std::collections::HashSet;

pub fn validate_task(task: &Task) -> ScheduleResult<()> {
    if task.duration().is_negative() {
        return Err(ScheduleError::NegativeDuration {
            task: task.name().to_string(),
            duration: task.duration(),
        });
    }

    let mut seen = HashSet::with_capacity(task.prerequisites().len());
    for prerequisite in task.prerequisites() {
        if !seen.insert(prerequisite.as_str()) {
            return Err(ScheduleError::DuplicatePrerequisite {
                task: task.name().to_string(),
                prerequisite: prerequisite.clone(),
            });
        }
    }

    Ok(())
}

pub fn validate_task_collection<'a, I>(tasks: I) -> ScheduleResult<()>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut seen_names = HashSet::new();
    for task in tasks {
        if !seen_names.insert(task.name()) {
            return Err(ScheduleError::DuplicateTask(task.name().to_string()));
        }
        validate_task(task)?;
    }
    Ok(())
}
