use crate::calculations::backward_pass::BackwardPass;
use crate::calculations::forward_pass::ForwardPass;
use crate::catalog::Catalog;
use crate::error::ScheduleResult;
use crate::graph::DependencyGraph;
use crate::schedule::Schedule;
use rayon::prelude::*;
use tracing::{info, warn};

/// Computes earliest and latest dates, slack and the critical path of a catalog.
///
/// Fails with `UnknownPrerequisite` or `CyclicDependency` before any date is
/// computed, and with `Overflow` when a date does not fit the timeline. No
/// partial schedule is ever returned.
pub fn schedule(catalog: &Catalog) -> ScheduleResult<Schedule> {
    let result = run_passes(catalog);
    match &result {
        Ok(schedule) => info!(
            project = catalog.metadata().name.as_str(),
            tasks = schedule.len(),
            finish = %schedule.max_finish(),
            "schedule computed"
        ),
        Err(err) => warn!(project = catalog.metadata().name.as_str(), %err, "catalog rejected"),
    }
    result
}

fn run_passes(catalog: &Catalog) -> ScheduleResult<Schedule> {
    let graph = DependencyGraph::build(catalog)?;
    let order = graph.topological_order()?;

    let forward = ForwardPass::new(&graph).execute(&order)?;
    let project_finish = forward.project_finish;
    let activities = BackwardPass::new(&graph).execute(&order, forward)?;

    Schedule::from_passes(activities, project_finish)
}

/// Schedules independent catalogs in parallel. Results keep the input order.
pub fn schedule_all(catalogs: &[Catalog]) -> Vec<ScheduleResult<Schedule>> {
    catalogs.par_iter().map(schedule).collect()
}
