use crate::activity::{Instant, ProvisionalActivity};
use crate::error::ScheduleResult;
use crate::graph::DependencyGraph;
use tracing::debug;

/// Earliest dates for every task, indexed by catalog position.
pub(crate) struct ForwardSchedule {
    pub(crate) activities: Vec<ProvisionalActivity>,
    /// Latest earliest-finish over all tasks; the project duration.
    pub(crate) project_finish: Instant,
}

pub(crate) struct ForwardPass<'g, 'a> {
    graph: &'g DependencyGraph<'a>,
}

impl<'g, 'a> ForwardPass<'g, 'a> {
    pub(crate) fn new(graph: &'g DependencyGraph<'a>) -> Self {
        Self { graph }
    }

    /// `order` must be a complete topological order of the graph. Fails with
    /// `Overflow` when a finish leaves the timeline.
    pub(crate) fn execute(&self, order: &[usize]) -> ScheduleResult<ForwardSchedule> {
        let catalog = self.graph.catalog();
        let mut slots: Vec<Option<ProvisionalActivity>> = vec![None; catalog.len()];
        let mut project_finish = Instant::ZERO;

        for &position in order {
            let prerequisites = self.graph.prerequisites(position);
            debug_assert!(prerequisites.iter().all(|p| slots[*p].is_some()));

            // Early start is max of all prerequisite finishes
            let start = prerequisites
                .iter()
                .filter_map(|p| slots[*p].as_ref().map(ProvisionalActivity::finish))
                .max()
                .unwrap_or(Instant::ZERO);

            let activity = ProvisionalActivity::at(catalog.task(position).clone(), start)?;
            debug!(
                task = catalog.task(position).name(),
                start = %activity.start(),
                finish = %activity.finish(),
                "forward pass"
            );
            project_finish = project_finish.max(activity.finish());
            slots[position] = Some(activity);
        }

        let activities: Vec<ProvisionalActivity> = slots.into_iter().flatten().collect();
        debug_assert_eq!(activities.len(), catalog.len());

        Ok(ForwardSchedule {
            activities,
            project_finish,
        })
    }
}
