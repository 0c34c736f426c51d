use crate::activity::{Activity, Instant};
use crate::calculations::forward_pass::ForwardSchedule;
use crate::error::{ScheduleError, ScheduleResult};
use crate::graph::DependencyGraph;
use tracing::debug;

pub(crate) struct BackwardPass<'g, 'a> {
    graph: &'g DependencyGraph<'a>,
}

impl<'g, 'a> BackwardPass<'g, 'a> {
    pub(crate) fn new(graph: &'g DependencyGraph<'a>) -> Self {
        Self { graph }
    }

    /// Walks `order` in reverse, anchoring tasks without dependents at the
    /// project finish. Returns finalized activities in catalog order.
    ///
    /// Fails with `Overflow` when a latest start falls off the timeline.
    pub(crate) fn execute(
        &self,
        order: &[usize],
        forward: ForwardSchedule,
    ) -> ScheduleResult<Vec<Activity>> {
        let project_end = forward.project_finish;
        let mut late_starts: Vec<Instant> = vec![project_end; forward.activities.len()];
        let mut late_finishes: Vec<Instant> = vec![project_end; forward.activities.len()];

        for &position in order.iter().rev() {
            let lf = self
                .graph
                .dependents(position)
                .into_iter()
                .map(|dependent| late_starts[dependent])
                .min()
                .unwrap_or(project_end);

            late_finishes[position] = lf;
            late_starts[position] = lf
                .checked_sub(forward.activities[position].duration())
                .ok_or_else(|| ScheduleError::Overflow {
                    task: self.graph.catalog().task(position).name().to_string(),
                })?;
        }

        let activities = forward
            .activities
            .into_iter()
            .zip(late_finishes)
            .map(|(provisional, lf)| provisional.finalize(lf))
            .collect::<ScheduleResult<Vec<_>>>()?;

        for activity in &activities {
            debug!(
                task = activity.name(),
                latest_finish = %activity.latest_finish(),
                slack = %activity.slack(),
                "backward pass"
            );
        }
        debug_assert!(activities.is_empty() || activities.iter().any(Activity::is_critical));

        Ok(activities)
    }
}
