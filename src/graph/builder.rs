use super::DependencyGraph;
use crate::catalog::Catalog;
use crate::error::{ScheduleError, ScheduleResult};
use petgraph::graph::{DiGraph, NodeIndex};

pub struct GraphBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn build(&self) -> ScheduleResult<DependencyGraph<'a>> {
        let mut graph: DiGraph<usize, ()> =
            DiGraph::with_capacity(self.catalog.len(), self.edge_estimate());

        // Add nodes first so node index == catalog position
        for position in 0..self.catalog.len() {
            graph.add_node(position);
        }

        // Add edges: prerequisite -> task
        for (position, task) in self.catalog.tasks().enumerate() {
            for prerequisite in task.prerequisites() {
                let source = self.catalog.position(prerequisite).ok_or_else(|| {
                    ScheduleError::UnknownPrerequisite {
                        task: task.name().to_string(),
                        prerequisite: prerequisite.clone(),
                    }
                })?;
                graph.add_edge(NodeIndex::new(source), NodeIndex::new(position), ());
            }
        }

        Ok(DependencyGraph {
            catalog: self.catalog,
            graph,
        })
    }

    fn edge_estimate(&self) -> usize {
        self.catalog
            .tasks()
            .map(|task| task.prerequisites().len())
            .sum()
    }
}
