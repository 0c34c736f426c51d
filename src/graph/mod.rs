use crate::catalog::Catalog;
use crate::error::{ScheduleError, ScheduleResult};
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub mod builder;

pub use builder::GraphBuilder;

/// Prerequisite -> dependent edges over the tasks of one catalog.
///
/// Node `i` is the task at catalog position `i`. The graph borrows the catalog
/// and is rebuilt for every scheduling run.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) graph: DiGraph<usize, ()>,
}

impl<'a> DependencyGraph<'a> {
    /// Fails with `UnknownPrerequisite` when a task names a prerequisite
    /// missing from the catalog. Cycles are not an error here.
    pub fn build(catalog: &'a Catalog) -> ScheduleResult<Self> {
        GraphBuilder::new(catalog).build()
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.graph)
    }

    /// Kahn's algorithm. Among tasks whose prerequisites are all placed, the
    /// one earliest in the catalog goes first, so the order is reproducible.
    ///
    /// Fails with `CyclicDependency` naming every task that could not be
    /// placed, in catalog order.
    pub fn topological_order(&self) -> ScheduleResult<Vec<usize>> {
        let mut in_degree: Vec<usize> = self
            .graph
            .node_indices()
            .map(|node| {
                self.graph
                    .neighbors_directed(node, Direction::Incoming)
                    .count()
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(position, _)| Reverse(position))
            .collect();

        let mut order = Vec::with_capacity(in_degree.len());
        while let Some(Reverse(position)) = ready.pop() {
            order.push(position);
            for dependent in self
                .graph
                .neighbors_directed(NodeIndex::new(position), Direction::Outgoing)
            {
                let degree = &mut in_degree[dependent.index()];
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(dependent.index()));
                }
            }
        }

        if order.len() != in_degree.len() {
            let tasks = in_degree
                .iter()
                .enumerate()
                .filter(|(_, degree)| **degree > 0)
                .map(|(position, _)| self.catalog.task(position).name().to_string())
                .collect();
            return Err(ScheduleError::CyclicDependency { tasks });
        }

        Ok(order)
    }

    pub fn topological_names(&self) -> ScheduleResult<Vec<&'a str>> {
        Ok(self
            .topological_order()?
            .into_iter()
            .map(|position| self.catalog.task(position).name())
            .collect())
    }

    /// Prerequisite positions, in the order the task declares them.
    pub fn prerequisites(&self, position: usize) -> Vec<usize> {
        self.catalog
            .task(position)
            .prerequisites()
            .iter()
            .filter_map(|name| self.catalog.position(name))
            .collect()
    }

    /// Dependent positions, in catalog order.
    pub fn dependents(&self, position: usize) -> Vec<usize> {
        let mut dependents: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(position), Direction::Outgoing)
            .map(NodeIndex::index)
            .collect();
        dependents.sort_unstable();
        dependents
    }

    /// Tasks without prerequisites, in catalog order.
    pub fn sources(&self) -> Vec<&'a str> {
        self.positions_without(Direction::Incoming)
    }

    /// Tasks nobody depends on, in catalog order. These are the tasks that
    /// lead straight to the end of the project.
    pub fn sinks(&self) -> Vec<&'a str> {
        self.positions_without(Direction::Outgoing)
    }

    fn positions_without(&self, direction: Direction) -> Vec<&'a str> {
        self.graph
            .node_indices()
            .filter(|node| self.graph.neighbors_directed(*node, direction).next().is_none())
            .map(|node| self.catalog.task(node.index()).name())
            .collect()
    }
}
