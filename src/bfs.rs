//! Breadth-first reachability.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::{error::Result, graph::GraphMatrix, traversal::Traversal};

/// Breadth-first search answering only the yes/no reachability question.
///
/// Never fails with `NoPath`; an unreachable target is `Ok(false)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl<T: Eq + Hash + Clone> Traversal<T> for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn are_connected(&self, graph: &GraphMatrix<T>, a: &T, b: &T) -> Result<bool, T> {
        let from = graph.check_membership(a)?;
        let to = graph.check_membership(b)?;

        // Diagonal entry
        if from == to {
            return Ok(true);
        }

        let mut visited: FxHashSet<usize> = FxHashSet::default();
        visited.insert(from);

        let seeds = graph.next_steps(from, &visited);
        if seeds.contains(&to) {
            return Ok(true);
        }
        let mut to_visit: VecDeque<usize> = seeds.into();

        while let Some(current) = to_visit.pop_front() {
            // A node can be queued by several parents before it is expanded
            if !visited.insert(current) {
                continue;
            }

            let next_steps = graph.next_steps(current, &visited);
            if next_steps.contains(&to) {
                return Ok(true);
            }
            to_visit.extend(next_steps);
        }

        tracing::debug!(from, to, visited = visited.len(), "target not reachable");
        Ok(false)
    }
}
