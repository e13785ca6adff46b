//! Depth-first path recovery.
//!
//! The search keeps one growing path and one visited set for the whole query.
//! Each step pushes its node on entry and pops it again when the branch fails,
//! so whatever is left in the path on success is a simple walk. Pending
//! branches live on an explicit stack of frames, so the depth of the search is
//! bounded by memory rather than by the thread's call stack.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::{
    error::{GraphError, Result},
    graph::GraphMatrix,
    traversal::Traversal,
};

/// Outcome of entering one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The target was reached; the path holds the answer.
    Found,
    /// The node was already visited on another branch.
    Blocked,
    /// Every neighbour was tried without reaching the target.
    NotFound,
}

/// A node whose neighbours are still being tried.
#[derive(Debug)]
struct Frame {
    next_steps: Vec<usize>,
    cursor: usize,
}

enum Entered {
    Finished(Step),
    Expanding(Frame),
}

/// Depth-first search that also reconstructs the path it found.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl DepthFirst {
    /// Find a simple path from `a` to `b`.
    ///
    /// Neighbours are tried in ascending matrix index order, so the result is
    /// reproducible for a given connection list.
    pub fn find_path<T: Eq + Hash + Clone>(
        &self,
        graph: &GraphMatrix<T>,
        a: &T,
        b: &T,
    ) -> Result<Vec<T>, T> {
        let from = graph.check_membership(a)?;
        let to = graph.check_membership(b)?;

        let mut path: Vec<usize> = Vec::new();
        let mut visited: FxHashSet<usize> = FxHashSet::default();

        match Self::search(graph, from, to, &mut path, &mut visited) {
            Step::Found => Ok(path
                .into_iter()
                .map(|i| graph.nodes()[i].clone())
                .collect()),
            Step::Blocked | Step::NotFound => {
                tracing::debug!(from, to, visited = visited.len(), "no path found");
                Err(GraphError::NoPath {
                    from: a.clone(),
                    to: b.clone(),
                })
            }
        }
    }

    fn search<T: Eq + Hash + Clone>(
        graph: &GraphMatrix<T>,
        from: usize,
        target: usize,
        path: &mut Vec<usize>,
        visited: &mut FxHashSet<usize>,
    ) -> Step {
        let mut stack: Vec<Frame> = Vec::new();

        match Self::enter(graph, from, target, path, visited) {
            Entered::Finished(step) => return step,
            Entered::Expanding(frame) => stack.push(frame),
        }

        while let Some(frame) = stack.last_mut() {
            if frame.cursor == frame.next_steps.len() {
                // Dead end, the parent moves on to its next neighbour
                stack.pop();
                path.pop();
                continue;
            }

            let next = frame.next_steps[frame.cursor];
            frame.cursor += 1;

            match Self::enter(graph, next, target, path, visited) {
                Entered::Finished(Step::Found) => return Step::Found,
                Entered::Finished(Step::Blocked | Step::NotFound) => continue,
                Entered::Expanding(frame) => stack.push(frame),
            }
        }

        Step::NotFound
    }

    // Push `current` onto the path and either settle it or open a frame for
    // its unvisited neighbours.
    fn enter<T: Eq + Hash + Clone>(
        graph: &GraphMatrix<T>,
        current: usize,
        target: usize,
        path: &mut Vec<usize>,
        visited: &mut FxHashSet<usize>,
    ) -> Entered {
        path.push(current);
        if current == target {
            return Entered::Finished(Step::Found);
        }

        if !visited.insert(current) {
            tracing::trace!(current, "already visited");
            path.pop();
            return Entered::Finished(Step::Blocked);
        }

        let next_steps = graph.next_steps(current, visited);
        tracing::trace!(current, ?next_steps, depth = path.len(), "expanding");

        Entered::Expanding(Frame {
            next_steps,
            cursor: 0,
        })
    }
}

impl<T: Eq + Hash + Clone> Traversal<T> for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn are_connected(&self, graph: &GraphMatrix<T>, a: &T, b: &T) -> Result<bool, T> {
        match self.find_path(graph, a, b) {
            Ok(_) => Ok(true),
            Err(GraphError::NoPath { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
