//! Cycle Detection
//!
//! Three-color depth-first search, O(V + E):
//! - White: not yet visited
//! - Gray: on the current path
//! - Black: fully explored
//!
//! Meeting a gray module closes a loop; the loop is the suffix of the current
//! path starting at that module.

use crate::domain::entities::{Cycle, DependencyGraph, GraphValidation};
use crate::domain::value_objects::ModuleKey;
use std::collections::HashMap;

/// Traversal mark of a module during depth-first search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Gray,
    Black,
}

/// One level of an explicit depth-first stack: the module and the index of
/// the next edge to follow.
///
/// Walks keep their own stack so depth is bounded by memory, not by the
/// thread stack.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame<'a> {
    pub(crate) node: &'a ModuleKey,
    pub(crate) next: usize,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(node: &'a ModuleKey) -> Self {
        Self { node, next: 0 }
    }
}

/// Slice the current path from the first occurrence of `repeated` onward.
pub(crate) fn cycle_from_path(path: &[Frame<'_>], repeated: &ModuleKey) -> Cycle {
    let start = path
        .iter()
        .position(|frame| frame.node == repeated)
        .unwrap_or(0);
    Cycle::new(path[start..].iter().map(|frame| frame.node.clone()).collect())
}

/// Validate the whole graph, reporting every cycle met during traversal.
///
/// Traversal starts from each top-level key, in graph order, that has not been
/// fully explored yet. Self-loops and disconnected components are handled.
pub fn validate_graph(graph: &DependencyGraph) -> GraphValidation {
    let mut colors: HashMap<&ModuleKey, Color> = HashMap::new();
    let mut cycles: Vec<Cycle> = Vec::new();

    for module in graph.modules() {
        if !colors.contains_key(module) {
            visit(module, graph, &mut colors, &mut cycles);
        }
    }

    GraphValidation::from_cycles(cycles)
}

fn visit<'a>(
    root: &'a ModuleKey,
    graph: &'a DependencyGraph,
    colors: &mut HashMap<&'a ModuleKey, Color>,
    cycles: &mut Vec<Cycle>,
) {
    colors.insert(root, Color::Gray);
    let mut path = vec![Frame::new(root)];

    while let Some(frame) = path.last_mut() {
        let node = frame.node;

        let Some(dep) = graph.dependencies_of(node).get(frame.next) else {
            colors.insert(node, Color::Black);
            path.pop();
            continue;
        };
        frame.next += 1;

        match colors.get(dep).copied() {
            Some(Color::Gray) => cycles.push(cycle_from_path(&path, dep)),
            Some(Color::Black) => {}
            None => {
                colors.insert(dep, Color::Gray);
                path.push(Frame::new(dep));
            }
        }
    }
}
