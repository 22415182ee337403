//! Activation Sequencing
//!
//! Post-order depth-first traversal: every prerequisite is emitted before the
//! module that requires it, so the output is a valid activation order.
//! O(V + E), each module visited at most once.

use super::cycles::{cycle_from_path, Color, Frame};
use crate::domain::entities::{ActiveModuleSet, DependencyGraph};
use crate::domain::errors::EngineError;
use crate::domain::value_objects::ModuleKey;
use std::collections::{HashMap, HashSet};

/// Order in which `target` and all of its transitive prerequisites must be
/// activated. `target` is always the last element.
///
/// Best effort on cyclic graphs: a module is marked seen on entry, so a
/// back-edge is skipped instead of looping forever. The result then omits
/// that edge silently. Use [`strict_activation_sequence`] or
/// [`validate_graph`](super::validate_graph) when cycle-freedom matters.
pub fn activation_sequence(target: &ModuleKey, graph: &DependencyGraph) -> Vec<ModuleKey> {
    let mut seen: HashSet<&ModuleKey> = HashSet::from([target]);
    let mut stack = vec![Frame::new(target)];
    let mut sequence = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;

        let Some(dep) = graph.dependencies_of(node).get(frame.next) else {
            sequence.push(node.clone());
            stack.pop();
            continue;
        };
        frame.next += 1;

        if seen.insert(dep) {
            stack.push(Frame::new(dep));
        }
    }

    sequence
}

/// Same order as [`activation_sequence`], but fails with
/// [`EngineError::CycleDetected`] when the traversal from `target` meets a
/// module still on the current path.
pub fn strict_activation_sequence(
    target: &ModuleKey,
    graph: &DependencyGraph,
) -> Result<Vec<ModuleKey>, EngineError> {
    let mut colors: HashMap<&ModuleKey, Color> = HashMap::from([(target, Color::Gray)]);
    let mut path = vec![Frame::new(target)];
    let mut sequence = Vec::new();

    while let Some(frame) = path.last_mut() {
        let node = frame.node;

        let Some(dep) = graph.dependencies_of(node).get(frame.next) else {
            colors.insert(node, Color::Black);
            sequence.push(node.clone());
            path.pop();
            continue;
        };
        frame.next += 1;

        match colors.get(dep).copied() {
            Some(Color::Black) => {}
            Some(Color::Gray) => {
                return Err(EngineError::CycleDetected {
                    cycle: cycle_from_path(&path, dep),
                })
            }
            None => {
                colors.insert(dep, Color::Gray);
                path.push(Frame::new(dep));
            }
        }
    }

    Ok(sequence)
}

/// Order in which active modules must be switched off so that `target` can
/// be deactivated without ever leaving an active module with an inactive
/// prerequisite.
///
/// Every active transitive dependent of `target` comes before the modules it
/// requires; `target` is the last element. Inactive dependents (and anything
/// reachable only through them) are left out.
pub fn deactivation_sequence(
    target: &ModuleKey,
    active: &ActiveModuleSet,
    graph: &DependencyGraph,
) -> Vec<ModuleKey> {
    // Reverse adjacency: prerequisite -> modules requiring it, in graph order
    let mut dependents: HashMap<&ModuleKey, Vec<&ModuleKey>> = HashMap::new();
    for (module, requires) in graph.iter() {
        for dep in requires {
            if dep != module {
                dependents.entry(dep).or_default().push(module);
            }
        }
    }

    let mut seen: HashSet<&ModuleKey> = HashSet::from([target]);
    let mut stack = vec![Frame::new(target)];
    let mut sequence = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;

        let next = dependents
            .get(node)
            .and_then(|children| children.get(frame.next))
            .copied();
        let Some(child) = next else {
            sequence.push(node.clone());
            stack.pop();
            continue;
        };
        frame.next += 1;

        if active.contains(child) && seen.insert(child) {
            stack.push(Frame::new(child));
        }
    }

    sequence
}
