//! Domain invariants for Module Dependency
//!
//! Pure checkers used by tests and by callers that want to audit stored
//! tenant state against the catalog.

use super::entities::{ActiveModuleSet, DependencyGraph};
use super::value_objects::ModuleKey;
use std::collections::HashSet;

/// Dependencies satisfied: no active module has an inactive direct
/// prerequisite.
pub fn invariant_dependencies_satisfied(active: &ActiveModuleSet, graph: &DependencyGraph) -> bool {
    active.iter().all(|module| {
        graph
            .dependencies_of(module)
            .iter()
            .all(|dep| active.contains(dep))
    })
}

/// Topological order: every prerequisite of a module in `sequence` appears
/// earlier in `sequence`.
pub fn invariant_topological_order(sequence: &[ModuleKey], graph: &DependencyGraph) -> bool {
    let mut placed: HashSet<&ModuleKey> = HashSet::new();

    for module in sequence {
        for dep in graph.dependencies_of(module) {
            if !placed.contains(dep) {
                return false;
            }
        }
        placed.insert(module);
    }

    true
}

/// Each module appears at most once in `sequence`.
pub fn invariant_no_duplicates(sequence: &[ModuleKey]) -> bool {
    let mut seen = HashSet::new();
    sequence.iter().all(|module| seen.insert(module))
}
