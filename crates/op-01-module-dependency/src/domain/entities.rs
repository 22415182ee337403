//! Core entities for Module Dependency
//!
//! - `DependencyGraph`: module -> direct prerequisites, insertion ordered
//! - `ActiveModuleSet`: modules currently enabled for a tenant
//! - `Cycle`, `GraphValidation`, `ActivationCheck`, `DeactivationCheck`:
//!   structured results handed back to callers

use super::value_objects::{ModuleKey, ModuleKeyError, ModuleState};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

// =============================================================================
// DEPENDENCY GRAPH
// =============================================================================

/// Directed graph where an edge `module -> prerequisite` means the module
/// cannot be active unless the prerequisite is active too.
///
/// Iteration follows insertion order so that every result derived from a
/// graph scan (e.g. dependent lists) is deterministic. Prerequisite lists keep
/// their declared order and never contain duplicates.
///
/// Lookups for modules that are not top-level keys return an empty
/// prerequisite list instead of failing.
///
/// # Example
///
/// ```
/// use op_01_module_dependency::DependencyGraph;
///
/// let graph = DependencyGraph::from_pairs(&[
///     ("SPLIT_PAGAMENTO", &["FINANCEIRO"]),
///     ("FINANCEIRO", &[]),
/// ])
/// .unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Map from module to its direct prerequisites
    requirements: HashMap<ModuleKey, Vec<ModuleKey>>,
    /// Insertion order for deterministic iteration
    insertion_order: Vec<ModuleKey>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from raw key text.
    ///
    /// Fails on the first key that is not a valid `ModuleKey`.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Result<Self, ModuleKeyError> {
        let mut graph = Self::new();

        for (module, requires) in pairs {
            let module = ModuleKey::new(module)?;
            let requires = requires
                .iter()
                .map(ModuleKey::new)
                .collect::<Result<Vec<_>, _>>()?;
            graph.insert(module, requires);
        }

        Ok(graph)
    }

    /// Set the prerequisites of `module`.
    ///
    /// Replacing an existing entry keeps its original position in the
    /// iteration order and returns the previous prerequisites.
    pub fn insert(
        &mut self,
        module: ModuleKey,
        requires: impl IntoIterator<Item = ModuleKey>,
    ) -> Option<Vec<ModuleKey>> {
        let mut deduped: Vec<ModuleKey> = Vec::new();
        for dep in requires {
            if !deduped.contains(&dep) {
                deduped.push(dep);
            }
        }

        let previous = self.requirements.insert(module.clone(), deduped);
        if previous.is_none() {
            self.insertion_order.push(module);
        }
        previous
    }

    /// Add a single edge: `module` requires `dependency`.
    pub fn add_dependency(&mut self, module: ModuleKey, dependency: ModuleKey) {
        if !self.requirements.contains_key(&module) {
            self.insertion_order.push(module.clone());
        }

        let requires = self.requirements.entry(module).or_default();
        if !requires.contains(&dependency) {
            requires.push(dependency);
        }
    }

    /// Direct prerequisites of `module` (empty for unknown modules).
    pub fn dependencies_of(&self, module: &ModuleKey) -> &[ModuleKey] {
        self.requirements
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Modules that directly require `module`, in graph order.
    ///
    /// A module never counts as its own dependent.
    pub fn dependents_of(&self, module: &ModuleKey) -> Vec<&ModuleKey> {
        self.iter()
            .filter(|(candidate, requires)| *candidate != module && requires.contains(module))
            .map(|(candidate, _)| candidate)
            .collect()
    }

    /// Returns true if `module` is a top-level key.
    pub fn contains(&self, module: &ModuleKey) -> bool {
        self.requirements.contains_key(module)
    }

    /// Top-level keys in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleKey> {
        self.insertion_order.iter()
    }

    /// `(module, prerequisites)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModuleKey, &[ModuleKey])> {
        self.insertion_order
            .iter()
            .map(move |module| (module, self.dependencies_of(module)))
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    /// Number of `module -> prerequisite` edges
    pub fn edge_count(&self) -> usize {
        self.requirements.values().map(Vec::len).sum()
    }
}

// =============================================================================
// ACTIVE MODULE SET
// =============================================================================

/// Modules currently enabled for one tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveModuleSet {
    modules: HashSet<ModuleKey>,
}

impl ActiveModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw key text.
    pub fn from_strs(keys: &[&str]) -> Result<Self, ModuleKeyError> {
        keys.iter().map(ModuleKey::new).collect()
    }

    pub fn contains<Q>(&self, module: &Q) -> bool
    where
        ModuleKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.modules.contains(module)
    }

    /// Returns true if the module was not already active.
    pub fn insert(&mut self, module: ModuleKey) -> bool {
        self.modules.insert(module)
    }

    /// Returns true if the module was active.
    pub fn remove(&mut self, module: &ModuleKey) -> bool {
        self.modules.remove(module)
    }

    pub fn state_of(&self, module: &ModuleKey) -> ModuleState {
        ModuleState::from(self.modules.contains(module))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleKey> {
        self.modules.iter()
    }

    /// Active modules in key order.
    pub fn to_sorted_vec(&self) -> Vec<ModuleKey> {
        let mut sorted: Vec<ModuleKey> = self.modules.iter().cloned().collect();
        sorted.sort();
        sorted
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl FromIterator<ModuleKey> for ActiveModuleSet {
    fn from_iter<T: IntoIterator<Item = ModuleKey>>(iter: T) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Outcome of an activation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationCheck {
    pub can_activate: bool,
    /// Direct prerequisites that are not active, in declared order
    pub unmet_dependencies: Vec<ModuleKey>,
}

impl ActivationCheck {
    pub fn from_unmet(unmet_dependencies: Vec<ModuleKey>) -> Self {
        Self {
            can_activate: unmet_dependencies.is_empty(),
            unmet_dependencies,
        }
    }
}

/// Outcome of a deactivation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivationCheck {
    pub can_deactivate: bool,
    /// Active modules that directly require the target, in graph order
    pub dependent_modules: Vec<ModuleKey>,
}

impl DeactivationCheck {
    pub fn from_dependents(dependent_modules: Vec<ModuleKey>) -> Self {
        Self {
            can_deactivate: dependent_modules.is_empty(),
            dependent_modules,
        }
    }
}

/// A dependency loop, starting at the first repeated module met during
/// traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle(Vec<ModuleKey>);

impl Cycle {
    pub fn new(modules: Vec<ModuleKey>) -> Self {
        Self(modules)
    }

    pub fn modules(&self) -> &[ModuleKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, module: &ModuleKey) -> bool {
        self.0.contains(module)
    }

    /// Same loop rotated so that it starts at its smallest key.
    ///
    /// Two traversals entering one loop at different modules produce equal
    /// canonical cycles.
    pub fn canonical(&self) -> Cycle {
        let start = self
            .0
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut rotated = self.0.clone();
        rotated.rotate_left(start);
        Cycle(rotated)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for module in &self.0 {
            write!(f, "{} -> ", module)?;
        }
        match self.0.first() {
            Some(first) => write!(f, "{}", first),
            None => f.write_str("<empty>"),
        }
    }
}

/// Outcome of a whole-graph validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphValidation {
    pub is_valid: bool,
    /// Every cycle met during traversal, possibly more than once
    pub cycles: Vec<Cycle>,
}

impl GraphValidation {
    pub fn from_cycles(cycles: Vec<Cycle>) -> Self {
        Self {
            is_valid: cycles.is_empty(),
            cycles,
        }
    }

    /// Reported cycles in canonical form with duplicates removed, first
    /// occurrence order preserved.
    pub fn distinct_cycles(&self) -> Vec<Cycle> {
        let mut seen: HashSet<Cycle> = HashSet::new();
        self.cycles
            .iter()
            .map(Cycle::canonical)
            .filter(|cycle| seen.insert(cycle.clone()))
            .collect()
    }
}
