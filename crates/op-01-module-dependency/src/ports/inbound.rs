//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{
    ActivationCheck, ActiveModuleSet, DeactivationCheck, DependencyGraph, GraphValidation,
};
use crate::domain::errors::EngineError;
use crate::domain::value_objects::ModuleKey;

/// Primary Module Dependency API
///
/// Every operation is a pure function of its arguments: the graph and the
/// active set are caller-owned snapshots, borrowed read-only for the call.
pub trait ModuleDependencyApi: Send + Sync {
    /// Check whether `module` can be activated.
    ///
    /// Only direct prerequisites are inspected.
    fn can_activate(
        &self,
        module: &ModuleKey,
        active: &ActiveModuleSet,
        graph: &DependencyGraph,
    ) -> ActivationCheck;

    /// Check whether `module` can be deactivated.
    fn can_deactivate(
        &self,
        module: &ModuleKey,
        active: &ActiveModuleSet,
        graph: &DependencyGraph,
    ) -> DeactivationCheck;

    /// Topological activation order ending with `target`.
    ///
    /// Best effort on cyclic graphs.
    fn activation_sequence(&self, target: &ModuleKey, graph: &DependencyGraph) -> Vec<ModuleKey>;

    /// Report every cycle reachable from the graph's keys.
    fn validate_graph(&self, graph: &DependencyGraph) -> GraphValidation;

    /// Activation order that fails on the first cycle met.
    fn strict_activation_sequence(
        &self,
        target: &ModuleKey,
        graph: &DependencyGraph,
    ) -> Result<Vec<ModuleKey>, EngineError>;

    /// Order in which active dependents must be switched off, ending with
    /// `target`.
    fn deactivation_sequence(
        &self,
        target: &ModuleKey,
        active: &ActiveModuleSet,
        graph: &DependencyGraph,
    ) -> Vec<ModuleKey>;
}
