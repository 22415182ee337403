//! Module Dependency Service
//!
//! Main service implementing ModuleDependencyApi.

use crate::algorithms;
use crate::config::EngineConfig;
use crate::domain::entities::{
    ActivationCheck, ActiveModuleSet, DeactivationCheck, DependencyGraph, GraphValidation,
};
use crate::domain::errors::EngineError;
use crate::domain::value_objects::ModuleKey;
use crate::ports::inbound::ModuleDependencyApi;

use tracing::{debug, warn};

/// Module Dependency Service
///
/// Stateless apart from its configuration: each call works on the graph and
/// active set it is handed and retains nothing afterwards, so one instance can
/// serve many tenants concurrently.
#[derive(Debug, Clone, Default)]
pub struct ModuleDependencyService {
    config: EngineConfig,
}

impl ModuleDependencyService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reject graphs larger than the configured module and edge limits.
    pub fn ensure_within_limits(&self, graph: &DependencyGraph) -> Result<(), EngineError> {
        if graph.len() > self.config.max_modules {
            return Err(EngineError::GraphTooLarge {
                modules: graph.len(),
                max: self.config.max_modules,
            });
        }

        let edges = graph.edge_count();
        if edges > self.config.max_edges {
            return Err(EngineError::TooManyEdges {
                count: edges,
                max: self.config.max_edges,
            });
        }

        Ok(())
    }
}

impl ModuleDependencyApi for ModuleDependencyService {
    fn can_activate(
        &self,
        module: &ModuleKey,
        active: &ActiveModuleSet,
        graph: &DependencyGraph,
    ) -> ActivationCheck {
        let check = algorithms::can_activate(module, active, graph);

        debug!(
            module = %module,
            can_activate = check.can_activate,
            unmet = check.unmet_dependencies.len(),
            "Evaluated activation"
        );

        check
    }

    fn can_deactivate(
        &self,
        module: &ModuleKey,
        active: &ActiveModuleSet,
        graph: &DependencyGraph,
    ) -> DeactivationCheck {
        let check = algorithms::can_deactivate(module, active, graph);

        debug!(
            module = %module,
            can_deactivate = check.can_deactivate,
            dependents = check.dependent_modules.len(),
            "Evaluated deactivation"
        );

        check
    }

    fn activation_sequence(&self, target: &ModuleKey, graph: &DependencyGraph) -> Vec<ModuleKey> {
        let sequence = algorithms::activation_sequence(target, graph);
        debug!(target = %target, steps = sequence.len(), "Computed activation sequence");
        sequence
    }

    fn validate_graph(&self, graph: &DependencyGraph) -> GraphValidation {
        let validation = algorithms::validate_graph(graph);

        if let Some(first) = validation.cycles.first() {
            warn!(
                modules = graph.len(),
                cycles = validation.cycles.len(),
                first_cycle = %first,
                "Module dependency graph contains cycles"
            );
        }

        validation
    }

    fn strict_activation_sequence(
        &self,
        target: &ModuleKey,
        graph: &DependencyGraph,
    ) -> Result<Vec<ModuleKey>, EngineError> {
        algorithms::strict_activation_sequence(target, graph)
    }

    fn deactivation_sequence(
        &self,
        target: &ModuleKey,
        active: &ActiveModuleSet,
        graph: &DependencyGraph,
    ) -> Vec<ModuleKey> {
        let sequence = algorithms::deactivation_sequence(target, active, graph);
        debug!(target = %target, steps = sequence.len(), "Computed deactivation sequence");
        sequence
    }
}
