//! Error types for Module Dependency
//!
//! Blocked activations, blocking dependents and cycles are NOT errors: they
//! come back as structured results. The variants here cover malformed input
//! and collaborator failures only.

use super::entities::Cycle;
use super::value_objects::{ModuleKeyError, TenantId};
use thiserror::Error;

/// Errors raised by the engine, the activation handler and catalog loading
#[derive(Debug, Error)]
pub enum EngineError {
    /// Strict traversal met a module that is still on the current path
    #[error("Cycle detected in module dependency graph: {cycle}")]
    CycleDetected { cycle: Cycle },

    /// Module count exceeded configured limits
    #[error("Dependency graph too large: {modules} modules > {max}")]
    GraphTooLarge { modules: usize, max: usize },

    /// Edge count exceeded configured limits
    #[error("Edge count exceeded: {count} > {max}")]
    TooManyEdges { count: usize, max: usize },

    /// Catalog document could not be turned into a graph
    #[error("Malformed module catalog: {0}")]
    MalformedCatalog(String),

    /// Module key text failed validation
    #[error("Invalid module key: {0}")]
    InvalidModuleKey(#[from] ModuleKeyError),

    /// Catalog store failure
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors reported by a module catalog store
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Tenant not found: {0}")]
    TenantNotFound(TenantId),

    #[error("Catalog read failed: {0}")]
    ReadFailed(String),

    #[error("Catalog write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ModuleKey;

    #[test]
    fn test_error_display() {
        let err = EngineError::GraphTooLarge {
            modules: 600,
            max: 512,
        };
        assert_eq!(err.to_string(), "Dependency graph too large: 600 modules > 512");
    }

    #[test]
    fn test_cycle_detected_error() {
        let cycle = Cycle::new(vec![
            ModuleKey::new("AA").unwrap(),
            ModuleKey::new("BB").unwrap(),
        ]);
        let err = EngineError::CycleDetected { cycle };
        assert_eq!(
            err.to_string(),
            "Cycle detected in module dependency graph: AA -> BB -> AA"
        );
    }

    #[test]
    fn test_invalid_key_converts() {
        let err: EngineError = ModuleKey::new("x").unwrap_err().into();
        assert!(matches!(err, EngineError::InvalidModuleKey(_)));
    }
}
