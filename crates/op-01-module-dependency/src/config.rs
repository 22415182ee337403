//! Configuration for the Module Dependency Subsystem

use serde::{Deserialize, Serialize};
use std::env;

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum top-level modules in a catalog graph
    pub max_modules: usize,
    /// Maximum `module -> prerequisite` edges (anti-DoS)
    pub max_edges: usize,
    /// Refuse to act on a tenant whose catalog contains a cycle
    pub reject_cyclic_catalog: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_modules: 512,
            max_edges: 4096,
            reject_cyclic_catalog: true,
        }
    }
}

impl EngineConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OP_MAX_MODULES`: Module limit (default: 512)
    /// - `OP_MAX_EDGES`: Edge limit (default: 4096)
    /// - `OP_REJECT_CYCLIC_CATALOG`: Refuse cyclic catalogs (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_modules: env::var("OP_MAX_MODULES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_modules),

            max_edges: env::var("OP_MAX_EDGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_edges),

            reject_cyclic_catalog: env::var("OP_REJECT_CYCLIC_CATALOG")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.reject_cyclic_catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_modules, 512);
        assert_eq!(config.max_edges, 4096);
        assert!(config.reject_cyclic_catalog);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "max_edges": 10 }"#).unwrap();
        assert_eq!(config.max_edges, 10);
        assert_eq!(config.max_modules, 512);
        assert!(config.reject_cyclic_catalog);
    }
}
