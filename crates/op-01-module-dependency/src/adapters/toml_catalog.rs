//! TOML Catalog Documents
//!
//! Loads a module dependency graph from a TOML document.
//!
//! # Document Format
//!
//! ```toml
//! [[module]]
//! key = "FINANCEIRO"
//!
//! [[module]]
//! key = "SPLIT_PAGAMENTO"
//! requires = ["FINANCEIRO"]
//! ```
//!
//! Modules keep document order, so graph iteration (and every result derived
//! from it) follows the file.

use crate::domain::entities::DependencyGraph;
use crate::domain::errors::EngineError;
use crate::domain::value_objects::ModuleKey;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "module")]
    modules: Vec<ModuleEntry>,
}

#[derive(Debug, Deserialize)]
struct ModuleEntry {
    key: String,
    #[serde(default)]
    requires: Vec<String>,
}

/// Parse a catalog document.
///
/// Invalid keys and duplicate `[[module]]` entries are rejected.
pub fn parse_catalog(content: &str) -> Result<DependencyGraph, EngineError> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| EngineError::MalformedCatalog(e.to_string()))?;

    let mut graph = DependencyGraph::new();

    for entry in file.modules {
        let module = ModuleKey::new(&entry.key).map_err(|e| {
            EngineError::MalformedCatalog(format!("module {:?}: {}", entry.key, e))
        })?;

        let requires = entry
            .requires
            .iter()
            .map(|dep| {
                ModuleKey::new(dep).map_err(|e| {
                    EngineError::MalformedCatalog(format!(
                        "dependency {:?} of {}: {}",
                        dep, module, e
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if graph.contains(&module) {
            return Err(EngineError::MalformedCatalog(format!(
                "duplicate module entry: {}",
                module
            )));
        }

        graph.insert(module, requires);
    }

    debug!(
        modules = graph.len(),
        edges = graph.edge_count(),
        "Parsed module catalog"
    );

    Ok(graph)
}

/// Load a catalog document from disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<DependencyGraph, EngineError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        EngineError::MalformedCatalog(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_catalog(&content)
}
