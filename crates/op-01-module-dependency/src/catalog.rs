//! Default Ortho+ Module Catalog
//!
//! The optional modules a clinic can subscribe to, with their prerequisites.
//! Tenants start from this graph unless their catalog store says otherwise.

use crate::adapters::toml_catalog::parse_catalog;
use crate::domain::entities::DependencyGraph;
use crate::domain::errors::EngineError;

/// Catalog document for the stock module set.
pub const DEFAULT_CATALOG_TOML: &str = r#"
# Clinical
[[module]]
key = "PEP"

[[module]]
key = "AGENDA"

[[module]]
key = "ORCAMENTOS"
requires = ["PEP"]

[[module]]
key = "TELEODONTOLOGIA"
requires = ["AGENDA", "PEP"]

# Back office
[[module]]
key = "FINANCEIRO"

[[module]]
key = "ESTOQUE"

[[module]]
key = "PDV"
requires = ["FINANCEIRO", "ESTOQUE"]

[[module]]
key = "FATURAMENTO"
requires = ["FINANCEIRO"]

[[module]]
key = "NFE"
requires = ["FATURAMENTO"]

# Payments
[[module]]
key = "SPLIT_PAGAMENTO"
requires = ["FINANCEIRO"]

[[module]]
key = "CRYPTO_PAYMENTS"
requires = ["FINANCEIRO"]
"#;

/// Build the default module graph.
pub fn default_catalog() -> Result<DependencyGraph, EngineError> {
    parse_catalog(DEFAULT_CATALOG_TOML)
}
