//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound catalog port and loads catalog documents.

mod memory;
pub mod toml_catalog;

pub use memory::InMemoryModuleCatalog;
pub use toml_catalog::{load_catalog, parse_catalog};
