//! # OP-01: Module Dependency Subsystem
//!
//! Decides whether a clinic may switch an optional module on or off, given
//! the module dependency graph and the clinic's currently active modules.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (DependencyGraph, ActiveModuleSet, Cycle, check results)
//! - **Algorithms**: Gating, post-order DFS sequencing, three-color cycle detection
//! - **Ports**: Inbound (ModuleDependencyApi) and Outbound (ModuleCatalog)
//! - **Application**: Service orchestration
//! - **Handler**: Toggle commands and rollout planning on top of a catalog store
//! - **Adapters**: In-memory catalog, TOML catalog documents
//!
//! ## Example
//!
//! ```
//! use op_01_module_dependency::{
//!     ActiveModuleSet, DependencyGraph, ModuleDependencyApi, ModuleDependencyService, ModuleKey,
//! };
//!
//! let service = ModuleDependencyService::new();
//! let graph = DependencyGraph::from_pairs(&[("SPLIT_PAGAMENTO", &["FINANCEIRO"])]).unwrap();
//! let target = ModuleKey::new("SPLIT_PAGAMENTO").unwrap();
//!
//! let check = service.can_activate(&target, &ActiveModuleSet::new(), &graph);
//! assert!(!check.can_activate);
//! assert_eq!(check.unmet_dependencies[0].as_str(), "FINANCEIRO");
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod handler;
pub mod ports;

pub use adapters::InMemoryModuleCatalog;
pub use application::service::ModuleDependencyService;
pub use catalog::default_catalog;
pub use config::EngineConfig;
pub use domain::entities::*;
pub use domain::errors::{CatalogError, EngineError};
pub use domain::value_objects::*;
pub use handler::{ActivationHandler, ToggleModuleRequest, ToggleModuleResponse};
pub use ports::inbound::ModuleDependencyApi;
pub use ports::outbound::ModuleCatalog;
