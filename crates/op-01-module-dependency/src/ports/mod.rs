//! Ports module for Module Dependency
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::ModuleDependencyApi;
pub use outbound::ModuleCatalog;
