//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::{ActiveModuleSet, DependencyGraph};
use crate::domain::errors::CatalogError;
use crate::domain::value_objects::{ModuleKey, ModuleState, TenantId};
use async_trait::async_trait;

/// Module catalog store
///
/// Supplies, per tenant, the dependency map and the active module set, and
/// persists activation flags. The engine never calls this itself; the
/// activation handler fetches both snapshots and passes them in.
#[async_trait]
pub trait ModuleCatalog: Send + Sync {
    /// Load the full dependency map visible to `tenant`.
    async fn load_dependencies(&self, tenant: TenantId) -> Result<DependencyGraph, CatalogError>;

    /// Load the modules currently active for `tenant`.
    async fn load_active_modules(&self, tenant: TenantId) -> Result<ActiveModuleSet, CatalogError>;

    /// Persist a new activation state for one module.
    async fn set_module_state(
        &self,
        tenant: TenantId,
        module: &ModuleKey,
        state: ModuleState,
    ) -> Result<(), CatalogError>;
}

/// Mock implementations for testing
#[cfg(test)]
pub mod mocks {
    use super::*;

    /// Catalog whose store is always unreachable
    pub struct UnavailableCatalog;

    #[async_trait]
    impl ModuleCatalog for UnavailableCatalog {
        async fn load_dependencies(
            &self,
            _tenant: TenantId,
        ) -> Result<DependencyGraph, CatalogError> {
            Err(CatalogError::ReadFailed("store offline".to_string()))
        }

        async fn load_active_modules(
            &self,
            _tenant: TenantId,
        ) -> Result<ActiveModuleSet, CatalogError> {
            Err(CatalogError::ReadFailed("store offline".to_string()))
        }

        async fn set_module_state(
            &self,
            _tenant: TenantId,
            _module: &ModuleKey,
            _state: ModuleState,
        ) -> Result<(), CatalogError> {
            Err(CatalogError::WriteFailed("store offline".to_string()))
        }
    }
}
