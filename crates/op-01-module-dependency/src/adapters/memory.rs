//! In-Memory Module Catalog Adapter
//!
//! Implements `ModuleCatalog` with per-tenant graphs and active sets kept in
//! process memory. Used by tests and by embedders that load catalogs once
//! at startup.

use crate::domain::entities::{ActiveModuleSet, DependencyGraph};
use crate::domain::errors::CatalogError;
use crate::domain::value_objects::{ModuleKey, ModuleState, TenantId};
use crate::ports::outbound::ModuleCatalog;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct TenantModules {
    graph: DependencyGraph,
    active: ActiveModuleSet,
}

/// Tenant-isolated module catalog held in memory.
///
/// Each tenant owns an independent dependency graph and active set; reads
/// return snapshots so callers never observe a later mutation mid-decision.
#[derive(Debug, Default)]
pub struct InMemoryModuleCatalog {
    tenants: RwLock<HashMap<TenantId, TenantModules>>,
}

impl InMemoryModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a tenant's graph and active set.
    pub fn register_tenant(
        &self,
        tenant: TenantId,
        graph: DependencyGraph,
        active: ActiveModuleSet,
    ) {
        debug!(
            tenant = %tenant,
            modules = graph.len(),
            active = active.len(),
            "Registering tenant catalog"
        );
        self.tenants
            .write()
            .insert(tenant, TenantModules { graph, active });
    }
}

#[async_trait]
impl ModuleCatalog for InMemoryModuleCatalog {
    async fn load_dependencies(&self, tenant: TenantId) -> Result<DependencyGraph, CatalogError> {
        self.tenants
            .read()
            .get(&tenant)
            .map(|entry| entry.graph.clone())
            .ok_or(CatalogError::TenantNotFound(tenant))
    }

    async fn load_active_modules(&self, tenant: TenantId) -> Result<ActiveModuleSet, CatalogError> {
        self.tenants
            .read()
            .get(&tenant)
            .map(|entry| entry.active.clone())
            .ok_or(CatalogError::TenantNotFound(tenant))
    }

    async fn set_module_state(
        &self,
        tenant: TenantId,
        module: &ModuleKey,
        state: ModuleState,
    ) -> Result<(), CatalogError> {
        let mut tenants = self.tenants.write();
        let entry = tenants
            .get_mut(&tenant)
            .ok_or(CatalogError::TenantNotFound(tenant))?;

        match state {
            ModuleState::Active => entry.active.insert(module.clone()),
            ModuleState::Inactive => entry.active.remove(module),
        };

        Ok(())
    }
}
