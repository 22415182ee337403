//! Activation Handler
//!
//! ## Boundaries
//!
//! - Key text is validated before anything is loaded
//! - Catalog graphs must respect configured size limits
//! - Cyclic catalogs are refused when `reject_cyclic_catalog` is set
//! - State is persisted only after the engine allows the transition
//! - Toggles for one tenant are serialized from snapshot load to persist

use crate::application::service::ModuleDependencyService;
use crate::config::EngineConfig;
use crate::domain::entities::{ActiveModuleSet, DependencyGraph, GraphValidation};
use crate::domain::errors::EngineError;
use crate::domain::value_objects::{ModuleKey, ModuleState, TenantId};
use crate::handler::payloads::{ToggleModuleRequest, ToggleModuleResponse};
use crate::ports::inbound::ModuleDependencyApi;
use crate::ports::outbound::ModuleCatalog;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, warn};

/// Handles module toggle commands and rollout planning for tenants.
///
/// Business refusals (unmet prerequisites, active dependents) come back as
/// unsuccessful responses. Malformed input, oversized or cyclic catalogs and
/// store failures come back as `Err`.
///
/// Toggles for the same tenant run one at a time, so a decision is never made
/// on a snapshot another toggle is about to change. Every writer of a tenant's
/// module state must go through one shared handler for that to hold.
pub struct ActivationHandler<C: ModuleCatalog> {
    service: ModuleDependencyService,
    catalog: Arc<C>,
    tenant_locks: Mutex<HashMap<TenantId, Arc<AsyncMutex<()>>>>,
}

impl<C: ModuleCatalog> ActivationHandler<C> {
    /// Create a new handler with default config.
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Create a new handler with custom config.
    pub fn with_config(catalog: Arc<C>, config: EngineConfig) -> Self {
        Self {
            service: ModuleDependencyService::with_config(config),
            catalog,
            tenant_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Handle a toggle request.
    ///
    /// Requesting the state a module is already in succeeds without touching
    /// the store.
    pub async fn handle_toggle(
        &self,
        request: ToggleModuleRequest,
    ) -> Result<ToggleModuleResponse, EngineError> {
        let tenant = request.tenant_id;
        let module = ModuleKey::new(&request.module_key)?;
        let requested = request.requested_state();

        let lock = self.tenant_lock(tenant);
        let _serialized = lock.lock().await;

        let (graph, active) = self.load_snapshot(tenant).await?;
        self.ensure_acyclic(tenant, &graph)?;

        let current = active.state_of(&module);
        if current == requested {
            info!(
                tenant = %tenant,
                module = %module,
                state = %current,
                "Module already in requested state"
            );
            return Ok(ToggleModuleResponse::applied(tenant, module, current, false));
        }

        let blocking = match requested {
            ModuleState::Active => {
                self.service
                    .can_activate(&module, &active, &graph)
                    .unmet_dependencies
            }
            ModuleState::Inactive => {
                self.service
                    .can_deactivate(&module, &active, &graph)
                    .dependent_modules
            }
        };

        if !blocking.is_empty() {
            warn!(
                tenant = %tenant,
                module = %module,
                requested = %requested,
                blocking = ?blocking,
                "Module toggle blocked by dependencies"
            );
            return Ok(ToggleModuleResponse::blocked(tenant, module, current, blocking));
        }

        self.catalog
            .set_module_state(tenant, &module, requested)
            .await?;

        info!(
            tenant = %tenant,
            module = %module,
            from = %current,
            to = %requested,
            "Module state changed"
        );

        Ok(ToggleModuleResponse::applied(tenant, module, requested, true))
    }

    /// Modules the tenant still has to activate, in order, to end up with
    /// `module_key` active. Already active modules are left out; an empty
    /// plan means the target is already active.
    ///
    /// With `reject_cyclic_catalog` set, only a cycle reachable from the
    /// target fails the plan; loops elsewhere in the catalog do not.
    pub async fn rollout_plan(
        &self,
        tenant: TenantId,
        module_key: &str,
    ) -> Result<Vec<ModuleKey>, EngineError> {
        let module = ModuleKey::new(module_key)?;
        let (graph, active) = self.load_snapshot(tenant).await?;

        let sequence = if self.service.config().reject_cyclic_catalog {
            self.service.strict_activation_sequence(&module, &graph)?
        } else {
            self.service.activation_sequence(&module, &graph)
        };

        Ok(sequence
            .into_iter()
            .filter(|step| !active.contains(step))
            .collect())
    }

    /// Active modules the tenant has to switch off, in order, before
    /// `module_key` itself can be deactivated. The target is the last
    /// element; an empty plan means it is already inactive.
    pub async fn teardown_plan(
        &self,
        tenant: TenantId,
        module_key: &str,
    ) -> Result<Vec<ModuleKey>, EngineError> {
        let module = ModuleKey::new(module_key)?;
        let (graph, active) = self.load_snapshot(tenant).await?;
        self.ensure_acyclic(tenant, &graph)?;

        if !active.contains(&module) {
            return Ok(vec![]);
        }

        Ok(self.service.deactivation_sequence(&module, &active, &graph))
    }

    /// Validate the tenant's catalog without enforcing the cyclic-catalog
    /// policy.
    pub async fn validate_catalog(&self, tenant: TenantId) -> Result<GraphValidation, EngineError> {
        let graph = self.catalog.load_dependencies(tenant).await?;
        self.service.ensure_within_limits(&graph)?;
        Ok(self.service.validate_graph(&graph))
    }

    fn tenant_lock(&self, tenant: TenantId) -> Arc<AsyncMutex<()>> {
        self.tenant_locks.lock().entry(tenant).or_default().clone()
    }

    /// Load graph and active set, enforcing size limits.
    async fn load_snapshot(
        &self,
        tenant: TenantId,
    ) -> Result<(DependencyGraph, ActiveModuleSet), EngineError> {
        let graph = self.catalog.load_dependencies(tenant).await?;
        let active = self.catalog.load_active_modules(tenant).await?;

        self.service.ensure_within_limits(&graph)?;

        Ok((graph, active))
    }

    /// Refuse the whole catalog if it contains any cycle and the policy says so.
    fn ensure_acyclic(
        &self,
        tenant: TenantId,
        graph: &DependencyGraph,
    ) -> Result<(), EngineError> {
        if !self.service.config().reject_cyclic_catalog {
            return Ok(());
        }

        let validation = self.service.validate_graph(graph);
        match validation.cycles.into_iter().next() {
            Some(cycle) => {
                warn!(tenant = %tenant, cycle = %cycle, "Refusing cyclic module catalog");
                Err(EngineError::CycleDetected { cycle })
            }
            None => Ok(()),
        }
    }
}
