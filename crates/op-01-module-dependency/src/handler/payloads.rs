//! Request and response payloads for module toggling

use crate::domain::value_objects::{ModuleKey, ModuleState, TenantId};
use serde::{Deserialize, Serialize};

/// Request to switch one module on or off for a tenant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleModuleRequest {
    pub tenant_id: TenantId,
    /// Raw key text as sent by the client; normalized by the handler
    pub module_key: String,
    pub activate: bool,
}

impl ToggleModuleRequest {
    pub fn activate(tenant_id: TenantId, module_key: impl Into<String>) -> Self {
        Self {
            tenant_id,
            module_key: module_key.into(),
            activate: true,
        }
    }

    pub fn deactivate(tenant_id: TenantId, module_key: impl Into<String>) -> Self {
        Self {
            tenant_id,
            module_key: module_key.into(),
            activate: false,
        }
    }

    pub fn requested_state(&self) -> ModuleState {
        ModuleState::from(self.activate)
    }
}

/// Outcome of a toggle request.
///
/// A blocked toggle is an ordinary response with `success == false` and the
/// blocking modules listed: unmet prerequisites for an activation, active
/// dependents for a deactivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleModuleResponse {
    pub tenant_id: TenantId,
    pub module_key: ModuleKey,
    pub success: bool,
    /// True when the stored state was actually changed
    pub changed: bool,
    /// Module state after handling the request
    pub state: ModuleState,
    pub blocking_modules: Vec<ModuleKey>,
}

impl ToggleModuleResponse {
    pub(crate) fn applied(
        tenant_id: TenantId,
        module_key: ModuleKey,
        state: ModuleState,
        changed: bool,
    ) -> Self {
        Self {
            tenant_id,
            module_key,
            success: true,
            changed,
            state,
            blocking_modules: vec![],
        }
    }

    pub(crate) fn blocked(
        tenant_id: TenantId,
        module_key: ModuleKey,
        state: ModuleState,
        blocking_modules: Vec<ModuleKey>,
    ) -> Self {
        Self {
            tenant_id,
            module_key,
            success: false,
            changed: false,
            state,
            blocking_modules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_json() {
        let tenant = TenantId::new();
        let json = format!(
            r#"{{ "tenantId": "{}", "moduleKey": "split_pagamento", "activate": true }}"#,
            tenant
        );

        let request: ToggleModuleRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request.tenant_id, tenant);
        assert_eq!(request.module_key, "split_pagamento");
        assert_eq!(request.requested_state(), ModuleState::Active);
    }

    #[test]
    fn test_blocked_response_is_unsuccessful() {
        let response = ToggleModuleResponse::blocked(
            TenantId::new(),
            ModuleKey::new("SPLIT_PAGAMENTO").unwrap(),
            ModuleState::Inactive,
            vec![ModuleKey::new("FINANCEIRO").unwrap()],
        );

        assert!(!response.success);
        assert!(!response.changed);
        assert_eq!(response.blocking_modules.len(), 1);
    }
}
