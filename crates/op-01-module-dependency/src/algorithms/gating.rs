//! Activation Gating
//!
//! Decides whether a single toggle is currently legal. Only direct edges are
//! inspected: a prerequisite that is itself active is assumed to have had its
//! own prerequisites satisfied when it was activated.

use crate::domain::entities::{ActivationCheck, ActiveModuleSet, DeactivationCheck, DependencyGraph};
use crate::domain::value_objects::ModuleKey;

/// Check whether `module` can be activated given the tenant's active set.
///
/// Unmet prerequisites are reported in declared order. A module that is not
/// a key of `graph` has no prerequisites and is always activatable here.
pub fn can_activate(
    module: &ModuleKey,
    active: &ActiveModuleSet,
    graph: &DependencyGraph,
) -> ActivationCheck {
    let unmet: Vec<ModuleKey> = graph
        .dependencies_of(module)
        .iter()
        .filter(|dep| !active.contains(*dep))
        .cloned()
        .collect();

    ActivationCheck::from_unmet(unmet)
}

/// Check whether `module` can be deactivated given the tenant's active set.
///
/// Every active module (other than `module` itself) that lists `module` as a
/// prerequisite blocks the deactivation. Dependents are reported in graph
/// iteration order.
pub fn can_deactivate(
    module: &ModuleKey,
    active: &ActiveModuleSet,
    graph: &DependencyGraph,
) -> DeactivationCheck {
    let dependents: Vec<ModuleKey> = graph
        .dependents_of(module)
        .into_iter()
        .filter(|dependent| active.contains(*dependent))
        .cloned()
        .collect();

    DeactivationCheck::from_dependents(dependents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ModuleKey {
        ModuleKey::new(s).unwrap()
    }

    fn split_graph() -> DependencyGraph {
        DependencyGraph::from_pairs(&[("SPLIT_PAGAMENTO", &["FINANCEIRO"])]).unwrap()
    }

    #[test]
    fn test_activation_blocked_by_missing_prerequisite() {
        let check = can_activate(&key("SPLIT_PAGAMENTO"), &ActiveModuleSet::new(), &split_graph());

        assert!(!check.can_activate);
        assert_eq!(check.unmet_dependencies, vec![key("FINANCEIRO")]);
    }

    #[test]
    fn test_activation_allowed_when_prerequisite_active() {
        let active = ActiveModuleSet::from_strs(&["FINANCEIRO"]).unwrap();
        let check = can_activate(&key("SPLIT_PAGAMENTO"), &active, &split_graph());

        assert!(check.can_activate);
        assert!(check.unmet_dependencies.is_empty());
    }

    #[test]
    fn test_activation_unknown_module_always_allowed() {
        let check = can_activate(&key("TELEODONTOLOGIA"), &ActiveModuleSet::new(), &split_graph());
        assert!(check.can_activate);
    }

    #[test]
    fn test_activation_reports_unmet_in_declared_order() {
        let graph =
            DependencyGraph::from_pairs(&[("PDV", &["FINANCEIRO", "ESTOQUE", "AGENDA"])]).unwrap();
        let active = ActiveModuleSet::from_strs(&["ESTOQUE"]).unwrap();

        let check = can_activate(&key("PDV"), &active, &graph);

        assert_eq!(check.unmet_dependencies, vec![key("FINANCEIRO"), key("AGENDA")]);
    }

    #[test]
    fn test_activation_ignores_transitive_prerequisites() {
        let graph = DependencyGraph::from_pairs(&[
            ("NFE", &["FATURAMENTO"]),
            ("FATURAMENTO", &["FINANCEIRO"]),
        ])
        .unwrap();
        let active = ActiveModuleSet::from_strs(&["FATURAMENTO"]).unwrap();

        assert!(can_activate(&key("NFE"), &active, &graph).can_activate);
    }

    #[test]
    fn test_deactivation_blocked_by_active_dependent() {
        let active = ActiveModuleSet::from_strs(&["FINANCEIRO", "SPLIT_PAGAMENTO"]).unwrap();
        let check = can_deactivate(&key("FINANCEIRO"), &active, &split_graph());

        assert!(!check.can_deactivate);
        assert_eq!(check.dependent_modules, vec![key("SPLIT_PAGAMENTO")]);
    }

    #[test]
    fn test_deactivation_ignores_inactive_dependents() {
        let active = ActiveModuleSet::from_strs(&["FINANCEIRO"]).unwrap();
        let check = can_deactivate(&key("FINANCEIRO"), &active, &split_graph());

        assert!(check.can_deactivate);
        assert!(check.dependent_modules.is_empty());
    }

    #[test]
    fn test_deactivation_ignores_self_loop() {
        let graph = DependencyGraph::from_pairs(&[("FINANCEIRO", &["FINANCEIRO"])]).unwrap();
        let active = ActiveModuleSet::from_strs(&["FINANCEIRO"]).unwrap();

        assert!(can_deactivate(&key("FINANCEIRO"), &active, &graph).can_deactivate);
    }

    #[test]
    fn test_deactivation_dependents_follow_graph_order() {
        let graph = DependencyGraph::from_pairs(&[
            ("SPLIT_PAGAMENTO", &["FINANCEIRO"]),
            ("PDV", &["ESTOQUE", "FINANCEIRO"]),
            ("CRYPTO_PAYMENTS", &["FINANCEIRO"]),
        ])
        .unwrap();
        let active =
            ActiveModuleSet::from_strs(&["FINANCEIRO", "CRYPTO_PAYMENTS", "SPLIT_PAGAMENTO", "PDV"])
                .unwrap();

        let check = can_deactivate(&key("FINANCEIRO"), &active, &graph);

        assert_eq!(
            check.dependent_modules,
            vec![key("SPLIT_PAGAMENTO"), key("PDV"), key("CRYPTO_PAYMENTS")]
        );
    }
}
