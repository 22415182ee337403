//! # Engine Scenarios (op-01)
//!
//! Drives the four public operations through `ModuleDependencyApi` the way a
//! clinic settings screen would.
//!
//! ## Test Categories
//!
//! 1. **Activation Gating** - unmet prerequisites, satisfied prerequisites
//! 2. **Deactivation Gating** - active dependents block the switch-off
//! 3. **Sequencing** - chains, leaves, diamonds
//! 4. **Validation** - two-module loops, clean graphs, duplicate reports

use op_01_module_dependency::{
    ActivationCheck, ActiveModuleSet, Cycle, DeactivationCheck, DependencyGraph, EngineError,
    ModuleDependencyApi, ModuleDependencyService, ModuleKey,
};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn key(s: &str) -> ModuleKey {
    ModuleKey::new(s).unwrap()
}

fn keys(list: &[&str]) -> Vec<ModuleKey> {
    list.iter().map(|s| key(s)).collect()
}

fn service() -> ModuleDependencyService {
    op_telemetry::init_test_logging();
    ModuleDependencyService::new()
}

fn split_graph() -> DependencyGraph {
    DependencyGraph::from_pairs(&[("SPLIT_PAGAMENTO", &["FINANCEIRO"])]).unwrap()
}

// =============================================================================
// ACTIVATION / DEACTIVATION GATING
// =============================================================================

#[test]
fn test_activation_blocked_without_prerequisite() {
    let check =
        service().can_activate(&key("SPLIT_PAGAMENTO"), &ActiveModuleSet::new(), &split_graph());

    assert!(!check.can_activate);
    assert_eq!(check.unmet_dependencies, keys(&["FINANCEIRO"]));
}

#[test]
fn test_activation_allowed_with_prerequisite() {
    let active = ActiveModuleSet::from_strs(&["FINANCEIRO"]).unwrap();

    let check = service().can_activate(&key("SPLIT_PAGAMENTO"), &active, &split_graph());

    assert_eq!(check, ActivationCheck::from_unmet(vec![]));
    assert!(check.can_activate);
}

#[test]
fn test_deactivation_blocked_by_active_dependent() {
    let active = ActiveModuleSet::from_strs(&["FINANCEIRO", "SPLIT_PAGAMENTO"]).unwrap();

    let check = service().can_deactivate(&key("FINANCEIRO"), &active, &split_graph());

    assert!(!check.can_deactivate);
    assert_eq!(check.dependent_modules, keys(&["SPLIT_PAGAMENTO"]));
}

#[test]
fn test_deactivation_ignores_inactive_dependent() {
    let active = ActiveModuleSet::from_strs(&["FINANCEIRO"]).unwrap();

    let check = service().can_deactivate(&key("FINANCEIRO"), &active, &split_graph());

    assert_eq!(check, DeactivationCheck::from_dependents(vec![]));
}

#[test]
fn test_unknown_module_has_no_prerequisites() {
    let check = service().can_activate(&key("PEP"), &ActiveModuleSet::new(), &split_graph());
    assert!(check.can_activate);
}

#[test]
fn test_gating_results_serialize_in_camel_case() {
    let check =
        service().can_activate(&key("SPLIT_PAGAMENTO"), &ActiveModuleSet::new(), &split_graph());
    let json = serde_json::to_value(&check).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "canActivate": false, "unmetDependencies": ["FINANCEIRO"] })
    );
}

// =============================================================================
// SEQUENCING
// =============================================================================

#[test]
fn test_chain_sequence_lists_prerequisites_first() {
    let graph =
        DependencyGraph::from_pairs(&[("AA", &["BB"]), ("BB", &["CC"]), ("CC", &[])]).unwrap();

    let sequence = service().activation_sequence(&key("AA"), &graph);

    assert_eq!(sequence, keys(&["CC", "BB", "AA"]));
}

#[test]
fn test_leaf_sequence_is_just_the_target() {
    let graph = DependencyGraph::from_pairs(&[("AA", &[])]).unwrap();
    let service = service();

    assert_eq!(service.activation_sequence(&key("AA"), &graph), keys(&["AA"]));
    assert!(service.validate_graph(&graph).is_valid);
    assert!(service.validate_graph(&graph).cycles.is_empty());
}

#[test]
fn test_diamond_sequence_visits_shared_prerequisite_once() {
    let graph = DependencyGraph::from_pairs(&[
        ("PDV", &["FINANCEIRO", "ESTOQUE"]),
        ("ESTOQUE", &["FINANCEIRO"]),
    ])
    .unwrap();

    let sequence = service().activation_sequence(&key("PDV"), &graph);

    assert_eq!(sequence, keys(&["FINANCEIRO", "ESTOQUE", "PDV"]));
}

#[test]
fn test_strict_sequence_refuses_loop() {
    let graph = DependencyGraph::from_pairs(&[("AA", &["BB"]), ("BB", &["AA"])]).unwrap();

    let result = service().strict_activation_sequence(&key("AA"), &graph);

    match result {
        Err(EngineError::CycleDetected { cycle }) => assert_eq!(cycle.len(), 2),
        other => panic!("expected cycle, got {:?}", other),
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_two_module_loop_is_reported() {
    let graph = DependencyGraph::from_pairs(&[("AA", &["BB"]), ("BB", &["AA"])]).unwrap();

    let validation = service().validate_graph(&graph);

    assert!(!validation.is_valid);
    assert!(validation.cycles.iter().any(|cycle| cycle.len() == 2
        && cycle.contains(&key("AA"))
        && cycle.contains(&key("BB"))));
}

#[test]
fn test_distinct_cycles_collapse_rotations() {
    let validation = op_01_module_dependency::GraphValidation::from_cycles(vec![
        Cycle::new(keys(&["AA", "BB"])),
        Cycle::new(keys(&["BB", "AA"])),
    ]);

    assert_eq!(validation.distinct_cycles(), vec![Cycle::new(keys(&["AA", "BB"]))]);
}

#[test]
fn test_cycle_display_closes_the_loop() {
    let cycle = Cycle::new(keys(&["AA", "BB"]));
    assert_eq!(cycle.to_string(), "AA -> BB -> AA");
}

// =============================================================================
// DEPTH
// =============================================================================

fn chain_key(i: usize) -> ModuleKey {
    let mut name = String::from("CH");
    let mut n = i;
    for _ in 0..4 {
        name.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    key(&name)
}

#[test]
fn test_deep_chain_through_service() {
    let depth = 120_000;
    let mut graph = DependencyGraph::new();
    for i in 0..depth - 1 {
        graph.insert(chain_key(i), vec![chain_key(i + 1)]);
    }
    let service = service();

    assert!(service.validate_graph(&graph).is_valid);

    let sequence = service.activation_sequence(&chain_key(0), &graph);
    assert_eq!(sequence.len(), depth);
    assert_eq!(sequence.last(), Some(&chain_key(0)));

    graph.add_dependency(chain_key(depth - 1), chain_key(0));
    let validation = service.validate_graph(&graph);
    assert!(!validation.is_valid);
    assert_eq!(validation.distinct_cycles().len(), 1);
}
