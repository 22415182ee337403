//! # Module Catalog Check
//!
//! Validates a module catalog document and prints rollout plans.
//!
//! ```text
//! module-catalog [--catalog PATH] [MODULE...]
//! ```
//!
//! Without `--catalog` the stock Ortho+ catalog is checked. Exits non-zero
//! when the catalog contains a cycle or a rollout plan cannot be built.
//! Logging follows `OP_LOG_LEVEL` / `OP_JSON_LOGS`, limits follow `OP_MAX_*`.

use anyhow::{bail, Context, Result};
use op_01_module_dependency::adapters::load_catalog;
use op_01_module_dependency::{
    default_catalog, EngineConfig, ModuleDependencyApi, ModuleDependencyService, ModuleKey,
};
use op_telemetry::{init_logging, TelemetryConfig};
use tracing::info;

fn main() -> Result<()> {
    init_logging(&TelemetryConfig::from_env())?;

    let mut args = std::env::args().skip(1).peekable();
    let graph = if args.peek().map(String::as_str) == Some("--catalog") {
        args.next();
        let path = args.next().context("--catalog needs a path")?;
        load_catalog(&path).with_context(|| format!("loading {}", path))?
    } else {
        default_catalog()?
    };
    let targets = args
        .map(|raw| raw.parse::<ModuleKey>())
        .collect::<Result<Vec<_>, _>>()?;

    let service = ModuleDependencyService::with_config(EngineConfig::from_env());
    service.ensure_within_limits(&graph)?;

    let validation = service.validate_graph(&graph);
    let cycles = validation.distinct_cycles();
    info!(
        modules = graph.len(),
        edges = graph.edge_count(),
        cycles = cycles.len(),
        "Catalog checked"
    );
    for cycle in &cycles {
        println!("cycle: {}", cycle);
    }

    for target in &targets {
        let plan = if service.config().reject_cyclic_catalog {
            service.strict_activation_sequence(target, &graph)?
        } else {
            service.activation_sequence(target, &graph)
        };
        let steps: Vec<&str> = plan.iter().map(ModuleKey::as_str).collect();
        println!("{}: {}", target, steps.join(" -> "));
    }

    if !cycles.is_empty() {
        bail!("catalog contains {} cycle(s)", cycles.len());
    }

    Ok(())
}
