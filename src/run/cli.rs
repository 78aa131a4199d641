use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{build_orchestrator, explore, load_budget};
use crate::config::Config;
use crate::models::Budget;
use crate::orchestrator::{Completion, ScenarioOrchestrator};
use crate::report;
use crate::scenario;

/// Pull `--config <path>` out of the argument list, wherever it appears.
pub(crate) fn split_config_flag(args: &[String]) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut config = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--config needs a path"))?;
            config = Some(PathBuf::from(path));
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((config, rest))
}

/// `args[0]` is the program name; the command follows.
pub(crate) async fn as_cli(args: &[String], config: &Config) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "analyze" | "a" => cli_analyze(&args[2..], config).await,
        "try" | "t" => cli_try(&args[2..], config).await,
        "explore" | "e" => cli_explore(&args[2..], config).await,
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("whatif {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("whatif: try budget what-ifs without touching your baseline");
    println!();
    println!("Usage: whatif [--config <path>] <command>");
    println!();
    println!("Commands:");
    println!("  analyze <budget.json>               Analyze a budget");
    println!("  try <budget.json> <scenario>...     Run what-ifs against a budget");
    println!("    --dry-run                         Show changed categories only");
    println!("  explore <budget.json>               Interactive what-if session");
    println!("  --help, -h                          Show this help");
    println!("  --version, -V                       Show version");
    println!();
    println!("Scenarios look like \"Save 5% more\" or \"Cut entertainment by $50\".");
}

fn budget_arg<'a>(args: &'a [String], usage: &str) -> Result<&'a Path> {
    args.iter()
        .find(|a| !a.starts_with("--"))
        .map(Path::new)
        .ok_or_else(|| anyhow::anyhow!("Usage: {usage}"))
}

async fn cli_analyze(args: &[String], config: &Config) -> Result<()> {
    let path = budget_arg(args, "whatif analyze <budget.json>")?;
    let budget = load_budget(path)?;

    let mut orch = build_orchestrator(config)?;
    orch.submit_baseline(budget).await?;
    print_published(&orch);
    Ok(())
}

async fn cli_try(args: &[String], config: &Config) -> Result<()> {
    const USAGE: &str = "whatif try <budget.json> <scenario>... [--dry-run]";
    let dry_run = args.iter().any(|a| a == "--dry-run");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    let Some((path, scenarios)) = positional.split_first() else {
        anyhow::bail!("Usage: {USAGE}");
    };
    if scenarios.is_empty() {
        anyhow::bail!("Usage: {USAGE}");
    }
    let baseline = load_budget(Path::new(path.as_str()))?;

    if dry_run {
        return try_dry_run(&baseline, scenarios);
    }

    let mut orch = build_orchestrator(config)?;
    orch.submit_baseline(baseline).await?;

    let mut failures = 0usize;
    for text in scenarios {
        println!();
        match orch.submit_scenario(text).await {
            Ok(Completion::Published) => {
                print_published(&orch);
            }
            Ok(_) => {}
            Err(_) => {
                failures += 1;
                eprintln!("Error: {}", orch.error().unwrap_or("Failed to analyze scenario"));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} scenario(s) failed", scenarios.len());
    }
    Ok(())
}

/// The published result and, for a what-if, what it changed.
pub(super) fn print_published(orch: &ScenarioOrchestrator) {
    let (Some(result), Some(budget)) = (orch.result(), orch.published_budget()) else {
        return;
    };
    print!(
        "{}",
        report::render_analysis(result, budget.monthly_income, orch.scenario_label())
    );
    if let (Some(_), Some(baseline)) = (orch.scenario_label(), orch.baseline()) {
        println!();
        println!("Changes");
        print!("{}", report::render_changes(baseline, budget));
    }
}

fn try_dry_run(baseline: &Budget, scenarios: &[&String]) -> Result<()> {
    let mut failures = 0usize;
    for text in scenarios {
        match scenario::evaluate(text, baseline) {
            Ok(outcome) => {
                println!("{}", outcome.label);
                print!("{}", report::render_changes(baseline, &outcome.derived_budget));
            }
            Err(e) => {
                failures += 1;
                eprintln!("Error: {e}");
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} scenario(s) failed", scenarios.len());
    }
    Ok(())
}

async fn cli_explore(args: &[String], config: &Config) -> Result<()> {
    let path = budget_arg(args, "whatif explore <budget.json>")?;
    let budget = load_budget(path)?;
    let mut orch = build_orchestrator(config)?;
    explore::run(&mut orch, budget).await
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
