use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::cli::print_published;
use super::load_budget;
use crate::models::Budget;
use crate::orchestrator::{Completion, ScenarioOrchestrator};
use crate::report;
use crate::scenario::EXAMPLE_PHRASINGS;

/// What the session loop should do after a line.
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    Continue,
    Scenario(String),
    Baseline(Budget),
    Quit,
}

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &ScenarioOrchestrator) -> Result<Step>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!(
        "budget",
        "Load a new baseline (e.g. :budget ~/budget.json)",
        cmd_budget,
        r
    );
    register_command!("b", "Load a new baseline", cmd_budget, r);
    register_command!("show", "Show the current analysis", cmd_show, r);
    register_command!("baseline", "Show the baseline budget", cmd_baseline, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

/// Analyze `budget`, then read what-ifs from stdin until EOF or `:q`.
pub(crate) async fn run(orch: &mut ScenarioOrchestrator, budget: Budget) -> Result<()> {
    submit_baseline(orch, budget).await;
    println!("Type a what-if, or :help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let step = match handle_line(&line, orch) {
            Ok(step) => step,
            Err(e) => {
                eprintln!("Error: {e:#}");
                Step::Continue
            }
        };
        match step {
            Step::Continue => {}
            Step::Quit => break,
            Step::Baseline(budget) => submit_baseline(orch, budget).await,
            Step::Scenario(text) => submit_scenario(orch, &text).await,
        }
        prompt();
    }
    Ok(())
}

fn prompt() {
    print!("what if> ");
    let _ = std::io::stdout().flush();
}

async fn submit_baseline(orch: &mut ScenarioOrchestrator, budget: Budget) {
    match orch.submit_baseline(budget).await {
        Ok(_) => print_published(orch),
        Err(_) => report_error(orch),
    }
}

async fn submit_scenario(orch: &mut ScenarioOrchestrator, text: &str) {
    match orch.submit_scenario(text).await {
        Ok(Completion::Published) => print_published(orch),
        Ok(Completion::NoBaseline) => eprintln!("No baseline loaded. Use :budget <file>"),
        Ok(Completion::Superseded) => {}
        Err(_) => report_error(orch),
    }
}

fn report_error(orch: &ScenarioOrchestrator) {
    if let Some(message) = orch.error() {
        eprintln!("Error: {message}");
    }
}

/// Plain lines are what-ifs; lines starting with `:` are commands.
pub(crate) fn handle_line(input: &str, orch: &ScenarioOrchestrator) -> Result<Step> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Step::Continue);
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return Ok(Step::Scenario(trimmed.to_string()));
    };

    let mut parts = command.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, orch)
    } else {
        match closest_command(cmd_name) {
            Some(name) => println!("Unknown command: :{cmd_name}. Did you mean :{name}?"),
            None => println!("Unknown command: :{cmd_name}. Type :help for commands."),
        }
        Ok(Step::Continue)
    }
}

/// The registered command within two edits of `input`, nearest first.
fn closest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .keys()
        .copied()
        .filter(|name| name.len() > 1)
        .map(|name| (edit_distance(input, name), name))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, name)| name)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// `~/x` relative to the user's home directory; anything else as written.
pub(crate) fn resolve_path(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), directories::BaseDirs::new()) {
        (Some(rest), Some(dirs)) => dirs.home_dir().join(rest),
        _ => PathBuf::from(path),
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, _orch: &ScenarioOrchestrator) -> Result<Step> {
    Ok(Step::Quit)
}

fn cmd_budget(args: &str, _orch: &ScenarioOrchestrator) -> Result<Step> {
    if args.is_empty() {
        anyhow::bail!("Usage: :budget <budget.json>");
    }
    let budget = load_budget(&resolve_path(args))?;
    Ok(Step::Baseline(budget))
}

fn cmd_show(_args: &str, orch: &ScenarioOrchestrator) -> Result<Step> {
    if orch.is_busy() {
        println!("Analysis still running; showing the last published result");
    }
    if orch.result().is_none() {
        println!("Nothing analyzed yet");
    }
    print_published(orch);
    Ok(Step::Continue)
}

fn cmd_baseline(_args: &str, orch: &ScenarioOrchestrator) -> Result<Step> {
    match orch.baseline() {
        Some(budget) => print!("{}", report::render_budget(budget)),
        None => println!("No baseline loaded"),
    }
    Ok(Step::Continue)
}

fn cmd_help(_args: &str, orch: &ScenarioOrchestrator) -> Result<Step> {
    println!("What-ifs (run against the baseline, which never changes):");
    for example in EXAMPLE_PHRASINGS {
        println!("  {example}");
    }
    println!();
    println!("Commands:");
    let mut names: Vec<(&&str, &Command)> = COMMANDS.iter().filter(|(k, _)| k.len() > 1).collect();
    names.sort_by_key(|(k, _)| **k);
    for (name, cmd) in names {
        println!("  :{name:<10} {}", cmd.description);
    }
    println!();
    println!("Analyzer: {}", orch.analyzer_name());
    Ok(Step::Continue)
}

#[cfg(test)]
#[path = "explore_tests.rs"]
mod tests;
