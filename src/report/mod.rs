//! Plain-text rendering of budgets and analysis results for the terminal.

mod comparison;

use comparison::{fifty_thirty_twenty, Standing};

use crate::models::{AnalysisResult, Budget};
use crate::util::{format_amount, format_percent, clip};

const RULE_WIDTH: usize = 40;
const NAME_WIDTH: usize = 18;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("  • {item}\n"));
    }
}

/// Income, every category and what's left over.
pub(crate) fn render_budget(budget: &Budget) -> String {
    let mut out = String::new();
    out.push_str(&format!("Budget ({})\n", budget.goal.description()));
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "  {:<NAME_WIDTH$} {:>12}\n",
        "Income",
        format_amount(budget.monthly_income)
    ));
    for (category, amount) in budget.expenses.iter() {
        out.push_str(&format!(
            "  {:<NAME_WIDTH$} {:>12}\n",
            category.title(),
            format_amount(amount)
        ));
    }
    out.push_str(&format!(
        "  {:<NAME_WIDTH$} {:>12}\n",
        "Remaining",
        format_amount(budget.remaining())
    ));
    out
}

/// Categories the what-if changed, as `old → new`.
pub(crate) fn render_changes(baseline: &Budget, derived: &Budget) -> String {
    let changed = derived.changed_categories(baseline);
    if changed.is_empty() {
        return "No categories changed\n".to_string();
    }

    let mut out = String::new();
    for (category, new, old) in changed {
        out.push_str(&format!(
            "  {:<NAME_WIDTH$} {} → {}\n",
            category.title(),
            format_amount(old),
            format_amount(new)
        ));
    }
    out
}

/// Full report for one published result. `label` captions a what-if.
pub(crate) fn render_analysis(
    result: &AnalysisResult,
    monthly_income: rust_decimal::Decimal,
    label: Option<&str>,
) -> String {
    let mut out = String::new();
    match label {
        Some(label) => out.push_str(&format!("{label}\n")),
        None => out.push_str("Budget analysis\n"),
    }
    out.push_str(&rule());
    out.push('\n');

    let advice = result
        .financial_advice
        .as_deref()
        .or(result.analysis.as_deref());
    if let Some(advice) = advice {
        out.push_str(advice);
        out.push('\n');
    }

    if !result.breakdown.is_empty() {
        heading(&mut out, "Breakdown");
        for entry in &result.breakdown {
            out.push_str(&format!(
                "  {:<NAME_WIDTH$} {:>12} {:>7}\n",
                clip(&entry.category, NAME_WIDTH),
                format_amount(entry.amount),
                format_percent(entry.percentage)
            ));
        }
    }

    if let Some(shares) = fifty_thirty_twenty(&result.breakdown, monthly_income) {
        heading(&mut out, "50/30/20 check");
        for share in &shares {
            let note = match share.standing {
                Standing::Over => "  higher than target",
                Standing::Under => "  lower than target",
                Standing::OnTrack => "",
            };
            out.push_str(&format!(
                "  {:<8} {:>12} {:>7}  target {}%{note}\n",
                share.name,
                format_amount(share.amount),
                format_percent(share.current),
                share.target,
            ));
            out.push_str(&format!("    {}\n", share.description));
        }
    }

    if !result.saving_tips.is_empty() {
        heading(&mut out, "Saving tips");
        bullets(&mut out, &result.saving_tips);
    }

    if let Some(plan) = &result.saving_plan {
        if !plan.months_1_3.is_empty() || !plan.months_4_6.is_empty() {
            heading(&mut out, "Saving plan");
            out.push_str("Months 1-3\n");
            bullets(&mut out, &plan.months_1_3);
            out.push_str("Months 4-6\n");
            bullets(&mut out, &plan.months_4_6);
        }
    }

    if let Some(where_to) = &result.where_savings_could_go {
        heading(&mut out, "Where savings could go");
        out.push_str(where_to);
        out.push('\n');
    }

    if !result.insights.is_empty() {
        heading(&mut out, "Insights");
        bullets(&mut out, &result.insights);
    }

    out
}
