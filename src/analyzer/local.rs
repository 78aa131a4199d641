use async_trait::async_trait;
use rust_decimal::Decimal;

use super::{Analyzer, AnalyzerError};
use crate::models::{AnalysisResult, BreakdownEntry, Budget, SavingPlan};
use crate::util::{format_amount, format_percent};

const WHERE_SAVINGS_COULD_GO: &str = "After an emergency fund, people often learn about \
high-yield savings accounts, retirement accounts (e.g. 401(k), IRA), and broad market \
index funds. Talk to a licensed financial advisor for your situation.";

/// Rule-based analyzer. Same answer for the same budget, no network.
pub(crate) struct LocalAnalyzer;

#[async_trait]
impl Analyzer for LocalAnalyzer {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn analyze(&self, budget: &Budget) -> Result<AnalysisResult, AnalyzerError> {
        Ok(analyze_budget(budget))
    }
}

pub(crate) fn analyze_budget(budget: &Budget) -> AnalysisResult {
    let figures = Figures::of(budget);
    let financial_advice = advice(budget, &figures);
    let saving_tips = tips(&figures);
    let analysis = format!(
        "{financial_advice}\n\n{}",
        saving_tips
            .iter()
            .map(|t| format!("- {t}"))
            .collect::<Vec<_>>()
            .join("\n")
    );

    AnalysisResult {
        breakdown: breakdown(budget),
        analysis: Some(analysis),
        financial_advice: Some(financial_advice),
        saving_tips,
        saving_plan: Some(plan(&figures)),
        where_savings_could_go: Some(WHERE_SAVINGS_COULD_GO.to_string()),
        insights: insights(budget, &figures),
        goal: budget.goal,
    }
}

/// Numbers every rule looks at.
struct Figures {
    total: Decimal,
    remaining: Decimal,
    savings_pct: Decimal,
    housing_pct: Decimal,
}

impl Figures {
    fn of(budget: &Budget) -> Self {
        Self {
            total: budget.total_expenses(),
            remaining: budget.remaining(),
            savings_pct: budget.share_of_income(budget.expenses.savings),
            housing_pct: budget.share_of_income(budget.expenses.rent),
        }
    }
}

/// Expenses largest first, each as a share of income.
pub(crate) fn breakdown(budget: &Budget) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = budget
        .expenses
        .iter()
        .map(|(category, amount)| BreakdownEntry {
            category: category.title(),
            amount,
            percentage: budget.share_of_income(amount).round_dp(1),
        })
        .collect();
    entries.sort_by(|a, b| b.amount.cmp(&a.amount));
    entries
}

fn advice(budget: &Budget, f: &Figures) -> String {
    let twenty = Decimal::from(20);
    let mut text = format!(
        "Based on your income of {} and expenses of {}, you have {} left. ",
        format_amount(budget.monthly_income),
        format_amount(f.total),
        format_amount(f.remaining)
    );
    if f.remaining < Decimal::ZERO {
        text.push_str(&format!(
            "Your expenses exceed income by {}. Focus on reducing spending or increasing income before saving. ",
            format_amount(f.remaining.abs())
        ));
    } else if f.housing_pct > Decimal::from(30) {
        text.push_str(&format!(
            "Housing is {} of your income (often recommended under 30%). ",
            format_percent(f.housing_pct)
        ));
    }
    if f.savings_pct < twenty && f.savings_pct >= Decimal::ZERO && f.remaining >= Decimal::ZERO {
        text.push_str(&format!(
            "You're saving {}; building toward 20% can help long-term. ",
            format_percent(f.savings_pct)
        ));
    }
    text.push_str(&format!(
        "With a focus on {}, small steps add up. Pick one category to improve first.",
        budget.goal.description()
    ));
    text
}

fn tips(f: &Figures) -> Vec<String> {
    let mut tips = Vec::new();
    if f.remaining < Decimal::ZERO {
        tips.push("Review your top 3 expenses. Can any be reduced?".to_string());
    }
    if f.remaining > Decimal::ZERO {
        tips.push(format!(
            "Add {} to savings or an emergency fund.",
            format_amount(f.remaining)
        ));
    }
    tips.push("Set up automatic transfers to savings on payday.".to_string());
    tips.push("Aim for 3-6 months of expenses in an emergency fund.".to_string());
    if f.savings_pct < Decimal::from(20) {
        tips.push("Try increasing savings by 1-2% of income each month.".to_string());
    }
    tips
}

fn plan(f: &Figures) -> SavingPlan {
    SavingPlan {
        months_1_3: vec![
            format!(
                "Increase savings from {} to {}",
                format_percent(f.savings_pct),
                format_percent(f.savings_pct.saturating_add(Decimal::from(2)))
            ),
            "Set up automatic transfer of $50-100/month to savings".to_string(),
            "Build emergency fund: aim for $500-1000 first".to_string(),
        ],
        months_4_6: vec![
            format!(
                "Grow savings to {} of income",
                format_percent(f.savings_pct.saturating_add(Decimal::from(5)))
            ),
            "Increase emergency fund to 1-2 months of expenses".to_string(),
            "Review and optimize top expense categories".to_string(),
        ],
    }
}

fn insights(budget: &Budget, f: &Figures) -> Vec<String> {
    let mut insights = Vec::new();
    if budget.monthly_income > Decimal::ZERO {
        insights.push(format!(
            "Total expenses: {} of income",
            format_percent(budget.share_of_income(f.total))
        ));
    }
    if f.remaining != Decimal::ZERO {
        insights.push(format!("Remaining: {}", format_amount(f.remaining)));
    }
    if f.savings_pct >= Decimal::from(20) {
        insights.push("Excellent savings rate".to_string());
    } else {
        insights.push("50/30/20: 50% needs, 30% wants, 20% savings".to_string());
    }
    insights
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
