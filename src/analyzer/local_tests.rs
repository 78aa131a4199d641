#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Expenses, Goal};

fn make_budget() -> Budget {
    Budget::new(
        dec!(3000),
        Expenses {
            rent: dec!(1200),
            food: dec!(400),
            transportation: dec!(150),
            utilities: dec!(100),
            entertainment: dec!(200),
            savings: dec!(300),
            other: dec!(150),
        },
        Goal::General,
    )
}

fn overspending_budget() -> Budget {
    let mut budget = make_budget();
    budget.monthly_income = dec!(2300);
    budget
}

// ── Breakdown ─────────────────────────────────────────────────

#[test]
fn test_breakdown_sorted_largest_first() {
    let entries = breakdown(&make_budget());
    let names: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Rent",
            "Food",
            "Savings",
            "Entertainment",
            "Transportation",
            "Other",
            "Utilities"
        ]
    );
}

#[test]
fn test_breakdown_percentages() {
    let entries = breakdown(&make_budget());
    assert_eq!(entries[0].amount, dec!(1200));
    assert_eq!(entries[0].percentage, dec!(40.0));
    assert_eq!(entries[1].percentage, dec!(13.3));
}

#[test]
fn test_breakdown_zero_income() {
    let mut budget = make_budget();
    budget.monthly_income = Decimal::ZERO;
    assert!(breakdown(&budget)
        .iter()
        .all(|e| e.percentage == Decimal::ZERO));
}

// ── Advice & tips ─────────────────────────────────────────────

#[test]
fn test_advice_mentions_housing_and_savings() {
    let result = analyze_budget(&make_budget());
    let advice = result.financial_advice.unwrap();
    assert!(advice.starts_with(
        "Based on your income of $3,000.00 and expenses of $2,500.00, you have $500.00 left."
    ));
    assert!(advice.contains("Housing is 40.0% of your income"));
    assert!(advice.contains("You're saving 10.0%"));
    assert!(advice.contains("general financial wellness"));
}

#[test]
fn test_advice_overspending() {
    let result = analyze_budget(&overspending_budget());
    let advice = result.financial_advice.unwrap();
    assert!(advice.contains("you have -$200.00 left"));
    assert!(advice.contains("exceed income by $200.00"));
    assert!(!advice.contains("Housing is"));
    assert!(!advice.contains("You're saving"));
}

#[test]
fn test_advice_follows_goal() {
    let mut budget = make_budget();
    budget.goal = Goal::DebtPayoff;
    let result = analyze_budget(&budget);
    assert!(result.financial_advice.unwrap().contains("paying down debt"));
    assert_eq!(result.goal, Goal::DebtPayoff);
}

#[test]
fn test_tips_with_money_left() {
    let result = analyze_budget(&make_budget());
    assert_eq!(
        result.saving_tips[0],
        "Add $500.00 to savings or an emergency fund."
    );
    assert_eq!(result.saving_tips.len(), 4);
}

#[test]
fn test_tips_overspending_lead_with_review() {
    let result = analyze_budget(&overspending_budget());
    assert!(result.saving_tips[0].starts_with("Review your top 3 expenses"));
    assert!(!result.saving_tips.iter().any(|t| t.starts_with("Add ")));
}

#[test]
fn test_tips_high_saver() {
    let mut budget = make_budget();
    budget.expenses.savings = dec!(900);
    budget.expenses.food = dec!(100);
    let result = analyze_budget(&budget);
    assert!(!result
        .saving_tips
        .iter()
        .any(|t| t.starts_with("Try increasing savings")));
    assert!(result.insights.contains(&"Excellent savings rate".to_string()));
}

// ── Plan & insights ───────────────────────────────────────────

#[test]
fn test_plan_from_savings_rate() {
    let plan = analyze_budget(&make_budget()).saving_plan.unwrap();
    assert_eq!(plan.months_1_3[0], "Increase savings from 10.0% to 12.0%");
    assert_eq!(plan.months_4_6[0], "Grow savings to 15.0% of income");
    assert_eq!(plan.months_1_3.len(), 3);
    assert_eq!(plan.months_4_6.len(), 3);
}

#[test]
fn test_insights() {
    let result = analyze_budget(&make_budget());
    assert_eq!(
        result.insights,
        vec![
            "Total expenses: 83.3% of income".to_string(),
            "Remaining: $500.00".to_string(),
            "50/30/20: 50% needs, 30% wants, 20% savings".to_string(),
        ]
    );
}

#[test]
fn test_insights_zero_income() {
    let mut budget = make_budget();
    budget.monthly_income = Decimal::ZERO;
    let result = analyze_budget(&budget);
    assert!(!result.insights.iter().any(|i| i.starts_with("Total expenses")));
    assert!(result.insights.contains(&"Remaining: -$2,500.00".to_string()));
}

#[test]
fn test_full_result_shape() {
    let result = analyze_budget(&make_budget());
    assert_eq!(result.breakdown.len(), 7);
    assert!(result.where_savings_could_go.unwrap().contains("licensed financial advisor"));
    assert!(result.analysis.unwrap().contains("\n- Set up automatic transfers"));
}

#[tokio::test]
async fn test_local_analyzer_trait() {
    let analyzer = LocalAnalyzer;
    assert_eq!(analyzer.name(), "local");
    let result = analyzer.analyze(&make_budget()).await.unwrap();
    assert_eq!(result, analyze_budget(&make_budget()));
}

// ── Extreme figures ───────────────────────────────────────────

#[test]
fn test_saturated_savings_does_not_overflow() {
    let mut budget = make_budget();
    budget.expenses.savings = Decimal::MAX;
    let result = analyze_budget(&budget);

    assert_eq!(result.breakdown[0].category, "Savings");
    assert_eq!(result.breakdown[0].amount, Decimal::MAX);
    assert!(result.insights.contains(&"Excellent savings rate".to_string()));
    assert!(result
        .saving_tips
        .iter()
        .any(|t| t.starts_with("Review your top 3 expenses")));
}

#[test]
fn test_tiny_income_large_expenses() {
    let mut budget = make_budget();
    budget.monthly_income = dec!(0.0001);
    budget.expenses.rent = dec!(79228162514264337593543950);
    let result = analyze_budget(&budget);

    let rent = result.breakdown.iter().find(|e| e.category == "Rent").unwrap();
    assert_eq!(rent.percentage, Decimal::MAX);
    assert!(result.financial_advice.unwrap().contains("exceed income"));
}
