#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Budget, Expenses, Goal};

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
            other: dec!(30),
        },
        Goal::General,
    )
}

#[test]
fn test_evaluate_save_percent() {
    let baseline = make_budget();
    let outcome = evaluate("Save 5% more", &baseline).unwrap();
    assert_eq!(outcome.derived_budget.expenses.savings, dec!(450));
    assert_eq!(outcome.label, "What if you saved 5% more?");

    let mut expected = baseline.clone();
    expected.expenses.savings = dec!(450);
    assert_eq!(outcome.derived_budget, expected);
}

#[test]
fn test_evaluate_cut_with_amount() {
    let outcome = evaluate("Cut entertainment by $50", &make_budget()).unwrap();
    assert_eq!(outcome.derived_budget.expenses.entertainment, dec!(150));
    assert_eq!(outcome.label, "What if you cut entertainment by $50.00?");
}

#[test]
fn test_evaluate_default_decrease() {
    let outcome = evaluate("Reduce food", &make_budget()).unwrap();
    assert_eq!(outcome.derived_budget.expenses.food, dec!(360.00));
    assert_eq!(outcome.label, "What if you reduced food by $40.00?");
}

#[test]
fn test_evaluate_floor_clamp() {
    let outcome = evaluate("Cut other by $100", &make_budget()).unwrap();
    assert_eq!(outcome.derived_budget.expenses.other, Decimal::ZERO);
    assert_eq!(outcome.label, "What if you cut other by $100.00?");
}

#[test]
fn test_evaluate_increase_unbounded() {
    let mut baseline = make_budget();
    baseline.monthly_income = dec!(2000);
    baseline.expenses.savings = dec!(100);
    let outcome = evaluate("Increase savings by $5000", &baseline).unwrap();
    assert_eq!(outcome.derived_budget.expenses.savings, dec!(5100));
}

#[test]
fn test_evaluate_unparseable() {
    let baseline = make_budget();
    let err = evaluate("do something nice", &baseline).unwrap_err();
    assert_eq!(err.reason, ParseFailure::NoPattern);
    assert_eq!(err.input, "do something nice");
}

#[test]
fn test_evaluate_leaves_baseline_alone() {
    let baseline = make_budget();
    let snapshot = baseline.clone();
    for text in ["Save 5% more", "cut rent by $5000", "more food", "nonsense"] {
        let _ = evaluate(text, &baseline);
        assert_eq!(baseline, snapshot);
    }
}
