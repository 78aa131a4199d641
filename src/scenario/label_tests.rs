use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, Direction, Intent};

fn decrease(category: Category, amount: rust_decimal::Decimal) -> Intent {
    Intent::AdjustCategory {
        category,
        direction: Direction::Decrease,
        amount,
    }
}

#[test]
fn test_save_percent_label() {
    let label = describe("Save 5% more", &Intent::SavePercent { percent: dec!(5) });
    assert_eq!(label, "What if you saved 5% more?");
}

#[test]
fn test_save_percent_label_echoes_token() {
    let label = describe(
        "save 2.50% more",
        &Intent::SavePercent { percent: dec!(2.5) },
    );
    assert_eq!(label, "What if you saved 2.50% more?");
}

#[test]
fn test_save_percent_label_without_token() {
    let label = describe("save more", &Intent::SavePercent { percent: dec!(7.50) });
    assert_eq!(label, "What if you saved 7.5% more?");
}

#[test]
fn test_cut_label() {
    let label = describe(
        "Cut entertainment by $50",
        &decrease(Category::Entertainment, dec!(50)),
    );
    assert_eq!(label, "What if you cut entertainment by $50.00?");
}

#[test]
fn test_decrease_verbs() {
    let intent = decrease(Category::Food, dec!(40));
    assert_eq!(describe("Reduce food", &intent), "What if you reduced food by $40.00?");
    assert_eq!(describe("lower food", &intent), "What if you lowered food by $40.00?");
    assert_eq!(describe("less food", &intent), "What if you lowered food by $40.00?");
    assert_eq!(
        describe("decrease food", &intent),
        "What if you decreased food by $40.00?"
    );
}

#[test]
fn test_cut_verb_has_priority() {
    let intent = decrease(Category::Food, dec!(40));
    assert_eq!(
        describe("reduce food, cut it", &intent),
        "What if you cut food by $40.00?"
    );
}

#[test]
fn test_increase_label() {
    let intent = Intent::AdjustCategory {
        category: Category::Savings,
        direction: Direction::Increase,
        amount: dec!(5000),
    };
    assert_eq!(
        describe("add to savings $5000", &intent),
        "What if you increased savings by $5000.00?"
    );
}

#[test]
fn test_amount_rounds_to_cents() {
    let intent = decrease(Category::Other, dec!(33.335));
    assert_eq!(
        describe("cut other", &intent),
        "What if you cut other by $33.34?"
    );
}
