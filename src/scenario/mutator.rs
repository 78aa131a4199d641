use rust_decimal::Decimal;

use crate::models::{Budget, Direction, Intent};

/// Apply `intent` to a copy of `baseline`. The baseline is only read.
///
/// Decreases floor at zero. Increases are not capped by income; whether the
/// result is a sensible budget is left to the analyzer.
pub(crate) fn apply(baseline: &Budget, intent: &Intent) -> Budget {
    let mut derived = baseline.clone();
    match *intent {
        Intent::SavePercent { percent } => {
            let extra = (percent / Decimal::ONE_HUNDRED).saturating_mul(baseline.monthly_income);
            derived.expenses.savings = baseline.expenses.savings.saturating_add(extra);
        }
        Intent::AdjustCategory {
            category,
            direction,
            amount,
        } => {
            let current = baseline.expenses.get(category);
            let adjusted = match direction {
                Direction::Decrease => current.saturating_sub(amount).max(Decimal::ZERO),
                Direction::Increase => current.saturating_add(amount),
            };
            derived.expenses.set(category, adjusted);
        }
    }
    derived
}

#[cfg(test)]
#[path = "mutator_tests.rs"]
mod tests;
