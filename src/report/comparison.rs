use rust_decimal::Decimal;

use crate::models::BreakdownEntry;
use crate::util::percent_of;

/// Where a bucket sits relative to its 50/30/20 target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Standing {
    Over,
    /// Below 80% of the target.
    Under,
    OnTrack,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BucketShare {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) amount: Decimal,
    /// Percent of income.
    pub(crate) current: Decimal,
    pub(crate) target: Decimal,
    pub(crate) standing: Standing,
}

struct Bucket {
    name: &'static str,
    description: &'static str,
    target: i64,
    categories: &'static [&'static str],
}

const BUCKETS: &[Bucket] = &[
    Bucket {
        name: "Needs",
        description: "Rent, utilities, food, transportation",
        target: 50,
        categories: &["rent", "utilities", "food", "transportation"],
    },
    Bucket {
        name: "Wants",
        description: "Entertainment, dining out, hobbies",
        target: 30,
        categories: &["entertainment", "other"],
    },
    Bucket {
        name: "Savings",
        description: "Emergency fund, future goals",
        target: 20,
        categories: &["savings"],
    },
];

/// Group a breakdown into needs / wants / savings and compare each with the
/// 50/30/20 rule. `None` when there is no income to compare against.
pub(crate) fn fifty_thirty_twenty(
    breakdown: &[BreakdownEntry],
    monthly_income: Decimal,
) -> Option<Vec<BucketShare>> {
    if monthly_income <= Decimal::ZERO {
        return None;
    }

    let shares = BUCKETS
        .iter()
        .map(|bucket| {
            let amount: Decimal = breakdown
                .iter()
                .filter(|entry| {
                    let name = entry.category.to_lowercase();
                    bucket.categories.iter().any(|c| name.contains(c))
                })
                .fold(Decimal::ZERO, |acc, entry| acc.saturating_add(entry.amount));
            let current = percent_of(amount, monthly_income);
            let target = Decimal::from(bucket.target);
            BucketShare {
                name: bucket.name,
                description: bucket.description,
                amount,
                current,
                target,
                standing: standing(current, target),
            }
        })
        .collect();
    Some(shares)
}

fn standing(current: Decimal, target: Decimal) -> Standing {
    if current > target {
        Standing::Over
    } else if current < target * Decimal::new(8, 1) {
        Standing::Under
    } else {
        Standing::OnTrack
    }
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
