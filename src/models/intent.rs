use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// A parsed what-if adjustment. Amounts are always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Move `percent` of monthly income into savings.
    SavePercent { percent: Decimal },
    AdjustCategory {
        category: Category,
        direction: Direction,
        amount: Decimal,
    },
}
