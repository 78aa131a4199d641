use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::util::percent_of;

/// What the user is budgeting toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    General,
    EmergencyFund,
    DebtPayoff,
    BigPurchase,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::EmergencyFund => "emergency_fund",
            Self::DebtPayoff => "debt_payoff",
            Self::BigPurchase => "big_purchase",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "general financial wellness",
            Self::EmergencyFund => "building an emergency fund (3-6 months of expenses)",
            Self::DebtPayoff => "paying down debt",
            Self::BigPurchase => "saving for a big purchase (e.g. laptop, car, down payment)",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monthly amount per category. Every category is a required field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expenses {
    pub rent: Decimal,
    pub food: Decimal,
    pub transportation: Decimal,
    pub utilities: Decimal,
    pub entertainment: Decimal,
    pub savings: Decimal,
    pub other: Decimal,
}

impl Expenses {
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Rent => self.rent,
            Category::Food => self.food,
            Category::Transportation => self.transportation,
            Category::Utilities => self.utilities,
            Category::Entertainment => self.entertainment,
            Category::Savings => self.savings,
            Category::Other => self.other,
        }
    }

    pub fn set(&mut self, category: Category, amount: Decimal) {
        let slot = match category {
            Category::Rent => &mut self.rent,
            Category::Food => &mut self.food,
            Category::Transportation => &mut self.transportation,
            Category::Utilities => &mut self.utilities,
            Category::Entertainment => &mut self.entertainment,
            Category::Savings => &mut self.savings,
            Category::Other => &mut self.other,
        };
        *slot = amount;
    }

    /// Categories with their amounts, in `Category::all()` order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::all().iter().map(|&c| (c, self.get(c)))
    }

    pub fn total(&self) -> Decimal {
        self.iter()
            .fold(Decimal::ZERO, |acc, (_, amount)| acc.saturating_add(amount))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("monthly income cannot be negative (got {0})")]
    NegativeIncome(Decimal),
    #[error("{category} cannot be negative (got {amount})")]
    NegativeExpense { category: Category, amount: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub monthly_income: Decimal,
    pub expenses: Expenses,
    #[serde(default)]
    pub goal: Goal,
}

impl Budget {
    pub fn new(monthly_income: Decimal, expenses: Expenses, goal: Goal) -> Self {
        Self {
            monthly_income,
            expenses,
            goal,
        }
    }

    /// Check the non-negativity invariant on a budget that came from outside.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.monthly_income < Decimal::ZERO {
            return Err(BudgetError::NegativeIncome(self.monthly_income));
        }
        match self.expenses.iter().find(|(_, amount)| *amount < Decimal::ZERO) {
            Some((category, amount)) => Err(BudgetError::NegativeExpense { category, amount }),
            None => Ok(()),
        }
    }

    pub fn total_expenses(&self) -> Decimal {
        self.expenses.total()
    }

    /// Income left after all expenses. Negative when overspending.
    pub fn remaining(&self) -> Decimal {
        self.monthly_income.saturating_sub(self.total_expenses())
    }

    /// Share of income spent on `amount`, in percent. Zero when there is no income.
    pub fn share_of_income(&self, amount: Decimal) -> Decimal {
        percent_of(amount, self.monthly_income)
    }

    /// Categories whose amount differs from `other`, as `(category, ours, theirs)`.
    pub fn changed_categories(&self, other: &Budget) -> Vec<(Category, Decimal, Decimal)> {
        self.expenses
            .iter()
            .filter_map(|(category, ours)| {
                let theirs = other.expenses.get(category);
                (ours != theirs).then_some((category, ours, theirs))
            })
            .collect()
    }
}
