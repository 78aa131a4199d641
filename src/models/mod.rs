mod analysis;
mod budget;
mod category;
mod intent;

pub use analysis::{AnalysisResult, BreakdownEntry, SavingPlan};
pub use budget::{Budget, BudgetError, Expenses, Goal};
pub use category::Category;
pub use intent::{Direction, Intent};
