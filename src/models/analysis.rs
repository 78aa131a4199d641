use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Goal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingPlan {
    #[serde(default)]
    pub months_1_3: Vec<String>,
    #[serde(default)]
    pub months_4_6: Vec<String>,
}

/// Advice returned by an analyzer for one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub breakdown: Vec<BreakdownEntry>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub financial_advice: Option<String>,
    #[serde(default)]
    pub saving_tips: Vec<String>,
    #[serde(default)]
    pub saving_plan: Option<SavingPlan>,
    #[serde(default)]
    pub where_savings_could_go: Option<String>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub goal: Goal,
}
