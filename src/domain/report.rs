use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Income vs expense totals for one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
    pub month: u32,
    pub year: i32,
}

/// Per-category share of spending over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category_id: Uuid,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_icon: Option<String>,
    #[serde(default)]
    pub category_color: Option<String>,
    pub amount: f64,
    pub transaction_count: i64,
    pub percentage: f64,
}

/// One month of the rolling income/expense trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: u32,
    pub year: i32,
    pub income: f64,
    pub expense: f64,
}
