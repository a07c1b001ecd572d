use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A per-category spending limit for one month, with server-computed usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub category_id: Uuid,
    #[serde(default)]
    pub category_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub remaining: f64,
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Payload for `POST /budgets`; the backend upserts per category and period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    pub category_id: Uuid,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}
