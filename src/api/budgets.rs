use uuid::Uuid;

use crate::{
    domain::{Budget, CreateBudgetRequest},
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct BudgetsApi {
    http: Http,
}

impl BudgetsApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Budgets for one month/year period.
    pub async fn get_all(&self, month: u32, year: i32) -> Result<Vec<Budget>, ApiError> {
        let query = [("month", month.to_string()), ("year", year.to_string())];
        self.http.get_query("/budgets", &query).await
    }

    /// The backend upserts per category and period.
    pub async fn create_or_update(&self, request: &CreateBudgetRequest) -> Result<Budget, ApiError> {
        self.http.post("/budgets", request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/budgets/{id}")).await
    }
}
