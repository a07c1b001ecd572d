use uuid::Uuid;

use crate::{
    api::BudgetsApi,
    domain::{Budget, CreateBudgetRequest},
    errors::ApiError,
};

/// Holds the budgets fetched for one month/year period.
pub struct BudgetStore {
    api: BudgetsApi,
    budgets: Vec<Budget>,
    loading: bool,
}

impl BudgetStore {
    pub fn new(api: BudgetsApi) -> Self {
        Self {
            api,
            budgets: Vec::new(),
            loading: false,
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub async fn fetch_budgets(&mut self, month: u32, year: i32) {
        self.loading = true;
        match self.api.get_all(month, year).await {
            Ok(budgets) => self.budgets = budgets,
            Err(err) => tracing::error!("Fetch budgets error: {err}"),
        }
        self.loading = false;
    }

    /// The backend upserts per category and period, so an existing budget
    /// comes back with its original id and replaces the local entry.
    pub async fn create_or_update_budget(
        &mut self,
        request: &CreateBudgetRequest,
    ) -> Result<Budget, ApiError> {
        let budget = self.api.create_or_update(request).await.map_err(|err| {
            tracing::error!("Save budget error: {err}");
            err
        })?;
        super::upsert_by_id(&mut self.budgets, budget.clone());
        Ok(budget)
    }

    pub async fn delete_budget(&mut self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(id).await.map_err(|err| {
            tracing::error!("Delete budget error: {err}");
            err
        })?;
        super::remove_by_id(&mut self.budgets, id);
        Ok(())
    }
}
