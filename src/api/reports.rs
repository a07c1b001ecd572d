use chrono::NaiveDate;

use crate::{
    domain::{CategorySpending, MonthlyTrend, Summary, TransactionType},
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct ReportsApi {
    http: Http,
}

impl ReportsApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn summary(&self, month: u32, year: i32) -> Result<Summary, ApiError> {
        let query = [("month", month.to_string()), ("year", year.to_string())];
        self.http.get_query("/reports/summary", &query).await
    }

    pub async fn by_category(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        kind: TransactionType,
    ) -> Result<Vec<CategorySpending>, ApiError> {
        let query = [
            ("startDate", start.format("%Y-%m-%d").to_string()),
            ("endDate", end.format("%Y-%m-%d").to_string()),
            ("type", kind.as_str().to_string()),
        ];
        self.http.get_query("/reports/by-category", &query).await
    }

    /// Rolling monthly trend; the backend defaults to six months when unset.
    pub async fn trends(&self, months: Option<u32>) -> Result<Vec<MonthlyTrend>, ApiError> {
        match months {
            Some(months) => {
                let query = [("months", months.to_string())];
                self.http.get_query("/reports/trends", &query).await
            }
            None => self.http.get("/reports/trends").await,
        }
    }
}
