use uuid::Uuid;

use crate::{
    domain::{
        CreateTransactionRequest, Page, Transaction, TransactionFilter, UpdateTransactionRequest,
    },
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct TransactionsApi {
    http: Http,
}

impl TransactionsApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn get_all(&self, filter: &TransactionFilter) -> Result<Page<Transaction>, ApiError> {
        self.http.get_query("/transactions", &filter.query()).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Transaction, ApiError> {
        self.http.get(&format!("/transactions/{id}")).await
    }

    pub async fn create(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.http.post("/transactions", request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.http.put(&format!("/transactions/{id}"), request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/transactions/{id}")).await
    }
}
