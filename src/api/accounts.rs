use uuid::Uuid;

use crate::{
    domain::{Account, CreateAccountRequest, UpdateAccountRequest},
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct AccountsApi {
    http: Http,
}

impl AccountsApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> Result<Vec<Account>, ApiError> {
        self.http.get("/accounts").await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Account, ApiError> {
        self.http.get(&format!("/accounts/{id}")).await
    }

    pub async fn create(&self, request: &CreateAccountRequest) -> Result<Account, ApiError> {
        self.http.post("/accounts", request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateAccountRequest,
    ) -> Result<Account, ApiError> {
        self.http.put(&format!("/accounts/{id}"), request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/accounts/{id}")).await
    }
}
