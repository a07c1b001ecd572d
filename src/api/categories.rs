use uuid::Uuid;

use crate::{
    domain::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct CategoriesApi {
    http: Http,
}

impl CategoriesApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, ApiError> {
        self.http.get("/categories").await
    }

    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<Category, ApiError> {
        self.http.post("/categories", request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        self.http.put(&format!("/categories/{id}"), request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/categories/{id}")).await
    }
}
