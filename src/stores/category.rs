use uuid::Uuid;

use crate::{
    api::CategoriesApi,
    domain::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    errors::ApiError,
};

/// Holds the fetched category collection and its loading flag.
pub struct CategoryStore {
    api: CategoriesApi,
    categories: Vec<Category>,
    loading: bool,
}

impl CategoryStore {
    pub fn new(api: CategoriesApi) -> Self {
        Self {
            api,
            categories: Vec::new(),
            loading: false,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub async fn fetch_categories(&mut self) {
        self.loading = true;
        match self.api.get_all().await {
            Ok(categories) => self.categories = categories,
            Err(err) => tracing::error!("Fetch categories error: {err}"),
        }
        self.loading = false;
    }

    pub async fn create_category(
        &mut self,
        request: &CreateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let category = self.api.create(request).await.map_err(|err| {
            tracing::error!("Create category error: {err}");
            err
        })?;
        self.categories.push(category.clone());
        Ok(category)
    }

    pub async fn update_category(
        &mut self,
        id: Uuid,
        request: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let category = self.api.update(id, request).await.map_err(|err| {
            tracing::error!("Update category error: {err}");
            err
        })?;
        super::replace_by_id(&mut self.categories, category.clone());
        Ok(category)
    }

    pub async fn delete_category(&mut self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(id).await.map_err(|err| {
            tracing::error!("Delete category error: {err}");
            err
        })?;
        super::remove_by_id(&mut self.categories, id);
        Ok(())
    }
}
