use crate::{
    domain::{ChangePasswordRequest, UpdateUserRequest, User},
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct UsersApi {
    http: Http,
}

impl UsersApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn current(&self) -> Result<User, ApiError> {
        self.http.get("/users/me").await
    }

    pub async fn update_profile(&self, request: &UpdateUserRequest) -> Result<User, ApiError> {
        self.http.put("/users/me", request).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.http.put_unit("/users/me/password", request).await
    }
}
