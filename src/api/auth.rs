use crate::{
    domain::{AuthSession, LoginRequest, RegisterRequest},
    errors::ApiError,
    http::Http,
};

#[derive(Clone)]
pub struct AuthApi {
    http: Http,
}

impl AuthApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthSession, ApiError> {
        self.http.post("/auth/login", credentials).await
    }

    pub async fn register(&self, details: &RegisterRequest) -> Result<AuthSession, ApiError> {
        self.http.post("/auth/register", details).await
    }
}
