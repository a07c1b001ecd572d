use std::sync::Arc;

use crate::{
    api::{AuthApi, UsersApi},
    domain::{AuthSession, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateUserRequest, User},
    errors::ApiError,
    session::SessionStore,
};

/// Holds the token/user pair, persisted through [`SessionStore`].
///
/// Construction mirrors the persisted session into memory, so a client
/// restarted with a valid session starts out authenticated.
pub struct AuthStore {
    auth_api: AuthApi,
    users_api: UsersApi,
    session: Arc<SessionStore>,
    token: Option<String>,
    user: Option<User>,
}

impl AuthStore {
    pub fn new(auth_api: AuthApi, users_api: UsersApi, session: Arc<SessionStore>) -> Self {
        let token = session.token();
        let user = session.user();
        Self {
            auth_api,
            users_api,
            session,
            token,
            user,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Authenticated means a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<(), ApiError> {
        let session = self.auth_api.login(credentials).await.map_err(|err| {
            tracing::error!("Login error: {err}");
            err
        })?;
        self.store_session(session);
        Ok(())
    }

    pub async fn register(&mut self, details: &RegisterRequest) -> Result<(), ApiError> {
        let session = self.auth_api.register(details).await.map_err(|err| {
            tracing::error!("Registration error: {err}");
            err
        })?;
        self.store_session(session);
        Ok(())
    }

    /// Refreshes the profile from the backend; any failure forces a logout.
    pub async fn fetch_current_user(&mut self) {
        match self.users_api.current().await {
            Ok(user) => {
                if let Err(err) = self.session.set_user(&user) {
                    tracing::warn!("Failed to persist session user: {err}");
                }
                self.user = Some(user);
            }
            Err(err) => {
                tracing::error!("Fetch user error: {err}");
                self.logout();
            }
        }
    }

    pub async fn update_profile(&mut self, request: &UpdateUserRequest) -> Result<User, ApiError> {
        let user = self.users_api.update_profile(request).await.map_err(|err| {
            tracing::error!("Update profile error: {err}");
            err
        })?;
        if let Err(err) = self.session.set_user(&user) {
            tracing::warn!("Failed to persist session user: {err}");
        }
        self.user = Some(user.clone());
        Ok(user)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.users_api.change_password(request).await.map_err(|err| {
            tracing::error!("Change password error: {err}");
            err
        })
    }

    /// Clears both the in-memory and the persisted session; safe to repeat.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        if let Err(err) = self.session.clear() {
            tracing::warn!("Failed to clear persisted session: {err}");
        }
    }

    fn store_session(&mut self, session: AuthSession) {
        // A session whose disk write failed still authenticates this process.
        if let Err(err) = self.session.set(&session.token, &session.user) {
            tracing::warn!("Failed to persist session: {err}");
        }
        self.token = Some(session.token);
        self.user = Some(session.user);
    }
}
