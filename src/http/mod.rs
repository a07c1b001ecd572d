use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ClientConfig,
    errors::{ApiError, ErrorResponse},
    notify::Notifier,
    session::SessionStore,
};

/// Shared request wrapper.
///
/// Attaches the bearer token from the session, strips the response envelope
/// on success, and normalizes every failure into [`ApiError`] after notifying
/// the user. A 401 additionally clears the session and requests a login
/// redirect, exactly once per failed call.
#[derive(Clone)]
pub struct Http {
    inner: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl Http {
    pub fn new(
        config: ClientConfig,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::RequestSetup {
                message: err.to_string(),
            })?;
        Ok(Self {
            inner,
            base_url: config.base_url,
            session,
            notifier,
        })
    }

    /// The session shared with the auth store.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        self.dispatch(request, path).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?.query(query);
        self.dispatch(request, path).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.dispatch(request, path).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.dispatch(request, path).await
    }

    /// PUT whose response body is discarded (the backend answers 204).
    pub async fn put_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.dispatch_raw(request, path).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path)?;
        self.dispatch_raw(request, path).await.map(|_| ())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let parsed = match reqwest::Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(err) => {
                let error = ApiError::RequestSetup {
                    message: format!("{url}: {err}"),
                };
                self.notifier.error(&error.notification(path));
                return Err(error);
            }
        };
        let mut request = self.inner.request(method, parsed);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let response = self.dispatch_raw(request, endpoint).await?;
        match response.json::<T>().await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                // A 2xx whose body cannot be decoded yields no usable response.
                let error = ApiError::Network(err);
                self.notifier.error(&error.notification(endpoint));
                Err(error)
            }
        }
    }

    async fn dispatch_raw(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let error = if err.is_builder() {
                    ApiError::RequestSetup {
                        message: err.to_string(),
                    }
                } else {
                    ApiError::Network(err)
                };
                self.notifier.error(&error.notification(endpoint));
                return Err(error);
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorResponse>().await.ok();
        let error = ApiError::classify(status.as_u16(), body);
        self.notifier.error(&error.notification(endpoint));
        if matches!(error, ApiError::Unauthorized) {
            if let Err(err) = self.session.clear() {
                tracing::warn!("failed to clear persisted session: {err}");
            }
            self.notifier.redirect_to_login();
        }
        Err(error)
    }
}
