//! HTTP client for the backend REST API.
//!
//! One endpoint file per entity, all funneling through the shared request
//! core: every `/api` call carries the session's bearer token; a `401`
//! clears the session and surfaces [`ClientError::AuthExpired`] so the
//! caller redirects to login; other non-2xx responses carry whatever
//! `{error}`/`{message}` the backend supplied. Failures are never fatal and
//! nothing is retried.

mod auth;
mod branches;
mod exams;
mod facilities;
mod hierarchy;
mod invigilators;
mod programs;
mod sections;
mod students;
mod subjects;
mod years;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::ClientError;
use crate::session::Session;

/// Authenticated client for the exam-seating backend.
///
/// Cloning is cheap and shares the session and connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<RwLock<Session>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            session: Arc::new(RwLock::new(Session::new())),
        })
    }

    /// Snapshot of the current session context.
    pub fn session(&self) -> Session {
        self.read_session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_session().is_authenticated()
    }

    /// Drop the session; subsequent `/api` calls go out unauthenticated.
    pub fn logout(&self) {
        self.write_session().clear();
    }

    pub(crate) fn replace_session(&self, session: Session) {
        *self.write_session() = session;
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth{}", self.base_url, path)
    }

    pub(crate) fn authorized(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.read_session().token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn unauthenticated(&self, method: Method, url: String) -> RequestBuilder {
        self.http.request(method, url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.authorized(Method::GET, self.api_url(path)).send().await?;
        self.handle_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .authorized(Method::POST, self.api_url(path))
            .json(body)
            .send()
            .await?;
        self.handle_json(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .authorized(Method::PUT, self.api_url(path))
            .json(body)
            .send()
            .await?;
        self.handle_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self
            .authorized(Method::DELETE, self.api_url(path))
            .send()
            .await?;
        self.handle_no_content(response).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let response = self.authorized(Method::GET, self.api_url(path)).send().await?;
        let response = self.check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let response = self
            .authorized(Method::POST, self.api_url(path))
            .multipart(form)
            .send()
            .await?;
        self.handle_json(response).await
    }

    pub(crate) async fn handle_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ClientError> {
        let response = self.check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn handle_no_content(&self, response: Response) -> Result<(), ClientError> {
        self.check_status(response).await?;
        Ok(())
    }

    /// Map a 401 to the auth-expired signal (clearing the session) and any
    /// other non-2xx status to an API error carrying the backend's message.
    async fn check_status(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.write_session().clear();
            tracing::warn!("authentication expired; session cleared");
            return Err(ClientError::AuthExpired);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %message, "backend request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    fn read_session(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_session(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Pull the human-readable message out of an `{error}` or `{message}` body.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))?
        .as_str()
        .map(str::to_string)
}

/// Body of a `{message: ...}` acknowledgement.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
}
