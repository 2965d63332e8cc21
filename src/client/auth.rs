//! Login and registration.
//!
//! These endpoints live at the server root (`/auth/...`), not under `/api`,
//! and never carry a bearer token. A `401` from login means the credentials
//! were wrong, not that a session expired, so status handling is done by
//! hand here instead of through the shared path.

use reqwest::Method;

use super::{extract_error_message, ApiClient, MessageBody};
use crate::errors::ClientError;
use crate::models::LoginResponse;
use crate::session::Session;
use crate::validate::LoginIdentifier;

impl ApiClient {
    /// POST /auth/login - Authenticate and install the resulting session.
    ///
    /// `identifier` is a single field holding either an email address or a
    /// 10-digit phone number; which one it is decides which request field
    /// gets filled.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Session, ClientError> {
        let identifier = LoginIdentifier::parse(identifier).ok_or_else(|| {
            ClientError::Validation(
                "Please enter a valid email or 10-digit phone number".to_string(),
            )
        })?;
        let request = identifier.into_request(password);
        let response = self
            .unauthenticated(Method::POST, self.auth_url("/login"))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "login rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let body: LoginResponse = response.json().await?;
        let session = Session::from_login(&body);
        self.replace_session(session.clone());
        tracing::info!(role = session.role().unwrap_or("unknown"), "logged in");
        Ok(session)
    }

    /// POST /auth/register - Register a new admin account. Validate the form
    /// with [`crate::validate::RegistrationForm`] before calling this.
    pub async fn register(
        &self,
        request: &crate::models::RegisterRequest,
    ) -> Result<(), ClientError> {
        let response = self
            .unauthenticated(Method::POST, self.auth_url("/register"))
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %message, "registration rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let _: MessageBody = response.json().await?;
        Ok(())
    }
}
