//! The request gateway.
//!
//! Every backend call goes through [`ApiGateway::request`] (JSON) or
//! [`ApiGateway::submit_form`] (form-encoded login). The gateway attaches
//! headers, turns error statuses into [`AppError`]s carrying the server's
//! message, and clears the session when a protected call is rejected.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use sharedesk_core::error::{AppError, ErrorKind};
use sharedesk_core::result::AppResult;
use sharedesk_core::traits::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};

use crate::session::SessionManager;

/// Status the backend uses for a missing or rejected token.
const STATUS_UNAUTHORIZED: u16 = 401;

/// Status for a successful response without a body.
const STATUS_NO_CONTENT: u16 = 204;

/// Message shown when a rejected token forces a logout.
const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Issues backend requests on behalf of the console.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    /// Underlying HTTP transport.
    transport: Arc<dyn HttpTransport>,
}

impl ApiGateway {
    /// Create a gateway over a transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Issue a JSON request.
    ///
    /// Returns `Ok(None)` for an empty success (204 or zero-length body) and
    /// the parsed document otherwise. With `requires_auth`, a missing token
    /// fails before the transport is touched, and a 401 clears `session`.
    pub async fn request(
        &self,
        session: &mut SessionManager,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
        requires_auth: bool,
    ) -> AppResult<Option<Value>> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];

        if requires_auth {
            let token = session.require_token().inspect_err(|_| {
                debug!(%method, path, "Protected request blocked: no session");
            })?;
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            method,
            path: path.to_string(),
            headers,
            body: body.map(RequestBody::Json).unwrap_or(RequestBody::Empty),
        };

        debug!(%method, path, "Sending request");
        let response = self.transport.send(request).await?;

        if requires_auth && response.status == STATUS_UNAUTHORIZED {
            info!(%method, path, "Token rejected by backend, logging out");
            // Store failures are already logged; the in-memory token is gone either way.
            let _ = session.clear().await;
            return Err(AppError::authentication(SESSION_EXPIRED).with_status(STATUS_UNAUTHORIZED));
        }

        interpret(&response, method, path, None)
    }

    /// Issue a JSON request and decode a non-empty success body.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        session: &mut SessionManager,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
        requires_auth: bool,
    ) -> AppResult<T> {
        let value = self
            .request(session, path, method, body, requires_auth)
            .await?
            .ok_or_else(|| {
                AppError::new(
                    ErrorKind::Serialization,
                    "The server returned an empty response",
                )
            })?;
        Ok(serde_json::from_value(value)?)
    }

    /// Post form-encoded fields without authentication.
    ///
    /// `fallback` replaces the generic status message when the server does
    /// not explain a rejection.
    pub async fn submit_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        fallback: &str,
    ) -> AppResult<Option<Value>> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            path: path.to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: RequestBody::Form(
                fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        };

        debug!(path, "Submitting form");
        let response = self.transport.send(request).await?;
        interpret(&response, HttpMethod::Post, path, Some(fallback))
    }
}

/// Map a raw response to the gateway result.
fn interpret(
    response: &HttpResponse,
    method: HttpMethod,
    path: &str,
    fallback: Option<&str>,
) -> AppResult<Option<Value>> {
    if !response.is_success() {
        let message = error_message(&response.body).unwrap_or_else(|| match fallback {
            Some(text) => text.to_string(),
            None => format!("Request failed with status {}", response.status),
        });
        warn!(%method, path, status = response.status, %message, "Request rejected");
        return Err(AppError::server(response.status, message));
    }

    if response.status == STATUS_NO_CONTENT || response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(&response.body)?))
}

/// Extract a human-readable message from an error body.
///
/// Understands FastAPI's `{"detail": "..."}` and validation lists
/// (`{"detail": [{"msg": "..."}]}`), plus `message` and `error` keys.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    let text = match value.get("detail") {
        Some(Value::String(detail)) => Some(detail.clone()),
        Some(Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        Some(Value::Object(inner)) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };

    text.or_else(|| {
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    })
    .filter(|msg| !msg.trim().is_empty())
}
