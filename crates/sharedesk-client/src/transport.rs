//! `reqwest`-backed [`HttpTransport`].

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use tracing::error;

use sharedesk_core::config::BackendConfig;
use sharedesk_core::error::{AppError, ErrorKind};
use sharedesk_core::result::AppResult;
use sharedesk_core::traits::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};

/// Sends gateway requests over HTTP(S).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from backend configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid backend URL '{}'", config.base_url),
                e,
            )
        })?;

        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> AppResult<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Invalid request URL '{joined}'"), e)
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, self.url(&request.path)?);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(value)?),
            RequestBody::Form(fields) => builder.form(fields),
        };

        let response = builder.send().await.map_err(|e| network_error(&request, e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| network_error(&request, e))?;

        Ok(HttpResponse { status, body })
    }
}

fn network_error(request: &HttpRequest, err: reqwest::Error) -> AppError {
    error!(
        method = %request.method,
        path = %request.path,
        error = %err,
        "Network failure"
    );
    AppError::with_source(
        ErrorKind::Network,
        "Could not reach the server. Please try again.",
        err,
    )
}
