use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors surfaced by [`ApiClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured server URL could not be parsed
    #[error("Invalid server URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// The backend answered 2xx but refused the operation in its body
    #[error("{0}")]
    Rejected(String),

    /// The response body was not the JSON we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(err) => err.status(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Plain JSON HTTP client bound to one backend origin
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = Self::normalize_base_url(&base_url.into())?;
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    /// Normalize a user supplied origin.
    ///
    /// "localhost:8080" is common in config files and reqwest rejects it, so a
    /// missing scheme becomes `http://`. A trailing slash is trimmed to keep
    /// joined paths free of `//`.
    pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        let with_scheme = if trimmed.starts_with("http://")
            || trimmed.starts_with("https://")
        {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };

        if with_scheme != raw {
            warn!(
                "[ApiClient] Normalized base URL from '{}' to '{}'",
                raw, with_scheme
            );
        }

        url::Url::parse(&with_scheme).map_err(|source| {
            ApiError::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            }
        })?;

        Ok(with_scheme)
    }

    /// Join a route onto the base URL
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let path = path.as_ref().trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON document
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);
        self.execute_json(self.client.get(&url)).await
    }

    /// POST a JSON body and decode a JSON reply
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);
        self.execute_json(self.client.post(&url).json(body)).await
    }

    /// PUT a JSON body; only the status of the reply is inspected
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);
        self.execute_status_only(self.client.put(&url).json(body))
            .await
    }

    /// DELETE a resource; only the status of the reply is inspected
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("[ApiClient] DELETE {}", url);
        self.execute_status_only(self.client.delete(&url)).await
    }

    /// Execute a request that must answer 2xx with a JSON body
    async fn execute_json<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<R> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| {
            warn!("[ApiClient] Failed to decode response: {}", err);
            ApiError::Decode(err)
        })
    }

    /// Execute a request where any 2xx counts as success and the body is ignored
    async fn execute_status_only(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message_for(status, &body);

        warn!("[ApiClient] Request failed with status {}: {}", status, message);

        ApiError::Status { status, message }
    }
}

/// Pick the most useful text out of an error reply.
///
/// The backend reports failures as `{"Message": "..."}` (sometimes lower
/// cased); anything else falls back to the status line.
fn error_message_for(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) =
        serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = fields
            .get("Message")
            .or_else(|| fields.get("message"))
            .and_then(|value| value.as_str())
        && !message.trim().is_empty()
    {
        return message.to_string();
    }

    let text = body.trim();
    if text.is_empty() || text.starts_with('{') || text.starts_with('<') {
        format!("Request failed with status {}", status.as_u16())
    } else {
        format!("Request failed with status {}: {}", status.as_u16(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_scheme_defaults_to_http() {
        let url = ApiClient::normalize_base_url("localhost:8080/").unwrap();
        assert_eq!(url, "http://localhost:8080");
    }

    #[test]
    fn https_origins_are_kept() {
        let url =
            ApiClient::normalize_base_url("https://users.example.com").unwrap();
        assert_eq!(url, "https://users.example.com");
    }

    #[test]
    fn unparseable_origins_are_rejected() {
        let err = ApiClient::normalize_base_url("http://[::1").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn build_url_joins_without_double_slashes() {
        let client =
            ApiClient::new("http://localhost:8080/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            client.build_url("/users/api/getAllusers"),
            "http://localhost:8080/users/api/getAllusers"
        );
    }

    #[test]
    fn error_message_prefers_backend_message() {
        let message = error_message_for(
            StatusCode::CONFLICT,
            r#"{"Status":"false","Message":"User name already taken"}"#,
        );
        assert_eq!(message, "User name already taken");

        let lower = error_message_for(
            StatusCode::BAD_REQUEST,
            r#"{"message":"role is required"}"#,
        );
        assert_eq!(lower, "role is required");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message_for(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Request failed with status 500"
        );
        assert_eq!(
            error_message_for(StatusCode::BAD_GATEWAY, "upstream down"),
            "Request failed with status 502: upstream down"
        );
    }
}
