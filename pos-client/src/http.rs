// pos-client/src/http.rs
// HTTP client - network transport to the restaurant API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::AppError;

/// Error body of the API: `{"success": false, "message": "..."}`
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    /// Some handlers answer `{"error": "..."}` instead
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client trait
///
/// `path` is relative to the base URL, e.g. `"api/pedidos"`. An empty body
/// (`204 No Content`) deserializes as JSON `null`, so endpoints that may
/// answer without a body should ask for an `Option<T>`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// GET returning the raw body (CSV downloads)
    async fn get_text(&self, path: &str) -> ClientResult<String>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn base_url(&self) -> &str;
}

/// Network HTTP client on `reqwest`
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Map a non-success status to a [`ClientError`], keeping the server's
    /// message when the body carries one
    fn status_error(status: StatusCode, body: &str) -> ClientError {
        let server_message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|r| r.message.or(r.error));
        let err = AppError::from_api(status, server_message);

        tracing::warn!(status = status.as_u16(), error = %err.message, "API request failed");

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(err.message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(err.message)
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message: err.message,
            },
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &text));
        }

        let body = if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        serde_json::from_str(body).map_err(|e| {
            tracing::debug!(error = %e, body = %text, "Unexpected response body");
            ClientError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    async fn get_text(&self, path: &str) -> ClientResult<String> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &text));
        }
        Ok(text)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
