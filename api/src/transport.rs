//! Defines the transport seam between the session and the GraphQL server.

use crate::error::ApiError;
use crate::graphql::is_error_envelope;
use crate::graphql::GraphQlRequest;
use dioxus_logger::tracing;
use reqwest::Client;
use serde_json::Value;

/// Anything that can carry a GraphQL request to a server and bring back the
/// raw response envelope.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends one request. Returns the whole `{data, errors}` envelope.
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ApiError>;
}

/// Talks to a GraphQL server over HTTP(S) with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(std::time::Duration::from_secs(30));
        }

        // Only TLS backend init can fail here, fall back to the plain client.
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!("falling back to default http client: {}", e);
            Client::new()
        });

        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ApiError> {
        tracing::debug!("POST {} ({})", self.endpoint, request.operation_name);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    body: text,
                })
            }
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() && !is_error_envelope(&body) {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(body)
    }
}
