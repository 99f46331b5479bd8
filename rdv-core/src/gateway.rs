//! HTTP gateway to the agenda backend.
//!
//! All outbound requests go through [`Gateway::call`]: JSON body, optional
//! bearer credential, one attempt per call (no timeout, no retry, no
//! backoff). The response is normalized into the tagged [`ApiResponse`]
//! envelope consumed uniformly by every flow.

use crate::error::{RdvError, RdvResult};
use serde_json::Value;

pub use reqwest::Method;

/// Normalized response envelope, tagged by transport-level outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx answer with its parsed body.
    Success { status: u16, body: Value },
    /// Non-success status; `message` is the body's `message` field when the
    /// body carried one.
    Failure {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success { status, .. } | ApiResponse::Failure { status, .. } => *status,
        }
    }

    /// Convert into the flow-level result: the parsed body on success, a
    /// `Remote` error otherwise. The error message is the backend's, with
    /// the formatted status fallback when the body carried none.
    pub fn into_result(self) -> RdvResult<Value> {
        match self {
            ApiResponse::Success { body, .. } => Ok(body),
            ApiResponse::Failure {
                status,
                status_text,
                message,
            } => Err(RdvError::Remote {
                status,
                message: message.unwrap_or_else(|| format!("Erreur {status}: {status_text}")),
            }),
        }
    }
}

/// Outbound requests to the agenda backend.
///
/// A trait so flows can be driven by a recording mock in tests; the real
/// implementation is [`RestGateway`].
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// The bearer credential is attached only when `token` is given.
    async fn call(
        &self,
        endpoint: &str,
        method: Method,
        payload: Value,
        token: Option<&str>,
    ) -> RdvResult<ApiResponse>;
}

/// reqwest-backed gateway.
pub struct RestGateway {
    base_url: String,
    http: reqwest::Client,
}

impl RestGateway {
    pub fn new(base_url: impl Into<String>) -> RestGateway {
        RestGateway {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

impl Gateway for RestGateway {
    async fn call(
        &self,
        endpoint: &str,
        method: Method,
        payload: Value,
        token: Option<&str>,
    ) -> RdvResult<ApiResponse> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);

        let mut request = self.http.request(method, &url).json(&payload);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RdvError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

        let text = response
            .text()
            .await
            .map_err(|e| RdvError::Transport(e.to_string()))?;
        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| RdvError::Transport(e.to_string()))?
        };

        if status.is_success() {
            Ok(ApiResponse::Success {
                status: status.as_u16(),
                body,
            })
        } else {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            Ok(ApiResponse::Failure {
                status: status.as_u16(),
                status_text,
                message,
            })
        }
    }
}
