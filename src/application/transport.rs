// Transport capability injected into the API client
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Outgoing request descriptor. The upstream API is read-only, so every
/// request is a GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Status in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The request could not be completed at all (network, DNS, timeout).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Issues HTTP requests on behalf of the API client. Callers in different
/// execution contexts supply their own implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(304, "").is_success());
        assert!(!ApiResponse::new(503, "").is_success());
    }

    #[test]
    fn test_json_body() {
        let response = ApiResponse::new(200, "[\"Retail\",\"Tech\"]");
        let groups: Vec<String> = response.json().unwrap();
        assert_eq!(groups, vec!["Retail", "Tech"]);

        assert!(ApiResponse::new(200, "<html>").json::<serde_json::Value>().is_err());
    }
}
