// Server-side transport backed by reqwest
use crate::application::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};
use async_trait::async_trait;

/// Shares one connection pool across all requests.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .get(&request.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::new(&request.url, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(&request.url, e.to_string()))?;

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn spawn_stub() -> String {
        let router = Router::new()
            .route("/summaries/", get(|| async { r#"[{"headcount": 7}]"# }))
            .route(
                "/filters/functions",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_passes_status_and_body_through() {
        let base = spawn_stub().await;
        let transport = ReqwestTransport::default();

        let ok = transport
            .send(ApiRequest::get(format!("{}/summaries/", base)))
            .await
            .unwrap();
        assert_eq!(ok.status, 200);
        assert_eq!(ok.body, br#"[{"headcount": 7}]"#.to_vec());

        let failed = transport
            .send(ApiRequest::get(format!("{}/filters/functions", base)))
            .await
            .unwrap();
        assert_eq!(failed.status, 500);
        assert!(!failed.is_success());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/summaries/", addr);
        let err = ReqwestTransport::default()
            .send(ApiRequest::get(url.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.url, url);
    }
}
