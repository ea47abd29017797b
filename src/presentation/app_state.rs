// Application state for HTTP handlers
use crate::application::api_client::ApiClient;
use crate::application::transport::HttpTransport;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api_client: ApiClient,
    pub transport: Arc<dyn HttpTransport>,
}
