// Page loader - Initial data for the dashboard page
use crate::application::api_client::ApiClient;
use crate::application::transport::HttpTransport;
use crate::domain::dashboard::PageData;
use crate::domain::filters::FilterSet;
use thiserror::Error;

pub const UNAVAILABLE_MESSAGE: &str = "The API is currently unavailable. Please try again later.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageLoadError {
    #[error("{}", UNAVAILABLE_MESSAGE)]
    ServiceUnavailable,
}

impl PageLoadError {
    pub fn status(&self) -> u16 {
        match self {
            PageLoadError::ServiceUnavailable => 503,
        }
    }
}

/// Fetches dashboard data, filter options and the headcount summary
/// concurrently. Any single failure fails the whole load; the cause is only
/// logged. The first failure drops the sibling fetches, so requests still in
/// flight are abandoned rather than awaited.
pub async fn load_page(
    client: &ApiClient,
    transport: &dyn HttpTransport,
) -> Result<PageData, PageLoadError> {
    let initial_filters = FilterSet::initial();

    let result = futures::try_join!(
        client.fetch_dashboard(&initial_filters, transport),
        client.fetch_filter_options(transport),
        client.fetch_headcount_summary(transport),
    );

    match result {
        Ok((dashboard_data, filter_options, headcount_data)) => {
            Ok(PageData::new(dashboard_data, filter_options, headcount_data))
        }
        Err(e) => {
            tracing::error!("Server-side page load failed: {}", e);
            Err(PageLoadError::ServiceUnavailable)
        }
    }
}
