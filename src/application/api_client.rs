// API client - Fetch wrappers for the hiring dashboard API
use crate::application::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};
use crate::domain::dashboard::{DashboardData, FilterOptions, HeadcountSummary};
use crate::domain::filters::{encode_query, FilterSet};
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// Which kind of data a failed request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Dashboard,
    Drilldown,
    FilterOptions,
    Headcount,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataKind::Dashboard => "dashboard data",
            DataKind::Drilldown => "drilldown data",
            DataKind::FilterOptions => "filter options",
            DataKind::Headcount => "headcount data",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to fetch {0} from API.")]
    FetchFailed(DataKind),

    #[error("Failed to fetch drilldown data for {kpi_key} from API.")]
    DrilldownFailed { kpi_key: String },

    #[error("Failed to parse {kind} response: {source}")]
    Decode {
        kind: DataKind,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid API base URL {0:?}: expected an http:// or https:// URL")]
pub struct InvalidBaseUrl(pub String);

/// Root of the upstream API, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    pub fn parse(raw: &str) -> Result<Self, InvalidBaseUrl> {
        let trimmed = raw.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());

        if has_host {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidBaseUrl(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: ApiBaseUrl,
}

impl ApiClient {
    pub fn new(base_url: ApiBaseUrl) -> Self {
        Self { base_url }
    }

    /// KPI averages and deep-dive insights for the full filter set.
    pub async fn fetch_dashboard(
        &self,
        filters: &FilterSet,
        transport: &dyn HttpTransport,
    ) -> Result<DashboardData, ApiError> {
        let query = encode_query(filters);
        // A transport error drops the sibling request unfinished.
        let (kpi_res, insights_res) = futures::try_join!(
            self.get(transport, format!("/kpis/averages/?{}", query)),
            self.get(transport, format!("/insights/deep-dive/?{}", query)),
        )?;

        ensure_success(DataKind::Dashboard, &[&kpi_res, &insights_res])?;

        Ok(DashboardData::new(
            decode(DataKind::Dashboard, &kpi_res)?,
            decode(DataKind::Dashboard, &insights_res)?,
        ))
    }

    /// Detail behind one KPI. Only business group and function are sent.
    pub async fn fetch_drilldown(
        &self,
        kpi_key: &str,
        filters: &FilterSet,
        transport: &dyn HttpTransport,
    ) -> Result<serde_json::Value, ApiError> {
        let query = encode_query(&filters.drilldown_scope());
        let response = self
            .get(
                transport,
                format!("/kpis/drilldown/{}?{}", kpi_key, query),
            )
            .await?;

        if !response.is_success() {
            tracing::warn!("Drilldown for {} answered with status {}", kpi_key, response.status);
            return Err(ApiError::DrilldownFailed {
                kpi_key: kpi_key.to_string(),
            });
        }

        decode(DataKind::Drilldown, &response)
    }

    pub async fn fetch_filter_options(
        &self,
        transport: &dyn HttpTransport,
    ) -> Result<FilterOptions, ApiError> {
        let (groups_res, functions_res) = futures::try_join!(
            self.get(transport, "/filters/business-groups".to_string()),
            self.get(transport, "/filters/functions".to_string()),
        )?;

        ensure_success(DataKind::FilterOptions, &[&groups_res, &functions_res])?;

        Ok(FilterOptions::new(
            decode(DataKind::FilterOptions, &groups_res)?,
            decode(DataKind::FilterOptions, &functions_res)?,
        ))
    }

    pub async fn fetch_headcount_summary(
        &self,
        transport: &dyn HttpTransport,
    ) -> Result<HeadcountSummary, ApiError> {
        let response = self.get(transport, "/summaries/".to_string()).await?;
        ensure_success(DataKind::Headcount, &[&response])?;
        decode(DataKind::Headcount, &response).map(HeadcountSummary)
    }

    async fn get(
        &self,
        transport: &dyn HttpTransport,
        path: String,
    ) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);
        transport.send(ApiRequest::get(url)).await
    }
}

fn ensure_success(kind: DataKind, responses: &[&ApiResponse]) -> Result<(), ApiError> {
    let mut failed = false;
    for response in responses.iter().filter(|r| !r.is_success()) {
        tracing::warn!("Request for {} answered with status {}", kind, response.status);
        failed = true;
    }

    if failed {
        Err(ApiError::FetchFailed(kind))
    } else {
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(kind: DataKind, response: &ApiResponse) -> Result<T, ApiError> {
    response
        .json()
        .map_err(|source| ApiError::Decode { kind, source })
}
