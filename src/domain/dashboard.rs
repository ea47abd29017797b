// Dashboard view-models
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// KPI averages and deep-dive insights, fetched independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub kpi_data: Value,
    pub insight_data: Value,
}

impl DashboardData {
    pub fn new(kpi_data: Value, insight_data: Value) -> Self {
        Self {
            kpi_data,
            insight_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub business_groups: Value,
    pub functions: Value,
}

impl FilterOptions {
    pub fn new(business_groups: Value, functions: Value) -> Self {
        Self {
            business_groups,
            functions,
        }
    }
}

/// Headcount summary payload, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadcountSummary(pub Value);

/// Initial data handed to the renderer on page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub dashboard_data: DashboardData,
    pub filter_options: FilterOptions,
    pub headcount_data: HeadcountSummary,
}

impl PageData {
    pub fn new(
        dashboard_data: DashboardData,
        filter_options: FilterOptions,
        headcount_data: HeadcountSummary,
    ) -> Self {
        Self {
            dashboard_data,
            filter_options,
            headcount_data,
        }
    }
}
