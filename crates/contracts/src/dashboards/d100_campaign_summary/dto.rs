use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_campaign::CampaignFilter;
use crate::projections::p100_falcon_export::ProcessingStats;

/// Summary statistics over processed campaigns.
/// Only `total_campaigns` is present when there is nothing to summarize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub total_campaigns: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_mrp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_potential_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_type_counts: Option<BTreeMap<String, usize>>,
}

/// GET /api/v1/campaigns/summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: CampaignSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_stats: Option<ProcessingStats>,
    pub filters_applied: CampaignFilter,
}

/// Values available for the filter dropdowns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub campaign_types: Vec<String>,
    pub segments: Vec<String>,
    pub brands: Vec<String>,
}
