use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_campaign::{CampaignFilter, CampaignRecord};

/// Column order of the Falcon sheet. Exports must use exactly this set and order.
pub const FALCON_COLUMNS: [&str; 8] = [
    "sku_id",
    "product_id",
    "MRP",
    "MOP",
    "selling_price",
    "mop_cost",
    "selling_price_cost",
    "coins",
];

/// One cell of an exported row
#[derive(Debug, Clone, PartialEq)]
pub enum FalconCell {
    Text(String),
    Number(f64),
}

impl FalconCell {
    pub fn as_text(&self) -> String {
        match self {
            FalconCell::Text(s) => s.clone(),
            FalconCell::Number(n) => n.to_string(),
        }
    }
}

/// Row in the format expected by the Falcon pricing display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalconExportRow {
    pub sku_id: String,
    pub product_id: String,
    #[serde(rename = "MRP")]
    pub mrp: f64,
    #[serde(rename = "MOP")]
    pub mop: f64,
    pub selling_price: f64,
    /// `round(selling_price * 0.979, 2)`
    pub mop_cost: f64,
    pub selling_price_cost: f64,
    pub coins: i64,
}

impl FalconExportRow {
    /// Cells in `FALCON_COLUMNS` order
    pub fn cells(&self) -> [FalconCell; 8] {
        [
            FalconCell::Text(self.sku_id.clone()),
            FalconCell::Text(self.product_id.clone()),
            FalconCell::Number(self.mrp),
            FalconCell::Number(self.mop),
            FalconCell::Number(self.selling_price),
            FalconCell::Number(self.mop_cost),
            FalconCell::Number(self.selling_price_cost),
            FalconCell::Number(self.coins as f64),
        ]
    }
}

/// A campaign that made it through the transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedCampaign {
    pub raw_data: CampaignRecord,
    pub falcon_data: FalconExportRow,
    pub processed_at: DateTime<Utc>,
}

/// A campaign left out of the output, and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformFailure {
    pub product_id: String,
    pub reason: String,
}

/// Result of transforming a batch of campaigns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignResponse {
    pub total_count: usize,
    pub processed_count: usize,
    pub failed_count: usize,
    pub campaigns: Vec<ProcessedCampaign>,
    #[serde(default)]
    pub failures: Vec<TransformFailure>,
    #[serde(default)]
    pub filters_applied: Option<CampaignFilter>,
}

impl CampaignResponse {
    pub fn empty(filters: Option<CampaignFilter>) -> Self {
        Self {
            total_count: 0,
            processed_count: 0,
            failed_count: 0,
            campaigns: Vec::new(),
            failures: Vec::new(),
            filters_applied: filters,
        }
    }

    pub fn stats(&self) -> ProcessingStats {
        ProcessingStats {
            total_fetched: self.total_count,
            successfully_processed: self.processed_count,
            failed: self.failed_count,
        }
    }

    pub fn falcon_rows(&self) -> Vec<FalconExportRow> {
        self.campaigns.iter().map(|c| c.falcon_data.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_fetched: usize,
    pub successfully_processed: usize,
    pub failed: usize,
}

/// GET /api/v1/campaigns/product/:product_id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCampaignResponse {
    pub product_id: String,
    pub campaign: ProcessedCampaign,
    pub processing_stats: ProcessingStats,
}
