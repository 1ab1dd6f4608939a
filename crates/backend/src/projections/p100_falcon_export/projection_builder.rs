use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;
use contracts::domain::a001_campaign::{CampaignFilter, CampaignRecord};
use contracts::domain::a002_pim_product::ProductMetadata;
use contracts::projections::p100_falcon_export::{
    CampaignResponse, FalconExportRow, ProcessedCampaign, TransformFailure,
};

use crate::domain::a002_pim_product::{PimError, ProductCatalog};

/// MOP cost factor applied to the selling price (2.1% off)
pub const MOP_MULTIPLIER: f64 = 0.979;

/// `round(selling_price * 0.979, 2)`, half away from zero.
///
/// The product is taken in decimal from the shortest text form of the price,
/// so half-cent results (e.g. 5.00 -> 4.895) round up. Prices outside the
/// decimal range fall back to float arithmetic.
pub fn mop_cost(selling_price: f64) -> f64 {
    if !selling_price.is_finite() {
        return selling_price;
    }
    decimal_mop_cost(selling_price)
        .unwrap_or_else(|| (selling_price * MOP_MULTIPLIER * 100.0).round() / 100.0)
}

fn decimal_mop_cost(selling_price: f64) -> Option<f64> {
    let price = Decimal::from_str(&selling_price.to_string()).ok()?;
    let cost = price
        .checked_mul(dec!(0.979))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cost.to_string().parse().ok()
}

/// Why a record could not be turned into a Falcon row
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    NotFound,
    MrpUnavailable,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::NotFound => write!(f, "Product not found in PIM"),
            RowError::MrpUnavailable => write!(f, "MRP unavailable"),
        }
    }
}

/// Join a campaign with its PIM metadata
pub fn build_row(
    record: &CampaignRecord,
    metadata: &ProductMetadata,
    coins: i64,
) -> Result<FalconExportRow, RowError> {
    // catalog MRP wins over the sheet's own MRP column
    let mrp = metadata
        .mrp
        .or(record.mrp)
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(RowError::MrpUnavailable)?;

    let sku_id = record
        .preferred_sku()
        .map(str::to_string)
        .unwrap_or_else(|| metadata.sku_id.clone());

    Ok(FalconExportRow {
        sku_id,
        product_id: record.product_id.clone(),
        mrp,
        mop: mrp,
        selling_price: record.selling_price,
        mop_cost: mop_cost(record.selling_price),
        selling_price_cost: record.selling_price,
        coins,
    })
}

/// Transform a batch. Rows whose lookup fails are reported in `failures`
/// and left out; the rest of the batch continues.
pub async fn process_campaigns(
    records: Vec<CampaignRecord>,
    catalog: &dyn ProductCatalog,
    coins: i64,
    filters: Option<CampaignFilter>,
) -> CampaignResponse {
    let total_count = records.len();
    let mut campaigns = Vec::with_capacity(total_count);
    let mut failures = Vec::new();

    for record in records {
        let outcome = match catalog.fetch_metadata(&record.product_id).await {
            Ok(Some(metadata)) => build_row(&record, &metadata, coins).map_err(|e| e.to_string()),
            Ok(None) => Err(RowError::NotFound.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(falcon_data) => campaigns.push(ProcessedCampaign {
                raw_data: record,
                falcon_data,
                processed_at: Utc::now(),
            }),
            Err(reason) => {
                tracing::warn!("Skipping campaign {}: {}", record.product_id, reason);
                failures.push(TransformFailure {
                    product_id: record.product_id,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        "Processed {}/{} campaigns ({} failed)",
        campaigns.len(),
        total_count,
        failures.len()
    );

    CampaignResponse {
        total_count,
        processed_count: campaigns.len(),
        failed_count: failures.len(),
        campaigns,
        failures,
        filters_applied: filters,
    }
}

/// Same as [`process_campaigns`] but errors from the catalog are not attributed
/// to rows. Used where a single failure should fail the whole request.
pub async fn process_one(
    record: CampaignRecord,
    catalog: &dyn ProductCatalog,
    coins: i64,
) -> Result<Option<ProcessedCampaign>, PimError> {
    let Some(metadata) = catalog.fetch_metadata(&record.product_id).await? else {
        return Ok(None);
    };
    match build_row(&record, &metadata, coins) {
        Ok(falcon_data) => Ok(Some(ProcessedCampaign {
            raw_data: record,
            falcon_data,
            processed_at: Utc::now(),
        })),
        Err(e) => {
            tracing::warn!("Skipping campaign {}: {}", record.product_id, e);
            Ok(None)
        }
    }
}
