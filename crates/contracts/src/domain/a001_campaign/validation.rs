use serde::{Deserialize, Serialize};

use super::aggregate::{CampaignFilter, CampaignRecord, CAMPAIGN_DATE_FORMAT};

/// Check a campaign record before it is handed to Falcon.
/// Returns human-readable problems, empty when the record is fine.
pub fn validate_record(record: &CampaignRecord) -> Vec<String> {
    let mut errors = Vec::new();

    if record.product_id.trim().is_empty() {
        errors.push("Product ID is required".to_string());
    }

    if record.selling_price.is_nan() || record.selling_price <= 0.0 {
        errors.push("Valid selling price is required".to_string());
    }

    let live_missing = record.live_date.trim().is_empty();
    let end_missing = record.is_open_ended();
    if live_missing {
        errors.push("Live date is required".to_string());
    }
    if end_missing {
        errors.push("End date is required".to_string());
    }

    if !live_missing && !end_missing {
        match (record.live_on(), record.ends_on()) {
            (Some(live), Some(end)) => {
                if end <= live {
                    errors.push("End date must be after live date".to_string());
                }
            }
            _ => errors.push(format!(
                "Invalid date format. Expected {}",
                CAMPAIGN_DATE_FORMAT.replace("%d", "DD").replace("%m", "MM").replace("%Y", "YYYY")
            )),
        }
    }

    errors
}

/// Problems found for one stored campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordValidationErrors {
    pub product_id: String,
    pub errors: Vec<String>,
}

/// POST /api/v1/campaigns/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_campaigns: usize,
    pub valid_campaigns: usize,
    pub invalid_campaigns: usize,
    pub validation_errors: Vec<RecordValidationErrors>,
    pub filters_applied: CampaignFilter,
}

impl ValidationReport {
    pub fn build(records: &[CampaignRecord], filters: CampaignFilter) -> Self {
        let validation_errors: Vec<RecordValidationErrors> = records
            .iter()
            .filter_map(|r| {
                let errors = validate_record(r);
                if errors.is_empty() {
                    None
                } else {
                    Some(RecordValidationErrors {
                        product_id: r.product_id.clone(),
                        errors,
                    })
                }
            })
            .collect();

        Self {
            total_campaigns: records.len(),
            valid_campaigns: records.len() - validation_errors.len(),
            invalid_campaigns: validation_errors.len(),
            validation_errors,
            filters_applied: filters,
        }
    }
}

/// POST /api/v1/campaigns/validate/record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}
