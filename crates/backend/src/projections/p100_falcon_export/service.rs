use contracts::domain::a001_campaign::{CampaignFilter, CampaignRecord};
use contracts::projections::p100_falcon_export::{CampaignResponse, ProcessedCampaign};

use super::projection_builder;
use crate::domain::a002_pim_product::{AkeneoClient, PimError};

/// Enrich a batch through Akeneo.
///
/// Authenticates once, and only when there is something to look up.
pub async fn process_with_akeneo(
    records: Vec<CampaignRecord>,
    akeneo: &AkeneoClient,
    coins: i64,
    filters: Option<CampaignFilter>,
) -> Result<CampaignResponse, PimError> {
    if records.is_empty() {
        return Ok(CampaignResponse::empty(filters));
    }
    let session = akeneo.authenticate().await?;
    Ok(projection_builder::process_campaigns(records, &session, coins, filters).await)
}

pub async fn process_one_with_akeneo(
    record: CampaignRecord,
    akeneo: &AkeneoClient,
    coins: i64,
) -> Result<Option<ProcessedCampaign>, PimError> {
    let session = akeneo.authenticate().await?;
    projection_builder::process_one(record, &session, coins).await
}
