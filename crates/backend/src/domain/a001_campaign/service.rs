use chrono::NaiveDate;
use contracts::dashboards::d100_campaign_summary::FilterOptions;
use contracts::domain::a001_campaign::{CampaignFilter, CampaignRecord};
use sea_orm::{ConnectionTrait, DbErr};

use super::repository::{self, DistinctColumn};

/// Current business date (server local time)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Campaigns matching `filter` as of `today`, newest start date first.
pub async fn list_campaigns<C: ConnectionTrait>(
    db: &C,
    filter: &CampaignFilter,
    today: NaiveDate,
) -> Result<Vec<CampaignRecord>, DbErr> {
    let records = repository::find(db, filter).await?;
    Ok(apply_date_filters(records, filter, today))
}

/// Date-based part of the filter plus ordering
pub fn apply_date_filters(
    records: Vec<CampaignRecord>,
    filter: &CampaignFilter,
    today: NaiveDate,
) -> Vec<CampaignRecord> {
    let mut kept: Vec<CampaignRecord> = records
        .into_iter()
        .filter(|r| {
            if r.live_on().is_none() {
                tracing::warn!(
                    "Invalid live date '{}' for campaign {}",
                    r.live_date,
                    r.product_id
                );
            }
            filter.matches_dates(r, today)
        })
        .collect();
    sort_by_live_date_desc(&mut kept);
    kept
}

/// Keep only campaigns running on `today`
pub fn filter_active(records: Vec<CampaignRecord>, today: NaiveDate) -> Vec<CampaignRecord> {
    records
        .into_iter()
        .filter(|r| r.is_active_on(today))
        .collect()
}

/// Newest `live_date` first; rows without a readable date keep their order at the end
pub fn sort_by_live_date_desc(records: &mut [CampaignRecord]) {
    records.sort_by(|a, b| match (a.live_on(), b.live_on()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

pub async fn get_by_product_id<C: ConnectionTrait>(
    db: &C,
    product_id: &str,
) -> Result<Option<CampaignRecord>, DbErr> {
    repository::find_by_product_id(db, product_id).await
}

pub async fn campaign_types<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, DbErr> {
    repository::distinct_values(db, DistinctColumn::IssueType).await
}

pub async fn segments<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, DbErr> {
    repository::distinct_values(db, DistinctColumn::Segment).await
}

pub async fn brands<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, DbErr> {
    repository::distinct_values(db, DistinctColumn::Brand).await
}

/// All dropdown values for the dashboard
pub async fn filter_options<C: ConnectionTrait>(db: &C) -> Result<FilterOptions, DbErr> {
    Ok(FilterOptions {
        campaign_types: campaign_types(db).await?,
        segments: segments(db).await?,
        brands: brands(db).await?,
    })
}
