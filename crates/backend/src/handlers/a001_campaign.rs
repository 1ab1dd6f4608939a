use axum::{
    extract::{Path, Query, State},
    Json,
};
use contracts::domain::a001_campaign::{
    validate_record, CampaignFilter, CampaignRecord, RecordValidationResult, ValidationReport,
};
use contracts::projections::p100_falcon_export::{
    CampaignResponse, ProcessingStats, ProductCampaignResponse,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::query::{non_blank, split_types, CampaignQuery};
use crate::domain::a001_campaign::service;
use crate::projections::p100_falcon_export::service as falcon;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;

/// Fetch, filter and enrich campaigns
pub async fn load_campaigns(state: &AppState, filter: CampaignFilter) -> ApiResult<CampaignResponse> {
    let records = service::list_campaigns(&state.db, &filter, service::today()).await?;
    let response =
        falcon::process_with_akeneo(records, &state.akeneo, state.coins(), Some(filter)).await?;
    Ok(response)
}

/// GET /api/v1/campaigns
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CampaignQuery>,
) -> ApiResult<Json<CampaignResponse>> {
    let filter = query.into_filter()?;
    Ok(Json(load_campaigns(&state, filter).await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct ActiveQuery {
    pub campaign_types: Option<String>,
}

/// GET /api/v1/campaigns/active
pub async fn list_active(
    State(state): State<AppState>,
    Query(query): Query<ActiveQuery>,
) -> ApiResult<Json<CampaignResponse>> {
    let filter = CampaignFilter {
        campaign_types: split_types(query.campaign_types.as_deref()),
        ..CampaignFilter::default()
    };
    Ok(Json(load_campaigns(&state, filter).await?))
}

/// GET /api/v1/campaigns/types
pub async fn list_types(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let types = service::campaign_types(&state.db).await?;
    Ok(Json(json!({ "campaign_types": types })))
}

/// GET /api/v1/campaigns/segments
pub async fn list_segments(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let segments = service::segments(&state.db).await?;
    Ok(Json(json!({ "segments": segments })))
}

/// GET /api/v1/campaigns/brands
pub async fn list_brands(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let brands = service::brands(&state.db).await?;
    Ok(Json(json!({ "brands": brands })))
}

/// GET /api/v1/campaigns/product/:product_id
pub async fn get_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<ProductCampaignResponse>> {
    let record = service::get_by_product_id(&state.db, &product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No campaign found for product {}", product_id)))?;

    let campaign = falcon::process_one_with_akeneo(record, &state.akeneo, state.coins())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Product {} could not be enriched from the product catalog",
                product_id
            ))
        })?;

    Ok(Json(ProductCampaignResponse {
        product_id,
        campaign,
        processing_stats: ProcessingStats {
            total_fetched: 1,
            successfully_processed: 1,
            failed: 0,
        },
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateQuery {
    pub campaign_types: Option<String>,
    pub segment: Option<String>,
    pub brand: Option<String>,
}

/// POST /api/v1/campaigns/validate
///
/// Checks every stored campaign matching the filter, active or not.
pub async fn validate(
    State(state): State<AppState>,
    Query(query): Query<ValidateQuery>,
) -> ApiResult<Json<ValidationReport>> {
    let filter = CampaignFilter {
        campaign_types: split_types(query.campaign_types.as_deref()),
        segment: non_blank(query.segment),
        brand: non_blank(query.brand),
        ..CampaignFilter::all()
    };
    let records = service::list_campaigns(&state.db, &filter, service::today()).await?;
    let report = ValidationReport::build(&records, filter);
    tracing::info!(
        "Validated {} campaigns: {} invalid",
        report.total_campaigns,
        report.invalid_campaigns
    );
    Ok(Json(report))
}

/// POST /api/v1/campaigns/validate/record
pub async fn validate_one(Json(record): Json<CampaignRecord>) -> Json<RecordValidationResult> {
    let errors = validate_record(&record);
    Json(RecordValidationResult {
        valid: errors.is_empty(),
        errors,
    })
}
