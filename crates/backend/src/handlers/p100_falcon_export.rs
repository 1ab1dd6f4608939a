use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::query::CampaignQuery;
use crate::domain::a001_campaign::service;
use crate::projections::p100_falcon_export::service as falcon;
use crate::projections::p100_falcon_export::excel_export::{export_file_name, ExportFormat};
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub campaign_types: Option<String>,
    pub segment: Option<String>,
    pub brand: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub active_only: Option<bool>,
    /// `xlsx` (default) or `csv`
    pub format: Option<String>,
}

impl ExportQuery {
    fn campaign_query(&self) -> CampaignQuery {
        CampaignQuery {
            campaign_types: self.campaign_types.clone(),
            segment: self.segment.clone(),
            brand: self.brand.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            active_only: self.active_only,
        }
    }
}

/// GET /api/v1/campaigns/export
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Response> {
    let format = match query.format.as_deref() {
        None => ExportFormat::default(),
        Some(raw) => ExportFormat::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unsupported export format '{}'", raw)))?,
    };
    let filter = query.campaign_query().into_filter()?;

    // empty result is a 404 here, not an empty file
    let records = service::list_campaigns(&state.db, &filter, service::today()).await?;
    if records.is_empty() {
        return Err(ApiError::NotFound(
            "No campaigns found with the given filters".into(),
        ));
    }

    let response =
        falcon::process_with_akeneo(records, &state.akeneo, state.coins(), Some(filter)).await?;
    if response.campaigns.is_empty() {
        return Err(ApiError::NotFound("No valid campaigns to export".into()));
    }

    let bytes = format
        .render(&response.falcon_rows())
        .map_err(|e| ApiError::Internal(format!("Error creating export file: {}", e)))?;
    let file_name = export_file_name(chrono::Local::now(), format);
    tracing::info!(
        "Exporting {} campaigns to {}",
        response.processed_count,
        file_name
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}
