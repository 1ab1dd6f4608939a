use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use contracts::dashboards::d100_campaign_summary::{CampaignSummary, SummaryResponse};
use contracts::domain::a001_campaign::CampaignFilter;
use serde::Deserialize;

use super::query::{non_blank, CampaignQuery};
use crate::dashboards::d100_campaign_summary::html::{self, PageFilters};
use crate::dashboards::d100_campaign_summary::service::summarize;
use crate::domain::a001_campaign::service;
use crate::projections::p100_falcon_export::service as falcon;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;

/// GET /api/v1/campaigns/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<CampaignQuery>,
) -> ApiResult<Json<SummaryResponse>> {
    let filter = query.into_filter()?;
    let records = service::list_campaigns(&state.db, &filter, service::today()).await?;

    if records.is_empty() {
        return Ok(Json(SummaryResponse {
            summary: CampaignSummary::default(),
            processing_stats: None,
            filters_applied: filter,
        }));
    }

    let response =
        falcon::process_with_akeneo(records, &state.akeneo, state.coins(), Some(filter.clone()))
            .await?;

    Ok(Json(SummaryResponse {
        summary: summarize(&response.campaigns),
        processing_stats: Some(response.stats()),
        filters_applied: filter,
    }))
}

/// GET /dashboard/
pub async fn home(State(state): State<AppState>) -> Html<String> {
    match service::filter_options(&state.db).await {
        Ok(options) => Html(html::render_home(&options)),
        Err(e) => {
            tracing::error!("Error loading dashboard: {}", e);
            Html(html::render_error("Dashboard Error", &e.to_string()))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CampaignsPageQuery {
    pub campaign_type: Option<String>,
    pub segment: Option<String>,
    pub brand: Option<String>,
    pub active_only: Option<bool>,
}

impl CampaignsPageQuery {
    fn page_filters(self) -> PageFilters {
        PageFilters {
            campaign_type: non_blank(self.campaign_type),
            segment: non_blank(self.segment),
            brand: non_blank(self.brand),
            // unchecked checkbox sends nothing
            active_only: self.active_only.unwrap_or(false),
        }
    }
}

/// GET /dashboard/campaigns
pub async fn campaigns_page(
    State(state): State<AppState>,
    Query(query): Query<CampaignsPageQuery>,
) -> Html<String> {
    // a bare visit (no query string at all) shows active campaigns
    let bare = query.campaign_type.is_none()
        && query.segment.is_none()
        && query.brand.is_none()
        && query.active_only.is_none();
    let mut filters = query.page_filters();
    if bare {
        filters.active_only = true;
    }

    match render_campaigns_page(&state, &filters).await {
        Ok(page) => Html(page),
        Err(e) => {
            tracing::error!("Error loading campaigns page: {}", e);
            Html(html::render_error("Campaigns Error", &e.to_string()))
        }
    }
}

async fn render_campaigns_page(state: &AppState, filters: &PageFilters) -> ApiResult<String> {
    let filter = CampaignFilter {
        campaign_types: filters.campaign_type.iter().cloned().collect(),
        segment: filters.segment.clone(),
        brand: filters.brand.clone(),
        active_only: filters.active_only,
        ..CampaignFilter::default()
    };

    let records = service::list_campaigns(&state.db, &filter, service::today()).await?;
    let response =
        falcon::process_with_akeneo(records, &state.akeneo, state.coins(), Some(filter)).await?;
    let options = service::filter_options(&state.db).await?;
    let summary = summarize(&response.campaigns);

    Ok(html::render_campaigns(&response, &summary, &options, filters))
}
