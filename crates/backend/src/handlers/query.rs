use contracts::domain::a001_campaign::{parse_campaign_date, CampaignFilter};
use serde::Deserialize;

use crate::shared::error::ApiError;

/// Campaign filter as it arrives in the query string
#[derive(Debug, Default, Deserialize)]
pub struct CampaignQuery {
    /// Comma-separated issue types, e.g. `DOD,FLASH_SALE`
    pub campaign_types: Option<String>,
    pub segment: Option<String>,
    pub brand: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub active_only: Option<bool>,
}

impl CampaignQuery {
    pub fn into_filter(self) -> Result<CampaignFilter, ApiError> {
        Ok(CampaignFilter {
            campaign_types: split_types(self.campaign_types.as_deref()),
            segment: non_blank(self.segment),
            brand: non_blank(self.brand),
            start_date: parse_date_param("start_date", self.start_date.as_deref())?,
            end_date: parse_date_param("end_date", self.end_date.as_deref())?,
            active_only: self.active_only.unwrap_or(true),
        })
    }
}

pub fn split_types(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_date_param(
    name: &str,
    value: Option<&str>,
) -> Result<Option<chrono::NaiveDate>, ApiError> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_campaign_date(raw).map(Some).ok_or_else(|| {
            ApiError::BadRequest(format!(
                "Invalid {} '{}'. Expected DD/MM/YYYY or YYYY-MM-DD",
                name, raw
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_filter() {
        let query = CampaignQuery {
            campaign_types: Some("DOD, FLASH_SALE,,".into()),
            segment: Some("  ".into()),
            brand: Some("Acme".into()),
            start_date: Some("01/10/2026".into()),
            ..CampaignQuery::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.campaign_types, vec!["DOD", "FLASH_SALE"]);
        assert_eq!(filter.segment, None);
        assert_eq!(filter.brand.as_deref(), Some("Acme"));
        assert_eq!(filter.start_date, chrono::NaiveDate::from_ymd_opt(2026, 10, 1));
        assert!(filter.active_only);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let query = CampaignQuery {
            end_date: Some("31-12-2026".into()),
            ..CampaignQuery::default()
        };
        let err = query.into_filter().unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
