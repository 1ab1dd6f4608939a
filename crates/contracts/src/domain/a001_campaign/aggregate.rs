use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::CampaignType;

/// Date layout used by the campaign sheet
pub const CAMPAIGN_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a campaign date: `DD/MM/YYYY` as stored upstream, ISO `YYYY-MM-DD` as a fallback
pub fn parse_campaign_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, CAMPAIGN_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

// ============================================================================
// Campaign record
// ============================================================================

/// One row of the `campaigns` table. Owned by the upstream business system,
/// read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub issue_type: String,
    /// Start date as stored (`DD/MM/YYYY`)
    pub live_date: String,
    /// End date as stored; `None` or empty means the campaign is still running
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub product_id: String,
    pub selling_price: f64,
    #[serde(default)]
    pub preferred_landing_sku_id: Option<String>,
    #[serde(default)]
    pub property: Option<String>,

    #[serde(default)]
    pub slot: Option<i32>,
    #[serde(default)]
    pub request_type: Option<String>,
    #[serde(default)]
    pub monetary_type: Option<String>,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub article_type: Option<String>,
    #[serde(default)]
    pub akeneo_product_name: Option<String>,
    #[serde(default)]
    pub akeneo_brand_name: Option<String>,
    /// Row-level MRP, used when the PIM has no MRP attribute
    #[serde(default, rename = "MRP")]
    pub mrp: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub price_remarks: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl CampaignRecord {
    pub fn campaign_type(&self) -> CampaignType {
        CampaignType::classify(&self.issue_type)
    }

    pub fn live_on(&self) -> Option<NaiveDate> {
        parse_campaign_date(&self.live_date)
    }

    pub fn ends_on(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_campaign_date)
    }

    /// True when the end date is missing or blank
    pub fn is_open_ended(&self) -> bool {
        self.end_date
            .as_deref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true)
    }

    /// `live_date <= today <= end_date`, with an open end counting as "still active".
    /// A record whose start date cannot be read is never active, and neither is
    /// one whose non-empty end date cannot be read.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        let Some(live) = self.live_on() else {
            return false;
        };
        if live > today {
            return false;
        }
        if self.is_open_ended() {
            return true;
        }
        match self.ends_on() {
            Some(end) => today <= end,
            None => false,
        }
    }

    /// Non-empty preferred landing SKU, if any
    pub fn preferred_sku(&self) -> Option<&str> {
        self.preferred_landing_sku_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Filter criteria for campaign queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignFilter {
    /// `issue_type IN (...)`; empty means all types
    #[serde(default)]
    pub campaign_types: Vec<String>,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Keep campaigns starting on or after this date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Keep campaigns ending on or before this date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_active_only")]
    pub active_only: bool,
}

fn default_active_only() -> bool {
    true
}

impl Default for CampaignFilter {
    fn default() -> Self {
        Self {
            campaign_types: Vec::new(),
            segment: None,
            brand: None,
            start_date: None,
            end_date: None,
            active_only: true,
        }
    }
}

impl CampaignFilter {
    pub fn all() -> Self {
        Self {
            active_only: false,
            ..Self::default()
        }
    }

    /// Date-based predicates that are evaluated after the SQL query
    pub fn matches_dates(&self, record: &CampaignRecord, today: NaiveDate) -> bool {
        if self.active_only && !record.is_active_on(today) {
            return false;
        }
        if let Some(from) = self.start_date {
            match record.live_on() {
                Some(live) if live >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.end_date {
            match record.ends_on() {
                Some(end) if end <= to => {}
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(live: &str, end: Option<&str>) -> CampaignRecord {
        CampaignRecord {
            issue_type: "DOD".into(),
            live_date: live.into(),
            end_date: end.map(Into::into),
            segment: "Fashion".into(),
            brand: Some("Acme".into()),
            product_id: "P-1".into(),
            selling_price: 499.0,
            preferred_landing_sku_id: None,
            property: None,
            slot: None,
            request_type: None,
            monetary_type: None,
            campaign_name: None,
            article_type: None,
            akeneo_product_name: None,
            akeneo_brand_name: None,
            mrp: None,
            remarks: None,
            price_remarks: None,
            user_email: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_campaign_date_formats() {
        assert_eq!(parse_campaign_date("05/03/2025"), Some(day(2025, 3, 5)));
        assert_eq!(parse_campaign_date("2025-03-05"), Some(day(2025, 3, 5)));
        assert_eq!(parse_campaign_date("  "), None);
        assert_eq!(parse_campaign_date("31/02/2025"), None);
    }

    #[test]
    fn test_active_window_is_inclusive() {
        let r = record("01/10/2026", Some("16/10/2026"));
        assert!(r.is_active_on(day(2026, 10, 1)));
        assert!(r.is_active_on(day(2026, 10, 16)));
        assert!(!r.is_active_on(day(2026, 9, 30)));
        assert!(!r.is_active_on(day(2026, 10, 17)));
    }

    #[test]
    fn test_open_end_is_active_after_start() {
        let today = day(2026, 10, 16);
        assert!(record("01/01/2026", None).is_active_on(today));
        assert!(record("01/01/2026", Some("")).is_active_on(today));
        assert!(!record("17/10/2026", None).is_active_on(today));
    }

    #[test]
    fn test_unparseable_dates_are_inactive() {
        let today = day(2026, 10, 16);
        assert!(!record("yesterday", None).is_active_on(today));
        assert!(!record("01/01/2026", Some("someday")).is_active_on(today));
    }

    #[test]
    fn test_filter_date_bounds() {
        let today = day(2026, 10, 16);
        let r = record("01/10/2026", Some("20/10/2026"));

        let mut filter = CampaignFilter::all();
        filter.start_date = Some(day(2026, 10, 1));
        assert!(filter.matches_dates(&r, today));
        filter.start_date = Some(day(2026, 10, 2));
        assert!(!filter.matches_dates(&r, today));

        let mut filter = CampaignFilter::all();
        filter.end_date = Some(day(2026, 10, 19));
        assert!(!filter.matches_dates(&r, today));
        // open-ended campaigns never satisfy an upper end bound
        assert!(!filter.matches_dates(&record("01/10/2026", None), today));
    }

    #[test]
    fn test_default_filter_is_active_only() {
        let filter: CampaignFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.active_only);
        assert!(filter.campaign_types.is_empty());
    }
}
