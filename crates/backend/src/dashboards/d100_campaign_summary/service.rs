use contracts::dashboards::d100_campaign_summary::CampaignSummary;
use contracts::projections::p100_falcon_export::ProcessedCampaign;
use std::collections::BTreeMap;

/// Summary statistics over processed campaigns
pub fn summarize(campaigns: &[ProcessedCampaign]) -> CampaignSummary {
    if campaigns.is_empty() {
        return CampaignSummary::default();
    }

    let n = campaigns.len() as f64;
    let prices: Vec<f64> = campaigns.iter().map(|c| c.falcon_data.selling_price).collect();
    let revenue: f64 = prices.iter().sum();
    let mrp_total: f64 = campaigns.iter().map(|c| c.falcon_data.mrp).sum();

    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for c in campaigns {
        *type_counts.entry(c.raw_data.issue_type.clone()).or_insert(0) += 1;
    }

    CampaignSummary {
        total_campaigns: campaigns.len(),
        campaign_types: Some(type_counts.keys().cloned().collect()),
        avg_selling_price: Some(revenue / n),
        min_selling_price: prices.iter().copied().reduce(f64::min),
        max_selling_price: prices.iter().copied().reduce(f64::max),
        avg_mrp: Some(mrp_total / n),
        total_potential_revenue: Some(revenue),
        campaign_type_counts: Some(type_counts),
    }
}
