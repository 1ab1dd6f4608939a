use ammonia::clean_text;
use contracts::dashboards::d100_campaign_summary::{CampaignSummary, FilterOptions};
use contracts::projections::p100_falcon_export::{CampaignResponse, ProcessingStats};
use std::fmt::Write;

use crate::shared::format::{format_amount, format_number};

/// Filter values selected on the campaigns page
#[derive(Debug, Clone, Default)]
pub struct PageFilters {
    pub campaign_type: Option<String>,
    pub segment: Option<String>,
    pub brand: Option<String>,
    pub active_only: bool,
}

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f5f6f8; color: #222; }
header { background: #1f3b57; color: #fff; padding: 14px 24px; }
header a { color: #fff; margin-right: 16px; text-decoration: none; }
main { padding: 24px; }
form.filters { display: flex; gap: 12px; align-items: end; flex-wrap: wrap; margin-bottom: 20px; }
form.filters label { display: flex; flex-direction: column; font-size: 13px; }
.cards { display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 20px; }
.card { background: #fff; border-radius: 6px; padding: 12px 16px; min-width: 160px; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
.card .value { font-size: 20px; font-weight: 600; }
table { border-collapse: collapse; width: 100%; background: #fff; }
th, td { padding: 6px 10px; border-bottom: 1px solid #e3e6ea; font-size: 13px; text-align: left; }
td.num { text-align: right; }
.error { background: #fdecea; color: #8a1f11; padding: 16px; border-radius: 6px; }
"#;

/// `title` is inserted as-is
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header><strong>{title}</strong> &nbsp; <a href="/dashboard/">Home</a><a href="/dashboard/campaigns">Campaigns</a><a href="/api/v1/campaigns/summary">API</a></header>
<main>
{body}
</main>
</body>
</html>"#
    )
}

fn select(name: &str, label: &str, options: &[String], selected: Option<&str>) -> String {
    let mut html = format!(
        r#"<label>{}<select name="{}"><option value="">All</option>"#,
        clean_text(label),
        clean_text(name)
    );
    for option in options {
        let is_selected = selected == Some(option.as_str());
        let _ = write!(
            html,
            r#"<option value="{value}"{sel}>{value}</option>"#,
            value = clean_text(option),
            sel = if is_selected { " selected" } else { "" }
        );
    }
    html.push_str("</select></label>");
    html
}

fn filter_form(options: &FilterOptions, filters: &PageFilters) -> String {
    format!(
        r#"<form class="filters" method="get" action="/dashboard/campaigns">
{types}
{segments}
{brands}
<label>Active only<input type="checkbox" name="active_only" value="true"{checked}></label>
<button type="submit">Show campaigns</button>
</form>"#,
        types = select(
            "campaign_type",
            "Campaign type",
            &options.campaign_types,
            filters.campaign_type.as_deref()
        ),
        segments = select("segment", "Segment", &options.segments, filters.segment.as_deref()),
        brands = select("brand", "Brand", &options.brands, filters.brand.as_deref()),
        checked = if filters.active_only { " checked" } else { "" },
    )
}

fn card(label: &str, value: &str) -> String {
    format!(
        r#"<div class="card"><div>{}</div><div class="value">{}</div></div>"#,
        clean_text(label),
        clean_text(value)
    )
}

/// GET /dashboard/
pub fn render_home(options: &FilterOptions) -> String {
    let filters = PageFilters {
        active_only: true,
        ..PageFilters::default()
    };
    let body = format!(
        r#"<h2>Campaign filters</h2>
{form}
<div class="cards">{types}{segments}{brands}</div>
<p><a href="/api/v1/campaigns/export">Download active campaigns (xlsx)</a></p>"#,
        form = filter_form(options, &filters),
        types = card("Campaign types", &format_number(options.campaign_types.len())),
        segments = card("Segments", &format_number(options.segments.len())),
        brands = card("Brands", &format_number(options.brands.len())),
    );
    page("Store Operations Dashboard", &body)
}

fn summary_cards(summary: &CampaignSummary, stats: &ProcessingStats) -> String {
    let mut html = String::from(r#"<div class="cards">"#);
    html.push_str(&card("Fetched", &format_number(stats.total_fetched)));
    html.push_str(&card("Processed", &format_number(stats.successfully_processed)));
    html.push_str(&card("Failed", &format_number(stats.failed)));
    if let Some(avg) = summary.avg_selling_price {
        html.push_str(&card("Avg selling price", &format_amount(avg)));
    }
    if let Some(avg) = summary.avg_mrp {
        html.push_str(&card("Avg MRP", &format_amount(avg)));
    }
    if let Some(total) = summary.total_potential_revenue {
        html.push_str(&card("Potential revenue", &format_amount(total)));
    }
    html.push_str("</div>");

    if let Some(counts) = &summary.campaign_type_counts {
        html.push_str("<p>");
        let parts: Vec<String> = counts
            .iter()
            .map(|(t, n)| format!("{}: {}", clean_text(t), format_number(*n)))
            .collect();
        html.push_str(&parts.join(" &middot; "));
        html.push_str("</p>");
    }
    html
}

fn campaigns_table(response: &CampaignResponse) -> String {
    if response.campaigns.is_empty() {
        return "<p>No campaigns match the selected filters.</p>".to_string();
    }

    let mut html = String::from(
        "<table><thead><tr><th>Type</th><th>Product</th><th>SKU</th><th>Segment</th>\
         <th>Brand</th><th>Live</th><th>End</th><th>MRP</th><th>MOP</th>\
         <th>Selling price</th><th>MOP cost</th><th>Coins</th></tr></thead><tbody>",
    );
    for c in &response.campaigns {
        let raw = &c.raw_data;
        let row = &c.falcon_data;
        let _ = write!(
            html,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="num">{}</td><td class="num">{}</td><td class="num">{}</td><td class="num">{}</td><td class="num">{}</td></tr>"#,
            clean_text(raw.campaign_type().display_name()),
            clean_text(&row.product_id),
            clean_text(&row.sku_id),
            clean_text(&raw.segment),
            clean_text(raw.brand.as_deref().unwrap_or("")),
            clean_text(&raw.live_date),
            clean_text(raw.end_date.as_deref().unwrap_or("open")),
            format_amount(row.mrp),
            format_amount(row.mop),
            format_amount(row.selling_price),
            format_amount(row.mop_cost),
            row.coins,
        );
    }
    html.push_str("</tbody></table>");
    html
}

fn failures_list(response: &CampaignResponse) -> String {
    if response.failures.is_empty() {
        return String::new();
    }
    let mut html = String::from("<h3>Skipped campaigns</h3><ul>");
    for f in &response.failures {
        let _ = write!(
            html,
            "<li>{}: {}</li>",
            clean_text(&f.product_id),
            clean_text(&f.reason)
        );
    }
    html.push_str("</ul>");
    html
}

/// GET /dashboard/campaigns
pub fn render_campaigns(
    response: &CampaignResponse,
    summary: &CampaignSummary,
    options: &FilterOptions,
    filters: &PageFilters,
) -> String {
    let body = format!(
        "<h2>Campaigns</h2>\n{}\n{}\n{}\n{}",
        filter_form(options, filters),
        summary_cards(summary, &response.stats()),
        campaigns_table(response),
        failures_list(response),
    );
    page("Campaign Management", &body)
}

pub fn render_error(title: &str, error: &str) -> String {
    let body = format!(
        r#"<div class="error"><h2>{}</h2><p>{}</p></div><p><a href="/dashboard/">Back to dashboard</a></p>"#,
        clean_text(title),
        clean_text(error)
    );
    page(title, &body)
}
