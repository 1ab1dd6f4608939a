use contracts::domain::a001_campaign::{CampaignFilter, CampaignRecord};
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement, Value};

/// Raw `campaigns` row. Every column is nullable upstream.
#[derive(Debug, Clone, FromQueryResult)]
pub struct CampaignRow {
    pub issue_type: Option<String>,
    pub live_date: Option<String>,
    pub segment: Option<String>,
    pub slot: Option<i64>,
    pub end_date: Option<String>,
    pub request_type: Option<String>,
    pub monetary_type: Option<String>,
    pub product_id: Option<String>,
    pub akeneo_product_name: Option<String>,
    pub akeneo_brand_name: Option<String>,
    pub selling_price: Option<f64>,
    pub brand: Option<String>,
    pub preferred_landing_sku_id: Option<String>,
    pub property: Option<String>,
    pub campaign_name: Option<String>,
    pub article_type: Option<String>,
    pub mrp: Option<f64>,
    pub remarks: Option<String>,
    pub price_remarks: Option<String>,
    pub user_email: Option<String>,
}

impl From<CampaignRow> for CampaignRecord {
    fn from(r: CampaignRow) -> Self {
        CampaignRecord {
            issue_type: r.issue_type.unwrap_or_default(),
            live_date: r.live_date.unwrap_or_default(),
            end_date: r.end_date,
            segment: r.segment.unwrap_or_default(),
            brand: r.brand,
            product_id: r.product_id.unwrap_or_default(),
            selling_price: r.selling_price.unwrap_or(0.0),
            preferred_landing_sku_id: r.preferred_landing_sku_id,
            property: r.property,
            slot: r.slot.and_then(|s| i32::try_from(s).ok()),
            request_type: r.request_type,
            monetary_type: r.monetary_type,
            campaign_name: r.campaign_name,
            article_type: r.article_type,
            akeneo_product_name: r.akeneo_product_name,
            akeneo_brand_name: r.akeneo_brand_name,
            // 0 in the sheet means "not filled in"
            mrp: r.mrp.filter(|v| *v > 0.0),
            remarks: r.remarks,
            price_remarks: r.price_remarks,
            user_email: r.user_email,
        }
    }
}

// Prices are cast so MySQL DECIMAL columns decode as f64; works on SQLite too.
const SELECT_CAMPAIGNS: &str = r#"
    SELECT
        issue_type,
        live_date,
        segment,
        slot,
        end_date,
        request_type,
        monetary_type,
        product_id,
        akeneo_product_name,
        akeneo_brand_name,
        CAST(selling_price AS DOUBLE) AS selling_price,
        brand,
        preferred_landing_sku_id,
        property,
        campaign_name,
        article_type,
        CAST(MRP AS DOUBLE) AS mrp,
        remarks,
        price_remarks,
        user_email
    FROM campaigns
"#;

/// Fetch campaigns matching the column filters of `filter`
/// (`campaign_types`, `segment`, `brand`). Date predicates are applied by the service.
pub async fn find<C: ConnectionTrait>(
    db: &C,
    filter: &CampaignFilter,
) -> Result<Vec<CampaignRecord>, DbErr> {
    let (sql, values) = build_filtered_query(filter);
    let stmt = Statement::from_sql_and_values(db.get_database_backend(), &sql, values);
    let rows = CampaignRow::find_by_statement(stmt).all(db).await?;
    tracing::info!("Fetched {} campaigns from database", rows.len());
    Ok(rows.into_iter().map(Into::into).collect())
}

fn build_filtered_query(filter: &CampaignFilter) -> (String, Vec<Value>) {
    let mut sql = format!("{} WHERE 1=1", SELECT_CAMPAIGNS);
    let mut values: Vec<Value> = Vec::new();

    let types: Vec<&str> = filter
        .campaign_types
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if !types.is_empty() {
        let placeholders = vec!["?"; types.len()].join(", ");
        sql.push_str(&format!(" AND issue_type IN ({})", placeholders));
        values.extend(types.into_iter().map(|t| Value::from(t.to_string())));
    }

    if let Some(segment) = non_empty(&filter.segment) {
        sql.push_str(" AND segment = ?");
        values.push(segment.to_string().into());
    }

    if let Some(brand) = non_empty(&filter.brand) {
        sql.push_str(" AND brand = ?");
        values.push(brand.to_string().into());
    }

    (sql, values)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// First campaign for a product
pub async fn find_by_product_id<C: ConnectionTrait>(
    db: &C,
    product_id: &str,
) -> Result<Option<CampaignRecord>, DbErr> {
    let sql = format!("{} WHERE product_id = ? LIMIT 1", SELECT_CAMPAIGNS);
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        &sql,
        [product_id.to_string().into()],
    );
    let row = CampaignRow::find_by_statement(stmt).one(db).await?;
    Ok(row.map(Into::into))
}

/// Columns that can be listed with [`distinct_values`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctColumn {
    IssueType,
    Segment,
    Brand,
}

impl DistinctColumn {
    fn column(&self) -> &'static str {
        match self {
            DistinctColumn::IssueType => "issue_type",
            DistinctColumn::Segment => "segment",
            DistinctColumn::Brand => "brand",
        }
    }
}

/// Sorted distinct non-empty values of a column
pub async fn distinct_values<C: ConnectionTrait>(
    db: &C,
    column: DistinctColumn,
) -> Result<Vec<String>, DbErr> {
    #[derive(Debug, FromQueryResult)]
    struct DistinctValue {
        value: Option<String>,
    }

    let col = column.column();
    let sql = format!(
        "SELECT DISTINCT {col} AS value FROM campaigns \
         WHERE {col} IS NOT NULL AND {col} <> '' ORDER BY {col}"
    );
    let stmt = Statement::from_string(db.get_database_backend(), sql);
    let results = DistinctValue::find_by_statement(stmt).all(db).await?;

    Ok(results.into_iter().filter_map(|r| r.value).collect())
}
