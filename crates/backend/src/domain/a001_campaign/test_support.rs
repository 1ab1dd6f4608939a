use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, Value};

use crate::shared::data::db::initialize_database;

pub async fn campaign_db() -> DatabaseConnection {
    initialize_database("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

/// Builder for a `campaigns` row
pub struct NewCampaign {
    pub product_id: String,
    pub issue_type: String,
    pub live_date: String,
    pub end_date: Option<String>,
    pub segment: String,
    pub brand: Option<String>,
    pub selling_price: f64,
    pub mrp: Option<f64>,
    pub preferred_landing_sku_id: Option<String>,
}

impl NewCampaign {
    pub fn new(product_id: &str, issue_type: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            issue_type: issue_type.to_string(),
            live_date: "01/01/2026".to_string(),
            end_date: Some("31/12/2026".to_string()),
            segment: "General".to_string(),
            brand: None,
            selling_price: 100.0,
            mrp: None,
            preferred_landing_sku_id: None,
        }
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.segment = segment.to_string();
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }

    pub fn dates(mut self, live: &str, end: Option<&str>) -> Self {
        self.live_date = live.to_string();
        self.end_date = end.map(str::to_string);
        self
    }

    pub fn price(mut self, selling_price: f64) -> Self {
        self.selling_price = selling_price;
        self
    }

    pub fn mrp(mut self, mrp: f64) -> Self {
        self.mrp = Some(mrp);
        self
    }

    pub fn preferred_sku(mut self, sku: &str) -> Self {
        self.preferred_landing_sku_id = Some(sku.to_string());
        self
    }
}

pub async fn insert_campaign(db: &DatabaseConnection, c: NewCampaign) {
    let sql = r#"
        INSERT INTO campaigns
            (product_id, issue_type, live_date, end_date, segment, brand,
             selling_price, MRP, preferred_landing_sku_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
    "#;
    let values: Vec<Value> = vec![
        c.product_id.into(),
        c.issue_type.into(),
        c.live_date.into(),
        c.end_date.into(),
        c.segment.into(),
        c.brand.into(),
        c.selling_price.into(),
        c.mrp.into(),
        c.preferred_landing_sku_id.into(),
    ];
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        sql,
        values,
    ))
    .await
    .expect("insert campaign");
}
