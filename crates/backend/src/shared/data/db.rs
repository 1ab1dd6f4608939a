use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};

/// Open the campaign database.
///
/// MySQL is the production backend; SQLite is used for local runs and tests,
/// in which case the `campaigns` table is created when missing.
pub async fn initialize_database(url: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(path) = sqlite_file_path(url) {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let mut options = ConnectOptions::new(url.to_string());
    options.sqlx_logging(false);
    if url.contains(":memory:") {
        // every pooled connection would otherwise get its own empty database
        options.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(options).await?;
    check_connection(&conn).await?;

    if conn.get_database_backend() == DatabaseBackend::Sqlite {
        ensure_campaigns_table(&conn).await?;
    }

    Ok(conn)
}

/// `SELECT 1` round trip
pub async fn check_connection(conn: &DatabaseConnection) -> Result<(), DbErr> {
    conn.query_one(Statement::from_string(
        conn.get_database_backend(),
        "SELECT 1".to_string(),
    ))
    .await?;
    Ok(())
}

fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://")?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.contains(":memory:") {
        None
    } else {
        Some(path)
    }
}

/// Minimal schema bootstrap for SQLite. The production table lives in MySQL and
/// is maintained by the campaign sheet importer, not by this service.
pub async fn ensure_campaigns_table(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let check = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='campaigns';
    "#;
    let exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check.to_string(),
        ))
        .await?;

    if exists.is_empty() {
        tracing::info!("Creating campaigns table");
        let create_campaigns_table_sql = r#"
            CREATE TABLE campaigns (
                issue_type TEXT,
                live_date TEXT,
                segment TEXT,
                slot INTEGER,
                end_date TEXT,
                request_type TEXT,
                monetary_type TEXT,
                cpc REAL,
                product_id TEXT,
                akeneo_product_name TEXT,
                akeneo_brand_name TEXT,
                selling_price REAL,
                projected_inventory INTEGER,
                brand TEXT,
                preferred_landing_sku_id TEXT,
                property TEXT,
                funnel TEXT,
                campaign_name TEXT,
                article_type TEXT,
                akeneo_family TEXT,
                MRP REAL,
                remarks TEXT,
                price_remarks TEXT,
                user_email TEXT,
                `index` INTEGER
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_campaigns_table_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
