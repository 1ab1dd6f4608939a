use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::config::Config;
use crate::domain::a002_pim_product::AkeneoClient;

/// Read-only state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub akeneo: AkeneoClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let akeneo = AkeneoClient::new(config.akeneo.clone(), reqwest::Client::new());
        Self {
            db,
            config: Arc::new(config),
            akeneo,
        }
    }

    pub fn coins(&self) -> i64 {
        self.config.campaign.default_coins
    }
}
