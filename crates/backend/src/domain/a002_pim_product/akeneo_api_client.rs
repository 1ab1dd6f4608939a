use async_trait::async_trait;
use contracts::domain::a002_pim_product::ProductMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::catalog::{PimError, ProductCatalog};
use crate::shared::config::AkeneoConfig;

/// Attributes that may hold the MRP, in lookup order
pub const MRP_ATTRIBUTES: [&str; 4] = ["mrp", "MRP", "maximum_retail_price", "list_price"];

const SKU_ATTRIBUTE: &str = "sku";

/// HTTP client for the Akeneo PIM REST API
#[derive(Clone)]
pub struct AkeneoClient {
    client: reqwest::Client,
    config: AkeneoConfig,
}

impl AkeneoClient {
    pub fn new(config: AkeneoConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    fn base_url(&self) -> &str {
        self.config.url.trim_end_matches('/')
    }

    /// Password grant: POST /api/oauth/v1/token
    pub async fn authenticate(&self) -> Result<AkeneoSession, PimError> {
        let credentials = self
            .config
            .basic_credentials()
            .ok_or_else(|| PimError::Auth("client credentials are not configured".into()))?;
        let url = format!("{}/api/oauth/v1/token", self.base_url());

        let body = TokenRequest {
            grant_type: "password",
            username: &self.config.username,
            password: &self.config.password,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Basic {}", credentials))
            .header("Content-Type", "application/json")
            .timeout(self.config.timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| PimError::Auth(format!("token request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Akeneo token request failed with status {}: {}", status, body);
            return Err(PimError::Auth(format!("token request rejected with status {}", status)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PimError::Auth(format!("unreadable token response: {}", e)))?;

        tracing::info!("Authenticated against Akeneo at {}", self.base_url());

        Ok(AkeneoSession {
            client: self.client.clone(),
            base_url: self.base_url().to_string(),
            access_token: token.access_token,
            timeout: self.config.timeout(),
        })
    }
}

/// Authenticated Akeneo connection. Lives for one batch of lookups.
pub struct AkeneoSession {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
    timeout: std::time::Duration,
}

#[async_trait]
impl ProductCatalog for AkeneoSession {
    /// GET /api/rest/v1/products/{id}?with_attribute_options=true
    async fn fetch_metadata(&self, product_id: &str) -> Result<Option<ProductMetadata>, PimError> {
        let url = format!(
            "{}/api/rest/v1/products/{}",
            self.base_url,
            urlencoding::encode(product_id)
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .query(&[("with_attribute_options", "true")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PimError::Lookup(format!("{}: {}", product_id, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!("Product {} not found in Akeneo", product_id);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PimError::Lookup(format!(
                "{}: Akeneo responded with status {}",
                product_id, status
            )));
        }

        let product: AkeneoProduct = response
            .json()
            .await
            .map_err(|e| PimError::Lookup(format!("{}: unreadable product: {}", product_id, e)))?;

        Ok(Some(extract_metadata(product_id, &product)))
    }
}

// ============================================================================
// Wire models
// ============================================================================

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AkeneoProduct {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub values: HashMap<String, Vec<AkeneoValue>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AkeneoValue {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl AkeneoProduct {
    fn first_value(&self, attribute: &str) -> Option<&serde_json::Value> {
        self.values
            .get(attribute)
            .and_then(|values| values.first())
            .map(|v| &v.data)
            .filter(|data| !data.is_null())
    }
}

/// Build metadata from an Akeneo product document
pub fn extract_metadata(product_id: &str, product: &AkeneoProduct) -> ProductMetadata {
    let sku_id = product
        .first_value(SKU_ATTRIBUTE)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| product.identifier.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| product_id.to_string());

    let mrp = MRP_ATTRIBUTES
        .iter()
        .find_map(|attr| product.first_value(attr).and_then(parse_amount));

    ProductMetadata {
        product_id: product_id.to_string(),
        sku_id,
        mrp,
    }
}

/// Number, numeric string, or price collection `[{amount, currency}]`
fn parse_amount(data: &serde_json::Value) -> Option<f64> {
    match data {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Array(prices) => prices.iter().find_map(parse_amount),
        serde_json::Value::Object(price) => price.get("amount").and_then(parse_amount),
        _ => None,
    }
    .filter(|v| v.is_finite())
}
