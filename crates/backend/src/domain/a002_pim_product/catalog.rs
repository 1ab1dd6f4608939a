use async_trait::async_trait;
use contracts::domain::a002_pim_product::ProductMetadata;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PimError {
    /// Token request failed or was rejected
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Product request failed for a reason other than "not found"
    #[error("product lookup failed: {0}")]
    Lookup(String),
}

/// Source of product metadata for the campaign transformer
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// `Ok(None)` when the catalog has no product with this id
    async fn fetch_metadata(&self, product_id: &str) -> Result<Option<ProductMetadata>, PimError>;
}
