use serde::{Deserialize, Serialize};

/// Product data the campaign export needs from the PIM. Fetched per request,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub product_id: String,
    pub sku_id: String,
    /// `None` when the product carries none of the MRP attributes
    #[serde(rename = "MRP")]
    pub mrp: Option<f64>,
}
