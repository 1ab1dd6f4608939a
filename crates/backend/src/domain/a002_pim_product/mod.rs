pub mod akeneo_api_client;
pub mod catalog;

pub use akeneo_api_client::{AkeneoClient, AkeneoSession};
pub use catalog::{PimError, ProductCatalog};
