pub mod a001_campaign;
pub mod d100_campaign_summary;
pub mod p100_falcon_export;
pub mod query;
pub mod system;
