pub mod dto;

pub use dto::{
    CampaignResponse, FalconCell, FalconExportRow, ProcessedCampaign, ProcessingStats,
    ProductCampaignResponse, TransformFailure, FALCON_COLUMNS,
};
