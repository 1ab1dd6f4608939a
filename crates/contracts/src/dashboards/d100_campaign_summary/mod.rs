pub mod dto;

pub use dto::{CampaignSummary, FilterOptions, SummaryResponse};
