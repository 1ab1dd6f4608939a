pub mod campaign_type;

pub use campaign_type::CampaignType;
