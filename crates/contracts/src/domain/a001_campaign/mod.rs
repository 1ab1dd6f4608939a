pub mod aggregate;
pub mod validation;

pub use aggregate::{parse_campaign_date, CampaignFilter, CampaignRecord};
pub use validation::{validate_record, RecordValidationResult, ValidationReport};
