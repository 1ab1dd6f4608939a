use serde::{Deserialize, Serialize};

/// Campaign kinds known to the campaign sheet (`issue_type` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    /// Deal of the Day
    Dod,
    SpinWheel,
    FlashSale,
    Other,
}

impl CampaignType {
    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignType::Dod => "Deal of the Day",
            CampaignType::SpinWheel => "Spin the Wheel",
            CampaignType::FlashSale => "Flash Sale",
            CampaignType::Other => "Other",
        }
    }

    /// Lenient parse used for stored rows: anything unknown is `Other`
    pub fn classify(issue_type: &str) -> Self {
        match issue_type.trim().to_uppercase().as_str() {
            "DOD" => CampaignType::Dod,
            "SPIN_WHEEL" => CampaignType::SpinWheel,
            "FLASH_SALE" => CampaignType::FlashSale,
            _ => CampaignType::Other,
        }
    }
}
