pub mod d100_campaign_summary;
