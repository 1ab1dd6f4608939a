pub mod excel_export;
pub mod projection_builder;
pub mod service;
