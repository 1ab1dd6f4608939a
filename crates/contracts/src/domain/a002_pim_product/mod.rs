pub mod aggregate;

pub use aggregate::ProductMetadata;
