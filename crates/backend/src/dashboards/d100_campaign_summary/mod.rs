pub mod html;
pub mod service;
