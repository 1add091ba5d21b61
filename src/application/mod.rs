pub mod commands;
pub mod dto;
pub mod queries;
pub mod services;

pub use services::Catalog;
