pub mod auth;
pub mod error;
pub mod extractors;
pub mod profile;
pub mod user_dto;
