pub mod api_utils;
pub mod cleanup;
pub mod config;
pub mod dom;
pub mod error;
pub mod once;
