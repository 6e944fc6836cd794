//! Decode page: one request on load, then the response replaces the page.

pub mod api;
pub mod controller;

pub use controller::{mount, run_decode};
