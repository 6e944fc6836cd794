//! Encode page: tabbed panels whose forms post back to the page and render
//! the response into the active panel.

pub mod api;
pub mod controller;
pub mod result;
pub mod submit;
pub mod tabs;

pub use controller::mount;
