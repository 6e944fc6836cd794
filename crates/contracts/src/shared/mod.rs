pub mod artifact;
pub mod routes;
pub mod tabs;
