//! Wire types shared between the Quantum Pixel pages and the backend.

pub mod domain;
pub mod shared;
