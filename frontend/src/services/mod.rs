//! Browser services.
//!
//! # Services
//!
//! - [`predict`] - `File` adapter and `fetch` transport for `/predict`

pub mod predict;

pub use predict::*;
