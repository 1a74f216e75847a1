//! Storage layer for the bundled vertical and stats catalog.
//!
//! The demo collaborators read header copy, verticals and post/page view
//! counts from a JSON catalog instead of a remote service.
//!
//! # Modules
//!
//! - `backend`: Catalog trait abstraction
//! - `json`: JSON file-based catalog implementation
//! - `models`: On-disk record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Catalog;
pub use json::JsonCatalog;
pub use models::{HeaderRecord, VerticalRecord, ViewsRecord};
