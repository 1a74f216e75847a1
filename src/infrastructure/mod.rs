//! Filesystem and environment lookups.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, DATA_DIR_ENV};
