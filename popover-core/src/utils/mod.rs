//! Utility helpers for the core layer.

pub mod fs;

pub use fs::ensure_dir_exists;
