//! Utility modules shared by the registry, checker and adapter
//!
//! - Normalization: institution identifier to registry slug

pub mod normalization;

pub use normalization::normalize_slug;
