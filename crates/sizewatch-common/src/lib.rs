//! Common utilities for the sizewatch crates.
//!
//! This crate provides shared infrastructure used by the geometry and
//! scheduling crates:
//! - **Warning System** - colored, deduplicated terminal diagnostics

pub mod warning;
