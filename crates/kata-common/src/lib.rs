//! Common utilities for the kata crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated diagnostics on stderr

pub mod warning;
