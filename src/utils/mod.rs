//! Shared helpers for config validation and site discovery.
//!
//! - [`date`]: calendar dates for blog posts
//! - [`glob`]: globset construction and validation
//! - [`hash`]: blake3 content fingerprints for asset names
//! - [`path`]: filesystem path normalization
//! - [`slug`]: URL slugification

pub mod date;
pub mod glob;
pub mod hash;
pub mod path;
pub mod slug;
