//! Wire-level primitives for metadata signature blobs.
//!
//! This crate contains:
//! - Element marker constants used inside signature blobs (`elem`)
//! - Compressed unsigned integer encoding (`compress`)
//! - The opaque coded-token handle referencing a type table row (`TypeHandle`)
//!
//! Everything here is byte-level and policy-free; the encoding rules that
//! combine these primitives into full signatures live in `ilforge-sig`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compress;
pub mod elem;
mod handle;


pub use compress::{MAX_COMPRESSED, read_compressed_u32, write_compressed_u32};
pub use handle::TypeHandle;
