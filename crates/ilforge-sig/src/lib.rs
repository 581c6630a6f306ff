//! Type-signature blob encoding for runtime-built metadata modules.
//!
//! This crate turns in-memory type descriptions, as produced by a live
//! reflection facility, into the byte sequences a managed-code assembly
//! loader expects to find in the blob heap:
//! - `descriptor` - the closed type and local-variable descriptor model
//! - `resolver` - named-type resolution into metadata handles
//! - `encode` - the recursive signature encoders
//! - `dump` - human-readable rendering of descriptors
//!
//! Encoding is all-or-nothing: any descriptor the format cannot express is
//! a hard error, never a truncated blob.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod descriptor;
pub mod dump;
pub mod encode;
mod error;
pub mod resolver;

#[cfg(test)]
mod encode_tests;

pub use descriptor::{LocalVariableDescriptor, NamedTypeRef, PrimitiveKind, TypeDescriptor};
pub use encode::{
    encode_locals, encode_return_type, encode_type, local_signature, return_signature,
    type_signature,
};
pub use error::EncodeError;
pub use resolver::{ModuleTypeTable, TypeHandleResolver};

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
