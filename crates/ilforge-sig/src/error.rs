//! Error taxonomy for signature encoding.

use crate::descriptor::NamedTypeRef;

/// Errors raised while encoding a signature blob.
///
/// All variants are synchronous, non-retryable failures. None is recovered
/// internally: a failed encode abandons the enclosing signature, since a
/// half-written blob corrupts the whole module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Element code outside the fixed primitive set.
    #[error("unsupported primitive element code {0:#04x}")]
    UnsupportedType(u8),

    /// `void` used anywhere but return position.
    #[error("void is only valid in return position")]
    VoidNotAllowed,

    /// By-ref wrapper nested, or used outside the top level of a
    /// parameter, return, or local.
    #[error("by-ref is only valid as the outermost shape of a parameter, return, or local")]
    InvalidByRefPlacement,

    /// The resolver has no handle for the referenced type.
    #[error("type cannot be mapped into the module's type table: {0}")]
    UnknownType(NamedTypeRef),

    /// Instantiation argument count disagrees with the definition's
    /// declared arity.
    #[error("{reference} declares {declared} type parameters but {supplied} arguments were given")]
    GenericArityMismatch {
        reference: NamedTypeRef,
        declared: u32,
        supplied: u32,
    },
}
