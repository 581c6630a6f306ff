//! Recursive signature blob encoders.
//!
//! Three entry points, matching the three signature positions the format
//! distinguishes:
//! - [`encode_type`] for array elements, pointer targets, generic
//!   arguments, parameter and field types, and plain locals
//! - [`encode_return_type`] for return position, where `void` and a
//!   top-level by-ref become legal
//! - [`encode_locals`] for local variable sequences, where pinning joins in
//!
//! The append-form encoders write into a caller-owned buffer; after an
//! error the buffer may hold a prefix of the failed signature and must be
//! discarded. The owned-buffer wrappers never return partial bytes.

use ilforge_blob::compress::write_compressed_u32;
use ilforge_blob::elem;

use crate::descriptor::{LocalVariableDescriptor, PrimitiveKind, TypeDescriptor};
use crate::error::EncodeError;
use crate::resolver::TypeHandleResolver;

/// Encode one type at a non-return, non-top-level-by-ref position.
pub fn encode_type(
    ty: &TypeDescriptor,
    resolver: &dyn TypeHandleResolver,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    match ty {
        // Callers peel by-ref off before recursing; seeing one here means
        // it was nested or misplaced.
        TypeDescriptor::ByRef(_) => Err(EncodeError::InvalidByRefPlacement),
        TypeDescriptor::Pointer(inner) => {
            out.push(elem::PTR);
            encode_type(inner, resolver, out)
        }
        TypeDescriptor::Primitive(PrimitiveKind::Void) => Err(EncodeError::VoidNotAllowed),
        TypeDescriptor::Primitive(PrimitiveKind::String) => {
            out.push(elem::STRING);
            Ok(())
        }
        TypeDescriptor::Primitive(PrimitiveKind::Object) => {
            out.push(elem::OBJECT);
            Ok(())
        }
        TypeDescriptor::Primitive(kind) => {
            out.push(elem::PRIM);
            out.push(kind.code());
            Ok(())
        }
        TypeDescriptor::SzArray(element) => {
            out.push(elem::SZARRAY);
            encode_type(element, resolver, out)
        }
        TypeDescriptor::Array { element, rank } => {
            out.push(elem::ARRAY);
            encode_type(element, resolver, out)?;
            // Fixed shape convention: no explicit sizes, one zero lower
            // bound per dimension. Byte-matches the mainstream compiler's
            // emission for the same shape.
            write_compressed_u32(*rank, out);
            write_compressed_u32(0, out);
            write_compressed_u32(*rank, out);
            for _ in 0..*rank {
                write_compressed_u32(0, out);
            }
            Ok(())
        }
        TypeDescriptor::GenericInstantiation {
            definition,
            arguments,
            is_value_type,
        } => {
            // Arity and handle are checked before any byte of this node
            // lands in the buffer.
            let declared = resolver.declared_arity(definition)?;
            if declared as usize != arguments.len() {
                return Err(EncodeError::GenericArityMismatch {
                    reference: definition.clone(),
                    declared,
                    supplied: arguments.len() as u32,
                });
            }
            let handle = resolver.resolve(definition)?;
            out.push(elem::GENERICINST);
            handle.write(out);
            out.push(u8::from(*is_value_type));
            write_compressed_u32(arguments.len() as u32, out);
            for argument in arguments {
                match argument {
                    // Unfilled placeholders stay references to the
                    // enclosing type's parameter slots.
                    TypeDescriptor::GenericTypeParameter(position) => {
                        out.push(elem::VAR);
                        write_compressed_u32(*position, out);
                    }
                    _ => encode_type(argument, resolver, out)?,
                }
            }
            Ok(())
        }
        TypeDescriptor::GenericTypeParameter(position) => {
            out.push(elem::VAR);
            write_compressed_u32(*position, out);
            Ok(())
        }
        TypeDescriptor::GenericMethodParameter(position) => {
            out.push(elem::MVAR);
            write_compressed_u32(*position, out);
            Ok(())
        }
        TypeDescriptor::NamedType {
            reference,
            is_value_type,
        } => {
            let handle = resolver.resolve(reference)?;
            out.push(elem::CLASS);
            handle.write(out);
            out.push(u8::from(*is_value_type));
            Ok(())
        }
    }
}

/// Encode a type in return position.
///
/// The only position where `void` is legal, and the only one where a
/// by-ref wrapper may appear (exactly once, outermost).
pub fn encode_return_type(
    ty: &TypeDescriptor,
    resolver: &dyn TypeHandleResolver,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    match ty {
        TypeDescriptor::Primitive(PrimitiveKind::Void) => {
            out.push(elem::VOID);
            Ok(())
        }
        TypeDescriptor::ByRef(inner) => {
            out.push(elem::BYREF);
            encode_type(inner, resolver, out)
        }
        _ => encode_type(ty, resolver, out),
    }
}

/// Encode local variable entries, one per descriptor, in index order.
///
/// Each entry is an optional pinned constraint, an optional by-ref marker,
/// then the type encoding. Pinning and by-ref are independent.
pub fn encode_locals(
    locals: &[LocalVariableDescriptor],
    resolver: &dyn TypeHandleResolver,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    for local in locals {
        if local.pinned {
            out.push(elem::PINNED);
        }
        match &local.ty {
            TypeDescriptor::ByRef(inner) => {
                out.push(elem::BYREF);
                encode_type(inner, resolver, out)?;
            }
            ty => encode_type(ty, resolver, out)?,
        }
    }
    Ok(())
}

/// Owned-buffer form of [`encode_type`].
pub fn type_signature(
    ty: &TypeDescriptor,
    resolver: &dyn TypeHandleResolver,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_type(ty, resolver, &mut out)?;
    Ok(out)
}

/// Owned-buffer form of [`encode_return_type`].
pub fn return_signature(
    ty: &TypeDescriptor,
    resolver: &dyn TypeHandleResolver,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_return_type(ty, resolver, &mut out)?;
    Ok(out)
}

/// Self-contained standalone local variable signature blob: the
/// calling-convention byte, the compressed local count, then one entry per
/// local. This is the form stored in the standalone-signature table.
pub fn local_signature(
    locals: &[LocalVariableDescriptor],
    resolver: &dyn TypeHandleResolver,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    out.push(elem::LOCAL_SIG);
    write_compressed_u32(locals.len() as u32, &mut out);
    encode_locals(locals, resolver, &mut out)?;
    Ok(out)
}
