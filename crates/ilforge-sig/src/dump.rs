//! Human-readable rendering of type descriptors.
//!
//! Used in error reporting and test output; never part of the binary
//! format.

use std::fmt::Write as _;

use crate::descriptor::{LocalVariableDescriptor, TypeDescriptor};

/// C#-flavored friendly name for a descriptor.
///
/// Examples: `int32[,,]`, `System.Collections.Generic.Dictionary<!0, string>`,
/// `byref int32`, `uint8*`.
pub fn friendly_name(ty: &TypeDescriptor) -> String {
    let mut out = String::new();
    render(ty, &mut out);
    out
}

/// One line per local, index-prefixed, pinned locals marked.
pub fn dump_locals(locals: &[LocalVariableDescriptor]) -> String {
    let mut out = String::new();
    for (index, local) in locals.iter().enumerate() {
        let pinned = if local.pinned { " pinned" } else { "" };
        let _ = writeln!(out, "[{index}]{pinned} {}", friendly_name(&local.ty));
    }
    out
}

fn render(ty: &TypeDescriptor, out: &mut String) {
    match ty {
        TypeDescriptor::Primitive(kind) => out.push_str(kind.name()),
        TypeDescriptor::Pointer(inner) => {
            render(inner, out);
            out.push('*');
        }
        TypeDescriptor::ByRef(inner) => {
            out.push_str("byref ");
            render(inner, out);
        }
        TypeDescriptor::SzArray(element) => {
            render(element, out);
            out.push_str("[]");
        }
        TypeDescriptor::Array { element, rank } => {
            render(element, out);
            out.push('[');
            for _ in 1..*rank {
                out.push(',');
            }
            out.push(']');
        }
        TypeDescriptor::GenericInstantiation {
            definition,
            arguments,
            ..
        } => {
            if !definition.namespace().is_empty() {
                out.push_str(definition.namespace());
                out.push('.');
            }
            out.push_str(definition.name());
            out.push('<');
            for (index, argument) in arguments.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                render(argument, out);
            }
            out.push('>');
        }
        TypeDescriptor::GenericTypeParameter(position) => {
            let _ = write!(out, "!{position}");
        }
        TypeDescriptor::GenericMethodParameter(position) => {
            let _ = write!(out, "!!{position}");
        }
        TypeDescriptor::NamedType { reference, .. } => {
            let _ = write!(out, "{reference}");
        }
    }
}
