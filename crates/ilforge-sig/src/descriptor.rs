//! Type descriptors produced from live reflection data.
//!
//! Descriptors are transient: a caller builds them from its reflection view
//! per encoding call, they are never mutated, and they need no teardown.

use std::fmt;

use ilforge_blob::elem;

use crate::error::EncodeError;

/// Primitive kinds with a fixed element code.
///
/// `String`, `Object`, and `Void` are included because the runtime's code
/// table covers them, even though each encodes through a dedicated marker
/// rather than the two-byte primitive form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    IntPtr,
    UIntPtr,
    String,
    Object,
    Void,
}

impl PrimitiveKind {
    /// Element code for this kind. Injective over the full kind set.
    pub fn code(self) -> u8 {
        match self {
            Self::Boolean => elem::BOOLEAN,
            Self::Char => elem::CHAR,
            Self::SByte => elem::I1,
            Self::Byte => elem::U1,
            Self::Int16 => elem::I2,
            Self::UInt16 => elem::U2,
            Self::Int32 => elem::I4,
            Self::UInt32 => elem::U4,
            Self::Int64 => elem::I8,
            Self::UInt64 => elem::U8,
            Self::Single => elem::R4,
            Self::Double => elem::R8,
            Self::IntPtr => elem::I,
            Self::UIntPtr => elem::U,
            Self::String => elem::STRING,
            Self::Object => elem::OBJECT,
            Self::Void => elem::VOID,
        }
    }

    /// Inverse of [`code`](Self::code), for bridging raw reflection data.
    pub fn from_code(code: u8) -> Result<Self, EncodeError> {
        match code {
            elem::BOOLEAN => Ok(Self::Boolean),
            elem::CHAR => Ok(Self::Char),
            elem::I1 => Ok(Self::SByte),
            elem::U1 => Ok(Self::Byte),
            elem::I2 => Ok(Self::Int16),
            elem::U2 => Ok(Self::UInt16),
            elem::I4 => Ok(Self::Int32),
            elem::U4 => Ok(Self::UInt32),
            elem::I8 => Ok(Self::Int64),
            elem::U8 => Ok(Self::UInt64),
            elem::R4 => Ok(Self::Single),
            elem::R8 => Ok(Self::Double),
            elem::I => Ok(Self::IntPtr),
            elem::U => Ok(Self::UIntPtr),
            elem::STRING => Ok(Self::String),
            elem::OBJECT => Ok(Self::Object),
            elem::VOID => Ok(Self::Void),
            other => Err(EncodeError::UnsupportedType(other)),
        }
    }

    /// Display name used by the friendly-name renderer.
    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Char => "char",
            Self::SByte => "int8",
            Self::Byte => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Single => "float32",
            Self::Double => "float64",
            Self::IntPtr => "native int",
            Self::UIntPtr => "native uint",
            Self::String => "string",
            Self::Object => "object",
            Self::Void => "void",
        }
    }
}

/// Identity of a named (non-primitive, non-parameter) type.
///
/// Declared generic arity is part of the identity, as it is in the
/// runtime's own name mangling. The encoder never looks inside this; it
/// only hands it to a resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedTypeRef {
    namespace: String,
    name: String,
    arity: u32,
}

impl NamedTypeRef {
    /// Reference to a non-generic named type.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::generic(namespace, name, 0)
    }

    /// Reference to a generic definition declaring `arity` type parameters.
    pub fn generic(namespace: impl Into<String>, name: impl Into<String>, arity: u32) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            arity,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared generic arity (0 for non-generic types).
    pub fn arity(&self) -> u32 {
        self.arity
    }
}

impl fmt::Display for NamedTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.namespace.is_empty() {
            write!(f, "{}.", self.namespace)?;
        }
        write!(f, "{}", self.name)?;
        if self.arity > 0 {
            write!(f, "`{}", self.arity)?;
        }
        Ok(())
    }
}

/// Closed description of one type at one signature position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A kind from the primitive code table.
    Primitive(PrimitiveKind),
    /// Unmanaged pointer to the inner type.
    Pointer(Box<TypeDescriptor>),
    /// By-reference wrapper; legal only as the outermost shape of a
    /// parameter, return, or local, never nested.
    ByRef(Box<TypeDescriptor>),
    /// Single-dimensional, zero-lower-bound array.
    SzArray(Box<TypeDescriptor>),
    /// Multi-dimensional array, `rank >= 1`. Distinct encoding from
    /// `SzArray` even at rank 1.
    Array {
        element: Box<TypeDescriptor>,
        rank: u32,
    },
    /// Instantiation of a generic definition with concrete arguments.
    GenericInstantiation {
        definition: NamedTypeRef,
        arguments: Vec<TypeDescriptor>,
        is_value_type: bool,
    },
    /// Unfilled type parameter of the enclosing generic type.
    GenericTypeParameter(u32),
    /// Unfilled type parameter of the enclosing generic method.
    GenericMethodParameter(u32),
    /// Any other class, struct, or interface.
    NamedType {
        reference: NamedTypeRef,
        is_value_type: bool,
    },
}

impl TypeDescriptor {
    /// Pointer to `inner`.
    pub fn pointer(inner: TypeDescriptor) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// By-reference wrapper over `inner`.
    pub fn byref(inner: TypeDescriptor) -> Self {
        Self::ByRef(Box::new(inner))
    }

    /// Single-dimensional array of `element`.
    pub fn szarray(element: TypeDescriptor) -> Self {
        Self::SzArray(Box::new(element))
    }

    /// Multi-dimensional array of `element`.
    ///
    /// # Panics
    /// Panics if `rank` is zero.
    pub fn array(element: TypeDescriptor, rank: u32) -> Self {
        assert!(rank >= 1, "array rank must be at least 1");
        Self::Array {
            element: Box::new(element),
            rank,
        }
    }

    /// Instantiation of `definition` with `arguments`.
    pub fn generic(
        definition: NamedTypeRef,
        arguments: Vec<TypeDescriptor>,
        is_value_type: bool,
    ) -> Self {
        Self::GenericInstantiation {
            definition,
            arguments,
            is_value_type,
        }
    }

    /// Named reference type.
    pub fn class(reference: NamedTypeRef) -> Self {
        Self::NamedType {
            reference,
            is_value_type: false,
        }
    }

    /// Named value type.
    pub fn value_type(reference: NamedTypeRef) -> Self {
        Self::NamedType {
            reference,
            is_value_type: true,
        }
    }

    /// Whether the outermost shape is a by-reference wrapper.
    pub fn is_byref(&self) -> bool {
        matches!(self, Self::ByRef(_))
    }
}

/// One slot of a method's local variable signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalVariableDescriptor {
    /// Declared type; may carry a top-level `ByRef`.
    pub ty: TypeDescriptor,
    /// Keep the referenced memory unmovable while the local is live.
    pub pinned: bool,
}

impl LocalVariableDescriptor {
    /// Unpinned local of type `ty`.
    pub fn new(ty: TypeDescriptor) -> Self {
        Self { ty, pinned: false }
    }

    /// Pinned local of type `ty`.
    pub fn pinned(ty: TypeDescriptor) -> Self {
        Self { ty, pinned: true }
    }
}
