//! Element marker bytes for signature blobs.
//!
//! One byte per marker. The numeric values are fixed by the metadata format
//! and must never change: a conforming loader dispatches on them directly.

/// Return-position marker for `void`.
pub const VOID: u8 = 0x01;

/// Primitive code: boolean.
pub const BOOLEAN: u8 = 0x02;
/// Primitive code: UTF-16 code unit.
pub const CHAR: u8 = 0x03;
/// Primitive code: signed 8-bit integer.
pub const I1: u8 = 0x04;
/// Primitive code: unsigned 8-bit integer.
pub const U1: u8 = 0x05;
/// Primitive code: signed 16-bit integer.
pub const I2: u8 = 0x06;
/// Primitive code: unsigned 16-bit integer.
pub const U2: u8 = 0x07;
/// Primitive code: signed 32-bit integer.
pub const I4: u8 = 0x08;
/// Primitive code: unsigned 32-bit integer.
pub const U4: u8 = 0x09;
/// Primitive code: signed 64-bit integer.
pub const I8: u8 = 0x0A;
/// Primitive code: unsigned 64-bit integer.
pub const U8: u8 = 0x0B;
/// Primitive code: 32-bit IEEE float.
pub const R4: u8 = 0x0C;
/// Primitive code: 64-bit IEEE float.
pub const R8: u8 = 0x0D;
/// Primitive code: native-width signed integer.
pub const I: u8 = 0x18;
/// Primitive code: native-width unsigned integer.
pub const U: u8 = 0x19;

/// Dedicated marker for the built-in string type.
pub const STRING: u8 = 0x0E;
/// Dedicated marker for the built-in object root type.
pub const OBJECT: u8 = 0x1C;

/// Unmanaged pointer; followed by the pointee encoding.
pub const PTR: u8 = 0x0F;
/// By-reference wrapper; legal only at the outermost position of a
/// parameter, return, or local.
pub const BYREF: u8 = 0x10;
/// Named type reference; followed by a coded handle and a value-type flag.
pub const CLASS: u8 = 0x12;
/// Generic type parameter reference; followed by a compressed position.
pub const VAR: u8 = 0x13;
/// Multi-dimensional array; followed by the element encoding and the shape.
pub const ARRAY: u8 = 0x14;
/// Generic instantiation; followed by the definition handle, value-type
/// flag, compressed argument count, and the argument encodings.
pub const GENERICINST: u8 = 0x15;
/// Prefix for entries of the primitive code table (unassigned slot in the
/// element table, reserved here for the two-byte primitive form).
pub const PRIM: u8 = 0x17;
/// Single-dimensional, zero-lower-bound array; followed by the element
/// encoding only (no shape).
pub const SZARRAY: u8 = 0x1D;
/// Generic method parameter reference; followed by a compressed position.
pub const MVAR: u8 = 0x1E;

/// Calling-convention byte opening a standalone local variable signature.
pub const LOCAL_SIG: u8 = 0x07;
/// Local-variable constraint: the referenced memory must not be relocated
/// by the garbage collector while the local is live.
pub const PINNED: u8 = 0x45;
