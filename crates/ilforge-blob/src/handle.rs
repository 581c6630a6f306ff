//! Coded-token handles referencing type table rows.

use std::fmt;

use crate::compress::write_compressed_u32;

/// Opaque reference to a named type inside a module's metadata tables.
///
/// The value is a coded token: the row index shifted left by two, with the
/// low bits selecting the table the row lives in. Handles are produced by a
/// resolver and embedded into signature blobs in compressed form; the
/// encoding layer never takes them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeHandle(u32);

/// Table tag for type definitions in the current module.
const TAG_TYPE_DEF: u32 = 0;
/// Table tag for references to types in other modules.
const TAG_TYPE_REF: u32 = 1;
/// Table tag for constructed type specifications.
const TAG_TYPE_SPEC: u32 = 2;

impl TypeHandle {
    /// Wrap an already-coded token value.
    pub const fn from_coded(coded: u32) -> Self {
        Self(coded)
    }

    /// Handle to row `row` of the type definition table.
    pub const fn type_def(row: u32) -> Self {
        Self(row << 2 | TAG_TYPE_DEF)
    }

    /// Handle to row `row` of the type reference table.
    pub const fn type_ref(row: u32) -> Self {
        Self(row << 2 | TAG_TYPE_REF)
    }

    /// Handle to row `row` of the type specification table.
    pub const fn type_spec(row: u32) -> Self {
        Self(row << 2 | TAG_TYPE_SPEC)
    }

    /// Raw coded token value.
    pub const fn coded(self) -> u32 {
        self.0
    }

    /// Row index within the tagged table.
    pub const fn row(self) -> u32 {
        self.0 >> 2
    }

    /// Append the compressed coded token to `out`.
    pub fn write(self, out: &mut Vec<u8>) {
        write_compressed_u32(self.0, out);
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = match self.0 & 0x3 {
            TAG_TYPE_DEF => "def",
            TAG_TYPE_REF => "ref",
            TAG_TYPE_SPEC => "spec",
            _ => "?",
        };
        write!(f, "{table}:{}", self.row())
    }
}
