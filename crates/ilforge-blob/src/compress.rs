//! Compressed unsigned integer encoding.
//!
//! Values up to 0x7F take one byte, up to 0x3FFF two bytes (high bit set),
//! and up to 0x1FFF_FFFF four bytes (top two bits set). Larger values do
//! not exist in the format.

/// Largest value representable in compressed form.
pub const MAX_COMPRESSED: u32 = 0x1FFF_FFFF;

/// Append the compressed form of `value` to `out`.
///
/// # Panics
/// Panics if `value` exceeds [`MAX_COMPRESSED`]; counts, positions, and
/// coded handles are all bounded well below that in any valid module.
pub fn write_compressed_u32(value: u32, out: &mut Vec<u8>) {
    assert!(
        value <= MAX_COMPRESSED,
        "value {value:#x} too large for compressed encoding"
    );
    if value < 0x80 {
        out.push(value as u8);
    } else if value < 0x4000 {
        out.push((value >> 8) as u8 | 0x80);
        out.push(value as u8);
    } else {
        out.push((value >> 24) as u8 | 0xC0);
        out.push((value >> 16) as u8);
        out.push((value >> 8) as u8);
        out.push(value as u8);
    }
}

/// Read one compressed value from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` when the
/// input is empty, truncated, or starts with an invalid length prefix.
pub fn read_compressed_u32(bytes: &[u8]) -> Option<(u32, usize)> {
    let first = *bytes.first()?;
    if first & 0x80 == 0 {
        Some((first as u32, 1))
    } else if first & 0xC0 == 0x80 {
        if bytes.len() < 2 {
            return None;
        }
        Some((((first as u32 & 0x3F) << 8) | bytes[1] as u32, 2))
    } else if first & 0xE0 == 0xC0 {
        if bytes.len() < 4 {
            return None;
        }
        let value = ((first as u32 & 0x1F) << 24)
            | ((bytes[1] as u32) << 16)
            | ((bytes[2] as u32) << 8)
            | bytes[3] as u32;
        Some((value, 4))
    } else {
        // 111 prefix is not a valid length marker
        None
    }
}
