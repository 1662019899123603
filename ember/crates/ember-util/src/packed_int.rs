//! Packed integer codec.
//!
//! Variable-width encoding for unsigned 32-bit values: little-endian groups of
//! seven bits, high bit set on every byte except the last. Small values take a
//! single byte, and the encoding is self-delimiting, so a decoder can find the
//! first payload byte that follows it without any side information.
//!
//! # Example
//!
//! ```
//! use ember_util::packed_int;
//!
//! let mut buf = Vec::new();
//! packed_int::encode(300, &mut buf);
//! assert_eq!(buf, [0xac, 0x02]);
//!
//! let (value, consumed) = packed_int::decode(&buf).unwrap();
//! assert_eq!((value, consumed), (300, 2));
//! ```

use crate::error::{PackedIntError, PackedIntResult};

/// Maximum number of bytes a u32 can occupy once packed
pub const MAX_ENCODED_LEN: usize = 5;

const PAYLOAD_MASK: u8 = 0x7f;
const CONTINUATION: u8 = 0x80;

/// Number of bytes `value` occupies once packed
#[inline]
pub const fn encoded_len(value: u32) -> usize {
    let bits = 32 - value.leading_zeros() as usize;
    if bits == 0 {
        1
    } else {
        bits.div_ceil(7)
    }
}

/// Append the packed form of `value` to `out`
pub fn encode(value: u32, out: &mut Vec<u8>) {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let n = encode_into(value, &mut buf);
    out.extend_from_slice(&buf[..n]);
}

/// Write the packed form of `value` at the start of `out`
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if `out` is shorter than [`encoded_len`]`(value)`.
pub fn encode_into(value: u32, out: &mut [u8]) -> usize {
    let mut rest = value;
    let mut i = 0;
    loop {
        let group = (rest as u8) & PAYLOAD_MASK;
        rest >>= 7;
        if rest == 0 {
            out[i] = group;
            return i + 1;
        }
        out[i] = group | CONTINUATION;
        i += 1;
    }
}

/// Decode a packed integer from the start of `bytes`
///
/// Returns the value and the number of bytes consumed. Bytes after the
/// encoded integer are ignored.
pub fn decode(bytes: &[u8]) -> PackedIntResult<(u32, usize)> {
    let mut value = 0u32;
    for (i, &byte) in bytes.iter().enumerate() {
        if i == MAX_ENCODED_LEN {
            return Err(PackedIntError::Overflow { consumed: i });
        }
        let group = u32::from(byte & PAYLOAD_MASK);
        // The fifth byte only has room for the top four bits.
        if i == MAX_ENCODED_LEN - 1 && group > 0x0f {
            return Err(PackedIntError::Overflow { consumed: i + 1 });
        }
        value |= group << (7 * i);
        if byte & CONTINUATION == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(PackedIntError::Truncated {
        consumed: bytes.len(),
    })
}

static_assertions::const_assert_eq!(encoded_len(u32::MAX), MAX_ENCODED_LEN);
static_assertions::const_assert_eq!(encoded_len(u16::MAX as u32), 3);
