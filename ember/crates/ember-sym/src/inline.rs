//! Inline packer.
//!
//! Names of one to four characters drawn from `_`, `a-z`, `A-Z` and `0-9`
//! are encoded directly in the handle, with no table storage:
//!
//! ```text
//!   bit  31..26  25..20  19..14  13..8   7..2   1..0
//!        0       char 0  char 1  char 2  char 3  0
//! ```
//!
//! Each field holds `alphabet_index + 1`; a zero field means "no character",
//! and since the first field is never zero every packed handle has a bit in
//! 20..=25 set, which is what places it in the inline range.

use std::fmt;
use std::num::NonZeroU32;

use crate::symbol::{Symbol, INLINE_END, INLINE_MIN};

/// Characters an inline name may contain, in code order
pub const ALPHABET: &[u8; 63] = b"_abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Longest name that can be packed
pub const MAX_INLINE_LEN: usize = 4;

const FIELD_BITS: u32 = 6;
const FIELD_MASK: u32 = (1 << FIELD_BITS) - 1;
const TOP_SHIFT: u32 = 20;

/// Byte -> field code, 0 for bytes outside the alphabet
const CODES: [u8; 256] = {
    let mut codes = [0u8; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        codes[ALPHABET[i] as usize] = i as u8 + 1;
        i += 1;
    }
    codes
};

static_assertions::const_assert!(ALPHABET.len() as u32 <= FIELD_MASK);
static_assertions::const_assert!(max_packed() < INLINE_END);

#[inline]
const fn shift(position: usize) -> u32 {
    TOP_SHIFT - position as u32 * FIELD_BITS
}

/// Every field at its largest code
const fn max_packed() -> u32 {
    let mut value = 0;
    let mut position = 0;
    while position < MAX_INLINE_LEN {
        value |= FIELD_MASK << shift(position);
        position += 1;
    }
    value
}

/// Pack `name` into an inline symbol
///
/// Returns `None` when the name is empty, longer than [`MAX_INLINE_LEN`], or
/// contains any byte outside [`ALPHABET`] (NUL included).
///
/// # Examples
///
/// ```
/// use ember_sym::inline;
///
/// let sym = inline::pack(b"foo").unwrap();
/// assert!(sym.is_inline());
/// assert_eq!(inline::unpack(sym).as_bytes(), b"foo");
///
/// assert!(inline::pack(b"fooo_").is_none());
/// assert!(inline::pack(b"a-b").is_none());
/// ```
pub fn pack(name: &[u8]) -> Option<Symbol> {
    if name.is_empty() || name.len() > MAX_INLINE_LEN {
        return None;
    }
    let mut raw = 0u32;
    for (i, &byte) in name.iter().enumerate() {
        let code = CODES[byte as usize];
        if code == 0 {
            return None;
        }
        raw |= u32::from(code) << shift(i);
    }
    NonZeroU32::new(raw).map(Symbol::inline)
}

/// Decode an inline symbol
///
/// Fields are read from the top until a zero field or all four have been
/// consumed. Handles outside the inline range decode to an empty name.
pub fn unpack(sym: Symbol) -> InlineName {
    let raw = sym.as_u32();
    let mut name = InlineName::EMPTY;
    if !(INLINE_MIN..INLINE_END).contains(&raw) {
        return name;
    }
    for i in 0..MAX_INLINE_LEN {
        let code = (raw >> shift(i)) & FIELD_MASK;
        if code == 0 {
            break;
        }
        name.buf[i] = ALPHABET[code as usize - 1];
        name.len += 1;
    }
    name
}

/// Decoded inline name, held by value
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InlineName {
    buf: [u8; MAX_INLINE_LEN],
    len: u8,
}

impl InlineName {
    const EMPTY: InlineName = InlineName {
        buf: [0; MAX_INLINE_LEN],
        len: 0,
    };

    /// The decoded bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// The decoded name as text; inline names are always ASCII
    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl fmt::Debug for InlineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InlineName({})", self.as_str())
    }
}
