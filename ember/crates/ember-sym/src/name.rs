//! Borrowed view of a symbol's name.

use std::fmt;
use std::ops::Deref;

use crate::inline::InlineName;

/// The bytes of an interned name
///
/// Catalog, literal and table-owned names are borrowed; inline names are
/// decoded into a small by-value buffer. Either way the view dereferences
/// to `[u8]` and needs no allocation.
///
/// # Examples
///
/// ```
/// use ember_sym::Interner;
///
/// let mut interner = Interner::new();
/// let sym = interner.intern_str("hello_world").unwrap();
/// let name = interner.name_of(sym);
///
/// assert_eq!(name, "hello_world");
/// assert_eq!(name.len(), 11);
/// assert_eq!(name.to_string(), "hello_world");
/// ```
#[derive(Clone, Copy)]
pub struct SymbolName<'a>(Repr<'a>);

#[derive(Clone, Copy)]
enum Repr<'a> {
    Borrowed(&'a [u8]),
    Inline(InlineName),
}

impl<'a> SymbolName<'a> {
    #[inline]
    pub(crate) fn borrowed(bytes: &'a [u8]) -> Self {
        SymbolName(Repr::Borrowed(bytes))
    }

    #[inline]
    pub(crate) fn inline(name: InlineName) -> Self {
        SymbolName(Repr::Inline(name))
    }

    /// The name bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Repr::Borrowed(bytes) => bytes,
            Repr::Inline(name) => name.as_bytes(),
        }
    }

    /// The name as text, if it is valid UTF-8
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

impl Deref for SymbolName<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for SymbolName<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for SymbolName<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for SymbolName<'_> {}

impl PartialEq<[u8]> for SymbolName<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for SymbolName<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for SymbolName<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for SymbolName<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for SymbolName<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for SymbolName<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Lossy UTF-8: invalid sequences print as U+FFFD
impl fmt::Display for SymbolName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SymbolName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}
