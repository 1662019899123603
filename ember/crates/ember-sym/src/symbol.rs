//! Symbol handles and the partition of the handle space.
//!
//! ```text
//!   0                      reserved, "no symbol" (the Option<Symbol> niche)
//!   1 ..= CATALOG_MAX      catalog entries, position in the sorted catalog
//!   CATALOG_MAX+1 ..       dynamic table slots, in insertion order
//!   INLINE_MIN .. INLINE_END
//!                          inline-packed names (first 6-bit field non-zero)
//!   INLINE_END ..= u32::MAX
//!                          dynamic table slots continue past the inline range
//! ```
//!
//! A handle value alone decides which decoding path applies.

use std::fmt;
use std::num::NonZeroU32;

use static_assertions::{assert_eq_size, const_assert};

use crate::catalog::CATALOG_MAX;
use crate::table::SlotId;

/// First handle value of the inline range (bit 20 set)
pub const INLINE_MIN: u32 = 1 << 20;

/// One past the last handle value of the inline range
///
/// Four 6-bit fields sit at shifts 20, 14, 8 and 2, so every packed value is
/// below `1 << 26`.
pub const INLINE_END: u32 = 1 << 26;

const INLINE_SPAN: u32 = INLINE_END - INLINE_MIN;

/// Highest dynamic slot number that still maps to a valid handle
pub const MAX_DYNAMIC_SLOTS: u32 = u32::MAX - INLINE_SPAN - CATALOG_MAX;

const_assert!(CATALOG_MAX < INLINE_MIN);
assert_eq_size!(Symbol, u32);
assert_eq_size!(Option<Symbol>, u32);

/// An interned name
///
/// A `Symbol` is a 4-byte opaque handle. Equal names interned through the
/// same [`Interner`](crate::Interner) always yield equal symbols, so
/// comparison is a single integer compare. Catalog and inline symbols mean
/// the same thing in every interner; dynamic symbols are only meaningful to
/// the interner that issued them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(NonZeroU32);

/// Which encoding a handle belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Precompiled, well-known name
    Catalog,
    /// Name packed into the handle bits
    Inline,
    /// Name stored in the dynamic table
    Dynamic,
}

impl Symbol {
    /// Catalog symbol for the 1-based catalog position `handle`
    ///
    /// Usable in constant context; a zero position fails const evaluation.
    pub(crate) const fn catalog(handle: u32) -> Self {
        match NonZeroU32::new(handle) {
            Some(raw) => Symbol(raw),
            None => panic!("catalog handles start at 1"),
        }
    }

    /// Symbol for an inline-packed value
    #[inline]
    pub(crate) fn inline(raw: NonZeroU32) -> Self {
        debug_assert!((INLINE_MIN..INLINE_END).contains(&raw.get()));
        Symbol(raw)
    }

    /// Symbol for a dynamic table slot
    ///
    /// The slot must not exceed [`MAX_DYNAMIC_SLOTS`]; the table refuses to
    /// allocate past that point.
    #[inline]
    pub(crate) fn dynamic(slot: SlotId) -> Self {
        let raw = slot.get().saturating_add(CATALOG_MAX);
        if raw.get() < INLINE_MIN {
            Symbol(raw)
        } else {
            Symbol(raw.saturating_add(INLINE_SPAN))
        }
    }

    /// Dynamic table slot this symbol refers to, if it is a dynamic symbol
    #[inline]
    pub(crate) fn slot(self) -> Option<SlotId> {
        let raw = self.0.get();
        let slot = match self.kind() {
            SymbolKind::Dynamic if raw < INLINE_MIN => raw - CATALOG_MAX,
            SymbolKind::Dynamic => raw - INLINE_SPAN - CATALOG_MAX,
            _ => return None,
        };
        NonZeroU32::new(slot).map(SlotId::from_raw)
    }

    /// Rebuild a symbol from a raw handle value
    ///
    /// Returns `None` for 0. Any other value is accepted; whether it names
    /// an issued symbol is only known to an interner, see
    /// [`Interner::try_name_of`](crate::Interner::try_name_of).
    ///
    /// # Examples
    ///
    /// ```
    /// use ember_sym::Symbol;
    ///
    /// assert!(Symbol::from_raw(0).is_none());
    /// assert_eq!(Symbol::from_raw(7).map(Symbol::as_u32), Some(7));
    /// ```
    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Symbol)
    }

    /// Get the raw handle value
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0.get()
    }

    /// Classify the handle by range
    #[inline]
    pub fn kind(self) -> SymbolKind {
        let raw = self.0.get();
        if raw <= CATALOG_MAX {
            SymbolKind::Catalog
        } else if (INLINE_MIN..INLINE_END).contains(&raw) {
            SymbolKind::Inline
        } else {
            SymbolKind::Dynamic
        }
    }

    /// Returns true for precompiled catalog symbols
    #[inline]
    pub fn is_catalog(self) -> bool {
        self.kind() == SymbolKind::Catalog
    }

    /// Returns true for inline-packed symbols
    #[inline]
    pub fn is_inline(self) -> bool {
        self.kind() == SymbolKind::Inline
    }

    /// Returns true for symbols stored in a dynamic table
    #[inline]
    pub fn is_dynamic(self) -> bool {
        self.kind() == SymbolKind::Dynamic
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind() {
            SymbolKind::Catalog => "catalog",
            SymbolKind::Inline => "inline",
            SymbolKind::Dynamic => "dynamic",
        };
        write!(f, "Symbol({} #{})", kind, self.0)
    }
}
