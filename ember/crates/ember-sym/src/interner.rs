//! Interning façade.
//!
//! Every request is resolved in a fixed order:
//!
//! 1. the precompiled catalog,
//! 2. the inline packer,
//! 3. the dynamic table, which is the only place new entries are created.
//!
//! The order makes handles canonical: a catalog name never gets an inline or
//! dynamic handle, and a packable name never reaches the table.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;

use ember_util::{AHashByteHash, ByteHash};

use crate::catalog;
use crate::config::InternerConfig;
use crate::error::{SymbolError, SymbolResult};
use crate::inline;
use crate::inspect;
use crate::name::SymbolName;
use crate::stats::InternerStats;
use crate::symbol::{Symbol, SymbolKind};
use crate::table::{SlotId, SymbolTable};

/// Where a lookup found its answer
enum Lookup {
    Catalog(Symbol),
    Inline(Symbol),
    Table(Symbol),
    /// Not interned yet; carries the bucket hash for the insert
    Missing(u8),
}

/// Symbol interner
///
/// Owns one dynamic table. Catalog and inline symbols are shared by every
/// interner; dynamic symbols are only meaningful to the interner that issued
/// them.
///
/// # Examples
///
/// ```
/// use ember_sym::Interner;
///
/// let mut interner = Interner::new();
/// let a = interner.intern(b"my_method").unwrap();
/// let b = interner.intern_str("my_method").unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(interner.name_of(a), "my_method");
/// assert_eq!(interner.intern_check(b"never_seen").unwrap(), None);
/// ```
pub struct Interner<H = AHashByteHash> {
    table: SymbolTable<H>,
    max_name_len: usize,
    catalog_hits: usize,
    inline_hits: usize,
    table_hits: usize,
    misses: usize,
}

impl Interner<AHashByteHash> {
    /// Create an interner with the default configuration
    pub fn new() -> Self {
        Self::build(InternerConfig::default(), AHashByteHash)
    }

    /// Create an interner with a custom configuration
    pub fn with_config(config: InternerConfig) -> SymbolResult<Self> {
        Self::with_hasher(config, AHashByteHash)
    }
}

impl Default for Interner<AHashByteHash> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ByteHash> Interner<H> {
    /// Create an interner with a custom configuration and bucket hash
    pub fn with_hasher(config: InternerConfig, hasher: H) -> SymbolResult<Self> {
        config.validate()?;
        Ok(Self::build(config, hasher))
    }

    fn build(config: InternerConfig, hasher: H) -> Self {
        Self {
            max_name_len: config.max_name_len,
            table: SymbolTable::new(config, hasher),
            catalog_hits: 0,
            inline_hits: 0,
            table_hits: 0,
            misses: 0,
        }
    }

    fn check_len(&self, name: &[u8]) -> SymbolResult<()> {
        if name.len() >= self.max_name_len {
            return Err(SymbolError::TooLong {
                len: name.len(),
                limit: self.max_name_len,
            });
        }
        Ok(())
    }

    fn find(&self, name: &[u8]) -> Lookup {
        if let Some(sym) = catalog::find(name) {
            return Lookup::Catalog(sym);
        }
        if let Some(sym) = inline::pack(name) {
            return Lookup::Inline(sym);
        }
        let hash = self.table.hash(name);
        match self.table.lookup(name, hash) {
            Some(slot) => Lookup::Table(Symbol::dynamic(slot)),
            None => Lookup::Missing(hash),
        }
    }

    fn intern_with<F>(&mut self, name: &[u8], store: F) -> SymbolResult<Symbol>
    where
        F: FnOnce(&mut SymbolTable<H>, u8) -> SymbolResult<SlotId>,
    {
        self.check_len(name)?;
        let hash = match self.find(name) {
            Lookup::Catalog(sym) => {
                self.catalog_hits += 1;
                return Ok(sym);
            }
            Lookup::Inline(sym) => {
                self.inline_hits += 1;
                return Ok(sym);
            }
            Lookup::Table(sym) => {
                self.table_hits += 1;
                return Ok(sym);
            }
            Lookup::Missing(hash) => hash,
        };
        let slot = store(&mut self.table, hash)?;
        self.misses += 1;
        Ok(Symbol::dynamic(slot))
    }

    /// Intern `name`, copying it if a new table entry is needed
    ///
    /// Names may contain any bytes, NUL included. Fails with
    /// [`SymbolError::TooLong`] before any lookup when the name is at or
    /// above the length limit, and with [`SymbolError::TableExhausted`] when
    /// no dynamic handle is left.
    pub fn intern(&mut self, name: &[u8]) -> SymbolResult<Symbol> {
        self.intern_with(name, |table, hash| table.insert(name, hash))
    }

    /// Intern immortal bytes, storing them by reference when possible
    ///
    /// A new entry borrows `name` instead of copying it unless the name
    /// contains a NUL byte, in which case it is copied like [`intern`].
    /// The returned symbol is the same either way.
    ///
    /// [`intern`]: Interner::intern
    ///
    /// # Examples
    ///
    /// ```
    /// use ember_sym::Interner;
    ///
    /// let mut interner = Interner::new();
    /// let sym = interner.intern_literal(b"static_name").unwrap();
    /// assert!(interner.is_literal(sym));
    /// assert_eq!(interner.intern(b"static_name").unwrap(), sym);
    /// ```
    pub fn intern_literal(&mut self, name: &'static [u8]) -> SymbolResult<Symbol> {
        self.intern_with(name, |table, hash| table.insert_literal(name, hash))
    }

    /// Intern UTF-8 text
    #[inline]
    pub fn intern_str(&mut self, name: &str) -> SymbolResult<Symbol> {
        self.intern(name.as_bytes())
    }

    /// Intern immortal UTF-8 text, see [`intern_literal`](Interner::intern_literal)
    #[inline]
    pub fn intern_static_str(&mut self, name: &'static str) -> SymbolResult<Symbol> {
        self.intern_literal(name.as_bytes())
    }

    /// Intern the bytes of a C string, up to its terminator
    #[inline]
    pub fn intern_cstr(&mut self, name: &CStr) -> SymbolResult<Symbol> {
        self.intern(name.to_bytes())
    }

    /// Look `name` up without creating an entry
    ///
    /// Catalog and packable names always resolve, since their handles need
    /// no storage. The length limit applies exactly as for [`intern`].
    ///
    /// [`intern`]: Interner::intern
    pub fn intern_check(&self, name: &[u8]) -> SymbolResult<Option<Symbol>> {
        self.check_len(name)?;
        Ok(match self.find(name) {
            Lookup::Catalog(sym) | Lookup::Inline(sym) | Lookup::Table(sym) => Some(sym),
            Lookup::Missing(_) => None,
        })
    }

    /// Look UTF-8 text up without creating an entry
    #[inline]
    pub fn check_str(&self, name: &str) -> SymbolResult<Option<Symbol>> {
        self.intern_check(name.as_bytes())
    }

    /// Look the bytes of a C string up without creating an entry
    #[inline]
    pub fn check_cstr(&self, name: &CStr) -> SymbolResult<Option<Symbol>> {
        self.intern_check(name.to_bytes())
    }

    /// The name of `sym`, or `None` if this interner never issued it
    pub fn try_name_of(&self, sym: Symbol) -> Option<SymbolName<'_>> {
        match sym.kind() {
            SymbolKind::Catalog => catalog::name_of(sym).map(SymbolName::borrowed),
            SymbolKind::Inline => {
                let name = inline::unpack(sym);
                (inline::pack(name.as_bytes()) == Some(sym)).then_some(SymbolName::inline(name))
            }
            SymbolKind::Dynamic => sym
                .slot()
                .and_then(|slot| self.table.name_of(slot))
                .map(SymbolName::borrowed),
        }
    }

    /// The name of `sym`
    ///
    /// # Panics
    ///
    /// Panics if `sym` is a dynamic symbol this interner never issued, or a
    /// raw handle that no interner could have produced.
    pub fn name_of(&self, sym: Symbol) -> SymbolName<'_> {
        self.try_name_of(sym)
            .unwrap_or_else(|| panic!("{:?} was not issued by this interner", sym))
    }

    /// Whether `sym` is a table entry that borrows immortal caller bytes
    pub fn is_literal(&self, sym: Symbol) -> bool {
        sym.slot().is_some_and(|slot| self.table.is_literal(slot))
    }

    /// Order two symbols by name
    ///
    /// Equal handles compare equal without touching their names. Otherwise
    /// names compare byte-wise, and a proper prefix sorts first.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`name_of`](Interner::name_of).
    pub fn compare(&self, a: Symbol, b: Symbol) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.name_of(a).as_bytes().cmp(self.name_of(b).as_bytes())
    }

    /// `sym` as a symbol literal, e.g. `:foo` or `:"foo bar"`
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`name_of`](Interner::name_of).
    pub fn inspect(&self, sym: Symbol) -> String {
        inspect::inspect(&self.name_of(sym))
    }

    /// The name of `sym` as-is when it is a plain name, otherwise quoted and
    /// escaped
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`name_of`](Interner::name_of).
    pub fn dump(&self, sym: Symbol) -> String {
        inspect::dump(&self.name_of(sym))
    }

    /// Number of names in the dynamic table
    #[inline]
    pub fn dynamic_len(&self) -> usize {
        self.table.len()
    }

    /// Logical capacity of the dynamic table
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Get statistics about the interner for profiling
    pub fn stats(&self) -> InternerStats {
        let counters = self.table.counters();
        InternerStats {
            count: self.table.len(),
            capacity: self.table.capacity(),
            growths: counters.growths,
            catalog_hits: self.catalog_hits,
            inline_hits: self.inline_hits,
            table_hits: self.table_hits,
            misses: self.misses,
            collisions: counters.collisions,
            overflow_links: counters.overflow_links,
            literal_count: counters.literal_count,
            owned_bytes: counters.owned_bytes,
        }
    }

    /// Release the dynamic table and return the final statistics
    ///
    /// Owned names are freed; literal names are left to their owner.
    /// Catalog and inline symbols stay meaningful, since they never depended
    /// on this interner.
    pub fn teardown(self) -> InternerStats {
        let stats = self.stats();
        self.table.teardown();
        stats
    }
}

impl<H> fmt::Debug for Interner<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interner")
            .field("max_name_len", &self.max_name_len)
            .field("catalog_hits", &self.catalog_hits)
            .field("inline_hits", &self.inline_hits)
            .field("table_hits", &self.table_hits)
            .field("misses", &self.misses)
            .finish_non_exhaustive()
    }
}
