//! ember-sym - Symbol Interning Engine
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Maps byte-string names to compact 32-bit [`Symbol`] handles so that name
//! equality becomes integer equality, and maps handles back to names.
//!
//! Three encodings share the handle space:
//!
//! - [`catalog`]: a precompiled, sorted table of well-known names with fixed
//!   handles, found by binary search.
//! - [`inline`]: names of one to four `[_a-zA-Z0-9]` characters packed
//!   directly into the handle bits, with no storage at all.
//! - the dynamic table: everything else, stored once per [`Interner`] in
//!   insertion order and chained through a 256-bucket byte hash.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. CANONICAL HANDLES
//!    Lookup always tries catalog, then inline, then the table, so a name has
//!    exactly one handle and comparing handles is comparing names.
//!
//! 2. COMPACT STORAGE
//!    One byte of chain link per dynamic entry; names interned from immortal
//!    bytes are borrowed instead of copied.
//!
//! 3. EXPLICIT OWNERSHIP
//!    No global state. Each [`Interner`] owns its table and releases it on
//!    [`Interner::teardown`] or drop.
//!
//! # Example
//!
//! ```
//! use ember_sym::{known, Interner, SymbolKind};
//!
//! let mut interner = Interner::new();
//!
//! let init = interner.intern_str("initialize").unwrap();
//! let short = interner.intern_str("ab").unwrap();
//! let long = interner.intern_str("user_defined_method").unwrap();
//!
//! assert_eq!(init, known::ID_INITIALIZE);
//! assert_eq!(short.kind(), SymbolKind::Inline);
//! assert_eq!(long.kind(), SymbolKind::Dynamic);
//! assert_eq!(interner.name_of(long), "user_defined_method");
//! assert_eq!(interner.inspect(long), ":user_defined_method");
//! ```
//
// ============================================================================
// HANDLE LAYOUT
// ============================================================================
//
// ```
//   0                         none
//   1 ..= CATALOG_MAX         catalog
//   CATALOG_MAX+1 .. 2^20     dynamic, slots 1 ..
//   2^20 .. 2^26              inline
//   2^26 ..= u32::MAX         dynamic, continued
// ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod inline;
pub mod inspect;
pub mod interner;
pub mod name;
pub mod stats;
pub mod symbol;
mod table;

pub use catalog::known;
pub use config::InternerConfig;
pub use error::{SymbolError, SymbolResult};
pub use inspect::is_plain_name;
pub use interner::Interner;
pub use name::SymbolName;
pub use stats::InternerStats;
pub use symbol::{Symbol, SymbolKind};
