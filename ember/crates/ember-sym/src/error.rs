//! Error types for ember-sym crate
//!
//! Only structural problems reach callers. Catalog misses, inline pack
//! failures and hash misses are internal "try the next strategy" signals and
//! never show up here.

use thiserror::Error;

/// Error type for symbol interning operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Name length is at or above the configured limit
    ///
    /// Raised before any lookup or insertion, so a rejected name never
    /// leaves a trace in the table.
    #[error("Symbol length too long: {len} bytes (limit is {limit})")]
    TooLong { len: usize, limit: usize },

    /// Every dynamic handle value has been issued
    #[error("Symbol table exhausted: {count} dynamic symbols already issued")]
    TableExhausted { count: usize },

    /// Interner configuration failed validation
    #[error("Invalid interner configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
