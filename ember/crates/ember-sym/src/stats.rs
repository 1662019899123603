//! Interner statistics.

/// Statistics about an interner, for profiling
///
/// Entry counts describe the dynamic table only; catalog and inline symbols
/// occupy no storage.
///
/// # Examples
///
/// ```
/// use ember_sym::Interner;
///
/// let mut interner = Interner::new();
/// interner.intern_str("initialize").unwrap();
/// interner.intern_str("ab").unwrap();
/// interner.intern_str("some_method_name").unwrap();
/// interner.intern_str("some_method_name").unwrap();
///
/// let stats = interner.stats();
/// assert_eq!(stats.count, 1);
/// assert_eq!(stats.catalog_hits, 1);
/// assert_eq!(stats.inline_hits, 1);
/// assert_eq!(stats.table_hits, 1);
/// assert_eq!(stats.misses, 1);
/// assert_eq!(stats.total_operations(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of names in the dynamic table
    pub count: usize,
    /// Logical capacity of the dynamic table
    pub capacity: usize,
    /// Number of times the table grew
    pub growths: usize,
    /// Interns answered by the catalog
    pub catalog_hits: usize,
    /// Interns answered by the inline packer
    pub inline_hits: usize,
    /// Interns answered by an existing table entry
    pub table_hits: usize,
    /// Interns that created a new table entry
    pub misses: usize,
    /// Insertions into a bucket that already had a chain
    pub collisions: usize,
    /// Chain links that overflowed into the linear-scan sentinel
    pub overflow_links: usize,
    /// Entries stored by reference to immortal caller bytes
    pub literal_count: usize,
    /// Bytes held by owned entries, prefixes and terminators included
    pub owned_bytes: usize,
}

impl InternerStats {
    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Interns that found an existing symbol, from any source
    pub fn hits(&self) -> usize {
        self.catalog_hits + self.inline_hits + self.table_hits
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no interning has been performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ember_sym::InternerStats;
    ///
    /// let stats = InternerStats {
    ///     table_hits: 9,
    ///     misses: 1,
    ///     ..InternerStats::default()
    /// };
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits() + self.misses
    }
}
