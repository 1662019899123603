//! IndexVec - A vector indexed by a specific type.
//!
//! This module provides [`IndexVec`], a typed vector that uses a custom index
//! type instead of `usize`. The symbol table addresses its parallel arrays
//! with one slot type, so a raw handle value can never be used to index them
//! by accident.
//!
//! # Example
//!
//! ```
//! use ember_util::index_vec::{IndexVec, Idx};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct ExprId(u32);
//!
//! impl Idx for ExprId {
//!     fn from_usize(idx: usize) -> Self { ExprId(idx as u32) }
//!     fn index(self) -> usize { self.0 as usize }
//! }
//!
//! let mut exprs: IndexVec<ExprId, i32> = IndexVec::new();
//! let id = exprs.push(42);
//! assert_eq!(exprs[id], 42);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;


/// Trait for types that can be used as indices
///
/// Implementations must ensure `from_usize(i).index() == i` for every
/// position the vector can hold. The mapping does not have to be the
/// identity: a one-based index type maps position 0 to id 1.
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert a vector position to the index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if `idx` is not representable.
    fn from_usize(idx: usize) -> Self;

    /// Convert the index to a vector position
    fn index(self) -> usize;
}

impl Idx for usize {
    #[inline]
    fn from_usize(idx: usize) -> Self {
        idx
    }

    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// A vector indexed by a specific type
///
/// Elements can only be appended; positions are never reused, which is what
/// makes handles derived from them stable.
#[derive(Clone)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty IndexVec
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the vector contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the total capacity of the vector
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserve room for exactly `additional` more elements
    ///
    /// Unlike [`Vec::reserve`] this does not round up, so callers that run
    /// their own growth policy see exactly the capacity they asked for (the
    /// allocator may still hand out more).
    #[inline]
    pub fn reserve_exact(&mut self, additional: usize) {
        self.raw.reserve_exact(additional)
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Push an element and return its typed index
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let index = self.raw.len();
        self.raw.push(value);
        I::from_usize(index)
    }

    /// Get an element by index
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }

    /// Iterate over (index, value) pairs
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.raw
            .iter()
            .enumerate()
            .map(|(i, v)| (I::from_usize(i), v))
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}
