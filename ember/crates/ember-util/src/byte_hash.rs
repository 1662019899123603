//! One-byte hash primitive.
//!
//! The dynamic symbol table keeps a 256-entry bucket array, so it only needs
//! a hash with eight bits of output. The value drives bucket placement and
//! never identity: two names are equal only if their bytes are.
//!
//! [`ByteHash`] is the seam; [`AHashByteHash`] is the default implementation.
//! Tests substitute degenerate hashers to force long collision chains.

use ahash::AHasher;
use std::hash::Hasher;

/// Hash a byte string down to a single byte
///
/// Implementations must be deterministic for the lifetime of the value: the
/// table stores bucket heads keyed by the result and looks them up again
/// later.
pub trait ByteHash {
    /// Compute the bucket hash of `bytes`
    fn hash_bytes(&self, bytes: &[u8]) -> u8;
}

/// Default byte hash backed by AHasher with fixed keys
///
/// The 64-bit AHasher output is folded into one byte by xoring its bytes, so
/// every input bit influences the bucket.
#[derive(Clone, Copy, Debug, Default)]
pub struct AHashByteHash;

impl ByteHash for AHashByteHash {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u8 {
        let mut hasher = AHasher::default();
        hasher.write(bytes);
        fold(hasher.finish())
    }
}

#[inline]
fn fold(hash: u64) -> u8 {
    let h = hash ^ (hash >> 32);
    let h = h ^ (h >> 16);
    (h ^ (h >> 8)) as u8
}
