//! Shared fixtures for the ember-sym integration tests
//!
//! ============================================================================
//! Every helper asserts strictly: a fixture that silently tolerates a wrong
//! handle or a lost name hides exactly the bugs these suites exist to find.
//! ============================================================================

#![allow(dead_code)]

use ember_sym::{Interner, InternerConfig, Symbol, SymbolKind};
use ember_util::ByteHash;
use rustc_hash::FxHashSet;

/// Number of names that forces at least two table growths under the default
/// policy (100 -> 120 -> 144 -> ...)
pub const GROWTH_NAME_COUNT: usize = 300;

/// Number of same-bucket names needed to exercise both direct chain links
/// and the overflow sentinel
pub const COLLISION_NAME_COUNT: usize = 300;

/// ============================================================================
/// HASHERS
/// ============================================================================

/// Sends every name to bucket 0, so every insert extends one chain
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleBucket;

impl ByteHash for SingleBucket {
    fn hash_bytes(&self, _bytes: &[u8]) -> u8 {
        0
    }
}

/// Sends names starting with `prefix` to bucket 1 and the rest to bucket 0
#[derive(Clone, Copy, Debug)]
pub struct PrefixBucket {
    pub prefix: &'static [u8],
}

impl ByteHash for PrefixBucket {
    fn hash_bytes(&self, bytes: &[u8]) -> u8 {
        u8::from(bytes.starts_with(self.prefix))
    }
}

/// ============================================================================
/// FIXTURES
/// ============================================================================

/// Interner whose table chains every entry into a single bucket
pub fn single_bucket_interner() -> Interner<SingleBucket> {
    Interner::with_hasher(InternerConfig::default(), SingleBucket)
        .expect("default config should be valid")
}

/// Interner with a two-bucket hash split on `prefix`
pub fn prefix_bucket_interner(prefix: &'static [u8]) -> Interner<PrefixBucket> {
    Interner::with_hasher(InternerConfig::default(), PrefixBucket { prefix })
        .expect("default config should be valid")
}

/// Deterministic names that are neither catalog entries nor inline-packable
pub fn dynamic_names(tag: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}_name_{:04}", tag, i)).collect()
}

/// ============================================================================
/// ASSERTIONS
/// ============================================================================

/// Intern every name and check the handles are dynamic, pairwise distinct
/// and strictly increasing in insertion order
pub fn intern_all<H: ByteHash>(interner: &mut Interner<H>, names: &[String]) -> Vec<Symbol> {
    let symbols: Vec<Symbol> = names
        .iter()
        .map(|name| {
            interner
                .intern_str(name)
                .unwrap_or_else(|e| panic!("interning {:?} failed: {}", name, e))
        })
        .collect();

    let unique: FxHashSet<Symbol> = symbols.iter().copied().collect();
    assert_eq!(unique.len(), symbols.len(), "duplicate handle issued");
    for pair in symbols.windows(2) {
        assert!(
            pair[0].as_u32() < pair[1].as_u32(),
            "dynamic handles must increase: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
    for sym in &symbols {
        assert_eq!(sym.kind(), SymbolKind::Dynamic, "{:?}", sym);
    }
    symbols
}

/// Check every symbol still maps back to its name and that re-interning and
/// checking return the same handle
pub fn assert_history<H: ByteHash>(
    interner: &mut Interner<H>,
    names: &[String],
    symbols: &[Symbol],
) {
    assert_eq!(names.len(), symbols.len());
    for (name, &sym) in names.iter().zip(symbols) {
        assert_eq!(interner.name_of(sym), name.as_str(), "name lost for {:?}", sym);
        assert_eq!(interner.check_str(name).unwrap(), Some(sym), "check lost {:?}", name);
        assert_eq!(interner.intern_str(name).unwrap(), sym, "re-intern moved {:?}", name);
    }
}
