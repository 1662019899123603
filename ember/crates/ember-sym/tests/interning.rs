//! Interning correctness tests
//!
//! These tests verify the observable contract of the interner:
//! - identical names always yield identical handles
//! - names round-trip exactly, embedded NUL bytes included
//! - catalog, inline and dynamic handles never overlap
//! - the length limit rejects names before they touch the table

mod common;

use common::{dynamic_names, intern_all};
use ember_sym::{catalog, inline, known, Interner, SymbolError, SymbolKind};
use rustc_hash::FxHashSet;

/// ============================================================================
/// IDEMPOTENCE
/// ============================================================================

#[test]
fn test_same_name_same_handle() {
    let mut interner = Interner::new();
    for name in [&b"x"[..], b"initialize", b"some_long_identifier", b"", b"a b c"] {
        let first = interner.intern(name).unwrap();
        let second = interner.intern(name).unwrap();
        assert_eq!(first, second, "{:?}", name.escape_ascii().to_string());
    }
}

#[test]
fn test_copy_and_literal_interning_agree() {
    let mut interner = Interner::new();
    let owned = String::from("shared_between_paths");

    let copied = interner.intern_str(&owned).unwrap();
    let literal = interner.intern_static_str("shared_between_paths").unwrap();

    assert_eq!(copied, literal);
    assert_eq!(interner.dynamic_len(), 1);
    // First insertion decided the representation.
    assert!(!interner.is_literal(copied));
}

#[test]
fn test_literal_first_then_copy() {
    let mut interner = Interner::new();
    let literal = interner.intern_static_str("literal_wins_here").unwrap();
    let copied = interner.intern(b"literal_wins_here".to_vec().as_slice()).unwrap();

    assert_eq!(literal, copied);
    assert!(interner.is_literal(literal));
}

/// ============================================================================
/// ROUND TRIP
/// ============================================================================

#[test]
fn test_embedded_nul_round_trip() {
    let mut interner = Interner::new();
    let name = [b'a', b'b', 0, b'c', b'd'];

    let sym = interner.intern(&name).unwrap();
    let back = interner.name_of(sym);

    assert_eq!(back.len(), 5);
    assert_eq!(back, name);
    assert_eq!(sym.kind(), SymbolKind::Dynamic);
}

#[test]
fn test_embedded_nul_literal_is_copied() {
    let mut interner = Interner::new();
    let sym = interner.intern_literal(b"ab\0cd").unwrap();

    assert!(!interner.is_literal(sym));
    assert_eq!(interner.name_of(sym), b"ab\0cd");
    assert_eq!(interner.intern(b"ab\0cd").unwrap(), sym);
    // The prefix must not match.
    assert_ne!(interner.intern(b"ab").unwrap(), sym);
}

#[test]
fn test_empty_name_is_dynamic() {
    let mut interner = Interner::new();
    let sym = interner.intern(b"").unwrap();

    assert_eq!(sym.kind(), SymbolKind::Dynamic);
    assert!(interner.name_of(sym).is_empty());
    assert_eq!(interner.intern(b"").unwrap(), sym);
}

#[test]
fn test_non_utf8_round_trip() {
    let mut interner = Interner::new();
    let name = [0xff, 0xfe, b'x', 0x80];

    let sym = interner.intern(&name).unwrap();
    assert_eq!(interner.name_of(sym), name);
    assert_eq!(interner.name_of(sym).to_str(), None);
}

#[test]
fn test_cstr_matches_bytes() {
    let mut interner = Interner::new();
    let from_cstr = interner.intern_cstr(c"method_from_c").unwrap();
    assert_eq!(interner.intern(b"method_from_c").unwrap(), from_cstr);
}

/// ============================================================================
/// DISJOINTNESS
/// ============================================================================

#[test]
fn test_distinct_names_distinct_handles() {
    let mut interner = Interner::new();
    let mut names: Vec<Vec<u8>> = catalog::iter().map(|(_, name)| name.to_vec()).collect();
    names.extend(["a", "ab", "abc", "abcd", "Z9_z", "_"].map(|s| s.as_bytes().to_vec()));
    names.extend(dynamic_names("disjoint", 50).into_iter().map(String::into_bytes));

    let mut seen = FxHashSet::default();
    for name in &names {
        let sym = interner.intern(name).unwrap();
        assert!(seen.insert(sym), "handle {:?} issued twice", sym);
    }
    assert_eq!(seen.len(), names.len());
}

#[test]
fn test_kinds_follow_lookup_order() {
    let mut interner = Interner::new();
    assert_eq!(interner.intern(b"p").unwrap().kind(), SymbolKind::Catalog);
    assert_eq!(interner.intern(b"to_s").unwrap().kind(), SymbolKind::Catalog);
    assert_eq!(interner.intern(b"q").unwrap().kind(), SymbolKind::Inline);
    assert_eq!(interner.intern(b"to_x").unwrap().kind(), SymbolKind::Inline);
    assert_eq!(interner.intern(b"to_xy").unwrap().kind(), SymbolKind::Dynamic);
    assert_eq!(interner.intern(b"a?").unwrap().kind(), SymbolKind::Dynamic);
}

/// ============================================================================
/// INLINE
/// ============================================================================

#[test]
fn test_inline_names_need_no_storage() {
    let mut interner = Interner::new();
    let names = ["a", "Z", "_", "9", "ab", "xyz", "a_b9", "ZZZZ"];

    for name in names {
        let sym = interner.intern_str(name).unwrap();
        assert!(sym.is_inline(), "{} should pack inline", name);
        assert_eq!(interner.name_of(sym), name);
        assert_eq!(Some(sym), inline::pack(name.as_bytes()));
    }

    assert_eq!(interner.dynamic_len(), 0);
    assert_eq!(interner.capacity(), 0);
    assert_eq!(interner.stats().growths, 0);
    assert_eq!(interner.stats().inline_hits, names.len());
}

#[test]
fn test_inline_handles_shared_between_interners() {
    let mut a = Interner::new();
    let mut b = Interner::new();
    b.intern_str("unrelated_dynamic_entry").unwrap();

    let sym = a.intern_str("abc").unwrap();
    assert_eq!(b.intern_str("abc").unwrap(), sym);
    assert_eq!(b.name_of(sym), "abc");
}

/// ============================================================================
/// CATALOG
/// ============================================================================

#[test]
fn test_catalog_handles_stable_across_instances() {
    let mut first = Interner::new();
    first.intern_str("warm_up_the_table").unwrap();
    let mut second = Interner::new();

    for (expected, name) in catalog::iter() {
        assert_eq!(first.intern(name).unwrap(), expected);
        assert_eq!(second.intern(name).unwrap(), expected);
    }
    assert_eq!(second.dynamic_len(), 0);
}

#[test]
fn test_known_constants_resolve() {
    let interner = Interner::new();
    assert_eq!(interner.name_of(known::ID_INITIALIZE), "initialize");
    assert_eq!(interner.name_of(known::OP_CMP), "<=>");
    assert_eq!(interner.name_of(known::CLS_OBJECT), "Object");
    assert_eq!(interner.name_of(known::ID_RESPOND_TO_P), "respond_to?");
}

/// ============================================================================
/// LENGTH LIMIT
/// ============================================================================

#[test]
fn test_reject_at_limit_without_side_effects() {
    let mut interner = Interner::new();
    let name = vec![b'n'; 65536];

    let err = interner.intern(&name).unwrap_err();
    assert_eq!(
        err,
        SymbolError::TooLong {
            len: 65536,
            limit: 65535
        }
    );
    assert!(err.to_string().contains("65536"));

    assert_eq!(interner.dynamic_len(), 0);
    assert_eq!(interner.capacity(), 0);
    assert!(interner.intern_check(&name).is_err());
    assert!(interner.intern_literal(Box::leak(name.into_boxed_slice())).is_err());
    assert_eq!(interner.dynamic_len(), 0);
}

#[test]
fn test_just_below_limit_accepted() {
    let mut interner = Interner::new();
    let name = vec![b'm'; 65534];

    let sym = interner.intern(&name).unwrap();
    assert_eq!(interner.name_of(sym), name.as_slice());
    assert_eq!(interner.stats().owned_bytes, 3 + 65534 + 1);
}

/// ============================================================================
/// CHECK WITHOUT INSERT
/// ============================================================================

#[test]
fn test_check_does_not_create() {
    let mut interner = Interner::new();
    let names = dynamic_names("probe", 10);

    for name in &names {
        assert_eq!(interner.check_str(name).unwrap(), None);
    }
    assert_eq!(interner.dynamic_len(), 0);

    let symbols = intern_all(&mut interner, &names);
    for (name, sym) in names.iter().zip(&symbols) {
        assert_eq!(interner.check_str(name).unwrap(), Some(*sym));
    }
    assert_eq!(interner.dynamic_len(), names.len());
}

/// ============================================================================
/// TEARDOWN
/// ============================================================================

#[test]
fn test_teardown_then_fresh_instance() {
    let mut interner = Interner::new();
    let names = dynamic_names("gone", 20);
    intern_all(&mut interner, &names);
    let literal = interner.intern_static_str("borrowed_forever").unwrap();
    assert_eq!(literal.as_u32(), catalog::CATALOG_MAX + 21);

    let stats = interner.teardown();
    assert_eq!(stats.count, 21);
    assert_eq!(stats.literal_count, 1);

    let mut fresh = Interner::new();
    assert_eq!(fresh.intern(b"initialize").unwrap(), known::ID_INITIALIZE);
    assert_eq!(fresh.intern(b"abc").unwrap(), inline::pack(b"abc").unwrap());
    // Dynamic handles start over in a fresh table.
    let reissued = fresh.intern_static_str("borrowed_forever").unwrap();
    assert_eq!(reissued.as_u32(), catalog::CATALOG_MAX + 1);
}
