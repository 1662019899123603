//! Precompiled symbol catalog.
//!
//! Well-known names (core method names, operators, class names) get fixed
//! handles `1..=CATALOG_MAX` that are identical in every interner and every
//! process. The table is immutable and sorted by (length, bytes), so lookup
//! is a binary search that compares the cheap length first and only touches
//! the bytes of entries with the right length.
//!
//! # Example
//!
//! ```
//! use ember_sym::{known, Interner};
//!
//! let mut interner = Interner::new();
//! assert_eq!(interner.intern(b"initialize").unwrap(), known::ID_INITIALIZE);
//! assert!(known::ID_INITIALIZE.is_catalog());
//! ```

pub mod known;
mod names;

use std::cmp::Ordering;

use crate::symbol::Symbol;
use names::NAMES;

/// Number of catalog entries, also the highest catalog handle
pub const CATALOG_MAX: u32 = NAMES.len() as u32;

/// Length of the longest catalog name
pub const MAX_LEN: usize = NAMES[NAMES.len() - 1].len();

const fn precedes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return a.len() < b.len();
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    false
}

const fn is_strictly_sorted(names: &[&[u8]]) -> bool {
    let mut i = 1;
    while i < names.len() {
        if !precedes(names[i - 1], names[i]) {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    is_strictly_sorted(NAMES),
    "catalog names must be unique and sorted by length, then bytes"
);

/// Find the catalog handle for `name`
///
/// O(log n). Names longer than the longest entry are rejected without
/// probing.
pub fn find(name: &[u8]) -> Option<Symbol> {
    if name.len() > MAX_LEN {
        return None;
    }

    let mut start = 0usize;
    let mut size = NAMES.len();
    while size != 0 {
        let idx = start + size / 2;
        let entry = NAMES[idx];
        let ord = name
            .len()
            .cmp(&entry.len())
            .then_with(|| name.cmp(entry));
        match ord {
            Ordering::Equal => return Some(Symbol::catalog(idx as u32 + 1)),
            Ordering::Greater => {
                start = idx + 1;
                size -= 1;
            }
            Ordering::Less => {}
        }
        size /= 2;
    }
    None
}

/// Name of a catalog symbol, `None` for handles outside the catalog range
#[inline]
pub fn name_of(sym: Symbol) -> Option<&'static [u8]> {
    let raw = sym.as_u32() as usize;
    NAMES.get(raw - 1).copied()
}

/// Iterate over every catalog entry in handle order
pub fn iter() -> impl Iterator<Item = (Symbol, &'static [u8])> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (Symbol::catalog(i as u32 + 1), *name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_finds_itself() {
        for (sym, name) in iter() {
            assert_eq!(find(name), Some(sym), "{:?}", name.escape_ascii().to_string());
            assert_eq!(name_of(sym), Some(name));
        }
    }

    #[test]
    fn test_handles_are_dense_and_one_based() {
        let handles: Vec<u32> = iter().map(|(sym, _)| sym.as_u32()).collect();
        assert_eq!(handles.first(), Some(&1));
        assert_eq!(handles.last(), Some(&CATALOG_MAX));
        assert_eq!(handles.len(), CATALOG_MAX as usize);
        assert!(iter().all(|(sym, _)| sym.is_catalog()));
    }

    #[test]
    fn test_misses() {
        assert_eq!(find(b""), None);
        assert_eq!(find(b"initialise"), None);
        assert_eq!(find(b"Initialize"), None);
        assert_eq!(find(b"initialize\0"), None);
        assert_eq!(find(b"zzzz"), None);
        assert_eq!(find(b"!!"), None);
    }

    #[test]
    fn test_length_short_circuit() {
        let longest = iter().map(|(_, name)| name.len()).max().unwrap();
        assert_eq!(MAX_LEN, longest);
        assert_eq!(find(&vec![b'a'; MAX_LEN + 1]), None);
    }

    #[test]
    fn test_first_and_last_entries() {
        assert_eq!(find(b"!"), Some(known::OP_NOT));
        assert_eq!(known::OP_NOT.as_u32(), 1);
        assert_eq!(find(b"instance_variable_set").map(Symbol::as_u32), Some(CATALOG_MAX));
    }

    #[test]
    fn test_name_of_outside_catalog() {
        let dynamic = Symbol::from_raw(CATALOG_MAX + 1).unwrap();
        assert_eq!(name_of(dynamic), None);
    }

    #[test]
    fn test_precedes_orders_by_length_first() {
        assert!(precedes(b"zz", b"aaa"));
        assert!(precedes(b"ab", b"ac"));
        assert!(!precedes(b"ab", b"ab"));
        assert!(!precedes(b"abc", b"zz"));
    }

    #[test]
    fn test_known_constants_match_names() {
        use super::known::*;

        let expected: &[(Symbol, &[u8])] = &[
            (OP_NOT, b"!"),
            (OP_MOD, b"%"),
            (OP_AND, b"&"),
            (OP_MUL, b"*"),
            (OP_ADD, b"+"),
            (OP_SUB, b"-"),
            (OP_DIV, b"/"),
            (OP_LT, b"<"),
            (OP_GT, b">"),
            (OP_XOR, b"^"),
            (OP_TICK, b"`"),
            (ID_P, b"p"),
            (OP_OR, b"|"),
            (OP_NEG, b"~"),
            (OP_NEQ, b"!="),
            (OP_NMATCH, b"!~"),
            (OP_POW, b"**"),
            (OP_PLUS, b"+@"),
            (OP_MINUS, b"-@"),
            (OP_LSHIFT, b"<<"),
            (OP_LE, b"<="),
            (OP_EQ, b"=="),
            (OP_MATCH, b"=~"),
            (OP_GE, b">="),
            (OP_RSHIFT, b">>"),
            (OP_AREF, b"[]"),
            (OP_CMP, b"<=>"),
            (OP_EQQ, b"==="),
            (OP_ASET, b"[]="),
            (ID_DIG, b"dig"),
            (ID_DUP, b"dup"),
            (ID_END, b"end"),
            (ID_MAP, b"map"),
            (ID_NEW, b"new"),
            (ID_POP, b"pop"),
            (CLS_HASH, b"Hash"),
            (CLS_PROC, b"Proc"),
            (ID_CALL, b"call"),
            (ID_EACH, b"each"),
            (ID_EQL_P, b"eql?"),
            (ID_HASH, b"hash"),
            (ID_KEYS, b"keys"),
            (ID_LAST, b"last"),
            (ID_LOOP, b"loop"),
            (ID_NIL_P, b"nil?"),
            (ID_PROC, b"proc"),
            (ID_PUSH, b"push"),
            (ID_PUTS, b"puts"),
            (ID_SEND, b"send"),
            (ID_SIZE, b"size"),
            (ID_STEP, b"step"),
            (ID_SUCC, b"succ"),
            (ID_TO_A, b"to_a"),
            (ID_TO_F, b"to_f"),
            (ID_TO_H, b"to_h"),
            (ID_TO_I, b"to_i"),
            (ID_TO_S, b"to_s"),
            (ID_UPTO, b"upto"),
            (CLS_ARRAY, b"Array"),
            (CLS_CLASS, b"Class"),
            (CLS_FLOAT, b"Float"),
            (CLS_RANGE, b"Range"),
            (ID_BEGIN, b"begin"),
            (ID_CLASS, b"class"),
            (ID_CLONE, b"clone"),
            (ID_FETCH, b"fetch"),
            (ID_FIRST, b"first"),
            (ID_IS_A_P, b"is_a?"),
            (ID_PRINT, b"print"),
            (ID_RAISE, b"raise"),
            (ID_SHIFT, b"shift"),
            (ID_TIMES, b"times"),
            (CLS_KERNEL, b"Kernel"),
            (CLS_MODULE, b"Module"),
            (CLS_OBJECT, b"Object"),
            (CLS_STRING, b"String"),
            (CLS_SYMBOL, b"Symbol"),
            (ID_DUNDER_ID, b"__id__"),
            (ID_COERCE, b"coerce"),
            (ID_DOWNTO, b"downto"),
            (ID_EMPTY_P, b"empty?"),
            (ID_EQUAL_P, b"equal?"),
            (ID_EXTEND, b"extend"),
            (ID_FORMAT, b"format"),
            (ID_FREEZE, b"freeze"),
            (ID_LAMBDA, b"lambda"),
            (ID_LENGTH, b"length"),
            (ID_REJECT, b"reject"),
            (ID_SELECT, b"select"),
            (ID_TO_STR, b"to_str"),
            (ID_TO_SYM, b"to_sym"),
            (ID_VALUES, b"values"),
            (CLS_INTEGER, b"Integer"),
            (CLS_NUMERIC, b"Numeric"),
            (ID_FROZEN_P, b"frozen?"),
            (ID_INCLUDE, b"include"),
            (ID_INSPECT, b"inspect"),
            (ID_MESSAGE, b"message"),
            (ID_PREPEND, b"prepend"),
            (ID_SPRINTF, b"sprintf"),
            (ID_TO_PROC, b"to_proc"),
            (ID_UNSHIFT, b"unshift"),
            (CLS_KEY_ERROR, b"KeyError"),
            (CLS_NIL_CLASS, b"NilClass"),
            (ID_DUNDER_SEND, b"__send__"),
            (ID_EXTENDED, b"extended"),
            (ID_INCLUDE_P, b"include?"),
            (ID_INCLUDED, b"included"),
            (ID_KIND_OF_P, b"kind_of?"),
            (CLS_EXCEPTION, b"Exception"),
            (CLS_NAME_ERROR, b"NameError"),
            (CLS_TRUE_CLASS, b"TrueClass"),
            (CLS_TYPE_ERROR, b"TypeError"),
            (ID_DUNDER_OUTER, b"__outer__"),
            (ID_BACKTRACE, b"backtrace"),
            (ID_EXCEPTION, b"exception"),
            (ID_INHERITED, b"inherited"),
            (ID_OBJECT_ID, b"object_id"),
            (CLS_COMPARABLE, b"Comparable"),
            (CLS_ENUMERABLE, b"Enumerable"),
            (CLS_FALSE_CLASS, b"FalseClass"),
            (CLS_INDEX_ERROR, b"IndexError"),
            (CLS_RANGE_ERROR, b"RangeError"),
            (ID_DUNDER_METHOD, b"__method__"),
            (ID_INITIALIZE, b"initialize"),
            (CLS_BASIC_OBJECT, b"BasicObject"),
            (CLS_FROZEN_ERROR, b"FrozenError"),
            (ID_ATTR_READER, b"attr_reader"),
            (ID_ATTR_WRITER, b"attr_writer"),
            (ID_RESPOND_TO_P, b"respond_to?"),
            (CLS_RUNTIME_ERROR, b"RuntimeError"),
            (ID_ALIAS_METHOD, b"alias_method"),
            (ID_BLOCK_GIVEN_P, b"block_given?"),
            (ID_EXCLUDE_END_P, b"exclude_end?"),
            (ID_INSTANCE_OF_P, b"instance_of?"),
            (ID_METHOD_ADDED, b"method_added"),
            (CLS_ARGUMENT_ERROR, b"ArgumentError"),
            (CLS_NO_METHOD_ERROR, b"NoMethodError"),
            (CLS_STANDARD_ERROR, b"StandardError"),
            (CLS_STOP_ITERATION, b"StopIteration"),
            (ID_DUNDER_CLASSNAME, b"__classname__"),
            (ID_ATTR_ACCESSOR, b"attr_accessor"),
            (ID_CONST_MISSING, b"const_missing"),
            (ID_DEFINE_METHOD, b"define_method"),
            (ID_INSTANCE_EVAL, b"instance_eval"),
            (ID_INSTANCE_EXEC, b"instance_exec"),
            (CLS_LOCAL_JUMP_ERROR, b"LocalJumpError"),
            (ID_METHOD_MISSING, b"method_missing"),
            (ID_EACH_WITH_INDEX, b"each_with_index"),
            (ID_INITIALIZE_COPY, b"initialize_copy"),
            (ID_SINGLETON_CLASS, b"singleton_class"),
            (CLS_FLOAT_DOMAIN_ERROR, b"FloatDomainError"),
            (CLS_ZERO_DIVISION_ERROR, b"ZeroDivisionError"),
            (CLS_NOT_IMPLEMENTED_ERROR, b"NotImplementedError"),
            (ID_RESPOND_TO_MISSING_P, b"respond_to_missing?"),
            (ID_INSTANCE_VARIABLE_GET, b"instance_variable_get"),
            (ID_INSTANCE_VARIABLE_SET, b"instance_variable_set"),
        ];

        assert_eq!(expected.len(), CATALOG_MAX as usize);
        for (sym, name) in expected {
            assert_eq!(name_of(*sym), Some(*name));
            assert_eq!(find(name), Some(*sym));
        }
    }
}
