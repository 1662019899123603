//! Catalog table data.
//!
//! Sorted by length first, then by byte content. A handle is the 1-based
//! position in this list, so entries may only be appended in sorted position
//! together with a matching update of `known.rs`; the order is checked at
//! compile time.

pub(super) const NAMES: &[&[u8]] = &[
    b"!",
    b"%",
    b"&",
    b"*",
    b"+",
    b"-",
    b"/",
    b"<",
    b">",
    b"^",
    b"`",
    b"p",
    b"|",
    b"~",
    b"!=",
    b"!~",
    b"**",
    b"+@",
    b"-@",
    b"<<",
    b"<=",
    b"==",
    b"=~",
    b">=",
    b">>",
    b"[]",
    b"<=>",
    b"===",
    b"[]=",
    b"dig",
    b"dup",
    b"end",
    b"map",
    b"new",
    b"pop",
    b"Hash",
    b"Proc",
    b"call",
    b"each",
    b"eql?",
    b"hash",
    b"keys",
    b"last",
    b"loop",
    b"nil?",
    b"proc",
    b"push",
    b"puts",
    b"send",
    b"size",
    b"step",
    b"succ",
    b"to_a",
    b"to_f",
    b"to_h",
    b"to_i",
    b"to_s",
    b"upto",
    b"Array",
    b"Class",
    b"Float",
    b"Range",
    b"begin",
    b"class",
    b"clone",
    b"fetch",
    b"first",
    b"is_a?",
    b"print",
    b"raise",
    b"shift",
    b"times",
    b"Kernel",
    b"Module",
    b"Object",
    b"String",
    b"Symbol",
    b"__id__",
    b"coerce",
    b"downto",
    b"empty?",
    b"equal?",
    b"extend",
    b"format",
    b"freeze",
    b"lambda",
    b"length",
    b"reject",
    b"select",
    b"to_str",
    b"to_sym",
    b"values",
    b"Integer",
    b"Numeric",
    b"frozen?",
    b"include",
    b"inspect",
    b"message",
    b"prepend",
    b"sprintf",
    b"to_proc",
    b"unshift",
    b"KeyError",
    b"NilClass",
    b"__send__",
    b"extended",
    b"include?",
    b"included",
    b"kind_of?",
    b"Exception",
    b"NameError",
    b"TrueClass",
    b"TypeError",
    b"__outer__",
    b"backtrace",
    b"exception",
    b"inherited",
    b"object_id",
    b"Comparable",
    b"Enumerable",
    b"FalseClass",
    b"IndexError",
    b"RangeError",
    b"__method__",
    b"initialize",
    b"BasicObject",
    b"FrozenError",
    b"attr_reader",
    b"attr_writer",
    b"respond_to?",
    b"RuntimeError",
    b"alias_method",
    b"block_given?",
    b"exclude_end?",
    b"instance_of?",
    b"method_added",
    b"ArgumentError",
    b"NoMethodError",
    b"StandardError",
    b"StopIteration",
    b"__classname__",
    b"attr_accessor",
    b"const_missing",
    b"define_method",
    b"instance_eval",
    b"instance_exec",
    b"LocalJumpError",
    b"method_missing",
    b"each_with_index",
    b"initialize_copy",
    b"singleton_class",
    b"FloatDomainError",
    b"ZeroDivisionError",
    b"NotImplementedError",
    b"respond_to_missing?",
    b"instance_variable_get",
    b"instance_variable_set",
];
