//! Named handles for every catalog entry.
//!
//! Operators are prefixed `OP_`, method and variable names `ID_`, class and
//! module names `CLS_`. Predicate names ending in `?` get a `_P` suffix and
//! double-underscore names a `DUNDER_` infix.

use crate::symbol::Symbol;

/// Known symbol for `!`
pub const OP_NOT: Symbol = Symbol::catalog(1);
/// Known symbol for `%`
pub const OP_MOD: Symbol = Symbol::catalog(2);
/// Known symbol for `&`
pub const OP_AND: Symbol = Symbol::catalog(3);
/// Known symbol for `*`
pub const OP_MUL: Symbol = Symbol::catalog(4);
/// Known symbol for `+`
pub const OP_ADD: Symbol = Symbol::catalog(5);
/// Known symbol for `-`
pub const OP_SUB: Symbol = Symbol::catalog(6);
/// Known symbol for `/`
pub const OP_DIV: Symbol = Symbol::catalog(7);
/// Known symbol for `<`
pub const OP_LT: Symbol = Symbol::catalog(8);
/// Known symbol for `>`
pub const OP_GT: Symbol = Symbol::catalog(9);
/// Known symbol for `^`
pub const OP_XOR: Symbol = Symbol::catalog(10);
/// Known symbol for the backtick operator
pub const OP_TICK: Symbol = Symbol::catalog(11);
/// Known symbol for `p`
pub const ID_P: Symbol = Symbol::catalog(12);
/// Known symbol for `|`
pub const OP_OR: Symbol = Symbol::catalog(13);
/// Known symbol for `~`
pub const OP_NEG: Symbol = Symbol::catalog(14);
/// Known symbol for `!=`
pub const OP_NEQ: Symbol = Symbol::catalog(15);
/// Known symbol for `!~`
pub const OP_NMATCH: Symbol = Symbol::catalog(16);
/// Known symbol for `**`
pub const OP_POW: Symbol = Symbol::catalog(17);
/// Known symbol for `+@`
pub const OP_PLUS: Symbol = Symbol::catalog(18);
/// Known symbol for `-@`
pub const OP_MINUS: Symbol = Symbol::catalog(19);
/// Known symbol for `<<`
pub const OP_LSHIFT: Symbol = Symbol::catalog(20);
/// Known symbol for `<=`
pub const OP_LE: Symbol = Symbol::catalog(21);
/// Known symbol for `==`
pub const OP_EQ: Symbol = Symbol::catalog(22);
/// Known symbol for `=~`
pub const OP_MATCH: Symbol = Symbol::catalog(23);
/// Known symbol for `>=`
pub const OP_GE: Symbol = Symbol::catalog(24);
/// Known symbol for `>>`
pub const OP_RSHIFT: Symbol = Symbol::catalog(25);
/// Known symbol for `[]`
pub const OP_AREF: Symbol = Symbol::catalog(26);
/// Known symbol for `<=>`
pub const OP_CMP: Symbol = Symbol::catalog(27);
/// Known symbol for `===`
pub const OP_EQQ: Symbol = Symbol::catalog(28);
/// Known symbol for `[]=`
pub const OP_ASET: Symbol = Symbol::catalog(29);
/// Known symbol for `dig`
pub const ID_DIG: Symbol = Symbol::catalog(30);
/// Known symbol for `dup`
pub const ID_DUP: Symbol = Symbol::catalog(31);
/// Known symbol for `end`
pub const ID_END: Symbol = Symbol::catalog(32);
/// Known symbol for `map`
pub const ID_MAP: Symbol = Symbol::catalog(33);
/// Known symbol for `new`
pub const ID_NEW: Symbol = Symbol::catalog(34);
/// Known symbol for `pop`
pub const ID_POP: Symbol = Symbol::catalog(35);
/// Known symbol for `Hash`
pub const CLS_HASH: Symbol = Symbol::catalog(36);
/// Known symbol for `Proc`
pub const CLS_PROC: Symbol = Symbol::catalog(37);
/// Known symbol for `call`
pub const ID_CALL: Symbol = Symbol::catalog(38);
/// Known symbol for `each`
pub const ID_EACH: Symbol = Symbol::catalog(39);
/// Known symbol for `eql?`
pub const ID_EQL_P: Symbol = Symbol::catalog(40);
/// Known symbol for `hash`
pub const ID_HASH: Symbol = Symbol::catalog(41);
/// Known symbol for `keys`
pub const ID_KEYS: Symbol = Symbol::catalog(42);
/// Known symbol for `last`
pub const ID_LAST: Symbol = Symbol::catalog(43);
/// Known symbol for `loop`
pub const ID_LOOP: Symbol = Symbol::catalog(44);
/// Known symbol for `nil?`
pub const ID_NIL_P: Symbol = Symbol::catalog(45);
/// Known symbol for `proc`
pub const ID_PROC: Symbol = Symbol::catalog(46);
/// Known symbol for `push`
pub const ID_PUSH: Symbol = Symbol::catalog(47);
/// Known symbol for `puts`
pub const ID_PUTS: Symbol = Symbol::catalog(48);
/// Known symbol for `send`
pub const ID_SEND: Symbol = Symbol::catalog(49);
/// Known symbol for `size`
pub const ID_SIZE: Symbol = Symbol::catalog(50);
/// Known symbol for `step`
pub const ID_STEP: Symbol = Symbol::catalog(51);
/// Known symbol for `succ`
pub const ID_SUCC: Symbol = Symbol::catalog(52);
/// Known symbol for `to_a`
pub const ID_TO_A: Symbol = Symbol::catalog(53);
/// Known symbol for `to_f`
pub const ID_TO_F: Symbol = Symbol::catalog(54);
/// Known symbol for `to_h`
pub const ID_TO_H: Symbol = Symbol::catalog(55);
/// Known symbol for `to_i`
pub const ID_TO_I: Symbol = Symbol::catalog(56);
/// Known symbol for `to_s`
pub const ID_TO_S: Symbol = Symbol::catalog(57);
/// Known symbol for `upto`
pub const ID_UPTO: Symbol = Symbol::catalog(58);
/// Known symbol for `Array`
pub const CLS_ARRAY: Symbol = Symbol::catalog(59);
/// Known symbol for `Class`
pub const CLS_CLASS: Symbol = Symbol::catalog(60);
/// Known symbol for `Float`
pub const CLS_FLOAT: Symbol = Symbol::catalog(61);
/// Known symbol for `Range`
pub const CLS_RANGE: Symbol = Symbol::catalog(62);
/// Known symbol for `begin`
pub const ID_BEGIN: Symbol = Symbol::catalog(63);
/// Known symbol for `class`
pub const ID_CLASS: Symbol = Symbol::catalog(64);
/// Known symbol for `clone`
pub const ID_CLONE: Symbol = Symbol::catalog(65);
/// Known symbol for `fetch`
pub const ID_FETCH: Symbol = Symbol::catalog(66);
/// Known symbol for `first`
pub const ID_FIRST: Symbol = Symbol::catalog(67);
/// Known symbol for `is_a?`
pub const ID_IS_A_P: Symbol = Symbol::catalog(68);
/// Known symbol for `print`
pub const ID_PRINT: Symbol = Symbol::catalog(69);
/// Known symbol for `raise`
pub const ID_RAISE: Symbol = Symbol::catalog(70);
/// Known symbol for `shift`
pub const ID_SHIFT: Symbol = Symbol::catalog(71);
/// Known symbol for `times`
pub const ID_TIMES: Symbol = Symbol::catalog(72);
/// Known symbol for `Kernel`
pub const CLS_KERNEL: Symbol = Symbol::catalog(73);
/// Known symbol for `Module`
pub const CLS_MODULE: Symbol = Symbol::catalog(74);
/// Known symbol for `Object`
pub const CLS_OBJECT: Symbol = Symbol::catalog(75);
/// Known symbol for `String`
pub const CLS_STRING: Symbol = Symbol::catalog(76);
/// Known symbol for `Symbol`
pub const CLS_SYMBOL: Symbol = Symbol::catalog(77);
/// Known symbol for `__id__`
pub const ID_DUNDER_ID: Symbol = Symbol::catalog(78);
/// Known symbol for `coerce`
pub const ID_COERCE: Symbol = Symbol::catalog(79);
/// Known symbol for `downto`
pub const ID_DOWNTO: Symbol = Symbol::catalog(80);
/// Known symbol for `empty?`
pub const ID_EMPTY_P: Symbol = Symbol::catalog(81);
/// Known symbol for `equal?`
pub const ID_EQUAL_P: Symbol = Symbol::catalog(82);
/// Known symbol for `extend`
pub const ID_EXTEND: Symbol = Symbol::catalog(83);
/// Known symbol for `format`
pub const ID_FORMAT: Symbol = Symbol::catalog(84);
/// Known symbol for `freeze`
pub const ID_FREEZE: Symbol = Symbol::catalog(85);
/// Known symbol for `lambda`
pub const ID_LAMBDA: Symbol = Symbol::catalog(86);
/// Known symbol for `length`
pub const ID_LENGTH: Symbol = Symbol::catalog(87);
/// Known symbol for `reject`
pub const ID_REJECT: Symbol = Symbol::catalog(88);
/// Known symbol for `select`
pub const ID_SELECT: Symbol = Symbol::catalog(89);
/// Known symbol for `to_str`
pub const ID_TO_STR: Symbol = Symbol::catalog(90);
/// Known symbol for `to_sym`
pub const ID_TO_SYM: Symbol = Symbol::catalog(91);
/// Known symbol for `values`
pub const ID_VALUES: Symbol = Symbol::catalog(92);
/// Known symbol for `Integer`
pub const CLS_INTEGER: Symbol = Symbol::catalog(93);
/// Known symbol for `Numeric`
pub const CLS_NUMERIC: Symbol = Symbol::catalog(94);
/// Known symbol for `frozen?`
pub const ID_FROZEN_P: Symbol = Symbol::catalog(95);
/// Known symbol for `include`
pub const ID_INCLUDE: Symbol = Symbol::catalog(96);
/// Known symbol for `inspect`
pub const ID_INSPECT: Symbol = Symbol::catalog(97);
/// Known symbol for `message`
pub const ID_MESSAGE: Symbol = Symbol::catalog(98);
/// Known symbol for `prepend`
pub const ID_PREPEND: Symbol = Symbol::catalog(99);
/// Known symbol for `sprintf`
pub const ID_SPRINTF: Symbol = Symbol::catalog(100);
/// Known symbol for `to_proc`
pub const ID_TO_PROC: Symbol = Symbol::catalog(101);
/// Known symbol for `unshift`
pub const ID_UNSHIFT: Symbol = Symbol::catalog(102);
/// Known symbol for `KeyError`
pub const CLS_KEY_ERROR: Symbol = Symbol::catalog(103);
/// Known symbol for `NilClass`
pub const CLS_NIL_CLASS: Symbol = Symbol::catalog(104);
/// Known symbol for `__send__`
pub const ID_DUNDER_SEND: Symbol = Symbol::catalog(105);
/// Known symbol for `extended`
pub const ID_EXTENDED: Symbol = Symbol::catalog(106);
/// Known symbol for `include?`
pub const ID_INCLUDE_P: Symbol = Symbol::catalog(107);
/// Known symbol for `included`
pub const ID_INCLUDED: Symbol = Symbol::catalog(108);
/// Known symbol for `kind_of?`
pub const ID_KIND_OF_P: Symbol = Symbol::catalog(109);
/// Known symbol for `Exception`
pub const CLS_EXCEPTION: Symbol = Symbol::catalog(110);
/// Known symbol for `NameError`
pub const CLS_NAME_ERROR: Symbol = Symbol::catalog(111);
/// Known symbol for `TrueClass`
pub const CLS_TRUE_CLASS: Symbol = Symbol::catalog(112);
/// Known symbol for `TypeError`
pub const CLS_TYPE_ERROR: Symbol = Symbol::catalog(113);
/// Known symbol for `__outer__`
pub const ID_DUNDER_OUTER: Symbol = Symbol::catalog(114);
/// Known symbol for `backtrace`
pub const ID_BACKTRACE: Symbol = Symbol::catalog(115);
/// Known symbol for `exception`
pub const ID_EXCEPTION: Symbol = Symbol::catalog(116);
/// Known symbol for `inherited`
pub const ID_INHERITED: Symbol = Symbol::catalog(117);
/// Known symbol for `object_id`
pub const ID_OBJECT_ID: Symbol = Symbol::catalog(118);
/// Known symbol for `Comparable`
pub const CLS_COMPARABLE: Symbol = Symbol::catalog(119);
/// Known symbol for `Enumerable`
pub const CLS_ENUMERABLE: Symbol = Symbol::catalog(120);
/// Known symbol for `FalseClass`
pub const CLS_FALSE_CLASS: Symbol = Symbol::catalog(121);
/// Known symbol for `IndexError`
pub const CLS_INDEX_ERROR: Symbol = Symbol::catalog(122);
/// Known symbol for `RangeError`
pub const CLS_RANGE_ERROR: Symbol = Symbol::catalog(123);
/// Known symbol for `__method__`
pub const ID_DUNDER_METHOD: Symbol = Symbol::catalog(124);
/// Known symbol for `initialize`
pub const ID_INITIALIZE: Symbol = Symbol::catalog(125);
/// Known symbol for `BasicObject`
pub const CLS_BASIC_OBJECT: Symbol = Symbol::catalog(126);
/// Known symbol for `FrozenError`
pub const CLS_FROZEN_ERROR: Symbol = Symbol::catalog(127);
/// Known symbol for `attr_reader`
pub const ID_ATTR_READER: Symbol = Symbol::catalog(128);
/// Known symbol for `attr_writer`
pub const ID_ATTR_WRITER: Symbol = Symbol::catalog(129);
/// Known symbol for `respond_to?`
pub const ID_RESPOND_TO_P: Symbol = Symbol::catalog(130);
/// Known symbol for `RuntimeError`
pub const CLS_RUNTIME_ERROR: Symbol = Symbol::catalog(131);
/// Known symbol for `alias_method`
pub const ID_ALIAS_METHOD: Symbol = Symbol::catalog(132);
/// Known symbol for `block_given?`
pub const ID_BLOCK_GIVEN_P: Symbol = Symbol::catalog(133);
/// Known symbol for `exclude_end?`
pub const ID_EXCLUDE_END_P: Symbol = Symbol::catalog(134);
/// Known symbol for `instance_of?`
pub const ID_INSTANCE_OF_P: Symbol = Symbol::catalog(135);
/// Known symbol for `method_added`
pub const ID_METHOD_ADDED: Symbol = Symbol::catalog(136);
/// Known symbol for `ArgumentError`
pub const CLS_ARGUMENT_ERROR: Symbol = Symbol::catalog(137);
/// Known symbol for `NoMethodError`
pub const CLS_NO_METHOD_ERROR: Symbol = Symbol::catalog(138);
/// Known symbol for `StandardError`
pub const CLS_STANDARD_ERROR: Symbol = Symbol::catalog(139);
/// Known symbol for `StopIteration`
pub const CLS_STOP_ITERATION: Symbol = Symbol::catalog(140);
/// Known symbol for `__classname__`
pub const ID_DUNDER_CLASSNAME: Symbol = Symbol::catalog(141);
/// Known symbol for `attr_accessor`
pub const ID_ATTR_ACCESSOR: Symbol = Symbol::catalog(142);
/// Known symbol for `const_missing`
pub const ID_CONST_MISSING: Symbol = Symbol::catalog(143);
/// Known symbol for `define_method`
pub const ID_DEFINE_METHOD: Symbol = Symbol::catalog(144);
/// Known symbol for `instance_eval`
pub const ID_INSTANCE_EVAL: Symbol = Symbol::catalog(145);
/// Known symbol for `instance_exec`
pub const ID_INSTANCE_EXEC: Symbol = Symbol::catalog(146);
/// Known symbol for `LocalJumpError`
pub const CLS_LOCAL_JUMP_ERROR: Symbol = Symbol::catalog(147);
/// Known symbol for `method_missing`
pub const ID_METHOD_MISSING: Symbol = Symbol::catalog(148);
/// Known symbol for `each_with_index`
pub const ID_EACH_WITH_INDEX: Symbol = Symbol::catalog(149);
/// Known symbol for `initialize_copy`
pub const ID_INITIALIZE_COPY: Symbol = Symbol::catalog(150);
/// Known symbol for `singleton_class`
pub const ID_SINGLETON_CLASS: Symbol = Symbol::catalog(151);
/// Known symbol for `FloatDomainError`
pub const CLS_FLOAT_DOMAIN_ERROR: Symbol = Symbol::catalog(152);
/// Known symbol for `ZeroDivisionError`
pub const CLS_ZERO_DIVISION_ERROR: Symbol = Symbol::catalog(153);
/// Known symbol for `NotImplementedError`
pub const CLS_NOT_IMPLEMENTED_ERROR: Symbol = Symbol::catalog(154);
/// Known symbol for `respond_to_missing?`
pub const ID_RESPOND_TO_MISSING_P: Symbol = Symbol::catalog(155);
/// Known symbol for `instance_variable_get`
pub const ID_INSTANCE_VARIABLE_GET: Symbol = Symbol::catalog(156);
/// Known symbol for `instance_variable_set`
pub const ID_INSTANCE_VARIABLE_SET: Symbol = Symbol::catalog(157);
