//! ember-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Small building blocks shared by the ember runtime components. Everything
//! here is allocation-light and free of global state:
//!
//! - [`packed_int`]: variable-width unsigned integer codec used for length
//!   prefixes in owned name buffers.
//! - [`byte_hash`]: one-byte hash primitive that drives bucket placement in
//!   the dynamic symbol table.
//! - [`index_vec`]: vectors addressed by typed indices.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. ZERO-COST ABSTRACTIONS
//!    Typed indices and codec helpers compile down to plain integer code.
//!
//! 2. TYPE SAFETY
//!    Distinct index spaces get distinct index types, so a table slot can
//!    never be confused with a raw handle value.
//
// ============================================================================
// PACKED INTEGERS
// ============================================================================
//
// Lengths are stored little-endian in base-128 groups. Every byte carries
// seven payload bits; the high bit says "another byte follows".
//
// ```
//   300 = 0b1_0010_1100
//
//   byte 0: 1 0101100   (continuation, low 7 bits)
//   byte 1: 0 0000010   (last, next 7 bits)
// ```
//
// A u32 never needs more than five bytes. Names are bounded well below
// 2^21 bytes, so in practice prefixes are one to three bytes long.

pub mod byte_hash;
pub mod error;
pub mod index_vec;
pub mod packed_int;

pub use byte_hash::{AHashByteHash, ByteHash};
pub use error::{PackedIntError, PackedIntResult};
pub use index_vec::{Idx, IndexVec};
