//! Dynamic symbol table.
//!
//! Names that are neither in the catalog nor packable inline are stored
//! here, in insertion order. Slot ids are 1-based and never reused.
//!
//! # Chaining
//!
//! Every slot carries a one-byte link to the previous slot with the same
//! bucket hash:
//!
//! ```text
//!   link == 0      end of chain
//!   link in 1..255 previous same-hash slot is `slot - link`
//!   link == 255    previous same-hash slot is 255 or more slots back;
//!                  scan every slot from `slot - 255` down to 1
//! ```
//!
//! The sentinel keeps the link array at one byte per entry at the cost of a
//! linear scan when a bucket sees long gaps between entries.

use std::fmt;
use std::num::NonZeroU32;

use ember_util::index_vec::{Idx, IndexVec};
use ember_util::{packed_int, ByteHash};
use log::{debug, trace};

use crate::config::InternerConfig;
use crate::error::{SymbolError, SymbolResult};
use crate::symbol::MAX_DYNAMIC_SLOTS;

/// Link value meaning "too far back to encode, scan linearly"
const OVERFLOW_LINK: u8 = u8::MAX;

/// Number of hash buckets (one per hash byte value)
const BUCKETS: usize = 1 << u8::BITS;

/// 1-based position in the dynamic table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SlotId(NonZeroU32);

impl SlotId {
    #[inline]
    pub(crate) fn from_raw(raw: NonZeroU32) -> Self {
        SlotId(raw)
    }

    #[inline]
    pub(crate) fn get(self) -> NonZeroU32 {
        self.0
    }

    /// Slot `distance` positions earlier, if there is one
    #[inline]
    fn back(self, distance: u32) -> Option<SlotId> {
        self.0
            .get()
            .checked_sub(distance)
            .and_then(NonZeroU32::new)
            .map(SlotId)
    }
}

impl Idx for SlotId {
    #[inline]
    fn from_usize(idx: usize) -> Self {
        u32::try_from(idx + 1)
            .ok()
            .and_then(NonZeroU32::new)
            .map(SlotId)
            .unwrap_or_else(|| panic!("slot position {} out of range", idx))
    }

    #[inline]
    fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// Storage for one dynamic name
pub(crate) enum StoredName {
    /// Immortal bytes borrowed from the caller, never copied or freed
    Literal(&'static [u8]),
    /// `[packed length][bytes][0]`, owned by the table
    Owned(Box<[u8]>),
}

impl StoredName {
    fn owned(name: &[u8]) -> Self {
        let len = name.len() as u32;
        let mut buf = Vec::with_capacity(packed_int::encoded_len(len) + name.len() + 1);
        packed_int::encode(len, &mut buf);
        buf.extend_from_slice(name);
        buf.push(0);
        StoredName::Owned(buf.into_boxed_slice())
    }

    /// The name bytes, without prefix or terminator
    pub(crate) fn bytes(&self) -> &[u8] {
        match self {
            StoredName::Literal(bytes) => bytes,
            StoredName::Owned(buf) => {
                let (len, consumed) = packed_int::decode(buf)
                    .unwrap_or_else(|err| unreachable!("corrupt owned name prefix: {}", err));
                &buf[consumed..consumed + len as usize]
            }
        }
    }

    fn is_literal(&self) -> bool {
        matches!(self, StoredName::Literal(_))
    }

    fn footprint(&self) -> usize {
        match self {
            StoredName::Literal(_) => 0,
            StoredName::Owned(buf) => buf.len(),
        }
    }
}

impl fmt::Debug for StoredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_literal() { "Literal" } else { "Owned" };
        write!(f, "{}(\"{}\")", kind, self.bytes().escape_ascii())
    }
}

/// Event counters kept by the table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TableCounters {
    pub(crate) growths: usize,
    pub(crate) collisions: usize,
    pub(crate) overflow_links: usize,
    pub(crate) literal_count: usize,
    pub(crate) owned_bytes: usize,
}

/// Growable, hash-chained table of dynamic names
pub(crate) struct SymbolTable<H> {
    names: IndexVec<SlotId, StoredName>,
    links: IndexVec<SlotId, u8>,
    heads: [Option<SlotId>; BUCKETS],
    capacity: usize,
    config: InternerConfig,
    hasher: H,
    counters: TableCounters,
}

impl<H: ByteHash> SymbolTable<H> {
    /// Create an empty table; nothing is allocated until the first insert
    pub(crate) fn new(config: InternerConfig, hasher: H) -> Self {
        Self {
            names: IndexVec::new(),
            links: IndexVec::new(),
            heads: [None; BUCKETS],
            capacity: 0,
            config,
            hasher,
            counters: TableCounters::default(),
        }
    }

    /// Bucket hash of `name`
    #[inline]
    pub(crate) fn hash(&self, name: &[u8]) -> u8 {
        self.hasher.hash_bytes(name)
    }

    /// Find the slot holding `name`, given its bucket hash
    pub(crate) fn lookup(&self, name: &[u8], hash: u8) -> Option<SlotId> {
        let mut slot = self.heads[hash as usize]?;
        loop {
            if self.matches(slot, name) {
                return Some(slot);
            }
            match self.links[slot] {
                0 => return None,
                OVERFLOW_LINK => return self.scan_from(slot.back(u32::from(OVERFLOW_LINK))?, name),
                distance => slot = slot.back(u32::from(distance))?,
            }
        }
    }

    /// Check every slot from `start` down to the first one
    fn scan_from(&self, start: SlotId, name: &[u8]) -> Option<SlotId> {
        (1..=start.get().get())
            .rev()
            .filter_map(NonZeroU32::new)
            .map(SlotId)
            .find(|&slot| self.matches(slot, name))
    }

    #[inline]
    fn matches(&self, slot: SlotId, name: &[u8]) -> bool {
        self.names[slot].bytes() == name
    }

    /// Store a private copy of `name`
    ///
    /// The caller has already established that `name` is absent.
    pub(crate) fn insert(&mut self, name: &[u8], hash: u8) -> SymbolResult<SlotId> {
        self.push(StoredName::owned(name), hash)
    }

    /// Store `name` by reference when it contains no NUL byte, otherwise as
    /// a private copy
    pub(crate) fn insert_literal(&mut self, name: &'static [u8], hash: u8) -> SymbolResult<SlotId> {
        let stored = if name.contains(&0) {
            StoredName::owned(name)
        } else {
            StoredName::Literal(name)
        };
        self.push(stored, hash)
    }

    fn push(&mut self, stored: StoredName, hash: u8) -> SymbolResult<SlotId> {
        if self.names.len() as u64 >= u64::from(MAX_DYNAMIC_SLOTS) {
            return Err(SymbolError::TableExhausted {
                count: self.names.len(),
            });
        }
        if self.names.len() == self.capacity {
            self.grow();
        }

        let next = SlotId::from_usize(self.names.len());
        let link = match self.heads[hash as usize] {
            None => 0,
            Some(prev) => {
                self.counters.collisions += 1;
                let distance = next.0.get() - prev.0.get();
                if distance >= u32::from(OVERFLOW_LINK) {
                    self.counters.overflow_links += 1;
                    if self.counters.overflow_links == 1 {
                        debug!(
                            "symbol table: bucket {:#04x} chain overflowed at slot {} (distance {})",
                            hash, next.0, distance
                        );
                    }
                    OVERFLOW_LINK
                } else {
                    distance as u8
                }
            }
        };

        trace!(
            "symbol table: slot {} hash {:#04x} link {} {:?}",
            next.0,
            hash,
            link,
            stored
        );

        if stored.is_literal() {
            self.counters.literal_count += 1;
        }
        self.counters.owned_bytes += stored.footprint();

        let slot = self.names.push(stored);
        self.links.push(link);
        debug_assert_eq!(slot, next);
        self.heads[hash as usize] = Some(slot);
        Ok(slot)
    }

    fn grow(&mut self) {
        let old = self.capacity;
        let new = self.config.next_capacity(old);
        self.names.reserve_exact(new - self.names.len());
        self.links.reserve_exact(new - self.links.len());
        self.capacity = new;
        self.counters.growths += 1;
        debug!("symbol table grew from {} to {} slots", old, new);
    }

    /// Name stored at `slot`, `None` if the slot was never issued
    #[inline]
    pub(crate) fn name_of(&self, slot: SlotId) -> Option<&[u8]> {
        self.names.get(slot).map(StoredName::bytes)
    }

    /// Whether `slot` refers to caller-owned immortal bytes
    pub(crate) fn is_literal(&self, slot: SlotId) -> bool {
        self.names.get(slot).is_some_and(StoredName::is_literal)
    }

    /// Number of stored names
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Logical capacity under the growth policy
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn counters(&self) -> &TableCounters {
        &self.counters
    }

    /// Release every owned name; literal names are left untouched
    pub(crate) fn teardown(self) {
        if self.names.is_empty() {
            debug!("symbol table teardown: nothing allocated");
            return;
        }
        for (slot, stored) in self.names.iter_enumerated() {
            if !stored.is_literal() {
                trace!("symbol table: releasing slot {} {:?}", slot.0, stored);
            }
        }
        debug!(
            "symbol table teardown: {} entries ({} literal, {} owned bytes), {} growths, {} collisions, {} overflow links",
            self.names.len(),
            self.counters.literal_count,
            self.counters.owned_bytes,
            self.counters.growths,
            self.counters.collisions,
            self.counters.overflow_links
        );
    }
}
