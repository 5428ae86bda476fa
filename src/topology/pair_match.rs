//! `PairMatch`: symmetric lookup keyed by an unordered pair of indices.
//!
//! Keys are canonicalized as `(min, max)` so `(a, b)` and `(b, a)` address the
//! same entry. Each pair holds at most one `u32` payload; writes overwrite.
//! Used for duplicate-edge detection and by the manifold check, which stores
//! an edge id per undirected edge.

use hashbrown::HashMap;

/// Canonical unordered pair `(min, max)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairEntry {
    /// Smaller index.
    pub a: u32,
    /// Larger index.
    pub b: u32,
}

impl PairEntry {
    /// Builds the canonical entry for `(data1, data2)` in either order.
    #[inline]
    pub fn new(data1: u32, data2: u32) -> Self {
        if data1 <= data2 {
            PairEntry { a: data1, b: data2 }
        } else {
            PairEntry { a: data2, b: data1 }
        }
    }
}

/// Map from unordered index pairs to a `u32` payload.
#[derive(Clone, Debug, Default)]
pub struct PairMatch {
    entries: HashMap<PairEntry, u32>,
}

impl PairMatch {
    /// Creates an empty pair map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pair map able to hold `capacity` pairs without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        PairMatch {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Stores `value` for the pair, replacing any previous value.
    #[inline]
    pub fn add_match(&mut self, data1: u32, data2: u32, value: u32) {
        self.entries.insert(PairEntry::new(data1, data2), value);
    }

    /// Returns the value stored for the pair, if any.
    #[inline]
    pub fn check_match(&self, data1: u32, data2: u32) -> Option<u32> {
        self.entries.get(&PairEntry::new(data1, data2)).copied()
    }

    /// Removes the pair. Removing an absent pair does nothing.
    #[inline]
    pub fn delete_match(&mut self, data1: u32, data2: u32) {
        self.entries.remove(&PairEntry::new(data1, data2));
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
