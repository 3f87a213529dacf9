use crate::error::BreaksError;
use crate::limits;
use crate::model::Breaks;
use std::collections::VecDeque;
use tracing::trace;
use xxhash_rust::xxh3::xxh3_64;

struct Entry {
    hash: u64,
    k: usize,
    // sorted bit patterns, compared on hash hit
    sorted: Vec<u64>,
    breaks: Breaks,
}

/// Memoizes natural-breaks results keyed by (sorted input hash, class count).
///
/// Inputs are compared exactly on a hash hit, so a collision recomputes
/// instead of returning another input's breaks. Errors are not cached.
pub struct BreaksCache {
    entries: VecDeque<Entry>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for BreaksCache {
    fn default() -> Self { BreaksCache::with_capacity(limits::CACHE_CAPACITY) }
}

impl BreaksCache {
    pub fn new() -> BreaksCache { BreaksCache::default() }

    pub fn with_capacity(capacity: usize) -> BreaksCache {
        BreaksCache {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub fn compute(&mut self, values: &[f64], k: usize) -> Result<Breaks, BreaksError> {
        let sorted = canonical_bits(values);
        let hash = hash_bits(&sorted);
        if let Some(e) = self
            .entries
            .iter()
            .find(|e| e.hash == hash && e.k == k && e.sorted == sorted)
        {
            self.hits += 1;
            trace!(hash, k, "breaks cache hit");
            return Ok(e.breaks.clone());
        }
        self.misses += 1;
        let breaks = Breaks::compute(values, k)?;
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Entry {
            hash,
            k,
            sorted,
            breaks: breaks.clone(),
        });
        Ok(breaks)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn hits(&self) -> u64 { self.hits }
    pub fn misses(&self) -> u64 { self.misses }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

// Sorted by total order so every permutation of a multiset maps to one key.
fn canonical_bits(values: &[f64]) -> Vec<u64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v.into_iter().map(f64::to_bits).collect()
}

fn hash_bits(bits: &[u64]) -> u64 {
    let mut bytes = Vec::with_capacity(bits.len() * 8);
    for b in bits {
        bytes.extend_from_slice(&b.to_le_bytes());
    }
    xxh3_64(&bytes)
}
