use std::hash::Hasher;

use rustc_hash::FxHasher;

use super::window::SlidingWindow;
use super::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};

/// Number of prefix buckets. A power of two so the hash can be masked down.
const BUCKET_COUNT: usize = 1 << 12;
/// Candidate positions remembered per bucket. This bounds the cost of one
/// search at eight byte-run comparisons, however long the input gets.
const BUCKET_SLOTS: usize = 8;
/// Slot value meaning "nothing stored here".
const EMPTY: u32 = u32::MAX;

/// A match against the window: `length` bytes identical to those starting
/// `distance` positions back from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

/// Index from 3-byte prefixes to the recent window positions starting with
/// them.
///
/// Each bucket is a small ring of absolute positions, overwritten oldest
/// first. Entries are added as bytes are consumed and dropped when their
/// position ages out of the window, so every stored position is within
/// WINDOW_SIZE of the cursor.
pub struct MatchIndex {
    /// BUCKET_COUNT ring buckets of BUCKET_SLOTS absolute positions each.
    slots: Vec<u32>,
    /// Per-bucket cursor to the slot that will be overwritten next.
    cursors: Vec<u8>,
    /// Bucket each window slot was last filed under, so expiry can find it.
    filed: Vec<u16>,
}

fn bucket_of(prefix: [u8; MIN_MATCH]) -> usize {
    let mut h = FxHasher::default();
    h.write(&prefix);
    h.finish() as usize & (BUCKET_COUNT - 1)
}

impl MatchIndex {
    pub fn new() -> Self {
        Self {
            slots: vec![EMPTY; BUCKET_COUNT * BUCKET_SLOTS],
            cursors: vec![0; BUCKET_COUNT],
            filed: vec![0; WINDOW_SIZE],
        }
    }

    /// Record that `prefix` begins at absolute position `pos`.
    pub fn insert(&mut self, prefix: [u8; MIN_MATCH], pos: usize) {
        let bucket = bucket_of(prefix);
        let cursor = self.cursors[bucket] as usize;
        self.slots[bucket * BUCKET_SLOTS + cursor] = pos as u32;
        self.cursors[bucket] = ((cursor + 1) % BUCKET_SLOTS) as u8;
        self.filed[pos & (WINDOW_SIZE - 1)] = bucket as u16;
    }

    /// Drop the entry for a position that has aged out of the window. A
    /// position that was never filed (or was already overwritten) leaves the
    /// index unchanged.
    pub fn expire(&mut self, pos: usize) {
        let bucket = self.filed[pos & (WINDOW_SIZE - 1)] as usize;
        for slot in &mut self.slots[bucket * BUCKET_SLOTS..(bucket + 1) * BUCKET_SLOTS] {
            if *slot == pos as u32 {
                *slot = EMPTY;
            }
        }
    }

    /// Longest match between the window contents and the current lookahead.
    ///
    /// Prefers the longest length; among equal lengths, the smallest
    /// distance. Returns None when nothing reaches MIN_MATCH.
    pub fn find_longest(&self, window: &SlidingWindow) -> Option<Match> {
        let avail = window.lookahead_len();
        if avail < MIN_MATCH {
            return None;
        }
        let limit = avail.min(MAX_MATCH);
        let prefix = [
            window.lookahead_at(0),
            window.lookahead_at(1),
            window.lookahead_at(2),
        ];
        let bucket = bucket_of(prefix);
        let base = bucket * BUCKET_SLOTS;
        let newest = self.cursors[bucket] as usize;
        let pos = window.position();
        let mut best: Option<Match> = None;

        // Walk the bucket newest entry first, so the first candidate seen at
        // any given length is also the nearest one.
        for back in 1..=BUCKET_SLOTS {
            let slot = self.slots[base + (newest + BUCKET_SLOTS - back) % BUCKET_SLOTS];
            if slot == EMPTY {
                continue;
            }
            let candidate = slot as usize;
            debug_assert!(candidate < pos && pos - candidate <= WINDOW_SIZE);
            let distance = pos - candidate;
            let length = match_length(window, distance, limit);
            if length >= MIN_MATCH && best.map_or(true, |m| length > m.length) {
                best = Some(Match { distance, length });
                if length == limit {
                    break;
                }
            }
        }
        best
    }
}

impl Default for MatchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Count how many lookahead bytes agree with the window contents starting
/// `distance` back. A match may run past the cursor into bytes it would
/// itself produce, so once the candidate run crosses the cursor the
/// comparison continues against the lookahead.
fn match_length(window: &SlidingWindow, distance: usize, limit: usize) -> usize {
    let mut length = 0;
    while length < limit {
        let candidate = if length < distance {
            window.byte_at(distance - length)
        } else {
            window.lookahead_at(length - distance)
        };
        if candidate != window.lookahead_at(length) {
            break;
        }
        length += 1;
    }
    length
}
