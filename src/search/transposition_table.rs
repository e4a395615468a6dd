//! Bounded transposition table keyed by the full position signature.
//!
//! The table is a fixed number of slots indexed by the key's hash, with the
//! complete signature stored in each entry so a probe never trusts a hash
//! collision. Entries carry a bound kind so alpha-beta may only reuse a
//! score when the stored bound actually applies at the probing node, and
//! the replacement policy is injected at construction.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Full position signature: the 64-square occupancy encoding plus the four
/// castling flags and the en-passant target. Two boards with equal keys are
/// identical for search purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    squares: [u8; 64],
    castling_rights: u8,
    en_passant_target: Option<Square>,
}

impl PositionKey {
    pub fn from_board(board: &Board) -> Self {
        let mut squares = [0u8; 64];
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = board.piece_at((row, col)) {
                    let code = 1 + (piece.color.index() * 6 + piece.kind.index()) as u8;
                    squares[(row * 8 + col) as usize] = code;
                }
            }
        }
        Self {
            squares,
            castling_rights: board.castling_rights,
            en_passant_target: board.en_passant_target,
        }
    }
}

/// How a stored score relates to the true score of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The search was cut off from below: the true score is >= this one.
    Lower,
    /// The search was cut off from above: the true score is <= this one.
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TranspositionEntry {
    pub key: PositionKey,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

/// Which existing entry a colliding store may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    /// Keep the deeper of the two entries.
    DepthPreferred,
    /// Newest entry always wins.
    AlwaysReplace,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TranspositionEntry>>,
    policy: ReplacementPolicy,
    stats: TableStats,
}

impl TranspositionTable {
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    pub fn new(capacity: usize, policy: ReplacementPolicy) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
            policy,
            stats: TableStats::default(),
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, ReplacementPolicy::DepthPreferred)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TableStats::default();
    }

    #[inline]
    fn idx(&self, key: &PositionKey) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.entries.len()
    }

    /// Look up an entry, verifying the full signature.
    pub fn probe(&mut self, key: &PositionKey) -> Option<TranspositionEntry> {
        self.stats.probes += 1;
        let hit = self.entries[self.idx(key)].filter(|entry| entry.key == *key);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, entry: TranspositionEntry) {
        self.stats.stores += 1;
        let idx = self.idx(&entry.key);
        match self.entries[idx] {
            None => self.entries[idx] = Some(entry),
            Some(existing) => {
                let replace = match self.policy {
                    ReplacementPolicy::AlwaysReplace => true,
                    ReplacementPolicy::DepthPreferred => entry.depth >= existing.depth,
                };
                if replace {
                    self.entries[idx] = Some(entry);
                }
            }
        }
    }
}
