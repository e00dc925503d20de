use super::END_OF_CHAIN;

use bitvec::prelude::*;

/// State of a single position of the inverse suffix array during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    EndOfChain,
    Linked(usize),
    Ranked(usize),
}

/// Suffix array and inverse suffix array under construction.
///
/// While a position is unranked, its inverse suffix array value is the next position
/// of the chain it belongs to (or `END_OF_CHAIN`). Once ranked, it holds the rank.
/// The `is_ranked` bits tell the two apart, a position never leaves the ranked state.
pub struct Ranking {
    suffix_array: Vec<usize>,
    inverse_suffix_array: Vec<usize>,
    is_ranked: BitVec,
    next_rank: usize,
}

impl Ranking {
    pub fn new(text_len: usize) -> Self {
        Self {
            suffix_array: vec![END_OF_CHAIN; text_len],
            inverse_suffix_array: vec![END_OF_CHAIN; text_len],
            is_ranked: bitvec![0; text_len],
            next_rank: 0,
        }
    }

    pub fn entry(&self, position: usize) -> Entry {
        let value = self.inverse_suffix_array[position];

        if self.is_ranked[position] {
            Entry::Ranked(value)
        } else if value == END_OF_CHAIN {
            Entry::EndOfChain
        } else {
            Entry::Linked(value)
        }
    }

    pub fn rank(&self, position: usize) -> Option<usize> {
        match self.entry(position) {
            Entry::Ranked(rank) => Some(rank),
            _ => None,
        }
    }

    // must only be called for unranked positions
    pub fn next_in_chain(&self, position: usize) -> Option<usize> {
        match self.entry(position) {
            Entry::Linked(next_position) => Some(next_position),
            Entry::EndOfChain => None,
            Entry::Ranked(rank) => {
                unreachable!("position {position} already has rank {rank} and is not part of a chain")
            }
        }
    }

    pub fn is_singleton(&self, chain_head: usize) -> bool {
        self.entry(chain_head) == Entry::EndOfChain
    }

    pub fn link(&mut self, position: usize, next_position: usize) {
        debug_assert!(!self.is_ranked[position]);
        self.inverse_suffix_array[position] = next_position;
    }

    pub fn mark_end_of_chain(&mut self, position: usize) {
        debug_assert!(!self.is_ranked[position]);
        self.inverse_suffix_array[position] = END_OF_CHAIN;
    }

    /// Assigns the smallest unused rank to the suffix starting at `position`.
    pub fn rank_suffix(&mut self, position: usize) {
        debug_assert!(!self.is_ranked[position], "position {position} ranked twice");

        let rank = self.next_rank;
        self.suffix_array[rank] = position;
        self.inverse_suffix_array[position] = rank;
        self.is_ranked.set(position, true);
        self.next_rank += 1;
    }

    pub fn num_ranked(&self) -> usize {
        self.next_rank
    }

    /// Returns the suffix array and the inverse suffix array.
    pub fn into_arrays(self) -> (Vec<usize>, Vec<usize>) {
        debug_assert_eq!(self.next_rank, self.suffix_array.len());
        debug_assert!(self.is_ranked.all());

        (self.suffix_array, self.inverse_suffix_array)
    }
}
