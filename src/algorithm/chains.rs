use super::END_OF_CHAIN;
use crate::Character;

use rustc_hash::FxHashMap;

// larger alphabets use a hash map, because the table would be mostly empty
const DENSE_ALPHABET_LIMIT: usize = 1 << 16;

/// The suffixes reachable from `head` by following chain links, which are exactly
/// the suffixes that share their first `length` characters with the suffix at `head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub head: usize,
    pub length: usize,
}

/// A chain found during a scan, together with the character that tells it apart
/// from the other chains found in the same scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveredChain<C> {
    pub distinguishing_char: C,
    pub chain: Chain,
}

/// Maps a character to the last position seen with that character during one scan.
pub enum ChainRegistry<C> {
    Dense {
        last_positions: Vec<usize>,
        touched_char_ranks: Vec<usize>,
    },
    Sparse {
        last_positions: FxHashMap<C, usize>,
        touched_chars: Vec<C>,
    },
}

impl<C: Character> ChainRegistry<C> {
    /// `None` stands for an alphabet that cannot be indexed by `usize`.
    pub fn for_alphabet_size(alphabet_size: Option<usize>) -> Self {
        match alphabet_size {
            Some(alphabet_size) if alphabet_size <= DENSE_ALPHABET_LIMIT => Self::Dense {
                last_positions: vec![END_OF_CHAIN; alphabet_size],
                touched_char_ranks: Vec::new(),
            },
            _ => Self::Sparse {
                last_positions: FxHashMap::default(),
                touched_chars: Vec::new(),
            },
        }
    }

    /// Resets only the entries written since the last reset.
    pub fn clear(&mut self) {
        match self {
            Self::Dense {
                last_positions,
                touched_char_ranks,
            } => {
                for char_rank in touched_char_ranks.drain(..) {
                    last_positions[char_rank] = END_OF_CHAIN;
                }
            }
            // the map keeps its capacity from the initial scan, so clearing it would cost
            // a pass over the whole alphabet
            Self::Sparse {
                last_positions,
                touched_chars,
            } => {
                for char in touched_chars.drain(..) {
                    last_positions.remove(&char);
                }
            }
        }
    }

    /// Records `position` as the last one seen for the character and returns the previous one.
    pub fn register(&mut self, char: C, position: usize) -> Option<usize> {
        match self {
            Self::Dense {
                last_positions,
                touched_char_ranks,
            } => {
                let char_rank = dense_rank(char, last_positions.len());
                let previous_position = std::mem::replace(&mut last_positions[char_rank], position);

                if previous_position == END_OF_CHAIN {
                    touched_char_ranks.push(char_rank);
                    None
                } else {
                    Some(previous_position)
                }
            }
            Self::Sparse {
                last_positions,
                touched_chars,
            } => {
                let previous_position = last_positions.insert(char, position);

                if previous_position.is_none() {
                    touched_chars.push(char);
                }

                previous_position
            }
        }
    }

    pub fn last_position(&self, char: C) -> Option<usize> {
        let position = match self {
            Self::Dense { last_positions, .. } => char
                .rank()
                .and_then(|char_rank| last_positions.get(char_rank))
                .copied(),
            Self::Sparse { last_positions, .. } => last_positions.get(&char).copied(),
        };

        position.filter(|&position| position != END_OF_CHAIN)
    }
}

fn dense_rank<C: Character>(char: C, alphabet_size: usize) -> usize {
    match char.rank() {
        Some(char_rank) if char_rank < alphabet_size => char_rank,
        _ => panic!("character {char:?} is larger than the maximum character of the alphabet"),
    }
}

/// Pending chains. Sorted batches are pushed in reverse, such that popping always yields
/// the lexicographically smallest pending chain.
#[derive(Default)]
pub struct WorkStack {
    chains: Vec<Chain>,
}

impl WorkStack {
    pub fn new() -> Self {
        Self::default()
    }

    // all chains in one batch share the prefix before the distinguishing character
    pub fn push_sorted<C: Ord>(&mut self, mut discovered_chains: Vec<DiscoveredChain<C>>) {
        discovered_chains.sort_unstable_by(|first, second| {
            first.distinguishing_char.cmp(&second.distinguishing_char)
        });

        self.chains.extend(
            discovered_chains
                .into_iter()
                .rev()
                .map(|discovered| discovered.chain),
        );
    }

    pub fn pop(&mut self) -> Option<Chain> {
        self.chains.pop()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }
}
