//! Longest common prefix arrays.
//!
//! For a text of length `n`, the LCP array has `n + 1` entries. `lcp[i]` for `1 <= i < n` is
//! the length of the longest common prefix of the suffixes at ranks `i - 1` and `i`.
//! `lcp[0]` and `lcp[n]` are always 0, so the LCP array of the empty text is `[0]`.

use std::iter::zip;

/// Both algorithms compute the same LCP array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LcpAlgorithm {
    /// Compares every pair of neighboring suffixes from scratch. _O(n²)_ in the worst case,
    /// for example on texts that repeat a single character.
    Pairwise,
    /// Walks the text in order of positions and reuses the previous prefix length
    /// (Kasai et al.). _O(n)_, needs the inverse suffix array.
    #[default]
    Linear,
}

impl LcpAlgorithm {
    pub fn construct<C: Eq>(
        self,
        text: &[C],
        suffix_array: &[usize],
        inverse_suffix_array: &[usize],
    ) -> Vec<usize> {
        match self {
            Self::Pairwise => pairwise(text, suffix_array),
            Self::Linear => linear(text, suffix_array, inverse_suffix_array),
        }
    }
}

pub fn pairwise<C: Eq>(text: &[C], suffix_array: &[usize]) -> Vec<usize> {
    assert_eq!(text.len(), suffix_array.len());

    let mut lcp = vec![0; suffix_array.len() + 1];

    for (rank, neighbors) in suffix_array.windows(2).enumerate() {
        lcp[rank + 1] = common_prefix_len(&text[neighbors[0]..], &text[neighbors[1]..]);
    }

    lcp
}

pub fn linear<C: Eq>(
    text: &[C],
    suffix_array: &[usize],
    inverse_suffix_array: &[usize],
) -> Vec<usize> {
    assert_eq!(text.len(), suffix_array.len());
    assert_eq!(text.len(), inverse_suffix_array.len());

    let mut lcp = vec![0; suffix_array.len() + 1];

    // lcp of the suffix at position i with its predecessor is at least one less
    // than the lcp of the suffix at position i - 1 with its predecessor
    let mut prefix_len = 0usize;

    for (position, &rank) in inverse_suffix_array.iter().enumerate() {
        if rank == 0 {
            prefix_len = 0;
            continue;
        }

        let predecessor = suffix_array[rank - 1];
        prefix_len += common_prefix_len(
            &text[position + prefix_len..],
            &text[predecessor + prefix_len..],
        );

        lcp[rank] = prefix_len;
        prefix_len = prefix_len.saturating_sub(1);
    }

    lcp
}

fn common_prefix_len<C: Eq>(first: &[C], second: &[C]) -> usize {
    zip(first, second).take_while(|(a, b)| a == b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // sorted suffixes: a, abra, abracadabra, acadabra, adabra, bra, bracadabra, cadabra, dabra, ra, racadabra
    static ABRACADABRA: &[u8] = b"abracadabra";
    static ABRACADABRA_SUFFIX_ARRAY: &[usize] = &[10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2];
    static ABRACADABRA_LCP: &[usize] = &[0, 1, 4, 1, 1, 0, 3, 0, 0, 0, 2, 0];

    fn inverse(suffix_array: &[usize]) -> Vec<usize> {
        let mut inverse_suffix_array = vec![0; suffix_array.len()];
        for (rank, &position) in suffix_array.iter().enumerate() {
            inverse_suffix_array[position] = rank;
        }
        inverse_suffix_array
    }

    #[test]
    fn pairwise_abracadabra() {
        assert_eq!(
            pairwise(ABRACADABRA, ABRACADABRA_SUFFIX_ARRAY),
            ABRACADABRA_LCP
        );
    }

    #[test]
    fn linear_abracadabra() {
        let inverse_suffix_array = inverse(ABRACADABRA_SUFFIX_ARRAY);

        assert_eq!(
            linear(ABRACADABRA, ABRACADABRA_SUFFIX_ARRAY, &inverse_suffix_array),
            ABRACADABRA_LCP
        );
    }

    #[test]
    fn single_character_repeated() {
        let text = b"aaaa";
        let suffix_array = [3, 2, 1, 0];
        let inverse_suffix_array = inverse(&suffix_array);

        for algorithm in [LcpAlgorithm::Pairwise, LcpAlgorithm::Linear] {
            assert_eq!(
                algorithm.construct(text, &suffix_array, &inverse_suffix_array),
                [0, 1, 2, 3, 0]
            );
        }
    }

    #[test]
    fn empty_and_single_character_texts() {
        let empty: [u8; 0] = [];

        for algorithm in [LcpAlgorithm::Pairwise, LcpAlgorithm::Linear] {
            assert_eq!(algorithm.construct(&empty, &[], &[]), [0]);
            assert_eq!(algorithm.construct(b"x", &[0], &[0]), [0, 0]);
        }
    }
}
