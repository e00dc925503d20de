mod algorithm;
mod error;
pub mod lcp;
mod search;

use std::fmt;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

pub use error::Error;
pub use lcp::LcpAlgorithm;

pub type Result<T> = std::result::Result<T, Error>;

pub trait Character: Sized + Copy + Ord + Hash + fmt::Debug {
    fn max_char() -> Self;

    /// Index of the character in a table over the alphabet, `None` if it does not fit into `usize`.
    fn rank(&self) -> Option<usize>;
}

impl<P: PrimInt + Unsigned + Hash + fmt::Debug> Character for P {
    fn max_char() -> Self {
        P::max_value()
    }

    fn rank(&self) -> Option<usize> {
        self.to_usize()
    }
}

/// Configures and runs the chain based suffix sorting.
///
/// ```
/// use chain_sa::SuffixArrayBuilder;
///
/// let suffix_array = SuffixArrayBuilder::new().build(b"banana");
/// assert_eq!(suffix_array.as_slice(), [5, 3, 1, 0, 4, 2]);
/// assert_eq!(suffix_array.lcp(), Some(&[0, 1, 3, 0, 0, 2, 0][..]));
/// ```
#[derive(Debug, Clone)]
pub struct SuffixArrayBuilder<C = u8> {
    max_char: Option<C>,
    compute_lcp: bool,
    lcp_algorithm: LcpAlgorithm,
    induced_sorting: bool,
}

impl<C: Character> SuffixArrayBuilder<C> {
    pub fn new() -> Self {
        Self {
            max_char: None,
            compute_lcp: true,
            lcp_algorithm: LcpAlgorithm::default(),
            induced_sorting: true,
        }
    }

    /// The text must not contain a character larger than `max_char`.
    pub fn with_max_char(&mut self, max_char: C) -> &mut Self {
        self.max_char = Some(max_char);
        self
    }

    pub fn with_lcp(&mut self, compute_lcp: bool) -> &mut Self {
        self.compute_lcp = compute_lcp;
        self
    }

    pub fn with_lcp_algorithm(&mut self, lcp_algorithm: LcpAlgorithm) -> &mut Self {
        self.lcp_algorithm = lcp_algorithm;
        self
    }

    /// Without induced sorting, every chain is refined one character at a time until
    /// it falls apart into singletons. Slower on repetitive texts, same result.
    pub fn with_induced_sorting(&mut self, induced_sorting: bool) -> &mut Self {
        self.induced_sorting = induced_sorting;
        self
    }

    pub fn build(&self, text: &[C]) -> SuffixArray<C> {
        let _span = tracing::debug_span!("build_suffix_array", text_len = text.len()).entered();

        let alphabet_size = self.alphabet_size(text);
        let (suffix_array, inverse_suffix_array) =
            algorithm::chain_sort(text, alphabet_size, self.induced_sorting);

        let lcp = self.compute_lcp.then(|| {
            self.lcp_algorithm
                .construct(text, &suffix_array, &inverse_suffix_array)
        });

        tracing::debug!(
            with_lcp = lcp.is_some(),
            "suffix array of {} suffixes constructed",
            suffix_array.len()
        );

        SuffixArray {
            text: text.into(),
            suffix_array,
            inverse_suffix_array,
            lcp,
        }
    }

    // None if the alphabet cannot be indexed by usize
    fn alphabet_size(&self, text: &[C]) -> Option<usize> {
        let max_char = match self.max_char {
            Some(max_char) => max_char,
            None => match text.iter().max() {
                Some(&max_char) => max_char,
                None => return Some(0),
            },
        };

        max_char.rank()?.checked_add(1)
    }
}

impl<C: Character> Default for SuffixArrayBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the suffix array of `text` with the default configuration.
pub fn build<C: Character>(text: &[C], compute_lcp: bool) -> SuffixArray<C> {
    SuffixArrayBuilder::new().with_lcp(compute_lcp).build(text)
}

/// A text together with its suffix array, inverse suffix array and optionally its LCP array.
#[derive(Clone, PartialEq, Eq)]
pub struct SuffixArray<C = u8> {
    text: Box<[C]>,
    suffix_array: Vec<usize>,
    inverse_suffix_array: Vec<usize>,
    lcp: Option<Vec<usize>>,
}

impl<C: Character> SuffixArray<C> {
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    pub fn text(&self) -> &[C] {
        &self.text
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.suffix_array
    }

    /// Starting position of the suffix with lexicographic rank `rank`.
    pub fn suffix_at(&self, rank: usize) -> Result<usize> {
        self.suffix_array
            .get(rank)
            .copied()
            .ok_or(Error::RankOutOfRange {
                rank,
                len: self.len(),
            })
    }

    pub fn suffix(&self, rank: usize) -> Result<&[C]> {
        let position = self.suffix_at(rank)?;
        Ok(&self.text[position..])
    }

    /// Lexicographic rank of the suffix starting at `position`.
    pub fn rank_of(&self, position: usize) -> Result<usize> {
        self.inverse_suffix_array
            .get(position)
            .copied()
            .ok_or(Error::PositionOutOfRange {
                position,
                len: self.len(),
            })
    }

    /// `len() + 1` values, the first and the last are always 0. `None` if the
    /// LCP array was not requested.
    pub fn lcp(&self) -> Option<&[usize]> {
        self.lcp.as_deref()
    }

    pub fn lcp_at(&self, index: usize) -> Result<usize> {
        let lcp = self.lcp.as_ref().ok_or(Error::LcpNotComputed)?;

        lcp.get(index).copied().ok_or(Error::LcpIndexOutOfRange {
            index,
            len: lcp.len(),
        })
    }

    /// Returns some position where `pattern` occurs in the text. Which one is
    /// unspecified if there are several. Empty patterns are never found.
    pub fn index_of(&self, pattern: &[C]) -> Option<usize> {
        search::index_of(&self.text, &self.suffix_array, pattern)
    }

    pub fn contains(&self, pattern: &[C]) -> bool {
        self.index_of(pattern).is_some()
    }

    /// Iterates over `(position, suffix)` in lexicographic order of the suffixes.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &[C])> + '_ {
        self.suffix_array
            .iter()
            .map(|&position| (position, &self.text[position..]))
    }
}

impl<C: Character> fmt::Debug for SuffixArray<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixArray")
            .field("text", &self.text)
            .field("suffix_array", &self.suffix_array)
            .field("lcp", &self.lcp)
            .finish()
    }
}
