use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("rank {rank} is out of range for a suffix array of length {len}")]
    RankOutOfRange { rank: usize, len: usize },

    #[error("position {position} is out of range for a text of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("index {index} is out of range for an LCP array of length {len}")]
    LcpIndexOutOfRange { index: usize, len: usize },

    #[error("the LCP array was not computed for this suffix array")]
    LcpNotComputed,
}
