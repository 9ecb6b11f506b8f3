//! Error types for the two fatal conditions named in the crate's error
//! handling design: an invalid reference at build time, and a malformed or
//! truncated stream at load time. Empty queries and out-of-range `offsets`
//! arguments are not represented here — the former is a defined identity
//! result, the latter is a caller bug checked with `debug_assert!`.

/// Fatal precondition violation while constructing an [`FmIndex`](crate::FmIndex).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The reference contains a symbol outside the DNA alphabet `{0,1,2,3}`
    /// at the given position.
    #[error("reference symbol at position {0} is outside the DNA alphabet")]
    InvalidSymbol(usize),
}

/// Failure while deserializing an [`FmIndex`](crate::FmIndex) previously
/// written by [`FmIndex::save`](crate::FmIndex::save).
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The stream ended before the named section could be fully read.
    #[error("unexpected end of stream while reading {0}")]
    Truncated(&'static str),
    /// A length prefix declared more elements than could possibly fit in the
    /// remaining stream.
    #[error("declared length {declared} does not fit in memory")]
    LengthMismatch { declared: u64 },
    /// Extra bytes were found after the lookup table, where end-of-stream
    /// was expected.
    #[error("trailing bytes after the lookup table")]
    TrailingData,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
