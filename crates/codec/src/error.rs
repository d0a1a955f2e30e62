use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A character outside `{A, C, G, T}` (case-insensitive) was found while
    /// compressing. `position` is the zero-based character index.
    #[error("Invalid nucleotide '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A 2-bit group did not map to any nucleotide.
    ///
    /// Unreachable while codes are two bits wide; kept so that a wider code
    /// table cannot silently decode to a default symbol.
    #[error("Invalid bit pattern: {0:#b}")]
    InvalidBitPattern(u64),

    /// A packed payload whose bit length cannot be `2n + 1`.
    #[error("Invalid packed length: {0} bits (expected an odd, non-zero bit length)")]
    InvalidPackedLength(u64),
}

/// Error returned when a character does not name a nucleotide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid nucleotide character: '{0}'")]
pub struct InvalidNucleotide(pub char);
