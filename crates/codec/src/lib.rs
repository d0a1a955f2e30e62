//! Compact 2-bit packing of DNA sequences.
//!
//! A sequence over `{A, C, G, T}` is packed into one arbitrary-precision
//! integer: a leading sentinel bit followed by two bits per base, first base
//! most significant. The sentinel keeps leading `A`s (code `00`) from being
//! absorbed into the integer's magnitude, so a sequence of `n` bases always
//! packs to exactly `2n + 1` bits.
//!
//! ```
//! use nucpack_codec::{compress, decompress, CodecError};
//!
//! let packed = compress("gattaca").unwrap();
//! assert_eq!(packed.bit_len(), 15);
//! assert_eq!(decompress(&packed).unwrap(), "GATTACA");
//!
//! assert_eq!(
//!     compress("TAGX").unwrap_err(),
//!     CodecError::InvalidSymbol { symbol: 'X', position: 3 }
//! );
//! ```

mod compressed;
mod error;
mod nucleotide;
mod packed;
mod strategies;
mod traits;

pub use compressed::{compress, decompress, CompressedSequence};
pub use error::CodecError as Error;
pub use error::{CodecError, InvalidNucleotide};
pub use nucleotide::Nucleotide;
pub use packed::PackedBits;
pub use strategies::SentinelCodec;
pub use traits::Codec;
