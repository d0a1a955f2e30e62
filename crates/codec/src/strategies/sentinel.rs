use crate::compressed::{decompress, CompressedSequence};
use crate::error::CodecError;
use crate::nucleotide::Nucleotide;
use crate::traits::Codec;

/// Strategy: sentinel-prefixed 2-bit packing.
///
/// `encode` emits the minimal big-endian bytes of the packed value, so the
/// output is self-delimiting: no separate length header is needed because the
/// sentinel bit fixes the base count.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentinelCodec;

impl Codec for SentinelCodec {
    fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, CodecError> {
        let nucleotides = seq
            .iter()
            .enumerate()
            .map(|(position, &byte)| {
                Nucleotide::from_ascii(byte).ok_or_else(|| CodecError::InvalidSymbol {
                    symbol: char_at(seq, position),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompressedSequence::from_nucleotides(&nucleotides).to_be_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let packed = CompressedSequence::from_be_bytes(data)?;
        Ok(decompress(&packed)?.into_bytes())
    }
}

/// The character starting at `position`, or U+FFFD if the bytes there are
/// not valid UTF-8.
fn char_at(seq: &[u8], position: usize) -> char {
    seq[position..]
        .utf8_chunks()
        .next()
        .and_then(|chunk| chunk.valid().chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
