use core::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodecError;
use crate::nucleotide::Nucleotide;
use crate::packed::PackedBits;

const CODE_BITS: usize = Nucleotide::BITS as usize;

/// A nucleotide sequence packed at two bits per base behind a sentinel bit.
///
/// # Layout
///
/// The packed value is a single unsigned integer. Its most significant set
/// bit is the sentinel; below it, the first base of the source occupies the
/// highest 2-bit pair and the last base the lowest pair. Without the sentinel
/// a leading run of `A` (code `00`) would vanish into the integer's magnitude.
///
/// # Invariant
///
/// For a source of `n` bases, `bit_len() == 2n + 1`. Every constructor
/// establishes it and nothing mutates the value afterwards, so `decompress`
/// is a pure read that can be repeated and shared across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompressedSequence {
    bits: PackedBits,
}

impl CompressedSequence {
    /// Pack already-validated bases.
    ///
    /// Equivalent to starting from `1` and, for each base, shifting left by two
    /// and OR-ing in its code. Each code is written straight to its final
    /// offset so the pass stays linear in the number of bases.
    pub fn from_nucleotides(nucleotides: &[Nucleotide]) -> Self {
        let n = nucleotides.len();
        let mut bits = PackedBits::with_top_bit(CODE_BITS * n);
        for (i, nuc) in nucleotides.iter().enumerate() {
            let offset = CODE_BITS * (n - 1 - i);
            bits.or_bits_at(offset, u64::from(nuc.to_index()));
        }
        Self { bits }
    }

    /// Rebuild a value from its minimal big-endian bytes.
    ///
    /// Leading zero bytes are skipped. The payload must carry a sentinel and
    /// an odd bit length.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let bits = PackedBits::from_be_bytes(bytes);
        let bit_len = bits.bit_len();
        if bit_len % 2 == 0 {
            return Err(CodecError::InvalidPackedLength(bit_len as u64));
        }
        Ok(Self { bits })
    }

    /// Minimal big-endian bytes of the packed value, sentinel included.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.bits.to_be_bytes()
    }

    /// Bit length of the packed value, always `2 * len() + 1`.
    pub fn bit_len(&self) -> usize {
        self.bits.bit_len()
    }

    /// Number of bases in the packed sequence.
    pub fn len(&self) -> usize {
        (self.bit_len() - 1) / CODE_BITS
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the underlying integer.
    pub fn packed(&self) -> &PackedBits {
        &self.bits
    }

    /// Decode into an uppercase string, propagating any failure.
    pub fn to_sequence_string(&self) -> Result<String, CodecError> {
        decompress(self)
    }
}

/// Pack a nucleotide string.
///
/// Input is case-insensitive. The first invalid character aborts the call
/// with [`CodecError::InvalidSymbol`] carrying its zero-based character
/// index; no partial value is produced.
///
/// ```
/// use nucpack_codec::{compress, decompress};
///
/// let packed = compress("TAG").unwrap();
/// assert_eq!(packed.to_be_bytes(), vec![0b111_0010]);
/// assert_eq!(decompress(&packed).unwrap(), "TAG");
/// ```
pub fn compress(sequence: &str) -> Result<CompressedSequence, CodecError> {
    let nucleotides = sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Nucleotide::try_from(symbol).map_err(|_| CodecError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompressedSequence::from_nucleotides(&nucleotides))
}

/// Unpack a value into its uppercase nucleotide string.
///
/// Codes are read from the least significant pair upwards, which yields the
/// bases last-to-first; the result is reversed before returning.
pub fn decompress(value: &CompressedSequence) -> Result<String, CodecError> {
    let payload_len = value.bit_len().saturating_sub(1);
    let mut reversed = String::with_capacity(payload_len / CODE_BITS);

    let mut offset = 0;
    while offset < payload_len {
        // Same as `(packed >> offset) & 0b11`.
        let code = value.bits.bits_at(offset, Nucleotide::BITS);
        match u8::try_from(code).ok().and_then(Nucleotide::from_index) {
            Some(nuc) => reversed.push(nuc.to_char()),
            None => return Err(CodecError::InvalidBitPattern(code)),
        }
        offset += CODE_BITS;
    }

    Ok(reversed.chars().rev().collect())
}

impl FromStr for CompressedSequence {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compress(s)
    }
}

/// Writes the decoded sequence. A decode failure surfaces as `fmt::Error`
/// instead of being replaced by placeholder text.
impl fmt::Display for CompressedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sequence = decompress(self).map_err(|_| fmt::Error)?;
        f.write_str(&sequence)
    }
}

/// Packed value in base 2, sentinel included.
impl fmt::Binary for CompressedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.bits, f)
    }
}

impl Serialize for CompressedSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_be_bytes())
    }
}

impl<'de> Deserialize<'de> for CompressedSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        CompressedSequence::from_be_bytes(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const BASES: &[u8] = b"ACGTacgt";

    fn random_sequence(len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| BASES[rng.gen_range(0..BASES.len())] as char)
            .collect()
    }

    #[test]
    fn test_worked_example_tag() {
        let packed = compress("TAG").unwrap();
        assert_eq!(packed.packed(), &PackedBits::from(114));
        assert_eq!(format!("{packed:b}"), "1110010");
        assert_eq!(packed.bit_len(), 7);
        assert_eq!(decompress(&packed).unwrap(), "TAG");
    }

    #[test]
    fn test_empty_sequence() {
        let packed = compress("").unwrap();
        assert_eq!(packed.bit_len(), 1);
        assert!(packed.is_empty());
        assert_eq!(packed.to_be_bytes(), vec![1]);
        assert_eq!(decompress(&packed).unwrap(), "");
    }

    #[test]
    fn test_leading_a_is_preserved() {
        let packed = compress("AAAAC").unwrap();
        assert_eq!(packed.bit_len(), 11);
        assert_eq!(decompress(&packed).unwrap(), "AAAAC");

        let all_a = compress(&"A".repeat(100)).unwrap();
        assert_eq!(all_a.len(), 100);
        assert_eq!(decompress(&all_a).unwrap(), "A".repeat(100));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compress("acgt").unwrap(), compress("ACGT").unwrap());
        assert_eq!(compress("aCgT").unwrap(), compress("ACGT").unwrap());
        assert_eq!(decompress(&compress("gattaca").unwrap()).unwrap(), "GATTACA");
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            compress("TAGX"),
            Err(CodecError::InvalidSymbol {
                symbol: 'X',
                position: 3
            })
        );
        assert_eq!(
            compress("n"),
            Err(CodecError::InvalidSymbol {
                symbol: 'n',
                position: 0
            })
        );
    }

    #[test]
    fn test_invalid_symbol_reports_first_offender() {
        let err = compress("ACNNX").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidSymbol {
                symbol: 'N',
                position: 2
            }
        );
    }

    #[test]
    fn test_invalid_symbol_position_counts_chars() {
        let err = compress("AÇG").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidSymbol {
                symbol: 'Ç',
                position: 1
            }
        );
    }

    #[test]
    fn test_bit_length_invariant() {
        for n in [0, 1, 2, 31, 32, 33, 63, 64, 65, 500] {
            let packed = compress(&random_sequence(n)).unwrap();
            assert_eq!(packed.bit_len(), 2 * n + 1, "n = {n}");
            assert_eq!(packed.len(), n);
        }
    }

    #[test]
    fn test_matches_shift_or_construction() {
        let sequence = random_sequence(300);
        let mut expected = PackedBits::one();
        for c in sequence.chars() {
            expected.shl_assign(2);
            expected.or_assign_u64(u64::from(Nucleotide::try_from(c).unwrap().to_index()));
        }
        assert_eq!(compress(&sequence).unwrap().packed(), &expected);
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let sequence = random_sequence(rng.gen_range(0..2000));
            let packed = compress(&sequence).unwrap();
            assert_eq!(decompress(&packed).unwrap(), sequence.to_uppercase());
        }
    }

    #[test]
    fn test_decompress_is_repeatable() {
        let packed = compress("GATTACA").unwrap();
        let first = decompress(&packed).unwrap();
        let second = decompress(&packed).unwrap();
        assert_eq!(first, second);
        assert_eq!(packed, compress("GATTACA").unwrap());
    }

    #[test]
    fn test_compression_ratio() {
        for n in [5, 6, 10, 100, 8800] {
            let sequence = random_sequence(n);
            let packed = compress(&sequence).unwrap();
            assert!(
                packed.to_be_bytes().len() < sequence.len(),
                "n = {n}: {} >= {}",
                packed.to_be_bytes().len(),
                sequence.len()
            );
        }
    }

    #[test]
    fn test_from_be_bytes_round_trip() {
        let packed = compress("CCGGTTAAACGT").unwrap();
        let restored = CompressedSequence::from_be_bytes(&packed.to_be_bytes()).unwrap();
        assert_eq!(restored, packed);

        let mut padded = vec![0, 0];
        padded.extend(packed.to_be_bytes());
        assert_eq!(CompressedSequence::from_be_bytes(&padded).unwrap(), packed);
    }

    #[test]
    fn test_from_be_bytes_rejects_bad_lengths() {
        assert_eq!(
            CompressedSequence::from_be_bytes(&[]),
            Err(CodecError::InvalidPackedLength(0))
        );
        assert_eq!(
            CompressedSequence::from_be_bytes(&[0, 0]),
            Err(CodecError::InvalidPackedLength(0))
        );
        // 0b10: two bits, cannot be 2n + 1
        assert_eq!(
            CompressedSequence::from_be_bytes(&[0b10]),
            Err(CodecError::InvalidPackedLength(2))
        );
    }

    #[test]
    fn test_display_matches_decompress() {
        let packed = compress("ttagc").unwrap();
        assert_eq!(packed.to_string(), "TTAGC");
        assert_eq!(packed.to_sequence_string().unwrap(), "TTAGC");
    }

    #[test]
    fn test_from_str() {
        let packed: CompressedSequence = "ACGT".parse().unwrap();
        assert_eq!(packed, compress("ACGT").unwrap());
        assert!("ACGU".parse::<CompressedSequence>().is_err());
    }

    #[test]
    fn test_serde_json_round_trip() {
        let packed = compress("TAG").unwrap();
        let json = serde_json::to_string(&packed).unwrap();
        assert_eq!(json, "[114]");
        let restored: CompressedSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, packed);
    }

    #[test]
    fn test_serde_rejects_invalid_payload() {
        let result: Result<CompressedSequence, _> = serde_json::from_str("[2]");
        assert!(result.is_err());
    }
}
