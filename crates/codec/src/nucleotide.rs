use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidNucleotide;

/// A DNA nucleotide base.
///
/// The discriminant is the base's 2-bit code (A=00, C=01, G=10, T=11). The
/// packed representation relies on this mapping, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0b00,
    C = 0b01,
    G = 0b10,
    T = 0b11,
}

impl Nucleotide {
    /// Width of a single code in bits.
    pub const BITS: u32 = 2;

    /// Convert from a 2-bit code. Returns `None` above `0b11`.
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0b00 => Some(Self::A),
            0b01 => Some(Self::C),
            0b10 => Some(Self::G),
            0b11 => Some(Self::T),
            _ => None,
        }
    }

    /// The 2-bit code for this base.
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte, accepting both cases.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .ok()
            .and_then(Self::from_ascii)
            .ok_or(InvalidNucleotide(c))
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.to_index()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_codes() {
        assert_eq!(Nucleotide::A.to_index(), 0b00);
        assert_eq!(Nucleotide::C.to_index(), 0b01);
        assert_eq!(Nucleotide::G.to_index(), 0b10);
        assert_eq!(Nucleotide::T.to_index(), 0b11);
    }

    #[test]
    fn test_nucleotide_from_index() {
        for idx in 0..4u8 {
            let nuc = Nucleotide::from_index(idx).unwrap();
            assert_eq!(nuc.to_index(), idx);
        }
        assert_eq!(Nucleotide::from_index(4), None);
        assert_eq!(Nucleotide::from_index(255), None);
    }

    #[test]
    fn test_nucleotide_from_ascii() {
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'c'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'U'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_try_from_char() {
        assert_eq!(Nucleotide::try_from('t'), Ok(Nucleotide::T));
        assert_eq!(Nucleotide::try_from('X'), Err(InvalidNucleotide('X')));
        // Multi-byte characters must not be truncated into a valid byte.
        assert_eq!(Nucleotide::try_from('Ł'), Err(InvalidNucleotide('Ł')));
    }

    #[test]
    fn test_nucleotide_to_char_is_uppercase() {
        let chars: String = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T]
            .iter()
            .map(|n| n.to_char())
            .collect();
        assert_eq!(chars, "ACGT");
    }

    #[test]
    fn test_invalid_nucleotide_display() {
        let msg = InvalidNucleotide('X').to_string();
        assert!(msg.contains("Invalid"));
        assert!(msg.contains('X'));
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
