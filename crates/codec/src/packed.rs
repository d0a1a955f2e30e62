use core::fmt;

const LIMB_BITS: usize = u64::BITS as usize;

/// Arbitrary-precision unsigned integer stored as little-endian `u64` limbs.
///
/// The limb vector is kept normalized: it never ends in a zero limb, so zero
/// is the empty vector and derived equality/hashing compare numeric values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackedBits {
    limbs: Vec<u64>,
}

impl PackedBits {
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// The value `2^bit`, with storage for every lower bit already reserved.
    pub fn with_top_bit(bit: usize) -> Self {
        let mut limbs = vec![0u64; bit / LIMB_BITS + 1];
        limbs[bit / LIMB_BITS] = 1 << (bit % LIMB_BITS);
        Self { limbs }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits; zero for the value zero.
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => (self.limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Shift left in place.
    ///
    /// Limbs grow through `Vec::push`/`splice`, so repeated shifts reallocate
    /// geometrically rather than on every call.
    pub fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() || bits == 0 {
            return;
        }
        let word_shift = bits / LIMB_BITS;
        let bit_shift = bits % LIMB_BITS;

        if bit_shift != 0 {
            let mut carry = 0u64;
            for limb in self.limbs.iter_mut() {
                let next_carry = *limb >> (LIMB_BITS - bit_shift);
                *limb = (*limb << bit_shift) | carry;
                carry = next_carry;
            }
            if carry != 0 {
                self.limbs.push(carry);
            }
        }
        if word_shift != 0 {
            self.limbs.splice(0..0, std::iter::repeat(0).take(word_shift));
        }
    }

    /// Return `self >> bits` as a new value.
    pub fn shr(&self, bits: usize) -> Self {
        let word_shift = bits / LIMB_BITS;
        let bit_shift = bits % LIMB_BITS;
        if word_shift >= self.limbs.len() {
            return Self::zero();
        }

        let src = &self.limbs[word_shift..];
        let mut limbs = Vec::with_capacity(src.len());
        for (i, &limb) in src.iter().enumerate() {
            let mut value = limb >> bit_shift;
            if bit_shift != 0 {
                if let Some(&next) = src.get(i + 1) {
                    value |= next << (LIMB_BITS - bit_shift);
                }
            }
            limbs.push(value);
        }
        let mut out = Self { limbs };
        out.normalize();
        out
    }

    /// Bitwise AND with a single-word mask.
    #[inline]
    pub fn and_u64(&self, mask: u64) -> u64 {
        self.limbs.first().map_or(0, |&low| low & mask)
    }

    /// Bitwise OR of a single word into the low limb.
    pub fn or_assign_u64(&mut self, value: u64) {
        match self.limbs.first_mut() {
            Some(low) => *low |= value,
            None if value != 0 => self.limbs.push(value),
            None => {}
        }
    }

    /// OR `value` into the bits starting at `offset`, growing if needed.
    pub fn or_bits_at(&mut self, offset: usize, value: u64) {
        if value == 0 {
            return;
        }
        let word = offset / LIMB_BITS;
        let bit = offset % LIMB_BITS;
        let high = if bit == 0 { 0 } else { value >> (LIMB_BITS - bit) };
        let needed = if high != 0 { word + 2 } else { word + 1 };
        if self.limbs.len() < needed {
            self.limbs.resize(needed, 0);
        }
        self.limbs[word] |= value << bit;
        if high != 0 {
            self.limbs[word + 1] |= high;
        }
    }

    /// `(self >> offset) & ((1 << width) - 1)` without materializing the shift.
    ///
    /// `width` must be at most 64.
    pub fn bits_at(&self, offset: usize, width: u32) -> u64 {
        debug_assert!(width as usize <= LIMB_BITS);
        let mask = if width as usize == LIMB_BITS { u64::MAX } else { (1u64 << width) - 1 };
        let word = offset / LIMB_BITS;
        let bit = offset % LIMB_BITS;

        let low = self.limbs.get(word).map_or(0, |&limb| limb >> bit);
        let high = match self.limbs.get(word + 1) {
            Some(&limb) if bit != 0 => limb << (LIMB_BITS - bit),
            _ => 0,
        };
        (low | high) & mask
    }

    /// Minimal big-endian byte representation. Zero encodes as no bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * 8);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let leading = out.iter().take_while(|&&b| b == 0).count();
        out.drain(..leading);
        out
    }

    /// Parse big-endian bytes; leading zero bytes are ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs: Vec<u64> = bytes
            .rchunks(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[8 - chunk.len()..].copy_from_slice(chunk);
                u64::from_be_bytes(buf)
            })
            .collect();
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Self { limbs }
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl From<u64> for PackedBits {
    fn from(value: u64) -> Self {
        let mut out = Self::zero();
        out.or_assign_u64(value);
        out
    }
}

impl fmt::Binary for PackedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = match self.limbs.split_last() {
            None => String::from("0"),
            Some((top, rest)) => {
                let mut s = format!("{top:b}");
                for limb in rest.iter().rev() {
                    s.push_str(&format!("{limb:064b}"));
                }
                s
            }
        };
        f.pad_integral(true, "0b", &digits)
    }
}
