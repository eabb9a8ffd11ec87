//! Fixed-width 256-bit integer words.
//!
//! These types carry no arithmetic beyond what the encoder needs: byte-order
//! packing, the compact-range test and the bitwise complement used to derive
//! a negative integer's CBOR magnitude.

use core::cmp::Ordering;
use core::ops::Not;

/// Bit width of the wide integer word.
pub const WIDE_BITS: usize = 256;

/// Byte width of the wide integer word, and of a fixed-width bignum payload.
pub const WIDE_BYTES: usize = WIDE_BITS / 8;

const U64_BYTES: usize = 8;

/// Unsigned 256-bit integer, stored big-endian.
///
/// Because the bytes are big-endian, the derived lexicographic ordering is
/// also the numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256([u8; WIDE_BYTES]);

impl U256 {
    pub const ZERO: Self = Self([0; WIDE_BYTES]);
    pub const MAX: Self = Self([0xff; WIDE_BYTES]);

    pub const fn from_be_bytes(bytes: [u8; WIDE_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn to_be_bytes(self) -> [u8; WIDE_BYTES] {
        self.0
    }

    pub fn as_be_bytes(&self) -> &[u8; WIDE_BYTES] {
        &self.0
    }

    /// Returns the value as a `u64` if it is at most 2^64 - 1.
    pub fn to_u64(&self) -> Option<u64> {
        let (high, low) = self.0.split_at(WIDE_BYTES - U64_BYTES);
        if high.iter().any(|&b| b != 0) {
            return None;
        }
        Some(low.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Big-endian bytes with leading zero bytes removed. Zero yields an
    /// empty slice.
    pub fn significant_bytes(&self) -> &[u8] {
        let start = self.0.iter().position(|&b| b != 0).unwrap_or(WIDE_BYTES);
        &self.0[start..]
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for U256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Not for U256 {
    type Output = Self;

    fn not(self) -> Self {
        let mut bytes = self.0;
        for b in bytes.iter_mut() {
            *b = !*b;
        }
        Self(bytes)
    }
}

impl From<u128> for U256 {
    fn from(v: u128) -> Self {
        let mut bytes = [0u8; WIDE_BYTES];
        bytes[WIDE_BYTES - 16..].copy_from_slice(&v.to_be_bytes());
        Self(bytes)
    }
}

macro_rules! impl_u256_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for U256 {
                fn from(v: $ty) -> Self {
                    Self::from(v as u128)
                }
            }
        )*
    };
}

impl_u256_from!(u8, u16, u32, u64, usize);

/// Signed 256-bit integer in two's-complement form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct I256(U256);

impl I256 {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const MINUS_ONE: Self = Self(U256::MAX);
    pub const MIN: Self = {
        let mut bytes = [0u8; WIDE_BYTES];
        bytes[0] = 0x80;
        Self(U256::from_be_bytes(bytes))
    };
    pub const MAX: Self = {
        let mut bytes = [0xffu8; WIDE_BYTES];
        bytes[0] = 0x7f;
        Self(U256::from_be_bytes(bytes))
    };

    /// Reinterprets a two's-complement bit pattern as a signed value.
    pub const fn from_bits(bits: U256) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> U256 {
        self.0
    }

    pub const fn from_be_bytes(bytes: [u8; WIDE_BYTES]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }

    pub const fn to_be_bytes(self) -> [u8; WIDE_BYTES] {
        self.0.to_be_bytes()
    }

    pub fn is_negative(&self) -> bool {
        self.0.as_be_bytes()[0] & 0x80 != 0
    }

    /// For a negative value `x`, the CBOR magnitude `n = -x - 1`.
    ///
    /// In two's complement `-x - 1 == !x`, so this never overflows, including
    /// at [`I256::MIN`].
    pub fn negative_magnitude(&self) -> Option<U256> {
        self.is_negative().then(|| !self.0)
    }

    /// Bit pattern with the sign bit flipped; orders like the signed value.
    fn biased(&self) -> [u8; WIDE_BYTES] {
        let mut bytes = self.0.to_be_bytes();
        bytes[0] ^= 0x80;
        bytes
    }
}

impl Default for I256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for I256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.biased().cmp(&other.biased())
    }
}

impl PartialOrd for I256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i128> for I256 {
    fn from(v: i128) -> Self {
        let fill = if v < 0 { 0xff } else { 0x00 };
        let mut bytes = [fill; WIDE_BYTES];
        bytes[WIDE_BYTES - 16..].copy_from_slice(&v.to_be_bytes());
        Self::from_be_bytes(bytes)
    }
}

impl From<u128> for I256 {
    fn from(v: u128) -> Self {
        Self(U256::from(v))
    }
}

macro_rules! impl_i256_from {
    ($wide:ty => $($ty:ty),*) => {
        $(
            impl From<$ty> for I256 {
                fn from(v: $ty) -> Self {
                    Self::from(v as $wide)
                }
            }
        )*
    };
}

impl_i256_from!(i128 => i8, i16, i32, i64, isize);
impl_i256_from!(u128 => u8, u16, u32, u64, usize);
