//! Integer classification.
//!
//! Chooses between the compact major type 0/1 encodings and the tag 2/3
//! bignum fallback. The decision is purely numeric: a 256-bit word holding a
//! small value still encodes compactly.

use crate::wide::{I256, U256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntClass {
    /// Major type 0 with the value itself.
    Unsigned(u64),
    /// Major type 1 with magnitude `n`, standing for `-(n + 1)`.
    Negative(u64),
    /// Tag 2 over the value's bytes.
    PositiveBignum(U256),
    /// Tag 3 over the bytes of magnitude `n`, standing for `-(n + 1)`.
    NegativeBignum(U256),
}

impl IntClass {
    pub(crate) fn unsigned(v: U256) -> Self {
        match v.to_u64() {
            Some(n) => IntClass::Unsigned(n),
            None => IntClass::PositiveBignum(v),
        }
    }

    pub(crate) fn signed(v: I256) -> Self {
        let Some(n) = v.negative_magnitude() else {
            return Self::unsigned(v.to_bits());
        };
        match n.to_u64() {
            Some(n) => IntClass::Negative(n),
            None => IntClass::NegativeBignum(n),
        }
    }

    /// Tag-2/3 form regardless of magnitude.
    pub(crate) fn signed_bignum(v: I256) -> Self {
        match v.negative_magnitude() {
            Some(n) => IntClass::NegativeBignum(n),
            None => IntClass::PositiveBignum(v.to_bits()),
        }
    }
}
