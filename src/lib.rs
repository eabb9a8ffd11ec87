//! # Wide CBOR
//!
//! A deterministic, append-only CBOR (RFC 8949) encoder for callers that work
//! with fixed-width 256-bit integers.
//!
//! ## Features
//! - Unsigned and negative integers in the shortest of the 1/2/4/8-byte forms
//! - Integers past 64 bits as bignums (tag 2 / tag 3) with a fixed 32-byte
//!   payload, or a minimal payload via [`EncoderConfig`]
//! - Text and byte strings, booleans, null and undefined
//! - Definite arrays and maps, indefinite-length arrays closed by a break byte
//! - A serde [`Serializer`](serde::Serializer) for any `Serialize` type
//! - `no_std` + `alloc` (disable the default `std` feature)
//!
//! Floats, decoding and tags other than 2 and 3 are out of scope.
//!
//! ## Allocation
//! The output buffer grows with `Vec::try_reserve`; an allocation failure is
//! returned as [`CborError::Alloc`] and the document being built must be
//! dropped.
//!
//! ## Example
//! ```rust
//! use wide_cbor::{Encoder, I256};
//!
//! let mut enc = Encoder::new();
//! enc.start_array(None)?
//!     .put_unsigned(24u8)?
//!     .put_signed(-42)?
//!     .put_signed(I256::MIN)?
//!     .end_indefinite()?;
//! let bytes = enc.finish()?;
//! assert_eq!(&bytes[..5], b"\x9f\x18\x18\x38\x29");
//! assert_eq!(&bytes[5..8], b"\xc3\x58\x20");
//! assert_eq!(bytes.last(), Some(&0xff));
//! # Ok::<(), wide_cbor::CborError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use serde::Serialize;

mod encoder;
pub mod error;
mod int;
mod ser;
pub mod value;
pub mod wide;

pub use encoder::{BignumPayload, Encoder, EncoderConfig};
pub use error::{CborError, Result};
pub use ser::Compound;
pub use value::Value;
pub use wide::{I256, U256, WIDE_BITS, WIDE_BYTES};

// CBOR major types
const MAJOR_UNSIGNED: u8 = 0;
const MAJOR_NEGATIVE: u8 = 1;
const MAJOR_BYTES: u8 = 2;
const MAJOR_TEXT: u8 = 3;
const MAJOR_ARRAY: u8 = 4;
const MAJOR_MAP: u8 = 5;
const MAJOR_TAG: u8 = 6;
const MAJOR_SIMPLE: u8 = 7;

// Bignum tags (RFC 8949 §3.4.3)
pub const TAG_POSITIVE_BIGNUM: u64 = 2;
pub const TAG_NEGATIVE_BIGNUM: u64 = 3;

// Additional info values
const FALSE: u8 = 20;
const TRUE: u8 = 21;
const NULL: u8 = 22;
const UNDEFINED: u8 = 23;
const INDEFINITE: u8 = 31;

const BREAK: u8 = 0xff;

/// Encodes a `Serialize` value as a single CBOR document.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut encoder = Encoder::new();
    encoder.encode(value)?;
    encoder.finish()
}
