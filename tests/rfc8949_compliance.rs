// Copyright 2026 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! RFC 8949 compliance tests
//! Tests encoding against the Appendix A byte sequences for the value kinds
//! this encoder supports (no floats, tags 2 and 3 only).
//!
//! Appendix A writes bignums in preferred (minimal) form, so those vectors
//! run with `BignumPayload::Minimal`.

use wide_cbor::{BignumPayload, Encoder, EncoderConfig, I256, U256, Value, to_vec};

#[test]
fn test_rfc8949_integers() {
    assert_encode(Value::from(0u8), "00");
    assert_encode(Value::from(1u8), "01");
    assert_encode(Value::from(10u8), "0a");
    assert_encode(Value::from(23u8), "17");
    assert_encode(Value::from(24u8), "1818");
    assert_encode(Value::from(25u8), "1819");
    assert_encode(Value::from(100u8), "1864");
    assert_encode(Value::from(1000u16), "1903e8");
    assert_encode(Value::from(1000000u32), "1a000f4240");
    assert_encode(Value::from(1000000000000u64), "1b000000e8d4a51000");
    assert_encode(Value::from(18446744073709551615u64), "1bffffffffffffffff");

    assert_encode(Value::from(-1i8), "20");
    assert_encode(Value::from(-10i8), "29");
    assert_encode(Value::from(-100i8), "3863");
    assert_encode(Value::from(-1000i16), "3903e7");
    assert_encode(Value::from(-18446744073709551616i128), "3bffffffffffffffff");
}

#[test]
fn test_rfc8949_bignums() {
    let minimal = EncoderConfig {
        bignum_payload: BignumPayload::Minimal,
    };

    let mut enc = Encoder::with_config(minimal);
    enc.put_unsigned(18446744073709551616u128).unwrap();
    assert_eq!(hex_from_bytes(&enc.finish().unwrap()), "c249010000000000000000");

    let mut enc = Encoder::with_config(minimal);
    enc.put_signed(-18446744073709551617i128).unwrap();
    assert_eq!(hex_from_bytes(&enc.finish().unwrap()), "c349010000000000000000");
}

#[test]
fn test_rfc8949_simple_values() {
    assert_encode(Value::from(false), "f4");
    assert_encode(Value::from(true), "f5");
    assert_encode(Value::Null, "f6");
    assert_encode(Value::Undefined, "f7");

    // Option through the serde adapter
    let none: Option<u8> = None;
    assert_eq!(hex_from_bytes(&to_vec(&none).unwrap()), "f6");
    assert_eq!(hex_from_bytes(&to_vec(&Some(42u8)).unwrap()), "182a");
}

#[test]
fn test_rfc8949_strings() {
    assert_encode(Value::from(""), "60");
    assert_encode(Value::from("a"), "6161");
    assert_encode(Value::from("IETF"), "6449455446");
    assert_encode(Value::from("\"\\"), "62225c");
    assert_encode(Value::from("\u{00fc}"), "62c3bc");
    assert_encode(Value::from("\u{6c34}"), "63e6b0b4");
    assert_encode(Value::from("\u{10151}"), "64f0908591");

    assert_encode(Value::Bytes(vec![]), "40");
    assert_encode(Value::Bytes(vec![0x01, 0x02, 0x03, 0x04]), "4401020304");
}

#[test]
fn test_rfc8949_arrays() {
    assert_encode(Value::Array(vec![]), "80");
    assert_encode(ints(&[1, 2, 3]), "83010203");

    let nested = Value::Array(vec![Value::from(1u8), ints(&[2, 3]), ints(&[4, 5])]);
    assert_encode(nested, "8301820203820405");

    let long: Vec<u64> = (1..=25).collect();
    assert_encode(
        ints(&long),
        "98190102030405060708090a0b0c0d0e0f101112131415161718181819",
    );
}

#[test]
fn test_rfc8949_indefinite_arrays() {
    assert_encode(Value::IndefiniteArray(vec![]), "9fff");

    let nested = Value::IndefiniteArray(vec![
        Value::from(1u8),
        ints(&[2, 3]),
        Value::IndefiniteArray(vec![Value::from(4u8), Value::from(5u8)]),
    ]);
    assert_encode(nested, "9f018202039f0405ffff");

    let long: Vec<Value> = (1..=25u8).map(Value::from).collect();
    assert_encode(
        Value::IndefiniteArray(long),
        "9f0102030405060708090a0b0c0d0e0f101112131415161718181819ff",
    );
}

#[test]
fn test_rfc8949_maps() {
    assert_encode(Value::Map(vec![]), "a0");
    assert_encode(
        Value::Map(vec![
            (Value::from(1u8), Value::from(2u8)),
            (Value::from(3u8), Value::from(4u8)),
        ]),
        "a201020304",
    );
    assert_encode(
        Value::Map(vec![
            (Value::from("a"), Value::from(1u8)),
            (Value::from("b"), ints(&[2, 3])),
        ]),
        "a26161016162820203",
    );
    assert_encode(
        Value::Array(vec![
            Value::from("a"),
            Value::Map(vec![(Value::from("b"), Value::from("c"))]),
        ]),
        "826161a161626163",
    );

    let letters = ["a", "b", "c", "d", "e"];
    let pairs = letters
        .iter()
        .map(|k| (Value::from(*k), Value::from(k.to_uppercase())))
        .collect();
    assert_encode(
        Value::Map(pairs),
        "a56161614161626142616361436164614461656145",
    );
}

#[test]
fn test_wide_word_small_values() {
    // Declared width never forces the bignum form.
    assert_encode(Value::from(U256::from(1000u16)), "1903e8");
    assert_encode(Value::from(I256::from(-1000i16)), "3903e7");
}

#[test]
fn test_newtype_struct_encoding() {
    use serde::Serialize;

    // Newtype structs should encode as their inner value, not as a map
    #[derive(Serialize)]
    struct UserId(u64);

    assert_eq!(hex_from_bytes(&to_vec(&UserId(42)).unwrap()), "182a");

    #[derive(Serialize)]
    struct Name(String);

    assert_eq!(
        hex_from_bytes(&to_vec(&Name("Alice".to_string())).unwrap()),
        "65416c696365"
    );
}

// Helper functions

fn ints(values: &[u64]) -> Value {
    Value::Array(values.iter().copied().map(Value::from).collect())
}

fn assert_encode(value: Value, expected_hex: &str) {
    let encoded = value.to_vec().unwrap();
    assert_eq!(
        hex_from_bytes(&encoded),
        expected_hex,
        "Encoding mismatch for {:?}",
        value
    );
}

fn hex_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
