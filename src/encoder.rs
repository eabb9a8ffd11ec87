use alloc::vec::Vec;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{CborError, Result};
use crate::int::IntClass;
use crate::value::Value;
use crate::wide::{I256, U256};
use crate::{
    BREAK, FALSE, INDEFINITE, MAJOR_ARRAY, MAJOR_BYTES, MAJOR_MAP, MAJOR_NEGATIVE, MAJOR_SIMPLE,
    MAJOR_TAG, MAJOR_TEXT, MAJOR_UNSIGNED, NULL, TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM, TRUE,
    UNDEFINED,
};

/// How the payload of a tag 2/3 bignum is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BignumPayload {
    /// Always the full wide word (`WIDE_BYTES` bytes), leading zeros kept.
    #[default]
    Fixed,
    /// Leading zero bytes stripped, as preferred by RFC 8949 §3.4.3.
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderConfig {
    pub bignum_payload: BignumPayload,
}

/// Append-only CBOR builder.
///
/// Each `put_*`/`start_*` call appends exactly one item (or container
/// header) and returns the encoder again so calls can be chained:
///
/// ```
/// use wide_cbor::Encoder;
///
/// let mut enc = Encoder::new();
/// enc.start_map(1)?.put_text("key1")?.put_text("value1")?;
/// assert_eq!(enc.finish()?, b"\xa1\x64key1\x66value1");
/// # Ok::<(), wide_cbor::CborError>(())
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    config: EncoderConfig,
    open_indefinite: usize,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Encoder {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes written so far. Not a complete document while containers are
    /// open.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        if let Err(e) = self.buf.try_reserve(bytes.len()) {
            warn!(len = self.buf.len(), additional = bytes.len(), "output buffer growth failed");
            return Err(CborError::Alloc(e));
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Initial byte plus the shortest argument that holds `value`.
    fn write_type_value(&mut self, major: u8, value: u64) -> Result<()> {
        let mut head = [0u8; 9];
        let len = if value < 24 {
            head[0] = (major << 5) | value as u8;
            1
        } else if value <= u8::MAX as u64 {
            head[0] = (major << 5) | 24;
            head[1] = value as u8;
            2
        } else if value <= u16::MAX as u64 {
            head[0] = (major << 5) | 25;
            head[1..3].copy_from_slice(&(value as u16).to_be_bytes());
            3
        } else if value <= u32::MAX as u64 {
            head[0] = (major << 5) | 26;
            head[1..5].copy_from_slice(&(value as u32).to_be_bytes());
            5
        } else {
            head[0] = (major << 5) | 27;
            head[1..9].copy_from_slice(&value.to_be_bytes());
            9
        };
        self.emit(&head[..len])
    }

    fn write_int(&mut self, class: IntClass) -> Result<()> {
        match class {
            IntClass::Unsigned(n) => self.write_type_value(MAJOR_UNSIGNED, n),
            IntClass::Negative(n) => self.write_type_value(MAJOR_NEGATIVE, n),
            IntClass::PositiveBignum(n) => self.write_bignum(TAG_POSITIVE_BIGNUM, &n),
            IntClass::NegativeBignum(n) => self.write_bignum(TAG_NEGATIVE_BIGNUM, &n),
        }
    }

    fn write_bignum(&mut self, tag: u64, magnitude: &U256) -> Result<()> {
        trace!(tag, "integer exceeds 64 bits, writing bignum");
        self.write_type_value(MAJOR_TAG, tag)?;
        match self.config.bignum_payload {
            BignumPayload::Fixed => self.write_bytes(magnitude.as_be_bytes()),
            BignumPayload::Minimal => self.write_bytes(magnitude.significant_bytes()),
        }
    }

    fn write_bytes(&mut self, v: &[u8]) -> Result<()> {
        self.write_type_value(MAJOR_BYTES, v.len() as u64)?;
        self.emit(v)
    }

    fn write_simple(&mut self, value: u8) -> Result<()> {
        self.emit(&[(MAJOR_SIMPLE << 5) | value])
    }

    /// Writes an unsigned integer: major type 0 up to 2^64 - 1, tag 2 above.
    pub fn put_unsigned(&mut self, v: impl Into<U256>) -> Result<&mut Self> {
        self.write_int(IntClass::unsigned(v.into()))?;
        Ok(self)
    }

    /// Writes a signed integer: major type 0/1 while the CBOR argument fits
    /// 64 bits, tag 2/3 beyond.
    pub fn put_signed(&mut self, v: impl Into<I256>) -> Result<&mut Self> {
        self.write_int(IntClass::signed(v.into()))?;
        Ok(self)
    }

    /// Writes `v` as a tag 2 bignum even if it would fit the compact form.
    pub fn put_bignum(&mut self, v: impl Into<U256>) -> Result<&mut Self> {
        self.write_int(IntClass::PositiveBignum(v.into()))?;
        Ok(self)
    }

    /// Writes `v` as a tag 2 (non-negative) or tag 3 (negative) bignum even
    /// if it would fit the compact form.
    pub fn put_signed_bignum(&mut self, v: impl Into<I256>) -> Result<&mut Self> {
        self.write_int(IntClass::signed_bignum(v.into()))?;
        Ok(self)
    }

    pub fn put_tag(&mut self, tag: u64) -> Result<&mut Self> {
        self.write_type_value(MAJOR_TAG, tag)?;
        Ok(self)
    }

    pub fn put_text(&mut self, v: &str) -> Result<&mut Self> {
        self.write_type_value(MAJOR_TEXT, v.len() as u64)?;
        self.emit(v.as_bytes())?;
        Ok(self)
    }

    pub fn put_bytes(&mut self, v: &[u8]) -> Result<&mut Self> {
        self.write_bytes(v)?;
        Ok(self)
    }

    pub fn put_bool(&mut self, v: bool) -> Result<&mut Self> {
        self.write_simple(if v { TRUE } else { FALSE })?;
        Ok(self)
    }

    pub fn put_null(&mut self) -> Result<&mut Self> {
        self.write_simple(NULL)?;
        Ok(self)
    }

    pub fn put_undefined(&mut self) -> Result<&mut Self> {
        self.write_simple(UNDEFINED)?;
        Ok(self)
    }

    /// Opens an array of `count` items, or an indefinite-length array when
    /// `count` is `None`. The latter must be closed with
    /// [`end_indefinite`](Self::end_indefinite).
    pub fn start_array(&mut self, count: Option<usize>) -> Result<&mut Self> {
        match count {
            Some(count) => self.write_type_value(MAJOR_ARRAY, count as u64)?,
            None => {
                self.emit(&[(MAJOR_ARRAY << 5) | INDEFINITE])?;
                self.open_indefinite += 1;
            }
        }
        Ok(self)
    }

    /// Opens a map of `count` key/value pairs. Keys are written in call
    /// order and are neither sorted nor deduplicated.
    pub fn start_map(&mut self, count: usize) -> Result<&mut Self> {
        self.write_type_value(MAJOR_MAP, count as u64)?;
        Ok(self)
    }

    /// Closes the innermost indefinite-length container.
    pub fn end_indefinite(&mut self) -> Result<&mut Self> {
        if self.open_indefinite == 0 {
            warn!("break requested with no open indefinite-length container");
            return Err(CborError::UnbalancedBreak);
        }
        self.emit(&[BREAK])?;
        self.open_indefinite -= 1;
        Ok(self)
    }

    /// Writes a whole [`Value`] tree.
    pub fn put_value(&mut self, value: &Value) -> Result<&mut Self> {
        self.write_value(value)?;
        Ok(self)
    }

    fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Unsigned(v) => self.write_int(IntClass::unsigned(*v)),
            Value::Signed(v) => self.write_int(IntClass::signed(*v)),
            Value::Text(s) => {
                self.write_type_value(MAJOR_TEXT, s.len() as u64)?;
                self.emit(s.as_bytes())
            }
            Value::Bytes(b) => self.write_bytes(b),
            Value::Bool(b) => self.write_simple(if *b { TRUE } else { FALSE }),
            Value::Null => self.write_simple(NULL),
            Value::Undefined => self.write_simple(UNDEFINED),
            Value::Array(items) => {
                self.start_array(Some(items.len()))?;
                items.iter().try_for_each(|item| self.write_value(item))
            }
            Value::IndefiniteArray(items) => {
                self.start_array(None)?;
                items.iter().try_for_each(|item| self.write_value(item))?;
                self.end_indefinite()?;
                Ok(())
            }
            Value::Map(pairs) => {
                self.start_map(pairs.len())?;
                pairs.iter().try_for_each(|(k, v)| {
                    self.write_value(k)?;
                    self.write_value(v)
                })
            }
        }
    }

    /// Encodes any `Serialize` value through the serde adapter.
    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        value.serialize(&mut *self)?;
        Ok(self)
    }

    /// Returns the finished document.
    pub fn finish(self) -> Result<Vec<u8>> {
        if self.open_indefinite > 0 {
            warn!(open = self.open_indefinite, "finishing with open containers");
            return Err(CborError::UnterminatedContainer(self.open_indefinite));
        }
        debug!(len = self.buf.len(), "finished CBOR document");
        Ok(self.buf)
    }
}
