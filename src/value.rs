use alloc::string::String;
use alloc::vec::Vec;

use crate::encoder::Encoder;
use crate::error::Result;
use crate::wide::{I256, U256};

/// An owned CBOR document tree.
///
/// Useful when a document is assembled before it is written, or when the
/// same document is written more than once.
///
/// # Example
/// ```
/// use wide_cbor::Value;
///
/// let doc = Value::Map(vec![(Value::from("key1"), Value::from("value1"))]);
/// assert_eq!(doc.to_vec().unwrap(), b"\xa1\x64key1\x66value1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned integer, major type 0 or tag 2
    Unsigned(U256),
    /// Signed integer, major type 0/1 or tag 2/3
    Signed(I256),
    /// Text string
    Text(String),
    /// Byte string
    Bytes(Vec<u8>),
    /// Boolean value
    Bool(bool),
    /// Null value
    Null,
    /// Undefined value
    Undefined,
    /// Definite-length array
    Array(Vec<Value>),
    /// Indefinite-length array, closed by a break byte
    IndefiniteArray(Vec<Value>),
    /// Map, written in the given pair order
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Encodes this value as a standalone document.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut enc = Encoder::new();
        enc.put_value(self)?;
        enc.finish()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Unsigned(_) | Value::Signed(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_) | Value::IndefiniteArray(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Items of either array form.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) | Value::IndefiniteArray(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// First value stored under a text key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::Unsigned(v)
    }
}

impl From<I256> for Value {
    fn from(v: I256) -> Self {
        Value::Signed(v)
    }
}

macro_rules! impl_value_from_int {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from_int!(Unsigned: u8, u16, u32, u64, u128, usize);
impl_value_from_int!(Signed: i8, i16, i32, i64, i128, isize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
