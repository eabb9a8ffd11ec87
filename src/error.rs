use alloc::collections::TryReserveError;
use alloc::string::{String, ToString};
use core::fmt::Display;

/// Errors raised while building a CBOR document.
///
/// Every integer, string and simple value is encodable, so the only failure
/// of the core encoder is running out of memory for the output buffer. The
/// remaining variants come from misuse of indefinite-length framing or from
/// the serde adapter. On any error the in-progress document must be
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CborError {
    #[error("failed to grow output buffer: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("break byte written with no open indefinite-length container")]
    UnbalancedBreak,
    #[error("{0} indefinite-length container(s) left open")]
    UnterminatedContainer(usize),
    #[error("floating point values are not supported")]
    UnsupportedFloat,
    #[error("indefinite-length maps are not supported")]
    IndefiniteMap,
    #[error("serde error: {0}")]
    Serde(String),
}

impl serde::ser::Error for CborError {
    fn custom<T: Display>(msg: T) -> Self {
        CborError::Serde(msg.to_string())
    }
}

pub type Result<T> = core::result::Result<T, CborError>;

pub use CborError as Error;
