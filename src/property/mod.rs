//! Property-sheet metadata carried in a single characteristic descriptor.
//!
//! A block is laid out as
//!
//! ```text
//! type(1) sort(1) reserved(2) name_len(1) name
//!     [0x01 title_len(1) title]
//!     [tag(1) payload]
//! ```
//!
//! Clients read the block to decide which control to render for the
//! characteristic and where to place it in the sheet.

mod block;
mod encoder;
mod writer;

pub use block::{Payload, PropertyBlock};
pub use encoder::{
    shared, PropertyEncoder, PropertyKind, DEFAULT_FLOAT_INCREMENT, DEFAULT_INT_INCREMENT,
};
pub use writer::BlockWriter;

use crate::error::Error;
use num_enum::{IntoPrimitive, TryFromPrimitive, TryFromPrimitiveError};

/// Kind of control a property is rendered as. The discriminant is the wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PropertyType {
    Bool = 0x01,
    Int = 0x02,
    Range = 0x03,
    Text = 0x04,
    /// Value is a `YYYY-MM-DD` string.
    Date = 0x05,
    /// Value is an `HH:MM` string.
    Time = 0x06,
    Float = 0x07,
    Select = 0x08,
}

/// One-byte discriminator for the optional sub-blocks following the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum BlockTag {
    Title = 0x01,
    Range = 0x02,
    SelectOptions = 0x03,
    Increment = 0x04,
}

impl From<TryFromPrimitiveError<PropertyType>> for Error {
    fn from(err: TryFromPrimitiveError<PropertyType>) -> Self {
        Error::malformed(format!("unknown property type {:#04x}", err.number))
    }
}

impl From<TryFromPrimitiveError<BlockTag>> for Error {
    fn from(err: TryFromPrimitiveError<BlockTag>) -> Self {
        Error::malformed(format!("unknown block tag {:#04x}", err.number))
    }
}

/// Longest prefix of `s` that is at most `limit` bytes and ends on a char boundary.
pub(crate) fn clamp_str(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
