//! Encoder configuration.
//!
//! Defaults match the wire format expected by property-sheet clients; change
//! them only when talking to a client built against different limits.

use crate::uuid::PROPERTY_DESCRIPTOR_UUID;
use uuid::Uuid;

/// Longest name, title or option string carried in a block, in bytes.
pub const MAX_STRING_LEN: usize = 64;

/// Capacity of the scratch buffer a block is encoded into.
pub const BUFFER_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    /// Identifier of the descriptor each block is attached under.
    pub descriptor_uuid: Uuid,
    /// Names and titles longer than this are truncated, option strings are rejected.
    /// Values above 255 are clamped to fit the 1-byte length prefix.
    pub max_string_len: usize,
    /// Sort position handed to the first property.
    pub first_sort_position: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            descriptor_uuid: PROPERTY_DESCRIPTOR_UUID,
            max_string_len: MAX_STRING_LEN,
            first_sort_position: 0,
        }
    }
}

impl EncoderConfig {
    pub(crate) fn string_limit(&self) -> usize {
        self.max_string_len.min(u8::MAX as usize)
    }
}
