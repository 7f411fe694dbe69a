use crate::config::BUFFER_CAPACITY;
use crate::error::Error;
use heapless::Vec;

/// Fixed-capacity scratch buffer a property block is encoded into.
///
/// Writes are all-or-nothing: a write that does not fit leaves the buffer
/// untouched and fails with `PayloadTooLarge`.
#[derive(Debug, Clone, Default)]
pub struct BlockWriter<const N: usize = BUFFER_CAPACITY> {
    buf: Vec<u8, N>,
}

impl<const N: usize> BlockWriter<N> {
    pub fn new() -> Self {
        BlockWriter { buf: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes that can still be written.
    pub fn remaining(&self) -> usize {
        N - self.buf.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> std::vec::Vec<u8> {
        self.buf.to_vec()
    }

    pub fn put_u8(&mut self, v: u8) -> Result<(), Error> {
        self.put_bytes(&[v])
    }

    pub fn put_u32_le(&mut self, v: u32) -> Result<(), Error> {
        self.put_bytes(&v.to_le_bytes())
    }

    pub fn put_f32_le(&mut self, v: f32) -> Result<(), Error> {
        self.put_bytes(&v.to_le_bytes())
    }

    pub fn put_bytes(&mut self, v: &[u8]) -> Result<(), Error> {
        if v.len() > self.remaining() {
            return Err(Error::payload_too_large(self.len() + v.len(), N));
        }
        let needed = self.len() + v.len();
        self.buf
            .extend_from_slice(v)
            .map_err(|_| Error::payload_too_large(needed, N))
    }

    /// Writes `{len, bytes}`. An empty string writes nothing at all, not even
    /// the length byte.
    pub fn put_str(&mut self, s: &[u8]) -> Result<(), Error> {
        if s.is_empty() {
            return Ok(());
        }
        let len = u8::try_from(s.len()).map_err(|_| {
            Error::payload_too_large(s.len(), u8::MAX as usize)
        })?;
        if 1 + s.len() > self.remaining() {
            return Err(Error::payload_too_large(self.len() + 1 + s.len(), N));
        }
        self.put_u8(len)?;
        self.put_bytes(s)
    }
}
