//! Message framing: splits a message into padded 512-bit blocks.
//!
//! Full 64-byte blocks are borrowed from the input as-is. Only the tail
//! (the trailing partial block, the `0x80` marker, zero padding and the
//! 64-bit big-endian bit length) is materialised, which takes one block,
//! or two when the remainder leaves no room for the length field.

use crate::error::{Error, Result};
use crate::writer::Writer;

/// Size of one SHA-1 block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Offset within the final block where the bit-length field starts.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Marker byte appended directly after the message.
const PADDING_MARKER: u8 = 0x80;

/// One 64-byte block of the padded message.
pub type Block = [u8; BLOCK_SIZE];

/// Returns the message length in bits, or `None` if it overflows 64 bits.
#[must_use]
pub fn bit_len(len: usize) -> Option<u64> {
    u64::try_from(len).ok()?.checked_mul(8)
}

/// Length of the padded message in bytes.
///
/// Returns `None` for messages whose bit length does not fit 64 bits.
#[must_use]
pub fn padded_len(len: usize) -> Option<u64> {
    bit_len(len)?;
    let len = len as u64;
    // len < 2^61 here, so neither addition can overflow.
    Some((len + 8) / BLOCK_SIZE as u64 * BLOCK_SIZE as u64 + BLOCK_SIZE as u64)
}

/// Number of blocks the padded message occupies: `ceil((len + 9) / 64)`.
#[must_use]
pub fn block_count(len: usize) -> Option<u64> {
    padded_len(len).map(|padded| padded / BLOCK_SIZE as u64)
}

/// Iterator over the padded blocks of a message.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    body: std::slice::ChunksExact<'a, u8>,
    tail: Vec<u8>,
    tail_pos: usize,
}

impl<'a> Blocks<'a> {
    /// Frame `data` into blocks.
    ///
    /// Fails with [`Error::MessageTooLong`] if the bit length of `data` does
    /// not fit the 64-bit length field.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let bits = bit_len(data.len()).ok_or(Error::MessageTooLong { len: data.len() })?;

        let body = data.chunks_exact(BLOCK_SIZE);
        let remainder = body.remainder();

        let mut tail = Writer::with_capacity(2 * BLOCK_SIZE);
        tail.write_bytes(remainder);
        tail.write_u8(PADDING_MARKER);
        tail.pad_to(LENGTH_OFFSET, BLOCK_SIZE);
        tail.write_u64(bits);
        debug_assert_eq!(tail.len() % BLOCK_SIZE, 0);

        Ok(Self {
            body,
            tail: tail.into_inner(),
            tail_pos: 0,
        })
    }

    fn next_tail(&mut self) -> Option<Block> {
        let chunk = self.tail.get(self.tail_pos..self.tail_pos + BLOCK_SIZE)?;
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        self.tail_pos += BLOCK_SIZE;
        Some(block)
    }

    fn tail_blocks_left(&self) -> usize {
        (self.tail.len() - self.tail_pos) / BLOCK_SIZE
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(chunk) = self.body.next() {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            return Some(block);
        }
        self.next_tail()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.body.len() + self.tail_blocks_left();
        (left, Some(left))
    }
}

impl ExactSizeIterator for Blocks<'_> {}
