//! Message schedule expansion.

use crate::block::Block;

/// Number of words in the expanded schedule, one per round.
pub const SCHEDULE_LEN: usize = 80;

/// The 80-word message schedule derived from one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    words: [u32; SCHEDULE_LEN],
}

impl Schedule {
    /// Expand a block into its message schedule.
    ///
    /// The first 16 words are the block read as big-endian u32s; each
    /// following word is `rotl1(w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16])`.
    pub fn expand(block: &Block) -> Self {
        let mut words = [0u32; SCHEDULE_LEN];
        for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        for i in 16..SCHEDULE_LEN {
            words[i] = (words[i - 3] ^ words[i - 8] ^ words[i - 14] ^ words[i - 16]).rotate_left(1);
        }
        Self { words }
    }

    /// Word for round `i`.
    #[must_use]
    pub fn word(&self, i: usize) -> u32 {
        self.words[i]
    }
}
