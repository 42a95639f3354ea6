//! # sha1lite
//!
//! SHA-1 (FIPS 180-1) message digests in safe Rust.
//!
//! This crate hashes a complete in-memory byte buffer and returns a 160-bit
//! [`Digest`], available as 20 big-endian bytes or a 40-character lowercase
//! hex string. All word arithmetic is explicit wrapping arithmetic and all
//! byte-order conversions are explicit, so results do not depend on the host.
//!
//! SHA-1 is broken for collision resistance. Use it for interoperability
//! (content addressing, legacy protocols), not for new security designs.
//!
//! ## Example
//!
//! ```
//! let digest = sha1lite::hash(b"abc")?;
//! assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert_eq!(digest.to_bytes()[..4], [0xa9, 0x99, 0x3e, 0x36]);
//! # Ok::<(), sha1lite::Error>(())
//! ```
//!
//! ## Limits
//!
//! The padded message stores the message length in bits as a 64-bit field.
//! Messages of 2^61 bytes or more do not fit and are rejected with
//! [`Error::MessageTooLong`]; the length is never truncated.

mod block;
mod digest;
mod error;
mod schedule;
mod state;
mod writer;

pub use block::{BLOCK_SIZE, block_count, padded_len};
pub use digest::{DIGEST_HEX_LEN, DIGEST_LEN, Digest};
pub use error::{Error, Result};

use block::Blocks;
use schedule::Schedule;
use state::State;

/// Compute the SHA-1 digest of `data`.
///
/// Fails only with [`Error::MessageTooLong`] when `data` is 2^61 bytes or
/// longer.
pub fn hash(data: &[u8]) -> Result<Digest> {
    let blocks = Blocks::new(data).inspect_err(|err| {
        tracing::debug!(len = data.len(), %err, "rejecting message");
    })?;
    tracing::trace!(len = data.len(), blocks = blocks.len(), "hashing message");

    let mut state = State::new();
    for block in blocks {
        state.update(&Schedule::expand(&block));
    }
    Ok(Digest::from_words(state.words()))
}
