//! The five-word SHA-1 state: compression rounds and accumulation.

use crate::schedule::{SCHEDULE_LEN, Schedule};

/// Initial digest state (FIPS 180-1).
pub const INITIAL_STATE: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds.
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// Persistent digest state carried from one block to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    h: [u32; 5],
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// A fresh state holding the initial constants.
    #[must_use]
    pub const fn new() -> Self {
        Self { h: INITIAL_STATE }
    }

    /// The current state words `[a, b, c, d, e]`.
    #[must_use]
    pub const fn words(&self) -> [u32; 5] {
        self.h
    }

    /// Compress one scheduled block and fold the result into the state.
    pub fn update(&mut self, schedule: &Schedule) {
        let registers = compress(self.h, schedule);
        self.accumulate(registers);
    }

    /// Word-wise wrapping addition of the compressed registers.
    fn accumulate(&mut self, registers: [u32; 5]) {
        for (h, r) in self.h.iter_mut().zip(registers) {
            *h = h.wrapping_add(r);
        }
    }
}

/// Round function and constant for round `i`.
#[inline]
fn round_fk(i: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match i {
        0..=19 => ((b & c) | (!b & d), K[0]),
        20..=39 => (b ^ c ^ d, K[1]),
        40..=59 => ((b & c) | (b & d) | (c & d), K[2]),
        _ => (b ^ c ^ d, K[3]),
    }
}

/// Run the 80 rounds over working registers seeded from `state`.
///
/// Returns the working registers after the last round; the caller adds
/// them into the digest state.
#[must_use]
pub fn compress(state: [u32; 5], schedule: &Schedule) -> [u32; 5] {
    let [mut a, mut b, mut c, mut d, mut e] = state;

    for i in 0..SCHEDULE_LEN {
        let (f, k) = round_fk(i, b, c, d);
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(schedule.word(i));
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    [a, b, c, d, e]
}
