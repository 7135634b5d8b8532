//! Low‑level **seed lookup** and **rotation** primitives for ntHash.
//!
//! Every hash in this crate is built from two operations: fetch the 64‑bit
//! seed of a base (forward or complementary strand) and rotate a 64‑bit
//! word. Both compile down to a table load or a single `rol`/`ror`.

use crate::constants::{RC_SEED_TAB, SEED_TAB};

/// Forward‑strand seed of `base`. Unrecognised bytes yield `0`.
#[inline(always)]
pub const fn seed(base: u8) -> u64 {
    SEED_TAB[base as usize]
}

/// Seed of the complement of `base` (`A`↔`T`, `C`↔`G`).
/// Unrecognised bytes yield `0`.
#[inline(always)]
pub const fn seed_complement(base: u8) -> u64 {
    RC_SEED_TAB[base as usize]
}

/// Circular rotate left by `n` bits.
///
/// `n` is taken modulo 64; a reduced distance of zero returns `v` as is.
#[inline(always)]
pub const fn rol(v: u64, n: u32) -> u64 {
    let n = n & 63;
    if n == 0 {
        return v;
    }
    (v << n) | (v >> (64 - n))
}

/// Circular rotate right by `n` bits. Inverse of [`rol`].
#[inline(always)]
pub const fn ror(v: u64, n: u32) -> u64 {
    let n = n & 63;
    if n == 0 {
        return v;
    }
    (v >> n) | (v << (64 - n))
}
