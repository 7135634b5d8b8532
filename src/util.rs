//! Miscellaneous helpers shared by the window functions and the rolling
//! iterator:
//!
//! - **`canonical`** — pick the strand‑independent value of a forward /
//!   reverse‑complement pair.
//! - **`extend_hashes`** — derive extra hash values from one base hash by
//!   multiplicative mixing, writing into a caller‑owned slice.
//! - **`multi_hash`** — allocating convenience over `extend_hashes`.
//!
//! The extra values are correlated with the base hash. They are meant for
//! picking several slots in a Bloom filter or count‑min sketch, not as
//! independent hash functions.

use crate::constants::{MULTI_SEED, MULTI_SHIFT};

/// Strand‑independent hash of a forward / reverse‑complement pair.
///
/// Returns the smaller of the two. The reverse value is only chosen when it
/// is *strictly* smaller, so ties (palindromic windows) resolve to `fwd`.
///
/// # Examples
///
/// ```
/// # use nthash_roll::util::canonical;
/// assert_eq!(canonical(5, 3), 3);
/// assert_eq!(canonical(3, 5), 3);
/// assert_eq!(canonical(7, 7), 7);
/// ```
#[inline(always)]
pub const fn canonical(fwd: u64, rev: u64) -> u64 {
    if rev < fwd {
        rev
    } else {
        fwd
    }
}

/// Mix for the `i`‑th extra hash of `base` (`i ≥ 1`).
#[inline(always)]
const fn mix(base: u64, k: u64, i: u64) -> u64 {
    let t = base.wrapping_mul(i ^ k.wrapping_mul(MULTI_SEED));
    t ^ (t >> MULTI_SHIFT)
}

/// Fill `hashes` with `base` followed by derived values.
///
/// ```text
///   h_0 = base
///   h_i = t ^ (t >> MULTI_SHIFT)   where t = base * (i ^ (k * MULTI_SEED))
/// ```
///
/// All arithmetic wraps. The slice length decides how many values are
/// produced; an empty slice is left untouched.
///
/// # Examples
///
/// ```
/// # use nthash_roll::util::extend_hashes;
/// let mut out = [0u64; 4];
/// extend_hashes(0x1234, 5, &mut out);
/// assert_eq!(out[0], 0x1234);
/// assert!(out[1] != out[0]);
/// ```
#[inline]
pub fn extend_hashes(base: u64, k: usize, hashes: &mut [u64]) {
    let Some((first, rest)) = hashes.split_first_mut() else {
        return;
    };
    *first = base;
    for (i, slot) in rest.iter_mut().enumerate() {
        *slot = mix(base, k as u64, i as u64 + 1);
    }
}

/// Allocate a vector of `count` values derived from `base`.
///
/// `count == 0` yields an empty vector.
pub fn multi_hash(base: u64, k: usize, count: usize) -> Vec<u64> {
    let mut out = vec![0; count];
    extend_hashes(base, k, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_prefers_forward_on_tie() {
        assert_eq!(canonical(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(canonical(0, u64::MAX), 0);
        assert_eq!(canonical(u64::MAX, 0), 0);
    }

    #[test]
    fn extend_zero_length_slice() {
        let mut out: [u64; 0] = [];
        extend_hashes(123, 7, &mut out);
        // no panic, no change
    }

    #[test]
    fn extend_matches_reference_mix() {
        const BASE: u64 = 0x1234_5678_9ABC_DEF0;
        const K: usize = 21;
        let mut v = [0u64; 8];
        extend_hashes(BASE, K, &mut v);
        for (i, &h) in v.iter().enumerate() {
            let expected = if i == 0 {
                BASE
            } else {
                let mut t = BASE.wrapping_mul((i as u64) ^ (K as u64).wrapping_mul(MULTI_SEED));
                t ^= t >> MULTI_SHIFT;
                t
            };
            assert_eq!(h, expected);
        }
    }

    #[test]
    fn multi_hash_known_values() {
        // 6-mer ATCGTA and CTGACG rows of the C++ reference output
        assert_eq!(
            multi_hash(0x245f_4291_74d6_e9b1, 6, 3),
            [0x245f_4291_74d6_e9b1, 0x43de_f5f7_31c6_a724, 0x683e_389d_b928_1069]
        );
        assert_eq!(
            multi_hash(0xfc22_67e8_f5d6_5148, 6, 3),
            [0xfc22_67e8_f5d6_5148, 0x8e6a_aa7c_9b15_0e82, 0x8a8d_1247_1db4_deb9]
        );
    }

    #[test]
    fn multi_hash_is_deterministic() {
        let a = multi_hash(0x9b1e_da9a_1854_13ce, 3, 5);
        let b = multi_hash(0x9b1e_da9a_1854_13ce, 3, 5);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert_eq!(a[0], 0x9b1e_da9a_1854_13ce);
        assert!(multi_hash(42, 3, 0).is_empty());
        assert_eq!(multi_hash(42, 3, 1), vec![42]);
    }

    #[test]
    fn multi_hash_depends_on_k() {
        let a = multi_hash(0xdead_beef, 5, 3);
        let b = multi_hash(0xdead_beef, 6, 3);
        assert_eq!(a[0], b[0]);
        assert_ne!(a[1..], b[1..]);
    }

    #[test]
    fn longer_vector_extends_shorter() {
        let short = multi_hash(0xcafe_babe, 11, 3);
        let long = multi_hash(0xcafe_babe, 11, 6);
        assert_eq!(short[..], long[..3]);
    }
}
