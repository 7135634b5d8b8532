//! # nthash‑roll
//!
//! A pure‑Rust rolling *ntHash* for contiguous DNA k‑mers.
//!
//! Given a sequence and a window length `k`, [`NtHash`] yields one 64‑bit
//! hash per window in **O(1)** per base by updating the previous window's
//! forward and reverse‑complement hashes. The *canonical* value (the
//! smaller of the two) is identical for a k‑mer and its reverse complement.
//! Several decorrelated values per window can be derived for Bloom‑filter
//! style structures.
//!
//! The hash is not collision resistant against adversarial input.
//!
//! ## Example
//!
//! ```rust
//! use nthash_roll::{NtHash, Result};
//!
//! fn main() -> Result<()> {
//!     let mut hasher = NtHash::new(b"ACTGC", 3)?;
//!
//!     assert_eq!(hasher.next_hash(true), Some(0x9b1e_da9a_1854_13ce));
//!
//!     // three values per window, canonical first
//!     while let Some(hashes) = hasher.next_multi_hash(true, 3) {
//!         println!("{:#x} {:#x} {:#x}", hashes[0], hashes[1], hashes[2]);
//!     }
//!     assert!(hasher.is_exhausted());
//!     Ok(())
//! }
//! ```

/// Seed constants and lookup tables.
pub mod constants;
mod tables;

pub mod util;
/// Window hashes and the rolling k‑mer hasher.
pub mod kmer;

// ──────────────────────────────────────────────────────────────
// Re‑exports: public API surface
// --------------------------------------------------------------------------

/// Circular rotate left.
pub use tables::rol;
/// Circular rotate right.
pub use tables::ror;
/// Forward‑strand seed of a base.
pub use tables::seed;
/// Complementary‑strand seed of a base.
pub use tables::seed_complement;

/// Strand‑independent value of a forward / reverse pair.
pub use util::canonical;
/// Derive multiple hash values from a single base hash.
pub use util::extend_hashes;
/// Allocate derived hash values from a single base hash.
pub use util::multi_hash;

pub use kmer::{canonical_hash, forward_hash, nthash, reverse_hash};

/// Primary rolling k‑mer hasher.
///
/// See [`kmer::NtHash`] for full documentation.
pub use kmer::NtHash;
pub use kmer::{Hashes, MultiHashes};
pub use kmer::{NtHashBuilder, NtHashIter};

pub use constants::MAXIMUM_K_SIZE;

// ──────────────────────────────────────────────────────────────
// Crate‑wide result and error types
// --------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate’s operations.
pub type Result<T, E = NtHashError> = std::result::Result<T, E>;

/// Errors raised when constructing a hasher. Stepping never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NtHashError {
    /// `k` was zero or longer than the sequence.
    #[error("invalid window size: k ({k}) must be between 1 and the sequence length ({seq_len})")]
    InvalidWindowSize { k: usize, seq_len: usize },

    /// `k` exceeds the configured ceiling.
    #[error("window size too large: k ({k}) exceeds the maximum allowed k ({max_k})")]
    WindowSizeTooLarge { k: usize, max_k: usize },
}

// ──────────────────────────────────────────────────────────────
// Basic smoke tests
// --------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_kmer() {
        let mut h = NtHash::new(b"ACGTACGT", 4).unwrap();
        assert!(h.next_hash(true).is_some());
        assert_eq!(h.remaining(), 4);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NtHashError::InvalidWindowSize { k: 10, seq_len: 5 }.to_string(),
            "invalid window size: k (10) must be between 1 and the sequence length (5)"
        );
        assert_eq!(
            NtHashError::WindowSizeTooLarge { k: 40, max_k: 31 }.to_string(),
            "window size too large: k (40) exceeds the maximum allowed k (31)"
        );
    }
}
