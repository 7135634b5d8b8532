//! Rolling **ntHash** over the contiguous k‑mers of a DNA sequence.
//!
//! The first window is hashed from scratch in **O(k)**; every following
//! window is derived from the previous one in **O(1)** using the base that
//! leaves and the base that enters the window.
//!
//! Unlike the reference C++ hasher, windows containing `N` (or any other
//! unrecognised byte) are *not* skipped: such bases contribute a zero seed
//! and the iterator yields one value for every one of the
//! `seq.len() - k + 1` windows.
//!
//! Three ways in:
//! - [`NtHash`]: the bare state machine, stepped with
//!   [`next_hash`](NtHash::next_hash) and friends.
//! - [`Hashes`] / [`MultiHashes`]: `Iterator` adapters over an `NtHash`.
//! - [`NtHashBuilder`] / [`NtHashIter`]: builder facade yielding
//!   `(pos, Vec<u64>)`.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::{
    constants::MAXIMUM_K_SIZE,
    tables::{rol, ror, seed, seed_complement},
    util::{canonical, extend_hashes},
    NtHashError, Result,
};

// -------------------------------------------------------------------------
// From‑scratch window hashes
// -------------------------------------------------------------------------

/// Forward‑strand hash of `window`.
///
/// ```
/// # use nthash_roll::forward_hash;
/// assert_eq!(forward_hash(b"TGCAG"), 0x0baf_a672_8fc6_dabf);
/// ```
#[inline]
pub fn forward_hash(window: &[u8]) -> u64 {
    window.iter().fold(0, |h, &b| rol(h, 1) ^ seed(b))
}

/// Reverse‑complement hash of `window`.
///
/// ```
/// # use nthash_roll::reverse_hash;
/// assert_eq!(reverse_hash(b"TGCAG"), 0x8cf2_d407_2cca_480e);
/// ```
#[inline]
pub fn reverse_hash(window: &[u8]) -> u64 {
    window
        .iter()
        .rev()
        .fold(0, |h, &b| rol(h, 1) ^ seed_complement(b))
}

/// Strand‑independent hash of `window`; see [`canonical`].
///
/// ```
/// # use nthash_roll::canonical_hash;
/// assert_eq!(canonical_hash(b"TGCAG"), 0x0baf_a672_8fc6_dabf);
/// ```
#[inline]
pub fn canonical_hash(window: &[u8]) -> u64 {
    canonical(forward_hash(window), reverse_hash(window))
}

/// Canonical hash of every k‑mer in `seq`, each computed from scratch.
///
/// This is **O(n·k)** and exists as a reference for [`NtHash`]. Returns an
/// empty vector when `k` is zero or longer than `seq`.
pub fn nthash(seq: &[u8], k: usize) -> Vec<u64> {
    if k == 0 || k > seq.len() {
        return Vec::new();
    }
    seq.windows(k).map(canonical_hash).collect()
}

// -------------------------------------------------------------------------
// Rolling state machine
// -------------------------------------------------------------------------

/// Rolling k‑mer hasher over a borrowed sequence.
///
/// The hasher starts *active* with the hashes of `seq[0..k]` precomputed.
/// Each successful step yields the hash of the window starting at
/// [`pos`](Self::pos) and moves on. After `seq.len() - k + 1` steps it is
/// *exhausted* and every further step returns `None`.
///
/// The sequence must not change while the hasher borrows it.
#[derive(Debug, Clone)]
pub struct NtHash<'a> {
    seq: &'a [u8],
    k: usize,
    fwd_hash: u64,
    rev_hash: u64,
    pos: usize,
    max_pos: usize,
}

impl<'a> NtHash<'a> {
    /// Create a hasher with the default ceiling of [`MAXIMUM_K_SIZE`].
    ///
    /// # Errors
    ///
    /// [`NtHashError::InvalidWindowSize`] if `k == 0` or `k > seq.len()`,
    /// [`NtHashError::WindowSizeTooLarge`] if `k > MAXIMUM_K_SIZE`.
    pub fn new(seq: &'a [u8], k: usize) -> Result<Self> {
        Self::with_max_k(seq, k, MAXIMUM_K_SIZE)
    }

    /// Create a hasher that accepts any `k` up to `max_k`.
    ///
    /// # Errors
    ///
    /// As for [`new`](Self::new), with `max_k` as the ceiling.
    pub fn with_max_k(seq: &'a [u8], k: usize, max_k: usize) -> Result<Self> {
        let seq_len = seq.len();
        if k == 0 || k > seq_len {
            debug!("rejecting k={k} for a sequence of length {seq_len}");
            return Err(NtHashError::InvalidWindowSize { k, seq_len });
        }
        if k > max_k {
            debug!("rejecting k={k} above the configured maximum {max_k}");
            return Err(NtHashError::WindowSizeTooLarge { k, max_k });
        }

        let window = &seq[..k];
        let hasher = Self {
            seq,
            k,
            fwd_hash: forward_hash(window),
            rev_hash: reverse_hash(window),
            pos: 0,
            max_pos: seq_len - k + 1,
        };
        trace!("ntHash over {seq_len} bases, k={k}, {} windows", hasher.max_pos);
        Ok(hasher)
    }

    /// Hash of the next window, or `None` once exhausted.
    ///
    /// With `canonical` the strand‑independent value is returned, otherwise
    /// the forward‑strand value.
    pub fn next_hash(&mut self, canonical: bool) -> Option<u64> {
        if !self.advance() {
            return None;
        }
        Some(self.current(canonical))
    }

    /// `count` hash values for the next window, or `None` once exhausted.
    ///
    /// Element 0 is what [`next_hash`](Self::next_hash) would return; the
    /// rest are derived from it by [`extend_hashes`].
    pub fn next_multi_hash(&mut self, canonical: bool, count: usize) -> Option<Vec<u64>> {
        let mut out = vec![0; count];
        self.next_multi_hash_into(canonical, &mut out).then_some(out)
    }

    /// Like [`next_multi_hash`](Self::next_multi_hash) but writes into a
    /// caller‑owned buffer, one value per slot.
    ///
    /// Returns `false` (leaving `hashes` untouched) once exhausted.
    pub fn next_multi_hash_into(&mut self, canonical: bool, hashes: &mut [u64]) -> bool {
        if !self.advance() {
            return false;
        }
        extend_hashes(self.current(canonical), self.k, hashes);
        true
    }

    /// Turn into an iterator of single hash values.
    pub fn into_hashes(self, canonical: bool) -> Hashes<'a> {
        Hashes {
            hasher: self,
            canonical,
        }
    }

    /// Turn into an iterator of `count` values per window.
    pub fn into_multi_hashes(self, canonical: bool, count: usize) -> MultiHashes<'a> {
        MultiHashes {
            hasher: self,
            canonical,
            count,
        }
    }

    /// Start offset of the window the next step will produce.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Window length.
    #[inline(always)]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Forward‑strand hash of the most recently produced window (or of the
    /// first window before any step).
    #[inline(always)]
    pub fn forward_hash(&self) -> u64 {
        self.fwd_hash
    }

    /// Reverse‑complement hash, same window as [`forward_hash`](Self::forward_hash).
    #[inline(always)]
    pub fn reverse_hash(&self) -> u64 {
        self.rev_hash
    }

    /// Windows still to be produced.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.max_pos - self.pos
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.max_pos
    }

    #[inline(always)]
    fn current(&self, canon: bool) -> u64 {
        if canon {
            canonical(self.fwd_hash, self.rev_hash)
        } else {
            self.fwd_hash
        }
    }

    /// Move the state onto the window at `pos` and step past it.
    ///
    /// The window at offset 0 was hashed at construction, so the first call
    /// only bumps the offset.
    #[inline]
    fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        if self.pos != 0 {
            let out = self.seq[self.pos - 1];
            let inc = self.seq[self.pos + self.k - 1];
            self.fwd_hash = next_forward_hash(self.fwd_hash, self.k, out, inc);
            self.rev_hash = next_reverse_hash(self.rev_hash, self.k, out, inc);
        }
        self.pos += 1;
        if self.is_exhausted() {
            trace!("ntHash exhausted after {} windows", self.max_pos);
        }
        true
    }
}

#[inline(always)]
fn next_forward_hash(prev: u64, k: usize, char_out: u8, char_in: u8) -> u64 {
    rol(prev, 1) ^ rol(seed(char_out), k as u32) ^ seed(char_in)
}

#[inline(always)]
fn next_reverse_hash(prev: u64, k: usize, char_out: u8, char_in: u8) -> u64 {
    ror(prev, 1) ^ ror(seed_complement(char_out), 1) ^ rol(seed_complement(char_in), (k - 1) as u32)
}

// -------------------------------------------------------------------------
// Iterator adapters
// -------------------------------------------------------------------------

/// Iterator over one hash per window; see [`NtHash::into_hashes`].
#[derive(Debug, Clone)]
pub struct Hashes<'a> {
    hasher: NtHash<'a>,
    canonical: bool,
}

impl Iterator for Hashes<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        self.hasher.next_hash(self.canonical)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.hasher.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Hashes<'_> {}
impl FusedIterator for Hashes<'_> {}

/// Iterator over `count` hashes per window; see [`NtHash::into_multi_hashes`].
#[derive(Debug, Clone)]
pub struct MultiHashes<'a> {
    hasher: NtHash<'a>,
    canonical: bool,
    count: usize,
}

impl Iterator for MultiHashes<'_> {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Vec<u64>> {
        self.hasher.next_multi_hash(self.canonical, self.count)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.hasher.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for MultiHashes<'_> {}
impl FusedIterator for MultiHashes<'_> {}

// -------------------------------------------------------------------------
// Builder + Iterator facade
// -------------------------------------------------------------------------

/// Configure and consume a rolling‑hash computation as an iterator.
pub struct NtHashBuilder<'a> {
    seq: &'a [u8],
    k: usize,
    max_k: usize,
    num_hashes: usize,
    canonical: bool,
}

impl<'a> NtHashBuilder<'a> {
    /// Begin building over `seq`.
    ///
    /// Defaults: `k = 0` (must be set), `max_k = MAXIMUM_K_SIZE`,
    /// one hash per k‑mer, canonical output.
    pub fn new<S: AsRef<[u8]> + ?Sized>(seq: &'a S) -> Self {
        NtHashBuilder {
            seq: seq.as_ref(),
            k: 0,
            max_k: MAXIMUM_K_SIZE,
            num_hashes: 1,
            canonical: true,
        }
    }

    /// Set the k‑mer length.
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the largest accepted k‑mer length.
    pub fn max_k(mut self, max_k: usize) -> Self {
        self.max_k = max_k;
        self
    }

    /// Set how many hashes per k‑mer.
    pub fn num_hashes(mut self, m: usize) -> Self {
        self.num_hashes = m;
        self
    }

    /// Emit canonical (`true`) or forward‑strand (`false`) hashes.
    pub fn canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    /// Finalize into an iterator.
    pub fn finish(self) -> Result<NtHashIter<'a>> {
        let hasher = NtHash::with_max_k(self.seq, self.k, self.max_k)?;
        Ok(NtHashIter {
            hasher,
            canonical: self.canonical,
            num_hashes: self.num_hashes,
        })
    }
}

/// Iterator yielding `(pos, hashes)` for each k‑mer.
#[derive(Debug, Clone)]
pub struct NtHashIter<'a> {
    hasher: NtHash<'a>,
    canonical: bool,
    num_hashes: usize,
}

impl Iterator for NtHashIter<'_> {
    type Item = (usize, Vec<u64>);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.hasher.pos();
        let hashes = self.hasher.next_multi_hash(self.canonical, self.num_hashes)?;
        Some((pos, hashes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.hasher.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for NtHashIter<'_> {}
impl FusedIterator for NtHashIter<'_> {}
