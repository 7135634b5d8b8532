//! Seed constants and lookup tables shared by every hashing routine.
//!
//! The four nucleotide seeds are the 64‑bit constants of the ntHash paper.
//! Everything else in the byte range hashes to zero.

/// Forward seed for adenine.
pub const SEED_A: u64 = 0x3c8b_fbb3_95c6_0474;
/// Forward seed for cytosine.
pub const SEED_C: u64 = 0x3193_c185_62a0_2b4c;
/// Forward seed for guanine.
pub const SEED_G: u64 = 0x2032_3ed0_8257_2324;
/// Forward seed for thymine.
pub const SEED_T: u64 = 0x2955_49f5_4be2_4456;
/// Seed for `N` and any unrecognised byte.
pub const SEED_N: u64 = 0;

/// Low‑bit mask that separates the four bases (upper or lower case).
///
/// `A`/`a` → 1, `C`/`c` → 3, `T`/`t` → 4, `G`/`g` → 7.
pub const CP_OFF: u8 = 0x07;

/// Complementary seeds indexed by `base & CP_OFF`.
const CP_TAB: [u64; 8] = [
    SEED_N, SEED_T, SEED_N, SEED_G, SEED_A, SEED_N, SEED_N, SEED_C,
];

/// Multiplier used when deriving extra hashes from a base hash.
pub const MULTI_SEED: u64 = 0x90b4_5d39_fb6d_a1fa;
/// Right shift applied after multiplication in the multi‑hash mix.
pub const MULTI_SHIFT: u32 = 27;

/// Default ceiling on `k` accepted by [`NtHash::new`](crate::NtHash::new).
pub const MAXIMUM_K_SIZE: usize = 31;

const NUCLEOTIDES: &[u8; 8] = b"ACGTacgt";

const fn is_nucleotide(b: u8) -> bool {
    let mut i = 0;
    while i < NUCLEOTIDES.len() {
        if NUCLEOTIDES[i] == b {
            return true;
        }
        i += 1;
    }
    false
}

/// Forward‑strand seed for every byte value.
pub const SEED_TAB: [u64; 256] = {
    let mut tab = [SEED_N; 256];
    tab[b'A' as usize] = SEED_A;
    tab[b'C' as usize] = SEED_C;
    tab[b'G' as usize] = SEED_G;
    tab[b'T' as usize] = SEED_T;
    tab[b'a' as usize] = SEED_A;
    tab[b'c' as usize] = SEED_C;
    tab[b'g' as usize] = SEED_G;
    tab[b't' as usize] = SEED_T;
    tab
};

/// Reverse‑complement seed for every byte value.
///
/// Expanded from [`CP_TAB`] at compile time. Only the eight nucleotide bytes
/// go through the mask; every other byte stays at [`SEED_N`] so that an
/// unknown symbol contributes nothing to either strand.
pub const RC_SEED_TAB: [u64; 256] = {
    let mut tab = [SEED_N; 256];
    let mut b = 0;
    while b < 256 {
        if is_nucleotide(b as u8) {
            tab[b] = CP_TAB[(b as u8 & CP_OFF) as usize];
        }
        b += 1;
    }
    tab
};
