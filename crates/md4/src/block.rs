//! MD4 block compression.
//!
//! One call consumes exactly one 64-byte block and advances the 128-bit
//! running state. The three rounds are driven by static shift and
//! message-word schedules rather than unrolled macros; both forms are
//! behaviorally identical per RFC 1320.

/// Bytes per compression block.
pub(crate) const BLOCK_LEN: usize = 64;

/// Initial state words from RFC 1320 section 3.3.
pub(crate) const INIT_A: u32 = 0x6745_2301;
pub(crate) const INIT_B: u32 = 0xefcd_ab89;
pub(crate) const INIT_C: u32 = 0x98ba_dcfe;
pub(crate) const INIT_D: u32 = 0x1032_5476;

/// Round 2 additive constant (round 1 adds nothing).
const K2: u32 = 0x5a82_7999;
/// Round 3 additive constant, shared with the reversal transforms.
pub(crate) const K3: u32 = 0x6ed9_eba1;

/// Per-round left-rotation schedules, repeating every four steps.
const S1: [u32; 4] = [3, 7, 11, 19];
const S2: [u32; 4] = [3, 5, 9, 13];
const S3: [u32; 4] = [3, 9, 11, 15];

/// Message-word read order for rounds 2 and 3. Round 1 reads words
/// sequentially; these permutations are fixed by RFC 1320 and must not be
/// altered.
const M2: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const M3: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

/// Round 1 mixer. Equivalent to `(x & y) | (!x & z)`, rewritten with one
/// fewer operation.
const fn f(x: u32, y: u32, z: u32) -> u32 {
    z ^ (x & (y ^ z))
}

/// Round 2 mixer: majority of the three inputs.
const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & (y | z)) | (y & z)
}

/// Round 3 mixer.
const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Compresses one 64-byte block into `state`.
///
/// Pure and total: every 64-byte input is valid, all arithmetic wraps
/// modulo 2^32. Message words are assembled little-endian regardless of
/// host byte order.
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut m = [0u32; 16];
    let (words, _) = block.as_chunks::<4>();
    for (slot, word) in m.iter_mut().zip(words) {
        *slot = u32::from_le_bytes(*word);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for (i, word) in m.iter().enumerate() {
        let t = a
            .wrapping_add(f(b, c, d))
            .wrapping_add(*word)
            .rotate_left(S1[i % 4]);
        (a, b, c, d) = (d, t, b, c);
    }

    for (i, &index) in M2.iter().enumerate() {
        let t = a
            .wrapping_add(g(b, c, d))
            .wrapping_add(m[index])
            .wrapping_add(K2)
            .rotate_left(S2[i % 4]);
        (a, b, c, d) = (d, t, b, c);
    }

    for (i, &index) in M3.iter().enumerate() {
        let t = a
            .wrapping_add(h(b, c, d))
            .wrapping_add(m[index])
            .wrapping_add(K3)
            .rotate_left(S3[i % 4]);
        (a, b, c, d) = (d, t, b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
