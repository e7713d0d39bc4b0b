//! Finalization-peeling transforms for cryptanalytic tooling.
//!
//! A finished MD4 state is the output of the last round-3 step on register
//! B plus the initial-constant addition of the final block. Candidate
//! testers (password recovery, collision search) often want the state from
//! just before that mixing, without re-running the whole 48-step
//! compression. [`reverse`] peels those two layers off a finished state;
//! [`unreverse`] puts them back.
//!
//! Both functions are pure and total: any input is accepted, arithmetic
//! wraps, and nothing is validated. Applied to a state that did not come
//! out of a standard finalization they return garbage, never panic.

use crate::block::{INIT_A, INIT_B, INIT_C, INIT_D, K3};

/// Undoes the final round-3 step pair on register B and the
/// initial-constant addition.
///
/// The input is the four state words (A, B, C, D) of a finished digest,
/// as produced by [`Md4Digest::words`](crate::Md4Digest::words).
///
/// Inverse of [`unreverse`]:
///
/// ```
/// use md4::{Md4, reverse, unreverse};
///
/// let words = Md4::digest(b"abc").words();
/// assert_eq!(unreverse(reverse(words)), words);
/// ```
#[must_use]
pub const fn reverse(state: [u32; 4]) -> [u32; 4] {
    let [a, b, c, d] = state;
    let a = a.wrapping_sub(INIT_A);
    let mut b = b.wrapping_sub(INIT_B);
    let c = c.wrapping_sub(INIT_C);
    let d = d.wrapping_sub(INIT_D);

    b = b.rotate_right(15);
    b = b.wrapping_sub(K3.wrapping_add(c ^ d ^ a));
    b = b.rotate_right(15);
    b = b.wrapping_sub(K3);

    [a, b, c, d]
}

/// Reapplies the arithmetic removed by [`reverse`], yielding the original
/// finished state.
#[must_use]
pub const fn unreverse(state: [u32; 4]) -> [u32; 4] {
    let [a, mut b, c, d] = state;

    b = b.wrapping_add(K3);
    b = b.rotate_left(15);
    b = b.wrapping_add(K3.wrapping_add(c ^ d ^ a));
    b = b.rotate_left(15);

    [
        a.wrapping_add(INIT_A),
        b.wrapping_add(INIT_B),
        c.wrapping_add(INIT_C),
        d.wrapping_add(INIT_D),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Md4;

    #[test]
    fn reverse_of_empty_message_digest_matches_reference() {
        let words = Md4::digest(b"").words();
        assert_eq!(
            reverse(words),
            [0x798a_b330, 0xc08c_4545, 0x3e9e_5fb9, 0xb057_6c6a]
        );
    }

    #[test]
    fn reverse_of_abc_digest_matches_reference() {
        let words = Md4::digest(b"abc").words();
        assert_eq!(
            reverse(words),
            [0x12bc_25a3, 0x1e81_6ddd, 0x4f4f_e461, 0x8d40_5204]
        );
    }

    #[test]
    fn reverse_of_message_digest_matches_reference() {
        let words = Md4::digest(b"message digest").words();
        assert_eq!(
            reverse(words),
            [0x19c4_f0d8, 0x49d9_3d0e, 0x6d8d_aa1a, 0x3acf_736b]
        );
    }

    #[test]
    fn untouched_registers_are_only_shifted_by_init_constants() {
        let words = Md4::digest(b"abc").words();
        let reversed = reverse(words);
        assert_eq!(reversed[0], words[0].wrapping_sub(0x6745_2301));
        assert_eq!(reversed[2], words[2].wrapping_sub(0x98ba_dcfe));
        assert_eq!(reversed[3], words[3].wrapping_sub(0x1032_5476));
    }

    #[test]
    fn transforms_are_total_over_extreme_states() {
        for state in [
            [0u32; 4],
            [u32::MAX; 4],
            [0x8000_0000, 0x7fff_ffff, 0x0000_0001, 0xffff_fffe],
        ] {
            assert_eq!(unreverse(reverse(state)), state);
            assert_eq!(reverse(unreverse(state)), state);
        }
    }
}
