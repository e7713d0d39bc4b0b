use core::fmt;
use core::mem;

use digest::consts::{U16, U64};
use digest::crypto_common::BlockSizeUser;
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use crate::block::{BLOCK_LEN, INIT_A, INIT_B, INIT_C, INIT_D, compress};
use crate::digest::Md4Digest;

/// Streaming MD4 (RFC 1320) hasher.
///
/// Input may be fed in arbitrary chunks; the digest depends only on the
/// concatenated byte stream. [`finalize`](Self::finalize) consumes the
/// hasher, so a finished computation cannot be updated by mistake.
///
/// # Examples
///
/// ```
/// use md4::Md4;
///
/// let mut hasher = Md4::new();
/// hasher.update(b"message ");
/// hasher.update(b"digest");
/// let digest = hasher.finalize();
/// assert_eq!(digest.to_string(), "d9130a8164549fe818874806e1c7014b");
///
/// // Equivalent to hashing the whole message at once.
/// assert_eq!(Md4::digest(b"message digest"), digest);
/// ```
#[derive(Clone)]
pub struct Md4 {
    state: [u32; 4],
    buffer: [u8; BLOCK_LEN],
    /// Total bytes consumed, wrapping modulo 2^64. The partial-buffer
    /// occupancy is always `length % 64`, which survives wraparound
    /// because 2^64 is a multiple of the block length.
    length: u64,
}

impl Md4 {
    /// Creates a hasher with the RFC 1320 initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: [INIT_A, INIT_B, INIT_C, INIT_D],
            buffer: [0; BLOCK_LEN],
            length: 0,
        }
    }

    /// Resets the hasher back to its initial state for reuse.
    pub const fn reset(&mut self) {
        self.state = [INIT_A, INIT_B, INIT_C, INIT_D];
        self.length = 0;
    }

    /// Number of bytes consumed so far (wrapping modulo 2^64).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.length
    }

    /// Returns `true` if no bytes have been consumed yet.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Feeds additional bytes into the digest state.
    ///
    /// Complete 64-byte blocks are compressed as they become available;
    /// any remainder is buffered until the next call or finalization.
    pub fn update(&mut self, mut data: &[u8]) {
        let used = (self.length % BLOCK_LEN as u64) as usize;
        self.length = self.length.wrapping_add(data.len() as u64);

        if used > 0 {
            let free = BLOCK_LEN - used;
            if data.len() < free {
                self.buffer[used..used + data.len()].copy_from_slice(data);
                return;
            }
            let (head, rest) = data.split_at(free);
            self.buffer[used..].copy_from_slice(head);
            compress(&mut self.state, &self.buffer);
            data = rest;
        }

        let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
        for block in blocks {
            compress(&mut self.state, block);
        }
        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    /// Finalizes the computation and returns the 128-bit digest.
    ///
    /// Padding appends a `0x80` byte and zeros up to 56 mod 64, then the
    /// total input length in bits as a 64-bit little-endian value. When
    /// the `0x80` byte lands past offset 56 the current block is
    /// compressed first and the length field goes into a fresh one.
    #[must_use]
    pub fn finalize(mut self) -> Md4Digest {
        let used = (self.length % BLOCK_LEN as u64) as usize;
        self.buffer[used] = 0x80;
        let mut used = used + 1;

        if used > 56 {
            self.buffer[used..].fill(0);
            compress(&mut self.state, &self.buffer);
            used = 0;
        }

        self.buffer[used..56].fill(0);
        let bit_length = self.length.wrapping_mul(8);
        self.buffer[56..].copy_from_slice(&bit_length.to_le_bytes());
        compress(&mut self.state, &self.buffer);

        Md4Digest::from_words(self.state)
    }

    /// Convenience helper that computes the MD4 digest of `data` in one
    /// shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Md4Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Md4 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Md4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md4")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

// RustCrypto `digest` integration: the impls below satisfy the blanket
// `digest::Digest` implementation, so the hasher drops into any
// `Digest`-generic caller.

impl HashMarker for Md4 {}

impl Update for Md4 {
    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }
}

impl Reset for Md4 {
    fn reset(&mut self) {
        Self::reset(self);
    }
}

impl OutputSizeUser for Md4 {
    type OutputSize = U16;
}

impl BlockSizeUser for Md4 {
    type BlockSize = U64;
}

impl FixedOutput for Md4 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(Self::finalize(self).as_bytes());
    }
}

impl FixedOutputReset for Md4 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let finished = mem::replace(self, Self::new());
        out.copy_from_slice(Self::finalize(finished).as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_initial_state() {
        let mut hasher = Md4::new();
        hasher.update(b"some bytes that land in the buffer");
        hasher.reset();
        assert!(hasher.is_empty());
        assert_eq!(hasher.finalize(), Md4::digest(b""));
    }

    #[test]
    fn len_tracks_consumed_bytes() {
        let mut hasher = Md4::new();
        hasher.update(&[0u8; 100]);
        hasher.update(&[0u8; 29]);
        assert_eq!(hasher.len(), 129);
    }

    #[test]
    fn debug_does_not_expose_buffer_contents() {
        let mut hasher = Md4::new();
        hasher.update(b"secret");
        let rendered = format!("{hasher:?}");
        assert!(rendered.contains("length: 6"));
        assert!(!rendered.contains("secret"));
    }
}
