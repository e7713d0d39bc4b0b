/// Error returned when reconstructing an [`Md4Digest`](crate::Md4Digest)
/// from a byte slice of the wrong length.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("MD4 digest requires 16 bytes, received {len}")]
pub struct DigestSliceError {
    len: usize,
}

impl DigestSliceError {
    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of bytes the caller supplied when the error was raised.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Reports whether the provided slice was empty when the error occurred.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}
