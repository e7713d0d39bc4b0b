use core::fmt;

use crate::error::DigestSliceError;

/// A finished 128-bit MD4 digest.
///
/// The byte layout is the standard MD4 wire representation: the four state
/// words A, B, C, D emitted little-endian, 16 bytes total. Interoperating
/// systems (password-hash stores, legacy protocol fields) depend on exactly
/// this layout, so conversions to and from bytes never reorder anything.
///
/// `Display` renders the conventional lowercase-hex form:
///
/// ```
/// let digest = md4::Md4::digest(b"abc");
/// assert_eq!(digest.to_string(), "a448017aaf21d8525fc10ae87aa6729d");
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Md4Digest([u8; 16]);

impl Md4Digest {
    /// Number of bytes in an encoded digest.
    pub const LEN: usize = 16;

    /// Wraps a raw 16-byte digest encoding.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Rebuilds a digest from its four little-endian state words
    /// (A, B, C, D), the form consumed by the
    /// [`reverse`](crate::reverse)/[`unreverse`](crate::unreverse)
    /// transforms.
    #[must_use]
    pub const fn from_words(words: [u32; 4]) -> Self {
        let mut bytes = [0u8; 16];
        let mut i = 0;
        while i < 4 {
            let word = words[i].to_le_bytes();
            bytes[i * 4] = word[0];
            bytes[i * 4 + 1] = word[1];
            bytes[i * 4 + 2] = word[2];
            bytes[i * 4 + 3] = word[3];
            i += 1;
        }
        Self(bytes)
    }

    /// Reconstructs a digest from a byte slice holding the 16-byte
    /// little-endian encoding.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSliceError`] when `bytes` is not exactly 16 bytes
    /// long.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self, DigestSliceError> {
        match <[u8; 16]>::try_from(bytes) {
            Ok(array) => Ok(Self(array)),
            Err(_) => Err(DigestSliceError::new(bytes.len())),
        }
    }

    /// Returns the digest encoding by value.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Borrows the digest encoding.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Decodes the digest back into its four little-endian state words
    /// (A, B, C, D), as needed by the
    /// [`reverse`](crate::reverse)/[`unreverse`](crate::unreverse)
    /// transforms.
    #[must_use]
    pub const fn words(self) -> [u32; 4] {
        let b = self.0;
        [
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            u32::from_le_bytes([b[8], b[9], b[10], b[11]]),
            u32::from_le_bytes([b[12], b[13], b[14], b[15]]),
        ]
    }
}

impl fmt::Display for Md4Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Md4Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md4Digest({self})")
    }
}

impl AsRef<[u8]> for Md4Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 16]> for Md4Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Md4Digest> for [u8; 16] {
    fn from(digest: Md4Digest) -> Self {
        digest.to_bytes()
    }
}

impl From<&Md4Digest> for [u8; 16] {
    fn from(digest: &Md4Digest) -> Self {
        digest.to_bytes()
    }
}

impl PartialEq<[u8; 16]> for Md4Digest {
    fn eq(&self, other: &[u8; 16]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<Md4Digest> for [u8; 16] {
    fn eq(&self, other: &Md4Digest) -> bool {
        self == &other.0
    }
}
