//! # Digest Engine
//!
//! SHA-256 digests over one or many byte sequences, plus random byte/hex
//! helpers.
//!
//! ```text
//! digest_many([A, B, C])
//!
//!   ┌─────────┐   update(A)   update(B)   update(C)   finalize
//!   │ Sha256  │ ────────────────────────────────────────────► 32 bytes
//!   └─────────┘
//!
//!   == digest(A ‖ B ‖ C), without materializing the concatenation
//! ```
//!
//! [`DigestContext`] exposes the same incremental interface so that the
//! file hasher can feed chunks as they are read.

use std::fmt;

use sha2::{Digest as _, Sha256};

use super::random;
use crate::encoding;
use crate::error::{Error, Result};

/// Size of a SHA-256 digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// Byte count used by [`random_bytes`] and [`random_hex`] when none is given
pub const DEFAULT_RANDOM_LEN: usize = 16;

/// A SHA-256 digest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_SIZE]);

impl Digest {
    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Encode as a 64-character lowercase hex string
    pub fn to_hex(&self) -> String {
        encoding::to_hex(self.0)
    }

    /// Encode as base64
    pub fn to_base64(&self) -> String {
        encoding::to_base64(self.0)
    }

    /// Decode from a 64-character hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = encoding::from_hex(hex_str)?;
        let bytes: [u8; DIGEST_SIZE] = bytes.try_into().map_err(|b: Vec<u8>| {
            Error::InvalidEncoding(format!(
                "digest must be {} bytes, got {}",
                DIGEST_SIZE,
                b.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An in-progress SHA-256 computation
#[derive(Clone, Default)]
pub struct DigestContext {
    inner: Sha256,
}

impl DigestContext {
    /// Start a new, empty computation
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed more input
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.inner.update(data.as_ref());
    }

    /// Finish and produce the digest
    pub fn finalize(self) -> Digest {
        Digest(self.inner.finalize().into())
    }
}

/// SHA-256 of a single byte sequence
pub fn digest(input: impl AsRef<[u8]>) -> Digest {
    digest_many([input])
}

/// SHA-256 of a single byte sequence, as lowercase hex
pub fn digest_hex(input: impl AsRef<[u8]>) -> String {
    digest(input).to_hex()
}

/// SHA-256 over an ordered sequence of inputs
///
/// Equal to `digest` of their concatenation.
pub fn digest_many<I>(inputs: I) -> Digest
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut ctx = DigestContext::new();
    for input in inputs {
        ctx.update(input);
    }
    ctx.finalize()
}

/// Random bytes; `None` means [`DEFAULT_RANDOM_LEN`]
pub fn random_bytes(count: Option<usize>) -> Result<Vec<u8>> {
    random::random_vec(count.unwrap_or(DEFAULT_RANDOM_LEN))
}

/// Random bytes as lowercase hex; `None` means [`DEFAULT_RANDOM_LEN`] bytes
pub fn random_hex(count: Option<usize>) -> Result<String> {
    random_bytes(count).map(encoding::to_hex)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_reference_digest() {
        assert_eq!(
            digest_hex(b"reference test data string\n"),
            "7051c60a9112215a30d443dcaecff4a7c7fd3db10006928192676b8ac9e1bdb6"
        );
    }

    #[test]
    fn test_empty_digest() {
        assert_eq!(digest_hex(b""), EMPTY_SHA256);
        assert_eq!(digest_many(Vec::<Vec<u8>>::new()).to_hex(), EMPTY_SHA256);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let data = b"the same bytes twice";
        assert_eq!(digest(data), digest(data));
        assert_eq!(digest_hex(data).len(), 64);
    }

    #[test]
    fn test_digest_many_equals_concatenation() {
        let parts: [&[u8]; 3] = [b"reference ", b"test data ", b"string\n"];
        assert_eq!(digest_many(parts), digest(parts.concat()));
    }

    #[test]
    fn test_context_matches_one_shot() {
        let mut ctx = DigestContext::new();
        ctx.update(b"abc");
        ctx.update(b"");
        ctx.update(b"def");
        assert_eq!(ctx.finalize(), digest(b"abcdef"));
    }

    #[test]
    fn test_digest_hex_round_trip() {
        let d = digest(b"round trip");
        assert_eq!(Digest::from_hex(&d.to_hex()).unwrap(), d);
        assert_eq!(d.to_string(), d.to_hex());
        assert!(Digest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_random_defaults() {
        assert_eq!(random_bytes(None).unwrap().len(), DEFAULT_RANDOM_LEN);
        assert_eq!(random_bytes(Some(5)).unwrap().len(), 5);
        assert!(random_bytes(Some(0)).unwrap().is_empty());

        let hex = random_hex(None).unwrap();
        assert_eq!(hex.len(), DEFAULT_RANDOM_LEN * 2);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
