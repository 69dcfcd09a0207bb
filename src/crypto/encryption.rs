//! # Authenticated Encryption
//!
//! NaCl-compatible `secretbox` (shared secret) and `box` (key-exchange pair)
//! encryption, with the nonce carried in front of the sealed box.
//!
//! ## Envelope Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CIPHER ENVELOPE                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌──────────────┬──────────────────────────────────────────────────┐   │
//! │  │  nonce       │  sealed box                                      │   │
//! │  │  24 bytes    │  16-byte Poly1305 tag + ciphertext (len(pt))     │   │
//! │  └──────────────┴──────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  len(envelope) = 24 + len(plaintext) + 16                              │
//! │                                                                         │
//! │  No algorithm identifier, no length field. Sender and receiver agree   │
//! │  on the family (secretbox or box) and keys out of band.                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sealed box is byte-identical to what NaCl/libsodium/tweetnacl produce,
//! so envelopes interoperate with those implementations.
//!
//! ## Decryption Outcomes
//!
//! | Input | Result |
//! |-------|--------|
//! | Key of the wrong length | `Err(InvalidKeyLength)` |
//! | Envelope shorter than a nonce | `Err(InvalidEnvelope)` |
//! | Wrong key, tampered nonce/ciphertext/tag, truncated box | `Ok(Opened::AuthFailure)` |
//! | Valid envelope | `Ok(Opened::Plaintext(..))` |

use crypto_box::SalsaBox;
use crypto_secretbox::{
    aead::{generic_array::GenericArray, Aead, KeyInit},
    XSalsa20Poly1305,
};
use zeroize::Zeroize;

use super::{fixed_bytes, random, BOX_KEY_SIZE};
use crate::error::{Error, Result};

/// Size of the secretbox/box nonce in bytes (192 bits)
pub const NONCE_SIZE: usize = 24;

/// Size of the Poly1305 authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Size of a secretbox shared secret in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// A nonce for XSalsa20-Poly1305
///
/// 192-bit random nonces are safe to generate freshly for every message
/// with no risk of collision in practice. They are never stored or reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nonce(pub [u8; NONCE_SIZE]);

impl Nonce {
    /// Generate a cryptographically random nonce
    pub fn random() -> Result<Self> {
        Ok(Self(random::random_array()?))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

/// Outcome of opening an envelope
///
/// Authentication failure is an expected result, not an error: it is what a
/// wrong key or tampered data looks like.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Opened {
    /// The tag verified; this is the original plaintext
    Plaintext(Vec<u8>),
    /// The tag did not verify
    AuthFailure,
}

impl Opened {
    /// The plaintext, or `None` on authentication failure
    pub fn into_plaintext(self) -> Option<Vec<u8>> {
        match self {
            Opened::Plaintext(plaintext) => Some(plaintext),
            Opened::AuthFailure => None,
        }
    }

    /// Whether authentication failed
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Opened::AuthFailure)
    }
}

// ============================================================================
// SECRETBOX (SHARED SECRET)
// ============================================================================

/// Encrypt with a 32-byte shared secret
///
/// Returns `nonce ‖ sealed box`.
///
/// ## Example
///
/// ```ignore
/// let envelope = encrypt(b"reference test data string", b"A Very Secrety Secret be 32bytes")?;
/// ```
pub fn encrypt(plaintext: &[u8], shared_secret: &[u8]) -> Result<Vec<u8>> {
    let cipher = secretbox_cipher(shared_secret)?;
    let nonce = Nonce::random()?;

    let sealed = cipher
        .encrypt(GenericArray::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|e| Error::EncryptionFailed(format!("secretbox seal failed: {}", e)))?;

    Ok(assemble(&nonce, sealed))
}

/// Decrypt an envelope produced by [`encrypt`]
pub fn decrypt(envelope: &[u8], shared_secret: &[u8]) -> Result<Opened> {
    let cipher = secretbox_cipher(shared_secret)?;
    let (nonce, sealed) = split(envelope)?;

    Ok(
        match cipher.decrypt(GenericArray::from_slice(nonce), sealed) {
            Ok(plaintext) => Opened::Plaintext(plaintext),
            Err(_) => {
                tracing::debug!(len = envelope.len(), "secretbox authentication failed");
                Opened::AuthFailure
            }
        },
    )
}

fn secretbox_cipher(shared_secret: &[u8]) -> Result<XSalsa20Poly1305> {
    let mut key: [u8; KEY_SIZE] = fixed_bytes("shared secret", shared_secret)?;
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(&key));
    key.zeroize();
    Ok(cipher)
}

// ============================================================================
// BOX (KEY-EXCHANGE PAIR)
// ============================================================================

/// Encrypt for a recipient's public key, authenticated by the sender's secret key
///
/// ## Flow
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  encrypt_for_recipient()                                               │
/// ├─────────────────────────────────────────────────────────────────────────┤
/// │                                                                         │
/// │  1. X25519: sender_secret × recipient_public → DH output               │
/// │                                                                         │
/// │  2. HSalsa20(DH output) → box key  (inside SalsaBox)                   │
/// │                                                                         │
/// │  3. XSalsa20-Poly1305: seal(box key, random nonce, plaintext)          │
/// │                                                                         │
/// │  Output: nonce ‖ sealed box                                            │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn encrypt_for_recipient(
    plaintext: &[u8],
    recipient_public_key: &[u8],
    sender_secret_key: &[u8],
) -> Result<Vec<u8>> {
    let salsa_box = salsa_box(recipient_public_key, sender_secret_key)?;
    let nonce = Nonce::random()?;

    let sealed = salsa_box
        .encrypt(GenericArray::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|e| Error::EncryptionFailed(format!("box seal failed: {}", e)))?;

    Ok(assemble(&nonce, sealed))
}

/// Decrypt an envelope produced by [`encrypt_for_recipient`]
///
/// The receiver computes the same shared key from its own secret key and the
/// sender's public key.
pub fn decrypt_from_sender(
    envelope: &[u8],
    sender_public_key: &[u8],
    recipient_secret_key: &[u8],
) -> Result<Opened> {
    let salsa_box = salsa_box(sender_public_key, recipient_secret_key)?;
    let (nonce, sealed) = split(envelope)?;

    Ok(
        match salsa_box.decrypt(GenericArray::from_slice(nonce), sealed) {
            Ok(plaintext) => Opened::Plaintext(plaintext),
            Err(_) => {
                tracing::debug!(len = envelope.len(), "box authentication failed");
                Opened::AuthFailure
            }
        },
    )
}

fn salsa_box(their_public_key: &[u8], our_secret_key: &[u8]) -> Result<SalsaBox> {
    let public: [u8; BOX_KEY_SIZE] = fixed_bytes("box public key", their_public_key)?;
    let secret: [u8; BOX_KEY_SIZE] = fixed_bytes("box secret key", our_secret_key)?;

    let public = crypto_box::PublicKey::from(public);
    let secret = crypto_box::SecretKey::from(secret);

    Ok(SalsaBox::new(&public, &secret))
}

// ============================================================================
// ENVELOPE LAYOUT
// ============================================================================

fn assemble(nonce: &Nonce, sealed: Vec<u8>) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(NONCE_SIZE + sealed.len());
    envelope.extend_from_slice(nonce.as_bytes());
    envelope.extend_from_slice(&sealed);
    envelope
}

/// Split by fixed offset into (nonce, sealed box)
fn split(envelope: &[u8]) -> Result<(&[u8], &[u8])> {
    if envelope.len() < NONCE_SIZE {
        return Err(Error::InvalidEnvelope {
            len: envelope.len(),
            nonce_len: NONCE_SIZE,
        });
    }
    Ok(envelope.split_at(NONCE_SIZE))
}

// ============================================================================
// TESTS
// ============================================================================
