//! # Digital Signatures Module
//!
//! Ed25519 detached signatures.
//!
//! ## Signature Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SIGNING FLOW                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  sign(message, secret_key_hex)                                         │
//! │                                                                         │
//! │   secret key hex ──► 64 bytes (seed ‖ public) ──► Ed25519 Sign         │
//! │                                                     │                   │
//! │   message bytes ────────────────────────────────────┘                   │
//! │                                                     ▼                   │
//! │                                      signature (64 bytes) ──► hex       │
//! │                                                                         │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                       VERIFICATION FLOW                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  verify(signature_hex, message, public_key_hex) → bool                 │
//! │                                                                         │
//! │   bad hex ─────────┐                                                    │
//! │   wrong length ────┼──► false                                           │
//! │   invalid point ───┤                                                    │
//! │   mismatch ────────┘                                                    │
//! │   valid ──────────────► true                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The signature is transmitted next to the message, never embedded in it.
//! Ed25519 signatures are deterministic: the same key and message always
//! produce the same signature.

use ed25519_dalek::{Signature as Ed25519Signature, Signer, Verifier, VerifyingKey};

use super::{fixed_bytes, KeyPair, SigningKeyPair, SIGNING_PUBLIC_KEY_SIZE};
use crate::encoding;
use crate::error::{Error, Result};

/// Size of an Ed25519 signature in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// An Ed25519 detached signature
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; SIGNATURE_SIZE]);

impl Signature {
    /// Create from a slice (must be exactly 64 bytes)
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != SIGNATURE_SIZE {
            return Err(Error::InvalidKey(format!(
                "Signature must be {} bytes, got {}",
                SIGNATURE_SIZE,
                slice.len()
            )));
        }
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Encode as hex string
    pub fn to_hex(&self) -> String {
        encoding::to_hex(self.0)
    }

    /// Decode from hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Self::from_slice(&encoding::from_hex(hex_str)?)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Generate a fresh signing key pair, hex-encoded
///
/// The secret key is the 64-byte `seed ‖ public key` form.
pub fn generate_keypair() -> Result<KeyPair> {
    Ok(SigningKeyPair::generate()?.to_hex_pair())
}

/// Sign a message with a hex-encoded 64-byte secret key
///
/// Returns the hex-encoded signature. A malformed secret key is a caller
/// error.
pub fn sign(message: &[u8], secret_key_hex: &str) -> Result<String> {
    let keypair = SigningKeyPair::from_hex(secret_key_hex)?;
    Ok(sign_detached(&keypair, message).to_hex())
}

/// Verify a hex-encoded signature against a hex-encoded public key
///
/// Never fails: malformed input of any kind is simply "not verified".
pub fn verify(signature_hex: &str, message: &[u8], public_key_hex: &str) -> bool {
    let Ok(signature) = Signature::from_hex(signature_hex) else {
        return false;
    };
    let Ok(public_key) = encoding::from_hex(public_key_hex) else {
        return false;
    };
    let Ok(public_key) = fixed_bytes::<SIGNING_PUBLIC_KEY_SIZE>("signing public key", &public_key)
    else {
        return false;
    };

    verify_detached(&public_key, message, &signature)
}

/// Sign a message with a loaded keypair
pub fn sign_detached(keypair: &SigningKeyPair, message: &[u8]) -> Signature {
    let sig = keypair.signing_key().sign(message);
    Signature(sig.to_bytes())
}

/// Verify a signature against raw public key bytes
pub fn verify_detached(
    public_key: &[u8; SIGNING_PUBLIC_KEY_SIZE],
    message: &[u8],
    signature: &Signature,
) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let sig = Ed25519Signature::from_bytes(&signature.0);

    verifying_key.verify(message, &sig).is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
