//! # Key Pairs
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          KEY TYPES                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  SigningKeyPair (Ed25519)                                              │
//! │  • Secret key: 64 bytes = seed (32) ‖ public key (32)                  │
//! │  • Public key: 32 bytes                                                │
//! │                                                                         │
//! │  BoxKeyPair (X25519)                                                   │
//! │  • Secret key: 32 bytes                                                │
//! │  • Public key: 32 bytes                                                │
//! │                                                                         │
//! │  KeyPair (hex strings)                                                 │
//! │  • The boundary form: { "publicKey": "..", "secretKey": ".." }          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Key pairs are only ever created by explicit generation or by loading
//! caller-supplied bytes. Nothing here stores or caches them.

use ed25519_dalek::{SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{fixed_bytes, random, BOX_KEY_SIZE, SIGNING_SECRET_KEY_SIZE};
use crate::encoding;
use crate::error::{Error, Result};

/// A key pair in its hex boundary form
///
/// Serializes as `{"publicKey": "<hex>", "secretKey": "<hex>"}`. The secret
/// string is zeroized on drop.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    /// Hex-encoded public key
    pub public_key: String,
    /// Hex-encoded secret key
    pub secret_key: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Ed25519 signing keypair
#[derive(ZeroizeOnDrop)]
pub struct SigningKeyPair {
    #[zeroize(skip)] // ed25519_dalek::SigningKey handles its own zeroization
    secret: SigningKey,
}

impl SigningKeyPair {
    /// Generate a new random signing keypair
    pub fn generate() -> Result<Self> {
        let mut seed: [u8; 32] = random::random_array()?;
        let secret = SigningKey::from_bytes(&seed);
        seed.zeroize();
        Ok(Self { secret })
    }

    /// Load from the 64-byte `seed ‖ public key` form
    ///
    /// The embedded public key must match the one derived from the seed.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self> {
        let mut bytes: [u8; SIGNING_SECRET_KEY_SIZE] = fixed_bytes("signing secret key", bytes)?;
        let secret = SigningKey::from_keypair_bytes(&bytes)
            .map_err(|e| Error::InvalidKey(format!("Inconsistent signing secret key: {}", e)));
        bytes.zeroize();
        Ok(Self { secret: secret? })
    }

    /// Load from the hex form of the 64-byte secret key
    pub fn from_hex(secret_hex: &str) -> Result<Self> {
        let mut bytes = encoding::from_hex(secret_hex)?;
        let keypair = Self::from_keypair_bytes(&bytes);
        bytes.zeroize();
        keypair
    }

    /// Get the 64-byte secret key (seed ‖ public key)
    ///
    /// ## Security Warning
    ///
    /// Only use this for secure storage. Never log or transmit these bytes.
    pub fn keypair_bytes(&self) -> [u8; SIGNING_SECRET_KEY_SIZE] {
        self.secret.to_keypair_bytes()
    }

    /// Get the public key bytes
    pub fn public_bytes(&self) -> [u8; 32] {
        self.secret.verifying_key().to_bytes()
    }

    /// Get the verifying key for signature verification
    pub fn verifying_key(&self) -> VerifyingKey {
        self.secret.verifying_key()
    }

    /// Export both keys as hex
    pub fn to_hex_pair(&self) -> KeyPair {
        let mut secret = self.keypair_bytes();
        let pair = KeyPair {
            public_key: encoding::to_hex(self.public_bytes()),
            secret_key: encoding::to_hex(secret),
        };
        secret.zeroize();
        pair
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.secret
    }
}

/// X25519 keypair for the public-key box
#[derive(ZeroizeOnDrop)]
pub struct BoxKeyPair {
    #[zeroize(skip)] // x25519_dalek handles its own zeroization
    secret: StaticSecret,
    #[zeroize(skip)]
    public: X25519PublicKey,
}

impl BoxKeyPair {
    /// Generate a new random box keypair
    pub fn generate() -> Result<Self> {
        let mut bytes: [u8; BOX_KEY_SIZE] = random::random_array()?;
        let keypair = Self::from_secret_bytes(&bytes);
        bytes.zeroize();
        keypair
    }

    /// Load from a 32-byte secret key, deriving the public key
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; BOX_KEY_SIZE] = fixed_bytes("box secret key", bytes)?;
        let secret = StaticSecret::from(bytes);
        let public = X25519PublicKey::from(&secret);
        Ok(Self { secret, public })
    }

    /// Get the secret key bytes
    ///
    /// ## Security Warning
    ///
    /// Only use this for secure storage. Never log or transmit these bytes.
    pub fn secret_bytes(&self) -> [u8; BOX_KEY_SIZE] {
        self.secret.to_bytes()
    }

    /// Get the public key bytes
    pub fn public_bytes(&self) -> [u8; BOX_KEY_SIZE] {
        self.public.to_bytes()
    }

    /// Export both keys as hex
    pub fn to_hex_pair(&self) -> KeyPair {
        let mut secret = self.secret_bytes();
        let pair = KeyPair {
            public_key: encoding::to_hex(self.public_bytes()),
            secret_key: encoding::to_hex(secret),
        };
        secret.zeroize();
        pair
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_keypair_generation() {
        let kp1 = SigningKeyPair::generate().unwrap();
        let kp2 = SigningKeyPair::generate().unwrap();

        assert_ne!(kp1.public_bytes(), kp2.public_bytes());
    }

    #[test]
    fn test_signing_secret_layout() {
        let kp = SigningKeyPair::generate().unwrap();
        let secret = kp.keypair_bytes();

        // Second half of the secret key is the public key
        assert_eq!(&secret[32..], &kp.public_bytes());
    }

    #[test]
    fn test_signing_keypair_hex_round_trip() {
        let kp = SigningKeyPair::generate().unwrap();
        let pair = kp.to_hex_pair();

        assert_eq!(pair.public_key.len(), 64);
        assert_eq!(pair.secret_key.len(), 128);

        let restored = SigningKeyPair::from_hex(&pair.secret_key).unwrap();
        assert_eq!(restored.public_bytes(), kp.public_bytes());
    }

    #[test]
    fn test_signing_secret_wrong_length() {
        let result = SigningKeyPair::from_keypair_bytes(&[7u8; 32]);
        assert!(matches!(
            result,
            Err(Error::InvalidKeyLength {
                expected: 64,
                actual: 32,
                ..
            })
        ));
    }

    #[test]
    fn test_signing_secret_mismatched_public_half() {
        let kp = SigningKeyPair::generate().unwrap();
        let mut secret = kp.keypair_bytes();
        secret[40] ^= 0x01;

        assert!(matches!(
            SigningKeyPair::from_keypair_bytes(&secret),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_box_keypair_from_secret() {
        let kp = BoxKeyPair::generate().unwrap();
        let restored = BoxKeyPair::from_secret_bytes(&kp.secret_bytes()).unwrap();

        assert_eq!(kp.public_bytes(), restored.public_bytes());
        assert!(BoxKeyPair::from_secret_bytes(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_keypair_json_field_names() {
        let pair = SigningKeyPair::generate().unwrap().to_hex_pair();
        let json = serde_json::to_value(&pair).unwrap();

        assert!(json.get("publicKey").is_some());
        assert!(json.get("secretKey").is_some());
    }

    #[test]
    fn test_keypair_debug_redacts_secret() {
        let pair = SigningKeyPair::generate().unwrap().to_hex_pair();
        let debug = format!("{:?}", pair);

        assert!(!debug.contains(&pair.secret_key));
        assert!(debug.contains(&pair.public_key));
    }
}
