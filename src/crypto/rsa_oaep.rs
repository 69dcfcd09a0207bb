//! # RSA-OAEP
//!
//! RSA public-key encryption with OAEP padding, SHA-256 as both the OAEP
//! digest and the MGF1 hash. The padding parameters are fixed for
//! compatibility and cannot be changed.
//!
//! Keys arrive as PEM text:
//!
//! | Key | Preferred | Also accepted |
//! |-----|-----------|---------------|
//! | Public | SPKI (`BEGIN PUBLIC KEY`) | PKCS#1 (`BEGIN RSA PUBLIC KEY`) |
//! | Private | PKCS#8 (`BEGIN PRIVATE KEY`) | PKCS#1 (`BEGIN RSA PRIVATE KEY`) |
//!
//! ## Failure Convention
//!
//! Unlike the secretbox/box family, a wrong key or corrupted ciphertext is an
//! **error** here ([`Error::RsaFailed`]), never a sentinel value. Callers
//! must handle RSA decryption failure on their error path.

use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Bytes of each RSA block consumed by OAEP/SHA-256 padding (2 × 32 + 2)
pub const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// A PEM-encoded RSA key pair (SPKI public, PKCS#8 private)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RsaKeyPair {
    /// SPKI PEM public key
    pub public_pem: String,
    /// PKCS#8 PEM private key
    pub private_pem: String,
}

impl std::fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"<redacted>")
            .finish()
    }
}

impl RsaKeyPair {
    /// Generate a fresh key pair with a modulus of `bits` bits
    pub fn generate(bits: usize) -> Result<Self> {
        let private = RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| Error::KeyGenerationFailed(format!("RSA-{}: {}", bits, e)))?;
        let public = RsaPublicKey::from(&private);

        let public_pem = public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| Error::KeyGenerationFailed(format!("SPKI encoding: {}", e)))?;
        let private_pem = private
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| Error::KeyGenerationFailed(format!("PKCS#8 encoding: {}", e)))?
            .to_string();

        Ok(Self {
            public_pem,
            private_pem,
        })
    }
}

/// Largest plaintext OAEP/SHA-256 can carry for a modulus of `modulus_len` bytes
///
/// 446 bytes for a 4096-bit key, 190 bytes for a 2048-bit key.
pub fn max_plaintext_len(modulus_len: usize) -> usize {
    modulus_len.saturating_sub(OAEP_OVERHEAD)
}

/// Encrypt for the holder of the private key matching `public_key_pem`
///
/// ## Errors
///
/// - `InvalidKey` if the PEM cannot be parsed
/// - `PlaintextTooLarge` if the plaintext exceeds [`max_plaintext_len`]
pub fn rsa_encrypt(plaintext: &[u8], public_key_pem: &str) -> Result<Vec<u8>> {
    let public = parse_public_key(public_key_pem)?;

    let max = max_plaintext_len(public.size());
    if plaintext.len() > max {
        return Err(Error::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        });
    }

    public
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| Error::RsaFailed(e.to_string()))
}

/// Decrypt with a PEM private key
///
/// ## Errors
///
/// - `InvalidKey` if the PEM cannot be parsed
/// - `RsaFailed` for a wrong key, bad padding, or corrupted ciphertext
pub fn rsa_decrypt(ciphertext: &[u8], private_key_pem: &str) -> Result<Vec<u8>> {
    let private = parse_private_key(private_key_pem)?;

    private
        .decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|e| {
            tracing::debug!(len = ciphertext.len(), "RSA-OAEP decryption failed");
            Error::RsaFailed(e.to_string())
        })
}

fn parse_public_key(pem: &str) -> Result<RsaPublicKey> {
    let parsed = if pem.contains("BEGIN RSA PUBLIC KEY") {
        RsaPublicKey::from_pkcs1_pem(pem).map_err(|e| e.to_string())
    } else {
        RsaPublicKey::from_public_key_pem(pem).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| Error::InvalidKey(format!("RSA public key PEM: {}", e)))
}

fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
    let parsed = if pem.contains("BEGIN RSA PRIVATE KEY") {
        RsaPrivateKey::from_pkcs1_pem(pem).map_err(|e| e.to_string())
    } else {
        RsaPrivateKey::from_pkcs8_pem(pem).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| Error::InvalidKey(format!("RSA private key PEM: {}", e)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};

    const REFERENCE: &[u8] = b"reference test data string";

    #[test]
    fn test_round_trip_4096() {
        let keys = RsaKeyPair::generate(4096).unwrap();

        let ciphertext = rsa_encrypt(REFERENCE, &keys.public_pem).unwrap();
        assert_eq!(ciphertext.len(), 512);

        let plaintext = rsa_decrypt(&ciphertext, &keys.private_pem).unwrap();
        assert_eq!(plaintext, REFERENCE);
    }

    #[test]
    fn test_plaintext_limit_4096() {
        let keys = RsaKeyPair::generate(4096).unwrap();
        assert_eq!(max_plaintext_len(512), 446);

        let largest = vec![0x5Au8; 446];
        let ciphertext = rsa_encrypt(&largest, &keys.public_pem).unwrap();
        assert_eq!(rsa_decrypt(&ciphertext, &keys.private_pem).unwrap(), largest);

        let too_large = vec![0x5Au8; 447];
        assert!(matches!(
            rsa_encrypt(&too_large, &keys.public_pem),
            Err(Error::PlaintextTooLarge { len: 447, max: 446 })
        ));
    }

    #[test]
    fn test_encryption_is_randomized() {
        let keys = RsaKeyPair::generate(2048).unwrap();

        let c1 = rsa_encrypt(REFERENCE, &keys.public_pem).unwrap();
        let c2 = rsa_encrypt(REFERENCE, &keys.public_pem).unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_wrong_key_is_error() {
        let alice = RsaKeyPair::generate(2048).unwrap();
        let mallory = RsaKeyPair::generate(2048).unwrap();

        let ciphertext = rsa_encrypt(REFERENCE, &alice.public_pem).unwrap();
        assert!(matches!(
            rsa_decrypt(&ciphertext, &mallory.private_pem),
            Err(Error::RsaFailed(_))
        ));
    }

    #[test]
    fn test_corrupted_ciphertext_is_error() {
        let keys = RsaKeyPair::generate(2048).unwrap();

        let mut ciphertext = rsa_encrypt(REFERENCE, &keys.public_pem).unwrap();
        ciphertext[100] ^= 0x01;
        assert!(matches!(
            rsa_decrypt(&ciphertext, &keys.private_pem),
            Err(Error::RsaFailed(_))
        ));
    }

    #[test]
    fn test_bad_pem_is_invalid_key() {
        assert!(matches!(
            rsa_encrypt(REFERENCE, "-----BEGIN PUBLIC KEY-----\nnope\n-----END PUBLIC KEY-----\n"),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(
            rsa_decrypt(&[0u8; 256], "not a pem"),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_pkcs1_pem_accepted() {
        let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
        let public = RsaPublicKey::from(&private);
        let public_pem = public.to_pkcs1_pem(LineEnding::LF).unwrap();
        let private_pem = private.to_pkcs1_pem(LineEnding::LF).unwrap();

        let ciphertext = rsa_encrypt(REFERENCE, &public_pem).unwrap();
        assert_eq!(rsa_decrypt(&ciphertext, &private_pem).unwrap(), REFERENCE);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let keys = RsaKeyPair::generate(2048).unwrap();
        assert!(!format!("{:?}", keys).contains("PRIVATE KEY"));
    }
}
