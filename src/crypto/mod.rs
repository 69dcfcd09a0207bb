//! # Cryptography Module
//!
//! All cryptographic primitives provided by cryptkit.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC COMPONENTS                             │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐                                   │
//! │  │ RandomSource │   │ DigestEngine │◄──── file::FileHasher              │
//! │  │   (OsRng)    │   │  (SHA-256)   │                                   │
//! │  └──────┬───────┘   └──────────────┘                                   │
//! │         │                                                               │
//! │         ├──────────────────────┐                                        │
//! │         ▼                      ▼                                        │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ SignatureEngine  │   │ Authenticated    │   │   RSACipher      │    │
//! │  │  (Ed25519)       │   │ Cipher           │   │  (OAEP/SHA-256)  │    │
//! │  │                  │   │ secretbox / box  │   │  PEM keys        │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sizes
//!
//! | Value | Size |
//! |-------|------|
//! | Symmetric secret key | 32 bytes |
//! | Key-exchange public/secret key | 32 bytes each |
//! | Nonce | 24 bytes |
//! | Authentication tag | 16 bytes |
//! | Signing private key | 64 bytes (seed ‖ public key) |
//! | Signing public key | 32 bytes |
//! | Signature | 64 bytes |
//! | Digest | 32 bytes / 64 hex characters |
//!
//! ## Failure Conventions
//!
//! The two encryption families fail differently, and callers must handle
//! them differently:
//!
//! - secretbox / box decryption returns [`Opened::AuthFailure`] for a wrong
//!   key or tampered envelope. That is a value, not an error.
//! - RSA decryption returns [`Error::RsaFailed`](crate::Error::RsaFailed).
//!
//! Signature verification returns `false` for anything that does not verify.

mod encryption;
mod hashing;
mod keys;
pub mod random;
mod rsa_oaep;
mod signing;

pub use encryption::{
    decrypt, decrypt_from_sender, encrypt, encrypt_for_recipient, Nonce, Opened, KEY_SIZE,
    NONCE_SIZE, TAG_SIZE,
};
pub use hashing::{
    digest, digest_hex, digest_many, random_bytes, random_hex, Digest, DigestContext,
    DEFAULT_RANDOM_LEN, DIGEST_SIZE,
};
pub use keys::{BoxKeyPair, KeyPair, SigningKeyPair};
pub use rsa_oaep::{max_plaintext_len, rsa_decrypt, rsa_encrypt, RsaKeyPair, OAEP_OVERHEAD};
pub use signing::{
    generate_keypair, sign, sign_detached, verify, verify_detached, Signature, SIGNATURE_SIZE,
};

use crate::error::{Error, Result};

/// Size of key-exchange public and secret keys in bytes
pub const BOX_KEY_SIZE: usize = 32;

/// Size of an Ed25519 private key in bytes (seed ‖ public key)
pub const SIGNING_SECRET_KEY_SIZE: usize = 64;

/// Size of an Ed25519 public key in bytes
pub const SIGNING_PUBLIC_KEY_SIZE: usize = 32;

/// Copy `bytes` into a fixed-size array, rejecting any other length
pub(crate) fn fixed_bytes<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::InvalidKeyLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}
