//! # cryptkit
//!
//! A small cryptographic utility core: authenticated encryption (NaCl
//! secretbox and box), RSA-OAEP, Ed25519 signatures, SHA-256 digests and
//! windowed file hashing.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           CRYPTKIT MODULES                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────┐  ┌──────────────┐   │
//! │  │                    crypto                     │  │     file     │   │
//! │  │                                               │  │              │   │
//! │  │ - secretbox / box     - Ed25519 sign/verify   │  │ - FileHasher │   │
//! │  │ - RSA-OAEP (PEM)      - SHA-256, random bytes │─►│ - read_range │   │
//! │  └───────────────────────┬───────────────────────┘  └──────────────┘   │
//! │                          │                                              │
//! │  ┌───────────────────────▼───────┐  ┌──────────────────────────────┐   │
//! │  │           encoding            │  │            error             │   │
//! │  │  hex / base64 at the boundary │  │  Error + numeric codes       │   │
//! │  └───────────────────────────────┘  └──────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error type and result alias
//! - [`crypto`] - Ciphers, signatures, digests and randomness
//! - [`file`] - Streaming SHA-256 over byte windows of files
//! - [`encoding`] - Hex and base64 helpers
//!
//! Every operation is stateless. Nothing is cached, no key is retained
//! between calls, and any function can be called concurrently from any
//! thread.
//!
//! ## Example
//!
//! ```
//! use cryptkit::crypto::{decrypt, encrypt, Opened};
//!
//! let secret = [7u8; 32];
//! let envelope = encrypt(b"hello", &secret)?;
//! match decrypt(&envelope, &secret)? {
//!     Opened::Plaintext(bytes) => assert_eq!(bytes, b"hello"),
//!     Opened::AuthFailure => unreachable!(),
//! }
//! # Ok::<(), cryptkit::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod crypto;
pub mod encoding;
pub mod error;
pub mod file;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use crypto::{BoxKeyPair, Digest, KeyPair, Opened, RsaKeyPair, Signature, SigningKeyPair};
pub use error::{Error, Result};
pub use file::{file_length, hash_file, read_range, FileHasher, HasherConfig};

/// Returns the version of cryptkit
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
