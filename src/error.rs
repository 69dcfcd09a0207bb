//! # Error Handling
//!
//! Error types for cryptkit.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Validation Errors (caller bugs, never retried)                    │
//! │  │   ├── InvalidKeyLength      - Key has the wrong byte length         │
//! │  │   ├── InvalidKey            - Key bytes/PEM cannot be parsed        │
//! │  │   ├── InvalidEnvelope       - Envelope too short to hold a nonce    │
//! │  │   ├── PlaintextTooLarge     - Message exceeds the RSA-OAEP bound    │
//! │  │   ├── InvalidEncoding       - Bad hex/base64 at the boundary        │
//! │  │   └── InvalidConfig         - Rejected configuration value          │
//! │  │                                                                      │
//! │  ├── Crypto Errors                                                     │
//! │  │   ├── EncryptionFailed      - Primitive refused to seal             │
//! │  │   ├── RsaFailed             - RSA padding/key/ciphertext mismatch   │
//! │  │   ├── KeyGenerationFailed   - Key pair could not be produced        │
//! │  │   └── RngFailed             - Entropy source failed                 │
//! │  │                                                                      │
//! │  ├── I/O Errors                                                        │
//! │  │   └── FileIo                - open/seek/read/stat failure           │
//! │  │                                                                      │
//! │  └── Internal Errors                                                   │
//! │      └── SerializationError    - JSON encoding failed                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Authentication failures of the box ciphers and signature mismatches are
//! deliberately *not* in this enum. They are ordinary values
//! ([`Opened::AuthFailure`](crate::crypto::Opened) and `false`), while RSA
//! decryption failures are errors ([`Error::RsaFailed`]).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for cryptkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cryptkit
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Validation Errors (100-199)
    // ========================================================================

    /// A key had the wrong length
    #[error("Invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Which key role was being validated
        what: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Key material could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Envelope is too short to contain a nonce
    #[error("Invalid envelope: {len} bytes is shorter than the {nonce_len}-byte nonce")]
    InvalidEnvelope {
        /// Supplied envelope length
        len: usize,
        /// Nonce length of the cipher family
        nonce_len: usize,
    },

    /// Plaintext exceeds what RSA-OAEP can carry for the given modulus
    #[error("Plaintext too large: {len} bytes exceeds the {max}-byte limit for this key")]
    PlaintextTooLarge {
        /// Supplied plaintext length
        len: usize,
        /// Maximum plaintext length for the key
        max: usize,
    },

    /// Hex or base64 input could not be decoded
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Configuration value rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Crypto Errors (300-399)
    // ========================================================================

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// RSA operation failed (bad padding, wrong key, corrupted ciphertext)
    #[error("RSA operation failed: {0}")]
    RsaFailed(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Random number generation failed
    #[error("Random number generation failed: {0}")]
    RngFailed(String),

    // ========================================================================
    // I/O Errors (400-499)
    // ========================================================================

    /// File open, seek, read or stat failed
    #[error("File I/O failed for {}: {source}", path.display())]
    FileIo {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // Internal Errors (900-999)
    // ========================================================================

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Get the numeric error code
    ///
    /// Error codes are organized by category:
    /// - 100-199: Validation
    /// - 300-399: Crypto
    /// - 400-499: I/O
    /// - 900-999: Internal
    pub fn code(&self) -> i32 {
        match self {
            // Validation (100-199)
            Error::InvalidKeyLength { .. } => 100,
            Error::InvalidKey(_) => 101,
            Error::InvalidEnvelope { .. } => 102,
            Error::PlaintextTooLarge { .. } => 103,
            Error::InvalidEncoding(_) => 104,
            Error::InvalidConfig(_) => 105,

            // Crypto (300-399)
            Error::EncryptionFailed(_) => 300,
            Error::RsaFailed(_) => 301,
            Error::KeyGenerationFailed(_) => 302,
            Error::RngFailed(_) => 303,

            // I/O (400-499)
            Error::FileIo { .. } => 400,

            // Internal (900-999)
            Error::SerializationError(_) => 900,
        }
    }

    /// Check if this error is a caller programming error
    ///
    /// Validation errors mean the inputs were malformed; retrying with the
    /// same inputs will fail the same way.
    pub fn is_validation(&self) -> bool {
        (100..200).contains(&self.code())
    }

    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidEncoding(format!("hex: {}", err))
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidEncoding(format!("base64: {}", err))
    }
}

// ============================================================================
// TESTS
// ============================================================================
