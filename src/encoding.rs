//! # Boundary Encodings
//!
//! Keys and signatures cross the crate boundary as lowercase hex; opaque
//! binary payloads (envelopes, RSA ciphertexts) travel as standard padded
//! base64 when they need a textual form.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Result;

/// Encode bytes as lowercase hex
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string (either case)
pub fn from_hex(hex_str: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}

/// Encode bytes as standard base64 with padding
pub fn to_base64(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64 with padding
pub fn from_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_base64_reference_data() {
        let data = b"reference test data string\n";
        let encoded = to_base64(data);
        assert_eq!(encoded, "cmVmZXJlbmNlIHRlc3QgZGF0YSBzdHJpbmcK");
        assert_eq!(from_base64(&encoded).unwrap(), data);
    }

    #[test]
    fn test_hex_is_lowercase() {
        assert_eq!(to_hex([0xAB, 0x01]), "ab01");
        assert_eq!(from_hex("AB01").unwrap(), vec![0xAB, 0x01]);
    }

    #[test]
    fn test_bad_input_is_encoding_error() {
        assert!(matches!(from_hex("abc"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(from_base64("@@@"), Err(Error::InvalidEncoding(_))));
    }
}
