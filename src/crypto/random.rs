//! # Random Source
//!
//! Cryptographically secure randomness from the operating system.
//!
//! Every call goes straight to `OsRng`, which is stateless on our side and
//! safe to use from any number of threads at once. The fallible
//! `try_fill_bytes` path is used so that an entropy failure surfaces as
//! [`Error::RngFailed`] instead of a panic.

use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// Fill `dest` with random bytes
pub fn fill(dest: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| Error::RngFailed(e.to_string()))
}

/// Produce a random fixed-size array
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    fill(&mut bytes)?;
    Ok(bytes)
}

/// Produce `len` random bytes
pub fn random_vec(len: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; len];
    fill(&mut bytes)?;
    Ok(bytes)
}
