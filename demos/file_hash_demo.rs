//! # File Hash Demo
//!
//! Demonstrates windowed SHA-256 hashing of a file.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example file_hash_demo
//! RUST_LOG=cryptkit=debug cargo run --example file_hash_demo
//! ```

use cryptkit::crypto::digest;
use cryptkit::{file_length, hash_file, read_range};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptkit=info".into()),
        )
        .init();

    println!("=== cryptkit: File Hash Demo ===\n");

    // Step 1: Write a sample file
    println!("Step 1: Writing a sample file...");

    let path = std::env::temp_dir().join(format!("cryptkit-demo-{}.txt", std::process::id()));
    std::fs::write(&path, b"reference test data string\n").expect("Failed to write sample file");

    let len = file_length(&path).expect("Failed to stat sample file");
    println!("  Path: {}", path.display());
    println!("  Length: {} bytes", len);
    println!();

    // Step 2: Whole file
    println!("Step 2: Hashing the whole file...");

    let whole = hash_file(&path, None, None).await.expect("Hashing failed");
    println!("  SHA-256: {}", whole);
    println!("  Base64:  {}", whole.to_base64());
    println!();

    // Step 3: A window
    println!("Step 3: Hashing bytes [10, 14)...");

    let window = hash_file(&path, Some(4), Some(10))
        .await
        .expect("Hashing failed");
    let bytes = read_range(&path, 10, 4).expect("Read failed");
    println!("  Window: \"{}\"", String::from_utf8_lossy(&bytes));
    println!("  SHA-256: {}", window);
    println!(
        "  Matches digest(read_range): {}",
        if window == digest(&bytes) { "[OK]" } else { "[FAILED]" }
    );
    println!();

    // Step 4: Zero-length window
    println!("Step 4: Zero-length window (file is not opened)...");

    let empty = hash_file("/no/such/file", Some(0), None)
        .await
        .expect("Hashing failed");
    println!("  SHA-256: {}", empty);
    println!();

    std::fs::remove_file(&path).ok();
    println!("=== Demo Complete ===");
}
