//! # Digital Signature Demo
//!
//! Demonstrates Ed25519 detached signatures with hex keys.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example signing_demo
//! ```

use cryptkit::crypto::{generate_keypair, sign, verify};

fn main() {
    println!("=== cryptkit: Digital Signature Demo ===\n");

    // Step 1: Create a keypair
    println!("Step 1: Creating Ed25519 signing keypair...");

    let keypair = generate_keypair().expect("Failed to create keypair");
    println!("  Public key (hex): {}", keypair.public_key);
    println!(
        "  Secret key: {} hex chars (seed + public key)",
        keypair.secret_key.len()
    );
    println!();

    // Step 2: Sign a message
    println!("Step 2: Signing a message...");

    let message = b"This message was sent by me and has not been tampered with.";
    println!("  Message: \"{}\"", String::from_utf8_lossy(message));

    let signature = sign(message, &keypair.secret_key).expect("Signing failed");
    println!("  Signature (hex): {}", signature);
    println!();

    // Step 3: Verify the signature
    println!("Step 3: Verifying the signature...");

    if verify(&signature, message, &keypair.public_key) {
        println!("  [OK] Signature is valid!");
    } else {
        println!("  [FAILED] Signature verification failed!");
    }
    println!();

    // Step 4: Demonstrate forgery detection
    println!("Step 4: Attempting to verify a tampered message...");

    let tampered = b"This message was sent by me and HAS BEEN tampered with.";
    println!("  Tampered: \"{}\"", String::from_utf8_lossy(tampered));

    if verify(&signature, tampered, &keypair.public_key) {
        println!("  [FAILED] Tampered message accepted!");
    } else {
        println!("  [OK] Tampering detected!");
    }
    println!();

    // Step 5: Malformed input never panics
    println!("Step 5: Verifying garbage input...");
    println!(
        "  verify(\"not hex\", ..) = {}",
        verify("not hex", message, &keypair.public_key)
    );
    println!();

    println!("=== Demo Complete ===");
}
