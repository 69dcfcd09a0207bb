//! # Encryption Demo
//!
//! Demonstrates the three encryption families: secretbox with a shared
//! secret, box between two key pairs, and RSA-OAEP with PEM keys.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example encryption_demo
//! ```

use cryptkit::crypto::{
    decrypt, decrypt_from_sender, encrypt, encrypt_for_recipient, rsa_decrypt, rsa_encrypt,
    BoxKeyPair, Opened, RsaKeyPair, NONCE_SIZE, TAG_SIZE,
};

fn main() {
    println!("=== cryptkit: Encryption Demo ===\n");

    let message = b"reference test data string";
    println!("Message: \"{}\"", String::from_utf8_lossy(message));
    println!();

    // Step 1: Secretbox with a shared secret
    println!("Step 1: Secretbox (XSalsa20-Poly1305, shared secret)...");

    let secret = b"A Very Secrety Secret be 32bytes";
    let envelope = encrypt(message, secret).expect("Encryption failed");

    println!("  Envelope: {} bytes", envelope.len());
    println!(
        "    = nonce ({}) + tag ({}) + ciphertext ({})",
        NONCE_SIZE,
        TAG_SIZE,
        envelope.len() - NONCE_SIZE - TAG_SIZE
    );
    println!("  Nonce (hex): {}", hex::encode(&envelope[..NONCE_SIZE]));

    match decrypt(&envelope, secret).expect("Malformed envelope") {
        Opened::Plaintext(plaintext) => {
            println!("  [OK] Decrypted: \"{}\"", String::from_utf8_lossy(&plaintext))
        }
        Opened::AuthFailure => println!("  [FAILED] Authentication failed"),
    }

    let wrong = b"Not The Right Secret, 32 bytes!!";
    let opened = decrypt(&envelope, wrong).expect("Malformed envelope");
    println!(
        "  Wrong secret: {}",
        if opened.is_auth_failure() {
            "[OK] rejected"
        } else {
            "[FAILED] accepted!"
        }
    );
    println!();

    // Step 2: Box between Alice and Bob
    println!("Step 2: Box (X25519 + XSalsa20-Poly1305)...");

    let alice = BoxKeyPair::generate().expect("Failed to create Alice's keypair");
    let bob = BoxKeyPair::generate().expect("Failed to create Bob's keypair");

    println!(
        "  Alice's public key: {}...",
        hex::encode(&alice.public_bytes()[..8])
    );
    println!(
        "  Bob's public key:   {}...",
        hex::encode(&bob.public_bytes()[..8])
    );

    let envelope = encrypt_for_recipient(message, &bob.public_bytes(), &alice.secret_bytes())
        .expect("Box encryption failed");
    println!("  Alice -> Bob envelope: {} bytes", envelope.len());

    let opened = decrypt_from_sender(&envelope, &alice.public_bytes(), &bob.secret_bytes())
        .expect("Malformed envelope");
    match opened.into_plaintext() {
        Some(plaintext) => println!(
            "  [OK] Bob decrypted: \"{}\"",
            String::from_utf8_lossy(&plaintext)
        ),
        None => println!("  [FAILED] Bob could not open the box"),
    }

    let eve = BoxKeyPair::generate().expect("Failed to create Eve's keypair");
    let opened = decrypt_from_sender(&envelope, &alice.public_bytes(), &eve.secret_bytes())
        .expect("Malformed envelope");
    println!(
        "  Eve's attempt: {}",
        if opened.is_auth_failure() {
            "[OK] rejected"
        } else {
            "[FAILED] accepted!"
        }
    );
    println!();

    // Step 3: RSA-OAEP
    println!("Step 3: RSA-OAEP (SHA-256, 2048-bit key)...");

    let keys = RsaKeyPair::generate(2048).expect("RSA key generation failed");
    println!(
        "  Public key PEM: {}",
        keys.public_pem.lines().next().unwrap_or_default()
    );

    let ciphertext = rsa_encrypt(message, &keys.public_pem).expect("RSA encryption failed");
    println!("  Ciphertext: {} bytes", ciphertext.len());

    let plaintext = rsa_decrypt(&ciphertext, &keys.private_pem).expect("RSA decryption failed");
    println!("  [OK] Decrypted: \"{}\"", String::from_utf8_lossy(&plaintext));
    println!();

    println!("=== Demo Complete ===");
}
