//! Generate an Ed25519 signing key pair and print it as JSON.
//!
//! ```bash
//! cargo run --bin gen-keypair
//! {
//!   "publicKey": "…64 hex chars…",
//!   "secretKey": "…128 hex chars…"
//! }
//! ```
//!
//! Logs go to stderr and are off below `warn` unless `RUST_LOG` says
//! otherwise, so stdout carries only the JSON document.

fn main() -> cryptkit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptkit=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let keypair = cryptkit::crypto::generate_keypair()?;
    tracing::debug!(public_key = %keypair.public_key, "generated signing key pair");

    println!("{}", serde_json::to_string_pretty(&keypair)?);
    Ok(())
}
