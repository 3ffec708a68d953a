//! Run with
//!
//! ```not_rust
//! RUST_LOG=hsjwt=debug cargo run --example basic
//! ```

use hsjwt::Claims;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SECRET: &str = "my-top-secret-is-here";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,hsjwt=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let claims: Claims = [
        ("role", "admin"),
        ("client", "ruvoo"),
        ("sub", "peekabo"),
        ("iss", "jed"),
        ("aud", "client-app"),
    ]
    .into_iter()
    .collect();

    let token = hsjwt::sign(&claims, SECRET)?;
    println!("Generated token:");
    println!("{token}");

    let verified = hsjwt::verify(&token, SECRET)?;
    println!("Verified claims: {}", serde_json::to_string_pretty(&verified)?);

    match hsjwt::verify(&token, "not-the-secret") {
        Ok(_) => println!("Unexpectedly accepted with the wrong secret"),
        Err(err) => println!("Wrong secret rejected: {err}"),
    }

    // Inspection only: nothing about this token is checked
    let decoded = hsjwt::decode(&token)?;
    let subject = decoded.get("sub").and_then(|sub| sub.as_str()).unwrap_or("-");
    println!("Decoded (unverified) subject: {subject}");

    Ok(())
}
