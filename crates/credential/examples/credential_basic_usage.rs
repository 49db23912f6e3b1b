//! Basic credential usage example
//!
//! - Create a credential from a plaintext secret
//! - Verify candidates against it
//! - Persist it as a record and restore it
//! - Observe expiry

use latch_credential::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    latch_log::init(latch_log::Config::from_env())?;

    println!("=== Credential: Basic Usage Example ===\n");

    // 1. Build a service from the environment (LATCH_COST, LATCH_MIN_LENGTH, ...)
    println!("1. Creating credential service...");
    let config = CredentialConfig::from_env()?;
    let service = CredentialService::from_config(&config);
    println!("   ✓ cost = {}, min length = {}\n", config.cost, config.min_length);

    // 2. Create a credential
    println!("2. Hashing a secret...");
    let credential = service.create("7PaeT/A#4k8&7G/TpEuu1rg", service.options()).await?;
    println!("   ✓ Digest: {}\n", credential);

    // 3. Verify candidates
    println!("3. Verifying candidates...");
    for candidate in ["7PaeT/A#4k8&7G/TpEuu1rg", "T/A#4k"] {
        let ok = service.verify(&credential, candidate).await?;
        println!("   {} {candidate}", if ok { "✓" } else { "✗" });
    }
    println!();

    // 4. Persist and restore
    println!("4. Persisting as JSON...");
    let json = serde_json::to_string_pretty(&credential.to_record())?;
    println!("{json}");
    let restored = service.restore(serde_json::from_str(&json)?)?;
    println!("   ✓ Restored, created at {:?}\n", restored.created_at_utc());

    // 5. An already-expired credential never verifies
    println!("5. Expiry...");
    let expired = service
        .create("validSecret", service.options().with_expiry(0))
        .await?;
    println!(
        "   ✓ Expired credential verifies: {}\n",
        service.verify(&expired, "validSecret").await?
    );

    println!("=== Example completed successfully! ===");
    Ok(())
}
