//! # Admin Access Gate
//!
//! The admin surface sits behind a single shared secret. Deployments that
//! care keep only the Argon2 hash of the code in the environment; dev
//! setups may configure the plain code instead. Verification prefers the
//! hash when both are present.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use eyre::Result;

/// Hashes an admin access code with Argon2.
///
/// Generates a random salt and returns the PHC string (algorithm, version,
/// parameters, salt, and hash) suitable for `ADMIN_ACCESS_HASH`.
pub fn hash_access_code(code: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(code.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing access code: {}", e))?
        .to_string();

    Ok(hash)
}

/// Verifies a submitted access code against the configured gate.
///
/// With a configured hash the check is an Argon2 verification; with only a
/// plain code it is a direct comparison. An unconfigured gate rejects
/// everything.
pub fn verify_access_code(
    hash: Option<&str>,
    plain: Option<&str>,
    submitted: &str,
) -> Result<bool> {
    if let Some(hash) = hash {
        let parsed = argon2::PasswordHash::new(hash)
            .map_err(|e| eyre::eyre!("Invalid access code hash: {}", e))?;
        let is_valid = Argon2::default()
            .verify_password(submitted.as_bytes(), &parsed)
            .is_ok();
        return Ok(is_valid);
    }

    match plain {
        Some(plain) => Ok(submitted == plain),
        None => Ok(false),
    }
}
