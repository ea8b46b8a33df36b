use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a password using Argon2.
/// # Errors
///
/// * `Argon2::hash_password` can return an error if the password hashing fails.
pub fn hash_password(password: &[u8]) -> color_eyre::Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = argon2
        .hash_password(password, &salt)
        .map_err(|e| color_eyre::eyre::eyre!("password hashing failed: {e}"))?
        .to_string();
    Ok(password_hash)
}

/// Verify a password against a given hash.
/// # Errors
///
/// * `PasswordHash::new` can return an error if the hash string is invalid.
pub fn verify_password(password: &[u8], hash: &str) -> color_eyre::Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| color_eyre::eyre::eyre!("invalid password hash: {e}"))?;
    let verified = Argon2::default()
        .verify_password(password, &parsed_hash)
        .is_ok();
    Ok(verified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password(b"hunter2").unwrap();
        assert!(verify_password(b"hunter2", &hash).unwrap());
        assert!(!verify_password(b"hunter3", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(verify_password(b"hunter2", "not-a-phc-string").is_err());
    }
}
