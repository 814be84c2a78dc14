use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Verify a password against a stored PHC-format hash.
///
/// # Errors
///
/// * `PasswordHash::new` can return an error if the hash string is invalid.
pub fn verify_password(password: &[u8], hash: &str) -> color_eyre::Result<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(color_eyre::eyre::Report::msg)?;
    let verified = Argon2::default()
        .verify_password(password, &parsed_hash)
        .is_ok();
    Ok(verified)
}

/// Hash a password using Argon2id with a random salt.
///
/// # Errors
///
/// * `Argon2::hash_password` can return an error if the hashing fails.
pub fn hash_password(password: &[u8]) -> color_eyre::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password, &salt)
        .map_err(color_eyre::eyre::Report::msg)?
        .to_string();

    Ok(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password(b"hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(b"hunter2", &hash).unwrap());
        assert!(!verify_password(b"wrong", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(verify_password(b"x", "not-a-phc-string").is_err());
    }
}
