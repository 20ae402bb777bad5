//! Password hashing and verification.
//!
//! Hashes are Argon2id PHC strings with a per-password random salt. Hashing
//! is CPU-bound, so callers on the async runtime should go through
//! [`hash_password_blocking`] and [`verify_password_blocking`].

use std::fmt;

use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use tracing::warn;

use super::Error;

/// Argon2 PHC string as stored in the `password_hash` column.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a stored PHC string after checking that it parses.
    pub fn from_phc(raw: impl Into<String>) -> Result<Self, password_hash::Error> {
        let raw = raw.into();
        password_hash::PasswordHash::new(&raw)?;
        Ok(Self(raw))
    }

    /// Hash `password` with a fresh salt.
    pub fn generate(password: &str) -> Result<Self, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(Self(hash.to_string()))
    }

    /// Check `password` against this hash.
    pub fn verify(&self, password: &str) -> bool {
        match password_hash::PasswordHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(error) => {
                warn!(%error, "stored password hash failed to parse");
                false
            }
        }
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Hash `password` on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<PasswordHash, Error> {
    tokio::task::spawn_blocking(move || PasswordHash::generate(&password))
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
        .map_err(|err| Error::internal(format!("password hashing failed: {err}")))
}

/// Verify `password` against `hash` on the blocking pool.
pub async fn verify_password_blocking(hash: PasswordHash, password: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || hash.verify(&password))
        .await
        .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn generated_hash_verifies_only_the_hashed_password() {
        let hash = PasswordHash::generate("correct horse").expect("hash");
        assert!(hash.as_ref().starts_with("$argon2id$"));
        assert!(hash.verify("correct horse"));
        assert!(!hash.verify("Correct horse"));
    }

    #[rstest]
    fn same_password_gets_distinct_salts() {
        let first = PasswordHash::generate("pw").expect("hash");
        let second = PasswordHash::generate("pw").expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    fn from_phc_rejects_garbage() {
        assert!(PasswordHash::from_phc("not-a-hash").is_err());
        let hash = PasswordHash::generate("pw").expect("hash");
        let reparsed = PasswordHash::from_phc(hash.as_ref()).expect("valid phc");
        assert!(reparsed.verify("pw"));
    }

    #[rstest]
    fn debug_output_hides_the_hash() {
        let hash = PasswordHash::generate("pw").expect("hash");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }

    #[tokio::test]
    async fn blocking_helpers_round_trip() {
        let hash = hash_password_blocking("s3cret".to_owned())
            .await
            .expect("hash");
        assert!(verify_password_blocking(hash.clone(), "s3cret".to_owned()).await.expect("verify"));
        assert!(!verify_password_blocking(hash, "nope".to_owned()).await.expect("verify"));
    }
}
