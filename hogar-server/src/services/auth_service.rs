use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash};

#[derive(Clone)]
pub struct AuthService {
    hasher: Arc<Argon2<'static>>,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            hasher: Arc::new(Argon2::default()),
        }
    }

    pub fn hash(&self, password: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let hash = self.hasher.hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify(&self, stored_hash: &str, password: &str) -> Result<bool, password_hash::Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        Ok(self
            .hasher
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
