//! Argon2-backed account store.

use std::collections::HashMap;
use std::sync::RwLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use lk_core::{Account, EngineError, IdentityStore, Result};

/// In-memory [`IdentityStore`] storing argon2 PHC hashes, never plaintext.
pub struct MemoryIdentityStore {
    accounts: RwLock<HashMap<String, Account>>,
    /// Hash of a throwaway password, verified against on unknown-id logins
    /// so that "no such account" and "wrong password" cost the same.
    decoy_hash: String,
}

impl MemoryIdentityStore {
    pub fn new() -> Result<Self> {
        let decoy_hash = hash_password("lodgekeeper-decoy")?;
        Ok(Self {
            accounts: RwLock::new(HashMap::new()),
            decoy_hash,
        })
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| EngineError::unavailable(format!("password hashing failed: {e}")))
}

fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn signup(&self, id: &str, password: &str, name: &str) -> Result<bool> {
        {
            let accounts = self
                .accounts
                .read()
                .map_err(|_| EngineError::unavailable("identity store lock poisoned"))?;
            if accounts.contains_key(id) {
                return Ok(false);
            }
        }

        // Hash outside the lock; argon2 is deliberately slow.
        let password_hash = hash_password(password)?;

        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| EngineError::unavailable("identity store lock poisoned"))?;
        // Re-check under the write lock: a concurrent signup for the same
        // id may have won while we were hashing.
        if accounts.contains_key(id) {
            return Ok(false);
        }
        accounts.insert(
            id.to_string(),
            Account {
                id: id.to_string(),
                password_hash,
                name: name.to_string(),
            },
        );
        tracing::info!(account = %id, "account created");
        Ok(true)
    }

    async fn login(&self, id: &str, password: &str) -> Result<bool> {
        let stored = {
            let accounts = self
                .accounts
                .read()
                .map_err(|_| EngineError::unavailable("identity store lock poisoned"))?;
            accounts.get(id).map(|a| a.password_hash.clone())
        };

        let ok = match stored {
            Some(hash) => verify_password(password, &hash),
            None => {
                // Burn the same work as a real verification, then fail.
                let _ = verify_password(password, &self.decoy_hash);
                false
            }
        };
        Ok(ok)
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| EngineError::unavailable("identity store lock poisoned"))?;
        Ok(accounts.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signup_then_login_round_trip() {
        let store = MemoryIdentityStore::new().expect("store");
        assert!(store
            .signup("ada@example.com", "hunter2", "Ada")
            .await
            .expect("signup"));
        assert!(store
            .login("ada@example.com", "hunter2")
            .await
            .expect("login"));
        assert!(!store
            .login("ada@example.com", "wrong")
            .await
            .expect("login"));
    }

    #[tokio::test]
    async fn duplicate_signup_leaves_original_account_intact() {
        let store = MemoryIdentityStore::new().expect("store");
        assert!(store
            .signup("ada@example.com", "first", "Ada")
            .await
            .expect("signup"));
        assert!(!store
            .signup("ada@example.com", "second", "Impostor")
            .await
            .expect("signup"));
        // The original credentials still verify; the impostor's do not.
        assert!(store
            .login("ada@example.com", "first")
            .await
            .expect("login"));
        assert!(!store
            .login("ada@example.com", "second")
            .await
            .expect("login"));
    }

    #[tokio::test]
    async fn unknown_id_login_is_a_plain_false() {
        let store = MemoryIdentityStore::new().expect("store");
        assert!(!store
            .login("nobody@example.com", "anything")
            .await
            .expect("login"));
    }
}
