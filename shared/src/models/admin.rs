//! Admin Model
//!
//! The `admin` table is the allow-list: only identities present and active
//! here may hold a session against the admin surface.

use serde::{Deserialize, Serialize};

/// Admin entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Admin {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create admin payload (bootstrap/seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub email: String,
    pub password: String,
}

impl Admin {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies_and_rejects() {
        let hash = Admin::hash_password("correct horse").unwrap();
        let admin = Admin {
            id: 1,
            email: "owner@example.com".to_string(),
            password_hash: hash,
            is_active: true,
            created_at: 0,
        };
        assert!(admin.verify_password("correct horse").unwrap());
        assert!(!admin.verify_password("battery staple").unwrap());
    }
}
