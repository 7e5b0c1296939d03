//! Password hashing.
//!
//! Passwords are stored as PBKDF2-HMAC-SHA256 digests with a random per-user
//! salt. Salt and digest are hex encoded so they sit comfortably in JSON.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const SALT_LEN: usize = 16;
pub const HASH_LEN: usize = 32;
pub const DEFAULT_ITERATIONS: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    pub hash: String,
    pub salt: String,
    pub iterations: u32,
}

/// Hashes `password` with a freshly generated salt.
pub fn hash_password(password: &str, iterations: u32) -> PasswordHash {
    let salt: [u8; SALT_LEN] = rand::random();
    let iterations = iterations.max(1);
    PasswordHash {
        hash: hex::encode(derive(password, &salt, iterations)),
        salt: hex::encode(salt),
        iterations,
    }
}

/// Checks `password` against a stored digest. Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &PasswordHash) -> bool {
    let (Ok(salt), Ok(expected)) = (hex::decode(&stored.salt), hex::decode(&stored.hash)) else {
        return false;
    };
    let actual = derive(password, &salt, stored.iterations.max(1));
    actual[..].ct_eq(&expected[..]).into()
}

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let stored = hash_password("hunter2", 10);
        assert!(verify_password("hunter2", &stored));
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn never_stores_plaintext() {
        let stored = hash_password("hunter2", 10);
        assert_ne!(stored.hash, "hunter2");
        assert_eq!(stored.hash.len(), HASH_LEN * 2);
        assert_eq!(stored.salt.len(), SALT_LEN * 2);
    }

    #[test]
    fn salts_differ_per_hash() {
        let a = hash_password("same", 10);
        let b = hash_password("same", 10);
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn malformed_hash_does_not_verify() {
        let stored = PasswordHash {
            hash: "not-hex".into(),
            salt: "zz".into(),
            iterations: 10,
        };
        assert!(!verify_password("anything", &stored));
    }

    #[test]
    fn zero_iterations_are_clamped() {
        let stored = hash_password("pw", 0);
        assert_eq!(stored.iterations, 1);
        assert!(verify_password("pw", &stored));
    }
}
