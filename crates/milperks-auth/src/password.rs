//! Password digests.
//!
//! Credentials are compared as deterministic, salt-free SHA-256 hex
//! digests: the same input always yields the same 64-character
//! lowercase string, and the digest is what is stored and compared.
//! Plaintext never reaches the store.

use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Digest a password for storage or comparison.
///
/// `None` (absent) and `Some("")` (empty) are rejected before any
/// hashing is attempted, as two distinct caller errors.
pub fn hash_password(password: Option<&str>) -> Result<String, AuthError> {
    let password = password.ok_or(AuthError::PasswordMissing)?;
    if password.is_empty() {
        return Err(AuthError::PasswordEmpty);
    }

    let digest = Sha256::digest(password.as_bytes());
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            hash_password(Some("newuser")).unwrap(),
            "9c9064c59f1ffa2e174ee754d2979be80dd30db552ec03e7e327e9b1a4bd594e"
        );
    }

    #[test]
    fn digest_is_64_lowercase_hex_chars() {
        let digest = hash_password(Some("hunter2")).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn same_input_same_digest() {
        assert_eq!(
            hash_password(Some("hunter2")).unwrap(),
            hash_password(Some("hunter2")).unwrap()
        );
    }

    #[test]
    fn different_inputs_differ() {
        let a = hash_password(Some("hunter2")).unwrap();
        let b = hash_password(Some("hunter3")).unwrap();
        assert_ne!(a, b);

        let c = hash_password(Some("correct-horse")).unwrap();
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn empty_password_is_its_own_error() {
        assert!(matches!(
            hash_password(Some("")),
            Err(AuthError::PasswordEmpty)
        ));
    }

    #[test]
    fn missing_password_is_distinct_from_empty() {
        assert!(matches!(hash_password(None), Err(AuthError::PasswordMissing)));
    }
}
