//! Password hashing and verification.

use bcrypt::DEFAULT_COST;

/// Hash a plaintext password with bcrypt and a fresh per-password salt.
pub fn hash(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed hash counts as a failed verification rather than an error,
/// so callers can treat every mismatch as bad credentials.
pub fn verify(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}
