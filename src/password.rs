use bcrypt::{hash, verify, DEFAULT_COST};

pub fn hash_password(plain: &str) -> Result<String, anyhow::Error> {
    hash(plain, DEFAULT_COST).map_err(|e| anyhow::anyhow!("bcrypt hashing failed: {:?}", e))
}

/// A stored hash that bcrypt cannot parse counts as a failed match.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}
