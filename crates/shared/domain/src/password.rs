//! Password digest value object.
//!
//! Passwords are stored as the lowercase hex SHA-256 digest of the plain text.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

// Don't expose the digest in debug output
impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hex", &"[REDACTED]")
            .finish()
    }
}

impl PasswordDigest {
    /// Digest a plain text password.
    pub fn from_plain(plain_text: &str) -> Self {
        Self {
            hex: sha256_hex(plain_text.as_bytes()),
        }
    }

    /// Wrap a digest read from storage.
    pub fn from_stored(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    pub fn into_string(self) -> String {
        self.hex
    }

    /// Compare a plain text password against this digest, ignoring hex case.
    pub fn matches(&self, plain_text: &str) -> bool {
        sha256_hex(plain_text.as_bytes()).eq_ignore_ascii_case(self.hex.trim())
    }
}

impl From<PasswordDigest> for String {
    fn from(digest: PasswordDigest) -> Self {
        digest.hex
    }
}

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
