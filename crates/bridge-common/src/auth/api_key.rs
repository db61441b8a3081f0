//! Shared static API key
//!
//! A single secret gates every protected route. Comparison is constant-time
//! so response timing does not leak how much of a guess was correct.

use std::fmt;

use subtle::ConstantTimeEq;

/// The configured API key
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Byte-for-byte, constant-time comparison against a candidate
    #[must_use]
    pub fn verify(&self, candidate: &[u8]) -> bool {
        self.0.as_bytes().ct_eq(candidate).into()
    }

    /// Convenience for string candidates
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.verify(candidate.as_bytes())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
