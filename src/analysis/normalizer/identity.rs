//! Identity normalizer implementation.

use super::WordNormalizer;
use crate::error::Result;

/// Identity normalizer that returns words unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityNormalizer;

impl IdentityNormalizer {
    pub fn new() -> Self {
        IdentityNormalizer
    }
}

impl WordNormalizer for IdentityNormalizer {
    fn normalize(&self, word: &str) -> Result<String> {
        Ok(word.to_string())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_normalizer() {
        let normalizer = IdentityNormalizer::new();

        assert_eq!(normalizer.normalize("الطالب").unwrap(), "الطالب");
        assert_eq!(normalizer.normalize("يكتب").unwrap(), "يكتب");
        assert_eq!(normalizer.normalize("").unwrap(), "");
    }
}
