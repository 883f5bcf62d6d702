use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

const CANONICAL_LEN: usize = 36;

/// Opaque caller identity. Doubles as the OAuth `state` value and as the key
/// under which the caller's credential is stored.
///
/// Only canonical hyphenated UUIDs are accepted, and the stored form is always
/// lowercase, so `ABC…` and `abc…` address the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityToken(Uuid);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identity is not a canonical UUID")]
pub struct InvalidIdentity;

/// Returns true when `candidate` is a canonical 8-4-4-4-12 UUID string.
#[must_use]
pub fn is_valid_identity(candidate: &str) -> bool {
    IdentityToken::parse(candidate).is_ok()
}

impl IdentityToken {
    /// # Errors
    /// Returns `InvalidIdentity` for anything other than a canonical hyphenated UUID.
    pub fn parse(candidate: &str) -> Result<Self, InvalidIdentity> {
        // uuid also accepts simple, braced and urn forms; those differ in length.
        if candidate.len() != CANONICAL_LEN {
            return Err(InvalidIdentity);
        }
        Uuid::try_parse(candidate).map(Self).map_err(|_| InvalidIdentity)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for IdentityToken {
    type Err = InvalidIdentity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for IdentityToken {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_uuids() {
        assert!(is_valid_identity("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_valid_identity("67E55044-10B1-426F-9247-BB680E5FE0C8"));
        assert!(is_valid_identity("00000000-0000-0000-0000-000000000000"));
        assert!(is_valid_identity(&Uuid::new_v4().to_string()));
    }

    #[test]
    fn test_rejects_non_canonical_strings() {
        assert!(!is_valid_identity(""));
        assert!(!is_valid_identity("not-a-uuid"));
        assert!(!is_valid_identity("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(!is_valid_identity("{67e55044-10b1-426f-9247-bb680e5fe0c8}"));
        assert!(!is_valid_identity("urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(!is_valid_identity("67e55044-10b1-426f-9247-bb680e5fe0c"));
        assert!(!is_valid_identity("67e55044-10b1-426f-9247-bb680e5fe0c8a"));
        assert!(!is_valid_identity("67e55044-10b1-426f-9247-bb680e5fe0cz"));
        assert!(!is_valid_identity("67e55044+10b1-426f-9247-bb680e5fe0c8"));
        assert!(!is_valid_identity("../../etc/passwd-0000-0000-0000000000"));
    }

    #[test]
    fn test_display_is_lowercase_hyphenated() {
        let token = IdentityToken::parse("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(token.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }
}
