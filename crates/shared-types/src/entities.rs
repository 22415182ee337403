//! # Core Identifiers
//!
//! - **ModuleKey**: case-normalized name of a toggleable platform module
//!   (e.g. `FINANCEIRO`, `SPLIT_PAGAMENTO`).
//! - **TenantId**: the clinic that owns an independent set of active modules.

use crate::errors::ModuleKeyError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// MODULE KEY
// =============================================================================

/// Identifier of a platform module.
///
/// Input is trimmed and uppercased before validation. The normalized key must
/// be 2 to 50 characters drawn from ASCII `A-Z` and `_`.
///
/// ```
/// use shared_types::ModuleKey;
///
/// let key = ModuleKey::new("split_pagamento").unwrap();
/// assert_eq!(key.as_str(), "SPLIT_PAGAMENTO");
/// assert!(ModuleKey::new("x").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleKey(String);

impl ModuleKey {
    /// Minimum accepted key length.
    pub const MIN_LEN: usize = 2;
    /// Maximum accepted key length.
    pub const MAX_LEN: usize = 50;

    /// Normalize and validate a module key.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ModuleKeyError> {
        let normalized = raw.as_ref().trim().to_ascii_uppercase();

        let len = normalized.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(ModuleKeyError::InvalidLength {
                len,
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
            });
        }

        if let Some(ch) = normalized
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || *c == '_'))
        {
            return Err(ModuleKeyError::InvalidCharacter {
                key: normalized.clone(),
                ch,
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleKey({})", self.0)
    }
}

impl FromStr for ModuleKey {
    type Err = ModuleKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ModuleKey {
    type Error = ModuleKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ModuleKey {
    type Error = ModuleKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleKey> for String {
    fn from(key: ModuleKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ModuleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashSet<ModuleKey>` be queried with `&str`.
impl Borrow<str> for ModuleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// TENANT
// =============================================================================

/// Identifier of a clinic (tenant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TenantId(pub Uuid);

impl TenantId {
    /// Generate a fresh random tenant id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_module_key_is_normalized() {
        let key = ModuleKey::new("  financeiro ").unwrap();
        assert_eq!(key.as_str(), "FINANCEIRO");
        assert_eq!(key.to_string(), "FINANCEIRO");
    }

    #[test]
    fn test_module_key_length_bounds() {
        assert!(ModuleKey::new("AB").is_ok());
        assert!(ModuleKey::new("A".repeat(50)).is_ok());

        assert_eq!(
            ModuleKey::new("A"),
            Err(ModuleKeyError::InvalidLength {
                len: 1,
                min: 2,
                max: 50
            })
        );
        assert!(matches!(
            ModuleKey::new("A".repeat(51)),
            Err(ModuleKeyError::InvalidLength { len: 51, .. })
        ));
        assert!(ModuleKey::new("   ").is_err());
    }

    #[test]
    fn test_module_key_rejects_invalid_characters() {
        let err = ModuleKey::new("NFE-2").unwrap_err();
        assert_eq!(
            err,
            ModuleKeyError::InvalidCharacter {
                key: "NFE-2".to_string(),
                ch: '-'
            }
        );

        assert!(ModuleKey::new("CRYPTO PAYMENTS").is_err());
        assert!(ModuleKey::new("ESTOQUE2").is_err());
        assert!(ModuleKey::new("AÇÃO").is_err());
    }

    #[test]
    fn test_module_key_borrow_as_str() {
        let mut set = HashSet::new();
        set.insert(ModuleKey::new("PEP").unwrap());

        assert!(set.contains("PEP"));
        assert!(!set.contains("pep"));
    }

    #[test]
    fn test_module_key_serde_validates() {
        let key: ModuleKey = serde_json::from_str("\"agenda\"").unwrap();
        assert_eq!(key.as_str(), "AGENDA");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"AGENDA\"");

        let bad: Result<ModuleKey, _> = serde_json::from_str("\"bad key\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_tenant_id_serializes_as_uuid_string() {
        let tenant = TenantId::new();

        let json = serde_json::to_string(&tenant).unwrap();
        assert_eq!(json, format!("\"{}\"", tenant));

        let parsed: TenantId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tenant);
        assert_ne!(TenantId::new(), tenant);
    }
}
