use std::fmt::Display;
use std::str::FromStr;

use crate::storage::sled::error::SledStorageError;
use strum::AsRefStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, EnumString, AsRefStr, Display, PartialEq, Eq, Copy, Clone)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum PrefixKind {
    Todo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyPrefix {
    prefix: String,
}

impl KeyPrefix {
    pub fn from_kind(kind: PrefixKind) -> Self {
        Self {
            prefix: format!("{}:", kind.as_ref()),
        }
    }

    pub fn from_parts(parts: &[&str]) -> Self {
        Self {
            prefix: parts.join(":") + ":",
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        self.prefix.as_str()
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.prefix.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Key {
    prefix: KeyPrefix,
    full_key: String,
}

impl Key {
    pub fn new(prefix: KeyPrefix, value: impl Display) -> Self {
        Self {
            full_key: format!("{}{}", prefix.as_str(), value),
            prefix,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SledStorageError> {
        let full_key = std::str::from_utf8(bytes)
            .map_err(SledStorageError::Conversion)?
            .to_string();

        let parts: Vec<&str> = full_key.split(':').collect();

        if parts.len() >= 2 {
            if PrefixKind::from_str(parts[0]).is_err() {
                return Err(SledStorageError::InvalidKey(full_key));
            }
            if parts.iter().any(|v| v.is_empty()) {
                return Err(SledStorageError::InvalidKey(full_key));
            }
            let prefix = KeyPrefix::from_parts(&parts[..parts.len() - 1]);

            Ok(Self { prefix, full_key })
        } else {
            Err(SledStorageError::InvalidKey(full_key))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.full_key.as_bytes()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.full_key.fmt(f)
    }
}
