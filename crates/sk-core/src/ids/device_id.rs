use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Prefix every generated device identifier carries.
pub const DEVICE_ID_PREFIX: &str = "device-";

/// Stable anonymous device identifier (`device-` + UUID v4).
///
/// Distinguishes installations without authentication. A value loaded from
/// the store is carried as-is; only freshly generated values are guaranteed
/// to match the canonical format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a new identifier from a random UUID v4.
    pub fn generate() -> Self {
        Self(format!("{}{}", DEVICE_ID_PREFIX, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate canonical format: `device-` followed by a 36-character
    /// hyphenated UUID with version 4 and the RFC 4122 variant.
    pub fn is_valid(&self) -> bool {
        let Some(rest) = self.0.strip_prefix(DEVICE_ID_PREFIX) else {
            return false;
        };
        if rest.len() != 36 {
            return false;
        }
        match Uuid::try_parse(rest) {
            Ok(uuid) => {
                uuid.get_version_num() == 4 && uuid.get_variant() == uuid::Variant::RFC4122
            }
            Err(_) => false,
        }
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
