//! DRM capability result type.
//!
//! A [`DrmCapability`] is built from the raw response map the platform layer
//! hands back for one probe and is never mutated afterwards. Only the key
//! system identifier and the supported flag are required; an absent optional
//! field means "not reported", not false/empty, and is omitted again on
//! serialization.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::keysystem::display_name;

/// Required members of a raw response map.
const REQUIRED_FIELDS: &[&str] = &["keySystem", "isSupported"];

/// Outcome of probing one key system through the host web view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrmCapability {
    /// Key system identifier that was probed.
    pub key_system: String,
    /// Whether the host web view granted access for the key system.
    #[serde(rename = "isSupported")]
    pub supported: bool,
    /// Robustness/security level reported by the platform, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_level: Option<String>,
    /// Human-readable description, if the platform supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Platform error string when the probe failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DrmCapability {
    /// Create a bare capability result with no optional fields set.
    pub fn new(key_system: impl Into<String>, supported: bool) -> Self {
        Self {
            key_system: key_system.into(),
            supported,
            security_level: None,
            description: None,
            error: None,
        }
    }

    /// Create an unsupported result carrying an error string.
    ///
    /// Used when the probe itself could not be carried out; the probing
    /// methods resolve with one of these rather than failing.
    pub fn unsupported(key_system: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(key_system, false)
        }
    }

    /// Build a capability result from the platform's raw response map.
    ///
    /// `keySystem` and `isSupported` are required; everything else is
    /// optional and stays `None` when absent.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        for &field in REQUIRED_FIELDS {
            if !map.contains_key(field) {
                return Err(Error::MissingField(field));
            }
        }
        serde_json::from_value(Value::Object(map.clone())).map_err(Error::from)
    }

    /// Build a capability result from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(Error::InvalidResponse(format!(
                "expected a response object, got {other}"
            ))),
        }
    }

    /// Serialize back into a raw response map, omitting absent fields.
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::InvalidResponse(format!(
                "capability serialized to a non-object: {other}"
            ))),
        }
    }
}

impl fmt::Display for DrmCapability {
    /// One summary line: check/cross indicator, friendly name, and the
    /// security level in parentheses when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.supported { '\u{2713}' } else { '\u{2717}' };
        write!(f, "{} {}", mark, display_name(&self.key_system))?;
        if let Some(ref level) = self.security_level {
            write!(f, " ({level})")?;
        }
        Ok(())
    }
}
