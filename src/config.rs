//! Media Key System configuration value types.
//!
//! [`MediaKeySystemConfig`] mirrors the EME `MediaKeySystemConfiguration`
//! dictionary. Every field is optional; an absent field is omitted from the
//! serialized map rather than sent as null, so the platform layer can tell
//! "not specified" apart from an explicit empty value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Requirement for distinctive identifiers or persistent state.
///
/// Serialized to the EME wire strings `required`/`optional`/`not-allowed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "optional")]
    Optional,
    #[serde(rename = "not-allowed")]
    NotAllowed,
}

/// A single audio or video capability descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCapability {
    /// MIME type with codecs parameter, e.g. `video/mp4; codecs="avc1.42E01E"`.
    pub content_type: String,
    /// Requested robustness level, key-system specific.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robustness: Option<String>,
    /// Requested encryption scheme, e.g. `cenc` or `cbcs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_scheme: Option<String>,
}

impl MediaCapability {
    /// Create a capability descriptor for a content type.
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            robustness: None,
            encryption_scheme: None,
        }
    }

    /// Request a specific robustness level.
    #[must_use]
    pub fn with_robustness(mut self, robustness: impl Into<String>) -> Self {
        self.robustness = Some(robustness.into());
        self
    }

    /// Request a specific encryption scheme.
    #[must_use]
    pub fn with_encryption_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.encryption_scheme = Some(scheme.into());
        self
    }
}

/// Mirror of the EME `MediaKeySystemConfiguration` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaKeySystemConfig {
    /// Supported initialization data types, e.g. `cenc`, `keyids`, `sinf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data_types: Option<Vec<String>>,
    /// Audio capability descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_capabilities: Option<Vec<MediaCapability>>,
    /// Video capability descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_capabilities: Option<Vec<MediaCapability>>,
    /// Whether the key system may use a distinctive identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinctive_identifier: Option<Requirement>,
    /// Whether the key system may persist state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_state: Option<Requirement>,
    /// Supported session types, e.g. `temporary`, `persistent-license`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_types: Option<Vec<String>>,
}

impl MediaKeySystemConfig {
    /// Create an empty configuration (all fields unspecified).
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline software-security preset.
    ///
    /// Requests `cenc` init data, temporary sessions, and H.264/AAC stream
    /// types at `SW_SECURE_CRYPTO` robustness.
    pub fn software() -> Self {
        Self {
            init_data_types: Some(vec!["cenc".to_string()]),
            audio_capabilities: Some(vec![MediaCapability::new(
                "audio/mp4; codecs=\"mp4a.40.2\"",
            )
            .with_robustness("SW_SECURE_CRYPTO")]),
            video_capabilities: Some(vec![MediaCapability::new(
                "video/mp4; codecs=\"avc1.42E01E\"",
            )
            .with_robustness("SW_SECURE_CRYPTO")]),
            distinctive_identifier: None,
            persistent_state: None,
            session_types: Some(vec!["temporary".to_string()]),
        }
    }

    /// Hardware-security preset.
    ///
    /// Identical to [`software`](Self::software) apart from requesting
    /// `HW_SECURE_ALL` robustness.
    pub fn hardware() -> Self {
        Self {
            audio_capabilities: Some(vec![MediaCapability::new(
                "audio/mp4; codecs=\"mp4a.40.2\"",
            )
            .with_robustness("HW_SECURE_ALL")]),
            video_capabilities: Some(vec![MediaCapability::new(
                "video/mp4; codecs=\"avc1.42E01E\"",
            )
            .with_robustness("HW_SECURE_ALL")]),
            ..Self::software()
        }
    }

    /// Set the supported initialization data types.
    #[must_use]
    pub fn with_init_data_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.init_data_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Set the audio capability descriptors.
    #[must_use]
    pub fn with_audio_capabilities(mut self, capabilities: Vec<MediaCapability>) -> Self {
        self.audio_capabilities = Some(capabilities);
        self
    }

    /// Set the video capability descriptors.
    #[must_use]
    pub fn with_video_capabilities(mut self, capabilities: Vec<MediaCapability>) -> Self {
        self.video_capabilities = Some(capabilities);
        self
    }

    /// Set the distinctive identifier requirement.
    #[must_use]
    pub fn with_distinctive_identifier(mut self, requirement: Requirement) -> Self {
        self.distinctive_identifier = Some(requirement);
        self
    }

    /// Set the persistent state requirement.
    #[must_use]
    pub fn with_persistent_state(mut self, requirement: Requirement) -> Self {
        self.persistent_state = Some(requirement);
        self
    }

    /// Set the supported session types.
    #[must_use]
    pub fn with_session_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.session_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Serialize into the key-value structure sent to the platform layer.
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::InvalidResponse(format!(
                "configuration serialized to a non-object: {other}"
            ))),
        }
    }

    /// Rebuild a configuration from its key-value structure.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(map.clone())).map_err(Error::from)
    }
}
