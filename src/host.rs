//! Boundary to the host web view controller.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::MediaKeySystemConfig;
use crate::error::Result;

/// Boundary to the host web view controller.
///
/// The embedding owns the transport: how the query reaches the browser
/// engine (WebView2, WKWebView, Android WebView, wry, ...) and how the
/// outcome of `requestMediaKeySystemAccess` is marshalled back. This crate
/// only interprets the returned raw response map; see
/// [`DrmCapability::from_map`](crate::capability::DrmCapability::from_map)
/// for the members it expects.
///
/// Hosts whose only primitive is evaluating JavaScript can use
/// [`ScriptHost`](crate::script::ScriptHost) instead of implementing this
/// trait directly.
#[async_trait]
pub trait DrmHost: Send + Sync {
    /// Ask the host web view whether `key_system` is usable.
    ///
    /// With `config` set, the serialized configuration is offered to the key
    /// system; without it the host decides (typically an unconstrained
    /// request). Errors are reserved for transport-level failures; an
    /// unsupported key system is a successful reply with `isSupported`
    /// false.
    async fn check_drm_support(
        &self,
        key_system: &str,
        config: Option<&MediaKeySystemConfig>,
    ) -> Result<Map<String, Value>>;
}
