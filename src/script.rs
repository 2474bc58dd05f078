//! EME probe script generation and the evaluate-script host adapter.
//!
//! Most Rust web-view embeddings do not expose EME objects directly; what
//! they expose is "evaluate this JavaScript and hand back the stringified
//! result". This module renders the capability probe as a self-contained
//! script, parses the reply, and wraps any such evaluator into a
//! [`DrmHost`].

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::MediaKeySystemConfig;
use crate::error::{Error, Result};
use crate::host::DrmHost;

/// Render the EME probe for `key_system` as an async JavaScript expression.
///
/// The expression calls `navigator.requestMediaKeySystemAccess` and resolves
/// to a JSON string holding the raw response map; it never rejects. On
/// success the granted video robustness is reported as the security level
/// (omitted when the key system granted no video capability). Without a
/// caller-supplied configuration a single empty configuration dictionary is
/// offered.
pub fn probe_script(
    key_system: &str,
    config: Option<&MediaKeySystemConfig>,
) -> Result<String> {
    let key_system_js = serde_json::to_string(key_system)?;
    let config_js = match config {
        Some(config) => serde_json::to_string(config)?,
        None => "{}".to_string(),
    };

    Ok(format!(
        r#"(async () => {{
  const keySystem = {key_system_js};
  try {{
    const access = await navigator.requestMediaKeySystemAccess(keySystem, [{config_js}]);
    const granted = access.getConfiguration();
    const video = (granted.videoCapabilities || [])[0];
    return JSON.stringify({{
      keySystem: keySystem,
      isSupported: true,
      securityLevel: (video && video.robustness) || undefined
    }});
  }} catch (err) {{
    return JSON.stringify({{
      keySystem: keySystem,
      isSupported: false,
      error: String(err)
    }});
  }}
}})()"#
    ))
}

/// Decode an evaluator reply into the raw response map.
///
/// Evaluate-script APIs disagree on quoting: some hand back the JSON value
/// the script resolved to, others the JSON-encoded string of it. One level
/// of extra string quoting is unwrapped before the object check.
pub fn parse_probe_reply(reply: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(reply)?;
    let value = match value {
        Value::String(inner) => serde_json::from_str(&inner)?,
        other => other,
    };
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidResponse(format!(
            "expected a response object, got {other}"
        ))),
    }
}

/// Evaluates a JavaScript expression inside the host web view.
///
/// The probe scripts built here resolve to a JSON string; routing that
/// promise result back to the caller (callback, post-message channel, ...)
/// is the implementor's concern.
#[async_trait]
pub trait ScriptEvaluator: Send + Sync {
    /// Run `script` and return its stringified completion value.
    async fn evaluate(&self, script: &str) -> Result<String>;
}

/// Adapter implementing [`DrmHost`] over any [`ScriptEvaluator`].
#[derive(Debug)]
pub struct ScriptHost<E> {
    evaluator: E,
}

impl<E> ScriptHost<E> {
    /// Wrap an evaluator into a DRM host.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Unwrap back into the evaluator.
    pub fn into_inner(self) -> E {
        self.evaluator
    }
}

#[async_trait]
impl<E: ScriptEvaluator> DrmHost for ScriptHost<E> {
    async fn check_drm_support(
        &self,
        key_system: &str,
        config: Option<&MediaKeySystemConfig>,
    ) -> Result<Map<String, Value>> {
        let script = probe_script(key_system, config)?;
        debug!("probing {} through the script evaluator", key_system);
        let reply = self.evaluator.evaluate(&script).await?;
        parse_probe_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::{parse_probe_reply, probe_script, ScriptEvaluator, ScriptHost};
    use crate::capability::DrmCapability;
    use crate::config::MediaKeySystemConfig;
    use crate::error::{Error, Result};
    use crate::host::DrmHost;
    use crate::keysystem::WIDEVINE;

    #[test]
    fn script_embeds_escaped_key_system() {
        let script = probe_script("com.\"quoted\".system", None).expect("script");
        assert!(script.contains(r#"const keySystem = "com.\"quoted\".system";"#));
        assert!(script.contains("requestMediaKeySystemAccess(keySystem, [{}])"));
    }

    #[test]
    fn script_embeds_serialized_config() {
        let config = MediaKeySystemConfig::new().with_init_data_types(["cenc"]);
        let script = probe_script(WIDEVINE, Some(&config)).expect("script");
        assert!(script.contains(r#"[{"initDataTypes":["cenc"]}]"#));
    }

    #[test]
    fn parse_accepts_bare_object() {
        let map = parse_probe_reply(r#"{"keySystem":"a","isSupported":true}"#).expect("parse");
        assert_eq!(map["isSupported"], json!(true));
    }

    #[test]
    fn parse_unwraps_double_encoded_reply() {
        // WebView2's ExecuteScriptAsync returns the JSON encoding of the
        // script's string result.
        let reply = serde_json::to_string(r#"{"keySystem":"a","isSupported":false}"#)
            .expect("encode");
        let map = parse_probe_reply(&reply).expect("parse");
        assert_eq!(map["isSupported"], json!(false));
    }

    #[test]
    fn parse_rejects_non_object() {
        let err = parse_probe_reply("42").expect_err("non-object should fail");
        let msg = format!("{err}");
        assert!(msg.contains("expected a response object"));
    }

    struct CannedEvaluator {
        reply: &'static str,
    }

    #[async_trait]
    impl ScriptEvaluator for CannedEvaluator {
        async fn evaluate(&self, _script: &str) -> Result<String> {
            Ok(self.reply.to_string())
        }
    }

    struct BrokenEvaluator;

    #[async_trait]
    impl ScriptEvaluator for BrokenEvaluator {
        async fn evaluate(&self, _script: &str) -> Result<String> {
            Err(Error::Evaluate("web view is gone".to_string()))
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn script_host_parses_reply_into_map() {
        let host = ScriptHost::new(CannedEvaluator {
            reply: r#"{"keySystem":"com.widevine.alpha","isSupported":true,"securityLevel":"L3"}"#,
        });
        let map = host
            .check_drm_support(WIDEVINE, None)
            .await
            .expect("check");

        let capability = DrmCapability::from_map(&map).expect("reshape");
        assert!(capability.supported);
        assert_eq!(capability.security_level.as_deref(), Some("L3"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn script_host_propagates_evaluator_failure() {
        let host = ScriptHost::new(BrokenEvaluator);
        let err = host
            .check_drm_support(WIDEVINE, None)
            .await
            .expect_err("evaluator failure should surface");
        assert!(matches!(err, Error::Evaluate(_)));
    }
}
