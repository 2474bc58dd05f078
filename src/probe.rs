//! Probing facade and result shaping helpers.
//!
//! [`DrmProbe`] bundles the convenience checks over one host web view. The
//! probing methods are documented to resolve rather than fail: a host-level
//! error is folded into a [`DrmCapability`] with `supported = false` and the
//! failure text in `error`, and a single failed probe is returned as-is (no
//! retries).

use std::collections::HashMap;

use crate::capability::DrmCapability;
use crate::config::MediaKeySystemConfig;
use crate::host::DrmHost;
use crate::keysystem::KEY_SYSTEMS;

/// Convenience checks over one host web view.
#[derive(Debug)]
pub struct DrmProbe<H> {
    host: H,
}

impl<H: DrmHost> DrmProbe<H> {
    /// Create a probe over a host.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Borrow the underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Unwrap back into the host.
    pub fn into_inner(self) -> H {
        self.host
    }

    /// Probe a single key system, passing the host's answer through.
    ///
    /// Never fails: a transport error or a malformed reply resolves to an
    /// unsupported result carrying the error string.
    pub async fn check(
        &self,
        key_system: &str,
        config: Option<&MediaKeySystemConfig>,
    ) -> DrmCapability {
        let capability = match self.host.check_drm_support(key_system, config).await {
            Ok(map) => DrmCapability::from_map(&map)
                .unwrap_or_else(|err| DrmCapability::unsupported(key_system, err.to_string())),
            Err(err) => DrmCapability::unsupported(key_system, err.to_string()),
        };
        debug!(
            "{}: supported={} level={:?}",
            key_system, capability.supported, capability.security_level
        );
        capability
    }

    /// Probe every registry entry sequentially, in registry order.
    pub async fn check_all(&self) -> Vec<DrmCapability> {
        let mut results = Vec::with_capacity(KEY_SYSTEMS.len());
        for key_system in KEY_SYSTEMS {
            results.push(self.check(key_system, None).await);
        }
        results
    }

    /// Probe everything and render the summary block.
    pub async fn summary(&self) -> String {
        summarize(&self.check_all().await)
    }

    /// Probe everything and report whether any key system is usable.
    pub async fn any_supported(&self) -> bool {
        any_supported(&self.check_all().await)
    }

    /// Probe everything and key the results by key system identifier.
    pub async fn capability_map(&self) -> HashMap<String, DrmCapability> {
        capability_map(self.check_all().await)
    }
}

/// Render one line per result, joined with `\n`.
#[must_use]
pub fn summarize(results: &[DrmCapability]) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// True iff at least one result reports support.
#[must_use]
pub fn any_supported(results: &[DrmCapability]) -> bool {
    results.iter().any(|result| result.supported)
}

/// Key results by key system identifier; the last write wins on duplicates.
#[must_use]
pub fn capability_map(results: Vec<DrmCapability>) -> HashMap<String, DrmCapability> {
    results
        .into_iter()
        .map(|result| (result.key_system.clone(), result))
        .collect()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{json, Map, Value};

    use super::{any_supported, capability_map, summarize, DrmProbe};
    use crate::capability::DrmCapability;
    use crate::config::MediaKeySystemConfig;
    use crate::error::{Error, Result};
    use crate::host::DrmHost;
    use crate::keysystem::{KEY_SYSTEMS, PLAYREADY, WIDEVINE};

    /// Host that grants exactly the key systems listed in `supported`.
    struct StaticHost {
        supported: &'static [&'static str],
    }

    #[async_trait]
    impl DrmHost for StaticHost {
        async fn check_drm_support(
            &self,
            key_system: &str,
            _config: Option<&MediaKeySystemConfig>,
        ) -> Result<Map<String, Value>> {
            let supported = self.supported.contains(&key_system);
            let mut map = Map::new();
            map.insert("keySystem".to_string(), json!(key_system));
            map.insert("isSupported".to_string(), json!(supported));
            if supported {
                map.insert("securityLevel".to_string(), json!("SW_SECURE_CRYPTO"));
            }
            Ok(map)
        }
    }

    struct FailingHost;

    #[async_trait]
    impl DrmHost for FailingHost {
        async fn check_drm_support(
            &self,
            _key_system: &str,
            _config: Option<&MediaKeySystemConfig>,
        ) -> Result<Map<String, Value>> {
            Err(Error::Host("platform channel closed".to_string()))
        }
    }

    /// Host that replies without the required `isSupported` member.
    struct MalformedHost;

    #[async_trait]
    impl DrmHost for MalformedHost {
        async fn check_drm_support(
            &self,
            key_system: &str,
            _config: Option<&MediaKeySystemConfig>,
        ) -> Result<Map<String, Value>> {
            let mut map = Map::new();
            map.insert("keySystem".to_string(), json!(key_system));
            Ok(map)
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn check_passes_host_result_through() {
        let probe = DrmProbe::new(StaticHost {
            supported: &[WIDEVINE],
        });
        let capability = probe.check(WIDEVINE, None).await;

        assert!(capability.supported);
        assert_eq!(capability.key_system, WIDEVINE);
        assert_eq!(capability.security_level.as_deref(), Some("SW_SECURE_CRYPTO"));
        assert!(capability.error.is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn check_folds_host_error_into_result() {
        let probe = DrmProbe::new(FailingHost);
        let capability = probe.check(WIDEVINE, None).await;

        assert!(!capability.supported);
        let error = capability.error.expect("error string");
        assert!(error.contains("platform channel closed"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn check_folds_malformed_reply_into_result() {
        let probe = DrmProbe::new(MalformedHost);
        let capability = probe.check(WIDEVINE, None).await;

        assert!(!capability.supported);
        let error = capability.error.expect("error string");
        assert!(error.contains("isSupported"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn check_all_preserves_registry_order() {
        let probe = DrmProbe::new(StaticHost { supported: &[] });
        let results = probe.check_all().await;

        let probed: Vec<&str> = results.iter().map(|r| r.key_system.as_str()).collect();
        assert_eq!(probed, KEY_SYSTEMS);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn facade_any_supported_and_map_agree() {
        let probe = DrmProbe::new(StaticHost {
            supported: &[PLAYREADY],
        });

        assert!(probe.any_supported().await);
        let map = probe.capability_map().await;
        assert_eq!(map.len(), KEY_SYSTEMS.len());
        assert!(map[PLAYREADY].supported);
        assert!(!map[WIDEVINE].supported);
    }

    #[test]
    fn any_supported_is_boolean_or() {
        let none = vec![
            DrmCapability::new(PLAYREADY, false),
            DrmCapability::new(WIDEVINE, false),
        ];
        assert!(!any_supported(&none));
        assert!(!any_supported(&[]));

        let one = vec![
            DrmCapability::new(PLAYREADY, false),
            DrmCapability::new(WIDEVINE, true),
        ];
        assert!(any_supported(&one));
    }

    #[test]
    fn capability_map_keys_match_results() {
        let results = vec![
            DrmCapability::new(PLAYREADY, true),
            DrmCapability::new(WIDEVINE, false),
        ];
        let map = capability_map(results);

        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![PLAYREADY, WIDEVINE]);
    }

    #[test]
    fn capability_map_last_write_wins() {
        let results = vec![
            DrmCapability::new(WIDEVINE, false),
            DrmCapability::new(WIDEVINE, true),
        ];
        let map = capability_map(results);

        assert_eq!(map.len(), 1);
        assert!(map[WIDEVINE].supported);
    }

    #[test]
    fn summarize_renders_one_line_per_result() {
        let results = vec![
            DrmCapability {
                security_level: Some("L1".to_string()),
                ..DrmCapability::new(WIDEVINE, true)
            },
            DrmCapability::new(PLAYREADY, false),
        ];

        let summary = summarize(&results);
        assert_eq!(summary, "\u{2713} Widevine (L1)\n\u{2717} PlayReady");
    }
}
