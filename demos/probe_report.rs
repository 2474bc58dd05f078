use async_trait::async_trait;
use serde_json::{json, Map, Value};

use emeprobe::config::MediaKeySystemConfig;
use emeprobe::host::DrmHost;
use emeprobe::probe::DrmProbe;

/// Pretend host that answers like a Windows WebView2 with PlayReady enabled.
struct FixtureHost;

#[async_trait]
impl DrmHost for FixtureHost {
    async fn check_drm_support(
        &self,
        key_system: &str,
        _config: Option<&MediaKeySystemConfig>,
    ) -> emeprobe::error::Result<Map<String, Value>> {
        let supported = key_system.contains("playready");
        let mut map = Map::new();
        map.insert("keySystem".to_string(), json!(key_system));
        map.insert("isSupported".to_string(), json!(supported));
        if supported {
            map.insert("securityLevel".to_string(), json!("2000"));
        } else {
            map.insert(
                "error".to_string(),
                json!("NotSupportedError: Unsupported keySystem or supportedConfigurations."),
            );
        }
        Ok(map)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let probe = DrmProbe::new(FixtureHost);

    println!("{}\n", probe.summary().await);

    let map = probe.capability_map().await;
    let granted = map.values().filter(|capability| capability.supported).count();
    println!("{granted} of {} key systems supported", map.len());

    Ok(())
}
