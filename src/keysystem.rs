//! Well-known EME key system identifiers.
//!
//! The identifiers are plain string constants with no behavior; the aggregate
//! check probes them in the order of [`KEY_SYSTEMS`].

/// PlayReady, classic variant.
pub const PLAYREADY: &str = "com.microsoft.playready";

/// PlayReady recommendation variant (software security, SL2000).
pub const PLAYREADY_RECOMMENDATION: &str = "com.microsoft.playready.recommendation";

/// PlayReady recommendation variant with hardware security (SL3000).
pub const PLAYREADY_RECOMMENDATION_3000: &str = "com.microsoft.playready.recommendation.3000";

/// Legacy PlayReady hardware variant.
pub const PLAYREADY_HARDWARE: &str = "com.microsoft.playready.hardware";

/// Widevine, all robustness levels.
pub const WIDEVINE: &str = "com.widevine.alpha";

/// FairPlay Streaming.
pub const FAIRPLAY: &str = "com.apple.fps";

/// FairPlay Streaming 1.x.
pub const FAIRPLAY_1_0: &str = "com.apple.fps.1_0";

/// The fixed, ordered registry probed by the aggregate check.
pub const KEY_SYSTEMS: &[&str] = &[
    PLAYREADY,
    PLAYREADY_RECOMMENDATION,
    PLAYREADY_RECOMMENDATION_3000,
    PLAYREADY_HARDWARE,
    WIDEVINE,
    FAIRPLAY,
    FAIRPLAY_1_0,
];

/// Map a key system identifier to a short display name.
///
/// Matching is case-insensitive on substrings, with the hardware variant
/// checked before the recommendation variant before generic PlayReady.
/// Identifiers that match no known family are echoed back unchanged.
#[must_use]
pub fn display_name(key_system: &str) -> &str {
    let lower = key_system.to_ascii_lowercase();
    if lower.contains("hardware") {
        "PlayReady Hardware"
    } else if lower.contains("recommendation") {
        "PlayReady Recommendation"
    } else if lower.contains("playready") {
        "PlayReady"
    } else if lower.contains("widevine") {
        "Widevine"
    } else if lower.contains("fairplay") || lower.contains("fps") {
        "FairPlay"
    } else {
        key_system
    }
}
