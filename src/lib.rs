//! emeprobe - DRM capability probing for embedded web views.
//!
//! This crate provides:
//! - A fixed registry of well-known key system identifiers (PlayReady,
//!   Widevine, FairPlay) with friendly display names.
//! - Media Key System configuration value types with EME dictionary
//!   serialization and software/hardware security presets.
//! - A probing facade that asks the host web view's EME implementation
//!   whether each key system is usable and reshapes the raw answer into a
//!   uniform capability result.
//! - A script bridge for hosts whose only primitive is evaluating
//!   JavaScript.
//!
//! The actual capability determination always happens inside the host web
//! view (WebView2, WKWebView, Android WebView, wry, ...); this crate only
//! shapes the request and interprets the answer.
//!
//! Feature flags:
//! - `cli`: enable the CLI binary helpers.
//! - `log`: route probe tracing through the `log` crate (default).

#[macro_use]
mod macros;

/// DRM capability result type.
pub mod capability;
/// Media Key System configuration value types and presets.
pub mod config;
/// Common error types and Result alias.
pub mod error;
/// Boundary trait to the host web view controller.
pub mod host;
/// Well-known key system identifiers and display names.
pub mod keysystem;
/// Probing facade and result shaping helpers.
pub mod probe;
/// EME probe script generation and the evaluate-script host adapter.
pub mod script;
