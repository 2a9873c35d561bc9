//! API origin configuration.
//!
//! The origin comes from the build-time `ANIMA_API_ORIGIN` variable and can be
//! overridden at runtime through `window.ANIMA_CONFIG.api_origin`, so static
//! deployments can point at another API without a rebuild. Values are public;
//! never put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when the page is served from `localhost` and nothing is configured.
pub const LOCAL_DEV_API_ORIGIN: &str = "http://127.0.0.1:8000";

/// Frontend configuration resolved at request time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Configured API origin; empty when none was provided.
    pub api_origin: String,
}

impl AppConfig {
    /// Load build-time configuration and apply the runtime override, if any.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self { api_origin: option_env!("ANIMA_API_ORIGIN").unwrap_or("").to_owned() };
        if let Some(origin) = runtime_api_origin() {
            config.api_origin = origin;
        }
        config
    }

    /// Base URL to prefix API paths with, for the page currently loaded.
    #[must_use]
    pub fn api_base(&self) -> String {
        resolve_api_base(&self.api_origin, current_hostname().as_deref())
    }
}

/// Pick the API base URL.
///
/// A configured origin wins (trailing `/` trimmed). Otherwise a page on
/// `localhost` talks to the local dev server, and anything else uses
/// same-origin relative paths (empty base).
#[must_use]
pub fn resolve_api_base(configured: &str, hostname: Option<&str>) -> String {
    if let Some(origin) = normalize_runtime_value(configured) {
        return origin.trim_end_matches('/').to_owned();
    }
    if hostname == Some("localhost") {
        return LOCAL_DEV_API_ORIGIN.to_owned();
    }
    String::new()
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(feature = "hydrate")]
fn current_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

#[cfg(not(feature = "hydrate"))]
fn current_hostname() -> Option<String> {
    None
}

#[cfg(feature = "hydrate")]
fn runtime_api_origin() -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("ANIMA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str("api_origin"))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(not(feature = "hydrate"))]
fn runtime_api_origin() -> Option<String> {
    None
}
