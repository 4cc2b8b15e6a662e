use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::api::ApiError;

pub const MISSING_BASE_URL_MESSAGE: &str =
    "URL de l'API non configurée: fournissez API_BASE_URL via env.js ou config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

// `web_sys::window()` panics off-wasm; headless runtimes have no window.
#[cfg(not(target_arch = "wasm32"))]
fn window() -> Option<web_sys::Window> {
    None
}

fn get_from_env_js() -> Option<String> {
    // Optional global object: window.__PRESENCE_ENV = { API_BASE_URL: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__PRESENCE_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

fn get_from_window_config() -> Option<String> {
    // Optional global object: window.__PRESENCE_CONFIG = { api_base_url: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__PRESENCE_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    if let Some(env_url) = get_from_env_js() {
        return Some(env_url);
    }
    get_from_window_config()
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() {
        return;
    }
    let w = match window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__PRESENCE_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once and caches it. A deployment without any
/// configured URL is a hard error, never a default host.
pub async fn await_api_base_url() -> Result<String, ApiError> {
    if let Some(cached) = API_BASE_URL.get() {
        return Ok(cached.clone());
    }
    if let Some(existing) = snapshot_from_globals() {
        return Ok(cache_base_url(&existing));
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return Ok(cache_base_url(&url));
        }
    }
    Err(ApiError::configuration(MISSING_BASE_URL_MESSAGE))
}

pub async fn init() {
    match await_api_base_url().await {
        Ok(url) => log::info!("API base URL: {}", url),
        Err(err) => log::error!("{}", err),
    }
}
