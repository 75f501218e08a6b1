use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(alias = "BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RuntimeConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

static BASE_URL: OnceLock<String> = OnceLock::new();

/// Router base path. Falls back to `/` until [`init`] has resolved it.
pub fn base_url() -> &'static str {
    BASE_URL
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_BASE_URL)
}

/// Leading slash, no trailing slash, `/` for blank input.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn cache_base_url(value: &str) -> &'static str {
    let _ = BASE_URL.set(normalize_base_url(value));
    base_url()
}

fn get_from_env_js() -> Option<String> {
    // Optional global: window.__AGRI_ADMIN_ENV = { BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__AGRI_ADMIN_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let href = web_sys::window()
        .context("no global `window`")?
        .location()
        .href()
        .map_err(|_| anyhow::anyhow!("window.location is unavailable"))?;
    let url = reqwest::Url::parse(&href)
        .and_then(|page| page.join("config.json"))
        .context("failed to build config.json url")?;
    let resp = reqwest::get(url)
        .await
        .context("failed to fetch config.json")?
        .error_for_status()
        .context("config.json request failed")?;
    let text = resp.text().await.context("failed to read config.json")?;
    Ok(RuntimeConfig::from_json(&text)?)
}

pub async fn init() -> &'static str {
    if let Some(cached) = BASE_URL.get() {
        return cached.as_str();
    }
    if let Some(from_env) = get_from_env_js() {
        log::info!("router base from __AGRI_ADMIN_ENV: {}", from_env);
        return cache_base_url(&from_env);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            base_url: Some(url),
        }) => {
            log::info!("router base from config.json: {}", url);
            cache_base_url(&url)
        }
        Ok(_) => cache_base_url(DEFAULT_BASE_URL),
        Err(err) => {
            log::debug!("runtime config not loaded ({:#}), using {}", err, DEFAULT_BASE_URL);
            cache_base_url(DEFAULT_BASE_URL)
        }
    }
}
