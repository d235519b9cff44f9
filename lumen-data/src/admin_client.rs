//! Blocking client for the admin system-preferences endpoints.
//!
//!   GET  {base}/admin/system-preferences   → `{ "settings": { ... } }`
//!   POST {base}/admin/system-preferences   → `{ "success": bool, "error": string|null }`

use anyhow::{bail, Context};
use serde::Deserialize;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::preferences::{PreferenceStore, SettingsPatch, SystemPreferences};

const READ_TIMEOUT_SECS: u64 = 10;
const WRITE_TIMEOUT_SECS: u64 = 15;

#[derive(Deserialize)]
struct UpdateResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Thin blocking HTTP client for the admin API.
///
/// All calls block the calling thread; run them inside `std::thread::spawn`.
pub struct AdminClient {
    base_url: String,
    token: Option<String>,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self { base_url: url, token: None }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let mut client = Self::new(config.api_base_url.as_str());
        client.token = config.api_token.clone();
        client
    }

    pub fn preferences_url(&self) -> String {
        format!("{}/admin/system-preferences", self.base_url)
    }

    fn client(&self, timeout_secs: u64) -> anyhow::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("building HTTP client")
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Decode a `GET` body. An empty or `null` body means no preferences yet.
fn parse_preferences(body: &str) -> anyhow::Result<Option<SystemPreferences>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).context("parsing system preferences")
}

/// Decide whether a `POST` went through. Non-2xx and `success: false` fail.
fn check_update(status: StatusCode, body: &str) -> anyhow::Result<()> {
    if !status.is_success() {
        bail!("HTTP {}: {}", status, body.trim());
    }

    let response: UpdateResponse = serde_json::from_str(body).context("parsing update response")?;
    if !response.success {
        bail!(
            "server rejected preferences update: {}",
            response.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

impl PreferenceStore for AdminClient {
    fn read(&self) -> anyhow::Result<Option<SystemPreferences>> {
        let url = self.preferences_url();
        let resp = self
            .authorize(self.client(READ_TIMEOUT_SECS)?.get(&url))
            .send()
            .with_context(|| format!("GET {}", url))?;

        if !resp.status().is_success() {
            bail!("GET {} returned HTTP {}", url, resp.status());
        }

        let body = resp.text().context("reading preferences body")?;
        parse_preferences(&body)
    }

    fn write(&self, patch: &SettingsPatch) -> anyhow::Result<()> {
        let url = self.preferences_url();
        let resp = self
            .authorize(self.client(WRITE_TIMEOUT_SECS)?.post(&url))
            .json(patch)
            .send()
            .with_context(|| format!("POST {}", url))?;

        let status = resp.status();
        let body = resp.text().context("reading update response")?;
        check_update(status, &body).with_context(|| format!("POST {}", url))
    }
}
