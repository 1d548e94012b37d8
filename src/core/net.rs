// src/core/net.rs

// Blocking HTTPS GET/POST. Both upstreams (published sheet, Blizzard API)
// are TLS-only, so this rides on reqwest rather than a raw socket.

use std::error::Error;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::HTTP_TIMEOUT_SECS;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(concat!("craftlist/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("http client init")
    })
}

/// GET a URL as text (follows redirects; the published sheet bounces once).
pub fn get_text(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client().get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

/// GET a URL with query params, parsed as JSON.
pub fn get_json(url: &str, query: &[(&str, &str)]) -> Result<Value, Box<dyn Error>> {
    let resp = client().get(url).query(query).send()?.error_for_status()?;
    Ok(resp.json()?)
}

/// POST a form with HTTP basic auth, parsed as JSON (OAuth token endpoint).
pub fn post_form_basic(
    url: &str,
    user: &str,
    pass: &str,
    form: &[(&str, &str)],
) -> Result<Value, Box<dyn Error>> {
    let resp = client()
        .post(url)
        .basic_auth(user, Some(pass))
        .form(form)
        .send()?
        .error_for_status()?;
    Ok(resp.json()?)
}
