// src/core/net.rs

// Blocking GET, one request per call. No retries: the caller decides
// whether a failed fetch is fatal (for the scraper it is).

use std::time::Duration;

use crate::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    // text() decodes permissively; a stray invalid byte must not kill the run
    Ok(resp.text()?)
}
