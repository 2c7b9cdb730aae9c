//! Thin wrappers over browser APIs reached through `web-sys`.

use anyhow::{anyhow, bail, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `url` with the browser's `fetch` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url} failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch {url} did not return a Response"))?;
    if !response.ok() {
        bail!("fetch {url} returned HTTP {}", response.status());
    }
    let text = response
        .text()
        .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;
    let body = text
        .as_string()
        .ok_or_else(|| anyhow!("body of {url} is not text"))?;
    log::info!("[HDI] fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
