//! Multipart uploads to the external contract-analysis webhooks.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the webhooks are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every transport or server failure is folded into `Result<_, String>` at
//! the call site; callers render the error in place of results. There is no
//! retry, timeout, or in-flight deduplication: a second submission while the
//! first is outstanding issues a second independent request.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

/// Comparison endpoint; expects multipart fields `file1` and `file2`.
pub const COMPARISON_WEBHOOK_URL: &str =
    "https://n8n.srv983857.hstgr.cloud/webhook/a027ab82-e53c-4246-9982-c41c79ac9bca";

/// Risk analysis endpoint; expects a single multipart field `file1`.
pub const RISK_WEBHOOK_URL: &str =
    "https://n8n.srv983857.hstgr.cloud/webhook/32c4f30e-6722-4125-bd7d-691f0e9460e4";

/// Interpret a webhook response body: JSON passes through, anything else is
/// wrapped as `{"message": <body>}` rather than treated as an error.
pub fn interpret_body(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::json!({ "message": raw }))
}

/// Uniform message for non-2xx responses.
pub fn server_error_message(status: u16) -> String {
    format!("Server error: {status}")
}

/// Compare two contracts via the comparison webhook.
///
/// # Errors
///
/// Returns a display-ready message on transport failure or a non-2xx
/// response.
#[cfg(feature = "hydrate")]
pub async fn compare_contracts(
    file1: &web_sys::File,
    file2: &web_sys::File,
) -> Result<serde_json::Value, String> {
    post_files(COMPARISON_WEBHOOK_URL, &[("file1", file1), ("file2", file2)]).await
}

/// Analyze a single contract via the risk webhook.
///
/// # Errors
///
/// Returns a display-ready message on transport failure or a non-2xx
/// response.
#[cfg(feature = "hydrate")]
pub async fn analyze_risk(file: &web_sys::File) -> Result<serde_json::Value, String> {
    post_files(RISK_WEBHOOK_URL, &[("file1", file)]).await
}

#[cfg(feature = "hydrate")]
async fn post_files(
    url: &str,
    files: &[(&str, &web_sys::File)],
) -> Result<serde_json::Value, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    for (field, file) in files {
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|_| "could not attach file".to_owned())?;
    }

    let resp = gloo_net::http::Request::post(url)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| {
            log::error!("webhook request to {url} failed: {e}");
            e.to_string()
        })?;

    if !resp.ok() {
        log::error!("webhook {url} responded {}", resp.status());
        return Err(server_error_message(resp.status()));
    }

    let raw = resp.text().await.map_err(|e| e.to_string())?;
    Ok(interpret_body(&raw))
}
