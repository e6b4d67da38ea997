//! Fetches the published list data: the ranked index, each level file and
//! the editor roster. A level file that fails to load or parse becomes a
//! [`ListEntry::Failed`] carrying its file stem; the caller decides whether
//! that is fatal.

use wasm_bindgen_futures::JsFuture;

use crate::dom;
use makerboard_core::{Editor, Level, ListEntry};

const LIST_INDEX_URL: &str = "data/_list.json";
const EDITORS_URL: &str = "data/_editors.json";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let text_promise = response
        .text()
        .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Fetch the ranked list, one entry per position of the index file.
///
/// # Errors
///
/// Returns an error only when the index itself cannot be fetched or parsed;
/// individual level failures surface inside the returned entries.
#[allow(clippy::future_not_send)]
pub async fn fetch_list() -> Result<Vec<ListEntry>, FetchError> {
    let index: Vec<String> = serde_json::from_str(&fetch_text(LIST_INDEX_URL).await?)?;
    let mut entries = Vec::with_capacity(index.len());
    for stem in index {
        let entry = match fetch_text(&format!("data/{stem}.json")).await {
            Ok(text) => match Level::from_json(&text) {
                Ok(level) => ListEntry::Loaded(level),
                Err(err) => {
                    log::warn!("level file {stem}.json failed to parse: {err}");
                    ListEntry::Failed(stem)
                }
            },
            Err(err) => {
                log::warn!("level file {stem}.json failed to load: {err}");
                ListEntry::Failed(stem)
            }
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Fetch the list staff roster.
///
/// # Errors
///
/// Returns an error if the roster cannot be fetched or parsed.
#[allow(clippy::future_not_send)]
pub async fn fetch_editors() -> Result<Vec<Editor>, FetchError> {
    Ok(serde_json::from_str(&fetch_text(EDITORS_URL).await?)?)
}
