//! Network access for the members endpoint.

use thiserror::Error;

use crate::MemberRecord;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint returned status {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("invalid members payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode the body of the members endpoint.
pub fn parse_members(bytes: &[u8]) -> Result<Vec<MemberRecord>, FetchError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn members_from_response(
    result: ehttp::Result<ehttp::Response>,
) -> Result<Vec<MemberRecord>, FetchError> {
    let response = result.map_err(FetchError::Transport)?;
    if !response.ok {
        return Err(FetchError::Status {
            status: response.status,
            status_text: response.status_text,
        });
    }
    parse_members(&response.bytes)
}

/// GET the full member list from `url`.
///
/// `on_done` runs once, on a background thread (native) or the JS event
/// loop (wasm).
pub fn fetch_members(
    url: &str,
    on_done: impl FnOnce(Result<Vec<MemberRecord>, FetchError>) + Send + 'static,
) {
    let request = ehttp::Request::get(url);
    ehttp::fetch(request, move |result| on_done(members_from_response(result)));
}
