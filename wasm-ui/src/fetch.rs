//! HTTP side of a lookup.

use gloo::console;
use gloo::net::http::Request;
use wortteiler::error::STATUS_ERROR;
use wortteiler::{LookupError, LookupRequest, Outcome, RequestMethod};

/// Send `request` and report how it finished. Never fails: every error is
/// folded into [`Outcome::Failed`].
pub async fn perform(request: &LookupRequest) -> Outcome {
    let builder = match request.method {
        RequestMethod::Get => Request::get(&request.path),
        RequestMethod::Post => Request::post(&request.path),
    };

    let response = match builder.header("Accept", "application/json").send().await {
        Ok(response) => response,
        Err(e) => {
            console::warn!(format!("{} {} failed: {}", request.method.as_str(), request.path, e));
            return Outcome::Failed(LookupError::transport(STATUS_ERROR));
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            console::warn!(format!("reading {} failed: {}", request.path, e));
            return Outcome::Failed(LookupError::transport(STATUS_ERROR));
        }
    };

    if response.ok() {
        Outcome::Body(body)
    } else {
        let err = LookupError::from_response(response.status(), &body);
        if let Some(detail) = err.detail() {
            console::warn!(format!("{} <- {}: {}", request.path, response.status(), detail));
        }
        Outcome::Failed(err)
    }
}
