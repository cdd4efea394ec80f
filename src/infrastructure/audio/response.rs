use serde_json::Value;

use crate::application::ports::TranscriptionError;
use crate::infrastructure::observability::sanitize_for_log;

pub(super) fn transport_error(e: reqwest::Error) -> TranscriptionError {
    let url = e.url().map(|u| sanitize_for_log(u.as_str()));
    let message = match url {
        Some(url) => format!("{} ({})", e.without_url(), url),
        None => e.to_string(),
    };
    TranscriptionError::Transport(message)
}

/// Turns a vendor response into its JSON body, or a status error carrying the body.
pub(super) async fn json_body(
    response: reqwest::Response,
    vendor: &'static str,
) -> Result<Value, TranscriptionError> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        let body = sanitize_for_log(&body);
        tracing::error!(vendor, status = status.as_u16(), body = %body, "Vendor rejected request");
        return Err(TranscriptionError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| TranscriptionError::InvalidResponse(format!("{vendor}: {e}")))
}
