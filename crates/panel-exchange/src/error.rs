use panel_protocol::ProtocolError;
use thiserror::Error;

/// Failures inside the exchange client.
///
/// These stay inside the crate's boundary; the rendered message is what
/// ends up in the log file and in a failed order ticket.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The exchange answered with its structured error body.
    #[error("APIError(code={code}): {msg}")]
    Api { code: i64, msg: String },

    /// Non-success status without a recognisable error body.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Protocol(#[from] ProtocolError),
}
