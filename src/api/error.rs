//! Error types for feed fetches.

use thiserror::Error;

/// Domain status code the backend uses to signal that no further pages
/// exist. Both the body-level marker and a bare HTTP response with this
/// status terminate pagination; neither is treated as an error.
pub(crate) const END_OF_FEED_CODE: u16 = 406;

/// Errors that can occur while fetching a feed page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request itself failed (connect, DNS, mid-body disconnect).
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("feed endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The response body did not match the listing envelope.
    #[error("failed to decode page {page}: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// The body carried a status object with an unrecognized code.
    #[error("unexpected status object on page {page} (success={success}, response_code={response_code})")]
    UnexpectedBody {
        page: u32,
        success: bool,
        response_code: u16,
    },
}

impl FetchError {
    /// True when the failure is the domain-level pagination terminator
    /// rather than a real error.
    pub fn is_end_of_feed(&self) -> bool {
        matches!(self, FetchError::Status { status } if *status == END_OF_FEED_CODE)
    }
}
