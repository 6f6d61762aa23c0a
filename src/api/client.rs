//! HTTP client for the listing endpoint.

use reqwest::Client;

use crate::api::error::{FetchError, END_OF_FEED_CODE};
use crate::api::types::{Envelope, PageBody, Video};
use crate::config::FeedConfig;

/// Outcome of a single page fetch.
#[derive(Debug)]
pub enum Page {
    /// Records for this page, in response order.
    Records(Vec<Video>),
    /// The backend's explicit end-of-data marker.
    End,
}

/// Thin wrapper over `reqwest` that knows the listing endpoint's query
/// contract and response envelope.
pub struct FeedClient {
    client: Client,
    api_endpoint: String,
    category_id: u32,
}

impl FeedClient {
    pub fn new(config: &FeedConfig) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to build feed client");

        Self {
            client,
            api_endpoint: config.api_endpoint.clone(),
            category_id: config.category_id,
        }
    }

    /// Fetch one page of the listing.
    ///
    /// Distinguishes the domain terminator ([`Page::End`]) from transport
    /// and decode failures. An HTTP response whose status equals the
    /// terminator code surfaces as an error for which
    /// [`FetchError::is_end_of_feed`] returns true; the caller decides what
    /// ends pagination.
    pub async fn fetch_page(&self, page: u32) -> Result<Page, FetchError> {
        let url = format!(
            "{}?categoryId={}&pageNo={}",
            self.api_endpoint, self.category_id, page
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            FetchError::Transport {
                url: url.clone(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport { url, source: e })?;
        let envelope: Envelope = serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode { page, source: e })?;

        match envelope.data {
            PageBody::Records(videos) => Ok(Page::Records(videos)),
            PageBody::Status(status)
                if !status.success && status.response_code == END_OF_FEED_CODE =>
            {
                Ok(Page::End)
            }
            PageBody::Status(status) => Err(FetchError::UnexpectedBody {
                page,
                success: status.success,
                response_code: status.response_code,
            }),
        }
    }
}
