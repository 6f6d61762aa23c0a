//! Wire types for the listing endpoint.

use serde::Deserialize;

/// A single feed entry.
///
/// Identity is `id`; entries are immutable once fetched. Deserialization
/// keeps exactly these four fields and discards anything else the backend
/// sends alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub video_url: String,
}

/// Response envelope: the `data` field carries either a page of records or
/// the backend's end-of-data status object.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub data: PageBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PageBody {
    Records(Vec<Video>),
    Status(StatusBody),
}

/// Domain status object, e.g. `{"success": false, "response_code": 406}`.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    pub success: bool,
    pub response_code: u16,
}
