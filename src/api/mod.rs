//! The paginated listing API: wire types, envelope decoding, and the
//! single-page HTTP fetch.

mod client;
mod error;
mod types;

pub use client::{FeedClient, Page};
pub use error::FetchError;
pub use types::Video;
