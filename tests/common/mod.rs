//! Shared test utilities: an in-process mock of the paginated listing
//! endpoint.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

/// Scripted behavior for one page number (1-indexed into the script).
/// Pages past the end of the script answer with the end-of-data body.
#[derive(Debug, Clone, Copy)]
pub enum PageScript {
    /// Respond with this many records.
    Records(usize),
    /// Respond with `{"success": false, "response_code": 406}`.
    End,
    /// Respond with a bare HTTP status and no listing envelope.
    HttpStatus(u16),
    /// Fail with HTTP 500 on the first attempt, then serve this many
    /// records on every retry.
    Flaky(usize),
}

/// A running mock feed server.
pub struct MockFeed {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MockFeed {
    /// Full URL of the listing endpoint.
    pub fn endpoint(&self) -> String {
        format!("http://{}/videos", self.addr)
    }

    /// Total number of requests the server has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct FeedScript {
    pages: Vec<PageScript>,
    delay: Option<Duration>,
    hits: Arc<AtomicUsize>,
    attempts_per_page: Vec<AtomicUsize>,
}

#[derive(Deserialize)]
struct ListingQuery {
    #[serde(rename = "categoryId")]
    category_id: u32,
    #[serde(rename = "pageNo")]
    page_no: u32,
}

/// Start a mock feed serving the given page script.
pub async fn serve(pages: Vec<PageScript>) -> MockFeed {
    serve_with_delay(pages, None).await
}

/// Start a mock feed that sleeps before answering each request.
pub async fn serve_with_delay(pages: Vec<PageScript>, delay: Option<Duration>) -> MockFeed {
    init_tracing();

    let hits = Arc::new(AtomicUsize::new(0));
    let attempts_per_page = pages.iter().map(|_| AtomicUsize::new(0)).collect();
    let script = Arc::new(FeedScript {
        pages,
        delay,
        hits: Arc::clone(&hits),
        attempts_per_page,
    });

    let app = Router::new()
        .route("/videos", get(listing))
        .with_state(script);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock feed");
    let addr = listener.local_addr().expect("Failed to read mock feed addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockFeed { addr, hits }
}

async fn listing(
    State(script): State<Arc<FeedScript>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    script.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = script.delay {
        tokio::time::sleep(delay).await;
    }

    let page = query.page_no as usize;
    let behavior = match page.checked_sub(1).and_then(|i| script.pages.get(i)) {
        Some(behavior) => *behavior,
        None => PageScript::End,
    };

    match behavior {
        PageScript::Records(count) => {
            Json(json!({ "data": records(query.category_id, query.page_no, count) }))
                .into_response()
        }
        PageScript::End => {
            Json(json!({ "data": { "success": false, "response_code": 406 } })).into_response()
        }
        PageScript::HttpStatus(code) => StatusCode::from_u16(code)
            .expect("valid mock status")
            .into_response(),
        PageScript::Flaky(count) => {
            let attempts = &script.attempts_per_page[page - 1];
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            } else {
                Json(json!({ "data": records(query.category_id, query.page_no, count) }))
                    .into_response()
            }
        }
    }
}

/// Build a page of raw records. Ids are unique across pages and the records
/// carry extra fields the loader is expected to discard.
fn records(category_id: u32, page: u32, count: usize) -> Value {
    let entries: Vec<Value> = (0..count)
        .map(|i| {
            let id = u64::from(page) * 100 + i as u64;
            json!({
                "id": id,
                "title": format!("cat{category_id}-p{page}-i{i}"),
                "imageUrl": format!("https://cdn.example/{id}.jpg"),
                "videoUrl": format!("https://cdn.example/{id}.mp4"),
                "duration": 90 + i,
                "views": 1000 * (i + 1),
                "uploader": "mock"
            })
        })
        .collect();
    Value::Array(entries)
}

/// Poll until the condition holds or the deadline passes.
pub async fn wait_until(deadline: Duration, mut cond: impl FnMut() -> bool) {
    let start = Instant::now();
    while !cond() {
        assert!(
            start.elapsed() < deadline,
            "condition not met within {deadline:?}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Install a test subscriber once so `RUST_LOG` works in tests.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
