//! Scripted in-memory [`HttpClient`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::PipelineResult;
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

type Route = Box<dyn Fn(&HttpRequest) -> PipelineResult<HttpResponse> + Send + Sync>;

/// Answers every request through one routing closure and records it.
///
/// A request counts as completed only once its delay has elapsed and the
/// route has answered, so a request dropped mid-delay never completes.
pub(crate) struct FakeHttpClient {
    route: Route,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<HttpRequest>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    completed: AtomicUsize,
}

impl FakeHttpClient {
    pub(crate) fn new(
        route: impl Fn(&HttpRequest) -> PipelineResult<HttpResponse> + Send + Sync + 'static,
    ) -> Self {
        Self {
            route: Box::new(route),
            delays: HashMap::new(),
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    /// Delay the answer for an exact URL.
    pub(crate) fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Highest number of requests seen in flight at once.
    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// `q` values of all requests that carried one, in issue order.
    pub(crate) fn queries(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| r.query_value("q").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn get(&self, request: HttpRequest) -> PipelineResult<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let _guard = InFlight::enter(self);
        if let Some(delay) = self.delays.get(request.url.as_str()) {
            tokio::time::sleep(*delay).await;
        }
        let response = (self.route)(&request);
        self.completed.fetch_add(1, Ordering::SeqCst);
        response
    }
}

/// Holds one in-flight slot until the request finishes or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(fake: &'a FakeHttpClient) -> Self {
        let now = fake.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        fake.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(&fake.in_flight)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// 200 response with a JSON body and healthy rate-limit headers.
pub(crate) fn ok_json(body: Value) -> PipelineResult<HttpResponse> {
    Ok(HttpResponse::new(200, body.to_string())
        .with_header("X-RateLimit-Limit", "30")
        .with_header("X-RateLimit-Remaining", "29"))
}

/// Search endpoint body listing the given API profile URLs.
pub(crate) fn search_body(urls: &[&str]) -> Value {
    let items: Vec<Value> = urls.iter().map(|url| json!({ "url": url })).collect();
    json!({ "total_count": items.len(), "items": items })
}

/// Profile endpoint body for `login`.
pub(crate) fn profile_body(login: &str) -> Value {
    json!({
        "login": login,
        "name": format!("{login} name"),
        "followers": 1,
        "avatar_url": format!("https://avatars.example.com/{login}"),
        "html_url": format!("https://github.com/{login}")
    })
}
