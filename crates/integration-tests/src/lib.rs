//! Integration test helpers for the Giri Mart till.
//!
//! [`TestClient`] drives the real router in-process with
//! `tower::ServiceExt::oneshot`, carrying the session cookie between
//! requests the way a browser would. Each client built with
//! [`TestClient::new`] gets its own till (and so its own cart); use
//! [`TestClient::second_browser`] for another session on the same till.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p giri-mart-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use giri_mart_till::build_router;
use giri_mart_till::config::TillConfig;
use giri_mart_till::middleware::SESSION_COOKIE_NAME;
use giri_mart_till::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// A response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Whether this is a redirect back to the cart page.
    #[must_use]
    pub fn redirects_to_cart(&self) -> bool {
        self.status.is_redirection() && self.location() == Some("/")
    }
}

/// An in-process browser session against a till.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Start a fresh till with default configuration.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(TillConfig::default());
        Self {
            app: build_router(state),
            cookie: None,
        }
    }

    /// Open another session on the same till.
    #[must_use]
    pub fn second_browser(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Send a url-encoded form POST.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request and follow a redirect back to the cart page.
    pub async fn post_and_follow(&mut self, uri: &str, form: &str) -> TestResponse {
        let response = self.post_form(uri, form).await;
        assert!(
            response.redirects_to_cart(),
            "expected redirect to /, got {}",
            response.status
        );
        self.get("/").await
    }

    /// GET a route and follow its redirect back to the cart page.
    pub async fn get_and_follow(&mut self, uri: &str) -> TestResponse {
        let response = self.get(uri).await;
        assert!(
            response.redirects_to_cart(),
            "expected redirect to /, got {}",
            response.status
        );
        self.get("/").await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(value) = value.to_str() else { continue };
            let pair = value.split(';').next().unwrap_or_default();
            let Some((name, id)) = pair.split_once('=') else {
                continue;
            };
            if name.trim() == SESSION_COOKIE_NAME {
                // An empty value is the store dropping an emptied session.
                self.cookie = (!id.is_empty()).then(|| pair.to_string());
            }
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
