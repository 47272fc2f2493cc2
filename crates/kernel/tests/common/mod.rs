#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Tests drive the REAL kernel router through `tower::ServiceExt::oneshot`;
//! nothing listens on a socket.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use shelf_kernel::menu::RoleRestrictions;
use shelf_kernel::theme::ThemeEngine;
use shelf_kernel::{AppState, Config};

/// Test application wrapper using the real routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App with default config and built-in restrictions.
    pub fn new() -> Self {
        Self::with_restrictions(RoleRestrictions::builtin())
    }

    /// App with custom restrictions.
    pub fn with_restrictions(restrictions: RoleRestrictions) -> Self {
        let theme = ThemeEngine::new().expect("built-in templates should load");
        let state = AppState::from_parts(Config::default(), restrictions, theme);
        Self::from_state(state)
    }

    /// App wrapping already-built state.
    pub fn from_state(state: AppState) -> Self {
        Self {
            router: shelf_kernel::app(state.clone()),
            state,
        }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri` with the given headers.
    pub async fn get(&self, uri: &str, headers: &[(&str, &str)]) -> Response {
        let mut builder = Request::get(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }
}

/// Read a response body as a string.
pub async fn response_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Keys of a JSON entry list.
pub fn keys(entries: &Value) -> Vec<String> {
    entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect()
}
