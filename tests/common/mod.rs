//! Common fixtures for integration tests.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use storefront::config::StorefrontConfig;
use storefront::storefront::Storefront;
use storefront::telemetry::{EventLogger, EventReceiver};
use storefront::adapters::RecordingView;

pub const FIREFOX_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

/// Merchandise feed with one fully populated item and one bare one.
pub const MERCHANDISE_JSON: &str = r#"[
    {"id": 1, "title": "Fjallraven Backpack", "price": 109.95,
     "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
     "description": "Your perfect pack for everyday use"},
    {"id": 2, "title": "Plain Tee", "image": "https://fakestoreapi.com/img/tee.jpg"}
]"#;

/// Books feed where the second work has no cover.
pub const BOOKS_JSON: &str = r#"{
    "works": [
        {"title": "The Hobbit", "cover_id": 6979861},
        {"title": "Untitled Saga"}
    ]
}"#;

/// Config with no loading delay, pointed at `base` for every endpoint.
pub fn test_config(base: &str) -> StorefrontConfig {
    StorefrontConfig::new()
        .with_clothes_url(format!("{}/products", base))
        .with_books_url(format!("{}/subjects/fantasy.json?limit=10", base))
        .with_log_endpoint(format!("{}/logs", base))
        .with_user_agent(FIREFOX_UA)
        .with_loading_delay(Duration::ZERO)
}

pub fn recording_storefront(config: &StorefrontConfig) -> (Storefront<RecordingView>, EventReceiver) {
    let (logger, rx) = EventLogger::channel(&config.user_agent);
    (
        Storefront::new(RecordingView::new(), logger, config.hover_dwell),
        rx,
    )
}

pub fn arc_config(config: StorefrontConfig) -> Arc<StorefrontConfig> {
    Arc::new(config)
}
