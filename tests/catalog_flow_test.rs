//! End-to-end catalog flows against mocked feeds.

mod common;

use std::sync::Arc;

use common::*;
use storefront::catalog::CatalogFetcher;
use storefront::models::{Action, CatalogSource, Route};
use storefront::traits::HttpClient;

#[tokio::test]
async fn test_books_catalog_synthesizes_missing_fields() {
    let base = "http://mock.local";
    let config = test_config(base);
    let http = MockHttpConfig::new()
        .with_json_response(&config.books_url, 200, BOOKS_JSON)
        .build();
    let fetcher = CatalogFetcher::new(Arc::new(http.clone()) as Arc<dyn HttpClient>, arc_config(config.clone()));
    let (mut store, _events) = recording_storefront(&config);

    let source = store.navigate(Route::Books);
    assert_eq!(source, CatalogSource::Books);
    assert!(store.view().loading);

    store.finish_loading(fetcher.load_catalog(source).await);

    let cards = &store.view().cards;
    assert_eq!(cards.len(), 2);
    assert_eq!(
        cards[0].image,
        "https://covers.openlibrary.org/b/id/6979861-L.jpg"
    );
    assert_eq!(cards[1].title, "Untitled Saga");
    assert_eq!(cards[1].image, "");

    for product in &store.session().products {
        let price = product.price.unwrap();
        assert!((5.0..=30.0).contains(&price), "price {} out of range", price);
        assert_eq!((price * 100.0).round() / 100.0, price);
        assert!(product.description.as_deref().is_some_and(|d| !d.is_empty()));
    }
    assert_eq!(http.requests_with_method("GET").len(), 1);
}

#[tokio::test]
async fn test_detail_without_description_and_close() {
    let config = test_config("http://mock.local");
    let http = MockHttpConfig::new()
        .with_json_response(&config.clothes_url, 200, MERCHANDISE_JSON)
        .build();
    let fetcher = CatalogFetcher::new(Arc::new(http), arc_config(config.clone()));
    let (mut store, mut events) = recording_storefront(&config);

    let source = store.navigate(Route::Clothes);
    store.finish_loading(fetcher.load_catalog(source).await);
    assert_eq!(store.view().cards[0].price_label, "$109.95");
    assert_eq!(store.view().cards[1].price_label, "No price available");

    store.open_item(1);
    let overlay = store.view().overlay.clone().unwrap();
    assert_eq!(overlay.description, "No description available");
    assert_eq!(overlay.price_label, "N/A");

    let event = events.try_recv().unwrap();
    assert_eq!(event.action, Action::EnterProductDetails);
    assert_eq!(event.agent, "Firefox");
    assert_eq!(event.route, "Clothes details");

    store.close_detail();
    assert!(!store.view().overlay_visible());
    store.close_detail();
    assert!(!store.view().overlay_visible());
}

#[tokio::test]
async fn test_malformed_feed_renders_empty_listing() {
    let config = test_config("http://mock.local");
    let http = MockHttpConfig::new()
        .with_json_response(&config.clothes_url, 200, "<html>down</html>")
        .build();
    let fetcher = CatalogFetcher::new(Arc::new(http), arc_config(config.clone()));
    let (mut store, mut events) = recording_storefront(&config);

    let source = store.navigate(Route::Clothes);
    let result = fetcher.load_catalog(source).await;
    assert!(result.is_err());
    store.finish_loading(result);

    assert!(store.view().cards.is_empty());
    assert!(store.view().alerts.is_empty());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_transport_failure_renders_empty_listing() {
    let config = test_config("http://mock.local");
    let http = MockHttpConfig::new()
        .with_error_response(
            &config.books_url,
            HttpError::ConnectionFailed("refused".to_string()),
        )
        .build();
    let fetcher = CatalogFetcher::new(Arc::new(http), arc_config(config.clone()));
    let (mut store, _events) = recording_storefront(&config);

    let source = store.navigate(Route::Books);
    store.finish_loading(fetcher.load_catalog(source).await);
    assert!(store.view().cards.is_empty());
    assert!(!store.view().loading);
}
