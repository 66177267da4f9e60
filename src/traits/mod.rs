//! Trait abstractions at the storefront's seams.
//!
//! - [`HttpClient`] - HTTP GET/POST for catalog fetches and event delivery
//! - [`CatalogView`] - the front end the interaction loop renders into

pub mod http;
pub mod view;

pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use view::{
    detail_price_label, listing_price_label, CatalogView, ItemBinding, ProductCard, ProductDetail,
    NO_DESCRIPTION_LABEL, NO_DETAIL_PRICE_LABEL, NO_PRICE_LABEL,
};
