//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses, recorded requests
//! - [`mock::RecordingView`] - a [`crate::traits::CatalogView`] that keeps every call

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, RecordingView};
pub use reqwest_http::ReqwestHttpClient;
