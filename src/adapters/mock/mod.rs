//! Mock implementations for testing without network access or a terminal.

pub mod http;
pub mod view;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use view::{RecordingView, ViewCall};
