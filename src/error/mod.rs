//! Error handling for the storefront.
//!
//! All fetch, parse and delivery failures are caught where they happen and
//! written to the diagnostic log. None of them reach the user interface.
//!
//! | Category | Source | Visible effect |
//! |----------|--------|----------------|
//! | Network | transport failure or non-2xx status | empty listing |
//! | Parse | body is not the expected JSON | empty listing |
//! | Logging | event POST failed | none |
//! | System | report file I/O | CLI exit status |
//! | Usage | bad CLI arguments | CLI exit status |

mod category;
mod result;
mod storefront_error;

pub use category::ErrorCategory;
pub use result::StorefrontResult;
pub use storefront_error::StorefrontError;
