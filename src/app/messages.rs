//! Messages sent from background tasks to the UI loop.

use crate::error::StorefrontResult;
use crate::models::{CatalogSource, Product};

#[derive(Debug)]
pub enum AppMessage {
    /// A catalog fetch finished, successfully or not
    CatalogLoaded {
        source: CatalogSource,
        result: StorefrontResult<Vec<Product>>,
    },
}
