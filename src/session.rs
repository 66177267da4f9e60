//! Per-run view state, passed explicitly to every handler.

use crate::models::{Product, Route};

#[derive(Debug, Clone, Default)]
pub struct ViewSession {
    /// Catalog page the user navigated to last
    pub route: Route,
    /// Products currently rendered, in listing order
    pub products: Vec<Product>,
    /// Product last opened in the detail overlay. Survives closing the overlay.
    pub current_product: Option<Product>,
    pub overlay_visible: bool,
    pub loading: bool,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }
}
