//! Recording [`CatalogView`] for tests.

use crate::traits::{CatalogView, ItemBinding, ProductCard, ProductDetail};

/// One call made on the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    ShowLoading,
    RenderList(Vec<ProductCard>),
    Bind(usize, Vec<ItemBinding>),
    ShowOverlay(ProductDetail),
    HideOverlay,
    Alert(String),
}

/// A view that records every call and tracks what would be on screen.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub loading: bool,
    pub cards: Vec<ProductCard>,
    pub bindings: Vec<Vec<ItemBinding>>,
    pub overlay: Option<ProductDetail>,
    pub alerts: Vec<String>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

impl CatalogView for RecordingView {
    fn show_loading(&mut self) {
        self.loading = true;
        self.calls.push(ViewCall::ShowLoading);
    }

    fn render_list(&mut self, cards: &[ProductCard]) {
        self.loading = false;
        self.cards = cards.to_vec();
        self.bindings = vec![Vec::new(); cards.len()];
        self.calls.push(ViewCall::RenderList(cards.to_vec()));
    }

    fn bind_item_handlers(&mut self, index: usize, bindings: &[ItemBinding]) {
        if let Some(slot) = self.bindings.get_mut(index) {
            *slot = bindings.to_vec();
        }
        self.calls.push(ViewCall::Bind(index, bindings.to_vec()));
    }

    fn show_overlay(&mut self, detail: &ProductDetail) {
        self.overlay = Some(detail.clone());
        self.calls.push(ViewCall::ShowOverlay(detail.clone()));
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
        self.calls.push(ViewCall::HideOverlay);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.calls.push(ViewCall::Alert(message.to_string()));
    }
}
