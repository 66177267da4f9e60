//! [`CatalogView`] for the terminal.
//!
//! Calls from the interaction loop only update what the next frame shows.
//! Drawing happens in [`crate::ui::render`], which also refreshes the hit
//! areas used to route mouse events back to the loop.

use std::collections::VecDeque;

use crate::traits::{CatalogView, ItemBinding, ProductCard, ProductDetail};
use crate::ui::interaction::HitAreaRegistry;

#[derive(Debug, Default)]
pub struct TerminalView {
    loading: bool,
    cards: Vec<ProductCard>,
    bindings: Vec<Vec<ItemBinding>>,
    overlay: Option<ProductDetail>,
    alerts: VecDeque<String>,
    selected: usize,
    /// First grid row drawn
    pub(crate) scroll_row: usize,
    /// Grid columns in the last frame, for up/down navigation
    pub(crate) columns: usize,
    hovered: Option<usize>,
    pub(crate) hit_areas: HitAreaRegistry,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn overlay(&self) -> Option<&ProductDetail> {
        self.overlay.as_ref()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }

    /// Alert currently on screen. Later alerts queue behind it.
    pub fn alert_message(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alerts.pop_front().is_some()
    }

    /// True while something sits on top of the listing.
    pub fn has_modal(&self) -> bool {
        self.overlay.is_some() || !self.alerts.is_empty()
    }

    pub fn has_binding(&self, index: usize, binding: ItemBinding) -> bool {
        self.bindings
            .get(index)
            .is_some_and(|bindings| bindings.contains(&binding))
    }

    pub fn bindings(&self, index: usize) -> &[ItemBinding] {
        self.bindings.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.cards.is_empty()).then_some(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.cards.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn select_down(&mut self) {
        let target = self.selected + self.columns.max(1);
        self.select(target.min(self.cards.len().saturating_sub(1)));
    }

    pub fn select_up(&mut self) {
        self.select(self.selected.saturating_sub(self.columns.max(1)));
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    pub fn hit_areas(&self) -> &HitAreaRegistry {
        &self.hit_areas
    }
}

impl CatalogView for TerminalView {
    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn render_list(&mut self, cards: &[ProductCard]) {
        self.loading = false;
        self.cards = cards.to_vec();
        self.bindings = vec![Vec::new(); cards.len()];
        self.selected = 0;
        self.scroll_row = 0;
        self.hovered = None;
    }

    fn bind_item_handlers(&mut self, index: usize, bindings: &[ItemBinding]) {
        if let Some(slot) = self.bindings.get_mut(index) {
            *slot = bindings.to_vec();
        }
    }

    fn show_overlay(&mut self, detail: &ProductDetail) {
        self.overlay = Some(detail.clone());
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<ProductCard> {
        (0..n)
            .map(|i| ProductCard {
                image: String::new(),
                title: format!("Item {}", i),
                price_label: "$1.00".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_render_list_resets_selection_and_bindings() {
        let mut view = TerminalView::new();
        view.render_list(&cards(4));
        view.select(3);
        view.bind_item_handlers(3, &[ItemBinding::Buy]);
        assert!(view.has_binding(3, ItemBinding::Buy));

        view.render_list(&cards(2));
        assert_eq!(view.selected(), Some(0));
        assert!(view.bindings(1).is_empty());
        assert!(!view.has_binding(3, ItemBinding::Buy));
    }

    #[test]
    fn test_loading_cleared_by_render() {
        let mut view = TerminalView::new();
        view.show_loading();
        assert!(view.is_loading());
        view.render_list(&[]);
        assert!(!view.is_loading());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_grid_navigation_stays_in_bounds() {
        let mut view = TerminalView::new();
        view.render_list(&cards(5));
        view.columns = 2;

        view.select_down();
        assert_eq!(view.selected(), Some(2));
        view.select_down();
        view.select_down();
        assert_eq!(view.selected(), Some(4));
        view.select_next();
        assert_eq!(view.selected(), Some(4));
        view.select_up();
        assert_eq!(view.selected(), Some(2));
        view.select_prev();
        view.select_prev();
        view.select_prev();
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn test_alerts_queue_in_order() {
        let mut view = TerminalView::new();
        view.alert("first");
        view.alert("second");
        assert!(view.has_modal());
        assert_eq!(view.alert_message(), Some("first"));
        assert!(view.dismiss_alert());
        assert_eq!(view.alert_message(), Some("second"));
        view.dismiss_alert();
        assert!(!view.dismiss_alert());
        assert!(!view.has_modal());
    }

    #[test]
    fn test_overlay_visibility() {
        let mut view = TerminalView::new();
        view.hide_overlay();
        assert!(!view.overlay_visible());
        view.show_overlay(&ProductDetail {
            image: String::new(),
            title: "Hat".to_string(),
            description: "Warm".to_string(),
            price_label: "N/A".to_string(),
        });
        assert_eq!(view.overlay().map(|d| d.title.as_str()), Some("Hat"));
        view.hide_overlay();
        assert!(!view.has_modal());
    }
}
