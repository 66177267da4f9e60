//! Input and message handling for [`App`].

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage};
use crate::models::Route;
use crate::traits::ItemBinding;
use crate::ui::interaction::ClickAction;

impl App {
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::CatalogLoaded { source, result } => {
                tracing::debug!("{:?} catalog fetch finished", source);
                self.pointer_item = None;
                self.storefront.finish_loading(result);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.view().alert_message().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.storefront.view_mut().dismiss_alert();
            }
            return;
        }

        if self.view().overlay_visible() {
            match key.code {
                KeyCode::Char('a') => {
                    self.storefront.buy_from_detail();
                }
                KeyCode::Esc => self.storefront.close_detail(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') => self.navigate(Route::Clothes),
            KeyCode::Char('b') => self.navigate(Route::Books),
            KeyCode::Right | KeyCode::Char('l') => self.storefront.view_mut().select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.storefront.view_mut().select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.storefront.view_mut().select_down(),
            KeyCode::Up | KeyCode::Char('k') => self.storefront.view_mut().select_up(),
            KeyCode::Enter => {
                if let Some(index) = self.selected_with(ItemBinding::OpenDetail) {
                    self.storefront.open_item(index);
                }
            }
            KeyCode::Char('a') => {
                if let Some(index) = self.selected_with(ItemBinding::Buy) {
                    self.storefront.buy_from_listing(index);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let item = self.hoverable_item_at(mouse.column, mouse.row);
                self.update_pointer(item, now);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let action = self.view().hit_areas().hit_test(mouse.column, mouse.row);
                if let Some(action) = action {
                    self.handle_click(action);
                }
                if self.view().has_modal() {
                    self.update_pointer(None, now);
                }
            }
            MouseEventKind::ScrollDown => {
                self.storefront.view_mut().select_down();
                self.mark_dirty();
            }
            MouseEventKind::ScrollUp => {
                self.storefront.view_mut().select_up();
                self.mark_dirty();
            }
            _ => {}
        }
    }

    pub fn handle_click(&mut self, action: ClickAction) {
        self.mark_dirty();
        match action {
            ClickAction::OpenItem(index) => self.storefront.open_item(index),
            ClickAction::BuyItem(index) => self.storefront.buy_from_listing(index),
            ClickAction::BuyCurrent => {
                self.storefront.buy_from_detail();
            }
            ClickAction::CloseOverlay => self.storefront.close_detail(),
            ClickAction::SwitchRoute(route) => self.navigate(route),
            ClickAction::DismissAlert => {
                self.storefront.view_mut().dismiss_alert();
            }
            ClickAction::Block => {}
        }
    }

    /// Move the pointer onto `item` (or off every item), starting and
    /// cancelling hover timers as it crosses item boundaries.
    pub fn update_pointer(&mut self, item: Option<usize>, now: Instant) {
        if item == self.pointer_item {
            return;
        }
        if let Some(previous) = self.pointer_item {
            self.storefront.pointer_leave(previous, now);
        }
        if let Some(next) = item {
            self.storefront.pointer_enter(next, now);
        }
        self.pointer_item = item;
        self.storefront.view_mut().set_hovered(item);
        self.mark_dirty();
    }

    fn hoverable_item_at(&self, x: u16, y: u16) -> Option<usize> {
        let view = self.view();
        if view.has_modal() || view.is_loading() {
            return None;
        }
        view.hit_areas()
            .item_at(x, y)
            .filter(|&index| view.has_binding(index, ItemBinding::HoverDwell))
    }

    fn selected_with(&self, binding: ItemBinding) -> Option<usize> {
        let view = self.view();
        view.selected()
            .filter(|&index| view.has_binding(index, binding))
    }
}
