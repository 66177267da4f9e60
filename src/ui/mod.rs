//! Terminal rendering for the storefront.
//!
//! Layout, top to bottom:
//! - header with the route tabs
//! - product grid, or the loading indicator
//! - footer with key hints
//!
//! The detail overlay and alerts are drawn over everything else.

mod dialog;
pub mod interaction;
mod listing;
mod overlay;
mod terminal_view;
mod theme;

pub use dialog::{dialog_rect, render_dialog_frame, DialogFrameConfig};
pub use listing::{
    card_rect, footer_hint, grid_columns, scroll_for, truncate_to_width, visible_rows,
    BUY_LABEL, CARD_HEIGHT, CARD_MIN_WIDTH,
};
pub use overlay::{ADD_TO_CART_LABEL, CLOSE_LABEL, OK_LABEL};
pub use terminal_view::TerminalView;
pub use theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::models::Route;

/// Draw one frame and rebuild the hit areas.
pub fn render(frame: &mut Frame, view: &mut TerminalView, route: Route) {
    view.hit_areas.clear();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let header_inner = header.inner(chunks[0]);
    frame.render_widget(header, chunks[0]);
    listing::render_header(frame, header_inner, view, route);

    if view.is_loading() {
        listing::render_loading(frame, chunks[1]);
    } else {
        listing::render_grid(frame, chunks[1], view);
    }
    listing::render_footer(frame, chunks[2], view);

    overlay::render_detail_overlay(frame, area, view);
    overlay::render_alert(frame, area, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{CatalogView, ItemBinding, ProductCard, ProductDetail};
    use crate::ui::interaction::ClickAction;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn listed_view(n: usize) -> TerminalView {
        let mut view = TerminalView::new();
        let cards: Vec<ProductCard> = (0..n)
            .map(|i| ProductCard {
                image: format!("https://img.example/{}.jpg", i),
                title: format!("Product {}", i),
                price_label: "$9.99".to_string(),
            })
            .collect();
        view.render_list(&cards);
        for i in 0..n {
            view.bind_item_handlers(
                i,
                &[ItemBinding::HoverDwell, ItemBinding::Buy, ItemBinding::OpenDetail],
            );
        }
        view
    }

    fn draw(view: &mut TerminalView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(frame, view, Route::Clothes))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_cards_and_tabs() {
        let mut view = listed_view(2);
        let text = draw(&mut view, 80, 20);
        assert!(text.contains("Product 0"));
        assert!(text.contains("Product 1"));
        assert!(text.contains("$9.99"));
        assert!(text.contains("[ Buy ]"));
        assert!(text.contains("Clothes"));
        assert!(text.contains("Books"));
    }

    #[test]
    fn test_loading_hides_listing() {
        let mut view = listed_view(2);
        view.show_loading();
        let text = draw(&mut view, 80, 20);
        assert!(text.contains("Loading"));
        assert!(!text.contains("Product 0"));
        assert!(view.hit_areas().item_at(5, 4).is_none());
    }

    #[test]
    fn test_hit_areas_follow_bindings() {
        let mut view = listed_view(1);
        draw(&mut view, 40, 12);
        let buy = view.hit_areas().rect_of(ClickAction::BuyItem(0)).unwrap();
        assert_eq!(view.hit_areas().hit_test(buy.x, buy.y), Some(ClickAction::BuyItem(0)));
        let card = view.hit_areas().rect_of(ClickAction::OpenItem(0)).unwrap();
        assert_eq!(view.hit_areas().hit_test(card.x, card.y), Some(ClickAction::OpenItem(0)));

        let mut unbound = TerminalView::new();
        unbound.render_list(&view.cards().to_vec());
        draw(&mut unbound, 40, 12);
        assert!(unbound.hit_areas().rect_of(ClickAction::OpenItem(0)).is_none());
    }

    #[test]
    fn test_overlay_blocks_listing() {
        let mut view = listed_view(1);
        view.show_overlay(&ProductDetail {
            image: String::new(),
            title: "Product 0".to_string(),
            description: "A sturdy bag".to_string(),
            price_label: "9.99".to_string(),
        });
        let text = draw(&mut view, 80, 24);
        assert!(text.contains("A sturdy bag"));
        assert!(text.contains("Price: 9.99"));
        assert!(text.contains("[ Add to cart ]"));
        assert!(view.hit_areas().item_at(2, 4).is_none());
        assert!(view.hit_areas().rect_of(ClickAction::BuyCurrent).is_some());
        assert!(view.hit_areas().rect_of(ClickAction::CloseOverlay).is_some());
    }

    #[test]
    fn test_alert_on_top() {
        let mut view = listed_view(1);
        view.alert("Product 0 added to cart!");
        let text = draw(&mut view, 80, 20);
        assert!(text.contains("Product 0 added to cart!"));
        let ok = view.hit_areas().rect_of(ClickAction::DismissAlert).unwrap();
        assert_eq!(view.hit_areas().hit_test(ok.x, ok.y), Some(ClickAction::DismissAlert));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut view = listed_view(3);
        view.alert("x");
        draw(&mut view, 4, 3);
    }
}
