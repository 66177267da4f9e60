//! Header, product grid and footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::Route;
use crate::traits::{ItemBinding, ProductCard, NO_PRICE_LABEL};
use crate::ui::interaction::ClickAction;
use crate::ui::terminal_view::TerminalView;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_HOVER_BG,
};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Narrowest a card gets before the grid drops a column
pub const CARD_MIN_WIDTH: u16 = 32;

pub const BUY_LABEL: &str = "[ Buy ]";

const ROUTES: [Route; 2] = [Route::Clothes, Route::Books];

/// Cut `text` to at most `max` display columns, ending in "…" when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).max(1)
}

pub fn visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// Scroll offset that keeps `row` on screen.
pub fn scroll_for(row: usize, scroll_row: usize, visible: usize) -> usize {
    if row < scroll_row {
        row
    } else if row >= scroll_row + visible {
        row + 1 - visible
    } else {
        scroll_row
    }
}

/// Rect of the card in grid cell (`row`, `col`), rows counted from the top
/// of `area`.
pub fn card_rect(area: Rect, columns: usize, row: usize, col: usize) -> Rect {
    let columns = columns.max(1) as u16;
    let base = area.width / columns;
    let extra = area.width % columns;
    let col = col as u16;
    // leftover columns go to the first cards in the row
    let x = area.x + col * base + col.min(extra);
    let width = base + u16::from(col < extra);
    Rect::new(x, area.y + row as u16 * CARD_HEIGHT, width, CARD_HEIGHT)
}

/// One-line header with the route tabs. Tabs are clickable.
pub fn render_header(frame: &mut Frame, area: Rect, view: &mut TerminalView, route: Route) {
    let mut spans = vec![Span::styled(
        " storefront ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    let mut x = area.x + spans[0].width() as u16 + 1;
    spans.push(Span::raw(" "));

    for tab in ROUTES {
        let active = tab == route;
        let label = if active {
            format!("▶ {}", tab.label())
        } else {
            format!("  {}", tab.label())
        };
        let style = if active {
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let width = label.width() as u16;
        view.hit_areas.register(
            Rect::new(x, area.y, width.min(area.right().saturating_sub(x)), 1),
            ClickAction::SwitchRoute(tab),
        );
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
        x += width + 2;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let y = area.y + area.height / 2;
    let line = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("Loading…", Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        line,
    );
}

/// Draw the visible part of the grid and register card hit areas.
pub fn render_grid(frame: &mut Frame, area: Rect, view: &mut TerminalView) {
    if view.cards().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No products", Style::default().fg(COLOR_DIM)))
                .alignment(Alignment::Center),
            Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height)),
        );
        return;
    }

    let columns = grid_columns(area.width);
    let visible = visible_rows(area.height);
    view.columns = columns;
    if let Some(selected) = view.selected() {
        view.scroll_row = scroll_for(selected / columns, view.scroll_row, visible);
    }

    let first = view.scroll_row * columns;
    let last = (first + visible * columns).min(view.cards().len());
    for index in first..last {
        let slot = index - first;
        let rect = card_rect(area, columns, slot / columns, slot % columns);
        if rect.bottom() > area.bottom() {
            break;
        }
        render_card(frame, rect, view, index);
    }
}

fn render_card(frame: &mut Frame, rect: Rect, view: &mut TerminalView, index: usize) {
    let card: ProductCard = view.cards()[index].clone();
    let highlighted = view.selected() == Some(index) || view.hovered() == Some(index);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if highlighted {
            COLOR_ACCENT
        } else {
            COLOR_BORDER
        }))
        .title(Span::styled(
            format!(
                " {} ",
                truncate_to_width(&card.title, rect.width.saturating_sub(4) as usize)
            ),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if view.has_binding(index, ItemBinding::OpenDetail) {
        view.hit_areas.register(rect, ClickAction::OpenItem(index));
    }

    let price_style = if card.price_label == NO_PRICE_LABEL {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(COLOR_ACTIVE)
    };
    let image = if card.image.is_empty() {
        "(no image)".to_string()
    } else {
        card.image.clone()
    };
    let width = inner.width as usize;
    let lines = vec![
        Line::from(Span::styled(truncate_to_width(&card.price_label, width), price_style)),
        Line::default(),
        Line::from(Span::styled(
            truncate_to_width(&image, width),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if view.has_binding(index, ItemBinding::Buy) && inner.height >= 2 {
        let buy = Rect::new(
            inner.x,
            inner.y + 1,
            (BUY_LABEL.width() as u16).min(inner.width),
            1,
        );
        let mut style = Style::default()
            .fg(COLOR_ACTIVE)
            .add_modifier(Modifier::BOLD);
        if view.hovered() == Some(index) {
            style = style.bg(COLOR_HOVER_BG);
        }
        frame.render_widget(Paragraph::new(Span::styled(BUY_LABEL, style)), buy);
        view.hit_areas.register(buy, ClickAction::BuyItem(index));
    }
}

/// Key hints for whatever currently has focus.
pub fn footer_hint(view: &TerminalView) -> &'static str {
    if view.alert_message().is_some() {
        "enter ok"
    } else if view.overlay_visible() {
        "a add to cart · esc close"
    } else if view.is_loading() {
        "q quit"
    } else {
        "c clothes · b books · ←↑↓→ select · enter details · a buy · q quit"
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, view: &TerminalView) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", footer_hint(view)),
            Style::default().fg(COLOR_DIM),
        )),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Backpack", 20), "Backpack");
        assert_eq!(truncate_to_width("Backpack", 5), "Back…");
        assert_eq!(truncate_to_width("Backpack", 0), "");
        // wide glyphs count double
        assert_eq!(truncate_to_width("日本語の本", 5), "日本…");
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(64), 2);
        assert_eq!(grid_columns(100), 3);
    }

    #[test]
    fn test_card_rect_spreads_leftover_width() {
        let area = Rect::new(0, 2, 100, 20);
        let first = card_rect(area, 3, 0, 0);
        let second = card_rect(area, 3, 0, 1);
        let third = card_rect(area, 3, 1, 2);
        assert_eq!(first, Rect::new(0, 2, 34, CARD_HEIGHT));
        assert_eq!(second.x, 34);
        assert_eq!(third, Rect::new(67, 2 + CARD_HEIGHT, 33, CARD_HEIGHT));
    }

    #[test]
    fn test_scroll_for_keeps_row_visible() {
        assert_eq!(scroll_for(0, 0, 3), 0);
        assert_eq!(scroll_for(5, 0, 3), 3);
        assert_eq!(scroll_for(1, 3, 3), 1);
        assert_eq!(scroll_for(4, 3, 3), 3);
    }
}
