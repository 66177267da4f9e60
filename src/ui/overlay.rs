//! Detail overlay and alert popups.
//!
//! Both register a blocking area over the full screen first, so clicks and
//! pointer movement never reach the listing underneath.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::traits::ProductDetail;
use crate::ui::dialog::{render_dialog_frame, DialogFrameConfig};
use crate::ui::interaction::ClickAction;
use crate::ui::listing::truncate_to_width;
use crate::ui::terminal_view::TerminalView;
use crate::ui::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM};

pub const ADD_TO_CART_LABEL: &str = "[ Add to cart ]";
pub const CLOSE_LABEL: &str = "[ Close ]";
pub const OK_LABEL: &str = "[ OK ]";

/// Rows of description text the overlay makes room for
const DESCRIPTION_ROWS: u16 = 6;

pub fn render_detail_overlay(frame: &mut Frame, area: Rect, view: &mut TerminalView) {
    let Some(detail) = view.overlay().cloned() else {
        return;
    };
    view.hit_areas.register(area, ClickAction::Block);

    // image, blank, description, blank, price, blank, buttons
    let content_height = 1 + 1 + DESCRIPTION_ROWS + 1 + 1 + 1 + 1;
    let config = DialogFrameConfig::new(&detail.title, content_height)
        .min_width(40)
        .max_width(80);
    let inner = render_dialog_frame(frame, area, &config);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    render_detail_body(frame, inner, &detail);

    let buttons_y = inner.bottom().saturating_sub(1);
    let add = Rect::new(
        inner.x,
        buttons_y,
        (ADD_TO_CART_LABEL.width() as u16).min(inner.width),
        1,
    );
    let close_x = add.right() + 2;
    let close = Rect::new(
        close_x,
        buttons_y,
        (CLOSE_LABEL.width() as u16).min(inner.right().saturating_sub(close_x)),
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            ADD_TO_CART_LABEL,
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )),
        add,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(COLOR_ACCENT))),
        close,
    );
    view.hit_areas.register(add, ClickAction::BuyCurrent);
    view.hit_areas.register(close, ClickAction::CloseOverlay);
}

fn render_detail_body(frame: &mut Frame, inner: Rect, detail: &ProductDetail) {
    let width = inner.width as usize;
    let image = if detail.image.is_empty() {
        "(no image)"
    } else {
        detail.image.as_str()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(image, width),
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
    ];
    lines.push(Line::from(detail.description.clone()));
    let body = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        (2 + DESCRIPTION_ROWS).min(inner.height),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);

    let price_y = inner.y + 2 + DESCRIPTION_ROWS + 1;
    if price_y < inner.bottom().saturating_sub(1) {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Price: ", Style::default().fg(COLOR_DIM)),
                Span::styled(
                    detail.price_label.clone(),
                    Style::default().fg(COLOR_ACTIVE),
                ),
            ])),
            Rect::new(inner.x, price_y, inner.width, 1),
        );
    }
}

pub fn render_alert(frame: &mut Frame, area: Rect, view: &mut TerminalView) {
    let Some(message) = view.alert_message().map(str::to_string) else {
        return;
    };
    view.hit_areas.register(area, ClickAction::Block);

    // message, blank, button
    let config = DialogFrameConfig::new("Notice", 3).max_width(60);
    let inner = render_dialog_frame(frame, area, &config);
    if inner.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(truncate_to_width(&message, inner.width as usize))
            .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let ok_width = (OK_LABEL.width() as u16).min(inner.width);
    let ok = Rect::new(
        inner.x + inner.width.saturating_sub(ok_width) / 2,
        inner.bottom().saturating_sub(1),
        ok_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            OK_LABEL,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        ok,
    );
    view.hit_areas.register(ok, ClickAction::DismissAlert);
}
