//! Centered dialog frame with rounded borders.
//!
//! Clears whatever is underneath, draws the border and title, and returns the
//! inner content area.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_HEADER};

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height, not including borders
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    /// Share of the screen width to aim for
    pub width_percent: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 72,
            width_percent: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Outer rect of a dialog centered in `area`.
pub fn dialog_rect(area: Rect, config: &DialogFrameConfig) -> Rect {
    let available = area.width.saturating_sub(4);
    let target = (area.width as u32 * config.width_percent as u32 / 100) as u16;
    let width = target
        .clamp(config.min_width, config.max_width.max(config.min_width))
        .min(available);
    let height = (config.content_height + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Draw a dialog frame and return its inner content area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let dialog_area = dialog_rect(area, config);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
