//! Hit areas for mouse interaction.
//!
//! Components register clickable regions while rendering, and the event loop
//! queries the registry on mouse events. The registry is cleared at the start
//! of every frame.

use ratatui::layout::Rect;

use crate::models::Route;

/// What a clickable region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Whole listing card: open the detail overlay
    OpenItem(usize),
    /// The card's own buy control
    BuyItem(usize),
    /// Overlay "add to cart"
    BuyCurrent,
    /// Overlay close control
    CloseOverlay,
    /// Header tab
    SwitchRoute(Route),
    /// Alert acknowledgment (and the backdrop behind it)
    DismissAlert,
    /// Area that swallows clicks, e.g. the overlay body
    Block,
}

impl ClickAction {
    /// Listing item this action belongs to, for hover tracking.
    pub fn item(&self) -> Option<usize> {
        match self {
            ClickAction::OpenItem(index) | ClickAction::BuyItem(index) => Some(*index),
            _ => None,
        }
    }
}

/// A clickable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Areas registered during the last frame.
///
/// Later registrations sit on top: the overlay registers after the listing,
/// so its regions shadow the cards underneath.
#[derive(Debug, Default, Clone)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width > 0 && rect.height > 0 {
            self.areas.push(HitArea::new(rect, action));
        }
    }

    /// Topmost action at a position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Listing item under the pointer, if the topmost area belongs to one.
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.hit_test(x, y).and_then(|action| action.item())
    }

    /// Rect registered for `action`, if any.
    pub fn rect_of(&self, action: ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
