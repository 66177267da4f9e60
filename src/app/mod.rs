//! Application state for the terminal storefront.
//!
//! [`App`] wraps the [`Storefront`] interaction loop with everything the
//! terminal needs around it: the message channel background fetches report
//! on, pointer tracking for hover, and the redraw flag.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Instant;

use ratatui::Frame;
use tokio::sync::mpsc;

use crate::catalog::CatalogFetcher;
use crate::config::StorefrontConfig;
use crate::models::Route;
use crate::storefront::Storefront;
use crate::telemetry::EventLogger;
use crate::traits::HttpClient;
use crate::ui::{self, TerminalView};

pub struct App {
    pub storefront: Storefront<TerminalView>,
    fetcher: CatalogFetcher,
    /// Sender for async messages (clone this into background tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Listing item currently under the mouse pointer
    pointer_item: Option<usize>,
    pub should_quit: bool,
    /// Set on state changes, cleared after each draw
    pub needs_redraw: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    pub fn new(
        config: Arc<StorefrontConfig>,
        http: Arc<dyn HttpClient>,
        logger: EventLogger,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let storefront = Storefront::new(TerminalView::new(), logger, config.hover_dwell);
        Self {
            storefront,
            fetcher: CatalogFetcher::new(http, config),
            message_tx,
            message_rx: Some(message_rx),
            pointer_item: None,
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn view(&self) -> &TerminalView {
        self.storefront.view()
    }

    pub fn route(&self) -> Route {
        self.storefront.session().route
    }

    pub fn pointer_item(&self) -> Option<usize> {
        self.pointer_item
    }

    /// Switch route and fetch its catalog in the background.
    ///
    /// In-flight fetches are not cancelled; whichever finishes last is shown.
    pub fn navigate(&mut self, route: Route) {
        self.update_pointer(None, Instant::now());
        let source = self.storefront.navigate(route);
        let fetcher = self.fetcher.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.load_catalog(source).await;
            if tx.send(AppMessage::CatalogLoaded { source, result }).is_err() {
                tracing::debug!("UI loop gone before {:?} catalog arrived", source);
            }
        });
        self.mark_dirty();
    }

    /// Start on the merchandise page.
    pub fn start(&mut self) {
        self.navigate(Route::Clothes);
    }

    /// Fire due hover timers.
    pub fn tick(&mut self, now: Instant) {
        let fired = self.storefront.tick(now);
        if fired > 0 {
            tracing::debug!("{} hover event(s) fired", fired);
        }
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let (view, session) = self.storefront.parts_mut();
        ui::render(frame, view, session.route);
    }
}
