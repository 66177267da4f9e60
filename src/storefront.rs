//! The render/interaction loop.
//!
//! [`Storefront`] owns the [`ViewSession`] and drives a [`CatalogView`]. All
//! operations run on the UI task; the only asynchronous parts are the catalog
//! fetch (performed by the caller, result handed to
//! [`Storefront::finish_loading`]) and event delivery behind [`EventLogger`].

use std::time::{Duration, Instant};

use crate::error::StorefrontResult;
use crate::hover::HoverDebouncer;
use crate::models::{Action, CatalogSource, EventDetails, Product, Route};
use crate::session::ViewSession;
use crate::telemetry::EventLogger;
use crate::traits::{CatalogView, ItemBinding, ProductCard, ProductDetail};

/// Bindings attached to every rendered product.
pub const ITEM_BINDINGS: [ItemBinding; 3] = [
    ItemBinding::HoverDwell,
    ItemBinding::Buy,
    ItemBinding::OpenDetail,
];

/// Confirmation shown after a purchase.
pub fn added_to_cart_message(title: &str) -> String {
    format!("{} added to cart!", title)
}

pub struct Storefront<V: CatalogView> {
    view: V,
    session: ViewSession,
    logger: EventLogger,
    hover: HoverDebouncer,
}

impl<V: CatalogView> Storefront<V> {
    pub fn new(view: V, logger: EventLogger, hover_dwell: Duration) -> Self {
        Self {
            view,
            session: ViewSession::new(),
            logger,
            hover: HoverDebouncer::new(hover_dwell),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn session(&self) -> &ViewSession {
        &self.session
    }

    /// View and session together, for drawing a frame.
    pub fn parts_mut(&mut self) -> (&mut V, &ViewSession) {
        (&mut self.view, &self.session)
    }

    pub fn hover(&self) -> &HoverDebouncer {
        &self.hover
    }

    /// Switch to `route` and show the loading indicator. The caller fetches
    /// the returned source and reports back through
    /// [`finish_loading`](Self::finish_loading).
    pub fn navigate(&mut self, route: Route) -> CatalogSource {
        tracing::info!("Navigating to {}", route.label());
        self.session.route = route;
        self.begin_loading();
        route.source()
    }

    pub fn begin_loading(&mut self) {
        self.session.loading = true;
        self.view.show_loading();
    }

    /// Apply a finished fetch. Failures leave an empty listing and are only
    /// logged. Responses are applied in arrival order, so with overlapping
    /// fetches the last one to resolve wins.
    pub fn finish_loading(&mut self, result: StorefrontResult<Vec<Product>>) {
        match result {
            Ok(products) => self.render_catalog(products),
            Err(err) => {
                tracing::error!(
                    code = err.error_code(),
                    category = %err.category(),
                    "Error fetching catalog: {}",
                    err
                );
                self.render_catalog(Vec::new());
            }
        }
    }

    /// Replace the listing and bind every item.
    pub fn render_catalog(&mut self, products: Vec<Product>) {
        let cards: Vec<ProductCard> = products.iter().map(ProductCard::from_product).collect();
        self.session.loading = false;
        self.view.render_list(&cards);
        for index in 0..cards.len() {
            self.view.bind_item_handlers(index, &ITEM_BINDINGS);
        }
        self.hover.reset(products.len());
        self.session.products = products;
    }

    pub fn pointer_enter(&mut self, index: usize, now: Instant) {
        if self.hover.pointer_enter(index, now) {
            tracing::trace!("Hover timer started for item {}", index);
        }
    }

    /// Pointer left `index` at `now`. A dwell that already elapsed is
    /// reported before the timer is dropped, even if no tick ran in between.
    pub fn pointer_leave(&mut self, index: usize, now: Instant) {
        self.tick(now);
        if self.hover.pointer_leave(index) {
            tracing::trace!("Hover timer cancelled for item {}", index);
        }
    }

    /// Report HOVER for every item whose dwell elapsed by `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.hover.poll(now);
        let route = self.session.route.home();
        for &index in &fired {
            if let Some(product) = self.session.products.get(index) {
                self.logger
                    .log_event(Action::Hover, EventDetails::for_product(product), &route);
            }
        }
        fired.len()
    }

    /// The item's own buy control, from the listing.
    pub fn buy_from_listing(&mut self, index: usize) {
        let Some(product) = self.session.products.get(index) else {
            tracing::debug!("Buy ignored: no item at {}", index);
            return;
        };
        self.logger.log_event(
            Action::Buy,
            EventDetails::for_product(product),
            &self.session.route.home(),
        );
        let message = added_to_cart_message(&product.title);
        self.view.alert(&message);
    }

    /// Whole-item click: report ENTER_PRODUCT_DETAILS and open the overlay.
    pub fn open_item(&mut self, index: usize) {
        let Some(product) = self.session.products.get(index).cloned() else {
            tracing::debug!("Open ignored: no item at {}", index);
            return;
        };
        self.logger.log_event(
            Action::EnterProductDetails,
            EventDetails::for_product(&product),
            &self.session.route.details(),
        );
        self.open_detail(product);
    }

    /// Show `product` in the overlay and make it the current product.
    pub fn open_detail(&mut self, product: Product) {
        let detail = ProductDetail::from_product(&product);
        self.session.current_product = Some(product);
        self.session.overlay_visible = true;
        self.view.show_overlay(&detail);
    }

    /// Hide the overlay, whatever its state.
    pub fn close_detail(&mut self) {
        self.session.overlay_visible = false;
        self.view.hide_overlay();
    }

    /// The overlay's buy control. With no current product this is a no-op
    /// and returns false.
    pub fn buy_from_detail(&mut self) -> bool {
        let Some(product) = self.session.current_product.as_ref() else {
            tracing::warn!("Overlay buy with no product open; ignoring");
            return false;
        };
        self.logger.log_event(
            Action::Buy,
            EventDetails::for_product(product),
            &self.session.route.details(),
        );
        let message = added_to_cart_message(&product.title);
        self.view.alert(&message);
        true
    }
}
