//! View abstraction for the storefront.
//!
//! The interaction loop never touches a terminal directly. It pushes view
//! models through [`CatalogView`], which the terminal front end implements by
//! storing them for the next frame and tests implement by recording calls.

use crate::models::Product;

/// Placeholder shown on a listing card when a product has no price.
pub const NO_PRICE_LABEL: &str = "No price available";

/// Placeholder shown in the detail overlay when a product has no description.
pub const NO_DESCRIPTION_LABEL: &str = "No description available";

/// Placeholder shown in the detail overlay when a product has no price.
pub const NO_DETAIL_PRICE_LABEL: &str = "N/A";

/// One rendered listing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub image: String,
    pub title: String,
    pub price_label: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            image: product.image.clone(),
            title: product.title.clone(),
            price_label: listing_price_label(product.price),
        }
    }
}

/// Contents of the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub image: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        let description = match product.description.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_DESCRIPTION_LABEL.to_string(),
        };
        Self {
            image: product.image.clone(),
            title: product.title.clone(),
            description,
            price_label: detail_price_label(product.price),
        }
    }
}

/// Interactions attached to a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemBinding {
    /// Pointer dwell reports a HOVER event
    HoverDwell,
    /// The item's buy control adds it to the cart from the listing
    Buy,
    /// Clicking anywhere else on the item opens the detail overlay
    OpenDetail,
}

/// Capabilities the interaction loop needs from a front end.
pub trait CatalogView {
    /// Show the loading indicator and hide the listing.
    fn show_loading(&mut self);

    /// Replace the listing with `cards`. Hides the loading indicator.
    fn render_list(&mut self, cards: &[ProductCard]);

    /// Attach interactions to the card at `index`.
    fn bind_item_handlers(&mut self, index: usize, bindings: &[ItemBinding]);

    /// Populate and show the detail overlay.
    fn show_overlay(&mut self, detail: &ProductDetail);

    /// Hide the detail overlay.
    fn hide_overlay(&mut self);

    /// Show a confirmation message to the user.
    fn alert(&mut self, message: &str);
}

/// `$12.50` or the no-price placeholder.
pub fn listing_price_label(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${:.2}", price),
        None => NO_PRICE_LABEL.to_string(),
    }
}

/// `12.50` or `N/A`.
pub fn detail_price_label(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("{:.2}", price),
        None => NO_DETAIL_PRICE_LABEL.to_string(),
    }
}
