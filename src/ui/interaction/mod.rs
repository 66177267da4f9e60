//! Mouse interaction for the storefront UI.
//!
//! Rendering registers clickable regions; the event loop resolves mouse
//! positions against them.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
