//! Data types shared across the storefront.

mod event;
mod product;

pub use event::{Action, EventDetails, LogEvent};
pub use product::{BookWork, BooksResponse, CatalogSource, Product, Route, StoreItem};
