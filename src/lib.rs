//! Storefront - a terminal storefront that browses product catalogs and
//! reports interaction events.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod hover;
pub mod logging;
pub mod models;
pub mod sales;
pub mod session;
pub mod storefront;
pub mod telemetry;
pub mod traits;
pub mod ui;
