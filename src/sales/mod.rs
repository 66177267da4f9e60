//! Sales reporting over the logging endpoint's stored events.
//!
//! The endpoint appends one line per event:
//!
//! ```text
//! 2024/05/01 14:03:22|BUY|Firefox|Backpack|109.95|Clothes home
//! ```
//!
//! [`process_logs`] turns a directory of such files into hourly purchase
//! reports, one file per hour. [`load_sales`] and [`summarize_sales`] read
//! those reports back for a date range and total them per product.

mod hourly;
mod record;
mod summary;

pub use hourly::{aggregate_purchases, hour_file_name, process_logs, HourlySales};
pub use record::{parse_log_line, LogRecord, HOUR_FORMAT, TIMESTAMP_FORMAT};
pub use summary::{format_summary, load_sales, parse_date, summarize_sales, ProductTotal};
