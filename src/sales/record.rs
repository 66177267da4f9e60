//! One stored event line.

use chrono::NaiveDateTime;

/// `2024/05/01 14:03:22`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// `2024/05/01 14`
pub const HOUR_FORMAT: &str = "%Y/%m/%d %H";

const TIMESTAMP_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub action: String,
    pub agent: String,
    pub product: String,
    /// Missing or non-numeric prices are kept as `None`
    pub price: Option<f64>,
    /// Empty when the line stops after the price
    pub route: String,
}

impl LogRecord {
    /// `yyyy/MM/dd HH` bucket this record falls into.
    pub fn hour(&self) -> String {
        self.timestamp.format(HOUR_FORMAT).to_string()
    }

    /// First word of the route, e.g. `Clothes` for `Clothes home`.
    pub fn category(&self) -> &str {
        self.route.split(' ').next().unwrap_or_default()
    }
}

/// Parse `timestamp|ACTION|agent|product|price|route`.
///
/// Returns `None` for lines with a bad timestamp or fewer than five fields.
/// A line that ends after the price is kept with an empty route.
pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let stamp = line.get(..TIMESTAMP_LEN)?;
    let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;

    let mut fields = line.get(TIMESTAMP_LEN..)?.split('|');
    // the separator after the timestamp leaves an empty first field
    if !fields.next()?.is_empty() {
        return None;
    }
    let action = fields.next()?.to_string();
    let agent = fields.next()?.to_string();
    let product = fields.next()?.to_string();
    let price = fields.next()?.trim().parse::<f64>().ok();
    let route = fields.next().unwrap_or_default().to_string();

    Some(LogRecord {
        timestamp,
        action,
        agent,
        product,
        price,
        route,
    })
}
