//! Hourly purchase totals.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::record::{parse_log_line, LogRecord};
use crate::error::{StorefrontError, StorefrontResult};
use crate::models::Action;

/// Purchase total for one product within one hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySales {
    /// `yyyy/MM/dd HH`
    pub hour: String,
    pub product: String,
    pub category: String,
    pub total: f64,
}

impl HourlySales {
    /// `hour|product|category|total`
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.hour,
            self.product,
            self.category,
            format_total(self.total)
        )
    }
}

/// Whole totals keep one decimal place: `20.0`, not `20`.
pub fn format_total(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 {
        format!("{:.1}", total)
    } else {
        total.to_string()
    }
}

/// Sum BUY prices per (hour, product, category), ordered by hour.
///
/// Records without a numeric price count for nothing.
pub fn aggregate_purchases(records: &[LogRecord]) -> Vec<HourlySales> {
    let buy = Action::Buy.as_str();
    let mut totals: BTreeMap<(String, String, String), f64> = BTreeMap::new();

    for record in records.iter().filter(|r| r.action == buy) {
        let key = (
            record.hour(),
            record.product.clone(),
            record.category().to_string(),
        );
        *totals.entry(key).or_insert(0.0) += record.price.unwrap_or(0.0);
    }

    totals
        .into_iter()
        .map(|((hour, product, category), total)| HourlySales {
            hour,
            product,
            category,
            total,
        })
        .collect()
}

/// `2024/05/01 14` -> `2024050114.txt`
pub fn hour_file_name(hour: &str) -> String {
    let digits: String = hour.chars().filter(|c| *c != '/' && *c != ' ').collect();
    format!("{}.txt", digits)
}

/// Aggregate every `*.txt` log in `input_dir` and write one report per hour
/// into `output_dir`. Returns the written paths.
///
/// A missing input directory or one without logs is not an error: nothing is
/// written and the reason is logged.
pub fn process_logs(input_dir: &Path, output_dir: &Path) -> StorefrontResult<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        tracing::warn!("Log directory does not exist: {}", input_dir.display());
        return Ok(Vec::new());
    }

    let log_files = list_txt_files(input_dir)?;
    if log_files.is_empty() {
        tracing::warn!("No log files found in directory: {}", input_dir.display());
        return Ok(Vec::new());
    }
    tracing::info!("Found {} log files in {}", log_files.len(), input_dir.display());

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for path in &log_files {
        let content = fs::read_to_string(path).map_err(|e| StorefrontError::io(path, e))?;
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            match parse_log_line(line) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    tracing::debug!("Skipping malformed log line in {}: {}", path.display(), line);
                }
            }
        }
    }
    if skipped > 0 {
        tracing::warn!("Skipped {} malformed log lines", skipped);
    }

    let sales = aggregate_purchases(&records);
    let mut by_hour: BTreeMap<&str, Vec<&HourlySales>> = BTreeMap::new();
    for row in &sales {
        by_hour.entry(row.hour.as_str()).or_default().push(row);
    }

    fs::create_dir_all(output_dir).map_err(|e| StorefrontError::io(output_dir, e))?;
    let mut written = Vec::with_capacity(by_hour.len());
    for (hour, rows) in by_hour {
        let path = output_dir.join(hour_file_name(hour));
        let mut body = String::new();
        for row in rows {
            body.push_str(&row.to_line());
            body.push('\n');
        }
        fs::write(&path, body).map_err(|e| StorefrontError::io(&path, e))?;
        tracing::info!("Wrote hourly report {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn list_txt_files(dir: &Path) -> StorefrontResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| StorefrontError::io(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stamp: &str, action: &str, product: &str, price: Option<f64>, route: &str) -> LogRecord {
        let line = format!(
            "{}|{}|Firefox|{}|{}|{}",
            stamp,
            action,
            product,
            price.map(|p| p.to_string()).unwrap_or_default(),
            route
        );
        parse_log_line(&line).unwrap()
    }

    #[test]
    fn test_only_buys_are_aggregated() {
        let records = vec![
            record("2024/05/01 14:03:22", "BUY", "Backpack", Some(100.0), "Clothes home"),
            record("2024/05/01 14:10:00", "HOVER", "Backpack", Some(100.0), "Clothes home"),
            record("2024/05/01 14:50:00", "ENTER_PRODUCT_DETAILS", "Backpack", Some(100.0), "Clothes details"),
        ];
        let sales = aggregate_purchases(&records);
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].total, 100.0);
    }

    #[test]
    fn test_sums_per_hour_product_category() {
        let records = vec![
            record("2024/05/01 15:00:00", "BUY", "Dune", Some(12.5), "Books home"),
            record("2024/05/01 14:03:22", "BUY", "Backpack", Some(100.0), "Clothes home"),
            record("2024/05/01 14:59:59", "BUY", "Backpack", Some(9.5), "Clothes details"),
            record("2024/05/01 15:30:00", "BUY", "Dune", Some(7.5), "Books details"),
            record("2024/05/01 15:31:00", "BUY", "Dune", None, "Books details"),
        ];
        let sales = aggregate_purchases(&records);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].hour, "2024/05/01 14");
        assert_eq!(sales[0].to_line(), "2024/05/01 14|Backpack|Clothes|109.5");
        assert_eq!(sales[1].to_line(), "2024/05/01 15|Dune|Books|20.0");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(20.0), "20.0");
        assert_eq!(format_total(0.0), "0.0");
        assert_eq!(format_total(109.5), "109.5");
        assert_eq!(format_total(219.9), "219.9");
    }

    #[test]
    fn test_buy_without_route_counts_under_empty_category() {
        let records = vec![
            parse_log_line("2024/05/01 14:03:22|BUY|Firefox|Backpack|40").unwrap(),
            parse_log_line("2024/05/01 14:20:00|BUY|Firefox|Backpack|2.5").unwrap(),
        ];
        let sales = aggregate_purchases(&records);
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].category, "");
        assert_eq!(sales[0].to_line(), "2024/05/01 14|Backpack||42.5");
    }

    #[test]
    fn test_hour_file_name() {
        assert_eq!(hour_file_name("2024/05/01 14"), "2024050114.txt");
    }

    #[test]
    fn test_missing_input_dir_writes_nothing() {
        let out = tempfile::tempdir().unwrap();
        let written = process_logs(Path::new("/definitely/not/here"), out.path()).unwrap();
        assert!(written.is_empty());
    }
}
