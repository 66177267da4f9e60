//! Reading hourly reports back and totalling them per product.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::hourly::HourlySales;
use crate::error::{StorefrontError, StorefrontResult};

/// Total sales of one product over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTotal {
    pub product: String,
    pub category: String,
    pub total: f64,
}

/// `2024-05-01`
pub fn parse_date(text: &str) -> StorefrontResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| StorefrontError::Usage(format!("invalid date '{}': {}", text, e)))
}

/// Rows from every report in `dir` dated within `start..=end`.
///
/// The date comes from the first eight characters of the file name. Files
/// whose name does not start with a date are skipped, as are lines without
/// exactly four fields or with a non-numeric total.
pub fn load_sales(dir: &Path, start: NaiveDate, end: NaiveDate) -> StorefrontResult<Vec<HourlySales>> {
    let entries = fs::read_dir(dir).map_err(|e| StorefrontError::io(dir, e))?;
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut rows = Vec::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some(date) = name
            .get(..8)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y%m%d").ok())
        else {
            tracing::warn!("Skipping report with undated name: {}", name);
            continue;
        };
        if date < start || date > end {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| StorefrontError::io(&path, e))?;
        for line in content.lines() {
            let fields: Vec<&str> = line.trim().split('|').collect();
            if fields.len() != 4 {
                continue;
            }
            let Ok(total) = fields[3].parse::<f64>() else {
                tracing::debug!("Skipping report line with bad total in {}: {}", name, line);
                continue;
            };
            rows.push(HourlySales {
                hour: fields[0].to_string(),
                product: fields[1].to_string(),
                category: fields[2].to_string(),
                total,
            });
        }
    }

    if rows.is_empty() {
        tracing::info!("No sales found between {} and {}", start, end);
    }
    Ok(rows)
}

/// Sum totals per (product, category), ordered by category then product.
pub fn summarize_sales(rows: &[HourlySales]) -> Vec<ProductTotal> {
    let mut totals: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for row in rows {
        *totals
            .entry((row.category.as_str(), row.product.as_str()))
            .or_insert(0.0) += row.total;
    }
    totals
        .into_iter()
        .map(|((category, product), total)| ProductTotal {
            product: product.to_string(),
            category: category.to_string(),
            total,
        })
        .collect()
}

/// Plain-text table with a grand total.
pub fn format_summary(totals: &[ProductTotal]) -> String {
    let product_width = totals
        .iter()
        .map(|t| t.product.chars().count())
        .max()
        .unwrap_or(0)
        .max("Product".len());
    let category_width = totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<pw$}  {:<cw$}  {:>10}",
        "Product",
        "Category",
        "Total",
        pw = product_width,
        cw = category_width
    );
    for total in totals {
        let _ = writeln!(
            out,
            "{:<pw$}  {:<cw$}  {:>10.2}",
            total.product,
            total.category,
            total.total,
            pw = product_width,
            cw = category_width
        );
    }
    let grand: f64 = totals.iter().map(|t| t.total).sum();
    let _ = writeln!(
        out,
        "{:<pw$}  {:<cw$}  {:>10.2}",
        "",
        "",
        grand,
        pw = product_width,
        cw = category_width
    );
    out
}
