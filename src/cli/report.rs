//! Report commands: hourly aggregation and the sales summary.

use std::path::Path;

use color_eyre::Result;

use crate::sales::{format_summary, load_sales, parse_date, process_logs, summarize_sales};

pub fn handle_report_command(log_dir: &Path, output_dir: &Path) -> Result<()> {
    let written = process_logs(log_dir, output_dir)?;
    println!("Wrote {} hourly report(s) to {}", written.len(), output_dir.display());
    Ok(())
}

pub fn handle_sales_command(output_dir: &Path, start: &str, end: &str) -> Result<()> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let rows = load_sales(output_dir, start, end)?;
    if rows.is_empty() {
        println!("No data found for the date range: {} to {}", start, end);
        return Ok(());
    }
    println!("Total sales by product and category ({} to {})", start, end);
    print!("{}", format_summary(&summarize_sales(&rows)));
    Ok(())
}
