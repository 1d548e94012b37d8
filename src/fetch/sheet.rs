// src/fetch/sheet.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::consts::SHEET_CSV_URL;
use crate::core::net;
use crate::csv::{detect_headers, parse_rows};
use crate::record::{self, RawRecord};

/// Download the published sheet CSV and map it to raw records.
pub fn fetch(url: Option<&str>) -> Result<Vec<RawRecord>, Box<dyn Error>> {
    let url = url.unwrap_or(SHEET_CSV_URL);
    logf!("Fetching sheet CSV");
    let text = net::get_text(url)?;
    Ok(parse_text(&text))
}

/// Read a previously saved CSV instead of hitting the network.
pub fn load_file(path: &Path) -> Result<Vec<RawRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_text(&text))
}

/// Parse CSV text into raw records. A missing header row falls back to the
/// canonical column order.
pub fn parse_text(text: &str) -> Vec<RawRecord> {
    let rows = parse_rows(text, ',');
    let (headers, rows) = detect_headers(rows);
    let headers = headers
        .unwrap_or_else(|| record::HEADERS.iter().map(|h| s!(*h)).collect());
    rows.iter().map(|r| RawRecord::from_row(&headers, r)).collect()
}
