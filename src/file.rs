// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_profession_filename;
use crate::csv::to_export_string;

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, export.include_headers, export.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write one file per profession into the directory implied by
/// `export.out_path()` (export_type must be PerProfession).
/// `prof_col` is the column index of the Profession field in `rows`.
pub fn write_export_per_profession(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    prof_col: usize,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    debug_assert_eq!(export.export_type, ExportType::PerProfession);

    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    // Group rows by profession from the given column
    let mut by_prof: HashMap<String, Vec<Vec<String>>> = HashMap::new();
    for r in rows {
        if let Some(prof) = r.get(prof_col) {
            by_prof.entry(prof.clone()).or_default().push(r.clone());
        }
    }

    // Dedup stems and write each file
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(by_prof.len());
    let ext = export.format.ext();

    for (n, (prof, prof_rows)) in by_prof.into_iter().enumerate() {
        let stem = sanitize_profession_filename(&prof, n);
        let path = resolve_export_filename(&outdir, &stem, &mut seen, ext);

        let contents =
            to_export_string(headers, &prof_rows, export.include_headers, export.delim());
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_export_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | ...
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
