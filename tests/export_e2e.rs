// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use craftlist::config::options::{ExportFormat, ExportOptions, ExportType};
use craftlist::file;
use craftlist::record::CanonicalRecord;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("craftlist_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rows() -> Vec<Vec<String>> {
    vec![
        vec![
            "Tailoring".into(), "Bag".into(), "Royal Satchel".into(),
            "85500".into(), "125525".into(), "".into(), "Amy, Zed".into(),
        ],
        vec![
            "Inscription".into(), "Ink".into(), "Inferno Ink".into(),
            "79017".into(), "".into(), "".into(), "Bob".into(),
        ],
    ]
}

#[test]
fn single_file_export_writes_headers_and_rows() {
    let dir = tmp_dir("single");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.include_headers = true;
    opts.set_path(dir.join("table.csv").to_str().unwrap());

    let headers = Some(CanonicalRecord::header_row());
    let written = file::write_export_single(&opts, &headers, &rows()).unwrap();
    let content = fs::read_to_string(&written).unwrap();

    assert!(content.starts_with("Profession,Item Type,Item/Enchant Name"));
    // Comma inside a crafter list gets quoted
    assert!(content.contains("\"Amy, Zed\""));
    assert!(content.contains("Inferno Ink"));
}

#[test]
fn per_profession_export_writes_one_file_each() {
    let dir = tmp_dir("per_prof");
    let mut opts = ExportOptions::default();
    opts.export_type = ExportType::PerProfession;
    opts.format = ExportFormat::Csv;
    opts.set_path(dir.to_str().unwrap());

    let headers = Some(CanonicalRecord::header_row());
    let written = file::write_export_per_profession(&opts, &headers, &rows(), 0).unwrap();
    assert_eq!(written.len(), 2);

    let tailoring = written
        .iter()
        .find(|p| p.file_name().unwrap().to_string_lossy().contains("Tailoring"))
        .unwrap();
    let content = fs::read_to_string(tailoring).unwrap();
    assert!(content.contains("Royal Satchel"));
    assert!(!content.contains("Inferno Ink"));
}

#[test]
fn tsv_export_uses_tabs_and_skips_quoting_commas() {
    let dir = tmp_dir("tsv");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(dir.join("table.tsv").to_str().unwrap());

    let written = file::write_export_single(&opts, &None, &rows()).unwrap();
    assert!(written.to_string_lossy().ends_with("table.tsv"));
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.contains("Tailoring\tBag\tRoyal Satchel"));
    assert!(content.contains("Amy, Zed")); // no quotes needed under tabs
}
