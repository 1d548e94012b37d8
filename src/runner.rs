// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::{ExportOptions, ExportType},
    csv, facets, fetch, file,
    normalize::{self, RuleSet, rules},
    params::{Command, Params},
    progress::{NullProgress, Progress},
    record::CanonicalRecord,
    store::Favourites,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub rows: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: dispatch on the selected command.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    match params.command {
        Command::Table => run_table(params, progress),
        Command::FetchItems => {
            let path = fetch::blizzard::dump_items_with_recipes(
                &params.data_dir,
                params.delay_ms,
                params.limit,
                progress,
            )?;
            Ok(RunSummary { rows: 0, files_written: vec![path] })
        }
        Command::FetchItem => {
            if params.item_ids.is_empty() {
                return Err("No item ids given (use --ids)".into());
            }
            let path = fetch::blizzard::dump_items(
                &params.item_ids,
                &params.data_dir,
                params.delay_ms,
                progress,
            )?;
            Ok(RunSummary { rows: 0, files_written: vec![path] })
        }
    }
}

/* ---------------- Table implementation ---------------- */

fn run_table(
    params: &Params,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let raw = match &params.input_file {
        Some(p) => fetch::sheet::load_file(p)?,
        None => fetch::sheet::fetch(params.sheet_url.as_deref())?,
    };
    progress.log(&format!("Loaded {} raw rows", raw.len()));

    let rules = match &params.rules_file {
        Some(p) => rules::from_json_file(p)?,
        None => RuleSet::builtin(),
    };

    let records = normalize::normalize(&rules, raw);
    logf!("Normalized to {} canonical rows", records.len());

    if params.list_professions || params.list_types || params.list_items || params.list_crafters {
        print_lists(params, &records);
        return Ok(RunSummary { rows: records.len(), files_written: Vec::new() });
    }

    let favourites = Favourites::load_default();
    let visible = facets::apply(&records, &params.filter, Some(&favourites));
    let rows: Vec<Vec<String>> = visible.iter().map(|r| r.to_row()).collect();
    let headers = Some(CanonicalRecord::header_row());

    let mut export = ExportOptions::default();
    export.format = params.format;
    export.include_headers = params.include_headers;
    export.export_type = if params.per_profession {
        ExportType::PerProfession
    } else {
        ExportType::SingleFile
    };

    match &params.out {
        Some(path) => {
            export.set_path(path.to_string_lossy().as_ref());
            let written = if params.per_profession {
                file::write_export_per_profession(&export, &headers, &rows, 0)?
            } else {
                vec![file::write_export_single(&export, &headers, &rows)?]
            };
            progress.log(&format!("Wrote {} row(s) to {} file(s)", rows.len(), written.len()));
            Ok(RunSummary { rows: rows.len(), files_written: written })
        }
        None => {
            print!(
                "{}",
                csv::to_export_string(&headers, &rows, params.include_headers, export.delim())
            );
            Ok(RunSummary { rows: rows.len(), files_written: Vec::new() })
        }
    }
}

fn print_lists(params: &Params, records: &[CanonicalRecord]) {
    if params.list_professions {
        for p in facets::professions(records) {
            println!("{}", p);
        }
    }
    if params.list_types {
        for (group, options) in facets::grouped_item_types(records) {
            println!("{}:", group);
            for o in options {
                println!("  {}", o);
            }
        }
    }
    if params.list_items {
        for i in facets::item_names(records) {
            println!("{}", i);
        }
    }
    if params.list_crafters {
        for c in facets::crafters(records) {
            println!("{}", c);
        }
    }
}
