// src/params.rs
use std::path::PathBuf;

use crate::config::consts::{DEFAULT_DATA_DIR, REQUEST_PAUSE_MS};
use crate::config::options::ExportFormat;
use crate::facets::Filter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Table,      // load + normalize + filter + output (default)
    FetchItems, // full item/recipe dump from the API
    FetchItem,  // raw dump of explicit item ids
}

#[derive(Clone)]
pub struct Params {
    pub command: Command,

    // Table source
    pub sheet_url: Option<String>,    // override the published sheet URL
    pub input_file: Option<PathBuf>,  // read a local CSV instead
    pub rules_file: Option<PathBuf>,  // classifier tables from JSON

    // Table view
    pub filter: Filter,
    pub list_professions: bool,
    pub list_types: bool,
    pub list_items: bool,
    pub list_crafters: bool,

    // Favourites management
    pub fav: Vec<String>,             // GroupKey strings to add
    pub unfav: Vec<String>,           // GroupKey strings to remove
    pub clear_favourites: bool,
    pub list_favourites: bool,

    // Output
    pub out: Option<PathBuf>,         // file (single) or dir (per-profession)
    pub format: ExportFormat,
    pub include_headers: bool,
    pub per_profession: bool,

    // API dumps
    pub item_ids: Vec<u64>,
    pub delay_ms: u64,
    pub limit: Option<usize>,
    pub data_dir: PathBuf,
}

impl Params {
    pub fn new() -> Self {
        Self {
            command: Command::Table,
            sheet_url: None,
            input_file: None,
            rules_file: None,
            filter: Filter::default(),
            list_professions: false,
            list_types: false,
            list_items: false,
            list_crafters: false,
            fav: Vec::new(),
            unfav: Vec::new(),
            clear_favourites: false,
            list_favourites: false,
            out: None,
            format: ExportFormat::Csv,
            include_headers: false,
            per_profession: false,
            item_ids: Vec::new(),
            delay_ms: REQUEST_PAUSE_MS,
            limit: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
