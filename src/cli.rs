// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::ExportFormat;
use crate::params::{Command, Params};
use crate::progress::ConsoleProgress;
use crate::store::Favourites;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    // Favourites management short-circuits the table run
    if handle_favourites(&params)? {
        return Ok(());
    }

    let mut progress = ConsoleProgress::new();
    let sink: &mut dyn crate::progress::Progress = &mut progress;
    crate::runner::run(&params, Some(sink)).map(|_| ())
}

fn handle_favourites(params: &Params) -> Result<bool, Box<dyn Error>> {
    let managing = !params.fav.is_empty()
        || !params.unfav.is_empty()
        || params.clear_favourites
        || params.list_favourites;
    if !managing {
        return Ok(false);
    }

    let mut favs = Favourites::load_default();
    let mut dirty = false;

    if params.clear_favourites {
        favs.clear();
        dirty = true;
        println!("Favourites cleared");
    }
    for key in &params.fav {
        if favs.add(key) {
            dirty = true;
            println!("Added: {}", key);
        }
    }
    for key in &params.unfav {
        if favs.remove(key) {
            dirty = true;
            println!("Removed: {}", key);
        }
    }
    if dirty {
        favs.save()?;
    }
    if params.list_favourites {
        for key in favs.iter() {
            println!("{}", key);
        }
    }
    Ok(true)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            // Source
            "--sheet" => params.sheet_url = Some(args.next().ok_or("Missing value for --sheet")?),
            "-f" | "--file" => params.input_file = Some(PathBuf::from(args.next().ok_or("Missing value for --file")?)),
            "--rules" => params.rules_file = Some(PathBuf::from(args.next().ok_or("Missing value for --rules")?)),

            // Filters
            "-p" | "--profession" => params.filter.profession = Some(args.next().ok_or("Missing value for --profession")?),
            "-t" | "--type" => params.filter.item_type = Some(args.next().ok_or("Missing value for --type")?),
            "-i" | "--item" => params.filter.item = Some(args.next().ok_or("Missing value for --item")?),
            "-c" | "--crafter" => params.filter.crafter = Some(args.next().ok_or("Missing value for --crafter")?),
            "-s" | "--search" => params.filter.search = Some(args.next().ok_or("Missing value for --search")?),
            "--favourites" => params.filter.favourites_only = true,

            // Listings
            "--list-professions" => params.list_professions = true,
            "--list-types" => params.list_types = true,
            "--list-items" => params.list_items = true,
            "--list-crafters" => params.list_crafters = true,

            // Favourites management (keys: "Profession|Name|ItemId|SpellId")
            "--fav" => params.fav.push(args.next().ok_or("Missing key for --fav")?),
            "--unfav" => params.unfav.push(args.next().ok_or("Missing key for --unfav")?),
            "--clear-favourites" => params.clear_favourites = true,
            "--list-favourites" => params.list_favourites = true,

            // Output
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.include_headers = true,
            "--per-profession" => params.per_profession = true,

            // API dumps
            "--fetch-items" => params.command = Command::FetchItems,
            "--fetch-item" => params.command = Command::FetchItem,
            "--ids" => {
                let v = args.next().ok_or("Missing value for --ids")?;
                params.item_ids = parse_ids_list(&v)?;}
            "--delay" => params.delay_ms = args.next().ok_or("Missing value for --delay")?.parse()?,
            "--limit" => params.limit = Some(args.next().ok_or("Missing value for --limit")?.parse()?),
            "--data-dir" => params.data_dir = PathBuf::from(args.next().ok_or("Missing value for --data-dir")?),

            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_ids_list(s: &str) -> Result<Vec<u64>, Box<dyn Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        out.push(part.parse()?);
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}
