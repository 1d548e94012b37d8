// src/store.rs
//
// Favourites persistence. Favourites are keyed by the GroupKey string
// ("Profession|Name|ItemId|SpellId"), not by table row position, so they
// survive row-order changes between loads.

use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{FAVOURITES_FILE, STORE_DIR};
use crate::record::GroupKey;

pub struct Favourites {
    path: PathBuf,
    keys: BTreeSet<String>,
}

impl Favourites {
    pub fn default_path() -> PathBuf {
        Path::new(STORE_DIR).join(FAVOURITES_FILE)
    }

    pub fn load_default() -> Self {
        Self::load(Self::default_path())
    }

    /// Missing or malformed store file = no favourites; never an error.
    pub fn load(path: PathBuf) -> Self {
        let keys = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str::<Vec<String>>(&text).ok())
            .map(|v| v.into_iter().collect())
            .unwrap_or_default();
        Self { path, keys }
    }

    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    pub fn contains(&self, key: &GroupKey) -> bool {
        self.keys.contains(&key.as_key_string())
    }

    /// Returns true if the key was newly added.
    pub fn add(&mut self, key: &str) -> bool {
        self.keys.insert(s!(key))
    }

    /// Returns true if the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let list: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        fs::write(&self.path, serde_json::to_string_pretty(&list)?)?;
        Ok(())
    }
}
