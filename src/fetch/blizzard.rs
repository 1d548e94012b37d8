// src/fetch/blizzard.rs
//
// Blizzard API pollers. Produce the static JSON dumps the site serves:
// data/items.json (raw item records for an explicit id list) and
// data/all-items-with-recipes.json (full item walk with recipe joins).
//
// One request at a time with a polite pause between calls. A failed call
// retries a few times on the same delay, then the id is skipped; a dump
// never aborts over a single bad id.

use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::config::consts::*;
use crate::core::net;
use crate::progress::Progress;

/* ---------------- Dump shapes (camelCase to match the site data) ---------------- */

#[derive(Debug, Serialize)]
struct Reagent {
    id: Option<u64>,
    name: Option<String>,
    quantity: Option<u64>,
}

#[derive(Debug, Serialize)]
struct CraftedBy {
    profession: String,
    reagents: Vec<Reagent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemDump {
    id: u64,
    name: String,
    quality: String,
    class: String,
    subclass: String,
    slot: String,
    item_level: Option<u64>,
    required_level: Option<u64>,
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crafted_by: Option<CraftedBy>,
}

/* ---------------- API session ---------------- */

struct Api {
    token: String,
    pause: Duration,
}

impl Api {
    /// OAuth client-credentials handshake. Credentials come from the
    /// CLIENT_ID / CLIENT_SECRET environment variables.
    fn connect(pause_ms: u64) -> Result<Self, Box<dyn Error>> {
        let id = env::var("CLIENT_ID").map_err(|_| "CLIENT_ID not set")?;
        let secret = env::var("CLIENT_SECRET").map_err(|_| "CLIENT_SECRET not set")?;
        let v = net::post_form_basic(
            OAUTH_TOKEN_URL,
            &id,
            &secret,
            &[("grant_type", "client_credentials")],
        )?;
        let token = v["access_token"]
            .as_str()
            .ok_or("token response missing access_token")?
            .to_string();
        Ok(Self { token, pause: Duration::from_millis(pause_ms) })
    }

    /// GET with namespace/auth params and retry-by-delay.
    fn get(&self, url: &str, localized: bool) -> Result<Value, Box<dyn Error>> {
        let mut query: Vec<(&str, &str)> =
            vec![("namespace", API_NAMESPACE), ("access_token", &self.token)];
        if localized {
            query.push(("locale", API_LOCALE));
        }

        let mut attempt = 0;
        loop {
            match net::get_json(url, &query) {
                Ok(v) => return Ok(v),
                Err(e) => {
                    attempt += 1;
                    if attempt >= REQUEST_RETRIES {
                        return Err(e);
                    }
                    loge!("GET {} failed (attempt {}): {}", url, attempt, e);
                    thread::sleep(self.pause);
                }
            }
        }
    }

    fn wait(&self) {
        thread::sleep(self.pause);
    }
}

fn api_url(tail: &str) -> String {
    join!(API_BASE, "/mop-classic/", tail)
}

fn index_ids(index: &Value, list_key: &str) -> Vec<u64> {
    index[list_key]
        .as_array()
        .map(|items| items.iter().filter_map(|it| it["id"].as_u64()).collect())
        .unwrap_or_default()
}

/* ---------------- Dumps ---------------- */

/// Raw item JSON for an explicit id list → data/items.json.
pub fn dump_items(
    ids: &[u64],
    data_dir: &Path,
    pause_ms: u64,
    progress: &mut dyn Progress,
) -> Result<PathBuf, Box<dyn Error>> {
    let api = Api::connect(pause_ms)?;
    progress.begin(ids.len());

    let mut results: BTreeMap<u64, Value> = BTreeMap::new();
    for (i, id) in ids.iter().copied().enumerate() {
        progress.log(&format!("Fetching item {}...", id));
        match api.get(&api_url(&format!("item/{}", id)), true) {
            Ok(v) => { results.insert(id, v); }
            Err(e) => loge!("Skipping item {}: {}", id, e),
        }
        progress.item_done(i + 1);
        api.wait();
    }

    let path = data_dir.join(ITEMS_DUMP_FILE);
    write_json(&path, &results)?;
    progress.finish();
    Ok(path)
}

/// Full walk: recipe index first (crafted-item joins), then the item index,
/// checkpointing the output as it grows → data/all-items-with-recipes.json.
pub fn dump_items_with_recipes(
    data_dir: &Path,
    pause_ms: u64,
    limit: Option<usize>,
    progress: &mut dyn Progress,
) -> Result<PathBuf, Box<dyn Error>> {
    let api = Api::connect(pause_ms)?;

    let mut item_ids = index_ids(&api.get(&api_url("item/index"), false)?, "items");
    let mut recipe_ids = index_ids(&api.get(&api_url("recipe/index"), false)?, "recipes");
    if let Some(n) = limit {
        item_ids.truncate(n);
        recipe_ids.truncate(n);
    }

    progress.log(&format!(
        "Found {} items and {} recipes...",
        item_ids.len(),
        recipe_ids.len()
    ));

    // Step 1: map crafted item id → recipe info
    let mut recipe_map: BTreeMap<u64, CraftedBy> = BTreeMap::new();
    progress.begin(recipe_ids.len());
    for (i, rid) in recipe_ids.iter().copied().enumerate() {
        match api.get(&api_url(&format!("recipe/{}", rid)), true) {
            Ok(r) => {
                if let Some(crafted_id) = r["crafted_item"]["id"].as_u64() {
                    recipe_map.insert(crafted_id, crafted_by_of(&r));
                }
            }
            Err(e) => loge!("Skipping recipe {}: {}", rid, e),
        }
        progress.item_done(i + 1);
        api.wait();
    }

    // Step 2: enrich items, checkpointing periodically
    let path = data_dir.join(RECIPES_DUMP_FILE);
    let mut results: BTreeMap<u64, ItemDump> = BTreeMap::new();
    progress.begin(item_ids.len());
    for (i, id) in item_ids.iter().copied().enumerate() {
        match fetch_item(&api, id) {
            Ok(mut item) => {
                item.crafted_by = recipe_map.remove(&item.id);
                results.insert(item.id, item);
            }
            Err(e) => loge!("Skipping item {}: {}", id, e),
        }

        if (i + 1) % CHECKPOINT_EVERY == 0 {
            write_json(&path, &results)?;
        }
        progress.item_done(i + 1);
        api.wait();
    }

    write_json(&path, &results)?;
    progress.log(&format!("Saved {} items to {}", results.len(), path.display()));
    progress.finish();
    Ok(path)
}

/* ---------------- helpers ---------------- */

fn fetch_item(api: &Api, id: u64) -> Result<ItemDump, Box<dyn Error>> {
    let item = api.get(&api_url(&format!("item/{}", id)), true)?;

    // Media is best-effort: a missing icon never drops the item.
    let icon = api
        .get(&format!("{}/media/item/{}", API_BASE, id), false)
        .ok()
        .and_then(|media| {
            media["assets"].as_array().and_then(|assets| {
                assets
                    .iter()
                    .find(|a| a["key"].as_str() == Some("icon"))
                    .and_then(|a| a["value"].as_str().map(String::from))
            })
        });

    Ok(ItemDump {
        id: item["id"].as_u64().ok_or("item missing id")?,
        name: str_of(&item["name"]),
        quality: str_of(&item["quality"]["name"]),
        class: str_of(&item["item_class"]["name"]),
        subclass: str_of(&item["item_subclass"]["name"]),
        slot: str_of(&item["inventory_type"]["name"]),
        item_level: item["level"].as_u64(),
        required_level: item["required_level"].as_u64(),
        icon,
        crafted_by: None,
    })
}

fn crafted_by_of(recipe: &Value) -> CraftedBy {
    let reagents = recipe["reagents"]
        .as_array()
        .map(|rs| {
            rs.iter()
                .map(|r| Reagent {
                    id: r["reagent"]["id"].as_u64(),
                    name: r["reagent"]["name"].as_str().map(String::from),
                    quantity: r["quantity"].as_u64(),
                })
                .collect()
        })
        .unwrap_or_default();

    CraftedBy { profession: str_of(&recipe["category"]["name"]), reagents }
}

fn str_of(v: &Value) -> String {
    v.as_str().map(String::from).unwrap_or_default()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
