// src/facets.rs
//
// Derived views over the canonical table: distinct value lists (what the
// site fills its filter dropdowns from) and row filtering.

use std::collections::BTreeSet;

use crate::record::CanonicalRecord;
use crate::store::Favourites;

/* ---------------- Distinct value lists ---------------- */

pub fn professions(records: &[CanonicalRecord]) -> Vec<String> {
    distinct(records, |r| Some(r.profession.as_str()))
}

pub fn item_types(records: &[CanonicalRecord]) -> Vec<String> {
    distinct(records, |r| Some(r.item_type.as_str()))
}

pub fn item_names(records: &[CanonicalRecord]) -> Vec<String> {
    distinct(records, |r| Some(r.name.as_str()))
}

/// Individual crafter names across the whole table (splits the joined cells).
pub fn crafters(records: &[CanonicalRecord]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for r in records {
        set.extend(r.crafter_names().map(String::from));
    }
    set.into_iter().collect()
}

fn distinct<'a, F>(records: &'a [CanonicalRecord], field: F) -> Vec<String>
where
    F: Fn(&'a CanonicalRecord) -> Option<&'a str>,
{
    let set: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| field(r))
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().map(String::from).collect()
}

/* ---------------- Gear-slot buckets ---------------- */

/// Fixed slot buckets for type listings; anything observed outside these
/// lands in "Other".
pub const SLOT_GROUPS: &[(&str, &[&str])] = &[
    ("Armor", &["Helm", "Shoulders", "Chest", "Legs", "Hands", "Boots", "Wrists", "Waist"]),
    ("Weapon", &["Main Hand", "Off-hand"]),
    ("Accessories", &["Back", "Ring"]),
    ("Gems", &[
        "Red Gem", "Blue Gem", "Yellow Gem", "Purple Gem",
        "Orange Gem", "Green Gem", "Prismatic Gem", "Meta Gem",
    ]),
];

/// Slot buckets in display order, with an "Other" bucket holding every type
/// present in the table that no fixed bucket claims.
pub fn grouped_item_types(records: &[CanonicalRecord]) -> Vec<(String, Vec<String>)> {
    let mut out: Vec<(String, Vec<String>)> = SLOT_GROUPS
        .iter()
        .map(|(g, opts)| (s!(*g), opts.iter().map(|o| s!(*o)).collect()))
        .collect();

    let grouped: BTreeSet<&str> = SLOT_GROUPS
        .iter()
        .flat_map(|(_, opts)| opts.iter().copied())
        .collect();

    let other: Vec<String> = item_types(records)
        .into_iter()
        .filter(|t| !grouped.contains(t.as_str()))
        .collect();
    out.push((s!("Other"), other));
    out
}

/* ---------------- Filtering ---------------- */

/// Row predicate set. Dropdown-style filters match exactly; `search` is a
/// case-insensitive substring scan over every field.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    pub profession: Option<String>,
    pub item_type: Option<String>,
    pub item: Option<String>,
    pub crafter: Option<String>,
    pub search: Option<String>,
    pub favourites_only: bool,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.profession.is_none()
            && self.item_type.is_none()
            && self.item.is_none()
            && self.crafter.is_none()
            && self.search.is_none()
            && !self.favourites_only
    }

    pub fn matches(&self, rec: &CanonicalRecord, favourites: Option<&Favourites>) -> bool {
        if let Some(p) = &self.profession {
            if rec.profession != *p { return false; }
        }
        if let Some(t) = &self.item_type {
            if rec.item_type != *t { return false; }
        }
        if let Some(i) = &self.item {
            if rec.name != *i { return false; }
        }
        if let Some(c) = &self.crafter {
            if !rec.crafter_names().any(|n| n == c) { return false; }
        }
        if let Some(q) = &self.search {
            let q = q.to_lowercase();
            let hit = rec
                .to_row()
                .iter()
                .any(|cell| cell.to_lowercase().contains(&q));
            if !hit { return false; }
        }
        if self.favourites_only {
            match favourites {
                Some(f) => {
                    if !f.contains(&rec.key()) { return false; }
                }
                None => return false,
            }
        }
        true
    }
}

/// Apply a filter, preserving table order.
pub fn apply<'a>(
    records: &'a [CanonicalRecord],
    filter: &Filter,
    favourites: Option<&Favourites>,
) -> Vec<&'a CanonicalRecord> {
    records.iter().filter(|r| filter.matches(r, favourites)).collect()
}
