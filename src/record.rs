// src/record.rs
//
// Data model for the crafting table.
//
// - RawRecord: one sheet row, as published (field per column, all strings).
// - GroupKey: identity of "the same craftable thing" across duplicate rows.
// - CanonicalRecord: one display-ready row per GroupKey, produced by the
//   normalize pipeline.

use std::fmt;

use crate::core::sanitize::normalize_ws;

/* ---------------- Sheet headers (external contract) ---------------- */

pub const H_PROFESSION: &str = "Profession";
pub const H_NAME: &str = "Item/Enchant Name";
pub const H_ITEM_TYPE: &str = "Item Type";
pub const H_ITEM_ID: &str = "Item ID";
pub const H_SPELL_ID: &str = "Spell ID";
pub const H_TEXTURE_ID: &str = "Texture ID";
pub const H_CRAFTERS: &str = "Crafter(s)";

pub const HEADERS: [&str; 7] = [
    H_PROFESSION, H_ITEM_TYPE, H_NAME, H_ITEM_ID, H_SPELL_ID, H_TEXTURE_ID, H_CRAFTERS,
];

/* ---------------- Raw input ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub profession: String,
    /// Empty string = name absent (tiers 1–2 of classification are skipped).
    pub name: String,
    pub item_type: String,
    pub item_id: String,
    pub spell_id: String,
    pub texture_id: String,
    /// Raw comma-separated cell; may hold duplicates and padding.
    pub crafters: String,
}

impl RawRecord {
    /// Map one parsed CSV row onto a record via the sheet's header row.
    /// Unknown columns are ignored; missing columns stay empty.
    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let mut rec = Self::default();
        for (h, cell) in headers.iter().zip(row) {
            let v = normalize_ws(cell);
            match h.trim() {
                H_PROFESSION => rec.profession = v,
                H_NAME => rec.name = v,
                H_ITEM_TYPE => rec.item_type = v,
                H_ITEM_ID => rec.item_id = v,
                H_SPELL_ID => rec.spell_id = v,
                H_TEXTURE_ID => rec.texture_id = v,
                H_CRAFTERS => rec.crafters = v,
                _ => {}
            }
        }
        rec
    }
}

/* ---------------- Group identity ---------------- */

/// Composite identity of a craftable entity. Duplicate sheet rows (one per
/// contributing crafter) share a key and collapse into one canonical row.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct GroupKey {
    pub profession: String,
    pub name: String,
    pub item_id: String,
    pub spell_id: String,
}

impl GroupKey {
    pub fn of(r: &RawRecord) -> Self {
        Self {
            profession: r.profession.clone(),
            name: r.name.clone(),
            item_id: r.item_id.clone(),
            spell_id: r.spell_id.clone(),
        }
    }

    /// Stable string form; this is what favourites are keyed by.
    pub fn as_key_string(&self) -> String {
        format!("{}|{}|{}|{}", self.profession, self.name, self.item_id, self.spell_id)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key_string())
    }
}

/* ---------------- Canonical output ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalRecord {
    pub profession: String,
    pub name: String,
    /// Classified type (never the raw sheet value unless classification
    /// passed it through).
    pub item_type: String,
    pub item_id: String,
    pub spell_id: String,
    pub texture_id: String,
    /// Deduplicated, sorted, ", "-joined crafter names.
    pub crafters: String,
}

impl CanonicalRecord {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            profession: self.profession.clone(),
            name: self.name.clone(),
            item_id: self.item_id.clone(),
            spell_id: self.spell_id.clone(),
        }
    }

    /// Individual crafter names (splits the joined field back apart).
    pub fn crafter_names(&self) -> impl Iterator<Item = &str> {
        self.crafters.split(',').map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn header_row() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Column order matches `HEADERS`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.profession.clone(),
            self.item_type.clone(),
            self.name.clone(),
            self.item_id.clone(),
            self.spell_id.clone(),
            self.texture_id.clone(),
            self.crafters.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec![
            s!("Profession"), s!("Item/Enchant Name"), s!("Item Type"),
            s!("Item ID"), s!("Spell ID"), s!("Texture ID"), s!("Crafter(s)"),
        ]
    }

    #[test]
    fn from_row_maps_by_header_name() {
        let row = vec![
            s!("Tailoring"), s!(" Royal  Satchel "), s!("Bag"),
            s!("85500"), s!("125525"), s!("463506"), s!("Zed, Amy"),
        ];
        let r = RawRecord::from_row(&headers(), &row);
        assert_eq!(r.profession, "Tailoring");
        assert_eq!(r.name, "Royal Satchel"); // whitespace normalized
        assert_eq!(r.item_type, "Bag");
        assert_eq!(r.crafters, "Zed, Amy");
    }

    #[test]
    fn from_row_tolerates_short_rows_and_unknown_columns() {
        let mut h = headers();
        h.push(s!("Notes")); // extra column: ignored
        let row = vec![s!("Alchemy"), s!("Living Steel")]; // short row
        let r = RawRecord::from_row(&h, &row);
        assert_eq!(r.profession, "Alchemy");
        assert_eq!(r.name, "Living Steel");
        assert_eq!(r.crafters, "");
    }

    #[test]
    fn key_string_is_stable() {
        let r = RawRecord {
            profession: s!("Tailoring"),
            name: s!("Glorious Banner"),
            item_id: s!("1"),
            ..Default::default()
        };
        assert_eq!(GroupKey::of(&r).as_key_string(), "Tailoring|Glorious Banner|1|");
    }
}
