// src/normalize/mod.rs
//! # Normalization pipeline
//!
//! This module turns the raw sheet rows into the canonical crafting table.
//! It is the one place with actual decision logic; everything around it is
//! fetch/IO plumbing.
//!
//! ## Stages
//! - **Classify** (`classify`): map each row's raw item type + item name to one
//!   canonical type label through three ordered rule tiers (name prefix →
//!   whole-word keyword → inventory-type fallback). Pure, total, per-row.
//! - **Group** (`group`): merge rows that describe the same craftable thing
//!   (same Profession + Name + Item ID + Spell ID), unioning their crafter
//!   sets. First row seen supplies every other field.
//! - **Finalize** (`group::finalize`): sort + join the crafter set into the
//!   display string, one `CanonicalRecord` per group.
//!
//! ## Conventions & invariants
//! - Tier order is fixed: an earlier tier always wins, regardless of how
//!   specific a later rule would be.
//! - Crafter equality is **case-sensitive**; sort collation is plain byte
//!   order on UTF-8 (capitals before lowercase).
//! - Output order is group insertion order: stable within one load, not
//!   guaranteed across loads.
//! - No row is ever fatal. An empty name just skips the name tiers, an empty
//!   crafter cell contributes nothing, an unknown type passes through.
//!
//! In short: **`normalize` knows the taxonomy.** Other layers decide where
//! rows come from and where the table goes.

pub mod classify;
pub mod group;
pub mod rules;

pub use classify::RuleSet;
pub use group::{finalize, group};

use crate::record::{CanonicalRecord, RawRecord};

/// Run the whole pipeline: classify every row, then group and finalize.
pub fn normalize(rules: &RuleSet, mut records: Vec<RawRecord>) -> Vec<CanonicalRecord> {
    for r in &mut records {
        r.item_type = rules.classify(&r.item_type, &r.name);
    }
    group(records).into_values().map(finalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_runs_before_grouping() {
        // Two rows for the same key, different crafters; type classified once.
        let rows = vec![
            RawRecord {
                profession: s!("Inscription"),
                name: s!("Inferno Ink"),
                item_type: s!("Trade Goods"),
                crafters: s!("Zed"),
                ..Default::default()
            },
            RawRecord {
                profession: s!("Inscription"),
                name: s!("Inferno Ink"),
                item_type: s!("Trade Goods"),
                crafters: s!("Amy, Zed"),
                ..Default::default()
            },
        ];

        let out = normalize(&RuleSet::builtin(), rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].item_type, "Ink"); // keyword tier
        assert_eq!(out[0].crafters, "Amy, Zed");
    }

    #[test]
    fn normalize_is_idempotent_on_canonical_input() {
        let rows = vec![RawRecord {
            profession: s!("Tailoring"),
            name: s!("Glorious Banner"),
            item_type: s!("Misc"),
            item_id: s!("1"),
            crafters: s!("Amy, Zed"),
            ..Default::default()
        }];

        let rules = RuleSet::builtin();
        let once = normalize(&rules, rows);
        let again: Vec<RawRecord> = once
            .iter()
            .map(|c| RawRecord {
                profession: c.profession.clone(),
                name: c.name.clone(),
                item_type: c.item_type.clone(),
                item_id: c.item_id.clone(),
                spell_id: c.spell_id.clone(),
                texture_id: c.texture_id.clone(),
                crafters: c.crafters.clone(),
            })
            .collect();
        assert_eq!(normalize(&rules, again), once);
    }
}
