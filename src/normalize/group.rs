// src/normalize/group.rs

use std::collections::BTreeSet;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::record::{CanonicalRecord, GroupKey, RawRecord};

/// A canonical row under construction: the first-seen record plus the
/// accumulated crafter set.
#[derive(Clone, Debug)]
pub struct Group {
    first: RawRecord,
    // BTreeSet: dedup + sorted (byte-order) iteration in one container
    crafters: BTreeSet<String>,
}

/// Split a raw crafter cell into trimmed, non-empty names.
fn split_crafters(cell: &str) -> impl Iterator<Item = String> + '_ {
    cell.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
}

/// Merge records that share a `GroupKey`. The first record for a key supplies
/// every field; later duplicates only union their crafters in. Map iteration
/// follows first-seen order.
pub fn group(records: impl IntoIterator<Item = RawRecord>) -> IndexMap<GroupKey, Group> {
    let mut groups: IndexMap<GroupKey, Group> = IndexMap::new();

    for rec in records {
        let key = GroupKey::of(&rec);
        match groups.entry(key) {
            Entry::Occupied(mut e) => {
                e.get_mut().crafters.extend(split_crafters(&rec.crafters));
            }
            Entry::Vacant(e) => {
                let crafters = split_crafters(&rec.crafters).collect();
                e.insert(Group { first: rec, crafters });
            }
        }
    }

    groups
}

/// Collapse a finished group into its canonical row: crafters sorted
/// (case-sensitive lexical order) and ", "-joined.
pub fn finalize(g: Group) -> CanonicalRecord {
    let crafters = g.crafters.into_iter().collect::<Vec<_>>().join(", ");
    CanonicalRecord {
        profession: g.first.profession,
        name: g.first.name,
        item_type: g.first.item_type,
        item_id: g.first.item_id,
        spell_id: g.first.spell_id,
        texture_id: g.first.texture_id,
        crafters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(crafters: &str) -> RawRecord {
        RawRecord {
            profession: s!("Tailoring"),
            name: s!("Glorious Banner"),
            item_type: s!("Misc"),
            item_id: s!("1"),
            crafters: s!(crafters),
            texture_id: s!("111"),
            ..Default::default()
        }
    }

    #[test]
    fn crafter_union_is_order_independent_and_case_sensitive() {
        let forward = group(vec![rec("Bob, Alice"), rec("alice, Carol")]);
        let reverse = group(vec![rec("alice, Carol"), rec("Bob, Alice")]);

        // Capitals sort before lowercase: "alice" is distinct from "Alice"
        // and lands last.
        let f = finalize(forward.into_values().next().unwrap());
        let r = finalize(reverse.into_values().next().unwrap());
        assert_eq!(f.crafters, "Alice, Bob, Carol, alice");
        assert_eq!(r.crafters, f.crafters);
    }

    #[test]
    fn first_record_supplies_fields() {
        let mut second = rec("Amy");
        second.texture_id = s!("999");

        let groups = group(vec![rec("Zed"), second]);
        let out = finalize(groups.into_values().next().unwrap());
        assert_eq!(out.texture_id, "111"); // later duplicate did not overwrite
        assert_eq!(out.crafters, "Amy, Zed");
    }

    #[test]
    fn duplicate_and_padded_names_collapse() {
        let groups = group(vec![rec(" Zed ,Zed,  Amy, ")]);
        let out = finalize(groups.into_values().next().unwrap());
        assert_eq!(out.crafters, "Amy, Zed");
    }

    #[test]
    fn empty_crafter_cell_contributes_nothing() {
        let groups = group(vec![rec(""), rec("Amy")]);
        assert_eq!(groups.len(), 1);
        let out = finalize(groups.into_values().next().unwrap());
        assert_eq!(out.crafters, "Amy");
    }

    #[test]
    fn distinct_keys_keep_insertion_order() {
        let mut other = rec("Amy");
        other.name = s!("Royal Satchel");

        let groups = group(vec![rec("Zed"), other]);
        let names: Vec<String> = groups.keys().map(|k| k.name.clone()).collect();
        assert_eq!(names, vec![s!("Glorious Banner"), s!("Royal Satchel")]);
    }
}
