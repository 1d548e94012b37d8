// src/normalize/rules.rs
//
// Rule *data* for the classifier. The tables are configuration, not logic:
// the built-in set below ships with the binary, and `from_json_file` loads
// the same three tables from disk (`--rules`).

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::classify::RuleSet;

/* ---------------- Built-in taxonomy ---------------- */

// Tier 1: name prefixes, in declared order. "Enchant Weapon - " must come
// before the plain "Enchant " rule.
const PREFIX_RULES: &[(&str, &str)] = &[
    ("Enchant Weapon - ", "Weapon Enchant"),
    ("Enchant ", "Enchant"),
    ("Formula: ", "Recipe"),
    ("Pattern: ", "Recipe"),
    ("Plans: ", "Recipe"),
    ("Recipe: ", "Recipe"),
    ("Design: ", "Recipe"),
    ("Schematic: ", "Recipe"),
    ("Technique: ", "Recipe"),
    ("Glyph of ", "Glyph"),
    ("Scroll of ", "Scroll"),
    ("Flask of ", "Flask"),
    ("Elixir of ", "Elixir"),
    ("Potion of ", "Potion"),
];

// Tier 2: whole-word keywords (Ink, gem cuts, etc.), in declared order.
const KEYWORD_RULES: &[(&str, &str)] = &[
    ("Ink", "Ink"),
    ("Rune", "Rune"),
    ("Scope", "Scope"),
    ("Belt Buckle", "Belt Buckle"),
    ("Spellthread", "Leg Enchant"),
    ("Leg Armor", "Leg Enchant"),
    ("Satchel", "Bag"),
    ("Bag", "Bag"),
    ("Shield", "Off-hand"),
    ("Ruby", "Red Gem"),
    ("River's Heart", "Blue Gem"),
    ("Sun's Radiance", "Yellow Gem"),
    ("Amethyst", "Purple Gem"),
    ("Onyx", "Orange Gem"),
    ("Jade", "Green Gem"),
    ("Primal Diamond", "Meta Gem"),
];

// Tier 3: API inventory-type → gear-slot label. Types without an entry
// ("Chest", "Misc", …) pass through untouched.
const FALLBACK_MAP: &[(&str, &str)] = &[
    ("Head", "Helm"),
    ("Shoulder", "Shoulders"),
    ("Robe", "Chest"),
    ("Hand", "Hands"),
    ("Wrist", "Wrists"),
    ("Feet", "Boots"),
    ("Finger", "Ring"),
    ("Cloak", "Back"),
    ("Holdable", "Off-hand"),
    ("Held In Off-hand", "Off-hand"),
    ("One-Hand", "Main Hand"),
    ("Two-Hand", "Main Hand"),
    ("Ranged", "Main Hand"),
];

pub fn builtin() -> RuleSet {
    RuleSet::new(
        PREFIX_RULES.iter().copied(),
        KEYWORD_RULES.iter().copied(),
        FALLBACK_MAP.iter().copied(),
    )
}

/* ---------------- User-supplied tables ---------------- */

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    prefixes: Vec<(String, String)>,
    #[serde(default)]
    keywords: Vec<(String, String)>,
    #[serde(default)]
    fallback: Vec<(String, String)>,
}

/// Load the three rule tables from a JSON file:
/// `{"prefixes": [["Formula: ","Recipe"]], "keywords": [...], "fallback": [...]}`
pub fn from_json_file(path: &Path) -> Result<RuleSet, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    from_json(&text)
}

pub fn from_json(text: &str) -> Result<RuleSet, Box<dyn Error>> {
    let file: RuleFile = serde_json::from_str(text)?;
    Ok(RuleSet::new(
        file.prefixes.iter().map(|(a, b)| (a.as_str(), b.as_str())),
        file.keywords.iter().map(|(a, b)| (a.as_str(), b.as_str())),
        file.fallback.iter().map(|(a, b)| (a.as_str(), b.as_str())),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_prefix_order_matters() {
        let rules = builtin();
        assert_eq!(rules.classify("", "Enchant Weapon - Windsong"), "Weapon Enchant");
        assert_eq!(rules.classify("", "Enchant Bracer - Greater Agility"), "Enchant");
    }

    #[test]
    fn builtin_leaves_plain_slots_alone() {
        let rules = builtin();
        // No fallback entry for "Chest"; the label is already canonical.
        assert_eq!(rules.classify("Chest", "Robes of Creation"), "Chest");
        assert_eq!(rules.classify("Head", "Crown of the Destroyer"), "Helm");
    }

    #[test]
    fn json_tables_load_and_classify() {
        let rules = from_json(
            r#"{
                "prefixes": [["Formula: ", "Recipe"]],
                "keywords": [["Formula", "Scroll"], ["Ink", "Ink"]],
                "fallback": [["Holdable", "Off-hand"]]
            }"#,
        )
        .unwrap();
        assert_eq!(rules.classify("Misc", "Formula: Greater Power"), "Recipe");
        assert_eq!(rules.classify("Holdable", ""), "Off-hand");
    }

    #[test]
    fn json_missing_sections_default_empty() {
        let rules = from_json(r#"{"keywords": [["Ink", "Ink"]]}"#).unwrap();
        assert_eq!(rules.classify("Chest", "Inferno Ink"), "Ink");
        assert_eq!(rules.classify("Chest", "Plain Thing"), "Chest");
    }
}
