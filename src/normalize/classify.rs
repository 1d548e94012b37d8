// src/normalize/classify.rs

use std::collections::HashMap;

use regex::Regex;

/// Tier-1 rule: item name starts with `prefix`.
#[derive(Clone, Debug)]
pub struct PrefixRule {
    pub prefix: String,
    pub item_type: String,
}

/// Tier-2 rule: item name contains `keyword` as a whole word (case-insensitive).
#[derive(Clone, Debug)]
pub struct KeywordRule {
    pub keyword: String,
    pub item_type: String,
    pattern: Regex,
}

impl KeywordRule {
    /// Compile the whole-word matcher for a keyword. Keywords are escaped, so
    /// this only fails on pathological input (e.g. oversized patterns).
    pub fn new(keyword: &str, item_type: &str) -> Option<Self> {
        let pattern = match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))) {
            Ok(p) => p,
            Err(e) => {
                loge!("Skipping keyword rule {:?}: {}", keyword, e);
                return None;
            }
        };
        Some(Self { keyword: s!(keyword), item_type: s!(item_type), pattern })
    }
}

/// The three ordered rule tiers the classifier runs, in fixed precedence:
/// name prefix, then whole-word keyword, then raw-type fallback.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    prefix_rules: Vec<PrefixRule>,
    keyword_rules: Vec<KeywordRule>,
    fallback: HashMap<String, String>,
}

impl RuleSet {
    /// Build from plain (pattern, type) pairs. Keyword rules that fail to
    /// compile are dropped with a log line rather than failing the set.
    pub fn new<'a>(
        prefixes: impl IntoIterator<Item = (&'a str, &'a str)>,
        keywords: impl IntoIterator<Item = (&'a str, &'a str)>,
        fallback: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            prefix_rules: prefixes
                .into_iter()
                .map(|(p, t)| PrefixRule { prefix: s!(p), item_type: s!(t) })
                .collect(),
            keyword_rules: keywords
                .into_iter()
                .filter_map(|(k, t)| KeywordRule::new(k, t))
                .collect(),
            fallback: fallback
                .into_iter()
                .map(|(k, v)| (s!(k), s!(v)))
                .collect(),
        }
    }

    /// Built-in game taxonomy (see `rules.rs`).
    pub fn builtin() -> Self {
        super::rules::builtin()
    }

    /// Map a raw sheet item type + item name to one canonical type label.
    ///
    /// Total over its inputs: always returns a label, possibly the raw type
    /// unchanged. An empty name just skips the name-based tiers.
    pub fn classify(&self, raw_type: &str, name: &str) -> String {
        if !name.is_empty() {
            for r in &self.prefix_rules {
                if name.starts_with(&r.prefix) {
                    return r.item_type.clone();
                }
            }
            for r in &self.keyword_rules {
                if r.pattern.is_match(name) {
                    return r.item_type.clone();
                }
            }
        }
        match self.fallback.get(raw_type) {
            Some(t) => t.clone(),
            None => s!(raw_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_set() -> RuleSet {
        RuleSet::new(
            [("Formula: ", "Recipe")],
            [("Formula", "Scroll"), ("Ink", "Ink")],
            [("Holdable", "Off-hand")],
        )
    }

    #[test]
    fn prefix_tier_beats_keyword_tier() {
        // Both tiers match "Formula…"; the prefix rule must win.
        let rules = small_set();
        assert_eq!(rules.classify("Misc", "Formula: Greater Power"), "Recipe");
    }

    #[test]
    fn keyword_matches_whole_words_only() {
        let rules = small_set();
        assert_eq!(rules.classify("Trade Goods", "Inferno Ink"), "Ink");
        // "Inkling" contains the letters but not the word
        assert_eq!(rules.classify("Trade Goods", "Inkling"), "Trade Goods");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let rules = small_set();
        assert_eq!(rules.classify("Trade Goods", "INFERNO INK"), "Ink");
    }

    #[test]
    fn empty_name_skips_name_tiers() {
        let rules = small_set();
        assert_eq!(rules.classify("Holdable", ""), "Off-hand");
        assert_eq!(rules.classify("Chest", ""), "Chest"); // no fallback entry
    }

    #[test]
    fn unknown_raw_type_passes_through() {
        let rules = small_set();
        assert_eq!(rules.classify("Chest", "Robes of Creation"), "Chest");
        assert_eq!(rules.classify("", "Some Unmatched Name"), "");
    }

    #[test]
    fn classify_is_deterministic() {
        let rules = small_set();
        let a = rules.classify("Trade Goods", "Inferno Ink");
        let b = rules.classify("Trade Goods", "Inferno Ink");
        assert_eq!(a, b);
    }
}
