// tests/normalize_e2e.rs
//
// Sheet text in, canonical table out.
//
use craftlist::fetch::sheet;
use craftlist::normalize::{self, RuleSet, rules};

const HEADER: &str =
    "Profession,Item/Enchant Name,Item Type,Item ID,Spell ID,Texture ID,Crafter(s)\n";

#[test]
fn duplicate_rows_merge_into_one_canonical_record() {
    let text = format!(
        "{}\
Tailoring,Glorious Banner,Misc,1,,,Zed\n\
Tailoring,Glorious Banner,Misc,1,,,\"Amy, Zed\"\n",
        HEADER
    );

    let raw = sheet::parse_text(&text);
    assert_eq!(raw.len(), 2);

    let out = normalize::normalize(&RuleSet::builtin(), raw);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].profession, "Tailoring");
    assert_eq!(out[0].item_type, "Misc"); // no rule claims it; passes through
    assert_eq!(out[0].crafters, "Amy, Zed");
}

#[test]
fn types_are_classified_before_display() {
    let text = format!(
        "{}\
Enchanting,Enchant Weapon - Windsong,Misc,,104561,,Amy\n\
Inscription,Inferno Ink,Trade Goods,79017,,,Bob\n\
Leatherworking,Quick Strike Ring,Chest,,,,Carol\n",
        HEADER
    );

    let out = normalize::normalize(&RuleSet::builtin(), sheet::parse_text(&text));
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].item_type, "Weapon Enchant"); // prefix tier
    assert_eq!(out[1].item_type, "Ink");            // keyword tier
    assert_eq!(out[2].item_type, "Chest");          // no fallback entry: unchanged
}

#[test]
fn custom_rules_override_the_builtin_taxonomy() {
    let rules = rules::from_json(
        r#"{
            "prefixes": [["Formula: ", "Recipe"]],
            "keywords": [["Formula", "Scroll"]]
        }"#,
    )
    .unwrap();

    let text = format!("{}Enchanting,Formula: Greater Power,Misc,,,,Amy\n", HEADER);
    let out = normalize::normalize(&rules, sheet::parse_text(&text));
    // Prefix tier wins over the keyword that would also match
    assert_eq!(out[0].item_type, "Recipe");
}

#[test]
fn output_preserves_first_seen_group_order() {
    let text = format!(
        "{}\
Alchemy,Living Steel,Trade Goods,,,,Amy\n\
Tailoring,Royal Satchel,Bag,,,,Bob\n\
Alchemy,Living Steel,Trade Goods,,,,Carol\n",
        HEADER
    );

    let out = normalize::normalize(&RuleSet::builtin(), sheet::parse_text(&text));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "Living Steel");
    assert_eq!(out[0].crafters, "Amy, Carol");
    assert_eq!(out[1].name, "Royal Satchel");
}

#[test]
fn malformed_rows_degrade_instead_of_failing() {
    // Row with no name and no crafters, and a short row
    let text = format!(
        "{}\
Blacksmithing,,Weird Type,,,,\n\
Engineering,Loose Gyroscope\n",
        HEADER
    );

    let out = normalize::normalize(&RuleSet::builtin(), sheet::parse_text(&text));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].item_type, "Weird Type"); // unknown type passes through
    assert_eq!(out[0].crafters, "");
    assert_eq!(out[1].name, "Loose Gyroscope");
}
