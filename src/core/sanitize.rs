// src/core/sanitize.rs

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Turn a profession name into a safe file stem ("Jewelcrafting" → "Jewelcrafting",
/// junk/empty → "profession_<n>").
pub fn sanitize_profession_filename(name: &str, n: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("profession_{}", n) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Royal   Satchel "), "Royal Satchel");
        assert_eq!(normalize_ws("\tInferno\nInk"), "Inferno Ink");
    }

    #[test]
    fn filename_sanitizes() {
        assert_eq!(sanitize_profession_filename("Jewelcrafting", 0), "Jewelcrafting");
        assert_eq!(sanitize_profession_filename("Way of the Wok?!", 1), "Way_of_the_Wok");
        assert_eq!(sanitize_profession_filename("???", 2), "profession_2");
    }
}
