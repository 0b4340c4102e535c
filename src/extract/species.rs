use anyhow::{Context, Result};
use regex::Regex;

/// Finds the narrative "main species" sentence for `area_code` and returns
/// the normalized species list, or `None` when the chunk has no such
/// sentence. The sentence may wrap across lines, so the match runs in
/// dot-matches-newline mode and the captured phrase has its newlines
/// collapsed to spaces before normalization.
pub fn extract_main_species(chunk: &str, area_code: &str) -> Result<Option<Vec<String>>> {
    let pattern = Regex::new(&format!(
        r"(?is)The main species(?: in terms of landings)? for Area {}.*? are (.+?)\.",
        regex::escape(area_code)
    ))
    .context("failed to compile main species pattern")?;

    let Some(captures) = pattern.captures(chunk) else {
        return Ok(None);
    };

    let phrase = captures[1].replace('\n', " ");
    Ok(Some(normalize_species_list(&phrase)?))
}

/// Turns a raw `"Cod (Gadus morhua), Herring and Haddock."` phrase into a
/// clean ordered list of names. Parenthetical scientific qualifiers are
/// dropped, the final `" and "` conjunction becomes a plain separator, and
/// each piece loses surrounding whitespace, edge periods, and any stray
/// parenthesis characters. Order and literal repeats are preserved.
pub fn normalize_species_list(raw: &str) -> Result<Vec<String>> {
    let parenthetical =
        Regex::new(r"\([^)]*\)").context("failed to compile parenthetical pattern")?;

    let text = parenthetical.replace_all(raw, "");
    let text = text.replace(" and ", ", ");

    let mut names = Vec::new();
    for piece in text.split(',') {
        let stripped = piece.trim().trim_matches('.');
        if stripped.is_empty() {
            continue;
        }
        names.push(stripped.replace(['(', ')'], ""));
    }

    Ok(names)
}
