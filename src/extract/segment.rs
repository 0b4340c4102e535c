use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

/// Header lines look like `PART D.3 ... Area 31: Western Central Atlantic`,
/// and the report reprints them as running headers on every page.
const AREA_HEADER_PATTERN: &str = r"(?m)^PART D\.(\d+)[^\n]*?Area (\d+): ([^\n]+)";

/// One distinct area together with the text span that belongs to it.
#[derive(Debug, Clone)]
pub struct AreaChunk<'a> {
    pub area_idx: u32,
    pub area_code: &'a str,
    pub name: String,
    pub text: &'a str,
}

#[derive(Debug)]
struct HeaderMatch<'a> {
    start: usize,
    end: usize,
    area_idx: u32,
    area_code: &'a str,
    raw_name: &'a str,
}

/// Lazy sequence of area chunks in first-appearance order.
#[derive(Debug)]
pub struct AreaChunks<'a> {
    text: &'a str,
    headers: Vec<HeaderMatch<'a>>,
    cursor: usize,
    seen: HashSet<(u32, &'a str)>,
}

/// Splits the full report into one chunk per distinct `(part index, area code)`
/// pair. Each chunk runs from the end of its first header to the start of the
/// next header with a *different* key, or to the end of the document.
pub fn segment_areas(text: &str) -> Result<AreaChunks<'_>> {
    let pattern =
        Regex::new(AREA_HEADER_PATTERN).context("failed to compile area header pattern")?;

    let headers = pattern
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let area_idx = captures.get(1)?.as_str().parse::<u32>().ok()?;
            Some(HeaderMatch {
                start: whole.start(),
                end: whole.end(),
                area_idx,
                area_code: captures.get(2)?.as_str(),
                raw_name: captures.get(3)?.as_str(),
            })
        })
        .collect::<Vec<HeaderMatch<'_>>>();

    Ok(AreaChunks {
        text,
        headers,
        cursor: 0,
        seen: HashSet::new(),
    })
}

impl<'a> Iterator for AreaChunks<'a> {
    type Item = AreaChunk<'a>;

    fn next(&mut self) -> Option<AreaChunk<'a>> {
        while self.cursor < self.headers.len() {
            let index = self.cursor;
            self.cursor += 1;

            let header = &self.headers[index];
            if !self.seen.insert((header.area_idx, header.area_code)) {
                continue;
            }

            // Reprinted headers for the same area extend the chunk; the first
            // header with a different key ends it.
            let mut end_index = index + 1;
            while end_index < self.headers.len() {
                let candidate = &self.headers[end_index];
                if candidate.area_idx != header.area_idx
                    || candidate.area_code != header.area_code
                {
                    break;
                }
                end_index += 1;
            }

            let start = header.end;
            let end = self
                .headers
                .get(end_index)
                .map_or(self.text.len(), |next_header| next_header.start);

            return Some(AreaChunk {
                area_idx: header.area_idx,
                area_code: header.area_code,
                name: clean_area_name(header.raw_name),
                text: &self.text[start..end],
            });
        }

        None
    }
}

/// Strips the trailing page-number artifact (`"Eastern Indian Ocean 207"`)
/// that header reprints carry at the end of the name.
fn clean_area_name(raw_name: &str) -> String {
    let trimmed = raw_name.trim();
    let without_digits = trimmed.trim_end_matches(|character: char| character.is_ascii_digit());

    if without_digits.len() != trimmed.len()
        && without_digits.ends_with(|character: char| character.is_whitespace())
    {
        without_digits.trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}
