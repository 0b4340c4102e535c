use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{LandingsSummary, StockPercentages};

/// Values pulled from one area's stock-status and landings tables. Each part
/// is independently absent when its anchor or summary row is missing.
#[derive(Debug, Default)]
pub struct TableValues {
    pub total_stocks: Option<u32>,
    pub percentages: Option<StockPercentages>,
    pub landings: Option<LandingsSummary>,
}

/// Ordered numeric tokens in `text`, left to right. The alternation tries the
/// decimal form first so `12.5` never splits into `12` and `5`.
pub fn scan_numbers(text: &str) -> Result<Vec<f64>> {
    let pattern = Regex::new(r"\d+\.\d+|\d+").context("failed to compile number pattern")?;

    Ok(pattern
        .find_iter(text)
        .filter_map(|token| token.as_str().parse::<f64>().ok())
        .collect())
}

/// Parses the `TABLE D.<idx>.2` stock-status summary row and the
/// `TABLE D.<idx>.3` landings summary row out of one area chunk.
///
/// Both tables vary in how much header and footnote text precedes the summary
/// row, so the row is found by shape (a `Total` label, a digit-led line)
/// rather than by position. Only the first qualifying row counts; a row with
/// fewer than 6 numbers leaves the whole structure absent.
pub fn extract_table_values(chunk: &str, area_idx: u32) -> Result<TableValues> {
    let mut values = TableValues::default();

    let stock_anchor = Regex::new(&format!(r"(?m)^\s*TABLE D\.{area_idx}\.2"))
        .context("failed to compile stock-status table anchor")?;

    if let Some(anchor) = stock_anchor.find(chunk) {
        let table_text = &chunk[anchor.end()..];
        if let Some(line) = table_text
            .lines()
            .find(|line| line.trim().starts_with("Total"))
        {
            let numbers = scan_numbers(line)?;
            if numbers.len() >= 6 {
                values.total_stocks = Some(numbers[0] as u32);
                values.percentages = Some(StockPercentages {
                    underfished_pct: numbers[1],
                    max_sustainably_fished_pct: numbers[2],
                    overfished_pct: numbers[3],
                    sustainable_pct: numbers[4],
                    unsustainable_pct: numbers[5],
                });
            }
        }
    }

    let landings_anchor = Regex::new(&format!(r"(?m)^\s*TABLE D\.{area_idx}\.3"))
        .context("failed to compile landings table anchor")?;

    if let Some(anchor) = landings_anchor.find(chunk) {
        let table_text = &chunk[anchor.end()..];
        let summary_row = table_text.lines().map(str::trim).find(|line| {
            !line.is_empty()
                && line
                    .chars()
                    .next()
                    .is_some_and(|character| character.is_ascii_digit())
        });

        if let Some(line) = summary_row {
            let numbers = scan_numbers(line)?;
            if numbers.len() >= 6 {
                values.landings = Some(LandingsSummary {
                    landings_mt: numbers[0],
                    landings_underfished_pct: numbers[1],
                    landings_max_sustainably_fished_pct: numbers[2],
                    landings_overfished_pct: numbers[3],
                    landings_sustainable_pct: numbers[4],
                    landings_unsustainable_pct: numbers[5],
                });
            }
        }
    }

    Ok(values)
}
