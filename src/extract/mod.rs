//! Region extraction engine: segments the flattened assessment report into
//! per-area chunks and pulls the stock-status table, landings table, and
//! main-species sentence out of each one.
//!
//! The engine is a pure function of the input text. Reading the report and
//! writing the exports belong to the `extract` command.

use anyhow::Result;

mod segment;
mod species;
mod tables;


pub use segment::{AreaChunk, AreaChunks, segment_areas};
pub use species::{extract_main_species, normalize_species_list};
pub use tables::{TableValues, extract_table_values, scan_numbers};

use crate::model::RegionRecord;

/// Builds the ordered region summary for the whole report: one record per
/// distinct area, in first-appearance order. Malformed or missing tables in
/// a chunk leave that record's optional fields absent; they never fail the
/// run.
pub fn build_region_summary(text: &str) -> Result<Vec<RegionRecord>> {
    let mut regions = Vec::new();

    for chunk in segment_areas(text)? {
        let tables = extract_table_values(chunk.text, chunk.area_idx)?;
        let main_species = extract_main_species(chunk.text, chunk.area_code)?;

        regions.push(RegionRecord {
            area_code: chunk.area_code.to_string(),
            name: chunk.name,
            total_stocks: tables.total_stocks,
            percentages: tables.percentages,
            landings: tables.landings,
            main_species,
        });
    }

    Ok(regions)
}
