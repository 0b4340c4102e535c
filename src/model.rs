use serde::{Deserialize, Serialize};

/// Share of assessed stocks per sustainability category, as printed in the
/// stock-status table's summary row. Present only as a complete set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPercentages {
    pub underfished_pct: f64,
    pub max_sustainably_fished_pct: f64,
    pub overfished_pct: f64,
    pub sustainable_pct: f64,
    pub unsustainable_pct: f64,
}

/// Landings mass and its sustainability breakdown from the landings table's
/// summary row. Present only as a complete set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingsSummary {
    pub landings_mt: f64,
    pub landings_underfished_pct: f64,
    pub landings_max_sustainably_fished_pct: f64,
    pub landings_overfished_pct: f64,
    pub landings_sustainable_pct: f64,
    pub landings_unsustainable_pct: f64,
}

/// One extracted region. Absent optional fields serialize as `null` so the
/// exported records always carry the full key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub area_code: String,
    pub name: String,
    pub total_stocks: Option<u32>,
    pub percentages: Option<StockPercentages>,
    pub landings: Option<LandingsSummary>,
    pub main_species: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummaryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub region_count: usize,
    pub stock_status_count: usize,
    pub landings_count: usize,
    pub species_count: usize,
    pub json_export_path: String,
    pub js_export_path: String,
    pub warnings: Vec<String>,
}
