use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::model::RegionSummaryManifest;

pub fn run(args: StatusArgs) -> Result<()> {
    if !args.manifest_path.exists() {
        warn!(path = %args.manifest_path.display(), "run manifest missing; nothing extracted yet");
        return Ok(());
    }

    let raw = fs::read(&args.manifest_path)
        .with_context(|| format!("failed to read {}", args.manifest_path.display()))?;
    let manifest: RegionSummaryManifest = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", args.manifest_path.display()))?;

    info!(
        generated_at = %manifest.generated_at,
        source = %manifest.source_path,
        source_sha256 = %manifest.source_sha256,
        region_count = manifest.region_count,
        stock_status_count = manifest.stock_status_count,
        landings_count = manifest.landings_count,
        species_count = manifest.species_count,
        warning_count = manifest.warnings.len(),
        "loaded run manifest"
    );

    check_artifact(Path::new(&manifest.json_export_path), "json export");
    check_artifact(Path::new(&manifest.js_export_path), "js export");

    Ok(())
}

fn check_artifact(path: &Path, label: &str) {
    if path.exists() {
        info!(path = %path.display(), artifact = label, "export artifact present");
    } else {
        warn!(path = %path.display(), artifact = label, "export artifact missing");
    }
}
