use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::ExtractArgs;
use crate::extract::build_region_summary;
use crate::model::{RegionRecord, RegionSummaryManifest};
use crate::util::{now_utc_string, sha256_file, write_json_pretty, write_text};

pub fn run(args: ExtractArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read report: {}", args.input.display()))?;
    let source_sha256 = sha256_file(&args.input)?;

    let regions = build_region_summary(&text)?;
    let coverage = summarize_coverage(&regions);

    for warning in &coverage.warnings {
        debug!(warning = %warning, "optional field absent");
    }

    if args.dry_run {
        info!(
            region_count = regions.len(),
            stock_status_count = coverage.stock_status_count,
            landings_count = coverage.landings_count,
            species_count = coverage.species_count,
            "extract dry-run complete"
        );
        return Ok(());
    }

    // Both artifacts are rendered from the same serialization so they always
    // carry identical data.
    let json = serde_json::to_string_pretty(&regions).context("failed to serialize regions")?;
    write_text(&args.json_out, &format!("{json}\n"))?;
    write_text(&args.js_out, &render_js_module(&json))?;

    let manifest_path = args.resolved_manifest_path();
    let manifest = RegionSummaryManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_sha256,
        region_count: regions.len(),
        stock_status_count: coverage.stock_status_count,
        landings_count: coverage.landings_count,
        species_count: coverage.species_count,
        json_export_path: args.json_out.display().to_string(),
        js_export_path: args.js_out.display().to_string(),
        warnings: coverage.warnings,
    };
    write_json_pretty(&manifest_path, &manifest)?;

    info!(
        region_count = regions.len(),
        json = %args.json_out.display(),
        js = %args.js_out.display(),
        manifest = %manifest_path.display(),
        "exported region summary"
    );

    Ok(())
}

#[derive(Debug, Default)]
struct CoverageCounts {
    stock_status_count: usize,
    landings_count: usize,
    species_count: usize,
    warnings: Vec<String>,
}

fn summarize_coverage(regions: &[RegionRecord]) -> CoverageCounts {
    let mut coverage = CoverageCounts::default();

    for region in regions {
        if region.percentages.is_some() {
            coverage.stock_status_count += 1;
        } else {
            coverage
                .warnings
                .push(format!("Area {}: stock-status summary absent", region.area_code));
        }

        if region.landings.is_some() {
            coverage.landings_count += 1;
        } else {
            coverage
                .warnings
                .push(format!("Area {}: landings summary absent", region.area_code));
        }

        if region.main_species.is_some() {
            coverage.species_count += 1;
        } else {
            coverage
                .warnings
                .push(format!("Area {}: main species sentence absent", region.area_code));
        }
    }

    coverage
}

fn render_js_module(json: &str) -> String {
    format!(
        "// Auto-generated by `fao-regions extract`. Do not edit by hand.\nconst FAO_REGION_SUMMARY = {json};\n"
    )
}
