use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fao-regions",
    version,
    about = "FAO marine stock assessment region extraction"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Status(StatusArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Extract(ExtractArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long, default_value = "data/fao-marine-stocks-layout.txt")]
    pub input: PathBuf,

    #[arg(long, default_value = "data/fao-region-summary.json")]
    pub json_out: PathBuf,

    #[arg(long, default_value = "static/js/fao-region-summary.js")]
    pub js_out: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        ExtractArgs {
            input: PathBuf::from("data/fao-marine-stocks-layout.txt"),
            json_out: PathBuf::from("data/fao-region-summary.json"),
            js_out: PathBuf::from("static/js/fao-region-summary.js"),
            manifest_path: None,
            dry_run: false,
        }
    }
}

impl ExtractArgs {
    pub fn resolved_manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("data/manifests/region_summary.json"))
    }
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = "data/manifests/region_summary.json")]
    pub manifest_path: PathBuf,
}
