use std::path::PathBuf;

use anyhow::{Context, Result};
use badgepatch_core::{assets, export, markers, PatchConfig, PatchJob, Preset, VERSION};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "badgepatch", version = VERSION, about = "Redraw badge regions of a packed UI atlas")]
struct Cli {
    /// Source atlas image (PNG)
    source_image: PathBuf,
    /// Source sub-texture metadata (XML)
    source_xml: PathBuf,
    /// Stem of the written `.dds` and `.xml` files
    output_name: String,
    /// Built-in marker table, ignored when --markers is given
    #[arg(long, default_value_t = Preset::Classic)]
    preset: Preset,
    /// YAML marker table replacing the preset
    #[arg(long)]
    markers: Option<PathBuf>,
    /// Icon directory (defaults to the bundled `assets` directory)
    #[arg(long)]
    assets: Option<PathBuf>,
    #[arg(long, default_value = export::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Icon edge as a fraction of the region edge
    #[arg(long)]
    icon_scale: Option<f64>,
    /// Fraction trimmed from each side of the region before drawing a circle
    #[arg(long)]
    circle_inset: Option<f64>,
    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Result<PatchConfig> {
        let mut config = match &self.markers {
            Some(path) => markers::load_config_from_path(path)
                .with_context(|| format!("loading marker table {}", path.display()))?,
            None => PatchConfig::from_preset(self.preset),
        };
        if let Some(scale) = self.icon_scale { config.params.icon_scale = scale; }
        if let Some(inset) = self.circle_inset { config.params.circle_inset = inset; }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let config = cli.config()?;
    let asset_dir = assets::locate_asset_dir(cli.assets.as_deref());
    log::debug!("icon directory: {}", asset_dir.display());
    let job = PatchJob {
        source_image: &cli.source_image,
        source_xml: &cli.source_xml,
        output_name: &cli.output_name,
        out_dir: &cli.output_dir,
        asset_dir: &asset_dir,
        config: &config,
    };
    let outcome = badgepatch_core::run(&job)
        .with_context(|| format!("patching {} with {}", cli.source_image.display(), cli.source_xml.display()))?;

    println!(
        "Patched {} region(s), {} left blank -> {}",
        outcome.report.applied.len(),
        outcome.report.skipped.len(),
        outcome.outputs.image.display()
    );
    Ok(())
}
