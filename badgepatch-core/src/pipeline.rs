//! One straight pass: metadata -> regions -> pixels -> outputs.

use std::path::Path;

use crate::atlas;
use crate::error::{PatchError, Result};
use crate::export::{self, OutputPaths};
use crate::markers::PatchConfig;
use crate::render::{self, PatchReport};
use crate::resolve;

#[derive(Debug, Clone, Copy)]
pub struct PatchJob<'a> {
    pub source_image: &'a Path,
    pub source_xml: &'a Path,
    /// Shared file stem of both outputs.
    pub output_name: &'a str,
    pub out_dir: &'a Path,
    pub asset_dir: &'a Path,
    pub config: &'a PatchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub outputs: OutputPaths,
    pub report: PatchReport,
}

/// Run a job. Every fatal check (parameters, metadata, region matching, source
/// decode) happens before anything is written.
pub fn run(job: &PatchJob<'_>) -> Result<PatchOutcome> {
    validate_output_name(job.output_name)?;
    job.config.params.validate()?;
    if job.config.markers.is_empty() {
        return Err(PatchError::Config("marker table is empty".into()));
    }

    let entries = atlas::load_from_path(job.source_xml)?;
    log::debug!("{} sub-textures in {}", entries.len(), job.source_xml.display());
    let regions = resolve::resolve_regions(&entries, &job.config.markers)?;

    let reader = image::io::Reader::open(job.source_image)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| PatchError::io(job.source_image, e))?;
    let mut image = reader
        .decode()
        .map_err(|e| PatchError::image(job.source_image, e))?
        .to_rgba8();
    let report = render::patch_regions(&mut image, &regions, &job.config.params, job.asset_dir);

    let outputs = export::write_outputs(&image, job.source_xml, job.out_dir, job.output_name)?;
    Ok(PatchOutcome { outputs, report })
}

fn validate_output_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PatchError::Config(format!("output name `{name}` must be a plain file stem")));
    }
    Ok(())
}
