//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use facade_render::{BuildConfig, StaticBuilder, ViewportMode};
use facade_session::SiteFile;

/// Run the build command.
pub async fn run(
    config: &Path,
    output: Option<PathBuf>,
    viewport: Option<ViewportMode>,
    minify: Option<bool>,
    all: bool,
) -> Result<()> {
    tracing::info!("Building site...");

    let site = SiteFile::load(config)?;

    let build_config = BuildConfig {
        output_dir: output.unwrap_or_else(|| site.output_dir()),
        minify: minify.unwrap_or(site.site.minify),
        mode: viewport.unwrap_or(site.site.viewport),
        ..Default::default()
    };
    let builder = StaticBuilder::new(build_config);

    let result = if all {
        let catalog = site.catalog().context("Failed to load templates")?;
        builder.build_catalog(&catalog).await?
    } else {
        let session = site.session().context("Failed to prepare template")?;
        builder.build(session.document()).await?
    };

    tracing::info!(
        "Built {} pages with {} exports in {}ms",
        result.pages,
        result.exports.len(),
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
