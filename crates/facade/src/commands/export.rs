//! JSON export command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use facade_session::SiteFile;

/// Run the export command.
pub async fn run(config: &Path, output: PathBuf) -> Result<()> {
    let session = SiteFile::load(config)?
        .session()
        .context("Failed to prepare template")?;

    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let path = session.export()?.write_to(&output)?;

    tracing::info!("Exported {} to {}", session.document().name, path.display());

    Ok(())
}
