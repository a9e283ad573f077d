//! Create a site file from a starter template.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use facade_catalog::TemplateCatalog;

/// Template used when none is given.
const DEFAULT_TEMPLATE: &str = "ecom-1";

/// Run the init command.
pub async fn run(config: &Path, template: Option<String>, yes: bool) -> Result<()> {
    tracing::info!("Initializing facade site...");

    if config.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config.display()
        );
        return Ok(());
    }

    let catalog = TemplateCatalog::builtin();
    let template = template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let Some(document) = catalog.get(&template) else {
        let ids: Vec<&str> = catalog.list().iter().map(|t| t.id.as_str()).collect();
        anyhow::bail!(
            "Unknown template: {}. Available: {}",
            template,
            ids.join(", ")
        );
    };

    if let Some(parent) = config.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create site directory")?;
    }

    fs::write(config, default_config(&template))
        .with_context(|| format!("Failed to write {}", config.display()))?;
    tracing::info!("Created {} from {}", config.display(), document.name);

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'facade dev' to start the preview server.");

    Ok(())
}

fn default_config(template: &str) -> String {
    format!(
        r#"# Facade Site Configuration

[site]
# Catalog id of the starting template
template = "{template}"

# Output directory for built site
output = "dist"

# Preview viewport: desktop, tablet or mobile
viewport = "desktop"

# Directory of extra template JSON files
# templates_dir = "templates"

# Enable CSS minification
minify = true

# Edits are replayed in order on top of the template, for example:
#
# [[edits]]
# field = "header_title"
# value = "My Store"
#
# [[edits]]
# field = "section_content"
# section = "hero-1"
# value = "Handmade goods, shipped worldwide."
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use facade_session::SiteFile;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_loadable_site_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");

        run(&path, Some("blog-1".to_string()), false).await.unwrap();

        let site = SiteFile::load(&path).unwrap();
        assert_eq!(site.site.template, "blog-1");
        assert!(site.edits.is_empty());
        assert_eq!(site.session().unwrap().document().name, "Modern Blog");
    }

    #[tokio::test]
    async fn keeps_existing_file_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\ntemplate = \"biz-1\"\n").unwrap();

        run(&path, Some("port-1".to_string()), false).await.unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("biz-1"));

        run(&path, Some("port-1".to_string()), true).await.unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("port-1"));
    }

    #[tokio::test]
    async fn rejects_unknown_template() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");

        let err = run(&path, Some("shop-9".to_string()), false).await.unwrap_err();

        assert!(err.to_string().contains("ecom-1, ecom-2, biz-1, port-1, blog-1"));
        assert!(!path.exists());
    }
}
