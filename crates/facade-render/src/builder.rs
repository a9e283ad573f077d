//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use facade_catalog::{TemplateCard, TemplateCatalog};
use facade_model::{export, ExportError, TemplateDocument};

use crate::assets::AssetPipeline;
use crate::page::render;
use crate::templates::{FilterCount, GalleryCard, GalleryContext, HtmlRenderer, PageContext};
use crate::viewport::ViewportMode;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Viewport the page is framed in
    pub mode: ViewportMode,

    /// Base URL for the site
    pub base_url: String,

    /// Title of the catalog gallery page
    pub title: String,

    /// Load the Tailwind runtime so document style hints apply
    pub tailwind: bool,

    /// Extra script URLs appended to every page
    pub scripts: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            mode: ViewportMode::Desktop,
            base_url: "/".to_string(),
            title: "Website Builder".to_string(),
            tailwind: true,
            scripts: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Exported template documents
    pub exports: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    renderer: HtmlRenderer,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            renderer: HtmlRenderer::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a single-page site for one document.
    ///
    /// Writes `index.html`, `assets/site.css` and the JSON export of the
    /// document into the output directory.
    pub async fn build(&self, document: &TemplateDocument) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let export = self.write_site(document, &self.config.output_dir, &self.config.base_url)?;

        Ok(BuildResult {
            pages: 1,
            exports: vec![export],
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Build every template in a catalog, plus a gallery page linking them.
    ///
    /// Each template lands in `<id>/` under the output directory.
    pub async fn build_catalog(&self, catalog: &TemplateCatalog) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let results: Vec<Result<PathBuf, BuildError>> = catalog
            .list()
            .par_iter()
            .map(|template| {
                let dir = self.config.output_dir.join(&template.id);
                let base_url = format!("{}{}/", self.config.base_url, template.id);
                self.write_site(template, &dir, &base_url)
            })
            .collect();

        let mut exports = Vec::with_capacity(results.len());
        for result in results {
            exports.push(result?);
        }

        self.write_gallery(catalog)?;

        tracing::info!("Built {} templates", exports.len());

        Ok(BuildResult {
            pages: exports.len() + 1,
            exports,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render one document into `dir`. Returns the export path.
    fn write_site(
        &self,
        document: &TemplateDocument,
        dir: &Path,
        base_url: &str,
    ) -> Result<PathBuf, BuildError> {
        let assets_dir = dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = self.stylesheet(AssetPipeline::generate_css(&document.colors));
        fs::write(assets_dir.join("site.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let context = PageContext {
            title: document.name.clone(),
            page: render(document, None, self.config.mode),
            styles: vec![format!("{}assets/site.css", base_url)],
            scripts: self.config.scripts.clone(),
            tailwind: self.config.tailwind,
        };

        let html = self
            .renderer
            .render_page(&context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        fs::write(dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let path = export(document)?.write_to(dir)?;
        tracing::debug!("Wrote {}", path.display());

        Ok(path)
    }

    /// Write the gallery index and its stylesheet.
    fn write_gallery(&self, catalog: &TemplateCatalog) -> Result<(), BuildError> {
        let base_url = &self.config.base_url;

        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;
        fs::write(
            assets_dir.join("gallery.css"),
            self.stylesheet(AssetPipeline::base_css()),
        )
        .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let context = GalleryContext {
            title: self.config.title.clone(),
            filters: catalog
                .category_counts()
                .into_iter()
                .map(|(filter, count)| FilterCount {
                    label: filter.label().to_string(),
                    count,
                })
                .collect(),
            cards: catalog
                .list()
                .iter()
                .map(|template| GalleryCard {
                    card: TemplateCard::from_document(template),
                    href: format!("{}{}/", base_url, template.id),
                })
                .collect(),
            styles: vec![format!("{}assets/gallery.css", base_url)],
            scripts: self.config.scripts.clone(),
            tailwind: self.config.tailwind,
        };

        let html = self
            .renderer
            .render_gallery(&context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    fn stylesheet(&self, css: String) -> String {
        if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        }
    }
}
