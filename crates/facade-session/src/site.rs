//! Site file (`site.toml`): the chosen template plus its edit history.

use std::fs;
use std::path::{Path, PathBuf};

use facade_catalog::{CatalogError, TemplateCatalog};
use facade_model::Edit;
use facade_render::ViewportMode;
use serde::{Deserialize, Serialize};

use crate::session::{EditingSession, SessionError};

/// Default site file name.
pub const SITE_FILE: &str = "site.toml";

/// Parsed `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteFile {
    #[serde(default)]
    pub site: SiteConfig,

    /// Edits replayed in order on top of the template
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edits: Vec<Edit>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Catalog id of the starting template
    #[serde(default = "default_template")]
    pub template: String,

    /// Output directory for builds
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub viewport: ViewportMode,

    /// Directory of extra template JSON files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
            viewport: ViewportMode::default(),
            templates_dir: None,
            minify: default_minify(),
        }
    }
}

fn default_template() -> String {
    "ecom-1".to_string()
}
fn default_output() -> PathBuf {
    PathBuf::from("dist")
}
fn default_minify() -> bool {
    true
}

/// Errors from loading or using a site file.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize site file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl SiteFile {
    /// A site file starting from `template` with no edits.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                template: template.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load a site file. A missing file yields the defaults.
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self {
                root,
                ..Default::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut site = Self::parse(&content).map_err(|source| SiteError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        site.root = root;

        tracing::info!("Loaded config from {}", path.display());
        Ok(site)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, SiteError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the site file to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SiteError> {
        fs::write(path, self.to_toml()?).map_err(|source| SiteError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Output directory resolved against the site file's directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.site.output)
    }

    /// Built-in templates plus any found in `templates_dir`.
    pub fn catalog(&self) -> Result<TemplateCatalog, SiteError> {
        let mut catalog = TemplateCatalog::with_builtins();

        if let Some(dir) = &self.site.templates_dir {
            let count = catalog.scan(&self.root.join(dir))?;
            tracing::info!("Loaded {} templates from {}", count, dir.display());
        }

        Ok(catalog)
    }

    /// Instantiate the template and replay the edit list.
    pub fn session(&self) -> Result<EditingSession, SiteError> {
        self.session_in(&self.catalog()?)
    }

    /// Like [`SiteFile::session`], against an already loaded catalog.
    pub fn session_in(&self, catalog: &TemplateCatalog) -> Result<EditingSession, SiteError> {
        let mut session = EditingSession::start(catalog, &self.site.template)?;

        for edit in &self.edits {
            session.apply(edit);
        }
        session.set_viewport(self.site.viewport);

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facade_model::{to_json, ColorSlot};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SITE: &str = r##"
[site]
template = "port-1"
output = "public"
viewport = "tablet"

[[edits]]
field = "header_title"
value = "Sam Rivera"

[[edits]]
field = "section_content"
section = "gallery-2"
value = "Selected work, 2019 to now."

[[edits]]
field = "color"
slot = "accent"
value = "#FF0000"
"##;

    #[test]
    fn parses_site_and_edits() {
        let site = SiteFile::parse(SITE).unwrap();

        assert_eq!(site.site.template, "port-1");
        assert_eq!(site.site.viewport, ViewportMode::Tablet);
        assert!(site.site.minify);
        assert_eq!(site.edits.len(), 3);
        assert_eq!(
            site.edits[2],
            Edit::Color {
                slot: ColorSlot::Accent,
                value: "#FF0000".to_string()
            }
        );
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let site = SiteFile::load(&temp.path().join(SITE_FILE)).unwrap();

        assert_eq!(site.site, SiteConfig::default());
        assert_eq!(site.site.template, "ecom-1");
        assert_eq!(site.output_dir(), temp.path().join("dist"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SITE_FILE);
        fs::write(&path, "[site\ntemplate = ").unwrap();

        assert!(matches!(SiteFile::load(&path), Err(SiteError::Parse { .. })));
    }

    #[test]
    fn session_replays_edits() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SITE_FILE);
        fs::write(&path, SITE).unwrap();

        let site = SiteFile::load(&path).unwrap();
        let session = site.session().unwrap();
        let doc = session.document();

        assert_eq!(doc.header.title, "Sam Rivera");
        assert_eq!(
            doc.section("gallery-2").unwrap().content,
            "Selected work, 2019 to now."
        );
        assert_eq!(doc.colors.accent, "#FF0000");
        assert_eq!(session.viewport(), ViewportMode::Tablet);
        assert_eq!(site.output_dir(), temp.path().join("public"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let site = SiteFile::new("shop-9");

        assert!(matches!(
            site.session(),
            Err(SiteError::Session(SessionError::UnknownTemplate(_)))
        ));
    }

    #[test]
    fn loads_extra_templates() {
        let temp = tempdir().unwrap();
        let templates = temp.path().join("templates");
        fs::create_dir_all(&templates).unwrap();

        let mut custom = TemplateCatalog::builtin().instantiate("biz-1").unwrap();
        custom.id = "biz-2".to_string();
        custom.name = "Law Office".to_string();
        fs::write(templates.join("law.json"), to_json(&custom).unwrap()).unwrap();

        let path = temp.path().join(SITE_FILE);
        fs::write(
            &path,
            "[site]\ntemplate = \"biz-2\"\ntemplates_dir = \"templates\"\n",
        )
        .unwrap();

        let session = SiteFile::load(&path).unwrap().session().unwrap();
        assert_eq!(session.document().name, "Law Office");
    }

    #[test]
    fn saves_and_reloads() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SITE_FILE);

        let mut site = SiteFile::new("blog-1");
        site.edits.push(Edit::HeaderSearch { value: false });
        site.save(&path).unwrap();

        let loaded = SiteFile::load(&path).unwrap();
        assert_eq!(loaded.site.template, "blog-1");
        assert_eq!(loaded.edits, site.edits);
    }
}
