//! Template catalog for browsing and instantiating starter templates.
//!
//! The built-in catalog is initialised once per process and only handed out
//! by shared reference. Consumers that want to edit a template take an owned
//! copy through [`TemplateCatalog::instantiate`].

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;
use std::sync::LazyLock;

use facade_model::{from_json, Category, TemplateDocument, UnknownVariant};
use walkdir::WalkDir;

use crate::builtin;

static BUILTIN: LazyLock<TemplateCatalog> = LazyLock::new(TemplateCatalog::with_builtins);

/// An ordered collection of template documents with unique ids.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<TemplateDocument>,
}

/// Category selector used when browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every template
    All,
    /// Templates of one category
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, template: &TemplateDocument) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => template.category == *category,
        }
    }

    /// Label shown next to the filter in listings.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Templates",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TemplateCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the starter templates.
    pub fn with_builtins() -> Self {
        Self {
            templates: builtin::templates(),
        }
    }

    /// The process-wide catalog of starter templates.
    pub fn builtin() -> &'static TemplateCatalog {
        &BUILTIN
    }

    /// All templates in catalog order.
    pub fn list(&self) -> &[TemplateDocument] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&TemplateDocument> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Check if a template exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Take an independent copy of a template for editing.
    pub fn instantiate(&self, id: &str) -> Option<TemplateDocument> {
        self.get(id).cloned()
    }

    /// Templates tagged with `category`, in catalog order.
    ///
    /// A category name that is not recognised yields no templates.
    pub fn filter_by_category(&self, category: &str) -> Vec<&TemplateDocument> {
        match category.parse::<Category>() {
            Ok(category) => self.browse(CategoryFilter::Only(category), ""),
            Err(_) => Vec::new(),
        }
    }

    /// Templates whose name or category contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&TemplateDocument> {
        self.browse(CategoryFilter::All, query)
    }

    /// Templates passing both a category filter and a search query.
    pub fn browse(&self, filter: CategoryFilter, query: &str) -> Vec<&TemplateDocument> {
        let query = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| filter.matches(t) && matches_query(t, &query))
            .collect()
    }

    /// Number of templates per filter, `All` first.
    pub fn category_counts(&self) -> Vec<(CategoryFilter, usize)> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .map(|filter| {
                let count = self.templates.iter().filter(|t| filter.matches(t)).count();
                (filter, count)
            })
            .collect()
    }

    /// Append a template. Ids must stay unique.
    pub fn insert(&mut self, template: TemplateDocument) -> Result<(), CatalogError> {
        if !is_valid_id(&template.id) {
            return Err(CatalogError::InvalidId(template.id));
        }
        if self.contains(&template.id) {
            return Err(CatalogError::DuplicateId(template.id));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Load additional templates from the `*.json` files in a directory.
    ///
    /// Files that fail to parse or reuse an existing id are skipped. Returns
    /// the number of templates added.
    pub fn scan(&mut self, dir: &Path) -> Result<usize, CatalogError> {
        if !dir.exists() {
            return Err(CatalogError::DirectoryNotFound(dir.display().to_string()));
        }

        let mut count = 0;

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !path.is_file() || ext != "json" {
                continue;
            }

            let source = match std::fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };

            let template = match from_json(&source) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            match self.insert(template) {
                Ok(()) => count += 1,
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(count)
    }
}

/// Ids name output directories, so each must be one plain path component.
pub fn is_valid_id(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == id
    )
}

fn matches_query(template: &TemplateDocument, query: &str) -> bool {
    template.name.to_lowercase().contains(query) || template.category.as_str().contains(query)
}

/// All starter templates in catalog order.
pub fn list_templates() -> &'static [TemplateDocument] {
    TemplateCatalog::builtin().list()
}

/// Starter templates of one category.
pub fn filter_by_category(category: &str) -> Vec<&'static TemplateDocument> {
    TemplateCatalog::builtin().filter_by_category(category)
}

/// Starter templates matching a search query.
pub fn search(query: &str) -> Vec<&'static TemplateDocument> {
    TemplateCatalog::builtin().search(query)
}

/// Errors that can occur with the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Templates directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Template id already in catalog: {0}")]
    DuplicateId(String),

    #[error("Template id is not a valid directory name: {0}")]
    InvalidId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use facade_model::{to_json, TemplatePatch};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn ids(templates: &[&TemplateDocument]) -> Vec<String> {
        templates.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn ships_five_templates_in_four_categories() {
        let catalog = TemplateCatalog::builtin();

        assert_eq!(catalog.len(), 5);
        let mut categories: Vec<Category> = catalog.list().iter().map(|t| t.category).collect();
        categories.dedup();
        assert_eq!(categories.len(), 4);
        assert!(catalog.list().iter().all(|t| t.has_unique_section_ids()));
    }

    #[test]
    fn filters_by_category_in_catalog_order() {
        let catalog = TemplateCatalog::builtin();

        assert_eq!(ids(&catalog.filter_by_category("ecommerce")), vec!["ecom-1", "ecom-2"]);
        assert_eq!(ids(&catalog.filter_by_category("blog")), vec!["blog-1"]);
        assert!(catalog.filter_by_category("restaurant").is_empty());
    }

    #[test]
    fn searches_name_case_insensitively() {
        let results = search("fashion");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Fashion Hub");
        assert_eq!(ids(&search("FASHION")), vec!["ecom-2"]);
    }

    #[test]
    fn searches_category_names() {
        assert_eq!(ids(&search("commerce")), vec!["ecom-1", "ecom-2"]);
        assert_eq!(search("").len(), 5);
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn browse_combines_filter_and_query() {
        let catalog = TemplateCatalog::builtin();

        let results = catalog.browse(CategoryFilter::Only(Category::Ecommerce), "modern");
        assert_eq!(ids(&results), vec!["ecom-1"]);

        let results = catalog.browse(CategoryFilter::All, "modern");
        assert_eq!(ids(&results), vec!["ecom-1", "blog-1"]);
    }

    #[test]
    fn counts_templates_per_category() {
        let counts = TemplateCatalog::builtin().category_counts();

        assert_eq!(
            counts,
            vec![
                (CategoryFilter::All, 5),
                (CategoryFilter::Only(Category::Ecommerce), 2),
                (CategoryFilter::Only(Category::Business), 1),
                (CategoryFilter::Only(Category::Portfolio), 1),
                (CategoryFilter::Only(Category::Blog), 1),
            ]
        );
    }

    #[test]
    fn parses_category_filters() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "portfolio".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Portfolio))
        );
        assert!("misc".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn instances_are_independent_of_catalog() {
        let catalog = TemplateCatalog::builtin();
        let original = catalog.get("port-1").unwrap().clone();

        let instance = catalog.instantiate("port-1").unwrap();
        let edited = instance.apply(TemplatePatch::new().name("Mine"));

        assert_eq!(edited.name, "Mine");
        assert_eq!(catalog.get("port-1").unwrap(), &original);
        assert!(catalog.instantiate("nope").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut catalog = TemplateCatalog::with_builtins();
        let copy = catalog.instantiate("biz-1").unwrap();

        assert!(matches!(
            catalog.insert(copy),
            Err(CatalogError::DuplicateId(id)) if id == "biz-1"
        ));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn scans_template_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("templates");
        fs::create_dir_all(&dir).unwrap();

        let mut extra = TemplateCatalog::builtin().instantiate("blog-1").unwrap();
        extra.id = "blog-2".to_string();
        extra.name = "Night Blog".to_string();
        fs::write(dir.join("night.json"), to_json(&extra).unwrap()).unwrap();

        // Duplicate id, broken JSON and non-JSON files are skipped.
        let dup = TemplateCatalog::builtin().instantiate("blog-1").unwrap();
        fs::write(dir.join("dup.json"), to_json(&dup).unwrap()).unwrap();
        fs::write(dir.join("broken.json"), "{").unwrap();
        fs::write(dir.join("notes.txt"), "hello").unwrap();

        let mut catalog = TemplateCatalog::with_builtins();
        let count = catalog.scan(&dir).unwrap();

        assert_eq!(count, 1);
        assert_eq!(catalog.len(), 6);
        assert_eq!(ids(&catalog.filter_by_category("blog")), vec!["blog-1", "blog-2"]);
    }

    #[test]
    fn rejects_ids_that_are_not_plain_names() {
        let mut catalog = TemplateCatalog::new();

        for id in ["../escaped", "/tmp/abs", "a/b", "..", ".", "", "shop/"] {
            let mut doc = TemplateCatalog::builtin().instantiate("ecom-1").unwrap();
            doc.id = id.to_string();
            assert!(
                matches!(catalog.insert(doc), Err(CatalogError::InvalidId(_))),
                "accepted {:?}",
                id
            );
        }
        assert!(catalog.is_empty());
        assert!(is_valid_id("shop-9"));
    }

    #[test]
    fn scan_errors_on_missing_directory() {
        let temp = tempdir().unwrap();
        let mut catalog = TemplateCatalog::new();

        let result = catalog.scan(&temp.path().join("missing"));
        assert!(matches!(result, Err(CatalogError::DirectoryNotFound(_))));
    }
}
