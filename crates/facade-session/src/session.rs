//! Interactive editing session.

use facade_catalog::TemplateCatalog;
use facade_model::{Edit, Export, ExportError, Section, TemplateDocument, TemplatePatch};
use facade_render::{render, PageStructure, SelectionTarget, ViewportMode};

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Template not found: {0}")]
    UnknownTemplate(String),
}

/// The document being customised together with the editor's view state.
///
/// Selection and viewport live beside the document and never inside it.
#[derive(Debug, Clone)]
pub struct EditingSession {
    document: TemplateDocument,
    selection: Option<SelectionTarget>,
    mode: ViewportMode,
}

impl EditingSession {
    /// Wrap an existing document.
    pub fn new(document: TemplateDocument) -> Self {
        Self {
            document,
            selection: None,
            mode: ViewportMode::default(),
        }
    }

    /// Start editing a fresh copy of a catalog template.
    pub fn start(catalog: &TemplateCatalog, id: &str) -> Result<Self, SessionError> {
        let document = catalog
            .instantiate(id)
            .ok_or_else(|| SessionError::UnknownTemplate(id.to_string()))?;

        tracing::debug!("Started session on {}", id);
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &TemplateDocument {
        &self.document
    }

    /// Replace the document with another catalog template. Clears the selection.
    pub fn switch_template(
        &mut self,
        catalog: &TemplateCatalog,
        id: &str,
    ) -> Result<(), SessionError> {
        let document = catalog
            .instantiate(id)
            .ok_or_else(|| SessionError::UnknownTemplate(id.to_string()))?;

        self.document = document;
        self.selection = None;
        Ok(())
    }

    pub fn apply(&mut self, edit: &Edit) {
        tracing::debug!("Applying {} edit", edit.field_name());
        self.document = self.document.edit(edit);
    }

    pub fn apply_patch(&mut self, patch: TemplatePatch) {
        self.document = self.document.apply(patch);
    }

    /// Select the header, the footer or a section by reported id.
    pub fn select(&mut self, id: &str) -> &SelectionTarget {
        self.selection.insert(SelectionTarget::from_id(id))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&SelectionTarget> {
        self.selection.as_ref()
    }

    /// The selected section, if the selection names one present in the document.
    pub fn selected_section(&self) -> Option<&Section> {
        let id = self.selection.as_ref()?.section_id()?;
        self.document.section(id)
    }

    pub fn viewport(&self) -> ViewportMode {
        self.mode
    }

    pub fn set_viewport(&mut self, mode: ViewportMode) {
        self.mode = mode;
    }

    /// Render the current document at the current viewport.
    pub fn render(&self) -> PageStructure {
        let selected = self.selection.as_ref().and_then(|s| s.section_id());
        render(&self.document, selected, self.mode)
    }

    pub fn export(&self) -> Result<Export, ExportError> {
        facade_model::export(&self.document)
    }
}
