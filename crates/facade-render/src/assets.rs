//! Stylesheet generation for rendered sites.

use facade_model::Palette;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site stylesheet with the palette exposed as custom properties.
    pub fn generate_css(palette: &Palette) -> String {
        let mut css = String::from(":root {\n");
        for (slot, value) in palette.entries() {
            css.push_str(&format!("  --color-{}: {};\n", slot, value));
        }
        css.push_str("}\n\n");
        css.push_str(BASE_CSS);
        css
    }

    /// Structural rules without palette properties.
    pub fn base_css() -> String {
        BASE_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Structural rules for the markup in templates.rs. Utility classes carried
// in document styles are resolved by the Tailwind runtime when enabled.
const BASE_CSS: &str = r#"* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--color-text);
  background: var(--color-background);
}

.facade-stage {
  display: flex;
  justify-content: center;
  min-height: 100vh;
  background: #f3f4f6;
}

.facade-frame {
  background: var(--color-background);
  overflow-y: auto;
  transition: width 0.3s, height 0.3s;
}

.facade-tablet,
.facade-mobile {
  margin: 2rem 0;
  border-radius: 0.5rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
}

[data-select] {
  cursor: pointer;
}

.grid {
  display: grid;
}

.facade-selected {
  outline: 2px solid #3b82f6;
  outline-offset: -2px;
}

.facade-badge {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  font-size: 0.75rem;
}

.facade-menu summary {
  list-style: none;
  cursor: pointer;
  font-size: 1.25rem;
}

.facade-menu ul {
  list-style: none;
  margin: 0.5rem 0 0;
  padding: 0;
}

.facade-feature-icon,
.facade-contact-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  margin-right: 1rem;
  border-radius: 0.5rem;
  color: #fff;
}

.facade-dot {
  display: inline-block;
  width: 0.5rem;
  height: 0.5rem;
  margin-right: 0.75rem;
  border-radius: 9999px;
}

.facade-swatch {
  display: inline-block;
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  border: 1px solid #e5e7eb;
}

.facade-placeholder {
  min-height: 8rem;
}
"#;
