//! Catalog listing command.

use std::path::Path;

use anyhow::{Context, Result};
use facade_catalog::{CategoryFilter, TemplateCard};
use facade_session::SiteFile;

/// Run the list command.
pub async fn run(config: &Path, category: Option<String>, search: Option<String>) -> Result<()> {
    let catalog = SiteFile::load(config)?
        .catalog()
        .context("Failed to load templates")?;

    let filter = match category {
        Some(category) => category
            .parse::<CategoryFilter>()
            .with_context(|| format!("Unknown category: {}", category))?,
        None => CategoryFilter::All,
    };
    let query = search.unwrap_or_default();

    let counts: Vec<String> = catalog
        .category_counts()
        .into_iter()
        .map(|(filter, count)| format!("{} ({})", filter.label(), count))
        .collect();
    println!("{}\n", counts.join("  "));

    let templates = catalog.browse(filter, &query);
    if templates.is_empty() {
        println!("No templates found");
        return Ok(());
    }

    for template in templates {
        println!("{}", format_card(&TemplateCard::from_document(template)));
    }

    Ok(())
}

fn format_card(card: &TemplateCard) -> String {
    format!(
        "{:<8} {:<20} {:<12} {}\n         {}",
        card.id,
        card.name,
        card.category.label(),
        card.swatches.join(" "),
        card.description
    )
}
