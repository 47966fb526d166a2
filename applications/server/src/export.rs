/// Offline rendering for the `render` and `export` commands
use crate::error::Result;
use folio_core::{render_page, CategoryFilter, PageState, PortfolioRecord};
use std::path::Path;

/// Render the page with `filter` applied and write it to `path`
pub fn write_page(record: &PortfolioRecord, filter: CategoryFilter, path: &Path) -> Result<()> {
    let html = render_page(record, &PageState::default().with_filter(filter));
    std::fs::write(path, html)?;

    tracing::info!("Page written to {:?}", path);
    Ok(())
}

/// The record as pretty-printed JSON
pub fn record_json(record: &PortfolioRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}
