//! Render a page from the built-in templates

use duet::adapters::StaticContentProvider;
use duet::core::services::TemplateRenderer;
use duet::output::{OutputMode, RenderResult, Report};

/// Render `page` with the sample content
pub fn render(page: &str, mode: OutputMode) -> anyhow::Result<()> {
    let renderer = TemplateRenderer::new(StaticContentProvider::seeded());
    let html = renderer.render(page)?;

    RenderResult {
        page: page.to_string(),
        html,
    }
    .render(mode);
    Ok(())
}
