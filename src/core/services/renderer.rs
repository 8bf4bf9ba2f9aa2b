//! Template renderer
//!
//! Templates use `{field}` placeholders filled from a page's content.
//! `{{` and `}}` produce literal braces. A page with no content, empty
//! content, or no template renders as [`PAGE_NOT_FOUND`]; a template that
//! cannot be filled is an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::PageContent;
use crate::core::ports::ContentProvider;

/// Text rendered for pages that cannot be found
pub const PAGE_NOT_FOUND: &str = "Page not found";

/// Matches escaped braces, placeholders and stray braces, in that priority
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("placeholder pattern is valid")
});

/// Errors that can occur when filling a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template names a field the content does not have
    #[error("template `{page}` references unknown field `{field}`")]
    MissingField {
        /// Page being rendered
        page: String,
        /// Field name inside the braces
        field: String,
    },

    /// A single `{` or `}` with no partner
    #[error("template `{page}` has an unmatched `{brace}` at byte {offset}")]
    UnmatchedBrace {
        /// Page being rendered
        page: String,
        /// The offending brace
        brace: char,
        /// Byte offset in the template
        offset: usize,
    },
}

/// Substitute `content` into `template`
pub fn fill_template(page: &str, template: &str, content: &PageContent) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(token) = caps.get(0) else { continue };
        rendered.push_str(&template[last..token.start()]);

        match token.as_str() {
            "{{" => rendered.push('{'),
            "}}" => rendered.push('}'),
            "{" | "}" => {
                return Err(TemplateError::UnmatchedBrace {
                    page: page.to_string(),
                    brace: if token.as_str() == "{" { '{' } else { '}' },
                    offset: token.start(),
                });
            },
            _ => {
                let field = caps.get(1).map_or("", |m| m.as_str());
                let value = content.get(field).ok_or_else(|| TemplateError::MissingField {
                    page: page.to_string(),
                    field: field.to_string(),
                })?;
                rendered.push_str(value);
            },
        }
        last = token.end();
    }

    rendered.push_str(&template[last..]);
    Ok(rendered)
}

/// Renders pages from a [`ContentProvider`]
#[derive(Debug)]
pub struct TemplateRenderer<P> {
    provider: P,
    templates: HashMap<String, String>,
}

impl<P: ContentProvider> TemplateRenderer<P> {
    /// Create a renderer with the homepage and about templates
    pub fn new(provider: P) -> Self {
        let templates = [
            ("homepage", "<h1>{title}</h1><p>{body}</p>"),
            ("about", "<div class='about'><h2>{title}</h2><div>{body}</div></div>"),
        ]
        .into_iter()
        .map(|(page, template)| (page.to_string(), template.to_string()))
        .collect();

        Self { provider, templates }
    }

    /// Add or replace the template for `page_name`
    pub fn set_template(&mut self, page_name: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(page_name.into(), template.into());
    }

    /// Render a page
    pub fn render(&self, page_name: &str) -> crate::Result<String> {
        let content = self
            .provider
            .get_content(page_name)
            .filter(|content| !content.is_empty());

        let (Some(content), Some(template)) = (content, self.templates.get(page_name)) else {
            return Ok(PAGE_NOT_FOUND.to_string());
        };

        Ok(fill_template(page_name, template, &content)?)
    }

    /// The content provider
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}
