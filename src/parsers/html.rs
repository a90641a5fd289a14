//! Selector-driven queries over a parsed HTML tree.
//!
//! Extractors describe *what* they want with CSS selectors; walking the
//! tree stays in here.

use crate::error::{GatewayError, Result};
use scraper::{ElementRef, Html, Selector};

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| GatewayError::Parse(format!("bad selector '{}': {}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// A parsed HTML document
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document. html5ever recovers from any malformed
    /// markup (stray NULs become U+FFFD), so this cannot fail.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// All elements matching `css`, in document order
    pub fn select(&self, css: &str) -> Result<Vec<Fragment<'_>>> {
        let selector = compile(css)?;
        Ok(self.html.select(&selector).map(Fragment).collect())
    }

    /// Trimmed text of the first element matching `css`
    pub fn first_text(&self, css: &str) -> Result<Option<String>> {
        let selector = compile(css)?;
        Ok(self.html.select(&selector).next().map(element_text))
    }

    /// Attribute value of the first element matching `css`
    pub fn first_attr(&self, css: &str, attr: &str) -> Result<Option<String>> {
        let selector = compile(css)?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .and_then(|e| e.value().attr(attr))
            .map(|s| s.to_string()))
    }
}

/// One matched element; nested queries are relative to it
#[derive(Clone, Copy)]
pub struct Fragment<'a>(ElementRef<'a>);

impl Fragment<'_> {
    /// Text of every descendant matching `css`, concatenated then trimmed
    pub fn all_text(&self, css: &str) -> Result<String> {
        let selector = compile(css)?;
        let text: String = self.0.select(&selector).flat_map(|e| e.text()).collect();
        Ok(text.trim().to_string())
    }

    /// Trimmed text of the first descendant matching `css`
    pub fn first_text(&self, css: &str) -> Result<Option<String>> {
        let selector = compile(css)?;
        Ok(self.0.select(&selector).next().map(element_text))
    }

    /// Attribute value of the first descendant matching `css`
    pub fn first_attr(&self, css: &str, attr: &str) -> Result<Option<String>> {
        let selector = compile(css)?;
        Ok(self
            .0
            .select(&selector)
            .next()
            .and_then(|e| e.value().attr(attr))
            .map(|s| s.to_string()))
    }

    /// Attribute on the matched element itself
    pub fn attr(&self, attr: &str) -> Option<&str> {
        self.0.value().attr(attr)
    }
}
