//! Text Formats
//!
//! The filter step that turns stored text into the HTML fragment the linker
//! writes into. Formats are selected by id, the way a field item stores them.

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LinkError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// Escape all HTML, then paragraphs and line breaks
    PlainText,
    /// CommonMark with tables and strikethrough
    Markdown,
    /// Trusted HTML, paragraphs and line breaks only
    FullHtml,
}

impl TextFormat {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "plain_text" => Ok(TextFormat::PlainText),
            "markdown" => Ok(TextFormat::Markdown),
            "full_html" => Ok(TextFormat::FullHtml),
            other => Err(LinkError::UnknownFormat(other.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TextFormat::PlainText => "plain_text",
            TextFormat::Markdown => "markdown",
            TextFormat::FullHtml => "full_html",
        }
    }

    /// Render `text` to an HTML fragment
    pub fn apply(&self, text: &str, langcode: &str) -> String {
        debug!(format = self.id(), langcode, len = text.len(), "applying text format");
        match self {
            TextFormat::PlainText => autop(&escape_html(text)),
            TextFormat::Markdown => markdown_to_html(text),
            TextFormat::FullHtml => autop(text),
        }
    }
}

/// Escape text content for HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Blank-line separated blocks become `<p>`, single newlines `<br />`
pub fn autop(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len() + 16);
    let mut paragraph: Vec<&str> = Vec::new();

    fn flush(paragraph: &mut Vec<&str>, out: &mut String) {
        if paragraph.is_empty() {
            return;
        }
        out.push_str("<p>");
        out.push_str(&paragraph.join("<br />\n"));
        out.push_str("</p>\n");
        paragraph.clear();
    }

    for line in normalized.lines() {
        if line.trim().is_empty() {
            flush(&mut paragraph, &mut out);
        } else {
            paragraph.push(line.trim_end());
        }
    }
    flush(&mut paragraph, &mut out);

    out
}

fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
