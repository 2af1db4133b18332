//! Result types for conversion output.
//!
//! This module defines the structured output of one article conversion:
//! the Markdown text plus what the file writer needs to name its files.

use serde::Serialize;

use crate::error::Warning;

/// Result of converting one article page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleOutput {
    /// Article number derived from the navigation buttons.
    pub number: u32,

    /// Canonical article URL (`scheme://host/{number}`).
    pub url: String,

    /// Article title read from the title heading.
    pub title: String,

    /// Filesystem-safe identifier: zero padded number plus normalized title.
    pub slug: String,

    /// Inner HTML of the `<article>` container, trimmed, kept for archival.
    pub article_html: String,

    /// Converted text in the footnote/reference Markdown dialect, trimmed.
    pub markdown: String,

    /// Non-fatal issues met during conversion, in the order they occurred.
    pub warnings: Vec<Warning>,
}
