//! Conversion state tracking.
//!
//! `ConversionState` is the single mutable context threaded through the
//! conversion of one document. It is created fresh per document and
//! discarded once the reference list has been emitted.

use crate::error::Warning;
use crate::Options;

/// A footnote waiting to be flushed after its enclosing top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub ordinal: u32,
    pub body: String,
    pub is_multi_paragraph: bool,
}

/// A link target collected for the reference list at the end of the
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub ordinal: u32,
    pub target_url: String,
}

/// Mutable per-document conversion context.
#[derive(Debug)]
pub struct ConversionState {
    /// Canonical URL of the document; relative references resolve against it.
    pub base_url: String,

    /// Set by the title block.
    pub slug: String,

    /// Set by the title block.
    pub article_number: u32,

    /// Prefix for lines of multi-paragraph footnotes.
    pub indent: &'static str,

    /// Ordinal the next footnote receives.
    footnote_counter: u32,

    /// Ordinal the next distinct reference receives.
    reference_counter: u32,

    pending_footnotes: Vec<Footnote>,

    references: Vec<Reference>,

    warnings: Vec<Warning>,
}

impl ConversionState {
    /// Create a fresh state for the document at `base_url`.
    #[must_use]
    pub fn new(base_url: &str, options: &Options) -> Self {
        Self {
            base_url: base_url.to_string(),
            slug: String::new(),
            article_number: 0,
            indent: options.indent_literal(),
            footnote_counter: 1,
            reference_counter: 1,
            pending_footnotes: Vec::new(),
            references: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Reserve the next footnote ordinal.
    ///
    /// Ordinals are reserved before the footnote body is converted so that
    /// footnotes nested in that body number after their parent.
    pub fn next_footnote_ordinal(&mut self) -> u32 {
        let ordinal = self.footnote_counter;
        self.footnote_counter += 1;
        ordinal
    }

    /// Queue a converted footnote for the end of the current block.
    pub fn push_footnote(&mut self, footnote: Footnote) {
        self.pending_footnotes.push(footnote);
    }

    /// Drain the pending footnotes in ordinal order.
    pub fn take_footnotes(&mut self) -> Vec<Footnote> {
        let mut footnotes = std::mem::take(&mut self.pending_footnotes);
        footnotes.sort_by_key(|f| f.ordinal);
        footnotes
    }

    /// Footnotes collected since the last flush.
    #[must_use]
    pub fn pending_footnotes(&self) -> &[Footnote] {
        &self.pending_footnotes
    }

    /// Ordinal of `target_url` in the reference list, allocating a new one
    /// on first sight.
    pub fn reference_ordinal(&mut self, target_url: &str) -> u32 {
        if let Some(existing) = self.references.iter().find(|r| r.target_url == target_url) {
            return existing.ordinal;
        }
        let ordinal = self.reference_counter;
        self.reference_counter += 1;
        self.references.push(Reference {
            ordinal,
            target_url: target_url.to_string(),
        });
        ordinal
    }

    /// References collected so far, in ordinal order.
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Record a non-fatal degradation.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Move the recorded warnings out of the state.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}
