//! Configuration options for article conversion.
//!
//! The `Options` struct controls the output dialect and the network
//! behaviour of the converter.

/// Indent token used instead of four spaces when the publishing surface
/// collapses leading whitespace.
pub const INDENT_WORKAROUND_TOKEN: &str = "<-->";

/// Four literal spaces, the indent the Markdown dialect actually expects.
pub const INDENT_SPACES: &str = "    ";

/// Default title emitted for a reference whose page title is unknown.
pub const DEFAULT_TITLE_PLACEHOLDER: &str = "TODO";

/// Configuration options for article conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_whatif::Options;
///
/// let options = Options {
///     skip_reference_title_lookup: true,
///     ..Options::default()
/// };
/// assert_eq!(options.indent_literal(), "<-->");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Indent continuation lines of multi-paragraph footnotes with the
    /// `<-->` token instead of four spaces.
    ///
    /// The footnote flush then prefixes such footnotes with a reminder line
    /// to replace the token by hand.
    ///
    /// Default: `true`
    pub use_indent_workaround_token: bool,

    /// Emit `title_placeholder` for every reference instead of downloading
    /// the referenced page to read its `<title>`.
    ///
    /// Default: `false`
    pub skip_reference_title_lookup: bool,

    /// Timeout applied to every network request, in seconds.
    ///
    /// Default: `30`
    pub timeout_secs: u64,

    /// Title used when a reference title is skipped or cannot be fetched.
    ///
    /// Default: `"TODO"`
    pub title_placeholder: String,
}

impl Options {
    /// Indent literal for multi-paragraph footnote lines.
    #[must_use]
    pub fn indent_literal(&self) -> &'static str {
        if self.use_indent_workaround_token {
            INDENT_WORKAROUND_TOKEN
        } else {
            INDENT_SPACES
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_indent_workaround_token: true,
            skip_reference_title_lookup: false,
            timeout_secs: 30,
            title_placeholder: DEFAULT_TITLE_PLACEHOLDER.to_string(),
        }
    }
}
