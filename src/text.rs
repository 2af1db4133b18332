//! Plain text helpers: whitespace normalization, display formulas, titles
//! and slugs.

use crate::patterns::{SLUG_STRIPPED, WHITESPACE_RUN};

/// Collapse every run of HTML whitespace into a single space, the way a
/// browser renders inline text.
///
/// ```
/// use rs_whatif::text::normalize_space;
///
/// assert_eq!(normalize_space("a\n   b\t\tc"), "a b c");
/// assert_eq!(normalize_space("  lead"), " lead");
/// assert_eq!(normalize_space(""), "");
/// ```
#[must_use]
pub fn normalize_space(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Reformat a display formula (`\[ ... \]` over the whole trimmed text) as
/// `$$ ... $$`. Returns `None` when the text is not a display formula.
///
/// ```
/// use rs_whatif::text::display_formula;
///
/// assert_eq!(display_formula(r"  \[ E = mc^2 \] ").as_deref(), Some("$$ E = mc^2 $$"));
/// assert_eq!(display_formula(r"\[ a \] and more"), None);
/// ```
#[must_use]
pub fn display_formula(text: &str) -> Option<String> {
    let inner = text.trim().strip_prefix(r"\[")?.strip_suffix(r"\]")?;
    Some(format!("$$ {} $$", inner.trim()))
}

/// Escape double quotes for use inside a `"..."` Markdown title.
#[must_use]
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Join the non-empty trimmed lines of a page `<title>` with single spaces.
///
/// ```
/// use rs_whatif::text::collapse_title_lines;
///
/// assert_eq!(collapse_title_lines("\n  Drop\n\n  Height \n"), "Drop Height");
/// ```
#[must_use]
pub fn collapse_title_lines(title: &str) -> String {
    title
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the file name key of an article.
///
/// ```
/// use rs_whatif::text::slugify;
///
/// assert_eq!(slugify(7, "Short Answer: Yes!"), "007-short-answer-yes");
/// assert_eq!(slugify(1234, "Drop"), "1234-drop");
/// ```
#[must_use]
pub fn slugify(number: u32, title: &str) -> String {
    let title = SLUG_STRIPPED.replace_all(&title.to_lowercase(), "").replace(' ', "-");
    format!("{number:03}-{title}")
}
