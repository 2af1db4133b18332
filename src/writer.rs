//! Output file naming and writing.
//!
//! Every converted article produces two files sharing one stem,
//! `{slug}-{%Y%m%d-%H%M%S%z}`: the archived article HTML (`.html`) and the
//! converted text (`.md`).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::error::Result;
use crate::ArticleOutput;

/// Offset of the timestamps in file names, in hours east of UTC.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

/// Paths of the files written for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub html: PathBuf,
    pub markdown: PathBuf,
}

/// Current time at a fixed offset from UTC. Out-of-range offsets fall back
/// to UTC.
#[must_use]
pub fn now_at_offset(hours: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(hours.saturating_mul(3600)).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset)
}

/// File stem shared by the HTML and Markdown outputs.
#[must_use]
pub fn file_stem(slug: &str, timestamp: &DateTime<FixedOffset>) -> String {
    format!("{slug}-{}", timestamp.format("%Y%m%d-%H%M%S%z"))
}

/// Write the article HTML and Markdown into `dir`.
///
/// Files end with a newline. Line endings are LF unless `native_newline`
/// is set, in which case the platform convention is used.
pub fn save_article(
    dir: &Path,
    output: &ArticleOutput,
    timestamp: &DateTime<FixedOffset>,
    native_newline: bool,
) -> Result<OutputFiles> {
    let stem = file_stem(&output.slug, timestamp);
    let files = OutputFiles {
        html: dir.join(format!("{stem}.html")),
        markdown: dir.join(format!("{stem}.md")),
    };

    log::info!("Write article in html to file {}", files.html.display());
    write_text(&files.html, &output.article_html, native_newline)?;
    log::info!("Write article in markdown to file {}", files.markdown.display());
    write_text(&files.markdown, &output.markdown, native_newline)?;

    Ok(files)
}

fn write_text(path: &Path, text: &str, native_newline: bool) -> Result<()> {
    let mut content = format!("{text}\n");
    if native_newline && cfg!(windows) {
        content = content.replace('\n', "\r\n");
    }
    fs::write(path, content)?;
    Ok(())
}
