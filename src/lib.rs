//! # rs-whatif
//!
//! Downloads what-if article pages and converts them into a Markdown dialect
//! with deferred footnotes and reference links.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_whatif::{convert_article, MapFetcher, Options};
//!
//! let html = r#"<html><body>
//!   <nav class="main-nav"><a href="/9/"><button class="prev">&lt;</button></a></nav>
//!   <h2 id="title"><a href="">Ten</a></h2>
//!   <article><p><em>abc<em>012</em>def</em></p></article>
//! </body></html>"#;
//!
//! let output = convert_article("https://what-if.xkcd.com/10/", html, &Options::default(), &MapFetcher::new())?;
//! assert_eq!(output.markdown, "Ten\nhttps://what-if.xkcd.com/10\n\n*abc_012_def*");
//! assert_eq!(output.slug, "010-ten");
//! # Ok::<(), rs_whatif::Error>(())
//! ```
//!
//! ## Output dialect
//!
//! - **Emphasis**: `*`/`_` and `**`/`__` alternate with nesting depth
//! - **Links**: `[text][n]`, with `[n]: url "page title"` at the end
//! - **Footnotes**: `[^n]`, bodies written after the enclosing block
//! - **Images**: a localized image reference, a `[labels]` block and a
//!   `render:` line with the original URL
//! - **Formulas**: `\[ ... \]` paragraphs become `$$ ... $$`

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Element tree view with text/tail model support.
pub mod etree;

/// Conversion of article pages (state, inline and block handlers, pipeline).
pub mod converter;

/// URL resolution against the article page.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Whitespace normalization, formulas, titles and slugs.
pub mod text;

/// Page retrieval (HTTP and in-memory).
pub mod fetch;

/// Output file naming and writing.
pub mod writer;

// Public API - re-exports
pub use converter::{convert_archive, convert_article, convert_page, download_article, fetch_and_convert};
pub use error::{Error, FetchError, Result, Warning};
pub use fetch::{Fetcher, HttpFetcher, MapFetcher, Page};
pub use options::Options;
pub use result::ArticleOutput;
