//! Article conversion.
//!
//! # Module Structure
//!
//! - `state`: per-document conversion state (counters, pending footnotes, references)
//! - `tags`: element kinds and their classification
//! - `inline`: recursive inline converter with emphasis alternation
//! - `footnotes`: footnote collection and per-block flushing
//! - `references`: end-of-document reference list with fetched titles
//! - `blocks`: title, paragraph, blockquote and image blocks
//! - `pipeline`: whole-article orchestration and downloads

pub mod blocks;
pub mod footnotes;
pub mod inline;
pub mod pipeline;
pub mod references;
pub mod state;
pub mod tags;

pub use inline::{convert_inline, Markers};
pub use pipeline::{
    convert_archive, convert_article, convert_page, download_article, fetch_and_convert,
};
pub use state::ConversionState;
