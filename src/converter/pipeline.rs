//! Article conversion pipeline.
//!
//! Drives one full document conversion: title block, every direct child of
//! the article container, then the reference list. Also hosts the download
//! helpers used by the command line tool.

use super::blocks::{convert_blockquote, convert_image, convert_paragraph, convert_title};
use super::references::resolve_references;
use super::state::ConversionState;
use super::tags::BlockTag;
use crate::dom;
use crate::error::{Result, Warning};
use crate::etree;
use crate::fetch::{Fetcher, Page};
use crate::url_utils::article_url;
use crate::{ArticleOutput, Options};

/// Container of the article body.
pub const ARTICLE_SELECTOR: &str = "body article";

/// Convert an article page that has already been decoded to a string.
///
/// `url` is the address the page was downloaded from; relative references
/// resolve against it. `fetcher` is only used for reference titles.
pub fn convert_article(
    url: &str,
    html: &str,
    options: &Options,
    fetcher: &dyn Fetcher,
) -> Result<ArticleOutput> {
    let doc = dom::parse(html);
    let article = dom::require_first(&doc, ARTICLE_SELECTOR)?;
    let article_html = dom::inner_html(&article).trim().to_string();

    let mut state = ConversionState::new(url, options);
    let (title, mut markdown) = convert_title(&doc, &mut state)?;

    let children = etree::element_children(&article);
    let total = children.len();
    for (processed, child) in children.iter().enumerate() {
        log::info!("Processed {processed}/{total} top level elements");
        let block = match BlockTag::classify(child) {
            BlockTag::Paragraph => convert_paragraph(child, &mut state)?,
            BlockTag::Blockquote => convert_blockquote(child, &mut state)?,
            BlockTag::Image => convert_image(child, &mut state)?,
            BlockTag::Unrecognized(tag) => {
                state.warn(Warning::UnrecognizedTopLevelTag { tag });
                continue;
            }
        };
        markdown.push_str(&block);
        debug_assert!(state.pending_footnotes().is_empty());
    }

    log::info!("Postprocessing references...");
    markdown.push_str(&resolve_references(&mut state, options, fetcher));

    Ok(ArticleOutput {
        number: title.number,
        url: title.url,
        title: title.title,
        slug: title.slug,
        article_html,
        markdown: markdown.trim().to_string(),
        warnings: state.take_warnings(),
    })
}

/// Decode a downloaded page and convert it.
pub fn convert_page(
    url: &str,
    page: &Page,
    options: &Options,
    fetcher: &dyn Fetcher,
) -> Result<ArticleOutput> {
    convert_article(url, &page.text(), options, fetcher)
}

/// Download an article page. Failure here is fatal for the article.
pub fn download_article(fetcher: &dyn Fetcher, url: &str) -> Result<Page> {
    log::info!("Download article from {url}");
    fetcher.fetch_html(url).map_err(|err| {
        log::error!("Cannot get the page {}: {err}", err.url());
        err.into()
    })
}

/// Download and convert one article, the newest when `number` is `None`.
pub fn fetch_and_convert(
    number: Option<u32>,
    options: &Options,
    fetcher: &dyn Fetcher,
) -> Result<ArticleOutput> {
    let url = article_url(number);
    let page = download_article(fetcher, &url)?;
    convert_page(&url, &page, options, fetcher)
}

/// Convert the newest article and then every older one down to #1, handing
/// each result to `sink` as soon as it is ready. Returns the number of
/// articles converted.
pub fn convert_archive<F>(options: &Options, fetcher: &dyn Fetcher, mut sink: F) -> Result<u32>
where
    F: FnMut(ArticleOutput) -> Result<()>,
{
    let newest = fetch_and_convert(None, options, fetcher)?;
    let newest_number = newest.number;
    log::info!("Newest article is #{newest_number}");
    sink(newest)?;

    for number in (1..newest_number).rev() {
        sink(fetch_and_convert(Some(number), options, fetcher)?)?;
    }

    Ok(newest_number.max(1))
}
