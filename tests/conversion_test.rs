use rs_whatif::{convert_article, convert_page, Error, MapFetcher, Options, Page, Warning};

const PAGE_URL: &str = "https://what-if.xkcd.com/10000/";
const HEADER: &str = "A testing title\nhttps://what-if.xkcd.com/10000\n\n";

fn article_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>What If? A testing title</title></head>
<body>
<section id="entry-wrapper">
    <nav class="main-nav">
        <a href="https://what-if.xkcd.com/9999/"><button class="prev">&#x25c0;&#xFE0E;</button></a>
        <a href="https://what-if.xkcd.com/10001/"><button class="next">&#x25b6;&#xFE0E;</button></a>
    </nav>
    <h2 id="title"><a href="">A testing title</a></h2>
    <article class="entry">
        {body}
    </article>
</section>
</body>
</html>"#
    )
}

fn offline() -> Options {
    Options {
        skip_reference_title_lookup: true,
        ..Options::default()
    }
}

fn convert(body: &str) -> String {
    convert_article(PAGE_URL, &article_page(body), &offline(), &MapFetcher::new())
        .expect("conversion failed")
        .markdown
}

#[test]
fn nested_italic_alternates_markers() {
    assert_eq!(
        convert("<p><em>abc<em>012</em>def</em></p>"),
        format!("{HEADER}*abc_012_def*")
    );
}

#[test]
fn italic_inside_bold_keeps_both_markers() {
    assert_eq!(
        convert("<p><strong>abc<em>012</em>def</strong></p>"),
        format!("{HEADER}**abc*012*def**")
    );
}

#[test]
fn identity_is_read_from_navigation_and_heading() {
    let output = convert_article(PAGE_URL, &article_page("<p>x</p>"), &offline(), &MapFetcher::new())
        .expect("conversion failed");

    assert_eq!(output.number, 10000);
    assert_eq!(output.url, "https://what-if.xkcd.com/10000");
    assert_eq!(output.title, "A testing title");
    assert_eq!(output.slug, "10000-a-testing-title");
    assert_eq!(output.article_html, "<p>x</p>");
    assert!(output.warnings.is_empty());
}

#[test]
fn question_and_attribution_are_quoted() {
    assert_eq!(
        convert(
            r#"<p id="question">What if the Moon went away?</p>
               <p id="attribute">—Anna</p>
               <p>It would be dark.</p>"#
        ),
        format!("{HEADER}> What if the Moon went away?\n>\n> —Anna\n\nIt would be dark.")
    );
}

#[test]
fn footnotes_are_numbered_across_blocks_and_flushed_per_block() {
    assert_eq!(
        convert(
            r#"<p>a<span class="ref"><span class="refnum">[1]</span><span class="refbody">one</span></span></p>
               <p>b<span class="ref"><span class="refnum">[2]</span><span class="refbody">two</span></span></p>"#
        ),
        format!("{HEADER}a[^1]\n\n[^1]: one\n\nb[^2]\n\n[^2]: two")
    );
}

#[test]
fn multi_paragraph_footnote_uses_configured_indent() {
    let body = r#"<p>x<span class="ref"><span class="refbody">A.<br>B.</span></span></p>"#;

    assert_eq!(
        convert(body),
        format!("{HEADER}x[^1]\n\nTODO: replace '<-->' with '    '\n[^1]:\n<-->A.\n\n<-->B.")
    );

    let spaces = Options {
        use_indent_workaround_token: false,
        ..offline()
    };
    let output = convert_article(PAGE_URL, &article_page(body), &spaces, &MapFetcher::new())
        .expect("conversion failed");
    assert_eq!(output.markdown, format!("{HEADER}x[^1]\n\n[^1]:\n    A.\n\n    B."));
}

#[test]
fn image_in_footnote_matches_top_level_image_format() {
    assert_eq!(
        convert(
            r#"<p>x<span class="ref"><span class="refbody">see <img src="/imgs/c.png" title="t">end</span></span></p>"#
        ),
        format!(
            "{HEADER}x[^1]\n\n\
             TODO: replace '<-->' with '    '\n\
             [^1]:\n\
             <-->see ![](/uploads/10000-a-testing-title/c_ru.png \"t\")\n\
             <-->[labels]\n<-->TODO\n<-->[/labels]\n\
             <-->render: ![](https://what-if.xkcd.com/imgs/c.png)\n\n\
             <-->end"
        )
    );
}

#[test]
fn repeated_link_targets_share_one_reference() {
    assert_eq!(
        convert(
            r#"<p><a href="/1/">one</a> and <a href="https://what-if.xkcd.com/1/">same</a> and <a href="http://xkcd.com/">xkcd</a></p>"#
        ),
        format!(
            "{HEADER}[one][1] and [same][1] and [xkcd][2]\n\n\
             [1]: https://what-if.xkcd.com/1/ \"TODO\"\n\n\
             [2]: http://xkcd.com/ \"TODO\""
        )
    );
}

#[test]
fn reference_titles_are_fetched_and_failures_degrade() {
    let fetcher = MapFetcher::new().with_page(
        "https://what-if.xkcd.com/1/",
        Page::html("<html><head><title>\n  Relativistic\n  Baseball \"fast\"\n</title></head></html>"),
    );
    let html = article_page(
        r#"<p><a href="/1/">baseball</a> <a href="https://example.com/gone">gone</a></p>"#,
    );

    let output = convert_article(PAGE_URL, &html, &Options::default(), &fetcher)
        .expect("conversion failed");

    assert_eq!(
        output.markdown,
        format!(
            "{HEADER}[baseball][1] [gone][2]\n\n\
             [1]: https://what-if.xkcd.com/1/ \"Relativistic Baseball \\\"fast\\\"\"\n\n\
             [2]: https://example.com/gone \"TODO\""
        )
    );
    assert_eq!(output.warnings.len(), 1);
    assert!(matches!(
        &output.warnings[0],
        Warning::TitleLookupFailed { url, .. } if url == "https://example.com/gone"
    ));
}

#[test]
fn images_point_at_localized_uploads() {
    assert_eq!(
        convert(r#"<img src="/imgs/a/10000/cow.png" title="Moo">"#),
        format!(
            "{HEADER}![](/uploads/10000-a-testing-title/cow_ru.png \"Moo\")\n\
             [labels]\nTODO\n[/labels]\n\
             render: ![](https://what-if.xkcd.com/imgs/a/10000/cow.png)"
        )
    );
}

#[test]
fn blockquote_lines_are_prefixed() {
    assert_eq!(
        convert("<blockquote><p>one<br>two</p></blockquote>"),
        format!("{HEADER}> one\n> \n> two")
    );
}

#[test]
fn display_formula_paragraph() {
    assert_eq!(
        convert(r"<p>\[ F = G\frac{m_1 m_2}{r^2} \]</p>"),
        format!("{HEADER}$$ F = G\\frac{{m_1 m_2}}{{r^2}} $$")
    );
}

#[test]
fn unknown_top_level_elements_only_warn() {
    let output = convert_article(
        PAGE_URL,
        &article_page("<p>kept</p><table><tr><td>dropped</td></tr></table>"),
        &offline(),
        &MapFetcher::new(),
    )
    .expect("conversion failed");

    assert_eq!(output.markdown, format!("{HEADER}kept"));
    assert_eq!(
        output.warnings,
        vec![Warning::UnrecognizedTopLevelTag {
            tag: "table".to_string()
        }]
    );
}

#[test]
fn path_relative_links_are_fatal() {
    let result = convert_article(
        PAGE_URL,
        &article_page(r#"<p><a href="foo.html">x</a></p>"#),
        &offline(),
        &MapFetcher::new(),
    );
    match result {
        Err(Error::UnsupportedUrlKind { url }) => assert_eq!(url, "foo.html"),
        other => panic!("expected UnsupportedUrlKind, got {other:?}"),
    }
}

#[test]
fn footnote_without_body_is_fatal() {
    let result = convert_article(
        PAGE_URL,
        &article_page(r#"<p>x<span class="ref"><span class="refnum">[1]</span></span></p>"#),
        &offline(),
        &MapFetcher::new(),
    );
    assert!(matches!(result, Err(Error::MissingElement { .. })));
}

#[test]
fn legacy_encoded_page_is_decoded() {
    let mut body = article_page("<p>MARKER</p>").into_bytes();
    let marker = body
        .windows(6)
        .position(|w| w == b"MARKER")
        .expect("marker present");
    // "Привет" in windows-1251
    body.splice(marker..marker + 6, [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]);
    let page = Page {
        body,
        content_type: Some("text/html; charset=windows-1251".to_string()),
    };

    let output = convert_page(PAGE_URL, &page, &offline(), &MapFetcher::new())
        .expect("conversion failed");
    assert_eq!(output.markdown, format!("{HEADER}Привет"));
}

#[test]
fn output_serializes_to_json() {
    let output = convert_article(
        PAGE_URL,
        &article_page("<p>x</p><div>y</div>"),
        &offline(),
        &MapFetcher::new(),
    )
    .expect("conversion failed");

    let json: serde_json::Value = serde_json::to_value(&output).expect("serializable");
    assert_eq!(json["number"], 10000);
    assert_eq!(json["slug"], "10000-a-testing-title");
    assert_eq!(json["warnings"][0]["kind"], "unrecognized_top_level_tag");
    assert_eq!(json["warnings"][0]["tag"], "div");
}
