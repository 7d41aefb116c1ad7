//! Markdown rendering for assistant replies.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render a reply to HTML.
///
/// Raw HTML embedded in the reply is demoted to text (and therefore
/// escaped by the HTML writer), so provider output can never smuggle
/// markup — let alone scripts — into the page.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
