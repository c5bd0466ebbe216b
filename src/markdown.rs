//! Inline Markdown
//!
//! Card content is short inline markdown rendered with pulldown-cmark:
//! - `**bold**` becomes a highlight span
//! - Custom color syntax: %g%green%g%
//! - Raw HTML in the source is shown as text

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Color codes and their hex values
const COLORS: &[(&str, &str)] = &[
    ("r", "#e74c3c"), // red
    ("g", "#27ae60"), // green
    ("b", "#3498db"), // blue
    ("y", "#f1c40f"), // yellow
    ("p", "#9b59b6"), // purple
];

/// Render inline markdown to HTML without the outer paragraph
pub fn render_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let mut events = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph) => {}
            Event::Start(Tag::Strong) => {
                events.push(Event::Html(CowStr::from(r#"<span class="highlight">"#)));
            }
            Event::End(TagEnd::Strong) => events.push(Event::Html(CowStr::from("</span>"))),
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Text(text) => events.extend(color_events(&text)),
            other => events.push(other),
        }
    }

    let mut html = String::new();
    push_html(&mut html, events.into_iter());
    html.trim().to_string()
}

/// Split text on the earliest `%c%...%c%` pair
fn color_events(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text;

    loop {
        let earliest = COLORS
            .iter()
            .filter_map(|(code, hex)| {
                let pattern = format!("%{}%", code);
                remaining.find(&pattern).map(|pos| (pos, pattern, *hex))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, hex)) = earliest else {
            if !remaining.is_empty() {
                events.push(Event::Text(CowStr::from(remaining.to_string())));
            }
            return events;
        };

        let after = &remaining[pos + pattern.len()..];
        let Some(end) = after.find(&pattern) else {
            // Unclosed marker stays literal; keep scanning past it
            events.push(Event::Text(CowStr::from(remaining[..pos + pattern.len()].to_string())));
            remaining = after;
            continue;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        events.push(Event::Html(CowStr::from(format!("<span style=\"color: {}\">", hex))));
        if end > 0 {
            events.push(Event::Text(CowStr::from(after[..end].to_string())));
        }
        events.push(Event::Html(CowStr::from("</span>")));
        remaining = &after[end + pattern.len()..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_no_paragraph() {
        assert_eq!(render_inline("hello world"), "hello world");
    }

    #[test]
    fn test_bold_is_highlighted() {
        assert_eq!(
            render_inline("the **best** deal"),
            r#"the <span class="highlight">best</span> deal"#
        );
    }

    #[test]
    fn test_color_syntax() {
        assert_eq!(
            render_inline("a %g%green%g% b"),
            r#"a <span style="color: #27ae60">green</span> b"#
        );
    }

    #[test]
    fn test_unclosed_color_stays_literal() {
        assert_eq!(render_inline("50%r% off"), "50%r% off");
    }

    #[test]
    fn test_unclosed_color_does_not_hide_later_pairs() {
        assert_eq!(
            render_inline("50%r% off %g%sale%g%"),
            r#"50%r% off <span style="color: #27ae60">sale</span>"#
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_inline("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
