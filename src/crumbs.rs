//! Breadcrumb Trail
//!
//! Turns a path like `/shop/running-shoes` into labelled crumbs with
//! cumulative, percent-encoded links.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the current page
    pub href: Option<String>,
}

/// `running-shoes` -> `Running Shoes`
pub fn humanize(segment: &str) -> String {
    segment
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Crumbs for `path`, starting with Home. The last crumb has no link.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.trim().is_empty()).collect();

    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: Some("/".to_string()),
    }];
    let mut href = String::new();
    for segment in &segments {
        href.push('/');
        href.push_str(&utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string());
        crumbs.push(Crumb {
            label: humanize(segment),
            href: Some(href.clone()),
        });
    }

    if let Some(last) = crumbs.last_mut() {
        last.href = None;
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_current_home() {
        assert_eq!(breadcrumbs("/"), vec![Crumb { label: "Home".into(), href: None }]);
        assert_eq!(breadcrumbs(""), breadcrumbs("//"));
    }

    #[test]
    fn test_cumulative_links() {
        let crumbs = breadcrumbs("/shop/shoes/running shoes");
        let hrefs: Vec<Option<&str>> = crumbs.iter().map(|c| c.href.as_deref()).collect();
        assert_eq!(hrefs, vec![Some("/"), Some("/shop"), Some("/shop/shoes"), None]);
        assert_eq!(crumbs[3].label, "Running Shoes");
    }

    #[test]
    fn test_segments_are_encoded() {
        let crumbs = breadcrumbs("/a b/c?d/end");
        assert_eq!(crumbs[1].href.as_deref(), Some("/a%20b"));
        assert_eq!(crumbs[2].href.as_deref(), Some("/a%20b/c%3Fd"));
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("card-stack"), "Card Stack");
        assert_eq!(humanize("activity_chart"), "Activity Chart");
        assert_eq!(humanize("über"), "Über");
        assert_eq!(humanize("--"), "");
    }
}
