//! Signal extraction from raw HTML
//!
//! Parses the fetched markup and pulls out the handful of heuristics the
//! audit cares about: title/description/h1, visible body text, element
//! counts, webp presence, and a capped sample of outbound links. Extraction
//! is tolerant by contract: malformed or partial HTML degrades to empty
//! strings and zero counts, never an error.

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Everything the parser extracts from one page.
#[derive(Debug, Clone, Default)]
pub struct PageSignals {
    pub title: Option<String>,
    pub description: Option<String>,
    pub h1: Option<String>,
    pub body_text: String,
    pub word_count: u32,
    pub images_count: u32,
    pub scripts_count: u32,
    pub links_count: u32,
    pub has_webp: bool,
    pub links: Vec<String>,
}

/// Extract all audit signals from raw HTML.
///
/// `link_cap` bounds the sampled `links` vector; counts are not capped.
pub fn extract_signals(html: &str, link_cap: usize) -> PageSignals {
    let document = Html::parse_document(html);

    let h1 = first_text(&document, "h1");
    let title = first_text(&document, "title").or_else(|| h1.clone());
    let description = meta_description(&document);

    let body_text = collapsed_body_text(&document);
    let word_count = body_text.split_whitespace().count() as u32;

    let images_count = count(&document, "img");
    let scripts_count = count(&document, "script");
    let links_count = count(&document, "a[href]");
    let has_webp = has_webp_image(&document);
    let links = sample_links(&document, link_cap);

    PageSignals {
        title,
        description,
        h1,
        body_text,
        word_count,
        images_count,
        scripts_count,
        links_count,
        has_webp,
        links,
    }
}

/// Trimmed text of the first element matching `selector`. Empty text is
/// treated as absent so the title fallback chain can continue.
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.to_string())
}

fn count(document: &Html, selector: &str) -> u32 {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).count() as u32,
        Err(_) => 0,
    }
}

fn has_webp_image(document: &Html) -> bool {
    let Ok(selector) = Selector::parse("img") else {
        return false;
    };
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .any(|src| src.contains(".webp"))
}

/// Body text with whitespace runs collapsed to single spaces and trimmed.
fn collapsed_body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };
    let raw = body.text().collect::<Vec<_>>().join(" ");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Distinct anchor hrefs starting with `http`, document order, capped.
fn sample_links(document: &Html, cap: usize) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if links.len() >= cap {
            break;
        }
        if let Some(href) = element.value().attr("href") {
            if href.starts_with("http") && seen.insert(href.to_string()) {
                links.push(href.to_string());
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_description_h1() {
        let html = r#"
            <html>
            <head>
                <title> Plumbing Pros </title>
                <meta name="description" content="Fast local plumbing repair">
            </head>
            <body><h1>Emergency Plumbing</h1><p>We fix pipes.</p></body>
            </html>
        "#;

        let signals = extract_signals(html, 50);
        assert_eq!(signals.title.as_deref(), Some("Plumbing Pros"));
        assert_eq!(
            signals.description.as_deref(),
            Some("Fast local plumbing repair")
        );
        assert_eq!(signals.h1.as_deref(), Some("Emergency Plumbing"));
    }

    #[test]
    fn title_falls_back_to_h1() {
        let html = "<html><body><h1>Only Heading</h1></body></html>";
        let signals = extract_signals(html, 50);
        assert_eq!(signals.title.as_deref(), Some("Only Heading"));
        assert_eq!(signals.h1.as_deref(), Some("Only Heading"));
    }

    #[test]
    fn missing_elements_are_none_and_zero() {
        let signals = extract_signals("<html><body></body></html>", 50);
        assert_eq!(signals.title, None);
        assert_eq!(signals.description, None);
        assert_eq!(signals.h1, None);
        assert_eq!(signals.word_count, 0);
        assert_eq!(signals.images_count, 0);
        assert_eq!(signals.links_count, 0);
        assert!(!signals.has_webp);
        assert!(signals.links.is_empty());
    }

    #[test]
    fn malformed_html_does_not_panic() {
        let signals = extract_signals("<div><p>unclosed <a href='http", 50);
        assert!(signals.title.is_none());
    }

    #[test]
    fn counts_elements() {
        let html = r#"
            <body>
                <img src="a.png"><img src="b.jpg">
                <script></script><script></script><script></script>
                <a href="/x">x</a><a href="http://e.com">e</a><a>no href</a>
            </body>
        "#;
        let signals = extract_signals(html, 50);
        assert_eq!(signals.images_count, 2);
        assert_eq!(signals.scripts_count, 3);
        assert_eq!(signals.links_count, 2);
    }

    #[test]
    fn detects_webp_images() {
        let with = extract_signals(r#"<body><img src="/hero.webp"></body>"#, 50);
        assert!(with.has_webp);

        let query_suffix = extract_signals(r#"<body><img src="/a.webp?v=2"></body>"#, 50);
        assert!(query_suffix.has_webp);

        let without = extract_signals(r#"<body><img src="/hero.png"></body>"#, 50);
        assert!(!without.has_webp);
    }

    #[test]
    fn word_count_collapses_whitespace() {
        let html = "<body><p>  one \n two\t\tthree </p><div>four</div></body>";
        let signals = extract_signals(html, 50);
        assert_eq!(signals.body_text, "one two three four");
        assert_eq!(signals.word_count, 4);
    }

    #[test]
    fn links_are_distinct_absolute_and_capped() {
        let html = r#"
            <body>
                <a href="http://a.com">a</a>
                <a href="/relative">rel</a>
                <a href="http://a.com">a again</a>
                <a href="https://b.com">b</a>
                <a href="https://c.com">c</a>
            </body>
        "#;
        let signals = extract_signals(html, 2);
        assert_eq!(signals.links, vec!["http://a.com", "https://b.com"]);

        let uncapped = extract_signals(html, 50);
        assert_eq!(
            uncapped.links,
            vec!["http://a.com", "https://b.com", "https://c.com"]
        );
    }
}
