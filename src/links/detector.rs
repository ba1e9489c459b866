use std::collections::HashSet;
use url::Url;

/// Find outbound http(s) links in Markdown, HTML or plain text content.
///
/// Links come back deduplicated in order of first appearance, spelled as
/// written in the source: the spelling is the cache key a page will look up.
pub fn detect_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for token in text.split_whitespace() {
        for candidate in extract_candidates(token) {
            if is_http_url(candidate) && seen.insert(candidate.to_string()) {
                links.push(candidate.to_string());
            }
        }
    }

    links
}

fn extract_candidates(token: &str) -> Vec<&str> {
    // [label](url) and ![alt](url); several may share a token. A title after
    // the URL (`[x](url "Title")`) lands in the next token, so the URL runs
    // to the first `)` or to the end of this one.
    if token.contains("](") {
        return token
            .split("](")
            .skip(1)
            .map(|rest| rest.find(')').map_or(rest, |end| &rest[..end]))
            .collect();
    }

    // href="url", src='url', content="url"
    if let Some(eq) = token.find("=\"").or_else(|| token.find("='")) {
        let quote = &token[eq + 1..eq + 2];
        let value = &token[eq + 2..];
        let end = value.find(quote).unwrap_or(value.len());
        return vec![&value[..end]];
    }

    // Punctuation after a wrapper (`<url>.`, `(url),`) goes first so the
    // wrapper can be recognised.
    let trimmed = token.trim_end_matches(SENTENCE_PUNCTUATION);

    let stripped = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(trimmed);

    let stripped = stripped
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(stripped);

    vec![strip_trailing_punctuation(stripped)]
}

const SENTENCE_PUNCTUATION: [char; 8] = ['.', ',', ';', ':', '!', '?', '"', '\''];

fn strip_trailing_punctuation(s: &str) -> &str {
    s.trim_end_matches(SENTENCE_PUNCTUATION)
        .trim_end_matches(')')
        .trim_end_matches(SENTENCE_PUNCTUATION)
}

fn is_http_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .ok()
        .is_some_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_keeps_its_spelling() {
        let links = detect_links("read https://example.com for info");
        assert_eq!(links, vec!["https://example.com"]);
    }

    #[test]
    fn multiple_links_in_order() {
        let links = detect_links("https://c.com then http://a.org and https://b.net/x");
        assert_eq!(links, vec!["https://c.com", "http://a.org", "https://b.net/x"]);
    }

    #[test]
    fn deduplicates() {
        let links = detect_links("https://example.com and https://example.com again");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn markdown_links_and_images() {
        let links = detect_links(
            "see [the post](https://blog.example.com/post) ![card](https://cdn.example.com/c.png)",
        );
        assert_eq!(
            links,
            vec!["https://blog.example.com/post", "https://cdn.example.com/c.png"]
        );
    }

    #[test]
    fn html_attributes() {
        let links = detect_links(r#"<a href="https://example.com/work">Work</a> <img src='https://x.test/i.png'>"#);
        assert_eq!(links, vec!["https://example.com/work", "https://x.test/i.png"]);
    }

    #[test]
    fn angle_brackets_and_parentheses() {
        let links = detect_links("<https://a.example.com/p> (https://b.example.com/q)");
        assert_eq!(links, vec!["https://a.example.com/p", "https://b.example.com/q"]);
    }

    #[test]
    fn wrappers_followed_by_punctuation() {
        assert_eq!(
            detect_links("Visit <https://a.example.com/p>."),
            vec!["https://a.example.com/p"]
        );
        assert_eq!(
            detect_links("(https://b.example.com/q)."),
            vec!["https://b.example.com/q"]
        );
        assert_eq!(
            detect_links("see (https://b.example.com/r), then"),
            vec!["https://b.example.com/r"]
        );
    }

    #[test]
    fn markdown_link_with_title() {
        assert_eq!(
            detect_links(r#"[post](https://c.example.com/p "Title")"#),
            vec!["https://c.example.com/p"]
        );
    }

    #[test]
    fn trailing_punctuation_is_dropped() {
        let links = detect_links("Go to https://example.com/page. Or https://example.org?");
        assert_eq!(links, vec!["https://example.com/page", "https://example.org"]);
    }

    #[test]
    fn relative_and_other_schemes_ignored() {
        let links = detect_links(
            r#"[About](/about) <a href="/work">x</a> ftp://files.example.com mailto:me@example.com"#,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn query_and_fragment_survive() {
        let links = detect_links("https://example.com/search?q=test#results");
        assert_eq!(links, vec!["https://example.com/search?q=test#results"]);
    }
}
