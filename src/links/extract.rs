//! Ordered-priority scraping of Open Graph and standard meta tags.
//!
//! This is pattern matching over raw markup, not an HTML parser. Values that
//! contain quote characters, meta tags split by another `>`, or markup hidden
//! in comments and scripts can all produce a miss or a wrong hit. Callers get
//! the fallback chain in those cases.

use regex::Regex;
use std::sync::LazyLock;

static TITLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("title pattern compiles")
});

/// Both attribute orders for every tag, indexed by `MetaTag as usize`.
static META_PATTERNS: LazyLock<Vec<[Regex; 2]>> =
    LazyLock::new(|| MetaTag::ALL.iter().map(|tag| tag.patterns()).collect());

/// The meta tags the preview reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaTag {
    OgTitle,
    OgDescription,
    OgImage,
    Description,
    TwitterImage,
}

impl MetaTag {
    const ALL: [Self; 5] = [
        Self::OgTitle,
        Self::OgDescription,
        Self::OgImage,
        Self::Description,
        Self::TwitterImage,
    ];

    /// Attribute name and value identifying the tag.
    #[must_use]
    pub fn selector(self) -> (&'static str, &'static str) {
        match self {
            Self::OgTitle => ("property", "og:title"),
            Self::OgDescription => ("property", "og:description"),
            Self::OgImage => ("property", "og:image"),
            Self::Description => ("name", "description"),
            Self::TwitterImage => ("name", "twitter:image"),
        }
    }

    fn patterns(self) -> [Regex; 2] {
        let (attr, key) = self.selector();
        let attr = regex::escape(attr);
        let key = regex::escape(key);
        [
            Regex::new(&format!(
                r#"(?i)<meta[^>]*{attr}=["']{key}["'][^>]*content=["']([^"']+)["']"#
            )),
            Regex::new(&format!(
                r#"(?i)<meta[^>]*content=["']([^"']+)["'][^>]*{attr}=["']{key}["']"#
            )),
        ]
        .map(|built| built.expect("escaped meta pattern compiles"))
    }
}

/// Metadata candidates scraped from one page, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub og_title: Option<String>,
    pub page_title: Option<String>,
    pub og_description: Option<String>,
    pub meta_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
}

impl PageMetadata {
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self {
            og_title: meta_content(html, MetaTag::OgTitle),
            page_title: page_title(html),
            og_description: meta_content(html, MetaTag::OgDescription),
            meta_description: meta_content(html, MetaTag::Description),
            og_image: meta_content(html, MetaTag::OgImage),
            twitter_image: meta_content(html, MetaTag::TwitterImage),
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.og_title.as_deref().or(self.page_title.as_deref())
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.og_description
            .as_deref()
            .or(self.meta_description.as_deref())
    }

    /// Raw image reference, not yet resolved against the page URL.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.og_image.as_deref().or(self.twitter_image.as_deref())
    }
}

/// Content of the tag's `<meta ... content="...">`, in either attribute order.
#[must_use]
pub fn meta_content(html: &str, tag: MetaTag) -> Option<String> {
    META_PATTERNS[tag as usize]
        .iter()
        .find_map(|pattern| first_capture(pattern, html))
}

/// Text of the first `<title>` element.
#[must_use]
pub fn page_title(html: &str) -> Option<String> {
    first_capture(&TITLE_TAG, html)
}

/// Decode the handful of entities that show up in meta values.
///
/// `&amp;` goes first, so `&amp;lt;` ends up as `<`.
#[must_use]
pub fn decode_html_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 8] = [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#039;", "'"),
        ("&#x27;", "'"),
        ("&#x2F;", "/"),
        ("&nbsp;", " "),
    ];

    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            if acc.contains(entity) {
                acc.replace(entity, replacement)
            } else {
                acc
            }
        })
}

fn first_capture(pattern: &Regex, html: &str) -> Option<String> {
    let raw = pattern.captures(html)?.get(1)?.as_str().trim();
    if raw.is_empty() {
        None
    } else {
        Some(decode_html_entities(raw))
    }
}
