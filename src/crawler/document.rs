//! Parsed HTML document and its read-only queries
//!
//! Parsing never rejects markup: html5ever repairs whatever it is given. The
//! only input refused is content that is not text at all.

use crate::extract::{Image, Link};
use crate::DocumentError;
use encoding_rs::{Encoding, UTF_8};
use scraper::{ElementRef, Html, Selector};

/// Number of leading characters inspected for NUL
const SNIFF_LEN: usize = 1024;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Literal prefix identifying wiki-style links
const WIKI_PREFIX: &str = "/wiki";

/// Compiles a CSS selector
pub fn compile_selector(css: &str) -> Result<Selector, DocumentError> {
    Selector::parse(css).map_err(|e| DocumentError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Extracts the `charset` parameter of a Content-Type value
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decodes a response body to text
///
/// A byte order mark wins over the declared charset. Without either, or when
/// the charset label is unknown, the body is read as UTF-8. Malformed
/// sequences become U+FFFD.
///
/// # Example
///
/// ```
/// use gleaner::crawler::decode_body;
///
/// let text = decode_body(b"caf\xe9", Some("text/html; charset=iso-8859-1"));
/// assert_eq!(text, "café");
/// ```
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!("Body contained sequences invalid in {}", used.name());
    }
    text.into_owned()
}

/// Immutable, queryable HTML tree
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses raw response bytes
    ///
    /// Bytes are decoded with [`decode_body`] using the response's
    /// Content-Type, if known.
    ///
    /// # Returns
    ///
    /// * `Ok(ParsedDocument)` - Parsed tree
    /// * `Err(DocumentError::Binary)` - The decoded text has a NUL in its first 1024 characters
    pub fn parse(bytes: &[u8], content_type: Option<&str>) -> Result<Self, DocumentError> {
        Self::from_html(&decode_body(bytes, content_type))
    }

    /// Parses an HTML string
    ///
    /// # Example
    ///
    /// ```
    /// use gleaner::ParsedDocument;
    ///
    /// let doc = ParsedDocument::from_html("<h1>Title</h1><p>Body</p>").unwrap();
    /// assert_eq!(doc.headings(), vec!["Title".to_string()]);
    /// assert_eq!(doc.count_tag("P"), 1);
    /// ```
    pub fn from_html(html: &str) -> Result<Self, DocumentError> {
        if html.chars().take(SNIFF_LEN).any(|c| c == '\0') {
            return Err(DocumentError::Binary(SNIFF_LEN));
        }

        Ok(Self {
            html: Html::parse_document(html),
        })
    }

    /// All elements in document order
    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    fn elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.elements()
            .filter(move |element| element.value().name().eq_ignore_ascii_case(tag))
    }

    /// Text of every h1..h6 element, in document order
    pub fn headings(&self) -> Vec<String> {
        self.elements()
            .filter(|element| HEADING_TAGS.contains(&element.value().name()))
            .map(|element| element.text().collect())
            .collect()
    }

    /// `(href, text)` of every anchor with a non-empty href
    pub fn links(&self) -> Vec<Link> {
        self.elements_named("a")
            .filter_map(|element| {
                let href = element.value().attr("href").filter(|href| !href.is_empty())?;
                Some(Link {
                    href: href.to_string(),
                    text: element.text().collect(),
                })
            })
            .collect()
    }

    /// `(src, alt)` of every image; either attribute may be missing
    pub fn images(&self) -> Vec<Image> {
        self.elements_named("img")
            .map(|element| Image {
                src: element.value().attr("src").map(str::to_string),
                alt: element.value().attr("alt").map(str::to_string),
            })
            .collect()
    }

    /// Text nodes under `<body>` containing `keyword`, ignoring case
    ///
    /// An empty keyword matches every non-empty text node.
    pub fn find_text(&self, keyword: &str) -> Vec<String> {
        let Some(body) = self.elements_named("body").next() else {
            return Vec::new();
        };

        let needle = keyword.to_lowercase();
        body.descendants()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .filter(|text| !text.is_empty() && text.to_lowercase().contains(&needle))
            .map(str::to_string)
            .collect()
    }

    /// Outer HTML of every element matching a CSS selector
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Matches in document order
    /// * `Err(DocumentError::Selector)` - The selector does not parse
    pub fn select(&self, css: &str) -> Result<Vec<String>, DocumentError> {
        let selector = compile_selector(css)?;
        Ok(self.select_compiled(&selector))
    }

    /// Outer HTML of every element matching an already compiled selector
    pub fn select_compiled(&self, selector: &Selector) -> Vec<String> {
        self.html
            .select(selector)
            .map(|element| element.html())
            .collect()
    }

    /// Number of elements named `tag`, ignoring case
    pub fn count_tag(&self, tag: &str) -> usize {
        self.elements_named(tag).count()
    }

    /// Hrefs beginning with `/wiki`, duplicates kept
    pub fn wiki_links(&self) -> Vec<String> {
        self.elements_named("a")
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| href.starts_with(WIKI_PREFIX))
            .map(str::to_string)
            .collect()
    }
}
