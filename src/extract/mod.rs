//! Extraction views over a parsed document
//!
//! Every function here is pure: it reads a [`ParsedDocument`] and returns a
//! display- or export-ready value. Fetching and robots gating live in
//! [`crate::crawler::Pipeline`].

mod types;

pub use types::{ExtractionResult, Image, Link, PageSummary};

use crate::crawler::ParsedDocument;
use crate::DocumentError;

/// Headlines, links and images in one pass
pub fn extract_all(doc: &ParsedDocument) -> PageSummary {
    PageSummary {
        headlines: doc.headings(),
        links: doc.links(),
        images: doc.images(),
    }
}

pub fn headlines(doc: &ParsedDocument) -> ExtractionResult {
    ExtractionResult::Headlines(doc.headings())
}

pub fn links(doc: &ParsedDocument) -> ExtractionResult {
    ExtractionResult::Links(doc.links())
}

pub fn images(doc: &ParsedDocument) -> ExtractionResult {
    ExtractionResult::Images(doc.images())
}

/// Body text nodes containing `keyword`, ignoring case
///
/// An empty keyword matches every non-empty text node.
pub fn search_text(doc: &ParsedDocument, keyword: &str) -> ExtractionResult {
    ExtractionResult::TextMatches(doc.find_text(keyword))
}

/// Elements matching a CSS selector
pub fn select(doc: &ParsedDocument, css: &str) -> Result<ExtractionResult, DocumentError> {
    doc.select(css).map(ExtractionResult::Selection)
}

/// Number of `tag` elements, ignoring case
pub fn count_elements(doc: &ParsedDocument, tag: &str) -> ExtractionResult {
    ExtractionResult::ElementCount(doc.count_tag(tag))
}

/// Wiki-style links of the page
pub fn wiki_links(doc: &ParsedDocument) -> ExtractionResult {
    ExtractionResult::FollowedLinks(doc.wiki_links())
}
