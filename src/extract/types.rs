use serde::{Deserialize, Serialize};

/// An anchor's target and visible text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// An image's source and alternative text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Result of one extraction over a parsed page
///
/// Serialized as `{"kind": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// h1..h6 text in document order
    Headlines(Vec<String>),
    /// Anchors with a non-empty href
    Links(Vec<Link>),
    /// Every image element
    Images(Vec<Image>),
    /// Body text nodes containing a keyword
    TextMatches(Vec<String>),
    /// Number of elements with a tag name
    ElementCount(usize),
    /// Wiki-style hrefs of a single page
    FollowedLinks(Vec<String>),
    /// Outer HTML of CSS selector matches
    Selection(Vec<String>),
}

impl ExtractionResult {
    /// Short label for the result kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Headlines(_) => "headlines",
            Self::Links(_) => "links",
            Self::Images(_) => "images",
            Self::TextMatches(_) => "text_matches",
            Self::ElementCount(_) => "element_count",
            Self::FollowedLinks(_) => "followed_links",
            Self::Selection(_) => "selection",
        }
    }

    /// Number of items held; an element count holds one value
    pub fn len(&self) -> usize {
        match self {
            Self::Headlines(items)
            | Self::TextMatches(items)
            | Self::FollowedLinks(items)
            | Self::Selection(items) => items.len(),
            Self::Links(links) => links.len(),
            Self::Images(images) => images.len(),
            Self::ElementCount(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Headlines, links and images of one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub headlines: Vec<String>,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
}

impl PageSummary {
    /// Splits the summary into its three results
    pub fn into_results(self) -> [ExtractionResult; 3] {
        [
            ExtractionResult::Headlines(self.headlines),
            ExtractionResult::Links(self.links),
            ExtractionResult::Images(self.images),
        ]
    }
}
