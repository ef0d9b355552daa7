//! Output error type and the row conversion trait
//!
//! This module defines how extraction results flatten into CSV rows.

use crate::extract::{ExtractionResult, Image, Link, PageSummary};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Values that flatten into fixed-width rows
pub trait Tabular {
    /// Rows in display order; every row has the same width
    fn rows(&self) -> Vec<Vec<String>>;
}

fn link_row(link: &Link) -> Vec<String> {
    vec![link.href.clone(), link.text.clone()]
}

fn image_row(image: &Image) -> Vec<String> {
    vec![
        image.src.clone().unwrap_or_default(),
        image.alt.clone().unwrap_or_default(),
    ]
}

fn single_column(items: &[String]) -> Vec<Vec<String>> {
    items.iter().map(|item| vec![item.clone()]).collect()
}

impl Tabular for ExtractionResult {
    fn rows(&self) -> Vec<Vec<String>> {
        match self {
            Self::Headlines(items)
            | Self::TextMatches(items)
            | Self::FollowedLinks(items)
            | Self::Selection(items) => single_column(items),
            Self::Links(links) => links.iter().map(link_row).collect(),
            Self::Images(images) => images.iter().map(image_row).collect(),
            Self::ElementCount(count) => vec![vec![count.to_string()]],
        }
    }
}

/// Three columns: kind, then the two fields of a link or image
/// (headlines leave the last column empty)
impl Tabular for PageSummary {
    fn rows(&self) -> Vec<Vec<String>> {
        let headlines = self
            .headlines
            .iter()
            .map(|headline| vec!["headline".to_string(), headline.clone(), String::new()]);

        let links = self.links.iter().map(|link| {
            let mut row = vec!["link".to_string()];
            row.extend(link_row(link));
            row
        });

        let images = self.images.iter().map(|image| {
            let mut row = vec!["image".to_string()];
            row.extend(image_row(image));
            row
        });

        headlines.chain(links).chain(images).collect()
    }
}
