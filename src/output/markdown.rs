//! Markdown rendering of extraction results
//!
//! Each result becomes a `##` section with a bulleted list, the same way the
//! shell prints it to the terminal.

use crate::extract::{ExtractionResult, Image, Link, PageSummary};

/// Collapses runs of whitespace so multi-line text fits on one bullet
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn format_link(link: &Link) -> String {
    let text = one_line(&link.text);
    if text.is_empty() {
        format!("<{}>", link.href)
    } else {
        format!("[{}]({})", text, link.href)
    }
}

fn format_image(image: &Image) -> String {
    let src = image.src.as_deref().unwrap_or("(no src)");
    match image.alt.as_deref().map(one_line) {
        Some(alt) if !alt.is_empty() => format!("{} ({})", src, alt),
        _ => src.to_string(),
    }
}

fn push_items<I>(md: &mut String, items: I)
where
    I: IntoIterator<Item = String>,
{
    let mut any = false;
    for item in items {
        md.push_str(&format!("- {}\n", item));
        any = true;
    }
    if !any {
        md.push_str("_(none)_\n");
    }
}

/// Formats one extraction result under a `## title` heading
///
/// # Example
///
/// ```
/// use gleaner::extract::ExtractionResult;
/// use gleaner::output::format_result;
///
/// let md = format_result("Number of 'p' elements", &ExtractionResult::ElementCount(4));
/// assert_eq!(md, "## Number of 'p' elements\n\n4\n");
/// ```
pub fn format_result(title: &str, result: &ExtractionResult) -> String {
    let mut md = String::new();
    md.push_str(&format!("## {}\n\n", title));

    match result {
        ExtractionResult::Headlines(items) | ExtractionResult::TextMatches(items) => {
            push_items(&mut md, items.iter().map(|item| one_line(item)));
        }
        ExtractionResult::FollowedLinks(items) | ExtractionResult::Selection(items) => {
            push_items(&mut md, items.iter().cloned());
        }
        ExtractionResult::Links(links) => push_items(&mut md, links.iter().map(format_link)),
        ExtractionResult::Images(images) => push_items(&mut md, images.iter().map(format_image)),
        ExtractionResult::ElementCount(count) => md.push_str(&format!("{}\n", count)),
    }

    md
}

/// Formats headlines, links and images as three sections
pub fn format_summary(summary: &PageSummary) -> String {
    let [headlines, links, images] = summary.clone().into_results();
    [
        format_result("Headlines", &headlines),
        format_result("Links", &links),
        format_result("Images", &images),
    ]
    .join("\n")
}
