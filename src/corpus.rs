//! HTML corpus acquisition
//!
//! Boundary glue between a directory of HTML pages and the ranking core:
//! reads every `.html` file, extracts anchor `href` targets, and builds a
//! [`LinkGraph`] filtered to in-corpus targets with self-references
//! removed. The graph handed to the estimators therefore already
//! satisfies the construction invariants.

use crate::errors::{RankError, Result};
use crate::graph::LinkGraph;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::info;

const HREF_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Crawl a directory of HTML files into a link graph.
///
/// Every `*.html` file becomes a page named by its filename; links to
/// files outside the corpus and links from a page to itself are dropped.
///
/// # Errors
///
/// Returns [`RankError::Io`] if the directory or any HTML file in it
/// cannot be read.
pub fn crawl(directory: &Path) -> Result<LinkGraph> {
    let href = Regex::new(HREF_PATTERN)
        .map_err(|e| RankError::internal(format!("bad href pattern: {e}")))?;

    let mut pages: Vec<(String, Vec<String>)> = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let contents = fs::read_to_string(&path)?;
        let links: Vec<String> = href
            .captures_iter(&contents)
            .map(|cap| cap[1].to_string())
            .collect();
        pages.push((name.to_string(), links));
    }

    let graph = LinkGraph::from_pages(pages);
    info!(
        pages = graph.len(),
        links = graph.link_count(),
        "crawled corpus at {}",
        directory.display()
    );
    Ok(graph)
}
