//! Directed link graph
//!
//! [`LinkGraph`] maps each page to the set of pages it links to, using
//! FxHashMap/FxHashSet for O(1) lookups. Two invariants are enforced at
//! construction and hold for the lifetime of a ranking run:
//!
//! - every link target is itself a page in the graph (links to pages
//!   outside the corpus are dropped), and
//! - a page never links to itself (self-loops are dropped on insertion).
//!
//! A page whose link set ends up empty after filtering is a "dangling"
//! page; the transition model treats it as linking uniformly to every
//! page so that no probability mass is lost.

use rustc_hash::{FxHashMap, FxHashSet};

/// A directed link graph over string page identifiers
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    pages: FxHashMap<String, FxHashSet<String>>,
}

impl LinkGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from (page, outbound links) pairs.
    ///
    /// All pages are registered first, then links are filtered: targets
    /// not present as pages and self-references are dropped. This is the
    /// constructor the corpus crawler uses.
    pub fn from_pages<P, L, T>(pages: P) -> Self
    where
        P: IntoIterator<Item = (String, L)>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let raw: Vec<(String, Vec<String>)> = pages
            .into_iter()
            .map(|(page, links)| (page, links.into_iter().map(Into::into).collect()))
            .collect();

        let known: FxHashSet<String> = raw.iter().map(|(page, _)| page.clone()).collect();

        let mut graph = Self::new();
        for (page, links) in raw {
            let filtered: FxHashSet<String> = links
                .into_iter()
                .filter(|target| *target != page && known.contains(target))
                .collect();
            graph.pages.insert(page, filtered);
        }
        graph
    }

    /// Register a page with no links (no-op if it already exists)
    pub fn add_page(&mut self, page: impl Into<String>) {
        self.pages.entry(page.into()).or_default();
    }

    /// Add a directed link, registering both endpoints.
    ///
    /// Self-loops are silently dropped.
    pub fn add_link(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();
        if from == to {
            return; // no self-loops
        }
        self.pages.entry(to.clone()).or_default();
        self.pages.entry(from).or_default().insert(to);
    }

    /// Number of pages in the graph
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the graph has no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of directed links
    pub fn link_count(&self) -> usize {
        self.pages.values().map(FxHashSet::len).sum()
    }

    /// Check whether a page is in the graph
    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Outbound links of a page, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&FxHashSet<String>> {
        self.pages.get(page)
    }

    /// Outdegree of a page, or `None` if the page is unknown
    pub fn outdegree(&self, page: &str) -> Option<usize> {
        self.pages.get(page).map(FxHashSet::len)
    }

    /// Check whether a page has no outbound links
    pub fn is_dangling(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(FxHashSet::is_empty)
    }

    /// Iterate over page names (unspecified order)
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Page names sorted ascending, for deterministic traversal
    pub fn sorted_pages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over (page, links) entries (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FxHashSet<String>)> {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }
}

impl<const N: usize> From<[(&str, &[&str]); N]> for LinkGraph {
    /// Literal construction for tests: `LinkGraph::from([("a", &["b"][..])])`
    fn from(entries: [(&str, &[&str]); N]) -> Self {
        Self::from_pages(
            entries
                .into_iter()
                .map(|(page, links)| (page.to_string(), links.iter().copied())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = LinkGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_add_link_registers_both_endpoints() {
        let mut graph = LinkGraph::new();
        graph.add_link("a.html", "b.html");

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("a.html"));
        assert!(graph.contains("b.html"));
        assert!(graph.links("a.html").unwrap().contains("b.html"));
        assert!(graph.is_dangling("b.html"));
    }

    #[test]
    fn test_self_loops_dropped() {
        let mut graph = LinkGraph::new();
        graph.add_page("a.html");
        graph.add_link("a.html", "a.html");

        assert_eq!(graph.len(), 1);
        assert!(graph.is_dangling("a.html"));
    }

    #[test]
    fn test_from_pages_drops_external_targets() {
        let graph = LinkGraph::from_pages([
            ("a.html".to_string(), vec!["b.html", "http://elsewhere.org"]),
            ("b.html".to_string(), vec!["a.html"]),
        ]);

        assert_eq!(graph.len(), 2);
        // The external target is not a page, so the link is gone
        assert_eq!(graph.outdegree("a.html"), Some(1));
        assert!(graph.links("a.html").unwrap().contains("b.html"));
    }

    #[test]
    fn test_from_pages_drops_self_references() {
        let graph = LinkGraph::from([("a.html", &["a.html"][..]), ("b.html", &["a.html"][..])]);

        assert!(graph.is_dangling("a.html"));
        assert_eq!(graph.outdegree("b.html"), Some(1));
    }

    #[test]
    fn test_duplicate_links_collapse() {
        let mut graph = LinkGraph::new();
        graph.add_link("a.html", "b.html");
        graph.add_link("a.html", "b.html");

        assert_eq!(graph.outdegree("a.html"), Some(1));
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_sorted_pages() {
        let graph = LinkGraph::from([
            ("c.html", &[][..]),
            ("a.html", &[][..]),
            ("b.html", &[][..]),
        ]);
        assert_eq!(graph.sorted_pages(), vec!["a.html", "b.html", "c.html"]);
    }

    #[test]
    fn test_unknown_page_lookups() {
        let graph = LinkGraph::new();
        assert!(graph.links("nope.html").is_none());
        assert!(graph.outdegree("nope.html").is_none());
        assert!(!graph.is_dangling("nope.html"));
    }
}
