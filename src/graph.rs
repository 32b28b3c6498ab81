use std::collections::HashMap;
use std::collections::HashSet;

/// Append-only record of what the crawl found: outbound links and matched
/// emails per visited URL. Written once per key during the run, read only at
/// the end for display. Insertion order is kept so the rendered trees are
/// deterministic and start from the seed.
#[derive(Debug, Default)]
pub struct CrawlGraph {
    links: HashMap<String, Vec<String>>,
    emails: HashMap<String, Vec<String>>,
    link_order: Vec<String>,
    email_order: Vec<String>,
}

impl CrawlGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outbound links of `url`, even when empty. A URL is visited
    /// at most once, so keys are never overwritten.
    pub fn record_links(&mut self, url: &str, links: Vec<String>) {
        if !self.links.contains_key(url) {
            self.link_order.push(url.to_string());
        }
        self.links.insert(url.to_string(), links);
    }

    /// Records the emails matched on `url`. No-op when `emails` is empty.
    pub fn record_emails(&mut self, url: &str, emails: Vec<String>) {
        if emails.is_empty() {
            return;
        }
        if !self.emails.contains_key(url) {
            self.email_order.push(url.to_string());
        }
        self.emails.insert(url.to_string(), emails);
    }

    pub fn links_of(&self, url: &str) -> Option<&[String]> {
        self.links.get(url).map(|v| v.as_slice())
    }

    pub fn emails_of(&self, url: &str) -> Option<&[String]> {
        self.emails.get(url).map(|v| v.as_slice())
    }

    /// Visited URLs in the order they were recorded.
    pub fn link_keys(&self) -> &[String] {
        &self.link_order
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Depth-first rendering of the link graph starting from the first key
    /// recorded. The guard set keeps cycles (a page linking to an ancestor or
    /// to itself) from recursing forever. Components not reachable from the
    /// first key are left out.
    pub fn render_link_tree(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.link_order.first() {
            let mut seen = HashSet::new();
            self.render_node(root, 0, &mut seen, &mut out);
        }
        out
    }

    fn render_node(&self, node: &str, depth: usize, seen: &mut HashSet<String>, out: &mut String) {
        if !seen.insert(node.to_string()) {
            return;
        }
        out.push_str(&"    ".repeat(depth));
        if depth > 0 {
            out.push_str("└── ");
        }
        out.push_str(node);
        out.push('\n');
        if let Some(children) = self.links.get(node) {
            for child in children {
                self.render_node(child, depth + 1, seen, out);
            }
        }
    }

    /// Flat listing: one line per URL with recorded emails, one indented line
    /// per match.
    pub fn render_email_tree(&self) -> String {
        let mut out = String::new();
        for url in &self.email_order {
            out.push_str("└── ");
            out.push_str(url);
            out.push('\n');
            for email in &self.emails[url] {
                out.push_str("    └── ");
                out.push_str(email);
                out.push('\n');
            }
        }
        out
    }
}
