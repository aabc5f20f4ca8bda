//! Crawl a collection of heading snapshots into a report.

use tracing::{debug, info, warn};

use crate::pipeline::extract::NodeExtractor;
use crate::types::config::CrawlConfig;
use crate::types::node::RawEventNode;
use crate::types::report::ExtractionReport;

/// Longest markup excerpt written to failure log lines.
const LOG_SNIPPET_CHARS: usize = 200;

/// Runs [`NodeExtractor`] over every node, keeping failures out of the way.
///
/// A failing node never aborts the crawl; it is logged and recorded in the
/// report's failures. Records keep the relative order of their nodes.
#[derive(Debug, Clone, Default)]
pub struct Crawler {
    extractor: NodeExtractor,
}

impl Crawler {
    pub fn new(config: &CrawlConfig) -> Self {
        Self {
            extractor: NodeExtractor::new(config),
        }
    }

    pub fn crawl(&self, nodes: &[RawEventNode]) -> ExtractionReport {
        debug!(nodes = nodes.len(), "Crawl starting");

        let mut report = ExtractionReport::new();
        for (position, node) in nodes.iter().enumerate() {
            match self.extractor.extract(node) {
                Ok(event) => report.push_event(event),
                Err(e) => {
                    warn!(
                        position = position,
                        error = %e.reason,
                        node = %node.snippet(LOG_SNIPPET_CHARS),
                        "Skipping event node"
                    );
                    report.push_failure(position, e);
                }
            }
        }

        info!(
            nodes = nodes.len(),
            events = report.events().len(),
            failures = report.failures().len(),
            "Crawl completed"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::node::ListItem;

    fn good(name: &str, dates: &str) -> RawEventNode {
        RawEventNode::new(format!("<a>{name}</a>"))
            .with_link(name, Some(format!("/e/{name}").as_str()))
            .with_list_items(vec![
                ListItem::new("Somewhere").with_flag_class("iti-flag gb"),
                ListItem::new(dates),
            ])
    }

    fn flagless(name: &str) -> RawEventNode {
        RawEventNode::new(format!("<a>{name}</a>"))
            .with_link(name, Some("/e/x"))
            .with_list_items(vec![ListItem::new("Somewhere"), ListItem::new("1 May 2024")])
    }

    #[test]
    fn test_empty_input() {
        let report = Crawler::default().crawl(&[]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_failures_do_not_abort_and_order_is_kept() {
        let nodes = vec![
            good("c", "3 Mar 2024"),
            flagless("bad-1"),
            good("a", "1 Jan 2024"),
            good("b", "not a date"),
            good("d", "2 Feb 2024"),
        ];

        let report = Crawler::new(&CrawlConfig::default()).crawl(&nodes);

        let names: Vec<&str> = report.events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "d"]);

        let positions: Vec<usize> = report.failures().iter().map(|f| f.position).collect();
        assert_eq!(positions, vec![1, 3]);
        assert_eq!(report.node_count(), nodes.len());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let nodes = vec![good("same", "1 Jan 2024"), good("same", "1 Jan 2024")];
        let report = Crawler::default().crawl(&nodes);
        assert_eq!(report.events().len(), 2);
        assert_eq!(report.events()[0], report.events()[1]);
    }
}
