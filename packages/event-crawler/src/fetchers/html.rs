//! Snapshotting heading nodes out of an HTML document.

use scraper::{Html, Selector};

use crate::error::{FetchError, FetchResult};
use crate::types::node::RawEventNode;

/// Parse a node selector, mapping failures to [`FetchError::InvalidSelector`].
pub fn parse_selector(selector: &str) -> FetchResult<Selector> {
    Selector::parse(selector).map_err(|e| FetchError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Snapshot every element matching `selector`, in document order.
///
/// The parsed document is dropped before returning; only owned snapshots
/// leave this function.
pub fn snapshot_nodes(html: &str, selector: &str) -> FetchResult<Vec<RawEventNode>> {
    let selector = parse_selector(selector)?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).map(RawEventNode::capture).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_nodes_in_document_order() {
        let html = r#"
            <section><h4 class="event-name"><a href="/1">One</a></h4></section>
            <section><h4 class="other"><a href="/skip">Skip</a></h4></section>
            <section><h4 class="event-name highlighted"><a href="/2">Two</a></h4></section>
        "#;

        let nodes = snapshot_nodes(html, "h4.event-name").unwrap();
        let names: Vec<&str> = nodes
            .iter()
            .map(|n| n.link().unwrap().text.as_str())
            .collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[test]
    fn test_invalid_selector() {
        let err = snapshot_nodes("<p/>", "h4[").unwrap_err();
        assert!(matches!(err, FetchError::InvalidSelector { .. }));
    }

    #[test]
    fn test_no_matches() {
        assert!(snapshot_nodes("<p>nothing</p>", "h4.event-name")
            .unwrap()
            .is_empty());
    }
}
