//! Immutable snapshots of heading nodes.
//!
//! A [`RawEventNode`] holds just the text and attribute values extraction
//! needs, captured once from the parsed document. Nothing borrows the
//! document after capture, so the parsed tree can be dropped before any
//! further processing.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// Substring that marks a flag indicator's class attribute.
pub const FLAG_CLASS_MARKER: &str = "iti-flag";

/// Snapshot of one event heading and the structure around it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawEventNode {
    /// Inner markup of the heading, kept for diagnostics
    pub markup: String,

    /// The heading's descriptive link child
    pub link: Option<NodeLink>,

    /// `li` items of the list next to the heading, `None` when there is no list
    pub list_items: Option<Vec<ListItem>>,
}

/// Text and target of a heading's link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLink {
    pub text: String,
    pub href: Option<String>,
}

/// One list item next to a heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Visible text of the item (untrimmed)
    pub text: String,

    /// Class attribute of the embedded flag indicator, if any
    pub flag_class: Option<String>,
}

impl RawEventNode {
    /// Create an empty snapshot with the given markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            ..Default::default()
        }
    }

    /// Set the link child.
    pub fn with_link(mut self, text: impl Into<String>, href: Option<&str>) -> Self {
        self.link = Some(NodeLink {
            text: text.into(),
            href: href.map(str::to_string),
        });
        self
    }

    /// Set the sibling list items.
    pub fn with_list_items(mut self, items: Vec<ListItem>) -> Self {
        self.list_items = Some(items);
        self
    }

    /// Capture a snapshot from a heading element.
    ///
    /// - link: first `a` element among the heading's children
    /// - list items: `li` descendants of every `ul` child of the heading's parent
    /// - flag: first `span` in an item whose class contains [`FLAG_CLASS_MARKER`]
    pub fn capture(heading: ElementRef<'_>) -> Self {
        let link = heading
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == "a")
            .map(|anchor| NodeLink {
                text: anchor.text().collect(),
                href: anchor.value().attr("href").map(str::to_string),
            });

        let list_items = heading
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|parent| {
                let lists: Vec<ElementRef<'_>> = parent
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|child| child.value().name() == "ul")
                    .collect();
                if lists.is_empty() {
                    return None;
                }
                Some(
                    lists
                        .into_iter()
                        .flat_map(|list| list.descendants().filter_map(ElementRef::wrap))
                        .filter(|el| el.value().name() == "li")
                        .map(ListItem::capture)
                        .collect(),
                )
            });

        Self {
            markup: heading.inner_html(),
            link,
            list_items,
        }
    }

    /// The heading's link child.
    pub fn link(&self) -> Option<&NodeLink> {
        self.link.as_ref()
    }

    /// All list items, or `None` when the heading has no sibling list.
    pub fn list_items(&self) -> Option<&[ListItem]> {
        self.list_items.as_deref()
    }

    /// First list item: the event location.
    pub fn location_item(&self) -> Option<&ListItem> {
        self.list_items()?.first()
    }

    /// Second list item: the event date range.
    pub fn date_item(&self) -> Option<&ListItem> {
        self.list_items()?.get(1)
    }

    /// Markup shortened to at most `max_chars` characters, for log lines.
    pub fn snippet(&self, max_chars: usize) -> String {
        let trimmed = self.markup.trim();
        match trimmed.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &trimmed[..idx]),
            None => trimmed.to_string(),
        }
    }
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flag_class: None,
        }
    }

    pub fn with_flag_class(mut self, class: impl Into<String>) -> Self {
        self.flag_class = Some(class.into());
        self
    }

    fn capture(item: ElementRef<'_>) -> Self {
        let flag_class = item
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "span")
            .filter_map(|el| el.value().attr("class"))
            .find(|class| class.contains(FLAG_CLASS_MARKER))
            .map(str::to_string);

        Self {
            text: item.text().collect(),
            flag_class,
        }
    }

    /// Class attribute of the flag indicator.
    pub fn flag_class(&self) -> Option<&str> {
        self.flag_class.as_deref()
    }

    /// Second whitespace-separated class token, if it is a two-letter code.
    ///
    /// Returned lower-cased.
    pub fn country_code(&self) -> Option<String> {
        let token = self.flag_class()?.split_whitespace().nth(1)?;
        if token.len() == 2 && token.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(token.to_ascii_lowercase())
        } else {
            None
        }
    }
}
