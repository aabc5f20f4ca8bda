//! Node extraction: one heading snapshot in, one event record out.

use crate::error::{ExtractionError, ExtractionResult, ShapeError};
use crate::pipeline::date_range::DateRangeParser;
use crate::types::config::CrawlConfig;
use crate::types::event::EventRecord;
use crate::types::node::{ListItem, RawEventNode};

/// Builds an [`EventRecord`] from a heading snapshot.
///
/// Expected shape: a link child for name and uri, then a sibling list whose
/// first item is the location (with a flag indicator) and whose second item
/// is the date range.
#[derive(Debug, Clone)]
pub struct NodeExtractor {
    dates: DateRangeParser,
    require_country: bool,
}

impl Default for NodeExtractor {
    fn default() -> Self {
        Self::new(&CrawlConfig::default())
    }
}

impl NodeExtractor {
    pub fn new(config: &CrawlConfig) -> Self {
        Self {
            dates: DateRangeParser::from_config(config),
            require_country: config.require_country,
        }
    }

    pub fn extract(&self, node: &RawEventNode) -> ExtractionResult<EventRecord> {
        let fail = |reason: ShapeError| ExtractionError::new(node.markup.clone(), reason);

        let (location_item, date_item) = Self::items(node).map_err(fail)?;
        let country_code = self.country_code(location_item).map_err(fail)?;

        let link = node.link().ok_or(ShapeError::MissingLink).map_err(fail)?;
        let uri = link
            .href
            .as_deref()
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .ok_or(ShapeError::MissingHref)
            .map_err(fail)?;

        let range = self
            .dates
            .parse(date_item.text.trim())
            .map_err(|e| ExtractionError::new(node.markup.clone(), e))?;

        Ok(EventRecord {
            name: link.text.trim().to_string(),
            uri: uri.to_string(),
            location: location_item.text.trim().to_string(),
            country_code,
            month: range.month,
            start_date: range.start,
            end_date: range.end,
        })
    }

    fn items(node: &RawEventNode) -> Result<(&ListItem, &ListItem), ShapeError> {
        let items = node.list_items().ok_or(ShapeError::MissingList)?;
        match (node.location_item(), node.date_item()) {
            (Some(location), Some(date)) => Ok((location, date)),
            _ => Err(ShapeError::TooFewItems { found: items.len() }),
        }
    }

    fn country_code(&self, location: &ListItem) -> Result<Option<String>, ShapeError> {
        let Some(class) = location.flag_class() else {
            return if self.require_country {
                Err(ShapeError::MissingFlag)
            } else {
                Ok(None)
            };
        };

        location
            .country_code()
            .map(Some)
            .ok_or_else(|| ShapeError::MalformedFlag {
                class: class.to_string(),
            })
    }
}
