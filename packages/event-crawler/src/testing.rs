//! Testing utilities: listing-page fixtures.
//!
//! Useful for exercising the crawler and the HTTP layer without network
//! calls. Pair with [`MockFetcher`](crate::fetchers::MockFetcher).

/// One event entry in a fixture listing page.
#[derive(Debug, Clone)]
pub struct FixtureEvent {
    pub name: String,
    pub href: Option<String>,
    pub location: String,
    /// Country code for the flag indicator, `None` for no flag
    pub country: Option<String>,
    /// Date text, `None` to omit the date item
    pub dates: Option<String>,
}

impl FixtureEvent {
    /// A well-formed entry.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        country: impl Into<String>,
        dates: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            href: Some(format!("/events/{}", slug(&name))),
            name,
            location: location.into(),
            country: Some(country.into()),
            dates: Some(dates.into()),
        }
    }

    pub fn without_flag(mut self) -> Self {
        self.country = None;
        self
    }

    pub fn without_dates(mut self) -> Self {
        self.dates = None;
        self
    }

    pub fn without_href(mut self) -> Self {
        self.href = None;
        self
    }

    fn html(&self) -> String {
        let anchor = match &self.href {
            Some(href) => format!(r#"<a href="{}">{}</a>"#, href, self.name),
            None => format!("<a>{}</a>", self.name),
        };
        let flag = self
            .country
            .as_ref()
            .map(|code| format!(r#"<span class="iti-flag {}"></span> "#, code))
            .unwrap_or_default();
        let dates = self
            .dates
            .as_ref()
            .map(|d| format!("\n      <li>{}</li>", d))
            .unwrap_or_default();

        format!(
            r#"  <div class="event">
    <h4 class="event-name">
      {anchor}
    </h4>
    <ul class="event-details">
      <li>{flag}{location}</li>{dates}
    </ul>
  </div>
"#,
            anchor = anchor,
            flag = flag,
            location = self.location,
            dates = dates,
        )
    }
}

/// Builder for a listing page in the shape the crawler expects.
///
/// # Example
///
/// ```rust
/// use event_crawler::testing::{FixtureEvent, ListingFixture};
///
/// let html = ListingFixture::new()
///     .event(FixtureEvent::new("Windmill", "Amsterdam", "nl", "14 June 2024 - 16 June 2024"))
///     .html();
/// assert!(html.contains("iti-flag nl"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingFixture {
    events: Vec<FixtureEvent>,
}

impl ListingFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(mut self, event: FixtureEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn events(mut self, events: impl IntoIterator<Item = FixtureEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the page.
    pub fn html(&self) -> String {
        let body: String = self.events.iter().map(FixtureEvent::html).collect();
        format!(
            "<!DOCTYPE html>\n<html>\n<head><title>Events</title></head>\n<body>\n<section class=\"events\">\n{}</section>\n</body>\n</html>\n",
            body
        )
    }
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
