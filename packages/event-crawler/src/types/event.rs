//! Event records and parsed date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One event, as extracted from a listing heading.
///
/// Serialized with the listing API's field names; dates are ISO-8601
/// (`YYYY-MM-DD`) and a missing end date or country is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventRecord {
    pub name: String,
    pub uri: String,
    pub location: String,
    pub country_code: Option<String>,
    /// Month label such as "March 2023"
    pub month: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl EventRecord {
    /// Number of days the event spans, counting both ends.
    pub fn duration_days(&self) -> i64 {
        match self.end_date {
            Some(end) => (end - self.start_date).num_days() + 1,
            None => 1,
        }
    }
}

/// A parsed date-range string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub raw: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub month: String,
}

impl DateRange {
    pub fn is_single_day(&self) -> bool {
        self.end.map_or(true, |end| end == self.start)
    }
}
