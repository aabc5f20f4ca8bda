//! Free-form date-range parsing.
//!
//! Inputs look like `"12 March 2023"` or `" 1 Jan 2024 - 3 Jan 2024 "`: one
//! or two dates separated by a hyphen. The start date is mandatory; the end
//! date is optional and handled according to [`EndDatePolicy`].

use chrono::{Locale, NaiveDate};
use tracing::warn;

use crate::error::{DateParseError, DateParseReason, DateParseResult};
use crate::types::config::{CrawlConfig, EndDatePolicy};
use crate::types::event::DateRange;

const RANGE_SEPARATOR: char = '-';

/// Parses date-range strings with an explicit locale and format list.
#[derive(Debug, Clone)]
pub struct DateRangeParser {
    locale: Locale,
    formats: Vec<String>,
    end_date_policy: EndDatePolicy,
}

impl DateRangeParser {
    /// Create a parser with the default formats and lenient end dates.
    pub fn new(locale: Locale) -> Self {
        Self::from_config(&CrawlConfig::default().with_locale(locale))
    }

    pub fn from_config(config: &CrawlConfig) -> Self {
        Self {
            locale: config.locale,
            formats: config.date_formats.clone(),
            end_date_policy: config.end_date_policy,
        }
    }

    pub fn with_end_date_policy(mut self, policy: EndDatePolicy) -> Self {
        self.end_date_policy = policy;
        self
    }

    /// Parse a date-range string.
    ///
    /// Fails when no start date can be read or when more than two dates are
    /// present. A bad end date fails only under [`EndDatePolicy::Strict`].
    pub fn parse(&self, input: &str) -> DateParseResult<DateRange> {
        let tokens: Vec<&str> = input
            .split(RANGE_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        let (start_token, end_token) = match tokens.as_slice() {
            [] => return Err(DateParseError::new(input, DateParseReason::Empty)),
            [start] => (*start, None),
            [start, end] => (*start, Some(*end)),
            _ => {
                return Err(DateParseError::new(
                    input.trim(),
                    DateParseReason::TooManyDates {
                        count: tokens.len(),
                    },
                ))
            }
        };

        let start = self.parse_token(start_token)?;
        let end = match end_token {
            Some(token) => self.parse_end(token, start)?,
            None => None,
        };

        Ok(DateRange {
            raw: input.to_string(),
            start,
            end,
            month: self.month_label(start),
        })
    }

    /// `"<month name> <year>"` in the parser's locale.
    pub fn month_label(&self, date: NaiveDate) -> String {
        date.format_localized("%B %Y", self.locale).to_string()
    }

    fn parse_end(&self, token: &str, start: NaiveDate) -> DateParseResult<Option<NaiveDate>> {
        let checked = self.parse_token(token).and_then(|end| {
            if end < start {
                Err(DateParseError::new(
                    token,
                    DateParseReason::EndBeforeStart { start },
                ))
            } else {
                Ok(end)
            }
        });

        match (checked, self.end_date_policy) {
            (Ok(end), _) => Ok(Some(end)),
            (Err(e), EndDatePolicy::Strict) => Err(e),
            (Err(e), EndDatePolicy::Lenient) => {
                warn!(token = %token, error = %e, "Ignoring unusable end date");
                Ok(None)
            }
        }
    }

    fn parse_token(&self, token: &str) -> DateParseResult<NaiveDate> {
        self.formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
            .ok_or_else(|| {
                DateParseError::new(
                    token,
                    DateParseReason::UnrecognizedFormat {
                        formats: self.formats.len(),
                    },
                )
            })
    }
}

impl Default for DateRangeParser {
    fn default() -> Self {
        Self::from_config(&CrawlConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_date() {
        let range = DateRangeParser::default().parse("12 March 2023").unwrap();
        assert_eq!(range.start, ymd(2023, 3, 12));
        assert_eq!(range.end, None);
        assert_eq!(range.month, "March 2023");
        assert!(range.is_single_day());
    }

    #[test]
    fn test_range_with_abbreviated_months_and_padding() {
        let range = DateRangeParser::default()
            .parse(" 1 Jan 2024 - 3 Jan 2024 ")
            .unwrap();
        assert_eq!(range.start, ymd(2024, 1, 1));
        assert_eq!(range.end, Some(ymd(2024, 1, 3)));
        assert_eq!(range.month, "January 2024");
        assert_eq!(range.raw, " 1 Jan 2024 - 3 Jan 2024 ");
    }

    #[test]
    fn test_month_first_format() {
        let range = DateRangeParser::default().parse("March 12, 2023").unwrap();
        assert_eq!(range.start, ymd(2023, 3, 12));
    }

    #[test]
    fn test_empty_input_fails() {
        let err = DateRangeParser::default().parse("").unwrap_err();
        assert_eq!(err.reason, DateParseReason::Empty);

        let err = DateRangeParser::default().parse("  -  ").unwrap_err();
        assert_eq!(err.reason, DateParseReason::Empty);
    }

    #[test]
    fn test_unparseable_start_fails_with_token() {
        let err = DateRangeParser::default()
            .parse("sometime soon - 3 Jan 2024")
            .unwrap_err();
        assert_eq!(err.token, "sometime soon");
        assert!(matches!(
            err.reason,
            DateParseReason::UnrecognizedFormat { formats: 6 }
        ));
    }

    #[test]
    fn test_too_many_dates_fails() {
        let err = DateRangeParser::default()
            .parse("1 Jan 2024 - 2 Jan 2024 - 3 Jan 2024")
            .unwrap_err();
        assert_eq!(err.reason, DateParseReason::TooManyDates { count: 3 });
    }

    #[test]
    fn test_bad_end_date_lenient() {
        let range = DateRangeParser::default()
            .parse("1 Jan 2024 - TBD")
            .unwrap();
        assert_eq!(range.start, ymd(2024, 1, 1));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_bad_end_date_strict() {
        let parser = DateRangeParser::default().with_end_date_policy(EndDatePolicy::Strict);
        let err = parser.parse("1 Jan 2024 - TBD").unwrap_err();
        assert_eq!(err.token, "TBD");
    }

    #[test]
    fn test_end_before_start() {
        let lenient = DateRangeParser::default()
            .parse("5 Jan 2024 - 3 Jan 2024")
            .unwrap();
        assert_eq!(lenient.end, None);

        let strict = DateRangeParser::default().with_end_date_policy(EndDatePolicy::Strict);
        let err = strict.parse("5 Jan 2024 - 3 Jan 2024").unwrap_err();
        assert_eq!(
            err.reason,
            DateParseReason::EndBeforeStart {
                start: ymd(2024, 1, 5)
            }
        );
    }

    #[test]
    fn test_month_label_uses_locale() {
        let parser = DateRangeParser::new(Locale::fr_FR);
        assert_eq!(parser.month_label(ymd(2023, 3, 12)), "mars 2023");

        let parser = DateRangeParser::new(Locale::de_DE);
        assert_eq!(parser.parse("12 March 2023").unwrap().month, "März 2023");
    }
}
