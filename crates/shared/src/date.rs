use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid date range: end date {end} is before start date {start}")]
pub struct InvalidDateRange {
    pub start: Date,
    pub end: Date,
}

/// Inclusive date range a meal plan covers.
///
/// Construction is validated: `end` must not be before `start`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidDateRange> {
        if end < start {
            return Err(InvalidDateRange { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn days(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }
}
