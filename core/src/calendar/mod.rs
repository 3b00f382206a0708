//! Calendar axis and period derivation
//!
//! The generator samples transaction dates uniformly (with replacement) from
//! a gap-free sequence of calendar days, and derives the reporting period
//! fields (year, month, ISO week, quarter) as pure functions of the date.
//! Downstream consumers can re-derive the same fields from the persisted
//! `date` column; the persisted period columns are a convenience only.

use crate::config::ConfigError;
use crate::rng::RngManager;
use chrono::{Datelike, NaiveDate};

/// Ordered, gap-free sequence of calendar days spanning whole years
///
/// # Example
/// ```
/// use txgen_core_rs::DateAxis;
///
/// let axis = DateAxis::build(2020, 1).unwrap(); // 2020 is a leap year
/// assert_eq!(axis.len(), 366);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAxis {
    days: Vec<NaiveDate>,
}

impl DateAxis {
    /// Build the axis for `[start_year-01-01, (start_year + n_years - 1)-12-31]`
    ///
    /// Fails with a configuration error if the span is empty or the years
    /// fall outside chrono's representable range.
    pub fn build(start_year: i32, n_years: u32) -> Result<Self, ConfigError> {
        if n_years == 0 {
            return Err(ConfigError::EmptyYearSpan);
        }

        let end_year = start_year
            .checked_add(n_years as i32 - 1)
            .ok_or(ConfigError::YearOutOfRange(start_year))?;
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
            .ok_or(ConfigError::YearOutOfRange(start_year))?;
        let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
            .ok_or(ConfigError::YearOutOfRange(end_year))?;

        let days: Vec<NaiveDate> = start.iter_days().take_while(|day| *day <= end).collect();

        Ok(Self { days })
    }

    /// Number of days on the axis
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the axis is empty (never true for a built axis)
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First day of the axis
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last day of the axis
    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Draw one day uniformly (with replacement) from the axis
    ///
    /// Consumes exactly one RNG draw.
    pub fn sample(&self, rng: &mut RngManager) -> NaiveDate {
        let idx = rng.range(0, self.days.len() as i64) as usize;
        self.days[idx]
    }
}

/// Reporting period fields derived from a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodFields {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// ISO-8601 week number, 1-53
    pub week: u32,
    /// Calendar quarter, 1-4
    pub quarter: u32,
}

/// Derive the period fields for a date
///
/// Pure and deterministic: the same date always yields the same fields.
/// The week follows the ISO-8601 definition, so early-January dates can
/// belong to the last week of the previous ISO year.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use txgen_core_rs::period_fields;
///
/// let fields = period_fields(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// assert_eq!(fields.year, 2024);
/// assert_eq!(fields.month, 3);
/// assert_eq!(fields.week, 11);
/// assert_eq!(fields.quarter, 1);
/// ```
pub fn period_fields(date: NaiveDate) -> PeriodFields {
    let month = date.month();
    PeriodFields {
        year: date.year(),
        month,
        week: date.iso_week().week(),
        quarter: (month + 2) / 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_is_gap_free() {
        let axis = DateAxis::build(2021, 2).unwrap();
        assert_eq!(axis.len(), 365 + 365);
        assert_eq!(axis.first(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(axis.last(), NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_zero_year_span_rejected() {
        assert_eq!(DateAxis::build(2020, 0), Err(ConfigError::EmptyYearSpan));
    }

    #[test]
    fn test_quarter_boundaries() {
        let q = |y, m, d| period_fields(NaiveDate::from_ymd_opt(y, m, d).unwrap()).quarter;
        assert_eq!(q(2023, 3, 31), 1);
        assert_eq!(q(2023, 4, 1), 2);
        assert_eq!(q(2023, 9, 30), 3);
        assert_eq!(q(2023, 12, 31), 4);
    }
}
