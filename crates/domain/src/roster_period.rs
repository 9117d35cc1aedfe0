// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical roster period calculation.
//!
//! Roster periods are fixed-length, contiguous, and non-overlapping. They are
//! derived deterministically from the policy epoch and period length:
//!
//! ```text
//! index  = floor((date - epoch) / period_length)
//! year   = epoch.year + index / periods_per_year
//! number = index % periods_per_year + 1
//! ```
//!
//! With the default policy (epoch 2025-01-01, 28 days, 13 periods) RP1/2025
//! covers 2025-01-01 to 2025-01-28 and RP1/2026 starts on 2025-12-31.
//! Dates before the epoch or past the planning horizon are rejected.

use crate::error::RosterError;
use crate::policy::RosterPolicy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration};

/// Identifies a roster period by its number within a roster year.
///
/// Displayed and parsed as `RP{number}/{year}`, e.g. `RP12/2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RosterPeriodId {
    // Field order gives chronological ordering.
    year: i32,
    number: u8,
}

impl RosterPeriodId {
    /// Creates a roster period identifier.
    ///
    /// The number is not checked against a policy here; use
    /// [`RosterCalendar::bounds_of`] for that.
    #[must_use]
    pub const fn new(number: u8, year: i32) -> Self {
        Self { year, number }
    }

    /// Returns the 1-based period number within the roster year.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the roster year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl std::fmt::Display for RosterPeriodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RP{}/{}", self.number, self.year)
    }
}

impl FromStr for RosterPeriodId {
    type Err = RosterError;

    /// Parses `RP12/2025`, `rp 12/2025` or `RP12-2025`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RosterError::InvalidPeriodLabel(s.to_string());

        let trimmed: &str = s.trim();
        let rest: &str = trimmed
            .get(..2)
            .filter(|prefix| prefix.eq_ignore_ascii_case("RP"))
            .and_then(|_| trimmed.get(2..))
            .ok_or_else(invalid)?
            .trim_start();

        let (number, year) = rest.split_once(['/', '-']).ok_or_else(invalid)?;
        let number: u8 = number.trim().parse().map_err(|_| invalid())?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;
        if number == 0 {
            return Err(invalid());
        }

        Ok(Self { year, number })
    }
}

/// A single roster period with its inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPeriod {
    id: RosterPeriodId,
    /// Zero-based index counted from the epoch.
    index: u32,
    start_date: Date,
    end_date: Date,
}

impl RosterPeriod {
    /// Returns the period identifier.
    #[must_use]
    pub const fn id(&self) -> RosterPeriodId {
        self.id
    }

    /// Returns the zero-based index of this period counted from the epoch.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the first day of the period (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the period (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns whether `date` falls inside this period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the number of days in this period.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }
}

/// Maps calendar dates onto roster periods.
///
/// The calendar holds no mutable state; the same date always yields the
/// same period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCalendar {
    epoch: Date,
    period_length_days: u16,
    periods_per_year: u8,
    /// Number of periods inside the planning horizon.
    period_count: u32,
}

impl RosterCalendar {
    /// Builds the calendar described by `policy`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DateArithmeticOverflow` if the planning horizon
    /// extends past the supported date range.
    pub fn new(policy: &RosterPolicy) -> Result<Self, RosterError> {
        let period_count: u32 =
            u32::from(policy.planning_horizon_years()) * u32::from(policy.periods_per_year());
        let calendar: Self = Self {
            epoch: policy.epoch(),
            period_length_days: policy.period_length_days(),
            periods_per_year: policy.periods_per_year(),
            period_count,
        };
        // Fail early rather than on the first late lookup.
        calendar.period_at(period_count - 1)?;
        Ok(calendar)
    }

    /// Returns the first date covered by the calendar.
    #[must_use]
    pub const fn first_date(&self) -> Date {
        self.epoch
    }

    /// Returns the last date covered by the calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn last_date(&self) -> Result<Date, RosterError> {
        Ok(self.period_at(self.period_count - 1)?.end_date)
    }

    /// Returns the number of periods in each roster year.
    #[must_use]
    pub const fn periods_per_year(&self) -> u8 {
        self.periods_per_year
    }

    /// Returns the identifier of the roster period containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::OutOfRange` if `date` is before the epoch or
    /// after the planning horizon.
    pub fn period_for(&self, date: Date) -> Result<RosterPeriodId, RosterError> {
        Ok(self.period_containing(date)?.id)
    }

    /// Returns the full roster period containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::OutOfRange` if `date` is outside the calendar.
    pub fn period_containing(&self, date: Date) -> Result<RosterPeriod, RosterError> {
        let index: u32 = self.index_of(date)?;
        self.period_at(index)
    }

    /// Returns the bounds of the period identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The period number is not between 1 and `periods_per_year`
    /// - The period lies before the epoch or past the planning horizon
    pub fn bounds_of(&self, id: RosterPeriodId) -> Result<RosterPeriod, RosterError> {
        if id.number < 1 || id.number > self.periods_per_year {
            return Err(RosterError::InvalidPeriodNumber {
                number: id.number,
                max: self.periods_per_year,
            });
        }

        let year_offset: i64 = i64::from(id.year) - i64::from(self.epoch.year());
        let index: i64 =
            year_offset * i64::from(self.periods_per_year) + i64::from(id.number) - 1;

        let index: u32 = u32::try_from(index)
            .ok()
            .filter(|i| *i < self.period_count)
            .ok_or_else(|| self.out_of_range(self.approximate_start(index)))?;

        self.period_at(index)
    }

    /// Returns every period of roster year `year`, in order.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::OutOfRange` if any part of the year lies outside
    /// the planning horizon.
    pub fn all_periods_in_year(&self, year: i32) -> Result<Vec<RosterPeriod>, RosterError> {
        (1..=self.periods_per_year)
            .map(|number| self.bounds_of(RosterPeriodId::new(number, year)))
            .collect()
    }

    /// Returns the period after `period`, if it is inside the horizon.
    #[must_use]
    pub fn next(&self, period: &RosterPeriod) -> Option<RosterPeriod> {
        let index: u32 = period.index.checked_add(1)?;
        if index >= self.period_count {
            return None;
        }
        self.period_at(index).ok()
    }

    /// Returns the period before `period`, if any.
    #[must_use]
    pub fn previous(&self, period: &RosterPeriod) -> Option<RosterPeriod> {
        let index: u32 = period.index.checked_sub(1)?;
        self.period_at(index).ok()
    }

    /// Computes the zero-based period index of `date`.
    fn index_of(&self, date: Date) -> Result<u32, RosterError> {
        let days: i64 = (date - self.epoch).whole_days();
        if days < 0 {
            return Err(self.out_of_range(date));
        }
        let index: i64 = days / i64::from(self.period_length_days);
        u32::try_from(index)
            .ok()
            .filter(|i| *i < self.period_count)
            .ok_or_else(|| self.out_of_range(date))
    }

    /// Derives the period at a zero-based index.
    pub(crate) fn period_at(&self, index: u32) -> Result<RosterPeriod, RosterError> {
        let length: i64 = i64::from(self.period_length_days);
        let start_date: Date = self
            .epoch
            .checked_add(Duration::days(i64::from(index) * length))
            .ok_or_else(|| RosterError::overflow(format!("calculating period {index} start")))?;
        let end_date: Date = start_date
            .checked_add(Duration::days(length - 1))
            .ok_or_else(|| RosterError::overflow(format!("calculating period {index} end")))?;

        let per_year: u32 = u32::from(self.periods_per_year);
        let year_offset: i32 = i32::try_from(index / per_year)
            .map_err(|_| RosterError::overflow(format!("labelling period {index}")))?;
        // Remainder is always below periods_per_year, which is a u8.
        let number: u8 = u8::try_from(index % per_year + 1).unwrap_or(u8::MAX);

        Ok(RosterPeriod {
            id: RosterPeriodId::new(number, self.epoch.year() + year_offset),
            index,
            start_date,
            end_date,
        })
    }

    /// Best-effort start date for an index, used only to report range errors.
    fn approximate_start(&self, index: i64) -> Date {
        self.epoch
            .checked_add(Duration::days(index * i64::from(self.period_length_days)))
            .unwrap_or(self.epoch)
    }

    fn out_of_range(&self, date: Date) -> RosterError {
        RosterError::OutOfRange {
            date,
            earliest: self.epoch,
            latest: self.last_date().unwrap_or(self.epoch),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::policy::PolicyConfig;
    use time::macros::date;

    fn default_calendar() -> RosterCalendar {
        RosterCalendar::new(&RosterPolicy::default()).unwrap()
    }

    #[test]
    fn test_epoch_is_first_day_of_rp1() {
        let calendar: RosterCalendar = default_calendar();
        let period: RosterPeriod = calendar.period_containing(date!(2025 - 01 - 01)).unwrap();

        assert_eq!(period.id(), RosterPeriodId::new(1, 2025));
        assert_eq!(period.start_date(), date!(2025 - 01 - 01));
        assert_eq!(period.end_date(), date!(2025 - 01 - 28));
        assert_eq!(period.duration_days(), 28);
    }

    #[test]
    fn test_period_boundary_is_exact() {
        let calendar: RosterCalendar = default_calendar();
        assert_eq!(
            calendar.period_for(date!(2025 - 01 - 28)).unwrap(),
            RosterPeriodId::new(1, 2025)
        );
        assert_eq!(
            calendar.period_for(date!(2025 - 01 - 29)).unwrap(),
            RosterPeriodId::new(2, 2025)
        );
    }

    #[test]
    fn test_period_number_wraps_after_thirteen() {
        let calendar: RosterCalendar = default_calendar();
        // 13 * 28 = 364 days after the epoch.
        assert_eq!(
            calendar.period_for(date!(2025 - 12 - 30)).unwrap(),
            RosterPeriodId::new(13, 2025)
        );
        assert_eq!(
            calendar.period_for(date!(2025 - 12 - 31)).unwrap(),
            RosterPeriodId::new(1, 2026)
        );
    }

    #[test]
    fn test_date_before_epoch_is_out_of_range() {
        let calendar: RosterCalendar = default_calendar();
        let err: RosterError = calendar.period_for(date!(2024 - 12 - 31)).unwrap_err();
        assert!(matches!(err, RosterError::OutOfRange { date, .. } if date == date!(2024 - 12 - 31)));
    }

    #[test]
    fn test_date_past_horizon_is_out_of_range() {
        let calendar: RosterCalendar = default_calendar();
        let last: Date = calendar.last_date().unwrap();
        assert!(calendar.period_for(last).is_ok());

        let beyond: Date = last.next_day().unwrap();
        assert!(matches!(
            calendar.period_for(beyond),
            Err(RosterError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bounds_of_round_trips_period_for() {
        let calendar: RosterCalendar = default_calendar();
        let id: RosterPeriodId = RosterPeriodId::new(12, 2025);
        let period: RosterPeriod = calendar.bounds_of(id).unwrap();

        assert_eq!(period.start_date(), date!(2025 - 11 - 05));
        assert_eq!(period.end_date(), date!(2025 - 12 - 02));
        assert_eq!(calendar.period_for(period.start_date()).unwrap(), id);
        assert_eq!(calendar.period_for(period.end_date()).unwrap(), id);
    }

    #[test]
    fn test_bounds_of_rejects_invalid_number() {
        let calendar: RosterCalendar = default_calendar();
        assert_eq!(
            calendar.bounds_of(RosterPeriodId::new(14, 2025)).unwrap_err(),
            RosterError::InvalidPeriodNumber {
                number: 14,
                max: 13
            }
        );
        assert!(matches!(
            calendar.bounds_of(RosterPeriodId::new(0, 2025)),
            Err(RosterError::InvalidPeriodNumber { number: 0, .. })
        ));
    }

    #[test]
    fn test_bounds_of_rejects_years_outside_horizon() {
        let calendar: RosterCalendar = default_calendar();
        assert!(matches!(
            calendar.bounds_of(RosterPeriodId::new(13, 2024)),
            Err(RosterError::OutOfRange { .. })
        ));
        assert!(matches!(
            calendar.bounds_of(RosterPeriodId::new(1, 2035)),
            Err(RosterError::OutOfRange { .. })
        ));
        assert!(calendar.bounds_of(RosterPeriodId::new(13, 2034)).is_ok());
    }

    #[test]
    fn test_all_periods_in_year_are_contiguous() {
        let calendar: RosterCalendar = default_calendar();
        let periods: Vec<RosterPeriod> = calendar.all_periods_in_year(2026).unwrap();

        assert_eq!(periods.len(), 13);
        assert_eq!(periods[0].start_date(), date!(2025 - 12 - 31));
        for pair in periods.windows(2) {
            assert_eq!(
                (pair[1].start_date() - pair[0].end_date()).whole_days(),
                1,
                "Gap detected between {} and {}",
                pair[0].id(),
                pair[1].id()
            );
        }
        for (i, period) in periods.iter().enumerate() {
            assert_eq!(usize::from(period.id().number()), i + 1);
            assert_eq!(period.id().year(), 2026);
        }
    }

    #[test]
    fn test_next_and_previous() {
        let calendar: RosterCalendar = default_calendar();
        let first: RosterPeriod = calendar.bounds_of(RosterPeriodId::new(1, 2025)).unwrap();
        assert!(calendar.previous(&first).is_none());

        let second: RosterPeriod = calendar.next(&first).unwrap();
        assert_eq!(second.id(), RosterPeriodId::new(2, 2025));
        assert_eq!(calendar.previous(&second).unwrap(), first);

        let last: RosterPeriod = calendar
            .period_containing(calendar.last_date().unwrap())
            .unwrap();
        assert!(calendar.next(&last).is_none());
    }

    #[test]
    fn test_period_label_display_and_parse() {
        let id: RosterPeriodId = RosterPeriodId::new(12, 2025);
        assert_eq!(id.to_string(), "RP12/2025");
        assert_eq!("RP12/2025".parse::<RosterPeriodId>().unwrap(), id);
        assert_eq!(" rp 12/2025 ".parse::<RosterPeriodId>().unwrap(), id);
        assert_eq!("RP12-2025".parse::<RosterPeriodId>().unwrap(), id);
    }

    #[test]
    fn test_period_label_rejects_garbage() {
        for label in ["", "RP", "12/2025", "RP0/2025", "RPx/2025", "RP12", "RP12/20x5"] {
            assert!(
                matches!(
                    label.parse::<RosterPeriodId>(),
                    Err(RosterError::InvalidPeriodLabel(_))
                ),
                "label '{label}' should be rejected"
            );
        }
    }

    #[test]
    fn test_period_ids_order_chronologically() {
        assert!(RosterPeriodId::new(13, 2025) < RosterPeriodId::new(1, 2026));
        assert!(RosterPeriodId::new(2, 2025) < RosterPeriodId::new(10, 2025));
    }

    #[test]
    fn test_custom_epoch_and_length() {
        let config: PolicyConfig = PolicyConfig {
            epoch: "2025-10-11".to_string(),
            period_length_days: 14,
            periods_per_year: 26,
            ..PolicyConfig::default()
        };
        let calendar: RosterCalendar =
            RosterCalendar::new(&RosterPolicy::from_config(&config).unwrap()).unwrap();

        let period: RosterPeriod = calendar.period_containing(date!(2025 - 10 - 25)).unwrap();
        assert_eq!(period.id(), RosterPeriodId::new(2, 2025));
        assert_eq!(period.start_date(), date!(2025 - 10 - 25));
        assert_eq!(period.duration_days(), 14);
    }

    #[test]
    fn test_calendar_is_deterministic() {
        let a: RosterCalendar = default_calendar();
        let b: RosterCalendar = default_calendar();
        let probe: Date = date!(2027 - 06 - 15);
        assert_eq!(a.period_for(probe).unwrap(), b.period_for(probe).unwrap());
        assert_eq!(
            a.period_containing(probe).unwrap(),
            a.period_containing(probe).unwrap()
        );
    }
}
