// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster policy configuration.
//!
//! Operational constants (roster epoch, period length, periods per roster
//! year, planning horizon, minimum crew per rank, notice period) are supplied
//! here rather than hard-coded in the calculators. `PolicyConfig` is the raw,
//! serde-facing shape; `RosterPolicy` is the validated form every other
//! component consumes.

use crate::error::RosterError;
use crate::types::Rank;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use time::macros::format_description;

/// Default roster epoch (first day of RP1/2025).
pub const DEFAULT_EPOCH: &str = "2025-01-01";
/// Default roster period length in days.
pub const DEFAULT_PERIOD_LENGTH_DAYS: u16 = 28;
/// Default number of roster periods per roster year.
pub const DEFAULT_PERIODS_PER_YEAR: u8 = 13;
/// Default number of roster years after the epoch that may be planned.
pub const DEFAULT_PLANNING_HORIZON_YEARS: u16 = 10;
/// Default minimum available crew per rank.
pub const DEFAULT_MINIMUM_CREW: u32 = 10;
/// Default notice period for leave requests, in days.
pub const DEFAULT_MINIMUM_NOTICE_DAYS: u16 = 21;
/// Default number of recommended dates returned to reviewers.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

/// Raw policy configuration as supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// First day of the first roster period (ISO 8601 date).
    pub epoch: String,
    /// Length of every roster period in days.
    pub period_length_days: u16,
    /// Number of roster periods in a roster year.
    pub periods_per_year: u8,
    /// Number of roster years after the epoch that can be planned.
    pub planning_horizon_years: u16,
    /// Minimum available crew per rank. Ranks not listed use
    /// `default_minimum_crew`.
    pub minimum_crew: BTreeMap<Rank, u32>,
    /// Minimum available crew for ranks without an explicit entry.
    pub default_minimum_crew: u32,
    /// Requests filed fewer than this many days before their start are
    /// flagged as late. `None` disables the check.
    pub minimum_notice_days: Option<u16>,
    /// Upper bound on recommended dates per query.
    pub max_recommendations: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH.to_string(),
            period_length_days: DEFAULT_PERIOD_LENGTH_DAYS,
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            planning_horizon_years: DEFAULT_PLANNING_HORIZON_YEARS,
            minimum_crew: BTreeMap::new(),
            default_minimum_crew: DEFAULT_MINIMUM_CREW,
            minimum_notice_days: Some(DEFAULT_MINIMUM_NOTICE_DAYS),
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

impl PolicyConfig {
    /// Parses a policy configuration from JSON.
    ///
    /// Fields that are absent take their default values.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Configuration` if the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        serde_json::from_str(json).map_err(|e| RosterError::configuration("policy", e.to_string()))
    }
}

/// Validated roster policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPolicy {
    epoch: Date,
    period_length_days: u16,
    periods_per_year: u8,
    planning_horizon_years: u16,
    minimum_crew: BTreeMap<Rank, u32>,
    default_minimum_crew: u32,
    minimum_notice_days: Option<u16>,
    max_recommendations: usize,
}

impl RosterPolicy {
    /// Validates a raw configuration.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Configuration` if:
    /// - The epoch is not an ISO 8601 calendar date
    /// - The period length, periods per year or planning horizon is zero
    /// - `max_recommendations` is zero
    pub fn from_config(config: &PolicyConfig) -> Result<Self, RosterError> {
        let epoch: Date = parse_iso_date(&config.epoch)
            .map_err(|reason| RosterError::configuration("epoch", reason))?;

        if config.period_length_days == 0 {
            return Err(RosterError::configuration(
                "period_length_days",
                "must be greater than 0",
            ));
        }
        if config.periods_per_year == 0 {
            return Err(RosterError::configuration(
                "periods_per_year",
                "must be greater than 0",
            ));
        }
        if config.planning_horizon_years == 0 {
            return Err(RosterError::configuration(
                "planning_horizon_years",
                "must be greater than 0",
            ));
        }
        if config.max_recommendations == 0 {
            return Err(RosterError::configuration(
                "max_recommendations",
                "must be greater than 0",
            ));
        }

        Ok(Self {
            epoch,
            period_length_days: config.period_length_days,
            periods_per_year: config.periods_per_year,
            planning_horizon_years: config.planning_horizon_years,
            minimum_crew: config.minimum_crew.clone(),
            default_minimum_crew: config.default_minimum_crew,
            minimum_notice_days: config.minimum_notice_days,
            max_recommendations: config.max_recommendations,
        })
    }

    /// Parses and validates a JSON policy document.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Configuration` if parsing or validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        Self::from_config(&PolicyConfig::from_json_str(json)?)
    }

    /// Returns the first day of the first roster period.
    #[must_use]
    pub const fn epoch(&self) -> Date {
        self.epoch
    }

    /// Returns the roster period length in days.
    #[must_use]
    pub const fn period_length_days(&self) -> u16 {
        self.period_length_days
    }

    /// Returns the number of periods per roster year.
    #[must_use]
    pub const fn periods_per_year(&self) -> u8 {
        self.periods_per_year
    }

    /// Returns the planning horizon in roster years.
    #[must_use]
    pub const fn planning_horizon_years(&self) -> u16 {
        self.planning_horizon_years
    }

    /// Returns the minimum available crew for `rank`.
    #[must_use]
    pub fn minimum_crew(&self, rank: Rank) -> u32 {
        self.minimum_crew
            .get(&rank)
            .copied()
            .unwrap_or(self.default_minimum_crew)
    }

    /// Returns the notice period in days, if enabled.
    #[must_use]
    pub const fn minimum_notice_days(&self) -> Option<u16> {
        self.minimum_notice_days
    }

    /// Returns the maximum number of recommended dates per query.
    #[must_use]
    pub const fn max_recommendations(&self) -> usize {
        self.max_recommendations
    }
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            epoch: time::macros::date!(2025 - 01 - 01),
            period_length_days: DEFAULT_PERIOD_LENGTH_DAYS,
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            planning_horizon_years: DEFAULT_PLANNING_HORIZON_YEARS,
            minimum_crew: BTreeMap::new(),
            default_minimum_crew: DEFAULT_MINIMUM_CREW,
            minimum_notice_days: Some(DEFAULT_MINIMUM_NOTICE_DAYS),
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
fn parse_iso_date(value: &str) -> Result<Date, String> {
    if value.trim().is_empty() {
        return Err("date is empty".to_string());
    }
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("'{value}' is not a valid date: {e}"))
}
