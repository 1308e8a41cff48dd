use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InputDomainError;

pub const YEAR_RANGE: RangeInclusive<i32> = 2010..=2030;
pub const DAY_OF_YEAR_RANGE: RangeInclusive<u16> = 1..=366;

/// The four climate parameters a user submits for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionInput {
    pub year: i32,
    pub day_of_year: u16,
    /// 7-day rolling mean of the minimum temperature, in °C.
    pub rolling7: f64,
    /// 30-day rolling mean of the minimum temperature, in °C.
    pub rolling30: f64,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            year: 2019,
            day_of_year: 180,
            rolling7: 5.0,
            rolling30: 7.0,
        }
    }
}

impl PredictionInput {
    pub fn new(year: i32, day_of_year: u16, rolling7: f64, rolling30: f64) -> Self {
        Self {
            year,
            day_of_year,
            rolling7,
            rolling30,
        }
    }

    /// Build an input from a calendar date instead of (year, day of year).
    pub fn from_date(date: NaiveDate, rolling7: f64, rolling30: f64) -> Self {
        // ordinal() is 1..=366, always fits.
        let day_of_year = date.ordinal() as u16;
        Self::new(date.year(), day_of_year, rolling7, rolling30)
    }

    /// Check every field against its domain.
    ///
    /// This belongs to whoever collects the input; the predictor itself
    /// assumes validated values.
    pub fn validate(&self) -> Result<(), InputDomainError> {
        validate_year(self.year)?;
        validate_day_of_year(self.day_of_year)?;
        validate_finite("rolling7", self.rolling7)?;
        validate_finite("rolling30", self.rolling30)?;
        Ok(())
    }
}

pub fn validate_year(value: i32) -> Result<(), InputDomainError> {
    if YEAR_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(InputDomainError::Year {
            value,
            min: *YEAR_RANGE.start(),
            max: *YEAR_RANGE.end(),
        })
    }
}

pub fn validate_day_of_year(value: u16) -> Result<(), InputDomainError> {
    if DAY_OF_YEAR_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(InputDomainError::DayOfYear {
            value,
            min: *DAY_OF_YEAR_RANGE.start(),
            max: *DAY_OF_YEAR_RANGE.end(),
        })
    }
}

pub fn validate_finite(field: &'static str, value: f64) -> Result<(), InputDomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputDomainError::NotFinite { field, value })
    }
}
