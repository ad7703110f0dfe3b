use crate::ValidationError;
use crate::consts::{DAYS_IN_MONTH, DEFAULT_MONTH_DAYS, MAX_HUMIDITY, MAX_MONTH, MIN_DAY, MIN_HUMIDITY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidMonth)?;
        if value > MAX_MONTH {
            return Err(ValidationError::InvalidMonth);
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given month
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDay` if the value is 0 or past the
    /// month's last day. The error carries that month's day count.
    pub fn new(value: u8, month: Month) -> Result<Self, ValidationError> {
        let max_days = days_in_month(month.get());
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidDay { max_days })?;

        if value > max_days {
            return Err(ValidationError::InvalidDay { max_days });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without month context, so just check minimum
        if value < MIN_DAY {
            return Err(ValidationError::InvalidDay {
                max_days: DEFAULT_MONTH_DAYS,
            });
        }
        // Since we validated value >= MIN_DAY (which is 1), value is non-zero
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidDay {
            max_days: DEFAULT_MONTH_DAYS,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A relative humidity percentage guaranteed to be in `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Humidity(f64);

impl Humidity {
    /// Creates a new Humidity, validating that it's a number in `0..=100`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidHumidity` if the value is NaN or
    /// outside the valid range.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(MIN_HUMIDITY..=MAX_HUMIDITY).contains(&value) {
            return Err(ValidationError::InvalidHumidity);
        }
        Ok(Self(value))
    }

    /// Returns the humidity value as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Humidity {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Humidity> for f64 {
    fn from(humidity: Humidity) -> Self {
        humidity.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Day count for a 1-indexed month. Months outside 1..=12 fall back to the
/// 31-day default rather than failing; callers validate the month separately.
pub const fn days_in_month(month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        DEFAULT_MONTH_DAYS
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(ValidationError::InvalidMonth)));
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(13);
        assert!(matches!(result, Err(ValidationError::InvalidMonth)));

        let result = Month::new(255);
        assert!(matches!(result, Err(ValidationError::InvalidMonth)));
    }

    #[test]
    fn test_month_get() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.get(), 8);
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_into_u8() {
        let month = Month::new(8).unwrap();
        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_month_serde_rejects_invalid() {
        let result: Result<Month, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        let january = Month::new(1).unwrap();
        assert!(Day::new(1, january).is_ok());
        assert!(Day::new(31, january).is_ok());

        // February - fixed 29 days, no leap-year rule
        let february = Month::new(2).unwrap();
        assert!(Day::new(29, february).is_ok());
        assert!(Day::new(30, february).is_err());

        // April - 30 days
        let april = Month::new(4).unwrap();
        assert!(Day::new(30, april).is_ok());
        assert!(Day::new(31, april).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, Month::new(1).unwrap());
        assert!(matches!(result, Err(ValidationError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_error_carries_month_length() {
        let result = Day::new(31, Month::new(4).unwrap());
        assert!(matches!(
            result,
            Err(ValidationError::InvalidDay { max_days: 30 })
        ));

        let result = Day::new(30, Month::new(2).unwrap());
        assert!(matches!(
            result,
            Err(ValidationError::InvalidDay { max_days: 29 })
        ));
    }

    #[test]
    fn test_day_one_past_month_end_fails_for_every_month() {
        for m in 1..=12 {
            let month = Month::new(m).unwrap();
            let max_days = days_in_month(m);
            assert!(Day::new(max_days, month).is_ok(), "Day {max_days} of month {m}");
            assert!(
                matches!(
                    Day::new(max_days + 1, month),
                    Err(ValidationError::InvalidDay { max_days: e }) if e == max_days
                ),
                "Day {} of month {m} should fail",
                max_days + 1
            );
        }
    }

    #[test]
    fn test_day_get() {
        let day = Day::new(15, Month::new(8).unwrap()).unwrap();
        assert_eq!(day.get(), 15);
    }

    #[test]
    fn test_day_display() {
        let day = Day::new(15, Month::new(8).unwrap()).unwrap();
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_try_from_u8() {
        // Valid day (context-free validation)
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        // Zero is invalid
        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_into_u8() {
        let day = Day::new(15, Month::new(8).unwrap()).unwrap();
        let value: u8 = day.into();
        assert_eq!(value, 15);
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, Month::new(8).unwrap()).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_humidity_new_valid() {
        assert!(Humidity::new(0.0).is_ok());
        assert!(Humidity::new(55.5).is_ok());
        assert!(Humidity::new(100.0).is_ok());
    }

    #[test]
    fn test_humidity_new_invalid() {
        assert!(matches!(
            Humidity::new(-0.1),
            Err(ValidationError::InvalidHumidity)
        ));
        assert!(matches!(
            Humidity::new(100.1),
            Err(ValidationError::InvalidHumidity)
        ));
        assert!(matches!(
            Humidity::new(150.0),
            Err(ValidationError::InvalidHumidity)
        ));
        assert!(matches!(
            Humidity::new(f64::NAN),
            Err(ValidationError::InvalidHumidity)
        ));
    }

    #[test]
    fn test_humidity_get() {
        let humidity = Humidity::new(55.0).unwrap();
        assert_eq!(humidity.get(), 55.0);
    }

    #[test]
    fn test_humidity_serde() {
        let humidity = Humidity::new(55.0).unwrap();
        let json = serde_json::to_string(&humidity).unwrap();
        assert_eq!(json, "55.0");

        let parsed: Humidity = serde_json::from_str(&json).unwrap();
        assert_eq!(humidity, parsed);
    }

    #[test]
    fn test_humidity_serde_rejects_out_of_range() {
        let result: Result<Humidity, _> = serde_json::from_str("150.0");
        assert!(result.is_err());

        let result: Result<Humidity, _> = serde_json::from_str("-1.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_days_in_month_february_is_always_29() {
        // Fixed value, independent of any year
        assert_eq!(days_in_month(2), 29);
    }

    #[test]
    fn test_days_in_month_out_of_range_defaults() {
        assert_eq!(days_in_month(0), 31);
        assert_eq!(days_in_month(13), 31);
        assert_eq!(days_in_month(255), 31);
    }
}
