mod advisor;
mod consts;
mod prelude;
mod season;
#[cfg(test)]
mod test_utils;
mod types;

pub use advisor::{Advisory, DateInput, IndoorTarget, Recommendation, WeatherInput};
pub use consts::*;
pub use season::{Season, SeasonProfile};
pub use types::{Day, Humidity, Month};

use types::days_in_month;

/// A rejected input. Exactly one is reported per call; the checks run in a
/// fixed order (missing fields, month, day, temperature, humidity) and stop
/// at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// One or more of the four inputs is empty.
    #[error("모든 필드를 입력해주세요.")]
    MissingField,

    /// The month is not an integer in 1..=12.
    #[error("월은 1부터 12 사이의 숫자여야 합니다.")]
    InvalidMonth,

    /// The day is not an integer in 1..=`max_days` for the given month.
    #[error("일은 1부터 {max_days} 사이의 숫자여야 합니다.")]
    InvalidDay { max_days: u8 },

    /// The temperature is not a number.
    #[error("온도는 숫자여야 합니다.")]
    InvalidTemperature,

    /// The humidity is not a number in 0..=100.
    #[error("습도는 0부터 100 사이의 숫자여야 합니다.")]
    InvalidHumidity,
}

/// Validates the four raw inputs and computes the recommendation.
///
/// Fields are trimmed before parsing; a blank field counts as missing. The
/// integer fields parse strictly (no fractional part), the temperature and
/// humidity as reals.
///
/// # Errors
/// Returns the first failing check's `ValidationError`, in the fixed order
/// described on the error type.
pub fn compute(
    month: &str,
    day: &str,
    outdoor_temp: &str,
    outdoor_humidity: &str,
) -> Result<Recommendation, ValidationError> {
    if [month, day, outdoor_temp, outdoor_humidity]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ValidationError::MissingField);
    }

    let month = parse_month(month)?;
    let day = parse_day(day, month)?;
    let temperature = parse_temperature(outdoor_temp)?;
    let humidity = parse_humidity(outdoor_humidity)?;

    let weather = WeatherInput::new(temperature, humidity)?;
    Ok(Recommendation::compute(DateInput::new(month, day), weather))
}

fn parse_month(raw: &str) -> Result<Month, ValidationError> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| ValidationError::InvalidMonth)?;
    Month::new(value)
}

fn parse_day(raw: &str, month: Month) -> Result<Day, ValidationError> {
    let max_days = days_in_month(month.get());
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| ValidationError::InvalidDay { max_days })?;
    Day::new(value, month)
}

fn parse_temperature(raw: &str) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidTemperature)?;
    // "NaN" parses as f64 but is not a usable temperature
    if value.is_nan() {
        return Err(ValidationError::InvalidTemperature);
    }
    Ok(value)
}

fn parse_humidity(raw: &str) -> Result<Humidity, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidHumidity)?;
    Humidity::new(value)
}
