//! Shared constructors for module tests. Panics are fine here; the inputs
//! are fixed test fixtures.

#![allow(clippy::unwrap_used)]

use crate::advisor::{DateInput, WeatherInput};
use crate::types::{Day, Humidity, Month};

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn day(value: u8, month_value: u8) -> Day {
    Day::new(value, month(month_value)).unwrap()
}

pub fn humidity(value: f64) -> Humidity {
    Humidity::new(value).unwrap()
}

pub fn date(month_value: u8, day_value: u8) -> DateInput {
    DateInput::new(month(month_value), day(day_value, month_value))
}

pub fn weather(temperature: f64, humidity_value: f64) -> WeatherInput {
    WeatherInput::new(temperature, humidity(humidity_value)).unwrap()
}
