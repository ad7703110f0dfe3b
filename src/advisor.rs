use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::consts::{
    COLD_OUTDOOR_TEMP, DRY_OUTDOOR, FREEZING_OUTDOOR_TEMP, FULL_TEMP_STEP, HALF_TEMP_STEP,
    HEATWAVE_TEMP, HOT_OUTDOOR_TEMP, HUMID_OUTDOOR, HUMIDITY_STEP, SEVERE_COLD_TEMP,
    VERY_DRY_OUTDOOR, VERY_HUMID_OUTDOOR, WARM_OUTDOOR_TEMP,
};
use crate::prelude::*;
use crate::season::{Season, SeasonProfile};
use crate::types::{Day, Humidity, Month};
use crate::ValidationError;

/// A calendar date, month and day only. Displays as "{month}월 {day}일".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}월 {}일", "month.get()", "day.get()")]
pub struct DateInput {
    month: Month,
    day:   Day,
}

impl DateInput {
    /// Creates a date from already-validated components.
    pub const fn new(month: Month, day: Day) -> Self {
        Self { month, day }
    }

    /// Returns the month component
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day component
    pub const fn day(&self) -> Day {
        self.day
    }
}

impl Serialize for DateInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Outdoor conditions: temperature in °C (unbounded) and relative humidity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherInput {
    temperature: f64,
    humidity:    Humidity,
}

impl WeatherInput {
    /// Creates outdoor conditions, rejecting a NaN temperature.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidTemperature` if the temperature is NaN.
    pub fn new(temperature: f64, humidity: Humidity) -> Result<Self, ValidationError> {
        if temperature.is_nan() {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(Self {
            temperature,
            humidity,
        })
    }

    /// Returns the outdoor temperature in °C
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns the outdoor relative humidity
    pub const fn humidity(&self) -> Humidity {
        self.humidity
    }
}

/// Recommended indoor targets. The temperature is rendered with one
/// fractional digit, the humidity rounded to a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "{:.1}°C, {:.0}%", "temperature", "humidity")]
pub struct IndoorTarget {
    temperature: f64,
    humidity:    f64,
}

impl IndoorTarget {
    /// Derives the indoor targets from a season profile and outdoor
    /// conditions. Each chain is an exclusive first-match ladder; the
    /// thresholds overlap, so the branches must not be evaluated
    /// independently.
    fn for_conditions(profile: &SeasonProfile, weather: &WeatherInput) -> Self {
        let temperature = Self::adjusted_temperature(profile, weather.temperature());
        let humidity = Self::adjusted_humidity(profile, weather.humidity().get());
        Self {
            temperature,
            humidity,
        }
    }

    fn adjusted_temperature(profile: &SeasonProfile, outdoor: f64) -> f64 {
        let (low, high) = profile.temp_range;
        let base = profile.base_temp;

        if outdoor > HOT_OUTDOOR_TEMP {
            high.min(base + FULL_TEMP_STEP)
        } else if outdoor < FREEZING_OUTDOOR_TEMP {
            low.max(base + FULL_TEMP_STEP)
        } else if outdoor > WARM_OUTDOOR_TEMP {
            high.min(base + HALF_TEMP_STEP)
        } else if outdoor < COLD_OUTDOOR_TEMP {
            low.max(base + HALF_TEMP_STEP)
        } else {
            base
        }
    }

    fn adjusted_humidity(profile: &SeasonProfile, outdoor: f64) -> f64 {
        let (low, high) = profile.humidity_range;
        let base = profile.base_humidity;

        if outdoor > HUMID_OUTDOOR {
            low.max(base - HUMIDITY_STEP)
        } else if outdoor < DRY_OUTDOOR {
            high.min(base + HUMIDITY_STEP)
        } else {
            base
        }
    }

    /// Returns the recommended indoor temperature in °C
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns the recommended indoor humidity percentage
    pub const fn humidity(&self) -> f64 {
        self.humidity
    }
}

impl Serialize for IndoorTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut record = serializer.serialize_struct("IndoorTarget", 2)?;
        record.serialize_field("temperature", &format!("{:.1}", self.temperature))?;
        record.serialize_field("humidity", &format!("{:.0}", self.humidity))?;
        record.end()
    }
}

/// Supplementary advice for exceptional weather, independent of the numeric
/// targets. `Display` is the full user-facing sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Advisory {
    /// Summer heatwave: keep the indoor target low, hydrate.
    #[display(fmt = "폭염 상황에서는 실내 온도를 더 낮게 유지하고 충분한 수분 섭취를 권장합니다.")]
    Heatwave,
    /// Severe winter cold: keep the indoor target slightly high, humidify
    /// while heating.
    #[display(fmt = "혹한 상황에서는 실내 온도를 약간 높게 유지하고 난방 시 가습기 사용을 권장합니다.")]
    SevereCold,
    /// Very humid outdoors: run a dehumidifier.
    #[display(fmt = "외부 습도가 매우 높으니 제습기 사용을 권장합니다.")]
    HighHumidity,
    /// Very dry outdoors: run a humidifier.
    #[display(fmt = "외부 습도가 매우 낮으니 가습기 사용을 권장합니다.")]
    LowHumidity,
}

impl Advisory {
    /// Picks the advisory for the given conditions, first match wins.
    /// Returns None when the weather is unexceptional.
    fn for_conditions(season: Season, weather: &WeatherInput) -> Option<Self> {
        let temperature = weather.temperature();
        let humidity = weather.humidity().get();

        if season == Season::Summer && temperature > HEATWAVE_TEMP {
            Some(Self::Heatwave)
        } else if season == Season::Winter && temperature < SEVERE_COLD_TEMP {
            Some(Self::SevereCold)
        } else if humidity > VERY_HUMID_OUTDOOR {
            Some(Self::HighHumidity)
        } else if humidity < VERY_DRY_OUTDOOR {
            Some(Self::LowHumidity)
        } else {
            None
        }
    }
}

/// The full recommendation record: the input date and conditions echoed
/// back, the derived season, the indoor targets, and an optional advisory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    date: DateInput,
    season: Season,
    outdoor_conditions: WeatherInput,
    recommended_indoor: IndoorTarget,
    #[serde(serialize_with = "serialize_advice")]
    advice: Option<Advisory>,
}

fn serialize_advice<S>(advice: &Option<Advisory>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match advice {
        Some(advisory) => serializer.collect_str(advisory),
        None => serializer.serialize_str(""),
    }
}

impl Recommendation {
    /// Computes the recommendation for validated inputs. Pure and
    /// deterministic: equal inputs always produce an equal record.
    pub fn compute(date: DateInput, weather: WeatherInput) -> Self {
        let season = Season::from_month(date.month());
        let profile = season.profile();
        let recommended_indoor = IndoorTarget::for_conditions(&profile, &weather);
        let advice = Advisory::for_conditions(season, &weather);

        Self {
            date,
            season,
            outdoor_conditions: weather,
            recommended_indoor,
            advice,
        }
    }

    /// Returns the input date
    pub const fn date(&self) -> DateInput {
        self.date
    }

    /// Returns the season derived from the date
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Returns the outdoor conditions the recommendation was computed for
    pub const fn outdoor_conditions(&self) -> WeatherInput {
        self.outdoor_conditions
    }

    /// Returns the recommended indoor targets
    pub const fn recommended_indoor(&self) -> IndoorTarget {
        self.recommended_indoor
    }

    /// Returns the advisory, if the weather warranted one
    pub const fn advice(&self) -> Option<Advisory> {
        self.advice
    }
}
