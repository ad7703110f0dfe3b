use serde::Serialize;

use crate::prelude::*;
use crate::types::Month;

/// One of the four seasons, derived from the month alone:
/// 3–5 spring, 6–8 summer, 9–11 autumn, 12/1/2 winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Season {
    #[display(fmt = "봄")]
    Spring,
    #[display(fmt = "여름")]
    Summer,
    #[display(fmt = "가을")]
    Autumn,
    #[display(fmt = "겨울")]
    Winter,
}

/// Fixed baseline indoor targets and allowed bands for one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonProfile {
    pub base_temp: f64,
    pub base_humidity: f64,
    pub temp_range: (f64, f64),
    pub humidity_range: (f64, f64),
}

const SPRING: SeasonProfile = SeasonProfile {
    base_temp: 22.0,
    base_humidity: 50.0,
    temp_range: (20.0, 24.0),
    humidity_range: (40.0, 60.0),
};

const SUMMER: SeasonProfile = SeasonProfile {
    base_temp: 26.0,
    base_humidity: 50.0,
    temp_range: (24.0, 28.0),
    humidity_range: (40.0, 60.0),
};

const AUTUMN: SeasonProfile = SeasonProfile {
    base_temp: 22.0,
    base_humidity: 50.0,
    temp_range: (20.0, 24.0),
    humidity_range: (40.0, 60.0),
};

const WINTER: SeasonProfile = SeasonProfile {
    base_temp: 20.0,
    base_humidity: 40.0,
    temp_range: (18.0, 22.0),
    humidity_range: (30.0, 50.0),
};

impl Season {
    /// Classifies a month into its season.
    pub const fn from_month(month: Month) -> Self {
        match month.get() {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Returns the fixed comfort profile for this season.
    pub const fn profile(self) -> SeasonProfile {
        match self {
            Self::Spring => SPRING,
            Self::Summer => SUMMER,
            Self::Autumn => AUTUMN,
            Self::Winter => WINTER,
        }
    }
}

impl Serialize for Season {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
