/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Days assumed for a month outside the 1..=12 table
pub const DEFAULT_MONTH_DAYS: u8 = 31;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February is fixed at 29 days; there is no leap-year rule here
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    29, // February (fixed, see above)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Lowest valid relative humidity (%)
pub const MIN_HUMIDITY: f64 = 0.0;
/// Highest valid relative humidity (%)
pub const MAX_HUMIDITY: f64 = 100.0;

/// Outdoor temperature (°C) above which the full indoor adjustment applies
pub const HOT_OUTDOOR_TEMP: f64 = 30.0;
/// Outdoor temperature below which the full indoor adjustment applies
pub const FREEZING_OUTDOOR_TEMP: f64 = 0.0;
/// Outdoor temperature above which the half indoor adjustment applies
pub const WARM_OUTDOOR_TEMP: f64 = 25.0;
/// Outdoor temperature below which the half indoor adjustment applies
pub const COLD_OUTDOOR_TEMP: f64 = 5.0;

/// Indoor temperature step (°C) for extreme outdoor temperatures
pub const FULL_TEMP_STEP: f64 = 1.0;
/// Indoor temperature step for moderately extreme outdoor temperatures
pub const HALF_TEMP_STEP: f64 = 0.5;

/// Outdoor humidity (%) above which the indoor target is lowered
pub const HUMID_OUTDOOR: f64 = 70.0;
/// Outdoor humidity below which the indoor target is raised
pub const DRY_OUTDOOR: f64 = 30.0;
/// Indoor humidity step (%) applied on either side
pub const HUMIDITY_STEP: f64 = 5.0;

/// Summer outdoor temperature that triggers the heatwave advisory
pub const HEATWAVE_TEMP: f64 = 32.0;
/// Winter outdoor temperature that triggers the severe-cold advisory
pub const SEVERE_COLD_TEMP: f64 = -5.0;
/// Outdoor humidity that triggers the dehumidifier advisory
pub const VERY_HUMID_OUTDOOR: f64 = 80.0;
/// Outdoor humidity that triggers the humidifier advisory
pub const VERY_DRY_OUTDOOR: f64 = 20.0;
