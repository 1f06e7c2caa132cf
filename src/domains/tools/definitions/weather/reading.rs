//! Weather station snapshot and its text report.

use serde::Deserialize;
use serde_json::{Number, Value};

use super::compass::compass_point;

/// Placeholder rendered for any field the station did not send.
pub const PLACEHOLDER: &str = "N/A";

/// One snapshot of the station feed.
///
/// Every field is optional; an explicit `null` counts as absent. Values are
/// kept as sent so the report shows the station's own precision. Only
/// `winddir` must be numeric, since the compass point is computed from it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherReading {
    pub tempnow: Option<Value>,
    pub templo: Option<Value>,
    pub temphi: Option<Value>,
    pub dewpoint: Option<Value>,
    pub windchill: Option<Value>,
    pub humidity: Option<Value>,
    pub airpressure: Option<Value>,
    pub windspeed: Option<Value>,
    pub windspeedmax: Option<Value>,
    pub winddir: Option<Number>,
    pub precipitation1h: Option<Value>,
    pub precipitation1d: Option<Value>,
    pub solarrad: Option<Value>,
    pub timestamp: Option<Value>,
}

impl WeatherReading {
    /// Decode a station payload. Anything but a JSON object, or a non-numeric
    /// `winddir`, is rejected.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {}",
                value
            )));
        }
        serde_json::from_value(value)
    }

    /// Wind bearing in degrees, 0 when absent.
    pub fn wind_bearing(&self) -> f64 {
        self.winddir.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
    }

    /// Render the fixed-layout report.
    pub fn render_report(&self) -> String {
        let wind_deg = self
            .winddir
            .as_ref()
            .map(Number::to_string)
            .unwrap_or_else(|| "0".to_string());

        format!(
            "Weather at Linnanmaa Weather Station, Oulu\n\
             (University of Oulu campus - VTT/Vaisala station)\n\
             \n\
             Temperature: {}°C (Low: {}°C, High: {}°C)\n\
             Dew Point: {}°C\n\
             Wind Chill: {}°C\n\
             Humidity: {}%\n\
             Air Pressure: {} hPa\n\
             Wind Speed: {} m/s (Max: {} m/s)\n\
             Wind Direction: {}° ({})\n\
             Precipitation: {} mm (1h), {} mm (24h)\n\
             Solar Radiation: {} W/m²\n\
             \n\
             Coordinates: 65.03°N, 25.48°E (Altitude: 13m)\n\
             Last Updated: {}",
            show(&self.tempnow),
            show(&self.templo),
            show(&self.temphi),
            show(&self.dewpoint),
            show(&self.windchill),
            show(&self.humidity),
            show(&self.airpressure),
            show(&self.windspeed),
            show(&self.windspeedmax),
            wind_deg,
            compass_point(self.wind_bearing()),
            show(&self.precipitation1h),
            show(&self.precipitation1d),
            show(&self.solarrad),
            show(&self.timestamp),
        )
    }
}

/// Strings are shown without quotes, other values as JSON text.
fn show(field: &Option<Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => PLACEHOLDER.to_string(),
        Some(other) => other.to_string(),
    }
}
