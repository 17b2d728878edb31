use chrono::{DateTime, Utc};

/// Raw upstream forecast payload, as fetched and as persisted in the cache
/// file. Field names mirror the upstream API; units are fahrenheit / mph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ForecastPayload {
    /// Current conditions block.
    pub current: CurrentConditions,
    /// Daily forecast series, arrays aligned by index.
    pub daily: DailySeries,
}

/// Upstream current-conditions block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2 m.
    pub temperature_2m: f64,
    /// Relative humidity at 2 m, percent.
    pub relative_humidity_2m: f64,
    /// WMO weather code.
    pub weather_code: i64,
    /// Wind speed at 10 m.
    pub wind_speed_10m: f64,
}

/// Upstream daily-forecast arrays, aligned by index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DailySeries {
    /// ISO dates, one per forecast day.
    pub time: Vec<String>,
    /// WMO weather code per day.
    pub weather_code: Vec<i64>,
    /// Daily high temperature.
    pub temperature_2m_max: Vec<f64>,
    /// Daily low temperature.
    pub temperature_2m_min: Vec<f64>,
}

/// Provenance of a weather payload or snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    /// Fresh live fetch.
    Api,
    /// On-disk cache younger than the TTL.
    Cache,
    /// On-disk cache older than the TTL, served because the fetch failed.
    CacheExpired,
    /// Synthetic data requested explicitly (mock mode).
    Mock,
    /// Synthetic data served because the fetch failed and no cache existed.
    MockFallback,
}

/// A raw payload tagged with its provenance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeatherData {
    /// The payload itself.
    pub payload: ForecastPayload,
    /// Where the payload came from.
    pub source: WeatherSource,
    /// Error message of the failed fetch, when `source` is a fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One fully formatted weather result ready for display, annotated with
/// provenance. Constructed fresh per call; never persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Formatted current conditions.
    pub current: CurrentSummary,
    /// Up to three formatted forecast days.
    pub forecast: Vec<DailySummary>,
    /// Data provenance, for debuggability.
    pub source: WeatherSource,
    /// When this snapshot was produced.
    pub last_update: DateTime<Utc>,
    /// Error message carried over from a fallback payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Formatted current conditions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSummary {
    /// Temperature in fahrenheit.
    pub temperature: f64,
    /// Human-readable condition description.
    pub condition: String,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Wind speed in mph.
    pub wind_speed: f64,
    /// Icon name from the weather-code table.
    pub icon: String,
}

/// One formatted forecast day.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// ISO date of the forecast day.
    pub date: String,
    /// Human-readable condition description.
    pub condition: String,
    /// Daily high in fahrenheit.
    pub high_temp: f64,
    /// Daily low in fahrenheit.
    pub low_temp: f64,
    /// Icon name from the weather-code table.
    pub icon: String,
}

/// Description and icon name for one WMO weather code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherCodeInfo {
    /// Human-readable condition description.
    pub description: &'static str,
    /// Icon name consumed by the symbol table and styling.
    pub icon: &'static str,
}

/// Total lookup from WMO weather code to description and icon name.
///
/// Codes outside the documented set map to `Unknown`/`unknown`.
pub fn describe_weather_code(code: i64) -> WeatherCodeInfo {
    let (description, icon) = match code {
        0 => ("Clear sky", "clear"),
        1 => ("Mainly clear", "clear"),
        2 => ("Partly cloudy", "partly-cloudy"),
        3 => ("Overcast", "cloudy"),
        45 => ("Fog", "fog"),
        48 => ("Depositing rime fog", "fog"),
        51 => ("Light drizzle", "drizzle"),
        53 => ("Moderate drizzle", "drizzle"),
        55 => ("Dense drizzle", "drizzle"),
        56 => ("Light freezing drizzle", "freezing-rain"),
        57 => ("Dense freezing drizzle", "freezing-rain"),
        61 => ("Slight rain", "rain"),
        63 => ("Moderate rain", "rain"),
        65 => ("Heavy rain", "rain"),
        66 => ("Light freezing rain", "freezing-rain"),
        67 => ("Heavy freezing rain", "freezing-rain"),
        71 => ("Slight snow fall", "snow"),
        73 => ("Moderate snow fall", "snow"),
        75 => ("Heavy snow fall", "snow"),
        77 => ("Snow grains", "snow"),
        80 => ("Slight rain showers", "showers"),
        81 => ("Moderate rain showers", "showers"),
        82 => ("Violent rain showers", "showers"),
        85 => ("Slight snow showers", "snow"),
        86 => ("Heavy snow showers", "snow"),
        95 => ("Thunderstorm", "thunderstorm"),
        96 => ("Thunderstorm with slight hail", "thunderstorm"),
        99 => ("Thunderstorm with heavy hail", "thunderstorm"),
        _ => ("Unknown", "unknown"),
    };
    WeatherCodeInfo { description, icon }
}

/// Display glyph for an icon name; unmapped names get the unknown glyph.
pub fn icon_symbol(icon: &str) -> char {
    match icon {
        "clear" => '☀',
        "partly-cloudy" => '⛅',
        "cloudy" => '☁',
        "fog" => '≡',
        "drizzle" | "rain" | "showers" | "freezing-rain" => '☂',
        "snow" => '❄',
        "thunderstorm" => '⚡',
        _ => '?',
    }
}

impl WeatherSnapshot {
    /// Format a tagged raw payload into a display-ready snapshot.
    ///
    /// Forecast entries are bounded to three days and by the shortest of the
    /// upstream daily arrays.
    pub fn from_data(data: &WeatherData, last_update: DateTime<Utc>) -> Self {
        let current_info = describe_weather_code(data.payload.current.weather_code);
        let current = CurrentSummary {
            temperature: data.payload.current.temperature_2m,
            condition: current_info.description.to_string(),
            humidity: data.payload.current.relative_humidity_2m,
            wind_speed: data.payload.current.wind_speed_10m,
            icon: current_info.icon.to_string(),
        };

        let daily = &data.payload.daily;
        let days = daily
            .time
            .len()
            .min(daily.weather_code.len())
            .min(daily.temperature_2m_max.len())
            .min(daily.temperature_2m_min.len())
            .min(3);
        let forecast = (0..days)
            .map(|i| {
                let info = describe_weather_code(daily.weather_code[i]);
                DailySummary {
                    date: daily.time[i].clone(),
                    condition: info.description.to_string(),
                    high_temp: daily.temperature_2m_max[i],
                    low_temp: daily.temperature_2m_min[i],
                    icon: info.icon.to_string(),
                }
            })
            .collect();

        Self {
            current,
            forecast,
            source: data.source,
            last_update,
            error: data.error.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/weather/model.rs"]
mod tests;
