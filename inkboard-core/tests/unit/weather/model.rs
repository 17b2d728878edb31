use super::*;

fn payload() -> ForecastPayload {
    ForecastPayload {
        current: CurrentConditions {
            temperature_2m: 71.6,
            relative_humidity_2m: 62.0,
            weather_code: 61,
            wind_speed_10m: 8.4,
        },
        daily: DailySeries {
            time: vec![
                "2026-08-07".to_string(),
                "2026-08-08".to_string(),
                "2026-08-09".to_string(),
                "2026-08-10".to_string(),
            ],
            weather_code: vec![61, 0, 95, 3],
            temperature_2m_max: vec![75.0, 78.0, 70.0, 72.0],
            temperature_2m_min: vec![58.0, 57.0, 55.0, 56.0],
        },
    }
}

#[test]
fn documented_codes_map_to_fixed_literals() {
    assert_eq!(describe_weather_code(0).description, "Clear sky");
    assert_eq!(describe_weather_code(0).icon, "clear");
    assert_eq!(describe_weather_code(2).description, "Partly cloudy");
    assert_eq!(describe_weather_code(45).description, "Fog");
    assert_eq!(describe_weather_code(61).description, "Slight rain");
    assert_eq!(describe_weather_code(61).icon, "rain");
    assert_eq!(describe_weather_code(75).icon, "snow");
    assert_eq!(describe_weather_code(95).description, "Thunderstorm");
    assert_eq!(describe_weather_code(95).icon, "thunderstorm");
}

#[test]
fn lookup_is_total_over_small_codes() {
    let documented = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82,
        85, 86, 95, 96, 99,
    ];
    for code in 0..=99 {
        let info = describe_weather_code(code);
        if documented.contains(&code) {
            assert_ne!(info.description, "Unknown", "code {code}");
        } else {
            assert_eq!(info.description, "Unknown", "code {code}");
            assert_eq!(info.icon, "unknown", "code {code}");
        }
    }
    assert_eq!(describe_weather_code(-1).description, "Unknown");
    assert_eq!(describe_weather_code(1000).description, "Unknown");
}

#[test]
fn every_icon_has_a_symbol() {
    for code in 0..=99 {
        let icon = describe_weather_code(code).icon;
        let symbol = icon_symbol(icon);
        if icon == "unknown" {
            assert_eq!(symbol, '?');
        } else {
            assert_ne!(symbol, '?', "icon '{icon}'");
        }
    }
    assert_eq!(icon_symbol("nonsense"), '?');
}

#[test]
fn snapshot_formats_and_bounds_forecast_to_three_days() {
    let data = WeatherData {
        payload: payload(),
        source: WeatherSource::Api,
        error: None,
    };
    let now = chrono::Utc::now();
    let snapshot = WeatherSnapshot::from_data(&data, now);

    assert_eq!(snapshot.current.condition, "Slight rain");
    assert_eq!(snapshot.current.icon, "rain");
    assert_eq!(snapshot.current.temperature, 71.6);
    assert_eq!(snapshot.source, WeatherSource::Api);
    assert_eq!(snapshot.last_update, now);
    assert!(snapshot.error.is_none());

    // four upstream days, capped at three
    assert_eq!(snapshot.forecast.len(), 3);
    assert_eq!(snapshot.forecast[0].date, "2026-08-07");
    assert_eq!(snapshot.forecast[1].condition, "Clear sky");
    assert_eq!(snapshot.forecast[2].icon, "thunderstorm");
    assert_eq!(snapshot.forecast[2].high_temp, 70.0);
}

#[test]
fn snapshot_is_bounded_by_shortest_daily_array() {
    let mut p = payload();
    p.daily.temperature_2m_min.truncate(1);
    let data = WeatherData {
        payload: p,
        source: WeatherSource::Mock,
        error: None,
    };
    let snapshot = WeatherSnapshot::from_data(&data, chrono::Utc::now());
    assert_eq!(snapshot.forecast.len(), 1);
}

#[test]
fn source_tags_use_snake_case_wire_form() {
    assert_eq!(
        serde_json::to_string(&WeatherSource::CacheExpired).unwrap(),
        "\"cache_expired\""
    );
    assert_eq!(
        serde_json::to_string(&WeatherSource::MockFallback).unwrap(),
        "\"mock_fallback\""
    );
    let parsed: WeatherSource = serde_json::from_str("\"api\"").unwrap();
    assert_eq!(parsed, WeatherSource::Api);
}

#[test]
fn snapshot_serializes_camel_case() {
    let data = WeatherData {
        payload: payload(),
        source: WeatherSource::Cache,
        error: Some("stale".to_string()),
    };
    let snapshot = WeatherSnapshot::from_data(&data, chrono::Utc::now());
    let value = serde_json::to_value(&snapshot).unwrap();

    assert!(value.get("lastUpdate").is_some());
    assert!(value["current"].get("windSpeed").is_some());
    assert!(value["forecast"][0].get("highTemp").is_some());
    assert_eq!(value["source"], "cache");
    assert_eq!(value["error"], "stale");

    let back: WeatherSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snapshot);
}
