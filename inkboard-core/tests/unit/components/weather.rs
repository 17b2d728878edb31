use super::*;
use crate::foundation::core::{Canvas, Color};
use crate::weather::model::{CurrentSummary, DailySummary, WeatherSource};

fn snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        current: CurrentSummary {
            temperature: 71.6,
            condition: "Slight rain".to_string(),
            humidity: 62.0,
            wind_speed: 8.4,
            icon: "rain".to_string(),
        },
        forecast: vec![
            DailySummary {
                date: "2026-08-07".to_string(),
                condition: "Slight rain".to_string(),
                high_temp: 75.0,
                low_temp: 58.0,
                icon: "rain".to_string(),
            },
            DailySummary {
                date: "2026-08-08".to_string(),
                condition: "Clear sky".to_string(),
                high_temp: 78.0,
                low_temp: 57.0,
                icon: "clear".to_string(),
            },
        ],
        source: WeatherSource::Mock,
        last_update: chrono::Utc::now(),
        error: None,
    }
}

fn component(config: serde_json::Value) -> WeatherComponent {
    WeatherComponent::new(parse_config(config).unwrap())
}

#[test]
fn missing_snapshot_degrades_to_placeholder() {
    let c = component(serde_json::Value::Null);
    let lines = c.lines();
    assert_eq!(lines[0].0, "Weather");
    assert!(lines.iter().any(|(l, _)| l == "Weather data unavailable"));
}

#[test]
fn current_line_carries_symbol_temperature_and_condition() {
    let mut config = serde_json::json!({});
    config["weatherData"] = serde_json::to_value(snapshot()).unwrap();
    let c = component(config);

    let lines = c.lines();
    let current = &lines[1].0;
    assert!(current.starts_with('☂'), "line was '{current}'");
    assert!(current.contains("72°F"));
    assert!(current.contains("Slight rain"));
}

#[test]
fn wind_and_humidity_lines_are_toggleable() {
    let mut config = serde_json::json!({ "showWind": false, "showHumidity": false });
    config["weatherData"] = serde_json::to_value(snapshot()).unwrap();
    let c = component(config);
    let lines = c.lines();
    assert!(!lines.iter().any(|(l, _)| l.starts_with("Wind")));
    assert!(!lines.iter().any(|(l, _)| l.starts_with("Humidity")));

    let mut config = serde_json::json!({});
    config["weatherData"] = serde_json::to_value(snapshot()).unwrap();
    let lines = component(config).lines();
    assert!(lines.iter().any(|(l, _)| l == "Wind 8 mph"));
    assert!(lines.iter().any(|(l, _)| l == "Humidity 62%"));
}

#[test]
fn forecast_is_bounded_by_config_and_data() {
    let mut config = serde_json::json!({ "forecastDays": 1 });
    config["weatherData"] = serde_json::to_value(snapshot()).unwrap();
    let lines = component(config).lines();
    let forecast: Vec<_> = lines.iter().filter(|(l, _)| l.contains('/')).collect();
    assert_eq!(forecast.len(), 1);
    assert_eq!(forecast[0].0, "08-07: 75°/58° Slight rain");

    // more days requested than available: bounded by data
    let mut config = serde_json::json!({ "forecastDays": 9 });
    config["weatherData"] = serde_json::to_value(snapshot()).unwrap();
    let lines = component(config).lines();
    assert_eq!(lines.iter().filter(|(l, _)| l.contains('/')).count(), 2);
}

#[test]
fn renders_with_and_without_data() {
    let mut surface = Surface::new(
        Canvas {
            width: 300,
            height: 300,
        },
        Color::WHITE,
    )
    .unwrap();
    let bounds = Rect::new(0.0, 0.0, 300.0, 150.0);

    component(serde_json::Value::Null)
        .render(&mut surface, bounds)
        .unwrap();

    let mut config = serde_json::json!({ "background": "#f0f0f0" });
    config["weatherData"] = serde_json::to_value(snapshot()).unwrap();
    component(config)
        .render(&mut surface, Rect::new(0.0, 150.0, 300.0, 300.0))
        .unwrap();
}
