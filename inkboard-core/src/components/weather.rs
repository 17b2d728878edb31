use crate::{
    components::{BaseStyle, Component, TextAlign, aligned_x, content_bounds, paint_frame, parse_config},
    foundation::core::{Point, Rect},
    foundation::error::InkResult,
    render::{surface::Surface, text::TextStyle},
    weather::model::{WeatherSnapshot, icon_symbol},
};

/// Configuration for [`WeatherComponent`].
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherConfig {
    /// Shared styling.
    #[serde(flatten)]
    pub style: BaseStyle,
    /// Panel title.
    pub title: String,
    /// Include the wind line.
    pub show_wind: bool,
    /// Include the humidity line.
    pub show_humidity: bool,
    /// Include the forecast list.
    pub show_forecast: bool,
    /// Forecast days rendered, bounded by available snapshot data.
    pub forecast_days: usize,
    /// Formatted snapshot, injected by the service layer before rendering.
    pub weather_data: Option<WeatherSnapshot>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            style: BaseStyle::default(),
            title: "Weather".to_string(),
            show_wind: true,
            show_humidity: true,
            show_forecast: true,
            forecast_days: 3,
            weather_data: None,
        }
    }
}

/// Current conditions plus an optional short forecast. Every section
/// degrades to placeholder text when no snapshot is supplied; rendering
/// never fails on missing data.
pub struct WeatherComponent {
    config: WeatherConfig,
}

impl WeatherComponent {
    /// Build from a parsed config.
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    /// Registry factory.
    pub fn from_config(value: serde_json::Value) -> InkResult<Box<dyn Component>> {
        Ok(Box::new(Self::new(parse_config(value)?)))
    }

    fn lines(&self) -> Vec<(String, f32)> {
        let cfg = &self.config;
        let base = cfg.style.font_size.unwrap_or(20.0);
        let mut lines = Vec::new();
        if !cfg.title.is_empty() {
            lines.push((cfg.title.clone(), base));
        }

        let Some(snapshot) = &cfg.weather_data else {
            lines.push(("Weather data unavailable".to_string(), base * 0.8));
            return lines;
        };

        let current = &snapshot.current;
        lines.push((
            format!(
                "{} {:.0}°F {}",
                icon_symbol(&current.icon),
                current.temperature,
                current.condition
            ),
            base * 1.1,
        ));
        if cfg.show_wind {
            lines.push((format!("Wind {:.0} mph", current.wind_speed), base * 0.7));
        }
        if cfg.show_humidity {
            lines.push((format!("Humidity {:.0}%", current.humidity), base * 0.7));
        }

        if cfg.show_forecast {
            for day in snapshot.forecast.iter().take(cfg.forecast_days) {
                let date = day.date.get(5..).filter(|s| !s.is_empty()).unwrap_or(&day.date);
                lines.push((
                    format!(
                        "{}: {:.0}°/{:.0}° {}",
                        date, day.high_temp, day.low_temp, day.condition
                    ),
                    base * 0.65,
                ));
            }
        }
        lines
    }
}

impl Component for WeatherComponent {
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()> {
        let cfg = &self.config;
        paint_frame(surface, bounds, &cfg.style);
        let content = content_bounds(bounds, cfg.style.padding);
        let align = cfg.style.align.unwrap_or(TextAlign::Left);

        let gap = 5.0;
        let mut y = content.y0;
        for (text, size_px) in self.lines() {
            let style = TextStyle::sized(size_px).with_color(cfg.style.text_color);
            let Some((w, h)) = surface.measure_text(&text, style, None) else {
                return Ok(());
            };
            let x = aligned_x(content, w, align);
            surface.draw_text(&text, style, Point::new(x, y), None);
            y += h + gap;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/weather.rs"]
mod tests;
