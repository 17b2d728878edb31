use chrono::{DateTime, Local};

use crate::{
    components::{BaseStyle, Component, TextAlign, aligned_x, content_bounds, paint_frame, parse_config},
    foundation::core::{Point, Rect},
    foundation::error::InkResult,
    render::{surface::Surface, text::TextStyle},
};

/// Configuration for [`ClockComponent`].
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockConfig {
    /// Shared styling.
    #[serde(flatten)]
    pub style: BaseStyle,
    /// strftime pattern for the main time line.
    pub format: String,
    /// Render a smaller seconds sub-line under the time.
    pub show_seconds: bool,
    /// strftime pattern for the seconds sub-line.
    pub seconds_format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            style: BaseStyle::default(),
            format: "%H:%M".to_string(),
            show_seconds: false,
            seconds_format: "%S".to_string(),
        }
    }
}

/// Current time, formatted per a configurable pattern.
pub struct ClockComponent {
    config: ClockConfig,
}

impl ClockComponent {
    /// Build from a parsed config.
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Registry factory.
    pub fn from_config(value: serde_json::Value) -> InkResult<Box<dyn Component>> {
        Ok(Box::new(Self::new(parse_config(value)?)))
    }
}

impl Component for ClockComponent {
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()> {
        let cfg = &self.config;
        paint_frame(surface, bounds, &cfg.style);
        let content = content_bounds(bounds, cfg.style.padding);

        let now = Local::now();
        let time_text = format_local(&now, &cfg.format, "%H:%M");
        let time_style = TextStyle::sized(cfg.style.font_size.unwrap_or(56.0))
            .with_color(cfg.style.text_color);
        let Some((time_w, time_h)) = surface.measure_text(&time_text, time_style, None) else {
            return Ok(());
        };

        let seconds = cfg
            .show_seconds
            .then(|| format_local(&now, &cfg.seconds_format, "%S"));
        let seconds_style = TextStyle::sized(time_style.size_px * 0.4)
            .with_color(cfg.style.text_color);
        let seconds_measured = seconds
            .as_deref()
            .and_then(|s| surface.measure_text(s, seconds_style, None));

        let gap = 4.0;
        let total_h = time_h
            + seconds_measured
                .map(|(_, h)| h + gap)
                .unwrap_or_default();
        let align = cfg.style.align.unwrap_or(TextAlign::Center);
        let mut y = content.y0 + ((content.height() - total_h) * 0.5).max(0.0);

        let x = aligned_x(content, time_w, align);
        surface.draw_text(&time_text, time_style, Point::new(x, y), None);
        y += time_h + gap;

        if let (Some(text), Some((w, _))) = (seconds.as_deref(), seconds_measured) {
            let x = aligned_x(content, w, align);
            surface.draw_text(text, seconds_style, Point::new(x, y), None);
        }
        Ok(())
    }
}

/// Format with a user-supplied strftime pattern; invalid patterns fall back
/// rather than abort the render.
pub(crate) fn format_local(
    now: &DateTime<Local>,
    pattern: &str,
    fallback: &'static str,
) -> String {
    use chrono::format::{Item, StrftimeItems};

    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return now.format(fallback).to_string();
    }
    now.format_with_items(items.into_iter()).to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/components/clock.rs"]
mod tests;
