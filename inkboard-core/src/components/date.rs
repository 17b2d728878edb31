use chrono::{Datelike, Local};

use crate::{
    components::{BaseStyle, Component, TextAlign, aligned_x, content_bounds, paint_frame, parse_config},
    foundation::core::{Point, Rect},
    foundation::error::InkResult,
    render::{surface::Surface, text::TextStyle},
};

/// Configuration for [`DateComponent`].
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateConfig {
    /// Shared styling.
    #[serde(flatten)]
    pub style: BaseStyle,
    /// Add a day-of-year / week-of-year sub-line.
    pub show_extended: bool,
}

/// Weekday and full date, with an optional day/week-of-year sub-line. Lines
/// stack top-down, each a fixed vertical step below the previous.
pub struct DateComponent {
    config: DateConfig,
}

impl DateComponent {
    /// Build from a parsed config.
    pub fn new(config: DateConfig) -> Self {
        Self { config }
    }

    /// Registry factory.
    pub fn from_config(value: serde_json::Value) -> InkResult<Box<dyn Component>> {
        Ok(Box::new(Self::new(parse_config(value)?)))
    }
}

impl Component for DateComponent {
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()> {
        let cfg = &self.config;
        paint_frame(surface, bounds, &cfg.style);
        let content = content_bounds(bounds, cfg.style.padding);

        let now = Local::now();
        let size = cfg.style.font_size.unwrap_or(26.0);
        let mut lines = vec![
            (now.format("%A").to_string(), size),
            (now.format("%B %-d, %Y").to_string(), size * 0.65),
        ];
        if cfg.show_extended {
            lines.push((
                format!("Day {}, Week {}", now.ordinal(), now.iso_week().week()),
                size * 0.5,
            ));
        }

        let align = cfg.style.align.unwrap_or(TextAlign::Center);
        let gap = 6.0;
        let mut y = content.y0;
        for (text, size_px) in lines {
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
#[path = "../../tests/unit/components/date.rs"]
mod tests;
