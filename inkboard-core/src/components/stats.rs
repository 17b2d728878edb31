use crate::{
    components::{BaseStyle, Component, TextAlign, aligned_x, content_bounds, paint_frame, parse_config},
    foundation::core::{Point, Rect},
    foundation::error::InkResult,
    render::{surface::Surface, text::TextStyle},
};

/// One labeled line of a stats panel.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatLine {
    /// Line label.
    pub label: String,
    /// Line value; lines without one are skipped.
    pub value: Option<String>,
    /// Allows a layout to keep a line configured but hidden.
    pub show: bool,
}

impl Default for StatLine {
    fn default() -> Self {
        Self {
            label: String::new(),
            value: None,
            show: true,
        }
    }
}

impl StatLine {
    fn displayable(&self) -> Option<String> {
        if !self.show {
            return None;
        }
        let value = self.value.as_deref()?.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("unknown") {
            return None;
        }
        if self.label.is_empty() {
            Some(value.to_string())
        } else {
            Some(format!("{}: {}", self.label, value))
        }
    }
}

/// Configuration for [`StatsComponent`].
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsConfig {
    /// Shared styling.
    #[serde(flatten)]
    pub style: BaseStyle,
    /// Panel title.
    pub title: String,
    /// Ordered lines; absent or `"unknown"` values are skipped entirely,
    /// never rendered as blanks.
    pub lines: Vec<StatLine>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            style: BaseStyle::default(),
            title: "Stats".to_string(),
            lines: Vec::new(),
        }
    }
}

/// Title plus an ordered list of optional labeled lines.
pub struct StatsComponent {
    config: StatsConfig,
}

impl StatsComponent {
    /// Build from a parsed config.
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Registry factory.
    pub fn from_config(value: serde_json::Value) -> InkResult<Box<dyn Component>> {
        Ok(Box::new(Self::new(parse_config(value)?)))
    }
}

impl Component for StatsComponent {
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()> {
        let cfg = &self.config;
        paint_frame(surface, bounds, &cfg.style);
        let content = content_bounds(bounds, cfg.style.padding);
        let lines: Vec<String> = cfg.lines.iter().filter_map(StatLine::displayable).collect();
        draw_panel(surface, content, &cfg.style, &cfg.title, &lines)
    }
}

/// Device health fields, each optional.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceData {
    /// Battery level, e.g. `"82%"`.
    pub battery: Option<String>,
    /// Signal strength description.
    pub signal: Option<String>,
    /// Uptime description.
    pub uptime: Option<String>,
    /// Last successful sync description.
    pub last_sync: Option<String>,
}

/// Configuration for [`DeviceStatsComponent`].
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceStatsConfig {
    /// Shared styling.
    #[serde(flatten)]
    pub style: BaseStyle,
    /// Panel title.
    pub title: String,
    /// Include the battery line when data is present.
    pub show_battery: bool,
    /// Include the signal line when data is present.
    pub show_signal: bool,
    /// Include the uptime line when data is present.
    pub show_uptime: bool,
    /// Include the last-sync line when data is present.
    pub show_last_sync: bool,
    /// Device health data.
    pub data: DeviceData,
}

impl Default for DeviceStatsConfig {
    fn default() -> Self {
        Self {
            style: BaseStyle::default(),
            title: "Device".to_string(),
            show_battery: true,
            show_signal: true,
            show_uptime: true,
            show_last_sync: true,
            data: DeviceData::default(),
        }
    }
}

/// Device health panel: title plus flag-gated labeled lines.
pub struct DeviceStatsComponent {
    config: DeviceStatsConfig,
}

impl DeviceStatsComponent {
    /// Build from a parsed config.
    pub fn new(config: DeviceStatsConfig) -> Self {
        Self { config }
    }

    /// Registry factory.
    pub fn from_config(value: serde_json::Value) -> InkResult<Box<dyn Component>> {
        Ok(Box::new(Self::new(parse_config(value)?)))
    }
}

impl Component for DeviceStatsComponent {
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()> {
        let cfg = &self.config;
        paint_frame(surface, bounds, &cfg.style);
        let content = content_bounds(bounds, cfg.style.padding);

        let candidates = [
            (cfg.show_battery, "Battery", &cfg.data.battery),
            (cfg.show_signal, "Signal", &cfg.data.signal),
            (cfg.show_uptime, "Uptime", &cfg.data.uptime),
            (cfg.show_last_sync, "Last sync", &cfg.data.last_sync),
        ];
        let lines: Vec<String> = candidates
            .into_iter()
            .filter_map(|(show, label, value)| {
                StatLine {
                    label: label.to_string(),
                    value: value.clone(),
                    show,
                }
                .displayable()
            })
            .collect();
        draw_panel(surface, content, &cfg.style, &cfg.title, &lines)
    }
}

/// Shared painting for both stats variants: a title line, then each
/// displayable line a fixed step below.
fn draw_panel(
    surface: &mut Surface,
    content: Rect,
    style: &BaseStyle,
    title: &str,
    lines: &[String],
) -> InkResult<()> {
    let title_size = style.font_size.unwrap_or(18.0);
    let line_size = title_size * 0.8;
    let align = style.align.unwrap_or(TextAlign::Left);
    let gap = 5.0;

    let mut y = content.y0;
    if !title.is_empty() {
        let title_style = TextStyle::sized(title_size).with_color(style.text_color);
        let Some((w, h)) = surface.measure_text(title, title_style, None) else {
            return Ok(());
        };
        let x = aligned_x(content, w, align);
        surface.draw_text(title, title_style, Point::new(x, y), None);
        y += h + gap * 1.5;
    }

    let line_style = TextStyle::sized(line_size).with_color(style.text_color);
    for line in lines {
        let Some((w, h)) = surface.measure_text(line, line_style, None) else {
            return Ok(());
        };
        let x = aligned_x(content, w, align);
        surface.draw_text(line, line_style, Point::new(x, y), None);
        y += h + gap;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/components/stats.rs"]
mod tests;
