use std::collections::BTreeMap;

use crate::{
    foundation::core::{Color, Rect},
    foundation::error::{InkError, InkResult},
    render::surface::Surface,
};

mod clock;
mod date;
mod stats;
mod title;
mod weather;

pub use clock::{ClockComponent, ClockConfig};
pub use date::{DateComponent, DateConfig};
pub use stats::{
    DeviceData, DeviceStatsComponent, DeviceStatsConfig, StatLine, StatsComponent, StatsConfig,
};
pub use title::{TitleComponent, TitleConfig};
pub use weather::{WeatherComponent, WeatherConfig};

/// A renderable dashboard component.
///
/// Components are polymorphic over this single capability. Each concrete
/// type owns its default config and its own layout math within `bounds`;
/// there is no shared state between components, and a component never reads
/// pixels painted by another.
pub trait Component {
    /// Paint into `bounds` on the shared surface.
    ///
    /// Must tolerate any config it was built from: missing data degrades to
    /// placeholder text, never an abort of the whole dashboard.
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()>;
}

/// Constructor resolving a JSON config into a boxed component.
pub type ComponentFactory = fn(serde_json::Value) -> InkResult<Box<dyn Component>>;

/// Maps component type names to factories.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    factories: BTreeMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in component set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("clock", ClockComponent::from_config);
        registry.register("date", DateComponent::from_config);
        registry.register("stats", StatsComponent::from_config);
        registry.register("device-stats", DeviceStatsComponent::from_config);
        registry.register("weather", WeatherComponent::from_config);
        registry.register("title", TitleComponent::from_config);
        registry
    }

    /// Register (or replace) a factory under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: ComponentFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Look up the factory for a type name.
    pub fn resolve(&self, name: &str) -> Option<ComponentFactory> {
        self.factories.get(name).copied()
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

/// Horizontal text alignment within a component's content bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center between the edges.
    Center,
    /// Align to the right edge.
    Right,
}

/// Styling shared by every component config, flattened into each one.
///
/// Defaults apply first; explicit layout JSON overrides them.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseStyle {
    /// Background fill; `None` lets the canvas background show through.
    pub background: Option<Color>,
    /// Text color.
    pub text_color: Color,
    /// Border color, used when `border_width > 0`.
    pub border_color: Color,
    /// Border width in pixels; zero disables the border.
    pub border_width: f64,
    /// Inner padding between bounds and content, in pixels.
    pub padding: f64,
    /// Font size in pixels; `None` takes the component's own default.
    pub font_size: Option<f32>,
    /// Horizontal text alignment; `None` takes the component's own default.
    pub align: Option<TextAlign>,
}

impl Default for BaseStyle {
    fn default() -> Self {
        Self {
            background: None,
            text_color: Color::BLACK,
            border_color: Color::BLACK,
            border_width: 0.0,
            padding: 8.0,
            font_size: None,
            align: None,
        }
    }
}

/// Deserialize a component config, treating a missing/null value as "all
/// defaults". A malformed config is a per-component error, handled by the
/// engine's skip-and-warn path.
pub(crate) fn parse_config<T>(value: serde_json::Value) -> InkResult<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|e| InkError::config(format!("component config: {e}")))
}

/// Paint a component's background fill and border frame.
pub(crate) fn paint_frame(surface: &mut Surface, bounds: Rect, style: &BaseStyle) {
    if let Some(background) = style.background {
        surface.fill_rect(bounds, background);
    }
    if style.border_width > 0.0 {
        surface.stroke_rect(bounds, style.border_color, style.border_width);
    }
}

/// Bounds shrunk by `padding` on every edge; collapses to an empty rect at
/// the center rather than inverting.
pub(crate) fn content_bounds(bounds: Rect, padding: f64) -> Rect {
    let cx = (bounds.x0 + bounds.x1) * 0.5;
    let cy = (bounds.y0 + bounds.y1) * 0.5;
    Rect::new(
        (bounds.x0 + padding).min(cx),
        (bounds.y0 + padding).min(cy),
        (bounds.x1 - padding).max(cx),
        (bounds.y1 - padding).max(cy),
    )
}

/// X origin for a text block of `width` aligned within `bounds`.
pub(crate) fn aligned_x(bounds: Rect, width: f64, align: TextAlign) -> f64 {
    match align {
        TextAlign::Left => bounds.x0,
        TextAlign::Center => bounds.x0 + ((bounds.width() - width) * 0.5).max(0.0),
        TextAlign::Right => bounds.x0 + (bounds.width() - width).max(0.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/registry.rs"]
mod tests;
