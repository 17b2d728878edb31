use crate::{
    components::{BaseStyle, Component, TextAlign, aligned_x, content_bounds, paint_frame, parse_config},
    foundation::core::{Point, Rect},
    foundation::error::InkResult,
    render::{surface::Surface, text::TextStyle},
};

/// Configuration for [`TitleComponent`].
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleConfig {
    /// Shared styling.
    #[serde(flatten)]
    pub style: BaseStyle,
    /// Text to display.
    pub text: String,
}

/// A single text string, horizontally and vertically centered within its
/// bounds.
pub struct TitleComponent {
    config: TitleConfig,
}

impl TitleComponent {
    /// Build from a parsed config.
    pub fn new(config: TitleConfig) -> Self {
        Self { config }
    }

    /// Registry factory.
    pub fn from_config(value: serde_json::Value) -> InkResult<Box<dyn Component>> {
        Ok(Box::new(Self::new(parse_config(value)?)))
    }
}

impl Component for TitleComponent {
    fn render(&self, surface: &mut Surface, bounds: Rect) -> InkResult<()> {
        let cfg = &self.config;
        paint_frame(surface, bounds, &cfg.style);
        if cfg.text.is_empty() {
            return Ok(());
        }

        let content = content_bounds(bounds, cfg.style.padding);
        let style = TextStyle::sized(cfg.style.font_size.unwrap_or(32.0))
            .with_color(cfg.style.text_color);
        let Some((w, h)) = surface.measure_text(&cfg.text, style, Some(content.width())) else {
            return Ok(());
        };

        let x = aligned_x(content, w, cfg.style.align.unwrap_or(TextAlign::Center));
        let y = content.y0 + ((content.height() - h) * 0.5).max(0.0);
        surface.draw_text(&cfg.text, style, Point::new(x, y), Some(content.width()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/title.rs"]
mod tests;
