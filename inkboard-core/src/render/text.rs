use std::borrow::Cow;

use crate::foundation::{
    core::Color,
    error::{InkError, InkResult},
};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Color> for TextBrush {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Text styling resolved from component config: pixel size and fill color.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f32,
    /// Fill color.
    pub color: Color,
}

impl TextStyle {
    /// Style with the given size, black fill.
    pub fn sized(size_px: f32) -> Self {
        Self {
            size_px,
            color: Color::BLACK,
        }
    }

    /// Replace the fill color.
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

struct RegisteredFont {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Stateful helper for shaping and laying out text from registered font
/// bytes.
///
/// Glyph rendering follows the same rule as the rest of the pipeline: the
/// font is explicit input, not ambient system state. Until a font is
/// registered, layout requests return `None` and painting skips text.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    font: Option<RegisteredFont>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Construct an engine with fresh Parley contexts and no font.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            font: None,
        }
    }

    /// Register TTF/OTF font bytes; subsequent layouts use this face.
    pub fn register_font(&mut self, font_bytes: Vec<u8>) -> InkResult<()> {
        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font_bytes.clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| InkError::config("no font families registered from font bytes"))?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| InkError::config("registered font family has no name"))?
            .to_string();

        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        self.font = Some(RegisteredFont { family, data });
        Ok(())
    }

    /// Whether a font has been registered.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Glyph source for the registered font, if any.
    pub(crate) fn font_data(&self) -> Option<vello_cpu::peniko::FontData> {
        self.font.as_ref().map(|f| f.data.clone())
    }

    /// Shape and lay out plain text; `None` when no font is registered.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        style: TextStyle,
        max_width_px: Option<f32>,
    ) -> Option<parley::Layout<TextBrush>> {
        let family = self.font.as_ref()?.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush::from(
            style.color,
        )));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(max_width_px);
        Some(layout)
    }
}

/// Total advance width and stacked line height of a built layout.
pub(crate) fn layout_size(layout: &parley::Layout<TextBrush>) -> (f64, f64) {
    let mut w = 0.0f64;
    let mut h = 0.0f64;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(f64::from(m.advance));
        h += f64::from(m.ascent + m.descent + m.leading);
    }
    (w, h)
}
