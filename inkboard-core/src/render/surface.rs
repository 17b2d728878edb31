use std::path::Path;

use anyhow::Context;
use tracing::warn;

use crate::{
    foundation::core::{Canvas, Color, Point, Rect},
    foundation::error::{InkError, InkResult},
    render::text::{TextEngine, TextStyle, layout_size},
};

/// One finished frame in row-major premultiplied RGBA8.
///
/// Dashboard painting is opaque-on-opaque, so the bytes double as straight
/// RGBA for PNG encoding.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

/// Shared mutable drawing surface components paint onto.
///
/// Draw calls are recorded in order and resolved to pixels once by
/// [`Surface::into_frame`]; paint order is therefore exactly call order,
/// which is what gives layouts their last-wins overlap compositing.
pub struct Surface {
    width: u16,
    height: u16,
    background: Color,
    ctx: vello_cpu::RenderContext,
    text: TextEngine,
    missing_font_warned: bool,
}

impl Surface {
    /// Allocate a surface cleared to `background`.
    pub fn new(canvas: Canvas, background: Color) -> InkResult<Self> {
        let width = u16::try_from(canvas.width)
            .map_err(|_| InkError::render(format!("canvas width {} too large", canvas.width)))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| InkError::render(format!("canvas height {} too large", canvas.height)))?;
        if width == 0 || height == 0 {
            return Err(InkError::render("canvas dimensions must be non-zero"));
        }

        let mut surface = Self {
            width,
            height,
            background,
            ctx: vello_cpu::RenderContext::new(width, height),
            text: TextEngine::new(),
            missing_font_warned: false,
        };
        surface.fill_rect(
            Rect::new(0.0, 0.0, f64::from(canvas.width), f64::from(canvas.height)),
            background,
        );
        Ok(surface)
    }

    /// Register font bytes used for all subsequent text painting.
    pub fn register_font(&mut self, font_bytes: Vec<u8>) -> InkResult<()> {
        self.text.register_font(font_bytes)
    }

    /// Whether text painting has a font to draw with.
    pub fn has_font(&self) -> bool {
        self.text.has_font()
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Fill an axis-aligned rectangle with a solid color.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Stroke a rectangle outline as four thin edge fills.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        let w = line_width.max(0.0);
        if w == 0.0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + w), color);
        self.fill_rect(Rect::new(rect.x0, rect.y1 - w, rect.x1, rect.y1), color);
        self.fill_rect(Rect::new(rect.x0, rect.y0, rect.x0 + w, rect.y1), color);
        self.fill_rect(Rect::new(rect.x1 - w, rect.y0, rect.x1, rect.y1), color);
    }

    /// Measure text under `style`: `(advance width, stacked line height)`.
    ///
    /// Returns `None` when no font is registered.
    pub fn measure_text(
        &mut self,
        text: &str,
        style: TextStyle,
        max_width: Option<f64>,
    ) -> Option<(f64, f64)> {
        let layout = self.text.layout(text, style, max_width.map(|w| w as f32))?;
        Some(layout_size(&layout))
    }

    /// Paint text with its block top-left corner at `origin`.
    ///
    /// A no-op (with a one-time warning) when no font is registered, so that
    /// layouts remain renderable without glyph data.
    pub fn draw_text(
        &mut self,
        text: &str,
        style: TextStyle,
        origin: Point,
        max_width: Option<f64>,
    ) {
        let Some(font) = self.text.font_data() else {
            if !self.missing_font_warned {
                warn!("no font registered; text will not be painted");
                self.missing_font_warned = true;
            }
            return;
        };
        let Some(layout) = self.text.layout(text, style, max_width.map(|w| w as f32)) else {
            return;
        };

        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            origin.x, origin.y,
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Resolve all recorded draw calls into a pixel frame.
    pub fn into_frame(mut self) -> FrameRgba {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        clear_pixmap(&mut pixmap, self.background.to_premul_rgba8());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRgba) -> InkResult<Vec<u8>> {
    use image::ImageEncoder;

    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(bytes)
}

/// Write a frame as a PNG file, creating parent directories as needed.
pub fn save_png(frame: &FrameRgba, path: &Path) -> InkResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
