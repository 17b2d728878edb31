use std::path::Path;

use tracing::warn;

use crate::{
    components::ComponentRegistry,
    foundation::core::{Canvas, Color},
    foundation::error::InkResult,
    layout::grid::{GridPosition, GridSpec, GridSystem},
    layout::model::{ComponentSpec, LayoutConfig},
    render::surface::{FrameRgba, Surface, encode_png, save_png},
};

/// Construction options for [`DashboardEngine`].
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Canvas dimensions. Defaults to the 600×800 portrait e-ink panel, but
    /// this is configuration, not a constant.
    pub canvas: Canvas,
    /// Canvas background color.
    pub background: Color,
    /// Grid dimensions used when a layout carries no override.
    pub grid: GridSpec,
    /// Font bytes for text painting; without them, text is skipped.
    pub font_bytes: Option<Vec<u8>>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::EINK_PORTRAIT,
            background: Color::WHITE,
            grid: GridSpec::default(),
            font_bytes: None,
        }
    }
}

/// Per-render options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Draw grid calibration rules over the finished dashboard.
    pub grid_overlay: bool,
}

/// Orchestrates one dashboard render: resolves layout entries through the
/// component registry, computes pixel bounds via the grid, and paints
/// components in layout order onto one shared surface.
///
/// Failure semantics: an unknown component type, a rejected config, or a
/// failed component render is logged and skipped; the rest of the dashboard
/// still paints, with the background showing through the skipped bounds.
/// Only surface allocation and encoding failures propagate.
pub struct DashboardEngine {
    opts: EngineOptions,
    registry: ComponentRegistry,
    layout: LayoutConfig,
}

impl DashboardEngine {
    /// Engine with the built-in component set and an empty layout.
    pub fn new(opts: EngineOptions) -> Self {
        Self {
            opts,
            registry: ComponentRegistry::with_builtins(),
            layout: LayoutConfig {
                grid: None,
                components: Vec::new(),
            },
        }
    }

    /// Mutable access to the registry, for registering custom components.
    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    /// Replace the loaded layout.
    pub fn load_layout(&mut self, layout: LayoutConfig) {
        self.layout = layout;
    }

    /// Append one component placement; the imperative alternative to
    /// [`DashboardEngine::load_layout`].
    pub fn add_component(
        &mut self,
        kind: impl Into<String>,
        position: GridPosition,
        config: serde_json::Value,
    ) {
        self.layout
            .components
            .push(ComponentSpec::new(kind, position, config));
    }

    /// Render the loaded layout to a pixel frame.
    pub fn render(&self, options: &RenderOptions) -> InkResult<FrameRgba> {
        let mut surface = Surface::new(self.opts.canvas, self.opts.background)?;
        if let Some(bytes) = &self.opts.font_bytes {
            if let Err(e) = surface.register_font(bytes.clone()) {
                warn!(error = %e, "font rejected; text will be skipped");
            }
        }

        let grid_spec = self.layout.grid.unwrap_or(self.opts.grid);
        let grid = GridSystem::new(self.opts.canvas, grid_spec);

        for spec in &self.layout.components {
            let Some(factory) = self.registry.resolve(&spec.kind) else {
                warn!(kind = %spec.kind, "unknown component type; skipping");
                continue;
            };

            let bounds = grid.cell_to_pixels(spec.position);
            if !grid.contains(bounds) {
                warn!(
                    kind = %spec.kind,
                    ?bounds,
                    "component bounds leave the canvas; painting anyway"
                );
            }

            let component = match factory(spec.config.clone()) {
                Ok(component) => component,
                Err(e) => {
                    warn!(kind = %spec.kind, error = %e, "component config rejected; skipping");
                    continue;
                }
            };
            if let Err(e) = component.render(&mut surface, bounds) {
                warn!(kind = %spec.kind, error = %e, "component render failed; skipping");
            }
        }

        if options.grid_overlay {
            for rule in grid.overlay_rules() {
                surface.fill_rect(rule, Color::gray_level(0xb0));
            }
        }

        Ok(surface.into_frame())
    }

    /// Encode a rendered frame as PNG bytes.
    pub fn encode_png(&self, frame: &FrameRgba) -> InkResult<Vec<u8>> {
        encode_png(frame)
    }

    /// Write a rendered frame as a PNG file.
    pub fn save_png(&self, frame: &FrameRgba, path: &Path) -> InkResult<()> {
        save_png(frame, path)
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
