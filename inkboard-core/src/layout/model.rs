use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{InkError, InkResult},
    layout::grid::{GridPosition, GridSpec},
};

/// A complete declarative dashboard layout.
///
/// A layout is a pure data model loaded from a JSON file (one file per layout
/// name). It is read-only input to the engine per render call and is never
/// mutated by rendering.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayoutConfig {
    /// Optional override of the engine's default grid dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    /// Ordered component placements. Sequence order is paint order: later
    /// entries paint over earlier ones where bounds overlap.
    pub components: Vec<ComponentSpec>,
}

/// One component placement inside a layout.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ComponentSpec {
    /// Registered component type name. Unknown names are skipped with a
    /// warning; the rest of the layout still renders.
    #[serde(rename = "type")]
    pub kind: String,
    /// Grid placement of the component.
    pub position: GridPosition,
    /// Per-component configuration, merged over that component's defaults.
    #[serde(default)]
    pub config: serde_json::Value,
}

impl ComponentSpec {
    /// Build a spec from parts.
    pub fn new(kind: impl Into<String>, position: GridPosition, config: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            position,
            config,
        }
    }
}

impl LayoutConfig {
    /// Parse a layout from JSON text.
    pub fn from_json(json: &str) -> InkResult<Self> {
        serde_json::from_str(json).map_err(|e| InkError::serde(format!("parse layout: {e}")))
    }

    /// Load a layout from a JSON file.
    pub fn from_path(path: &Path) -> InkResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read layout file '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// The built-in default dashboard: clock and date up top, weather in the
    /// middle band, stats below, a footer title. Used whenever a requested
    /// layout name cannot be resolved.
    pub fn default_dashboard() -> Self {
        use serde_json::json;

        Self {
            grid: None,
            components: vec![
                ComponentSpec::new(
                    "clock",
                    GridPosition::span(0, 0, 3, 4),
                    json!({ "showSeconds": false }),
                ),
                ComponentSpec::new("date", GridPosition::span(0, 4, 3, 4), json!({})),
                ComponentSpec::new(
                    "weather",
                    GridPosition::span(3, 0, 5, 8),
                    json!({ "borderWidth": 1.0 }),
                ),
                ComponentSpec::new(
                    "device-stats",
                    GridPosition::span(8, 0, 3, 4),
                    json!({ "title": "Device" }),
                ),
                ComponentSpec::new(
                    "stats",
                    GridPosition::span(8, 4, 3, 4),
                    json!({ "title": "Stats" }),
                ),
                ComponentSpec::new(
                    "title",
                    GridPosition::span(11, 0, 1, 8),
                    json!({ "text": "inkboard", "fontSize": 14.0 }),
                ),
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
