//! Inkboard is a grid-based dashboard rendering engine for e-ink displays.
//!
//! Inkboard turns a declarative layout (`LayoutConfig`) into pixels
//! (`FrameRgba`) on a fixed-size canvas, encoded as PNG for a downstream
//! device or HTTP handler.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `LayoutConfig` entries -> registered components, in paint
//!    order (`ComponentRegistry`)
//! 2. **Place**: grid cell references -> pixel rectangles (`GridSystem`)
//! 3. **Paint**: each component renders into its bounds on one shared
//!    `Surface`; later entries paint over earlier ones
//! 4. **Encode**: the finished frame -> PNG bytes
//!
//! Weather data is acquired before painting through a layered fallback chain
//! (`WeatherProvider`): live fetch, fresh disk cache, stale disk cache,
//! synthetic mock. Availability of *a* plausible dashboard outranks
//! correctness of the displayed numbers; provenance is recorded in every
//! snapshot.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Paint order is layout order**: overlap compositing is last-wins, by
//!   contract and not by accident.
//! - **Per-component isolation**: one failing component never blanks the
//!   whole dashboard.
//! - **Device defaults, not constants**: 600×800 grayscale is configuration.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod components;
mod engine;
mod foundation;
mod layout;
mod render;
mod service;
mod weather;

pub use components::{
    BaseStyle, ClockComponent, ClockConfig, Component, ComponentFactory, ComponentRegistry,
    DateComponent, DateConfig, DeviceData, DeviceStatsComponent, DeviceStatsConfig, StatLine,
    StatsComponent, StatsConfig, TextAlign, TitleComponent, TitleConfig, WeatherComponent,
    WeatherConfig,
};
pub use engine::{DashboardEngine, EngineOptions, RenderOptions};
pub use foundation::core::{Canvas, Color, Point, Rect};
pub use foundation::error::{InkError, InkResult};
pub use layout::grid::{GridPosition, GridSpec, GridSystem};
pub use layout::model::{ComponentSpec, LayoutConfig};
pub use render::surface::{FrameRgba, Surface, encode_png, save_png};
pub use render::text::{TextBrush, TextEngine, TextStyle};
pub use service::{DashboardService, Overrides, RenderCache, ServiceOptions, find_font_in_dir};
pub use weather::model::{
    CurrentConditions, CurrentSummary, DailySeries, DailySummary, ForecastPayload, WeatherCodeInfo,
    WeatherData, WeatherSnapshot, WeatherSource, describe_weather_code, icon_symbol,
};
pub use weather::provider::{DEFAULT_API_URL, WeatherProvider, WeatherProviderOptions};
