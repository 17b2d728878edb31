use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};

use tracing::{debug, warn};

use crate::{
    engine::{DashboardEngine, EngineOptions, RenderOptions},
    foundation::core::{Canvas, Color},
    foundation::error::{InkError, InkResult},
    layout::grid::GridSpec,
    layout::model::LayoutConfig,
    render::surface::encode_png,
    weather::model::WeatherSnapshot,
    weather::provider::{WeatherProvider, WeatherProviderOptions},
};

/// Per-request coordinate/timezone overrides.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overrides {
    /// Override latitude.
    pub latitude: Option<f64>,
    /// Override longitude.
    pub longitude: Option<f64>,
    /// Override timezone.
    pub timezone: Option<String>,
}

/// In-process cache of encoded dashboards, keyed by layout name.
///
/// Explicitly constructed and injectable; there is no module-level state.
/// Concurrent misses may render redundantly and overwrite the same key,
/// which is benign: rendering is idempotent.
pub struct RenderCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Vec<u8>)>>,
}

impl RenderCache {
    /// Cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached bytes for `key`, if present and younger than the TTL.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut entries = self.entries.lock().ok()?;
        if let Some((at, bytes)) = entries.get(key) {
            if at.elapsed() < self.ttl {
                return Some(bytes.clone());
            }
        }
        entries.remove(key);
        None
    }

    /// Store bytes under `key`, resetting its age.
    pub fn put(&self, key: &str, bytes: Vec<u8>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), (Instant::now(), bytes));
        }
    }

    /// Drop all entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// Construction options for [`DashboardService`].
#[derive(Clone, Debug)]
pub struct ServiceOptions {
    /// Directory of layout JSON files, one per layout name.
    pub layout_dir: PathBuf,
    /// Canvas dimensions.
    pub canvas: Canvas,
    /// Canvas background.
    pub background: Color,
    /// Grid used when layouts carry no override.
    pub grid: GridSpec,
    /// Font file for text painting; when unset, `<layout_dir>/fonts` is
    /// searched for the first TTF/OTF.
    pub font_path: Option<PathBuf>,
    /// Weather provider configuration.
    pub weather: WeatherProviderOptions,
    /// TTL of the encoded-image cache.
    pub image_cache_ttl: Duration,
    /// Draw the grid calibration overlay.
    pub grid_overlay: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            layout_dir: PathBuf::from("layouts"),
            canvas: Canvas::EINK_PORTRAIT,
            background: Color::WHITE,
            grid: GridSpec::default(),
            font_path: None,
            weather: WeatherProviderOptions::default(),
            image_cache_ttl: Duration::from_secs(5 * 60),
            grid_overlay: false,
        }
    }
}

/// End-to-end dashboard generation: layout resolution (with default-layout
/// fallback), one weather acquisition per render, engine invocation, PNG
/// encoding, and a short-TTL image cache.
pub struct DashboardService {
    opts: ServiceOptions,
    cache: RenderCache,
}

impl DashboardService {
    /// Service with its own cache sized from the options.
    pub fn new(opts: ServiceOptions) -> Self {
        let cache = RenderCache::new(opts.image_cache_ttl);
        Self { opts, cache }
    }

    /// Service sharing an externally owned cache.
    pub fn with_cache(opts: ServiceOptions, cache: RenderCache) -> Self {
        Self { opts, cache }
    }

    /// Render the named layout to PNG bytes.
    ///
    /// Weather acquisition completes fully before any pixel is painted; the
    /// formatted snapshot is injected into each weather component's config.
    /// An unknown layout name falls back to the built-in default dashboard
    /// rather than failing.
    pub async fn generate(&self, layout_name: &str, overrides: &Overrides) -> InkResult<Vec<u8>> {
        if let Some(bytes) = self.cache.get(layout_name) {
            debug!(layout = %layout_name, "serving dashboard from image cache");
            return Ok(bytes);
        }

        let layout = self.load_layout(layout_name);

        let provider = WeatherProvider::new(self.weather_options(overrides))?;
        let snapshot = provider.get_formatted_weather().await?;
        let layout = inject_weather(layout, &snapshot)?;

        let mut engine = DashboardEngine::new(EngineOptions {
            canvas: self.opts.canvas,
            background: self.opts.background,
            grid: self.opts.grid,
            font_bytes: self.load_font(),
        });
        engine.load_layout(layout);
        let frame = engine.render(&RenderOptions {
            grid_overlay: self.opts.grid_overlay,
        })?;
        let bytes = encode_png(&frame)?;

        self.cache.put(layout_name, bytes.clone());
        Ok(bytes)
    }

    /// Resolve a layout name to its file; any failure substitutes the
    /// built-in default dashboard, never a failed render.
    fn load_layout(&self, name: &str) -> LayoutConfig {
        if name.is_empty() || name.contains(['/', '\\', '.']) {
            warn!(layout = %name, "invalid layout name; using default dashboard");
            return LayoutConfig::default_dashboard();
        }

        let path = self.opts.layout_dir.join(format!("{name}.json"));
        match LayoutConfig::from_path(&path) {
            Ok(layout) => layout,
            Err(e) => {
                warn!(layout = %name, error = %e, "layout unavailable; using default dashboard");
                LayoutConfig::default_dashboard()
            }
        }
    }

    fn weather_options(&self, overrides: &Overrides) -> WeatherProviderOptions {
        let mut opts = self.opts.weather.clone();
        if let Some(latitude) = overrides.latitude {
            opts.latitude = latitude;
        }
        if let Some(longitude) = overrides.longitude {
            opts.longitude = longitude;
        }
        if let Some(timezone) = &overrides.timezone {
            opts.timezone = timezone.clone();
        }
        opts
    }

    fn load_font(&self) -> Option<Vec<u8>> {
        let path = self
            .opts
            .font_path
            .clone()
            .or_else(|| find_font_in_dir(&self.opts.layout_dir.join("fonts")))?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "font unreadable; text will be skipped");
                None
            }
        }
    }
}

/// First TTF/OTF/TTC file found in `dir`, if any.
pub fn find_font_in_dir(dir: &Path) -> Option<PathBuf> {
    let rd = std::fs::read_dir(dir).ok()?;
    let mut fonts: Vec<PathBuf> = rd
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|ext| {
                        let ext = ext.to_ascii_lowercase();
                        ext == "ttf" || ext == "otf" || ext == "ttc"
                    })
                    .unwrap_or(false)
        })
        .collect();
    fonts.sort();
    fonts.into_iter().next()
}

/// Insert the formatted snapshot as `weatherData` into every weather
/// component that does not already carry one.
fn inject_weather(mut layout: LayoutConfig, snapshot: &WeatherSnapshot) -> InkResult<LayoutConfig> {
    let value = serde_json::to_value(snapshot)
        .map_err(|e| InkError::serde(format!("serialize weather snapshot: {e}")))?;

    for spec in &mut layout.components {
        if spec.kind != "weather" {
            continue;
        }
        if spec.config.is_null() {
            spec.config = serde_json::Value::Object(serde_json::Map::new());
        }
        if let Some(config) = spec.config.as_object_mut() {
            config
                .entry("weatherData")
                .or_insert_with(|| value.clone());
        }
    }
    Ok(layout)
}

#[cfg(test)]
#[path = "../tests/unit/service.rs"]
mod tests;
