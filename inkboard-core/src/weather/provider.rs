use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    foundation::error::InkResult,
    weather::model::{
        CurrentConditions, DailySeries, ForecastPayload, WeatherData, WeatherSnapshot,
        WeatherSource,
    },
};

/// Default upstream forecast endpoint.
pub const DEFAULT_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Cache file name inside the configured cache directory. The cache is keyed
/// by this path alone, not by coordinates: one provider configuration, one
/// cache file.
const CACHE_FILE: &str = "weather_cache.json";

/// Configuration for a [`WeatherProvider`].
#[derive(Clone, Debug)]
pub struct WeatherProviderOptions {
    /// Latitude of the forecast coordinate.
    pub latitude: f64,
    /// Longitude of the forecast coordinate.
    pub longitude: f64,
    /// IANA timezone name passed to the upstream API.
    pub timezone: String,
    /// Directory holding the on-disk cache file.
    pub cache_dir: PathBuf,
    /// Maximum cache file age before a live fetch is attempted.
    pub cache_timeout: Duration,
    /// Serve synthetic data without any IO.
    pub mock_mode: bool,
    /// Upstream endpoint; overridable for tests.
    pub api_url: String,
    /// Bound on the upstream request so a dead endpoint cannot stall the
    /// render pipeline.
    pub request_timeout: Duration,
}

impl Default for WeatherProviderOptions {
    fn default() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.006,
            timezone: "America/New_York".to_string(),
            cache_dir: PathBuf::from("cache"),
            cache_timeout: Duration::from_secs(30 * 60),
            mock_mode: false,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches forecast data for one coordinate with a layered fallback chain:
/// mock mode, fresh disk cache, live fetch, stale disk cache, synthetic
/// fallback. A caller always gets *a* payload; provenance is recorded in
/// [`WeatherData::source`] and upstream unavailability never surfaces as an
/// error.
pub struct WeatherProvider {
    opts: WeatherProviderOptions,
    client: reqwest::Client,
}

impl WeatherProvider {
    /// Build a provider and its HTTP client.
    pub fn new(opts: WeatherProviderOptions) -> InkResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(opts.request_timeout)
            .build()
            .context("build http client")?;
        Ok(Self { opts, client })
    }

    /// Options this provider was built with.
    pub fn options(&self) -> &WeatherProviderOptions {
        &self.opts
    }

    fn cache_path(&self) -> PathBuf {
        self.opts.cache_dir.join(CACHE_FILE)
    }

    /// Acquire a raw forecast payload through the fallback chain.
    pub async fn get_weather_data(&self) -> InkResult<WeatherData> {
        if self.opts.mock_mode {
            return Ok(WeatherData {
                payload: mock_payload(),
                source: WeatherSource::Mock,
                error: None,
            });
        }

        if let Some(payload) = self.read_cache(false) {
            debug!("serving weather from fresh cache");
            return Ok(WeatherData {
                payload,
                source: WeatherSource::Cache,
                error: None,
            });
        }

        match self.fetch_live().await {
            Ok(payload) => {
                self.write_cache(&payload);
                Ok(WeatherData {
                    payload,
                    source: WeatherSource::Api,
                    error: None,
                })
            }
            Err(e) => {
                warn!(error = %e, "weather fetch failed; falling back");
                if let Some(payload) = self.read_cache(true) {
                    Ok(WeatherData {
                        payload,
                        source: WeatherSource::CacheExpired,
                        error: Some(e.to_string()),
                    })
                } else {
                    Ok(WeatherData {
                        payload: mock_payload(),
                        source: WeatherSource::MockFallback,
                        error: Some(e.to_string()),
                    })
                }
            }
        }
    }

    /// Acquire and format a display-ready snapshot.
    pub async fn get_formatted_weather(&self) -> InkResult<WeatherSnapshot> {
        let data = self.get_weather_data().await?;
        Ok(WeatherSnapshot::from_data(&data, Utc::now()))
    }

    /// Read the cache file; `allow_stale` ignores the TTL. Validity is
    /// decided by file modification time, not by the embedded timestamp.
    fn read_cache(&self, allow_stale: bool) -> Option<ForecastPayload> {
        let path = self.cache_path();
        let meta = std::fs::metadata(&path).ok()?;
        if !allow_stale {
            let age = meta.modified().ok()?.elapsed().unwrap_or(Duration::MAX);
            if age >= self.opts.cache_timeout {
                return None;
            }
        }

        let bytes = std::fs::read(&path).ok()?;
        match serde_json::from_slice::<CacheEntry>(&bytes) {
            Ok(entry) => Some(entry.payload),
            Err(e) => {
                debug!(error = %e, "ignoring unreadable weather cache");
                None
            }
        }
    }

    /// Overwrite the cache file with a freshly fetched payload. Cache write
    /// failures are logged, never propagated: the payload is already in hand.
    fn write_cache(&self, payload: &ForecastPayload) {
        let entry = CacheEntry {
            payload: payload.clone(),
            source: "api".to_string(),
            timestamp: Utc::now(),
        };
        let result = std::fs::create_dir_all(&self.opts.cache_dir)
            .context("create cache dir")
            .and_then(|()| serde_json::to_vec_pretty(&entry).context("serialize cache entry"))
            .and_then(|bytes| {
                std::fs::write(self.cache_path(), bytes).context("write cache file")
            });
        if let Err(e) = result {
            warn!(error = %e, "weather cache write failed");
        }
    }

    async fn fetch_live(&self) -> anyhow::Result<ForecastPayload> {
        let response = self
            .client
            .get(&self.opts.api_url)
            .query(&[
                ("latitude", self.opts.latitude.to_string()),
                ("longitude", self.opts.longitude.to_string()),
                ("timezone", self.opts.timezone.clone()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m".to_string(),
                ),
                (
                    "daily",
                    "weather_code,temperature_2m_max,temperature_2m_min".to_string(),
                ),
                ("temperature_unit", "fahrenheit".to_string()),
                ("wind_speed_unit", "mph".to_string()),
                ("forecast_days", "3".to_string()),
            ])
            .send()
            .await
            .context("request forecast")?
            .error_for_status()
            .context("forecast response status")?;

        response.json().await.context("decode forecast json")
    }
}

/// On-disk cache shape: the raw payload with `_source`/`_timestamp`
/// metadata keys spread alongside it.
#[derive(serde::Serialize, serde::Deserialize)]
struct CacheEntry {
    #[serde(flatten)]
    payload: ForecastPayload,
    #[serde(rename = "_source")]
    source: String,
    #[serde(rename = "_timestamp")]
    timestamp: chrono::DateTime<Utc>,
}

/// Synthetic payload with a plausible shape: mild, mostly clear, a rainy
/// third day.
fn mock_payload() -> ForecastPayload {
    let today = Utc::now().date_naive();
    ForecastPayload {
        current: CurrentConditions {
            temperature_2m: 72.0,
            relative_humidity_2m: 45.0,
            weather_code: 1,
            wind_speed_10m: 5.0,
        },
        daily: DailySeries {
            time: (0..3)
                .map(|i| {
                    (today + chrono::Days::new(i))
                        .format("%Y-%m-%d")
                        .to_string()
                })
                .collect(),
            weather_code: vec![1, 2, 61],
            temperature_2m_max: vec![75.0, 73.0, 68.0],
            temperature_2m_min: vec![58.0, 56.0, 54.0],
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/weather/provider.rs"]
mod tests;
