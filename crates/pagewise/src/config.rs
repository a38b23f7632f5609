//! Pagination settings and how they are loaded.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, InvalidRequest, Result};
use crate::guard::{guard_marker_type, guard_maximum_visible};
use crate::marker::Marker;

pub const DEFAULT_MAXIMUM_VISIBLE: u64 = 15;

/// File merged by [`PaginationConfig::figment`] when present.
pub const CONFIG_FILE: &str = "pagewise.toml";

/// Prefix of environment variables merged by [`PaginationConfig::figment`],
/// e.g. `PAGEWISE_MAXIMUM_VISIBLE=9`.
pub const ENV_PREFIX: &str = "PAGEWISE_";

/// How many entries a pagination may show and what stands in for omitted
/// pages.
///
/// Immutable: the `with_*` methods return a new config. The marker is only
/// checked against real page numbers once a request is known, see
/// [`guard_marker_not_a_page_number`](crate::guard::guard_marker_not_a_page_number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct PaginationConfig {
    maximum_visible:      u64,
    omitted_chunk_marker: Marker,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    maximum_visible:      u64,
    omitted_chunk_marker: Marker,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            maximum_visible:      DEFAULT_MAXIMUM_VISIBLE,
            omitted_chunk_marker: Marker::DEFAULT,
        }
    }
}

impl TryFrom<RawConfig> for PaginationConfig {
    type Error = InvalidRequest;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Ok(Self::new(raw.maximum_visible)?.with_omitted_chunk_marker(raw.omitted_chunk_marker))
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            maximum_visible:      DEFAULT_MAXIMUM_VISIBLE,
            omitted_chunk_marker: Marker::DEFAULT,
        }
    }
}

impl PaginationConfig {
    /// Config with the default `-1` marker.
    pub fn new(maximum_visible: u64) -> Result<Self> {
        guard_maximum_visible(maximum_visible)?;
        Ok(Self { maximum_visible, ..Self::default() })
    }

    pub fn with_maximum_visible(&self, maximum_visible: u64) -> Result<Self> {
        guard_maximum_visible(maximum_visible)?;
        Ok(Self { maximum_visible, ..self.clone() })
    }

    pub fn with_omitted_chunk_marker(&self, marker: impl Into<Marker>) -> Self {
        Self { omitted_chunk_marker: marker.into(), ..self.clone() }
    }

    /// Like [`with_omitted_chunk_marker`](Self::with_omitted_chunk_marker)
    /// for untyped input, rejecting anything but ints and strings.
    pub fn with_omitted_chunk_marker_value(&self, marker: &Value) -> Result<Self> {
        Ok(self.with_omitted_chunk_marker(guard_marker_type(marker)?))
    }

    pub fn maximum_visible(&self) -> u64 { self.maximum_visible }

    pub fn omitted_chunk_marker(&self) -> &Marker { &self.omitted_chunk_marker }

    /// Defaults, then [`CONFIG_FILE`], then [`ENV_PREFIX`] variables.
    pub fn figment() -> Figment { Self::figment_at(CONFIG_FILE) }

    fn figment_at(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Resolves the default provider stack with `path` in place of
    /// [`CONFIG_FILE`]. A missing file is not an error.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        Self::from_figment(&Self::figment_at(path))
    }

    pub fn from_figment(figment: &Figment) -> std::result::Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        tracing::debug!(
            maximum_visible = config.maximum_visible,
            marker = %config.omitted_chunk_marker,
            "pagination config resolved"
        );
        Ok(config)
    }
}
