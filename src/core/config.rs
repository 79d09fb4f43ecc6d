//! Configuration for bounded overlays
//!
//! Options are plain data with serde support so they can be loaded from
//! JSON alongside the rest of an application's map settings.

use crate::core::constants::{CENTER_DEBOUNCE_MS, DEFAULT_WIGGLE_PX, RESIZE_DEBOUNCE_MS};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the overlay decides the map's minimum zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinZoom {
    /// Derive it from the viewport and image sizes on every resize
    Auto,
    /// Always use this level
    Fixed(i32),
}

impl Default for MinZoom {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<Option<i32>> for MinZoom {
    fn from(level: Option<i32>) -> Self {
        level.map_or(Self::Auto, Self::Fixed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    pub id: String,
    pub name: String,
    pub min_zoom: MinZoom,
    /// Extra pixels added to every clamp correction
    pub wiggle_px: f64,
    pub center_debounce_ms: u64,
    pub resize_debounce_ms: u64,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
}

impl OverlayOptions {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_min_zoom(mut self, min_zoom: MinZoom) -> Self {
        self.min_zoom = min_zoom;
        self
    }

    pub fn with_wiggle(mut self, wiggle_px: f64) -> Self {
        self.wiggle_px = wiggle_px;
        self
    }

    pub fn with_debounce(mut self, center: Duration, resize: Duration) -> Self {
        self.center_debounce_ms = center.as_millis() as u64;
        self.resize_debounce_ms = resize.as_millis() as u64;
        self
    }

    pub fn center_debounce(&self) -> Duration {
        Duration::from_millis(self.center_debounce_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Parses options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            id: "bounded-image".to_string(),
            name: "Bounded Image".to_string(),
            min_zoom: MinZoom::Auto,
            wiggle_px: DEFAULT_WIGGLE_PX,
            center_debounce_ms: CENTER_DEBOUNCE_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            z_index: 0,
            opacity: 1.0,
            visible: true,
        }
    }
}
