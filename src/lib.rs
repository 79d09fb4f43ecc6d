//! # strictbounds
//!
//! Image overlays for map surfaces that keep the visible viewport inside
//! the image's geographic bounds.
//!
//! An overlay pegs an image to a fixed [`LatLngBounds`] and, while attached
//! to a host map, does two things: it pulls the view back whenever it is
//! panned past an edge of the image, and it raises the map's minimum zoom so
//! that the viewport can never be larger than the image.
//!
//! The host map is any type implementing [`MapHost`]. A small reference host
//! ([`Map`]) backed by a Web Mercator [`Viewport`] is included.

pub mod constraint;
pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    config::{MinZoom, OverlayOptions},
    geo::{LatLng, LatLngBounds, Point},
    map::Map,
    projection::{LinearProjection, MercatorProjection},
    viewport::Viewport,
};

pub use crate::constraint::{
    clamp::{reposition, ClampCorrection},
    zoom::compute_min_zoom,
};

pub use crate::layers::{
    debounce::Debouncer,
    overlay::{BoundedImageOverlay, ImageElement},
};

pub use crate::input::events::{ListenerHandle, MapEvent, MapEventKind};

pub use crate::traits::{MapHost, MapListener, Projection, RenderableLayer};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid bounds: south {south}, west {west}, north {north}, east {east}")]
    InvalidBounds {
        south: f64,
        west: f64,
        north: f64,
        east: f64,
    },

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Layer is not attached to a map")]
    NotAttached,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initializes `env_logger` from the environment, ignoring repeated calls.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(false).try_init();
}
