//! Prelude module for common strictbounds types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use strictbounds::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    config::{MinZoom, OverlayOptions},
    geo::{LatLng, LatLngBounds, Point},
    map::Map,
    projection::{LinearProjection, MercatorProjection},
    viewport::Viewport,
};

pub use crate::constraint::{
    clamp::{reposition, reposition_detailed, ClampCorrection, Edge},
    zoom::{compute_min_zoom, scale_ratio, zoom_scale},
};

pub use crate::layers::{
    base::{LayerProperties, LayerType},
    debounce::Debouncer,
    overlay::{BoundedImageOverlay, ImageElement},
};

pub use crate::input::events::{ListenerHandle, MapEvent, MapEventKind, Notification};

pub use crate::traits::{MapHost, MapListener, Projection, RenderableLayer};

pub use crate::{Error as MapError, Result};

pub use std::{
    cell::RefCell,
    rc::Rc,
    time::Duration,
};

pub use instant::Instant;

pub use fxhash::FxHashMap as HashMap;
