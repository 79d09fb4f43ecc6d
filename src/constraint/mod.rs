//! Geometric constraints keeping a viewport inside fixed image bounds
//!
//! Both algorithms are pure functions of the state handed to them; the
//! overlay lifecycle decides when to run them and writes their results back
//! to the host.

pub mod clamp;
pub mod zoom;

pub use clamp::{reposition, reposition_detailed, ClampCorrection, Edge};
pub use zoom::{compute_min_zoom, scale_ratio, zoom_scale};
