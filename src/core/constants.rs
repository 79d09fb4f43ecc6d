//! Core constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Map scale denominator at zoom level 1 for 256px tiles at 96 dpi.
///
/// Each zoom step halves it: `scale(z) = BASE_SCALE / 2^(z - 1)`.
pub const BASE_SCALE: f64 = 591_657_550.5;

/// First zoom level tried when searching for the minimum zoom.
pub const MIN_SEARCH_ZOOM: i32 = 1;

/// Search ceiling for the minimum zoom; returned when nothing smaller fits.
pub const MAX_SEARCH_ZOOM: i32 = 30;

/// Pixel margin added to every clamp correction so the view settles just
/// inside the edge instead of exactly on it.
pub const DEFAULT_WIGGLE_PX: f64 = 5.0;

/// Coalescing window for center-changed notifications.
pub const CENTER_DEBOUNCE_MS: u64 = 5;

/// Coalescing window for resize notifications.
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.0511287798;
