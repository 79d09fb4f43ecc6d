//! Shared trait abstractions for the seams between overlays and host maps
//!
//! The overlay never reaches for a global map: everything it needs from the
//! host is expressed by [`MapHost`] and handed to it explicitly, and the
//! host in turn drives the overlay through [`RenderableLayer`] and
//! [`MapListener`].

use crate::{
    core::geo::{LatLng, LatLngBounds, Point},
    input::events::{ListenerHandle, MapEvent, MapEventKind},
    layers::base::LayerType,
    Result,
};
use instant::Instant;

/// Converts between geographic and container pixel coordinates for the
/// viewport state it was created from.
pub trait Projection {
    /// Transform geographic coordinates to pixel coordinates
    fn to_pixel(&self, lat_lng: &LatLng) -> Point;

    /// Transform pixel coordinates to geographic coordinates
    fn to_geo(&self, point: &Point) -> LatLng;
}

/// Capabilities an overlay needs from the map it is attached to
pub trait MapHost {
    /// Currently visible region
    fn bounds(&self) -> LatLngBounds;

    fn center(&self) -> LatLng;

    fn set_center(&mut self, center: LatLng);

    fn zoom(&self) -> i32;

    fn set_zoom(&mut self, zoom: i32);

    /// Lowest zoom the user may reach
    fn set_min_zoom(&mut self, zoom: i32);

    /// Size of the map container in pixels as `(width, height)`
    fn container_size(&self) -> (u32, u32);

    /// Projection for the current center and zoom.
    ///
    /// `None` while no overlay pane is ready, e.g. before any layer has been
    /// mounted.
    fn projection(&self) -> Option<Box<dyn Projection>>;

    /// Register interest in a kind of notification
    fn subscribe(&mut self, kind: MapEventKind) -> ListenerHandle;

    /// Drop a subscription. Unknown handles are ignored.
    fn unsubscribe(&mut self, handle: ListenerHandle);

    /// Insert an element into the overlay pane
    fn mount_element(&mut self, id: &str);

    /// Remove an element from the overlay pane. Unknown ids are ignored.
    fn unmount_element(&mut self, id: &str);
}

/// A layer the host can attach, detach and redraw
pub trait RenderableLayer {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Set layer opacity
    fn set_opacity(&mut self, opacity: f32);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Called once the host's panes are ready for this layer
    fn on_attach(&mut self) -> Result<()>;

    /// Called when the layer leaves the host
    fn on_detach(&mut self) -> Result<()>;

    /// Called whenever the host needs the layer repositioned
    fn on_redraw(&mut self) -> Result<()>;

    /// Get layer bounds if applicable
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Get layer options
    fn options(&self) -> serde_json::Value;

    /// Set layer options
    fn set_options(&mut self, options: serde_json::Value) -> Result<()>;
}

/// Receives host notifications and timer ticks
pub trait MapListener {
    /// Deliver a notification for one of this listener's subscriptions
    fn handle_event(&mut self, handle: ListenerHandle, event: &MapEvent, now: Instant);

    /// Run any work whose coalescing window has elapsed
    fn tick(&mut self, now: Instant);
}
