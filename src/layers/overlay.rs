//! Image overlay that keeps the host viewport inside the image.
//!
//! While attached, the overlay listens to the host's center-changed and
//! resize notifications. Center changes are coalesced over a short window
//! and then clamped back inside the image; resizes are coalesced over a
//! longer window and then used to recompute the map's minimum zoom.

use crate::{
    constraint::{clamp::reposition_detailed, zoom::compute_min_zoom},
    core::{
        bounds::Bounds,
        config::{MinZoom, OverlayOptions},
        geo::{LatLng, LatLngBounds},
    },
    input::events::{ListenerHandle, MapEvent, MapEventKind},
    layers::{
        base::{LayerProperties, LayerType},
        debounce::Debouncer,
    },
    traits::{MapHost, MapListener, RenderableLayer},
    MapError, Result,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// The visual element mounted in the host's overlay pane
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub id: String,
    pub url: String,
    pub opacity: f32,
    pub visible: bool,
    pub z_index: i32,
    /// Pixel rectangle the image is stretched over; `None` until the first
    /// redraw with a projection available
    pub placement: Option<Bounds>,
}

pub struct BoundedImageOverlay<H: MapHost> {
    properties: LayerProperties,
    image_url: String,
    bounds: LatLngBounds,
    options: OverlayOptions,
    map: Option<Rc<RefCell<H>>>,
    element: Option<ImageElement>,
    center_listener: Option<ListenerHandle>,
    resize_listener: Option<ListenerHandle>,
    center_debounce: Debouncer,
    resize_debounce: Debouncer,
}

impl<H: MapHost> BoundedImageOverlay<H> {
    /// Creates a detached overlay, rejecting bounds with min > max.
    pub fn new(
        image_url: impl Into<String>,
        bounds: LatLngBounds,
        options: OverlayOptions,
    ) -> Result<Self> {
        let bounds = LatLngBounds::try_new(bounds.south_west, bounds.north_east)?;

        let mut properties =
            LayerProperties::new(options.id.clone(), options.name.clone(), LayerType::Image);
        properties.z_index = options.z_index;
        properties.opacity = options.opacity.clamp(0.0, 1.0);
        properties.visible = options.visible;

        Ok(Self {
            properties,
            image_url: image_url.into(),
            bounds,
            center_debounce: Debouncer::new(options.center_debounce()),
            resize_debounce: Debouncer::new(options.resize_debounce()),
            options,
            map: None,
            element: None,
            center_listener: None,
            resize_listener: None,
        })
    }

    /// Attaches to `map` right away
    pub fn with_map(mut self, map: Rc<RefCell<H>>) -> Result<Self> {
        self.set_map(Some(map))?;
        Ok(self)
    }

    /// Moves the overlay to another host, or detaches it with `None`.
    pub fn set_map(&mut self, map: Option<Rc<RefCell<H>>>) -> Result<()> {
        if self.map.is_some() {
            self.on_detach()?;
        }
        self.map = map;
        if self.map.is_some() {
            self.on_attach()?;
        }
        Ok(())
    }

    pub fn map(&self) -> Option<&Rc<RefCell<H>>> {
        self.map.as_ref()
    }

    /// The fixed geographic bounds of the image
    pub fn image_bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn element(&self) -> Option<&ImageElement> {
        self.element.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    pub fn min_zoom_config(&self) -> MinZoom {
        self.options.min_zoom
    }

    pub fn overlay_options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Whether a clamp or zoom fit is waiting for its debounce window
    pub fn has_pending_work(&self) -> bool {
        self.center_debounce.is_pending() || self.resize_debounce.is_pending()
    }

    /// Moves the host view back inside the image if it has left it.
    ///
    /// Returns the new center when one was applied.
    pub fn reposition_to_bounds(&mut self) -> Option<LatLng> {
        let map = self.map.as_ref()?;
        let mut host = map.borrow_mut();

        let Some(projection) = host.projection() else {
            log::debug!("{}: no projection yet, skipping bounds check", self.properties.id);
            return None;
        };

        let correction = reposition_detailed(
            &host.bounds(),
            &self.bounds,
            host.center(),
            &*projection,
            self.options.wiggle_px,
        )?;

        log::debug!(
            "{}: clamped view ({:?}, {:?}) by ({:.1}, {:.1})px to ({:.6}, {:.6})",
            self.properties.id,
            correction.horizontal,
            correction.vertical,
            correction.shift.x,
            correction.shift.y,
            correction.center.lat,
            correction.center.lng
        );
        host.set_center(correction.center);
        Some(correction.center)
    }

    /// Copies the layer properties onto the mounted element, if any.
    fn sync_element(&mut self) {
        if let Some(element) = self.element.as_mut() {
            element.opacity = self.properties.opacity;
            element.visible = self.properties.visible;
            element.z_index = self.properties.z_index;
        }
    }

    /// Recomputes the minimum zoom and pushes it to the host.
    ///
    /// The current zoom is raised first when it is below the new minimum.
    pub fn recalculate_min_zoom(&mut self) -> Option<i32> {
        let map = self.map.as_ref()?;
        let mut host = map.borrow_mut();

        let projection = host.projection();
        let current_zoom = host.zoom();
        let Some(min_zoom) = compute_min_zoom(
            self.options.min_zoom,
            host.container_size(),
            &self.bounds,
            projection.as_deref(),
            current_zoom,
        ) else {
            log::debug!("{}: container not laid out, no minimum zoom", self.properties.id);
            return None;
        };

        if current_zoom < min_zoom {
            host.set_zoom(min_zoom);
        }
        host.set_min_zoom(min_zoom);
        log::info!("{}: minimum zoom set to {}", self.properties.id, min_zoom);
        Some(min_zoom)
    }
}

impl<H: MapHost> RenderableLayer for BoundedImageOverlay<H> {
    crate::impl_layer_properties!(properties, sync_element);

    fn on_attach(&mut self) -> Result<()> {
        let map = self.map.clone().ok_or(MapError::NotAttached)?;
        if self.element.is_some() {
            return Ok(());
        }

        self.element = Some(ImageElement {
            id: self.properties.id.clone(),
            url: self.image_url.clone(),
            opacity: self.properties.opacity,
            visible: self.properties.visible,
            z_index: self.properties.z_index,
            placement: None,
        });
        {
            let mut host = map.borrow_mut();
            host.mount_element(&self.properties.id);
            host.set_center(self.bounds.center());
        }

        self.recalculate_min_zoom();

        {
            let mut host = map.borrow_mut();
            self.center_listener = Some(host.subscribe(MapEventKind::CenterChanged));
            self.resize_listener = Some(host.subscribe(MapEventKind::Resize));
        }

        log::info!("{}: attached ({})", self.properties.id, self.image_url);
        self.on_redraw()
    }

    fn on_detach(&mut self) -> Result<()> {
        self.center_debounce.cancel();
        self.resize_debounce.cancel();

        let Some(map) = self.map.as_ref() else {
            self.center_listener = None;
            self.resize_listener = None;
            self.element = None;
            return Ok(());
        };
        let mut host = map.borrow_mut();

        if let Some(handle) = self.center_listener.take() {
            host.unsubscribe(handle);
        }
        if let Some(handle) = self.resize_listener.take() {
            host.unsubscribe(handle);
        }
        if let Some(element) = self.element.take() {
            host.unmount_element(&element.id);
            log::info!("{}: detached", self.properties.id);
        }
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<()> {
        self.sync_element();
        let (Some(map), Some(element)) = (self.map.as_ref(), self.element.as_mut()) else {
            return Ok(());
        };
        let Some(projection) = map.borrow().projection() else {
            return Ok(());
        };

        let south_west = projection.to_pixel(&self.bounds.south_west);
        let north_east = projection.to_pixel(&self.bounds.north_east);
        element.placement = Some(Bounds::from_projected_corners(south_west, north_east));
        Ok(())
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(self.bounds.clone())
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.image_url,
            "bounds": {
                "south": self.bounds.south(),
                "west": self.bounds.west(),
                "north": self.bounds.north(),
                "east": self.bounds.east()
            },
            "overlay": serde_json::to_value(&self.options).unwrap_or_default()
        })
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        let options: OverlayOptions = serde_json::from_value(options)?;
        if options.id != self.properties.id && self.is_attached() {
            log::warn!(
                "{}: rejected rename to {} while attached",
                self.properties.id,
                options.id
            );
            return Err(MapError::Layer(format!(
                "cannot rename attached layer {} to {}",
                self.properties.id, options.id
            )));
        }

        self.properties.id = options.id.clone();
        self.properties.name = options.name.clone();
        self.properties.z_index = options.z_index;
        self.properties.opacity = options.opacity.clamp(0.0, 1.0);
        self.properties.visible = options.visible;

        self.center_debounce.set_delay(options.center_debounce());
        self.resize_debounce.set_delay(options.resize_debounce());
        self.options = options;
        self.sync_element();
        Ok(())
    }
}

impl<H: MapHost> MapListener for BoundedImageOverlay<H> {
    fn handle_event(&mut self, handle: ListenerHandle, event: &MapEvent, now: Instant) {
        let kind = event.kind();
        if Some(handle) == self.center_listener && kind == MapEventKind::CenterChanged {
            self.center_debounce.schedule(now);
        } else if Some(handle) == self.resize_listener && kind == MapEventKind::Resize {
            self.resize_debounce.schedule(now);
        } else {
            log::trace!("{}: ignoring {} for {:?}", self.properties.id, kind, handle);
        }
    }

    fn tick(&mut self, now: Instant) {
        if self.center_debounce.fire_if_due(now) {
            self.reposition_to_bounds();
        }
        if self.resize_debounce.fire_if_due(now) {
            self.recalculate_min_zoom();
        }
    }
}

impl<H: MapHost> std::fmt::Debug for BoundedImageOverlay<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedImageOverlay")
            .field("id", &self.properties.id)
            .field("image_url", &self.image_url)
            .field("bounds", &self.bounds)
            .field("attached", &self.is_attached())
            .finish()
    }
}
