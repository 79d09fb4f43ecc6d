//! Minimal host map used to drive overlays outside of a real widget.
//!
//! `Map` owns a [`Viewport`], a listener registry, an event queue and an
//! overlay pane. Mutations queue notifications which [`Map::dispatch`] later
//! delivers to a listener, mirroring the event loop of an interactive map.

use crate::{
    core::{
        geo::{LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    input::events::{ListenerHandle, MapEvent, MapEventKind, Notification},
    prelude::HashMap,
    traits::{MapHost, MapListener, Projection, RenderableLayer},
    Result,
};
use instant::Instant;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Map {
    viewport: Viewport,
    /// Event listeners by handle
    listeners: HashMap<ListenerHandle, MapEventKind>,
    next_handle: u64,
    /// Event queue for processing
    event_queue: VecDeque<MapEvent>,
    /// Ids of mounted overlay elements, bottom to top
    overlay_pane: Vec<String>,
    needs_redraw: bool,
}

impl Map {
    pub fn new(center: LatLng, zoom: i32, size: Point) -> Self {
        Self {
            viewport: Viewport::new(center, zoom, size),
            listeners: HashMap::default(),
            next_handle: 1,
            event_queue: VecDeque::new(),
            overlay_pane: Vec::new(),
            needs_redraw: true,
        }
    }

    /// Convenience constructor returning the shared handle overlays expect
    pub fn shared(center: LatLng, zoom: i32, size: Point) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(center, zoom, size)))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn min_zoom(&self) -> i32 {
        self.viewport.min_zoom
    }

    /// Resizes the container and queues a resize notification
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport
            .set_size(Point::new(f64::from(width), f64::from(height)));
        self.needs_redraw = true;
        self.emit(MapEvent::Resize { width, height });
    }

    /// Pans the view by a pixel offset, as a drag would
    pub fn pan_by(&mut self, offset: Point) {
        let center = self.viewport.lat_lng_to_pixel(&self.viewport.center);
        let target = self.viewport.pixel_to_lat_lng(&center.add(&offset));
        self.set_center(target);
    }

    pub fn overlay_pane(&self) -> &[String] {
        &self.overlay_pane
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Get number of pending events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    /// Drains the queue, addressing each event to every matching subscription.
    ///
    /// Events nobody listens to are dropped.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        let mut handles: Vec<_> = self.listeners.iter().map(|(h, k)| (*h, *k)).collect();
        handles.sort_by_key(|(handle, _)| *handle);

        self.event_queue
            .drain(..)
            .flat_map(|event| {
                handles
                    .iter()
                    .filter(|(_, kind)| *kind == event.kind())
                    .map(|(handle, _)| Notification {
                        handle: *handle,
                        event: event.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Returns whether the view changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Runs one turn of the event loop for `layer`: delivers queued
    /// notifications, lets elapsed debounce windows fire, then redraws if
    /// the view changed.
    ///
    /// No borrow of `map` is held while the layer runs.
    pub fn dispatch<L>(map: &Rc<RefCell<Map>>, layer: &mut L, now: Instant) -> Result<()>
    where
        L: MapListener + RenderableLayer,
    {
        let notifications = map.borrow_mut().drain_notifications();
        for notification in &notifications {
            layer.handle_event(notification.handle, &notification.event, now);
        }

        layer.tick(now);

        let redraw = map.borrow_mut().take_redraw();
        if redraw {
            layer.on_redraw()?;
        }
        Ok(())
    }

    fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }
}

impl MapHost for Map {
    fn bounds(&self) -> LatLngBounds {
        self.viewport.bounds()
    }

    fn center(&self) -> LatLng {
        self.viewport.center
    }

    fn set_center(&mut self, center: LatLng) {
        let previous = self.viewport.center;
        self.viewport.set_center(center);
        if self.viewport.center != previous {
            self.needs_redraw = true;
            self.emit(MapEvent::CenterChanged {
                center: self.viewport.center,
            });
        }
    }

    fn zoom(&self) -> i32 {
        self.viewport.zoom
    }

    fn set_zoom(&mut self, zoom: i32) {
        let previous = self.viewport.zoom;
        self.viewport.set_zoom(zoom);
        if self.viewport.zoom != previous {
            self.needs_redraw = true;
            self.emit(MapEvent::ZoomChanged {
                zoom: self.viewport.zoom,
            });
        }
    }

    fn set_min_zoom(&mut self, zoom: i32) {
        let previous = self.viewport.zoom;
        self.viewport.set_min_zoom(zoom);
        if self.viewport.zoom != previous {
            self.needs_redraw = true;
            self.emit(MapEvent::ZoomChanged {
                zoom: self.viewport.zoom,
            });
        }
    }

    /// Rounds the viewport size to whole pixels; negative sizes count as 0.
    fn container_size(&self) -> (u32, u32) {
        let whole = |length: f64| length.max(0.0).round() as u32;
        (whole(self.viewport.size.x), whole(self.viewport.size.y))
    }

    fn projection(&self) -> Option<Box<dyn Projection>> {
        if self.overlay_pane.is_empty() {
            return None;
        }
        Some(Box::new(self.viewport.projection()))
    }

    fn subscribe(&mut self, kind: MapEventKind) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.insert(handle, kind);
        handle
    }

    fn unsubscribe(&mut self, handle: ListenerHandle) {
        self.listeners.remove(&handle);
    }

    fn mount_element(&mut self, id: &str) {
        if !self.overlay_pane.iter().any(|mounted| mounted == id) {
            self.overlay_pane.push(id.to_string());
            self.needs_redraw = true;
        }
    }

    fn unmount_element(&mut self, id: &str) {
        self.overlay_pane.retain(|mounted| mounted != id);
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(LatLng::default(), 1, Point::new(800.0, 600.0))
    }
}
