use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Map event types that can be emitted by the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The map center moved, by the user or programmatically
    CenterChanged { center: LatLng },
    /// The zoom level changed
    ZoomChanged { zoom: i32 },
    /// The map container was resized
    Resize { width: u32, height: u32 },
}

/// Discriminant of [`MapEvent`] used when subscribing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapEventKind {
    CenterChanged,
    ZoomChanged,
    Resize,
}

impl MapEvent {
    pub fn kind(&self) -> MapEventKind {
        match self {
            MapEvent::CenterChanged { .. } => MapEventKind::CenterChanged,
            MapEvent::ZoomChanged { .. } => MapEventKind::ZoomChanged,
            MapEvent::Resize { .. } => MapEventKind::Resize,
        }
    }
}

impl std::fmt::Display for MapEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapEventKind::CenterChanged => write!(f, "center_changed"),
            MapEventKind::ZoomChanged => write!(f, "zoom_changed"),
            MapEventKind::Resize => write!(f, "resize"),
        }
    }
}

/// Opaque token identifying one subscription on a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerHandle(pub u64);

/// An event addressed to one subscription
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub handle: ListenerHandle,
    pub event: MapEvent,
}
