use serde::{Deserialize, Serialize};

/// Marker ids are minted by the surface; the core treats them as opaque.
pub type MarkerId = u32;
/// Ids for deferred callbacks scheduled on the host event loop.
pub type TimerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    /// Coordinate-wise arithmetic midpoint.
    pub fn midpoint(self, other: LatLng) -> LatLng {
        LatLng {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    pub color: Color,
    pub weight: f32,
}

impl Default for PathStyle {
    fn default() -> PathStyle {
        PathStyle {
            color: Color {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            },
            weight: 2.0,
        }
    }
}

/// Visual configuration for one marker. Icon choice stays with the surface;
/// the overlay only distinguishes real vertices from insertion handles by
/// opacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub opacity: f32,
    pub draggable: bool,
}

impl MarkerStyle {
    pub fn vertex(draggable: bool) -> MarkerStyle {
        MarkerStyle {
            opacity: 1.0,
            draggable,
        }
    }

    pub fn midpoint(draggable: bool) -> MarkerStyle {
        MarkerStyle {
            opacity: 0.5,
            draggable,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterOptions {
    /// Fixed for the overlay's lifetime. When false no vertex can be added,
    /// moved or removed and markers are created non-draggable.
    pub editable: bool,
    pub style: PathStyle,
}

impl Default for PlotterOptions {
    fn default() -> PlotterOptions {
        PlotterOptions {
            editable: true,
            style: PathStyle::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeEvent {
    VertexAdded,
    VertexRemoved,
}

impl ChangeEvent {
    pub fn name(self) -> &'static str {
        match self {
            ChangeEvent::VertexAdded => "vertex-added",
            ChangeEvent::VertexRemoved => "vertex-removed",
        }
    }
}

/// A real point on the edited polyline. Identity is positional; the marker
/// id only serves to find the vertex again when the surface reports an
/// event on its marker.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub marker: MarkerId,
    pub at: LatLng,
}

/// Transient insertion handle between the vertices at `left` and `left + 1`.
#[derive(Clone, Copy, Debug)]
pub struct MidpointHandle {
    pub marker: MarkerId,
    pub left: usize,
    pub at: LatLng,
}
