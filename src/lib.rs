pub mod model;
pub mod surface;
mod interact;
mod json;
mod midpoint;
mod render;
mod store;

pub use interact::CLICK_GUARD_MS;
pub use model::{
    ChangeEvent, Color, LatLng, MarkerId, MarkerStyle, MidpointHandle, PathStyle, PlotterOptions,
    TimerId, Vertex,
};
pub use surface::Surface;

use interact::{ClickGuard, DragState};
use midpoint::MidpointSet;
use store::VertexStore;

/// Editable polyline overlay: an ordered vertex sequence, the transient
/// midpoint handles between adjacent vertices, and the interaction state
/// machine that turns surface input into mutations. The surface itself is a
/// borrowed collaborator, passed into every operation and never owned.
///
/// Event flow: the host surface forwards input to the entry points below
/// (`map_click`, `marker_click`, `marker_press`, `marker_drag_start`,
/// `marker_drag`, `marker_drag_end`, `timer_fired`); each accepted mutation
/// redraws and then notifies every registered change listener.
pub struct Plotter {
    pub(crate) vertices: VertexStore,
    pub(crate) midpoints: MidpointSet,
    pub(crate) options: PlotterOptions,
    pub(crate) guard: ClickGuard,
    pub(crate) drag: DragState,
    pub(crate) seed: Vec<LatLng>,
    pub(crate) attached: bool,
    pub(crate) listeners: Vec<Box<dyn FnMut(ChangeEvent)>>,
    pub(crate) geom_ver: u64,
}

impl Plotter {
    /// The live sequence starts empty; `latlngs` is replayed through the
    /// add-vertex path on attach, so pre-existing data gets full bindings
    /// without a second code path.
    pub fn new(latlngs: Vec<LatLng>, options: PlotterOptions) -> Plotter {
        Plotter {
            vertices: VertexStore::new(),
            midpoints: MidpointSet::new(),
            options,
            guard: ClickGuard::default(),
            drag: DragState::Idle,
            seed: latlngs,
            attached: false,
            listeners: Vec::new(),
            geom_ver: 1,
        }
    }

    /// Bind the overlay to a surface: add the base path, replay the seed
    /// coordinates, draw. Attaching an already-attached overlay is a
    /// programmer error.
    pub fn attach<S: Surface>(&mut self, surface: &mut S) {
        assert!(!self.attached, "overlay is already attached");
        self.attached = true;
        surface.add_path(self.options.style);
        let seed = std::mem::take(&mut self.seed);
        for at in seed {
            interact::add_vertex_impl(self, surface, at);
        }
        render::replot_impl(self, surface);
    }

    /// Detach every vertex marker and midpoint handle, empty the path and
    /// drop any pending guard timer. The overlay stays attached: surface
    /// clicks keep plotting.
    pub fn clear<S: Surface>(&mut self, surface: &mut S) {
        for v in self.vertices.iter() {
            surface.remove_marker(v.marker);
        }
        self.vertices.clear();
        self.midpoints.clear(surface);
        self.guard.cancel(surface);
        self.drag = DragState::Idle;
        if self.attached {
            surface.set_path(&[]);
        }
        self.bump();
    }

    /// Full teardown: `clear` plus removing the base path. Cancelling the
    /// pending timer here means no callback can land on a detached overlay.
    /// The current positions become the seed for a later re-attach. No-op
    /// when not attached.
    pub fn detach<S: Surface>(&mut self, surface: &mut S) {
        if !self.attached {
            return;
        }
        self.seed = self.vertices.positions();
        self.clear(surface);
        surface.remove_path();
        self.attached = false;
    }

    /// Replace the whole vertex sequence. When attached, existing markers
    /// are torn down and the new coordinates replayed through the add-vertex
    /// path; when detached they become the seed for the next attach.
    pub fn set_latlngs<S: Surface>(&mut self, surface: &mut S, latlngs: &[LatLng]) {
        if !self.attached {
            self.seed = latlngs.to_vec();
            return;
        }
        self.clear(surface);
        for at in latlngs {
            interact::add_vertex_impl(self, surface, *at);
        }
    }

    /// Register a change listener. Listeners accumulate; each one is
    /// invoked synchronously after every accepted mutation and redraw.
    pub fn on_change(&mut self, listener: impl FnMut(ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // Input entry points, forwarded by the host surface.
    pub fn map_click<S: Surface>(&mut self, surface: &mut S, at: LatLng) {
        interact::map_click_impl(self, surface, at);
    }
    pub fn marker_click<S: Surface>(&mut self, surface: &mut S, marker: MarkerId) {
        interact::marker_click_impl(self, surface, marker);
    }
    pub fn marker_press<S: Surface>(&mut self, surface: &mut S, marker: MarkerId) {
        interact::marker_press_impl(self, surface, marker);
    }
    pub fn marker_drag_start<S: Surface>(&mut self, surface: &mut S, marker: MarkerId) {
        interact::marker_drag_start_impl(self, surface, marker);
    }
    pub fn marker_drag<S: Surface>(&mut self, surface: &mut S, marker: MarkerId, at: LatLng) {
        interact::marker_drag_impl(self, surface, marker, at);
    }
    pub fn marker_drag_end<S: Surface>(&mut self, surface: &mut S, marker: MarkerId, at: LatLng) {
        interact::marker_drag_end_impl(self, surface, marker, at);
    }
    pub fn timer_fired(&mut self, id: TimerId) {
        interact::timer_fired_impl(self, id);
    }

    /// Redraw from current state. Safe to call repeatedly.
    pub fn replot<S: Surface>(&mut self, surface: &mut S) {
        render::replot_impl(self, surface);
    }

    pub fn latlngs(&self) -> Vec<LatLng> {
        self.vertices.positions()
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    pub fn vertex_marker(&self, index: usize) -> Option<MarkerId> {
        self.vertices.marker_at(index)
    }
    pub fn marker_index(&self, marker: MarkerId) -> Option<usize> {
        self.vertices.index_of(marker)
    }
    pub fn midpoint_count(&self) -> usize {
        self.midpoints.len()
    }
    pub fn midpoint_marker(&self, index: usize) -> Option<MarkerId> {
        self.midpoints.marker_at(index)
    }
    pub fn midpoint_latlngs(&self) -> Vec<LatLng> {
        self.midpoints.handles().iter().map(|h| h.at).collect()
    }
    pub fn midpoint_handles(&self) -> &[MidpointHandle] {
        self.midpoints.handles()
    }
    pub fn is_editable(&self) -> bool {
        self.options.editable
    }
    pub fn is_attached(&self) -> bool {
        self.attached
    }
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }
    pub fn options(&self) -> PlotterOptions {
        self.options
    }
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    /// Strict JSON ingest: replaces the vertex sequence on success, returns
    /// an error code otherwise.
    pub fn from_json_value_strict<S: Surface>(
        &mut self,
        surface: &mut S,
        v: serde_json::Value,
    ) -> Result<(), (&'static str, String)> {
        let latlngs = json::latlngs_from_json_strict(v)?;
        self.set_latlngs(surface, &latlngs);
        Ok(())
    }

    pub fn from_json_value<S: Surface>(&mut self, surface: &mut S, v: serde_json::Value) -> bool {
        self.from_json_value_strict(surface, v).is_ok()
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    pub(crate) fn emit(&mut self, ev: ChangeEvent) {
        for l in &mut self.listeners {
            l(ev);
        }
    }
}
