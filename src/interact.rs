use crate::model::{ChangeEvent, LatLng, MarkerId, MarkerStyle, TimerId};
use crate::render;
use crate::surface::Surface;
use crate::Plotter;

/// How long after the last drag movement a click is still treated as the
/// tail of the drag gesture rather than a standalone click.
pub const CLICK_GUARD_MS: u32 = 500;

/// Debounce guard: while suppressed, surface and marker clicks are
/// swallowed so a drag's terminal pointer-up is not misread as an add or a
/// delete. The pending clearance timer is stored so teardown can cancel it
/// instead of letting it fire against a cleared overlay.
#[derive(Debug, Default)]
pub(crate) struct ClickGuard {
    suppressed: bool,
    pending: Option<TimerId>,
}

impl ClickGuard {
    pub(crate) fn suppressed(&self) -> bool {
        self.suppressed
    }

    /// Arm (or re-arm) the guard. Every drag movement pushes the clearance
    /// out by a full window, so a drag longer than the window cannot outlive
    /// its own guard.
    pub(crate) fn arm<S: Surface>(&mut self, surface: &mut S) {
        if let Some(t) = self.pending.take() {
            surface.clear_timer(t);
        }
        self.suppressed = true;
        self.pending = Some(surface.set_timer(CLICK_GUARD_MS));
    }

    /// A host timer fired. Clears the guard iff it is the pending clearance;
    /// stale ids are ignored.
    pub(crate) fn timer_fired(&mut self, id: TimerId) {
        if self.pending == Some(id) {
            self.pending = None;
            self.suppressed = false;
        }
    }

    pub(crate) fn cancel<S: Surface>(&mut self, surface: &mut S) {
        if let Some(t) = self.pending.take() {
            surface.clear_timer(t);
        }
        self.suppressed = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Dragging(MarkerId),
}

/// Surface-level primary click: append a vertex at the click position.
pub(crate) fn map_click_impl<S: Surface>(p: &mut Plotter, surface: &mut S, at: LatLng) {
    if !p.attached || !p.options.editable || p.guard.suppressed() {
        return;
    }
    add_vertex_impl(p, surface, at);
}

/// Shared add path. Surface clicks and seed replay both land here, so a
/// replayed coordinate gets exactly the behavior of a clicked one.
pub(crate) fn add_vertex_impl<S: Surface>(p: &mut Plotter, surface: &mut S, at: LatLng) {
    let marker = surface.add_marker(at, MarkerStyle::vertex(p.options.editable));
    p.vertices.append(marker, at);
    p.bump();
    render::replot_impl(p, surface);
    p.emit(ChangeEvent::VertexAdded);
}

/// Marker-level primary click: remove that vertex. Swallowed while the
/// guard is suppressed, which is what keeps a drag's release from deleting
/// the vertex it just moved.
pub(crate) fn marker_click_impl<S: Surface>(p: &mut Plotter, surface: &mut S, marker: MarkerId) {
    if !p.attached || !p.options.editable || p.guard.suppressed() {
        return;
    }
    // A stale handle (click queued behind the removal that consumed it) is
    // silently ignored and notifies nobody.
    let gone = match p.vertices.remove(marker) {
        Some(v) => v,
        None => return,
    };
    surface.remove_marker(gone.marker);
    p.bump();
    render::replot_impl(p, surface);
    p.emit(ChangeEvent::VertexRemoved);
}

/// Marker-level press. Only midpoint handles respond: the handle is
/// promoted into a real vertex at its position, immediately after its left
/// neighbor. Taking the handle out of the set retires its press behavior,
/// so a single gesture cannot promote twice. Press on a vertex marker is a
/// no-op.
pub(crate) fn marker_press_impl<S: Surface>(p: &mut Plotter, surface: &mut S, marker: MarkerId) {
    if !p.attached || !p.options.editable {
        return;
    }
    let handle = match p.midpoints.take(marker) {
        Some(h) => h,
        None => return,
    };
    surface.set_marker_opacity(handle.marker, 1.0);
    let ok = p.vertices.insert_after(handle.left, handle.marker, handle.at);
    // The left-index came out of the live midpoint set, so the gap exists.
    debug_assert!(ok, "midpoint left-index must name a live gap");
    p.bump();
    render::replot_impl(p, surface);
    p.emit(ChangeEvent::VertexAdded);
}

pub(crate) fn marker_drag_start_impl<S: Surface>(
    p: &mut Plotter,
    surface: &mut S,
    marker: MarkerId,
) {
    if !p.attached || !p.options.editable {
        return;
    }
    p.drag = DragState::Dragging(marker);
    p.guard.arm(surface);
}

/// Intermediate drag position: keep the path visually attached to the
/// moving marker. No state transition.
pub(crate) fn marker_drag_impl<S: Surface>(
    p: &mut Plotter,
    surface: &mut S,
    marker: MarkerId,
    at: LatLng,
) {
    if !p.attached || !p.options.editable {
        return;
    }
    // Hosts that surface no distinct drag-start still arm the guard here.
    p.drag = DragState::Dragging(marker);
    p.guard.arm(surface);
    if p.vertices.set_position(marker, at) {
        p.bump();
        render::replot_impl(p, surface);
    }
}

/// Drag released: finalize the marker's position in place. No index change;
/// the guard stays up until its timer clears it.
pub(crate) fn marker_drag_end_impl<S: Surface>(
    p: &mut Plotter,
    surface: &mut S,
    marker: MarkerId,
    at: LatLng,
) {
    if !p.attached || !p.options.editable {
        return;
    }
    p.drag = DragState::Idle;
    if p.vertices.set_position(marker, at) {
        p.bump();
        render::replot_impl(p, surface);
    }
}

pub(crate) fn timer_fired_impl(p: &mut Plotter, id: TimerId) {
    p.guard.timer_fired(id);
}
