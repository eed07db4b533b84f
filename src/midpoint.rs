use crate::model::{MarkerId, MarkerStyle, MidpointHandle};
use crate::store::VertexStore;
use crate::surface::Surface;

/// The transient insertion handles, one per adjacent vertex pair. The whole
/// set is destroyed and rebuilt after every structural mutation; handles
/// carry no identity across redraws. O(n) per rebuild.
#[derive(Debug, Default)]
pub(crate) struct MidpointSet {
    handles: Vec<MidpointHandle>,
}

impl MidpointSet {
    pub(crate) fn new() -> MidpointSet {
        MidpointSet {
            handles: Vec::new(),
        }
    }

    /// Detach every existing handle, then lay down one per gap (i, i+1) at
    /// the pair's arithmetic midpoint, tagged with left-index i and drawn at
    /// reduced opacity. Produces no handles for fewer than 2 vertices.
    pub(crate) fn regenerate<S: Surface>(
        &mut self,
        store: &VertexStore,
        surface: &mut S,
        draggable: bool,
    ) {
        for h in self.handles.drain(..) {
            surface.remove_marker(h.marker);
        }
        let positions = store.positions();
        for (i, pair) in positions.windows(2).enumerate() {
            let at = pair[0].midpoint(pair[1]);
            let marker = surface.add_marker(at, MarkerStyle::midpoint(draggable));
            self.handles.push(MidpointHandle { marker, left: i, at });
        }
    }

    /// Remove one handle from the set without touching its marker. Promotion
    /// relies on this: once taken, a second press on the same marker finds
    /// nothing, so one gesture cannot promote twice.
    pub(crate) fn take(&mut self, marker: MarkerId) -> Option<MidpointHandle> {
        let idx = self.handles.iter().position(|h| h.marker == marker)?;
        Some(self.handles.remove(idx))
    }

    pub(crate) fn marker_at(&self, index: usize) -> Option<MarkerId> {
        self.handles.get(index).map(|h| h.marker)
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    pub(crate) fn handles(&self) -> &[MidpointHandle] {
        &self.handles
    }

    pub(crate) fn clear<S: Surface>(&mut self, surface: &mut S) {
        for h in self.handles.drain(..) {
            surface.remove_marker(h.marker);
        }
    }
}
