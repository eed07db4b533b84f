// Shared test utilities for plotline tests.

#![allow(dead_code)]

use plotline::{LatLng, MarkerId, MarkerStyle, PathStyle, Plotter, Surface, TimerId};
use std::collections::BTreeMap;

/// Recording surface: tracks live markers, the rendered path and pending
/// timers so tests can assert on what the overlay actually did to it.
#[derive(Debug, Default)]
pub struct MockSurface {
    next_id: u32,
    pub markers: BTreeMap<MarkerId, (LatLng, MarkerStyle)>,
    /// Some once the base path is attached; the Vec is the drawn points.
    pub path: Option<Vec<LatLng>>,
    pub path_style: Option<PathStyle>,
    pub pending_timers: Vec<TimerId>,
    pub set_path_calls: usize,
}

impl MockSurface {
    pub fn new() -> MockSurface {
        MockSurface::default()
    }

    /// Deliver the pending guard-clearance timer to the overlay, as the
    /// host event loop would after the debounce window elapses.
    pub fn fire_pending_timer(&mut self, p: &mut Plotter) {
        let fired = std::mem::take(&mut self.pending_timers);
        for t in fired {
            p.timer_fired(t);
        }
    }
}

impl Surface for MockSurface {
    fn add_marker(&mut self, at: LatLng, style: MarkerStyle) -> MarkerId {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.insert(id, (at, style));
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
    }

    fn set_marker_opacity(&mut self, id: MarkerId, opacity: f32) {
        if let Some(m) = self.markers.get_mut(&id) {
            m.1.opacity = opacity;
        }
    }

    fn add_path(&mut self, style: PathStyle) {
        self.path = Some(Vec::new());
        self.path_style = Some(style);
    }

    fn set_path(&mut self, points: &[LatLng]) {
        self.set_path_calls += 1;
        self.path = Some(points.to_vec());
    }

    fn remove_path(&mut self) {
        self.path = None;
        self.path_style = None;
    }

    fn set_timer(&mut self, _delay_ms: u32) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending_timers.push(id);
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.pending_timers.retain(|t| *t != id);
    }
}

pub fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

/// Every vertex and midpoint marker is live on the surface, nothing else,
/// and the drawn path matches the store.
pub fn assert_surface_consistent(p: &Plotter, s: &MockSurface) {
    let mut expected: Vec<MarkerId> = (0..p.vertex_count())
        .map(|i| p.vertex_marker(i).unwrap())
        .collect();
    expected.extend((0..p.midpoint_count()).map(|i| p.midpoint_marker(i).unwrap()));
    let mut live: Vec<MarkerId> = s.markers.keys().copied().collect();
    expected.sort_unstable();
    live.sort_unstable();
    assert_eq!(expected, live, "surface markers out of sync with overlay");

    if p.is_attached() {
        assert_eq!(
            s.path.as_deref(),
            Some(p.latlngs().as_slice()),
            "drawn path out of sync with vertex store"
        );
    }

    // Exactly one midpoint per adjacent pair, at the arithmetic midpoint.
    let pts = p.latlngs();
    let mids = p.midpoint_latlngs();
    assert_eq!(mids.len(), pts.len().saturating_sub(1));
    for (i, m) in mids.iter().enumerate() {
        assert_eq!(*m, pts[i].midpoint(pts[i + 1]));
    }
}
