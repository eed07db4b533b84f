use plotline::{LatLng, Plotter, PlotterOptions};
use proptest::prelude::*;

mod helpers;
use helpers::{assert_surface_consistent, MockSurface};

#[derive(Clone, Debug)]
enum Op {
    MapClick { lat: i16, lng: i16 },
    ClickVertex { idx: u16 },
    PromoteMidpoint { idx: u16 },
    DragVertex { idx: u16, dlat: i8, dlng: i8 },
    FireTimer,
    Clear,
    Replot,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<i16>(), any::<i16>()).prop_map(|(lat, lng)| Op::MapClick { lat, lng }),
        any::<u16>().prop_map(|idx| Op::ClickVertex { idx }),
        any::<u16>().prop_map(|idx| Op::PromoteMidpoint { idx }),
        (any::<u16>(), any::<i8>(), any::<i8>()).prop_map(|(idx, dlat, dlng)| Op::DragVertex {
            idx,
            dlat,
            dlng,
        }),
        Just(Op::FireTimer),
        Just(Op::Clear),
        Just(Op::Replot),
    ]
}

/// Shadow model: the expected latlng sequence plus whether the click guard
/// is currently suppressing clicks.
#[derive(Default)]
struct ModelState {
    latlngs: Vec<LatLng>,
    suppressed: bool,
}

fn apply_op(p: &mut Plotter, s: &mut MockSurface, state: &mut ModelState, op: Op) {
    match op {
        Op::MapClick { lat, lng } => {
            let at = LatLng::new(lat as f64 * 0.1, lng as f64 * 0.1);
            p.map_click(s, at);
            if !state.suppressed {
                state.latlngs.push(at);
            }
        }
        Op::ClickVertex { idx } => {
            if state.latlngs.is_empty() {
                return;
            }
            let i = (idx as usize) % state.latlngs.len();
            let marker = p.vertex_marker(i).unwrap();
            p.marker_click(s, marker);
            if !state.suppressed {
                state.latlngs.remove(i);
            }
        }
        Op::PromoteMidpoint { idx } => {
            if state.latlngs.len() < 2 {
                return;
            }
            let i = (idx as usize) % (state.latlngs.len() - 1);
            let marker = p.midpoint_marker(i).unwrap();
            p.marker_press(s, marker);
            let mid = state.latlngs[i].midpoint(state.latlngs[i + 1]);
            state.latlngs.insert(i + 1, mid);
        }
        Op::DragVertex { idx, dlat, dlng } => {
            if state.latlngs.is_empty() {
                return;
            }
            let i = (idx as usize) % state.latlngs.len();
            let marker = p.vertex_marker(i).unwrap();
            let to = LatLng::new(
                state.latlngs[i].lat + dlat as f64 * 0.05,
                state.latlngs[i].lng + dlng as f64 * 0.05,
            );
            p.marker_drag_start(s, marker);
            p.marker_drag(s, marker, to);
            p.marker_drag_end(s, marker, to);
            state.latlngs[i] = to;
            state.suppressed = true;
        }
        Op::FireTimer => {
            s.fire_pending_timer(p);
            state.suppressed = false;
        }
        Op::Clear => {
            p.clear(s);
            state.latlngs.clear();
            // Clearing cancels the pending guard clearance outright.
            state.suppressed = false;
        }
        Op::Replot => {
            p.replot(s);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_edits_keep_model_and_surface_in_sync(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let mut s = MockSurface::new();
        let mut p = Plotter::new(vec![], PlotterOptions::default());
        p.attach(&mut s);
        let mut state = ModelState::default();

        for op in ops {
            apply_op(&mut p, &mut s, &mut state, op);
            prop_assert_eq!(p.latlngs(), state.latlngs.clone());
            prop_assert_eq!(p.midpoint_count(), state.latlngs.len().saturating_sub(1));
            assert_surface_consistent(&p, &s);
        }
    }

    #[test]
    fn vertex_count_never_drifts_from_midpoints(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut s = MockSurface::new();
        let mut p = Plotter::new(vec![LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0)], PlotterOptions::default());
        p.attach(&mut s);
        let mut state = ModelState {
            latlngs: vec![LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0)],
            suppressed: false,
        };

        for op in ops {
            apply_op(&mut p, &mut s, &mut state, op);
            prop_assert_eq!(
                p.midpoint_count(),
                p.vertex_count().saturating_sub(1)
            );
        }
    }
}
