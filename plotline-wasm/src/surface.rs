use js_sys::{Array, Function, Reflect};
use plotline::{LatLng, MarkerId, MarkerStyle, PathStyle, Surface, TimerId};
use wasm_bindgen::{JsCast, JsValue};

/// Adapter from a JS surface delegate to the core `Surface` trait.
///
/// The delegate is a plain object exposing
/// `addMarker(lat, lng, opacity, draggable) -> id`, `removeMarker(id)`,
/// `setMarkerOpacity(id, opacity)`, `addPath({color, weight})`,
/// `setPath(Float64Array of lat/lng pairs)`, `removePath()`,
/// `setTimer(ms) -> id` and `clearTimer(id)`. Missing methods are treated
/// as no-ops, matching the permissive JS side of this boundary.
pub struct JsSurface {
    delegate: JsValue,
}

impl JsSurface {
    pub fn new(delegate: JsValue) -> JsSurface {
        JsSurface { delegate }
    }

    fn call(&self, name: &str, args: &Array) -> JsValue {
        let f =
            Reflect::get(&self.delegate, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);
        match f.dyn_into::<Function>() {
            Ok(f) => f.apply(&self.delegate, args).unwrap_or(JsValue::UNDEFINED),
            Err(_) => JsValue::UNDEFINED,
        }
    }

    fn id_of(v: JsValue) -> u32 {
        v.as_f64().unwrap_or(0.0) as u32
    }
}

impl Surface for JsSurface {
    fn add_marker(&mut self, at: LatLng, style: MarkerStyle) -> MarkerId {
        let args = Array::of4(
            &JsValue::from_f64(at.lat),
            &JsValue::from_f64(at.lng),
            &JsValue::from_f64(style.opacity as f64),
            &JsValue::from_bool(style.draggable),
        );
        Self::id_of(self.call("addMarker", &args))
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.call("removeMarker", &Array::of1(&JsValue::from_f64(id as f64)));
    }

    fn set_marker_opacity(&mut self, id: MarkerId, opacity: f32) {
        self.call(
            "setMarkerOpacity",
            &Array::of2(&JsValue::from_f64(id as f64), &JsValue::from_f64(opacity as f64)),
        );
    }

    fn add_path(&mut self, style: PathStyle) {
        let v = serde_wasm_bindgen::to_value(&style).unwrap_or(JsValue::NULL);
        self.call("addPath", &Array::of1(&v));
    }

    fn set_path(&mut self, points: &[LatLng]) {
        let mut flat = Vec::with_capacity(points.len() * 2);
        for p in points {
            flat.push(p.lat);
            flat.push(p.lng);
        }
        self.call("setPath", &Array::of1(&crate::interop::arr_f64(&flat).into()));
    }

    fn remove_path(&mut self) {
        self.call("removePath", &Array::new());
    }

    fn set_timer(&mut self, delay_ms: u32) -> TimerId {
        Self::id_of(self.call("setTimer", &Array::of1(&JsValue::from_f64(delay_ms as f64))))
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.call("clearTimer", &Array::of1(&JsValue::from_f64(id as f64)));
    }
}
