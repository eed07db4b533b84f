use crate::error;
use crate::surface::JsSurface;
use crate::Plotter;
use plotline::{LatLng, PlotterOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Plotter {
    /// `latlngs` is an array of `[lat, lng]` pairs; `options` is
    /// `{editable, style: {color: {r,g,b,a}, weight}}`, with defaults for
    /// anything missing. `surface_delegate` is the object the overlay draws
    /// through (see `JsSurface`).
    #[wasm_bindgen(constructor)]
    pub fn new(surface_delegate: JsValue, latlngs: JsValue, options: JsValue) -> Plotter {
        let seed: Vec<[f64; 2]> = serde_wasm_bindgen::from_value(latlngs).unwrap_or_default();
        let seed = seed
            .into_iter()
            .map(|[lat, lng]| LatLng::new(lat, lng))
            .collect();
        let options: PlotterOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
        Plotter {
            inner: plotline::Plotter::new(seed, options),
            surface: JsSurface::new(surface_delegate),
        }
    }

    pub fn attach(&mut self) {
        self.inner.attach(&mut self.surface);
        web_sys::console::debug_1(&JsValue::from_str("plotline: attached"));
    }
    pub fn attach_res(&mut self) -> JsValue {
        if self.inner.is_attached() {
            return error::err("already_attached", "overlay is already attached", None);
        }
        self.attach();
        error::ok(JsValue::TRUE)
    }
    pub fn detach(&mut self) {
        if self.inner.is_attached() {
            web_sys::console::debug_1(&JsValue::from_str("plotline: detached"));
        }
        self.inner.detach(&mut self.surface);
    }
    pub fn clear(&mut self) {
        self.inner.clear(&mut self.surface);
    }

    // Input entry points, wired by the host to surface/marker events.
    pub fn map_click(&mut self, lat: f64, lng: f64) {
        self.inner.map_click(&mut self.surface, LatLng::new(lat, lng));
    }
    pub fn map_click_res(&mut self, lat: f64, lng: f64) -> JsValue {
        if !lat.is_finite() {
            return error::non_finite("lat");
        }
        if !lng.is_finite() {
            return error::non_finite("lng");
        }
        let before = self.inner.vertex_count();
        self.map_click(lat, lng);
        error::ok(JsValue::from_bool(self.inner.vertex_count() != before))
    }
    pub fn marker_click(&mut self, id: u32) {
        self.inner.marker_click(&mut self.surface, id);
    }
    pub fn marker_click_res(&mut self, id: u32) -> JsValue {
        if self.inner.marker_index(id).is_none() {
            return error::invalid_id("marker", id);
        }
        let before = self.inner.vertex_count();
        self.marker_click(id);
        error::ok(JsValue::from_bool(self.inner.vertex_count() != before))
    }
    pub fn marker_press(&mut self, id: u32) {
        self.inner.marker_press(&mut self.surface, id);
    }
    pub fn marker_press_res(&mut self, id: u32) -> JsValue {
        let before = self.inner.vertex_count();
        self.marker_press(id);
        error::ok(JsValue::from_bool(self.inner.vertex_count() != before))
    }
    pub fn marker_drag_start(&mut self, id: u32) {
        self.inner.marker_drag_start(&mut self.surface, id);
    }
    pub fn marker_drag(&mut self, id: u32, lat: f64, lng: f64) {
        self.inner
            .marker_drag(&mut self.surface, id, LatLng::new(lat, lng));
    }
    pub fn marker_drag_res(&mut self, id: u32, lat: f64, lng: f64) -> JsValue {
        if !lat.is_finite() {
            return error::non_finite("lat");
        }
        if !lng.is_finite() {
            return error::non_finite("lng");
        }
        self.marker_drag(id, lat, lng);
        error::ok(JsValue::NULL)
    }
    pub fn marker_drag_end(&mut self, id: u32, lat: f64, lng: f64) {
        self.inner
            .marker_drag_end(&mut self.surface, id, LatLng::new(lat, lng));
    }
    pub fn timer_fired(&mut self, id: u32) {
        self.inner.timer_fired(id);
    }

    pub fn replot(&mut self) {
        self.inner.replot(&mut self.surface);
    }

    /// Register a change listener; it receives the event name
    /// ("vertex-added" / "vertex-removed"). Listeners accumulate.
    pub fn on_change(&mut self, cb: js_sys::Function) {
        self.inner.on_change(move |ev| {
            let _ = cb.call1(&JsValue::NULL, &JsValue::from_str(ev.name()));
        });
    }

    pub fn latlngs(&self) -> JsValue {
        let pts: Vec<[f64; 2]> = self
            .inner
            .latlngs()
            .iter()
            .map(|ll| [ll.lat, ll.lng])
            .collect();
        serde_wasm_bindgen::to_value(&pts).unwrap()
    }

    /// Midpoint handle descriptors: `[{marker, left, lat, lng}, ...]`.
    pub fn midpoints(&self) -> JsValue {
        let arr = js_sys::Array::new();
        for h in self.inner.midpoint_handles() {
            let obj = crate::interop::new_obj();
            crate::interop::set_kv(&obj, "marker", &JsValue::from_f64(h.marker as f64));
            crate::interop::set_kv(&obj, "left", &JsValue::from_f64(h.left as f64));
            crate::interop::set_kv(&obj, "lat", &JsValue::from_f64(h.at.lat));
            crate::interop::set_kv(&obj, "lng", &JsValue::from_f64(h.at.lng));
            arr.push(&obj.into());
        }
        arr.into()
    }

    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn midpoint_count(&self) -> u32 {
        self.inner.midpoint_count() as u32
    }
    pub fn vertex_marker(&self, index: u32) -> JsValue {
        match self.inner.vertex_marker(index as usize) {
            Some(id) => JsValue::from_f64(id as f64),
            None => JsValue::NULL,
        }
    }
    pub fn midpoint_marker(&self, index: u32) -> JsValue {
        match self.inner.midpoint_marker(index as usize) {
            Some(id) => JsValue::from_f64(id as f64),
            None => JsValue::NULL,
        }
    }
    pub fn is_editable(&self) -> bool {
        self.inner.is_editable()
    }
    pub fn is_attached(&self) -> bool {
        self.inner.is_attached()
    }
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }
    pub fn geom_version(&self) -> u64 {
        self.inner.geom_version()
    }

    pub fn set_latlngs(&mut self, latlngs: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<Vec<[f64; 2]>>(latlngs) {
            Ok(pts) => {
                let pts: Vec<LatLng> = pts
                    .into_iter()
                    .map(|[lat, lng]| LatLng::new(lat, lng))
                    .collect();
                self.inner.set_latlngs(&mut self.surface, &pts);
                true
            }
            Err(_) => false,
        }
    }

    pub fn to_json(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_json_value()).unwrap()
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => self.inner.from_json_value(&mut self.surface, val),
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value_strict(&mut self.surface, val) {
                Ok(()) => error::ok(JsValue::TRUE),
                Err((code, msg)) => error::err(code, msg, None),
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
}
