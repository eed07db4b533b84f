use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod surface;

pub use surface::JsSurface;

#[wasm_bindgen]
pub struct Plotter {
    pub(crate) inner: plotline::Plotter,
    pub(crate) surface: JsSurface,
}
