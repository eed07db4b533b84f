use crate::surface::Surface;
use crate::Plotter;

/// Rebuild the rendered path from the store's current ordered positions and
/// regenerate the midpoint set. Clear-then-append, no incremental diffing;
/// vertex counts are small. Idempotent: with no intervening mutation a
/// second call produces an identical visual result.
pub(crate) fn replot_impl<S: Surface>(p: &mut Plotter, surface: &mut S) {
    surface.set_path(&p.vertices.positions());
    p.midpoints
        .regenerate(&p.vertices, surface, p.options.editable);
}
