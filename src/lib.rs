use natbreaks::{BreaksCache, Frame, MapState, Palette, PriceTable};
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{classify, compute_breaks, compute_breaks_res, default_palette, set_panic_hook};

/// Price table plus the selected period; the browser side only wires
/// widgets to these calls and paints what `render` returns.
#[wasm_bindgen]
pub struct ChoroplethMap {
    pub(crate) table: Option<PriceTable>,
    pub(crate) state: MapState,
    pub(crate) cache: BreaksCache,
}

impl ChoroplethMap {
    pub fn rs_new(palette: Palette) -> ChoroplethMap {
        ChoroplethMap { table: None, state: MapState::new(Vec::new(), palette), cache: BreaksCache::new() }
    }

    pub(crate) fn rs_load(&mut self, table: PriceTable) -> usize {
        self.state = MapState::for_table(&table, self.state.palette().clone());
        self.cache.clear();
        let n = table.len();
        self.table = Some(table);
        n
    }

    pub(crate) fn rs_frame(&mut self) -> Option<Frame> {
        let table = self.table.as_ref()?;
        Some(natbreaks::render_cached(table, &self.state, &mut self.cache))
    }
}
