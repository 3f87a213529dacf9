use crate::ChoroplethMap;
use crate::{error, interop};
use natbreaks::{json, Frame, Palette, PriceTable};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Class start values as a Float64Array, or null when the input is rejected.
#[wasm_bindgen]
pub fn compute_breaks(values: &[f64], k: u32) -> JsValue {
    match natbreaks::compute_breaks(values, k as usize) {
        Ok(b) => interop::arr_f64(&b).into(),
        Err(_) => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn compute_breaks_res(values: &[f64], k: u32) -> JsValue {
    match natbreaks::compute_breaks(values, k as usize) {
        Ok(b) => error::ok(interop::arr_f64(&b).into()),
        Err(e) => error::breaks(&e),
    }
}

/// Class index of `value`, or -1 when it falls in no class (NaN included).
#[wasm_bindgen]
pub fn classify(value: f64, breaks: &[f64]) -> i32 {
    natbreaks::classify(Some(value), breaks).map_or(-1, |c| c as i32)
}

#[wasm_bindgen]
pub fn default_palette() -> JsValue {
    let p = Palette::default();
    let colors: Vec<String> = p.colors().iter().map(|c| c.to_hex()).collect();
    let obj = interop::new_obj();
    interop::set_kv(&obj, "classes", &interop::to_js(&colors));
    interop::set_kv(&obj, "noData", &JsValue::from_str(&p.no_data().to_hex()));
    obj.into()
}

fn warn_fallback(frame: &Frame) {
    if let Some(e) = &frame.fallback {
        let period = frame.period.as_deref().unwrap_or("<none>");
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "choropleth: period {} rendered without classes: {}",
            period, e
        )));
    }
}

fn frame(map: &mut ChoroplethMap) -> Option<Frame> {
    let f = map.rs_frame()?;
    warn_fallback(&f);
    Some(f)
}

#[wasm_bindgen]
impl ChoroplethMap {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChoroplethMap {
        ChoroplethMap::rs_new(Palette::default())
    }

    /// Custom `#rrggbb` class colors; the class count is the color count.
    pub fn with_palette(colors: Vec<String>, no_data: &str) -> Option<ChoroplethMap> {
        let refs: Vec<&str> = colors.iter().map(String::as_str).collect();
        Palette::from_hex(&refs, no_data).map(ChoroplethMap::rs_new)
    }

    pub fn classes(&self) -> u32 {
        self.state.classes() as u32
    }

    // Loading
    pub fn load_csv(&mut self, text: &str) -> bool {
        match PriceTable::parse_csv(text) {
            Ok(t) => {
                self.rs_load(t);
                true
            }
            Err(_) => false,
        }
    }
    pub fn load_csv_res(&mut self, text: &str) -> JsValue {
        match PriceTable::parse_csv(text) {
            Ok(t) => error::ok(JsValue::from_f64(self.rs_load(t) as f64)),
            Err(e) => error::table(&e),
        }
    }
    pub fn load_json_res(&mut self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("json_parse", format!("{}", e), None),
        };
        match json::table_from_json(val) {
            Ok(t) => error::ok(JsValue::from_f64(self.rs_load(t) as f64)),
            Err(e) => error::table(&e),
        }
    }
    pub fn to_json(&self) -> JsValue {
        match &self.table {
            Some(t) => interop::to_js(&json::table_to_json(t)),
            None => JsValue::NULL,
        }
    }

    // Period selection
    pub fn periods(&self) -> JsValue {
        interop::to_js(self.state.periods())
    }
    pub fn selected_period(&self) -> Option<String> {
        self.state.selected_period().map(str::to_string)
    }
    pub fn selected_index(&self) -> u32 {
        self.state.selected_index() as u32
    }
    pub fn select(&mut self, idx: u32) -> bool {
        self.state.select(idx as usize)
    }
    pub fn select_res(&mut self, idx: u32) -> JsValue {
        let n = self.state.periods().len();
        if (idx as usize) >= n {
            return error::out_of_range("idx", 0.0, n.saturating_sub(1) as f64, idx as f64);
        }
        error::ok(JsValue::from_bool(self.state.select(idx as usize)))
    }
    pub fn next(&mut self) -> bool {
        self.state.next()
    }
    pub fn prev(&mut self) -> bool {
        self.state.prev()
    }

    // Rendering
    /// `{ period, title, breaks, ranges, legend, fills, fallback }`, or null before a load.
    pub fn render(&mut self) -> JsValue {
        frame(self).map_or(JsValue::NULL, |f| interop::to_js(&f))
    }
    pub fn render_res(&mut self) -> JsValue {
        match frame(self) {
            Some(f) => error::ok(interop::to_js(&f)),
            None => error::no_table(),
        }
    }
    pub fn legend(&mut self) -> JsValue {
        match frame(self) {
            Some(f) => {
                let obj = interop::new_obj();
                interop::set_kv(&obj, "title", &JsValue::from_str(f.title));
                interop::set_kv(&obj, "rows", &interop::to_js(&f.legend));
                obj.into()
            }
            None => JsValue::NULL,
        }
    }
    pub fn color_of(&mut self, entity: &str) -> Option<String> {
        frame(self)?.color_of(entity).map(|c| c.to_hex())
    }

    /// Typed-array view of the current fills, aligned with `entities`.
    pub fn get_fill_data(&mut self) -> JsValue {
        let fr = match frame(self) {
            Some(f) => f,
            None => return JsValue::NULL,
        };
        let entities: Vec<&str> = fr.fills.iter().map(|f| f.entity.as_str()).collect();
        let classes: Vec<i32> = fr.fills.iter().map(|f| f.class.map_or(-1, |c| c as i32)).collect();
        let values: Vec<f64> = fr.fills.iter().map(|f| f.value.unwrap_or(f64::NAN)).collect();
        let rgba: Vec<u8> = fr
            .fills
            .iter()
            .flat_map(|f| [f.color.r, f.color.g, f.color.b, f.color.a])
            .collect();
        let obj = interop::new_obj();
        interop::set_kv(&obj, "entities", &interop::to_js(&entities));
        interop::set_kv(&obj, "classes", &interop::arr_i32(&classes).into());
        interop::set_kv(&obj, "values", &interop::arr_f64(&values).into());
        interop::set_kv(&obj, "rgba", &interop::arr_u8(&rgba).into());
        obj.into()
    }
}
