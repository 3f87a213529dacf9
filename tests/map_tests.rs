use choropleth_wasm::{classify, compute_breaks, default_palette, ChoroplethMap};
use js_sys::{Float64Array, Int32Array, Reflect, Uint8Array};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CSV: &str = "\
RegionID,State,2000,2005
1,California,241350,522000
2,Texas,110000,140000
3,Ohio,105000,
4,Hawaii,310000,560000
5,Iowa,92000,110000
6,Maine,120000,170000
7,Utah,150000,200000
8,Oregon,160000,250000
";

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

#[wasm_bindgen_test]
fn breaks_and_classify_from_js_numbers() {
    let b = compute_breaks(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0], 2);
    let arr: Vec<f64> = Float64Array::new(&b).to_vec();
    assert_eq!(arr, vec![1.0, 100.0]);
    assert_eq!(classify(6.0, &arr), 0);
    assert_eq!(classify(100.0, &arr), 1);
    assert_eq!(classify(f64::NAN, &arr), -1);
    assert_eq!(classify(0.5, &arr), -1);
    assert!(compute_breaks(&[1.0, 2.0], 5).is_null());
}

#[wasm_bindgen_test]
fn palette_defaults() {
    let p = default_palette();
    let classes: Vec<String> = serde_wasm_bindgen::from_value(get(&p, "classes")).unwrap();
    assert_eq!(classes.len(), 6);
    assert_eq!(classes[0], "#ffffcc");
    assert_eq!(get(&p, "noData").as_string().unwrap(), "#ffffff");
}

#[wasm_bindgen_test]
fn step_through_periods() {
    let mut m = ChoroplethMap::with_palette(
        vec!["#eeeeee".into(), "#888888".into(), "#111111".into()],
        "#ffffff",
    )
    .unwrap();
    assert!(m.render().is_null(), "nothing to render before a load");
    assert!(m.load_csv(CSV));
    assert_eq!(m.classes(), 3);
    let periods: Vec<String> = serde_wasm_bindgen::from_value(m.periods()).unwrap();
    assert_eq!(periods, vec!["2000", "2005"]);
    assert_eq!(m.selected_period().as_deref(), Some("2000"));
    assert!(!m.prev());
    assert!(m.next());
    assert!(!m.next());
    assert_eq!(m.selected_index(), 1);
    assert_eq!(m.color_of("Ohio").as_deref(), Some("#ffffff"));
    assert!(m.select(0));
    assert_eq!(m.color_of("Hawaii").as_deref(), Some("#111111"));
}

#[derive(Deserialize)]
struct LegendRow {
    color: String,
    label: String,
}

#[wasm_bindgen_test]
fn frame_and_legend_shapes() {
    let mut m = ChoroplethMap::with_palette(
        vec!["#eeeeee".into(), "#888888".into(), "#111111".into()],
        "#ffffff",
    )
    .unwrap();
    assert!(m.load_csv(CSV));
    let f = m.render();
    assert_eq!(get(&f, "period").as_string().unwrap(), "2000");
    assert!(get(&f, "fallback").is_null());

    let legend = m.legend();
    assert_eq!(get(&legend, "title").as_string().unwrap(), "Price Ranges");
    let rows: Vec<LegendRow> = serde_wasm_bindgen::from_value(get(&legend, "rows")).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].color, "#eeeeee");
    assert!(rows[2].label.ends_with("∞"));

    let data = m.get_fill_data();
    let classes = Int32Array::new(&get(&data, "classes")).to_vec();
    let rgba = Uint8Array::new(&get(&data, "rgba"));
    let values = Float64Array::new(&get(&data, "values"));
    assert_eq!(classes.len(), 8);
    assert_eq!(rgba.length(), 32);
    assert_eq!(values.length(), 8);
    assert!(classes.iter().all(|c| (0..3).contains(c)));
}

#[wasm_bindgen_test]
fn table_json_round_trip() {
    let mut a = ChoroplethMap::new();
    assert!(a.load_csv(CSV));
    let doc = a.to_json();
    let mut b = ChoroplethMap::new();
    let r = b.load_json_res(doc);
    assert_eq!(get(&r, "ok").as_bool(), Some(true));
    assert_eq!(get(&r, "value").as_f64(), Some(8.0));
    assert_eq!(b.selected_period().as_deref(), Some("2000"));
}
