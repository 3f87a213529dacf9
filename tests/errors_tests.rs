use choropleth_wasm::{compute_breaks_res, ChoroplethMap};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

fn err_field(v: &JsValue, field: &str) -> JsValue {
    let err = Reflect::get(v, &JsValue::from_str("error")).unwrap();
    Reflect::get(&err, &JsValue::from_str(field)).unwrap()
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    err_field(v, "code").as_string().map_or(false, |s| s == code)
}

#[wasm_bindgen_test]
fn breaks_errors_are_typed() {
    let r = compute_breaks_res(&[1.0, 2.0], 5);
    assert!(is_err(&r, "insufficient_data"));
    let data = err_field(&r, "data");
    assert_eq!(Reflect::get(&data, &JsValue::from_str("observations")).unwrap().as_f64(), Some(2.0));
    assert_eq!(Reflect::get(&data, &JsValue::from_str("classes")).unwrap().as_f64(), Some(5.0));

    assert!(is_err(&compute_breaks_res(&[1.0, 2.0, 3.0], 1), "invalid_class_count"));
    let nan = compute_breaks_res(&[1.0, f64::NAN, 3.0], 2);
    assert!(is_err(&nan, "non_finite"));
    let data = err_field(&nan, "data");
    assert_eq!(Reflect::get(&data, &JsValue::from_str("index")).unwrap().as_f64(), Some(1.0));

    assert!(is_ok(&compute_breaks_res(&[5.0, 5.0, 5.0, 5.0], 2)));
}

#[wasm_bindgen_test]
fn map_errors_do_not_mutate_state() {
    let mut m = ChoroplethMap::new();
    assert!(is_err(&m.render_res(), "no_table"));
    assert!(is_err(&m.load_csv_res("id,State\n1,Ohio\n"), "csv_parse"));
    assert!(m.render().is_null(), "failed load must not install a table");

    assert!(is_ok(&m.load_csv_res("id,State,2000,2005\n1,Ohio,1,2\n2,Iowa,3,4\n")));
    assert!(is_err(&m.select_res(2), "out_of_range"));
    assert_eq!(m.selected_index(), 0);
    assert!(is_err(&m.load_json_res(JsValue::from_str("nope")), "json_parse"));
    assert_eq!(m.selected_period().as_deref(), Some("2000"));
}

#[wasm_bindgen_test]
fn too_few_values_render_as_no_data() {
    // two observations cannot fill the default six classes
    let mut m = ChoroplethMap::new();
    assert!(m.load_csv("id,State,2000\n1,Ohio,1\n2,Iowa,3\n"));
    let r = m.render_res();
    assert!(is_ok(&r));
    let frame = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    let fallback = Reflect::get(&frame, &JsValue::from_str("fallback")).unwrap();
    assert_eq!(
        Reflect::get(&fallback, &JsValue::from_str("code")).unwrap().as_string().as_deref(),
        Some("insufficient_data")
    );
    assert_eq!(m.color_of("Ohio").as_deref(), Some("#ffffff"));
    assert!(ChoroplethMap::with_palette(vec!["#000000".into()], "#ffffff").is_none());
}
