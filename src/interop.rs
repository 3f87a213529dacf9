use js_sys::{Float64Array, Int32Array, Object, Reflect, Uint8Array};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_i32(slice: &[i32]) -> Int32Array {
    let arr = Int32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_u8(slice: &[u8]) -> Uint8Array {
    let arr = Uint8Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

// Plain objects instead of ES Maps, so nested serde_json values read naturally in JS.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}
