use crate::interop::{new_obj, set_kv};
use natbreaks::{BreaksError, TableError};
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn no_table() -> JsValue { err("no_table", "no price table loaded", None) }

pub fn breaks(e: &BreaksError) -> JsValue {
    let d = new_obj();
    match e {
        BreaksError::InsufficientData { observations, classes } => {
            set_kv(&d, "observations", &JsValue::from_f64(*observations as f64));
            set_kv(&d, "classes", &JsValue::from_f64(*classes as f64));
        }
        BreaksError::InvalidClassCount { classes, max } => {
            set_kv(&d, "classes", &JsValue::from_f64(*classes as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
        BreaksError::NonFiniteInput { index } => {
            set_kv(&d, "param", &JsValue::from_str("values"));
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
        }
        BreaksError::TooManyObservations { observations, max } => {
            set_kv(&d, "observations", &JsValue::from_f64(*observations as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

pub fn table(e: &TableError) -> JsValue { err(e.code(), e.to_string(), None) }
