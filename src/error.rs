use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring effects into the browser. Missing page elements are
/// not errors; they are skipped where they are looked up.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
}

impl MotionError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        MotionError::Js { context, message }
    }
}
