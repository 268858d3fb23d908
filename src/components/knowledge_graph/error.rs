use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures acquiring the browser drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// No global `window` (not running in a browser).
	#[error("no window available")]
	NoWindow,
	/// The canvas refused to hand out a 2D context.
	#[error("canvas has no 2d context")]
	NoContext,
	/// Any other JavaScript exception.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		SurfaceError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
