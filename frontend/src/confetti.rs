use std::{cell::RefCell, rc::Rc};

use shared_data::effects::{Burst, Celebration};
use wasm_bindgen::{JsCast, prelude::*};

use crate::js_obj;

#[wasm_bindgen]
extern "C" {
	// canvas-confetti's global entry point, loaded in index.html
	#[wasm_bindgen(js_name = confetti)]
	fn confetti_js(options: &JsValue);
}

/// Purely decorative, so implementations are allowed to do nothing at all.
/// That is also exactly what makes the submit flow testable off-browser.
pub trait EffectLayer {
	fn burst(&self, burst: &Burst);
}

pub struct CanvasConfetti;

impl EffectLayer for CanvasConfetti {
	fn burst(&self, burst: &Burst) {
		// If the cdn script got blocked the page just goes without sparkle
		let loaded = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("confetti"))
			.map_or(false, |v| !v.is_undefined());
		if !loaded {
			return;
		}
		confetti_js(&options_for(burst));
	}
}

fn options_for(burst: &Burst) -> JsValue {
	let colors = burst
		.colors
		.iter()
		.copied()
		.map(JsValue::from_str)
		.collect::<js_sys::Array>();
	let origin = js_sys::Object::new();
	if let Some(x) = burst.origin.x {
		let _ = js_sys::Reflect::set(&origin, &JsValue::from_str("x"), &x.into());
	}
	if let Some(y) = burst.origin.y {
		let _ = js_sys::Reflect::set(&origin, &JsValue::from_str("y"), &y.into());
	}

	let options = js_obj! {
		"particleCount": f64::from(burst.particle_count),
		"spread": burst.spread,
		"origin": &origin,
		"colors": &colors,
	};
	if let Some(angle) = burst.angle {
		let _ = js_sys::Reflect::set(&options, &JsValue::from_str("angle"), &angle.into());
	}
	options
}

/// Plays the whole show: the opening pop and one edge pair right away, then
/// an edge pair per animation frame until the duration is spent.
pub fn celebrate<E: EffectLayer + 'static>(layer: E, show: Celebration) {
	layer.burst(&show.opening);

	let end = js_sys::Date::now() + show.duration_ms;
	let [left, right] = show.edges;
	layer.burst(&left);
	layer.burst(&right);

	// The usual self-referential requestAnimationFrame dance. The closure
	// keeps itself alive through the Rc and simply stops being scheduled
	// once the clock runs out.
	let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let scheduled = frame.clone();
	*frame.borrow_mut() = Some(Closure::new(move || {
		layer.burst(&left);
		layer.burst(&right);
		if js_sys::Date::now() < end {
			if let Some(cb) = scheduled.borrow().as_ref() {
				request_frame(cb);
			}
		}
	}));

	if js_sys::Date::now() < end {
		if let Some(cb) = frame.borrow().as_ref() {
			request_frame(cb);
		}
	}
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
	if let Some(window) = web_sys::window() {
		let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
	}
}
