use gloo_events::EventListener;
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{
	Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
	Window,
};

// Everything tagged .fade-in starts translated down and transparent (see
// BASE_STYLE); crossing the ten percent line earns it the .visible class.
// Entries that scroll away keep it, the reveal only ever runs forward.
pub fn observe_sections(document: &Document) {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, _: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let _ = entry.target().class_list().add_1("visible");
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&0.1.into());

	let Ok(observer) =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
	else {
		return;
	};
	// The observer outlives us either way
	callback.forget();

	let Ok(nodes) = document.query_selector_all(".fade-in") else {
		return;
	};
	for i in 0..nodes.length() {
		if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&el);
		}
	}
}

// Classic hero parallax: the content drifts down at a third of the scroll
// speed while fading out over the first 80% of the viewport.
pub fn start_parallax(window: &Window, document: &Document) {
	let win = window.clone();
	let doc = document.clone();
	EventListener::new(window, "scroll", move |_| {
		let scrolled = win.scroll_y().unwrap_or(0.0);
		let viewport = win
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(0.0);
		if viewport <= 0.0 || scrolled >= viewport {
			return;
		}

		let opacity = (1.0 - scrolled / (viewport * 0.8)).max(0.0);
		let shift = scrolled * 0.3;
		for selector in [".hero-content", ".hero-countdown"] {
			let Ok(Some(el)) = doc.query_selector(selector) else {
				continue;
			};
			let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
				continue;
			};
			let style = el.style();
			let _ = style.set_property("opacity", &opacity.to_string());
			let _ = style.set_property("transform", &format!("translateY({shift}px)"));
		}
	})
	.forget();
}
