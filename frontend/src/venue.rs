use std::rc::Rc;

use gloo_console::warn;
use shared_data::{EventConfig, VenueSpot};
use wasm_bindgen::{JsCast, prelude::*};
use yew::prelude::*;

use crate::js_obj;

// The maps API arrives through a <script> tag in index.html; from here it's
// just a global we poke at. Only the handful of calls the page makes are
// bound.
#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_namespace = ymaps)]
	fn ready(callback: &js_sys::Function);

	#[wasm_bindgen(js_namespace = ymaps)]
	type Map;

	#[wasm_bindgen(constructor, js_namespace = ymaps)]
	fn new(container: &str, state: &JsValue) -> Map;

	#[wasm_bindgen(method, getter, js_name = geoObjects)]
	fn geo_objects(this: &Map) -> GeoObjects;

	#[wasm_bindgen(method, getter)]
	fn behaviors(this: &Map) -> Behaviors;

	#[wasm_bindgen(method, getter)]
	fn panes(this: &Map) -> Panes;
}

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_namespace = ymaps)]
	type Placemark;

	#[wasm_bindgen(constructor, js_namespace = ymaps)]
	fn new(coords: &JsValue, properties: &JsValue, options: &JsValue) -> Placemark;

	type GeoObjects;

	#[wasm_bindgen(method)]
	fn add(this: &GeoObjects, object: &Placemark);

	type Behaviors;

	#[wasm_bindgen(method)]
	fn disable(this: &Behaviors, behavior: &str);

	type Panes;

	#[wasm_bindgen(method)]
	fn get(this: &Panes, name: &str) -> Pane;

	type Pane;

	#[wasm_bindgen(method, js_name = getElement)]
	fn get_element(this: &Pane) -> web_sys::HtmlElement;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
	/// The maps <script> never loaded, so the global isn't there
	ApiMissing,
	/// Nothing in the DOM to mount the map into
	NoContainer,
}

/// The seam between "we want the venue drawn" and whichever provider draws
/// it. The rest of the page only talks to this trait.
pub trait VenueMap {
	fn render(&self, spot: &VenueSpot) -> Result<(), MapError>;
}

pub struct YandexMap;

impl VenueMap for YandexMap {
	fn render(&self, spot: &VenueSpot) -> Result<(), MapError> {
		let loaded = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ymaps"))
			.map_or(false, |v| !v.is_undefined());
		if !loaded {
			return Err(MapError::ApiMissing);
		}

		let container_there = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(spot.container_id))
			.is_some();
		if !container_there {
			return Err(MapError::NoContainer);
		}

		let spot = spot.clone();
		let on_ready = Closure::once(move || build_map(&spot));
		ready(on_ready.as_ref().unchecked_ref());
		// ymaps holds the callback from here on
		on_ready.forget();
		Ok(())
	}
}

fn build_map(spot: &VenueSpot) {
	let (lat, lon) = spot.coords;
	let center = js_sys::Array::of2(&lat.into(), &lon.into());
	let controls = spot
		.controls
		.iter()
		.copied()
		.map(JsValue::from_str)
		.collect::<js_sys::Array>();

	let map = Map::new(
		spot.container_id,
		&js_obj! {
			"center": &center,
			"zoom": f64::from(spot.zoom),
			"controls": &controls,
		},
	);

	let placemark = Placemark::new(
		&center,
		&js_obj! {
			"balloonContentHeader": spot.balloon_header,
			"balloonContentBody": spot.balloon_body,
			"balloonContentFooter": spot.balloon_footer(),
			"hintContent": spot.hint,
		},
		&js_obj! {
			"preset": spot.icon_preset,
			"iconColor": spot.icon_color,
		},
	);
	map.geo_objects().add(&placemark);

	// Phones fight the page scroll otherwise
	let narrow = web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|w| w.as_f64())
		.is_some_and(|w| w < f64::from(spot.touch_breakpoint));
	if narrow {
		map.behaviors().disable("scrollZoom");
		map.behaviors().disable("drag");
	}

	// Mute the tiles to match the palette
	let _ = map
		.panes()
		.get("ground")
		.get_element()
		.style()
		.set_property("filter", spot.ground_filter);
}

#[derive(Properties, PartialEq)]
pub struct VenueProps {
	pub config: Rc<EventConfig>,
}

#[function_component(Venue)]
pub fn venue(props: &VenueProps) -> Html {
	{
		let spot = props.config.venue.clone();
		use_effect_with((), move |()| {
			match YandexMap.render(&spot) {
				Ok(()) => {}
				Err(MapError::ApiMissing) => {
					warn!("Yandex Maps API is not loaded; leaving the map container empty");
				}
				Err(MapError::NoContainer) => {
					warn!("no #map container to mount the venue map into");
				}
			}
		});
	}

	html! {
		<>
			<style>
			{"
			#venue .venue-layout {
				display: grid;
				grid-template-columns: 1fr 1fr;
				gap: 40px;
				align-items: center;
			}
			#map {
				width: 100%;
				height: 380px;
				border-radius: 8px;
				overflow: hidden;
				background-color: var(--olive);
			}
			.venue-details h3 {
				font-size: 1.8rem;
				margin: 0 0 12px 0;
			}
			.venue-details p {
				font-size: 1.1rem;
				line-height: 1.6;
				margin: 0 0 20px 0;
			}
			.venue-details a {
				color: var(--wine);
			}
			@media (max-width: 768px) {
				#venue .venue-layout {
					grid-template-columns: 1fr;
				}
			}
			"}
			</style>
			<section id="venue">
				<h2 class="section-header fade-in">{ "Место проведения" }</h2>
				<div class="venue-layout">
					<div id="map" class="fade-in"></div>
					<div class="venue-details fade-in">
						<h3>{ props.config.venue.balloon_header }</h3>
						<p>{ "Октябрьская ул., 9, Нижний Новгород" }</p>
						<p>
							{ "Торжество пройдёт в банкетном зале ресторана. \
							   Парковка для гостей находится со стороны набережной." }
						</p>
						<a href={props.config.venue.route_url} target="_blank">
							{ "Построить маршрут" }
						</a>
					</div>
				</div>
			</section>
		</>
	}
}
