use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared_data::EventConfig;
use yew::prelude::*;

use nav::NavBar;
use rsvp::RsvpBlock;
use sections::{DressCode, Footer, Hero, Invitation, Schedule, Wishes};
use style::SharedStyle;
use venue::Venue;

mod confetti;
mod countdown;
mod nav;
mod reveal;
mod rsvp;
mod sections;
mod style;
mod venue;

// Building one-off js objects with Reflect everywhere gets old fast
#[macro_export]
macro_rules! js_obj {
	($($key:literal: $value:expr),+ $(,)?) => {{
		let obj = js_sys::Object::new();
		$(
			// set only fails on non-objects, and we just made this one
			let _ = js_sys::Reflect::set(
				&obj,
				&wasm_bindgen::JsValue::from_str($key),
				&wasm_bindgen::JsValue::from($value)
			);
		)+
		wasm_bindgen::JsValue::from(obj)
	}};
}

#[derive(Properties, PartialEq)]
struct PreloaderProps {
	hidden: bool,
}

#[function_component(Preloader)]
fn preloader(props: &PreloaderProps) -> Html {
	html! {
		<>
			<style>
			{"
			#preloader {
				position: fixed;
				inset: 0;
				z-index: 100;
				display: flex;
				align-items: center;
				justify-content: center;
				background-color: var(--forest);
				transition: opacity 0.6s ease-out;
			}
			#preloader.hidden {
				opacity: 0;
				pointer-events: none;
			}
			#preloader span {
				font-size: 3rem;
				color: var(--cream);
			}
			"}
			</style>
			<div id="preloader" class={classes!(props.hidden.then_some("hidden"))}>
				<span class="script">{ "В & М" }</span>
			</div>
		</>
	}
}

#[function_component(Invite)]
fn invite() -> Html {
	let config = use_memo((), |()| EventConfig::this_wedding());
	let ready = use_state(|| false);

	{
		let ready = ready.clone();
		use_effect_with((), move |()| {
			// By the time this effect runs the bundle is already alive, so
			// there's no load event worth waiting on. The second of veil is
			// just there to let the fonts and the hero settle.
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(1_000).await;
				ready.set(true);
			});
		});
	}

	{
		let ready = *ready;
		use_effect_with(ready, move |shown| {
			if *shown {
				let body = web_sys::window()
					.and_then(|w| w.document())
					.and_then(|d| d.body());
				if let Some(body) = body {
					let _ = body.class_list().add_1("loaded");
				}
			}
		});
	}

	use_effect_with((), |()| {
		if let Some(window) = web_sys::window() {
			if let Some(document) = window.document() {
				reveal::observe_sections(&document);
				reveal::start_parallax(&window, &document);
			}
		}
	});

	html! {
		<>
			<SharedStyle />
			<Preloader hidden={*ready} />
			<NavBar />
			<Hero config={config.clone()} />
			<Invitation />
			<Schedule />
			<Venue config={config.clone()} />
			<DressCode config={config.clone()} />
			<Wishes />
			<RsvpBlock config={config.clone()} />
			<Footer config={config} />
		</>
	}
}

fn main() {
	yew::Renderer::<Invite>::new().render();
}
