use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const LINKS: [(&str, &str); 5] = [
	("about", "Приглашение"),
	("schedule", "Программа"),
	("venue", "Место"),
	("dresscode", "Дресс-код"),
	("rsvp", "Анкета"),
];

// Smooth-scrolls so the section header lands just under the fixed bar
// instead of behind it.
fn scroll_to_section(id: &str) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Some(target) = document
		.get_element_by_id(id)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};

	let bar_height = document
		.get_element_by_id("nav")
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.map_or(0, |el| el.offset_height());

	let opts = ScrollToOptions::new();
	opts.set_top(f64::from(target.offset_top() - bar_height));
	opts.set_behavior(ScrollBehavior::Smooth);
	if let Some(window) = web_sys::window() {
		window.scroll_to_with_scroll_to_options(&opts);
	}
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
	let scrolled = use_state(|| false);
	let menu_open = use_state(|| false);

	{
		let scrolled = scrolled.clone();
		use_effect_with((), move |()| {
			let Some(window) = web_sys::window() else {
				return;
			};
			let watched = window.clone();
			// Lives as long as the page does, so no teardown
			EventListener::new(&window, "scroll", move |_| {
				scrolled.set(watched.scroll_y().unwrap_or(0.0) > 100.0);
			})
			.forget();
		});
	}

	let toggle_menu = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	let go_to = |id: &'static str| {
		let menu_open = menu_open.clone();
		Callback::from(move |e: MouseEvent| {
			e.prevent_default();
			menu_open.set(false);
			scroll_to_section(id);
		})
	};

	html! {
		<>
			<style>
			{"
			#nav {
				position: fixed;
				top: 0;
				left: 0;
				right: 0;
				z-index: 50;
				display: flex;
				align-items: center;
				justify-content: space-between;
				padding: 18px 28px;
				transition: background-color 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
			}
			#nav.scrolled {
				background-color: rgba(53, 64, 55, 0.95);
				padding: 10px 28px;
				box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
			}
			#nav .monogram {
				font-size: 1.6rem;
				color: var(--cream);
			}
			#nav ul {
				display: flex;
				gap: 28px;
				list-style: none;
				margin: 0;
				padding: 0;
			}
			#nav a {
				color: var(--cream);
				text-decoration: none;
				letter-spacing: 0.1em;
				font-size: 1rem;
			}
			#nav .menu-toggle {
				display: none;
				background: none;
				border: none;
				color: var(--cream);
				font-size: 1.6rem;
				padding: 4px 10px;
			}
			@media (max-width: 768px) {
				#nav .menu-toggle {
					display: block;
				}
				#nav ul {
					position: absolute;
					top: 100%;
					left: 0;
					right: 0;
					flex-direction: column;
					gap: 0;
					background-color: rgba(53, 64, 55, 0.97);
					max-height: 0;
					overflow: hidden;
					transition: max-height 0.3s ease;
				}
				#nav ul.open {
					max-height: 320px;
				}
				#nav li {
					padding: 14px 28px;
				}
			}
			"}
			</style>
			<nav id="nav" class={classes!(scrolled.then_some("scrolled"))}>
				<span class="monogram script">{ "В & М" }</span>
				<button class="menu-toggle" onclick={toggle_menu}>{ "☰" }</button>
				<ul class={classes!(menu_open.then_some("open"))}>
				{ LINKS.into_iter().map(|(id, label)| html! {
					<li>
						<a href={format!("#{id}")} onclick={go_to(id)}>{ label }</a>
					</li>
				}).collect::<Html>() }
				</ul>
			</nav>
		</>
	}
}
