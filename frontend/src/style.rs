use yew::prelude::*;

// One <style> at the root; the per-section blocks live next to their
// components.
#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<style>
			{ shared_data::BASE_STYLE }
			{ "body:not(.loaded) { overflow: hidden; }" }
		</style>
	}
}
