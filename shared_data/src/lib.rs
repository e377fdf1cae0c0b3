use chrono::{NaiveDate, NaiveDateTime};

pub mod countdown;
pub mod effects;
pub mod phone;
pub mod rsvp;

// Every hardcoded fact about the event lives here so the components only ever
// read it out of props. Swapping the wedding means editing this one function.
#[derive(Clone, Debug, PartialEq)]
pub struct EventConfig {
	pub groom: &'static str,
	pub bride: &'static str,
	pub starts_at: NaiveDateTime,
	pub palette: [&'static str; 5],
	pub rsvp_endpoint: &'static str,
	pub submit_timeout_ms: u32,
	pub venue: VenueSpot,
}

impl EventConfig {
	/// The one event this page exists for.
	#[must_use]
	pub fn this_wedding() -> Self {
		Self {
			groom: "Владимир",
			bride: "Мария",
			// Kept as naive calendar fields so the frontend can interpret it in
			// whatever timezone the guest happens to be looking from.
			starts_at: NaiveDate::from_ymd_opt(2026, 5, 30)
				.and_then(|d| d.and_hms_opt(16, 0, 0))
				.expect("30.05.2026 16:00 is a real calendar time"),
			palette: ["#354037", "#767154", "#6F171F", "#BF9B7A", "#D6CCA8"],
			rsvp_endpoint: "https://formspree.io/f/meokwnra",
			submit_timeout_ms: 15_000,
			venue: VenueSpot {
				container_id: "map",
				coords: (56.321_890, 44.001_827),
				zoom: 16,
				controls: &["zoomControl", "fullscreenControl"],
				balloon_header: "Ресторан «Краса»",
				balloon_body: "Октябрьская ул., 9<br>Нижний Новгород",
				route_url: "https://yandex.ru/maps/?rtext=~56.321890,44.001827",
				hint: "Ресторан «Краса»",
				icon_preset: "islands#redHeartIcon",
				icon_color: "#d4a574",
				ground_filter: "grayscale(80%) brightness(0.6) contrast(1.1)",
				touch_breakpoint: 768,
			},
		}
	}

	#[must_use]
	pub fn date_line(&self) -> String {
		self.starts_at.format("%d.%m.%Y").to_string()
	}
}

/// Everything the map widget needs to draw the venue, with no opinion about
/// which map provider actually does the drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct VenueSpot {
	pub container_id: &'static str,
	pub coords: (f64, f64),
	pub zoom: u8,
	pub controls: &'static [&'static str],
	pub balloon_header: &'static str,
	pub balloon_body: &'static str,
	pub route_url: &'static str,
	pub hint: &'static str,
	pub icon_preset: &'static str,
	pub icon_color: &'static str,
	pub ground_filter: &'static str,
	pub touch_breakpoint: u32,
}

impl VenueSpot {
	#[must_use]
	pub fn balloon_footer(&self) -> String {
		format!("<a href=\"{}\" target=\"_blank\">Построить маршрут</a>", self.route_url)
	}
}

pub static BASE_STYLE: &str = r#"
@font-face {
	font-family: "serif fallback";
	src: local("serif");
	size-adjust: 105%;
}
* {
	--forest: #354037;
	--olive: #767154;
	--wine: #6F171F;
	--tan: #BF9B7A;
	--cream: #D6CCA8;
	--paper: #f7f2e9;
	--ink: #2e2b24;
	font-family: "Cormorant Garamond", "serif fallback";
	color: var(--ink);
	box-sizing: border-box;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	background-color: var(--paper);
	overflow-x: hidden;
}
h1, h2, h3 {
	font-weight: 500;
	color: var(--forest);
}
.script {
	font-family: "Great Vibes", cursive;
	font-weight: 400;
}
section {
	padding: 90px 24px;
	max-width: 1000px;
	margin: 0 auto;
}
.section-header {
	text-align: center;
	font-size: 2.2rem;
	margin-bottom: 48px;
	letter-spacing: 0.06em;
}
input, select {
	background-color: #fffdf8;
	border: 1px solid var(--tan);
	border-radius: 4px;
	padding: 10px 12px;
	font-size: 1.05rem;
}
button {
	background-color: var(--wine);
	color: var(--cream);
	border: 1px solid var(--wine);
	border-radius: 4px;
	padding: 12px 32px;
	font-size: 1.05rem;
	letter-spacing: 0.08em;
	cursor: pointer;
}
button:disabled {
	opacity: 0.7;
	cursor: wait;
}
.fade-in {
	opacity: 0;
	transform: translateY(28px);
	transition: opacity 0.7s ease-out, transform 0.7s ease-out;
}
.fade-in.visible {
	opacity: 1;
	transform: none;
}
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn date_line_is_day_month_year() {
		assert_eq!(EventConfig::this_wedding().date_line(), "30.05.2026");
	}

	#[test]
	fn balloon_footer_links_the_route() {
		let venue = EventConfig::this_wedding().venue;
		assert_eq!(
			venue.balloon_footer(),
			"<a href=\"https://yandex.ru/maps/?rtext=~56.321890,44.001827\" target=\"_blank\">Построить маршрут</a>"
		);
	}
}
