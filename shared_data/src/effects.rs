/// One emission for the confetti layer. Fields the layer should leave at the
/// library default stay `None` rather than guessing a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
	pub particle_count: u32,
	pub spread: f64,
	pub angle: Option<f64>,
	pub origin: Origin,
	pub colors: [&'static str; 5],
}

/// Viewport-relative launch point, 0.0 to 1.0 per axis.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Origin {
	pub x: Option<f64>,
	pub y: Option<f64>,
}

/// The whole success show: one big center pop, then steady trickles from
/// both edges until the clock runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct Celebration {
	pub opening: Burst,
	pub edges: [Burst; 2],
	pub duration_ms: f64,
}

#[must_use]
pub fn celebration(colors: [&'static str; 5]) -> Celebration {
	Celebration {
		opening: Burst {
			particle_count: 100,
			spread: 70.0,
			angle: None,
			origin: Origin { x: None, y: Some(0.6) },
			colors,
		},
		edges: [
			Burst {
				particle_count: 3,
				spread: 55.0,
				angle: Some(60.0),
				origin: Origin { x: Some(0.0), y: None },
				colors,
			},
			Burst {
				particle_count: 3,
				spread: 55.0,
				angle: Some(120.0),
				origin: Origin { x: Some(1.0), y: None },
				colors,
			},
		],
		duration_ms: 3000.0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const COLORS: [&str; 5] = ["#354037", "#767154", "#6F171F", "#BF9B7A", "#D6CCA8"];

	#[test]
	fn opening_pop_is_centered_and_big() {
		let show = celebration(COLORS);
		assert_eq!(show.opening.particle_count, 100);
		assert_eq!(show.opening.spread, 70.0);
		assert_eq!(show.opening.angle, None);
		assert_eq!(show.opening.origin, Origin { x: None, y: Some(0.6) });
		assert_eq!(show.opening.colors, COLORS);
	}

	#[test]
	fn edge_trickles_mirror_each_other() {
		let show = celebration(COLORS);
		let [left, right] = show.edges;

		assert_eq!(left.angle, Some(60.0));
		assert_eq!(left.origin.x, Some(0.0));
		assert_eq!(right.angle, Some(120.0));
		assert_eq!(right.origin.x, Some(1.0));

		for burst in [&left, &right] {
			assert_eq!(burst.particle_count, 3);
			assert_eq!(burst.spread, 55.0);
			assert_eq!(burst.origin.y, None);
			assert_eq!(burst.colors, COLORS);
		}
	}

	#[test]
	fn the_show_runs_three_seconds() {
		assert_eq!(celebration(COLORS).duration_ms, 3000.0);
	}
}
