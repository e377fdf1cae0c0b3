const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until the ceremony, already broken into the four numbers the
/// hero section displays. Once the moment passes it pins to all zeroes
/// instead of counting back up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Remaining {
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
}

impl Remaining {
	/// Both stamps are js-style milliseconds since the epoch, which is why
	/// they arrive as f64 even though the math is integral.
	#[must_use]
	pub fn until(target_ms: f64, now_ms: f64) -> Self {
		let distance = (target_ms - now_ms) as i64;
		if distance < 0 {
			return Self::zero();
		}
		Self {
			days: distance / MS_PER_DAY,
			hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
			minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
			seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
		}
	}

	#[must_use]
	pub const fn zero() -> Self {
		Self { days: 0, hours: 0, minutes: 0, seconds: 0 }
	}

	/// Display strings in order: days as-is, everything else padded to two
	/// digits so the layout never jumps.
	#[must_use]
	pub fn slots(&self) -> [String; 4] {
		[
			self.days.to_string(),
			format!("{:02}", self.hours),
			format!("{:02}", self.minutes),
			format!("{:02}", self.seconds),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn total_ms(r: Remaining) -> i64 {
		r.days * MS_PER_DAY + r.hours * MS_PER_HOUR + r.minutes * MS_PER_MINUTE + r.seconds * MS_PER_SECOND
	}

	#[test]
	fn fields_stay_in_range_and_reconstruct() {
		let distances = [
			0_i64,
			1,
			999,
			1000,
			59_999,
			60_000,
			3_599_999,
			3_600_000,
			86_399_999,
			86_400_000,
			86_400_001,
			123_456_789,
			31_536_000_000,
		];
		for distance in distances {
			let now = 1_750_000_000_000_i64;
			let r = Remaining::until((now + distance) as f64, now as f64);
			assert!(r.days >= 0, "negative days for {distance}");
			assert!((0..24).contains(&r.hours), "hours out of range for {distance}");
			assert!((0..60).contains(&r.minutes), "minutes out of range for {distance}");
			assert!((0..60).contains(&r.seconds), "seconds out of range for {distance}");
			let rebuilt = total_ms(r);
			assert!(
				(distance - rebuilt).abs() < 1000,
				"lost more than a second: {distance} vs {rebuilt}"
			);
		}
	}

	#[test]
	fn past_targets_pin_to_zero() {
		let target = 1_750_000_000_000_f64;
		for late_by in [1.0, 1000.0, 86_400_000.0 * 400.0] {
			let r = Remaining::until(target, target + late_by);
			assert_eq!(r, Remaining::zero());
			assert_eq!(r.slots(), ["0", "00", "00", "00"]);
		}
	}

	#[test]
	fn exact_moment_is_zero_not_negative() {
		let target = 1_750_000_000_000_f64;
		assert_eq!(Remaining::until(target, target), Remaining::zero());
	}

	#[test]
	fn slots_pad_everything_but_days() {
		let r = Remaining { days: 7, hours: 3, minutes: 0, seconds: 9 };
		assert_eq!(r.slots(), ["7", "03", "00", "09"]);

		let r = Remaining { days: 280, hours: 23, minutes: 59, seconds: 59 };
		assert_eq!(r.slots(), ["280", "23", "59", "59"]);
	}
}
