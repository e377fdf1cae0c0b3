/// Rewrites whatever is sitting in the phone field into the
/// `+7 (XXX) XXX-XX-XX` mask, as far as the typed digits allow.
///
/// Digits past the eleventh are dropped, a leading 8 becomes the country
/// code, and input with no digits at all is handed back untouched. Running
/// the result through again changes nothing, which is what lets the input
/// handler call this on every keystroke.
#[must_use]
pub fn format_phone(raw: &str) -> String {
	let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
	if digits.is_empty() {
		return raw.to_string();
	}

	if digits.starts_with('8') {
		digits.replace_range(0..1, "7");
	}
	if !digits.starts_with('7') {
		digits.insert(0, '7');
	}

	// All ascii, so byte slicing below is safe
	let len = digits.len();
	let mut out = String::with_capacity(18);
	out.push_str("+7");
	if len > 1 {
		out.push_str(" (");
		out.push_str(&digits[1..len.min(4)]);
	}
	if len > 4 {
		out.push_str(") ");
		out.push_str(&digits[4..len.min(7)]);
	}
	if len > 7 {
		out.push('-');
		out.push_str(&digits[7..len.min(9)]);
	}
	if len > 9 {
		out.push('-');
		out.push_str(&digits[9..len.min(11)]);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_numbers_get_the_whole_mask() {
		assert_eq!(format_phone("89271234567"), "+7 (927) 123-45-67");
		assert_eq!(format_phone("79271234567"), "+7 (927) 123-45-67");
		assert_eq!(format_phone("9271234567"), "+7 (927) 123-45-67");
	}

	#[test]
	fn partial_numbers_get_partial_masks() {
		assert_eq!(format_phone("8"), "+7");
		assert_eq!(format_phone("89"), "+7 (9");
		assert_eq!(format_phone("8927"), "+7 (927");
		assert_eq!(format_phone("89271"), "+7 (927) 1");
		assert_eq!(format_phone("8927123"), "+7 (927) 123");
		assert_eq!(format_phone("89271234"), "+7 (927) 123-4");
		assert_eq!(format_phone("892712345"), "+7 (927) 123-45");
		assert_eq!(format_phone("8927123456"), "+7 (927) 123-45-6");
	}

	#[test]
	fn digitless_input_is_left_alone() {
		assert_eq!(format_phone(""), "");
		assert_eq!(format_phone("abc"), "abc");
		assert_eq!(format_phone("+ -()"), "+ -()");
	}

	#[test]
	fn overflow_digits_are_dropped() {
		assert_eq!(format_phone("8927123456789"), "+7 (927) 123-45-67");
		assert_eq!(format_phone("+7 (927) 123-45-67999"), "+7 (927) 123-45-67");
	}

	#[test]
	fn stray_separators_are_ignored() {
		assert_eq!(format_phone("8 (927) 123 45 67"), "+7 (927) 123-45-67");
		assert_eq!(format_phone("tel: 9271234567"), "+7 (927) 123-45-67");
	}

	#[test]
	fn formatting_is_idempotent() {
		let inputs = [
			"",
			"abc",
			"8",
			"89",
			"8927",
			"89271",
			"89271234567",
			"+7 (927) 123-45-67",
			"7999",
			"8927123456789999",
			"12345",
		];
		for input in inputs {
			let once = format_phone(input);
			assert_eq!(format_phone(&once), once, "not idempotent for {input:?}");
		}
	}
}
