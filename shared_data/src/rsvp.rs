use std::{collections::BTreeSet, fmt};

/// Shown under the form when a submission fails for any technical reason.
/// Validation problems get their own, more specific prompts.
pub const SUBMIT_FAILED_NOTICE: &str =
	"Произошла ошибка при отправке. Пожалуйста, попробуйте ещё раз или свяжитесь с нами напрямую.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Attendance {
	#[serde(rename = "yes")]
	Yes,
	#[serde(rename = "no")]
	No,
}

impl Attendance {
	#[must_use]
	pub fn from_value(value: &str) -> Option<Self> {
		match value {
			"yes" => Some(Self::Yes),
			"no" => Some(Self::No),
			_ => None,
		}
	}

	#[must_use]
	pub const fn value(self) -> &'static str {
		match self {
			Self::Yes => "yes",
			Self::No => "no",
		}
	}

	#[must_use]
	pub const fn coming(self) -> bool {
		matches!(self, Self::Yes)
	}
}

// The "3+" option exists because the venue only wants a heads-up about big
// parties, not an exact headcount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GuestCount {
	#[default]
	One,
	Two,
	ThreeOrMore,
}

impl GuestCount {
	#[must_use]
	pub fn from_value(value: &str) -> Option<Self> {
		match value {
			"1" => Some(Self::One),
			"2" => Some(Self::Two),
			"3+" => Some(Self::ThreeOrMore),
			_ => None,
		}
	}

	#[must_use]
	pub const fn value(self) -> &'static str {
		match self {
			Self::One => "1",
			Self::Two => "2",
			Self::ThreeOrMore => "3+",
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::One => "Только я",
			Self::Two => "Нас двое",
			Self::ThreeOrMore => "Трое и больше",
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Drink {
	Wine,
	Champagne,
	Spirits,
	NonAlcoholic,
}

impl Drink {
	pub const ALL: [Self; 4] = [Self::Wine, Self::Champagne, Self::Spirits, Self::NonAlcoholic];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Wine => "Вино",
			Self::Champagne => "Шампанское",
			Self::Spirits => "Крепкие напитки",
			Self::NonAlcoholic => "Без алкоголя",
		}
	}
}

/// What the guest has typed so far. Nothing in here is trusted until
/// [`RsvpDraft::submission`] has had its say.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RsvpDraft {
	pub name: String,
	pub phone: String,
	pub attendance: Option<Attendance>,
	pub guests: GuestCount,
	pub drinks: BTreeSet<Drink>,
}

impl RsvpDraft {
	/// Checks run in the same order the fields appear on the page, and the
	/// first failure is the only one reported per attempt.
	pub fn submission(&self) -> Result<RsvpSubmission, ValidationError> {
		if self.name.trim().is_empty() {
			return Err(ValidationError::EmptyName);
		}
		if self.phone.trim().is_empty() {
			return Err(ValidationError::EmptyPhone);
		}
		let Some(attendance) = self.attendance else {
			return Err(ValidationError::NoAttendance);
		};

		// The extra questions only make sense for guests who are coming
		let (guests, drinks) = if attendance.coming() {
			let drinks = (!self.drinks.is_empty()).then(|| {
				self.drinks
					.iter()
					.map(|d| d.label())
					.collect::<Vec<_>>()
					.join(", ")
			});
			(Some(self.guests.value().to_string()), drinks)
		} else {
			(None, None)
		};

		Ok(RsvpSubmission {
			name: self.name.trim().to_string(),
			phone: self.phone.trim().to_string(),
			attendance,
			guests,
			drinks,
		})
	}
}

/// A draft that passed validation, ready to be urlencoded at the form
/// backend.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RsvpSubmission {
	pub name: String,
	pub phone: String,
	pub attendance: Attendance,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guests: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub drinks: Option<String>,
}

impl RsvpSubmission {
	#[must_use]
	pub fn form_body(&self) -> String {
		// Plain strings and unit variants can't actually fail to encode, so
		// we can safely unwrap here
		serde_urlencoded::to_string(self).unwrap()
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
	EmptyName,
	EmptyPhone,
	NoAttendance,
}

impl ValidationError {
	/// The prompt shown under the form, one per attempt.
	#[must_use]
	pub const fn message(self) -> &'static str {
		match self {
			Self::EmptyName => "Пожалуйста, введите ваше имя",
			Self::EmptyPhone => "Пожалуйста, введите номер телефона",
			Self::NoAttendance => "Пожалуйста, укажите, сможете ли вы прийти",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
	/// The request never got an answer (network failure, CORS, and friends)
	Network(String),
	/// The form backend answered with something other than 2xx
	Status(u16),
	/// The deadline ran out before the backend said anything
	TimedOut,
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(e) => write!(f, "request failed: {e}"),
			Self::Status(code) => write!(f, "form backend returned status {code}"),
			Self::TimedOut => write!(f, "request timed out"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn full_draft() -> RsvpDraft {
		RsvpDraft {
			name: "Иван Петров".into(),
			phone: "+7 (927) 123-45-67".into(),
			attendance: Some(Attendance::Yes),
			guests: GuestCount::Two,
			drinks: BTreeSet::from([Drink::Wine, Drink::Champagne]),
		}
	}

	#[test]
	fn empty_name_is_reported_first() {
		let draft = RsvpDraft::default();
		assert_eq!(draft.submission(), Err(ValidationError::EmptyName));

		// Whitespace doesn't count as a name either
		let draft = RsvpDraft { name: "   ".into(), ..full_draft() };
		assert_eq!(draft.submission(), Err(ValidationError::EmptyName));
	}

	#[test]
	fn phone_is_checked_second() {
		let draft = RsvpDraft { phone: String::new(), ..full_draft() };
		assert_eq!(draft.submission(), Err(ValidationError::EmptyPhone));
	}

	#[test]
	fn attendance_is_checked_last() {
		let draft = RsvpDraft { attendance: None, ..full_draft() };
		assert_eq!(draft.submission(), Err(ValidationError::NoAttendance));
	}

	#[test]
	fn valid_draft_becomes_a_submission() {
		let sub = full_draft().submission().unwrap();
		assert_eq!(sub.name, "Иван Петров");
		assert_eq!(sub.attendance, Attendance::Yes);
		assert_eq!(sub.guests.as_deref(), Some("2"));
		assert_eq!(sub.drinks.as_deref(), Some("Вино, Шампанское"));
	}

	#[test]
	fn name_and_phone_are_trimmed() {
		let draft = RsvpDraft {
			name: "  Анна  ".into(),
			phone: " +7 (900) 000-00-00 ".into(),
			..full_draft()
		};
		let sub = draft.submission().unwrap();
		assert_eq!(sub.name, "Анна");
		assert_eq!(sub.phone, "+7 (900) 000-00-00");
	}

	#[test]
	fn declining_guests_skip_the_extra_questions() {
		let draft = RsvpDraft { attendance: Some(Attendance::No), ..full_draft() };
		let sub = draft.submission().unwrap();
		assert_eq!(sub.guests, None);
		assert_eq!(sub.drinks, None);
		assert!(!sub.form_body().contains("guests="));
		assert!(!sub.form_body().contains("drinks="));
	}

	#[test]
	fn form_body_is_urlencoded() {
		let sub = RsvpSubmission {
			name: "Ivan Petrov".into(),
			phone: "+7 (900) 000-00-00".into(),
			attendance: Attendance::Yes,
			guests: Some("1".into()),
			drinks: None,
		};
		assert_eq!(
			sub.form_body(),
			"name=Ivan+Petrov&phone=%2B7+%28900%29+000-00-00&attendance=yes&guests=1"
		);
	}

	#[test]
	fn drink_labels_join_in_declaration_order() {
		let draft = RsvpDraft {
			drinks: BTreeSet::from([Drink::NonAlcoholic, Drink::Wine]),
			..full_draft()
		};
		let sub = draft.submission().unwrap();
		assert_eq!(sub.drinks.as_deref(), Some("Вино, Без алкоголя"));
	}

	#[test]
	fn attendance_values_round_trip() {
		for att in [Attendance::Yes, Attendance::No] {
			assert_eq!(Attendance::from_value(att.value()), Some(att));
		}
		assert_eq!(Attendance::from_value("maybe"), None);
	}

	#[test]
	fn guest_count_values_round_trip() {
		for count in [GuestCount::One, GuestCount::Two, GuestCount::ThreeOrMore] {
			assert_eq!(GuestCount::from_value(count.value()), Some(count));
		}
		assert_eq!(GuestCount::from_value("4"), None);
	}
}
