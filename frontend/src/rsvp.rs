use std::{pin::pin, rc::Rc};

use futures::future::{self, Either};
use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared_data::{
	EventConfig,
	effects::celebration,
	phone::format_phone,
	rsvp::{
		Attendance, Drink, GuestCount, RsvpDraft, RsvpSubmission, SUBMIT_FAILED_NOTICE,
		SubmitError, ValidationError,
	},
};
use wasm_bindgen::JsCast;
use web_sys::{AbortController, Event, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::confetti::{self, CanvasConfetti};

/// Where the submit button currently is in its life. A second submit while
/// one is in flight gets dropped on the floor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
	#[default]
	Idle,
	Submitting,
	Accepted,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RsvpState {
	pub draft: RsvpDraft,
	pub phase: Phase,
	pub notice: Option<String>,
}

pub enum RsvpMsg {
	Name(String),
	Phone(String),
	Attendance(Attendance),
	Guests(GuestCount),
	ToggleDrink(Drink),
	Rejected(ValidationError),
	Started,
	Resolved(Result<(), SubmitError>),
}

impl Reducible for RsvpState {
	type Action = RsvpMsg;

	fn reduce(self: Rc<Self>, action: RsvpMsg) -> Rc<Self> {
		let mut next = (*self).clone();
		match action {
			RsvpMsg::Name(name) => next.draft.name = name,
			// Masking here keeps the stored draft presentable no matter who
			// dispatched the change
			RsvpMsg::Phone(raw) => next.draft.phone = format_phone(&raw),
			RsvpMsg::Attendance(att) => next.draft.attendance = Some(att),
			RsvpMsg::Guests(count) => next.draft.guests = count,
			RsvpMsg::ToggleDrink(drink) => {
				if !next.draft.drinks.remove(&drink) {
					next.draft.drinks.insert(drink);
				}
			}
			RsvpMsg::Rejected(err) => next.notice = Some(err.message().to_string()),
			RsvpMsg::Started if self.phase == Phase::Submitting => return self,
			RsvpMsg::Started => {
				next.phase = Phase::Submitting;
				next.notice = None;
			}
			RsvpMsg::Resolved(Ok(())) => {
				next.phase = Phase::Accepted;
				next.notice = None;
			}
			RsvpMsg::Resolved(Err(_)) => {
				next.phase = Phase::Idle;
				next.notice = Some(SUBMIT_FAILED_NOTICE.to_string());
			}
		}
		next.into()
	}
}

/// Whatever ends up holding the answers. The real one is a hosted form
/// backend; tests hand in something local.
pub trait FormEndpoint {
	async fn deliver(&self, body: String) -> Result<u16, SubmitError>;
}

pub struct Formspree {
	pub url: String,
	pub timeout_ms: u32,
}

impl FormEndpoint for Formspree {
	async fn deliver(&self, body: String) -> Result<u16, SubmitError> {
		// Requests that outlive the deadline get aborted, not abandoned
		let controller = AbortController::new().ok();
		let signal = controller.as_ref().map(AbortController::signal);

		let request = Request::post(&self.url)
			.header("Accept", "application/json")
			.header("Content-Type", "application/x-www-form-urlencoded")
			.abort_signal(signal.as_ref())
			.body(body)
			.map_err(|e| SubmitError::Network(format!("{e:?}")))?;

		let send = pin!(request.send());
		match future::select(send, TimeoutFuture::new(self.timeout_ms)).await {
			Either::Left((response, _)) => response
				.map(|res| res.status())
				.map_err(|e| SubmitError::Network(format!("{e:?}"))),
			Either::Right(((), _)) => {
				if let Some(controller) = &controller {
					controller.abort();
				}
				Err(SubmitError::TimedOut)
			}
		}
	}
}

/// One attempt, start to finish. Exactly one `deliver` per call; a 2xx from
/// the backend counts as delivered and anything else leaves the form intact
/// for a retry.
pub async fn run_submission<E: FormEndpoint>(
	endpoint: &E,
	submission: &RsvpSubmission,
) -> Result<(), SubmitError> {
	let status = endpoint.deliver(submission.form_body()).await?;
	if (200..300).contains(&status) {
		Ok(())
	} else {
		Err(SubmitError::Status(status))
	}
}

fn event_input(e: &Event) -> Option<HtmlInputElement> {
	e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
}

#[derive(Properties, PartialEq)]
pub struct RsvpProps {
	pub config: Rc<EventConfig>,
}

#[function_component(RsvpBlock)]
pub fn rsvp_block(props: &RsvpProps) -> Html {
	let state = use_reducer_eq(RsvpState::default);

	let on_name = {
		let state = state.clone();
		Callback::from(move |e: Event| {
			if let Some(input) = event_input(&e) {
				state.dispatch(RsvpMsg::Name(input.value()));
			}
		})
	};

	let on_phone = {
		let state = state.clone();
		Callback::from(move |e: InputEvent| {
			if let Some(input) = event_input(&e) {
				let masked = format_phone(&input.value());
				// Written straight back so the field never flashes the raw
				// keystroke before the next render
				input.set_value(&masked);
				state.dispatch(RsvpMsg::Phone(masked));
			}
		})
	};

	let choose = |att: Attendance| {
		let state = state.clone();
		Callback::from(move |_: Event| state.dispatch(RsvpMsg::Attendance(att)))
	};

	let on_guests = {
		let state = state.clone();
		Callback::from(move |e: Event| {
			let select = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok());
			if let Some(select) = select {
				if let Some(count) = GuestCount::from_value(&select.value()) {
					state.dispatch(RsvpMsg::Guests(count));
				}
			}
		})
	};

	let toggle = |drink: Drink| {
		let state = state.clone();
		Callback::from(move |_: Event| state.dispatch(RsvpMsg::ToggleDrink(drink)))
	};

	let on_submit = {
		let state = state.clone();
		let config = props.config.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			if state.phase == Phase::Submitting {
				return;
			}
			let submission = match state.draft.submission() {
				Err(err) => {
					state.dispatch(RsvpMsg::Rejected(err));
					return;
				}
				Ok(submission) => submission,
			};

			state.dispatch(RsvpMsg::Started);
			let endpoint = Formspree {
				url: config.rsvp_endpoint.to_string(),
				timeout_ms: config.submit_timeout_ms,
			};
			let palette = config.palette;
			let handle = state.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let outcome = run_submission(&endpoint, &submission).await;
				match &outcome {
					Ok(()) => confetti::celebrate(CanvasConfetti, celebration(palette)),
					Err(err) => error!(format!("rsvp submission failed: {err}")),
				}
				handle.dispatch(RsvpMsg::Resolved(outcome));
			});
		})
	};

	let submitting = state.phase == Phase::Submitting;

	let questions = if state.draft.attendance == Some(Attendance::Yes) {
		html! {
			<div class="questions">
				<label for="guests">{ "Сколько вас будет?" }</label>
				<select id="guests" onchange={on_guests}>
				{ [GuestCount::One, GuestCount::Two, GuestCount::ThreeOrMore].into_iter().map(|count| html! {
					<option value={count.value()} selected={state.draft.guests == count}>
						{ count.label() }
					</option>
				}).collect::<Html>() }
				</select>

				<span class="group-label">{ "Что предпочитаете из напитков?" }</span>
				<div class="drinks">
				{ Drink::ALL.into_iter().map(|drink| html! {
					<label>
						<input
							type="checkbox"
							checked={state.draft.drinks.contains(&drink)}
							onchange={toggle(drink)}
						/>
						{ drink.label() }
					</label>
				}).collect::<Html>() }
				</div>
			</div>
		}
	} else {
		html! {}
	};

	let notice = state.notice.as_ref().map_or_else(
		|| html! {},
		|text| html! { <div class="form-notice">{ text.clone() }</div> },
	);

	let body = if state.phase == Phase::Accepted {
		html! {
			<div class="rsvp-success">
				<span class="script">{ "Спасибо!" }</span>
				<p>{ "Ваш ответ отправлен. Будем ждать встречи с вами!" }</p>
			</div>
		}
	} else {
		html! {
			<form class="rsvp-form fade-in" onsubmit={on_submit}>
				<label for="name">{ "Ваше имя и фамилия" }</label>
				<input
					id="name"
					type="text"
					placeholder="Иван и Анна Петровы"
					value={state.draft.name.clone()}
					onchange={on_name}
				/>

				<label for="phone">{ "Номер телефона" }</label>
				<input
					id="phone"
					type="tel"
					placeholder="+7 (___) ___-__-__"
					value={state.draft.phone.clone()}
					oninput={on_phone}
				/>

				<span class="group-label">{ "Сможете ли вы прийти?" }</span>
				<div class="attendance">
					<label>
						<input
							type="radio"
							name="attendance"
							checked={state.draft.attendance == Some(Attendance::Yes)}
							onchange={choose(Attendance::Yes)}
						/>
						{ "С радостью приду" }
					</label>
					<label>
						<input
							type="radio"
							name="attendance"
							checked={state.draft.attendance == Some(Attendance::No)}
							onchange={choose(Attendance::No)}
						/>
						{ "К сожалению, не смогу" }
					</label>
				</div>

				{ questions }
				{ notice }

				<button
					type="submit"
					disabled={submitting}
					class={classes!(submitting.then_some("loading"))}
				>
					{ if submitting { "Отправляем..." } else { "Отправить" } }
				</button>
			</form>
		}
	};

	html! {
		<>
			<style>
			{"
			#rsvp {
				text-align: center;
			}
			.rsvp-form {
				display: flex;
				flex-direction: column;
				gap: 14px;
				max-width: 440px;
				margin: 0 auto;
				text-align: left;
			}
			.rsvp-form label, .group-label {
				font-size: 1.05rem;
				color: var(--forest);
			}
			.group-label {
				margin-top: 12px;
			}
			.attendance label, .drinks label {
				display: flex;
				align-items: center;
				gap: 10px;
				font-size: 1.05rem;
				padding: 4px 0;
			}
			.questions {
				display: flex;
				flex-direction: column;
				gap: 14px;
			}
			.form-notice {
				color: var(--wine);
				background-color: rgba(111, 23, 31, 0.08);
				border: 1px solid var(--wine);
				border-radius: 4px;
				padding: 10px 14px;
			}
			.rsvp-form button {
				margin-top: 16px;
				position: relative;
			}
			.rsvp-form button.loading::after {
				content: '';
				display: inline-block;
				width: 12px;
				height: 12px;
				margin-left: 10px;
				border: 2px solid var(--cream);
				border-top-color: transparent;
				border-radius: 50%;
				animation: spin 0.8s linear infinite;
				vertical-align: middle;
			}
			@keyframes spin {
				to { transform: rotate(360deg); }
			}
			.rsvp-success .script {
				font-size: 3rem;
				color: var(--wine);
			}
			.rsvp-success p {
				font-size: 1.2rem;
			}
			"}
			</style>
			<section id="rsvp">
				<h2 class="section-header fade-in">{ "Подтвердите присутствие" }</h2>
				<p class="fade-in">
					{ "Пожалуйста, заполните анкету до 10 мая, чтобы мы успели всё подготовить." }
				</p>
				{ body }
			</section>
		</>
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;

	#[derive(Default)]
	struct RecordingEndpoint {
		status: u16,
		bodies: RefCell<Vec<String>>,
	}

	impl FormEndpoint for RecordingEndpoint {
		async fn deliver(&self, body: String) -> Result<u16, SubmitError> {
			self.bodies.borrow_mut().push(body);
			Ok(self.status)
		}
	}

	struct FailingEndpoint;

	impl FormEndpoint for FailingEndpoint {
		async fn deliver(&self, _: String) -> Result<u16, SubmitError> {
			Err(SubmitError::Network("connection refused".into()))
		}
	}

	fn valid_draft() -> RsvpDraft {
		RsvpDraft {
			name: "Иван Петров".into(),
			phone: "+7 (927) 123-45-67".into(),
			attendance: Some(Attendance::Yes),
			..RsvpDraft::default()
		}
	}

	fn reduce(state: RsvpState, msg: RsvpMsg) -> Rc<RsvpState> {
		Rc::new(state).reduce(msg)
	}

	#[test]
	fn one_delivery_per_successful_attempt() {
		let endpoint = RecordingEndpoint { status: 200, ..RecordingEndpoint::default() };
		let submission = valid_draft().submission().unwrap();

		block_on(run_submission(&endpoint, &submission)).unwrap();

		let bodies = endpoint.bodies.borrow();
		assert_eq!(bodies.len(), 1);
		assert!(bodies[0].contains("attendance=yes"));
		assert!(bodies[0].contains("name="));
		assert!(bodies[0].contains("phone="));
	}

	#[test]
	fn non_2xx_statuses_count_as_failures() {
		for status in [199_u16, 302, 404, 500] {
			let endpoint = RecordingEndpoint { status, ..RecordingEndpoint::default() };
			let submission = valid_draft().submission().unwrap();
			assert_eq!(
				block_on(run_submission(&endpoint, &submission)),
				Err(SubmitError::Status(status)),
			);
		}
	}

	#[test]
	fn every_2xx_status_counts_as_delivered() {
		for status in [200_u16, 201, 204, 299] {
			let endpoint = RecordingEndpoint { status, ..RecordingEndpoint::default() };
			let submission = valid_draft().submission().unwrap();
			assert_eq!(block_on(run_submission(&endpoint, &submission)), Ok(()));
		}
	}

	#[test]
	fn network_errors_pass_through() {
		let submission = valid_draft().submission().unwrap();
		assert_eq!(
			block_on(run_submission(&FailingEndpoint, &submission)),
			Err(SubmitError::Network("connection refused".into())),
		);
	}

	#[test]
	fn starting_clears_the_notice_and_locks_the_form() {
		let rejected = reduce(RsvpState::default(), RsvpMsg::Rejected(ValidationError::EmptyName));
		assert_eq!(rejected.phase, Phase::Idle);
		assert_eq!(rejected.notice.as_deref(), Some("Пожалуйста, введите ваше имя"));

		let started = rejected.reduce(RsvpMsg::Started);
		assert_eq!(started.phase, Phase::Submitting);
		assert_eq!(started.notice, None);
	}

	#[test]
	fn second_submit_while_in_flight_changes_nothing() {
		let busy = reduce(RsvpState::default(), RsvpMsg::Started);
		assert_eq!(busy.phase, Phase::Submitting);

		let again = busy.clone().reduce(RsvpMsg::Started);
		assert_eq!(*again, *busy);
	}

	#[test]
	fn success_moves_to_accepted_for_good() {
		let done = reduce(RsvpState::default(), RsvpMsg::Resolved(Ok(())));
		assert_eq!(done.phase, Phase::Accepted);
		assert_eq!(done.notice, None);
	}

	#[test]
	fn failure_reopens_the_form_with_a_notice() {
		let busy = reduce(RsvpState::default(), RsvpMsg::Started);
		let failed = busy.reduce(RsvpMsg::Resolved(Err(SubmitError::TimedOut)));
		assert_eq!(failed.phase, Phase::Idle);
		assert_eq!(failed.notice.as_deref(), Some(SUBMIT_FAILED_NOTICE));
	}

	#[test]
	fn typed_phone_numbers_are_masked_in_the_draft() {
		let state = reduce(RsvpState::default(), RsvpMsg::Phone("89271234567".into()));
		assert_eq!(state.draft.phone, "+7 (927) 123-45-67");
	}

	#[test]
	fn drinks_toggle_in_and_out() {
		let state = reduce(RsvpState::default(), RsvpMsg::ToggleDrink(Drink::Wine));
		assert!(state.draft.drinks.contains(&Drink::Wine));

		let state = state.reduce(RsvpMsg::ToggleDrink(Drink::Wine));
		assert!(state.draft.drinks.is_empty());
	}
}
