use std::rc::Rc;

use chrono::{Datelike, Timelike};
use gloo_timers::callback::Interval;
use shared_data::{EventConfig, countdown::Remaining};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
	pub config: Rc<EventConfig>,
}

// The date is deliberately naive; feeding its fields through js Date means
// every guest counts down to 16:00 on their own wall clock.
fn target_ms(config: &EventConfig) -> f64 {
	let at = config.starts_at;
	js_sys::Date::new_with_year_month_day_hr_min_sec(
		at.year() as u32,
		at.month0() as i32,
		at.day() as i32,
		at.hour() as i32,
		at.minute() as i32,
		at.second() as i32,
	)
	.get_time()
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
	let target = target_ms(&props.config);
	let remaining = use_state(|| Remaining::until(target, js_sys::Date::now()));

	{
		let remaining = remaining.clone();
		use_effect_with((), move |()| {
			let tick = Interval::new(1_000, move || {
				remaining.set(Remaining::until(target, js_sys::Date::now()));
			});
			move || drop(tick)
		});
	}

	let [days, hours, minutes, seconds] = remaining.slots();
	let units = [
		("days", days, "Дней"),
		("hours", hours, "Часов"),
		("minutes", minutes, "Минут"),
		("seconds", seconds, "Секунд"),
	];

	html! {
		<>
			<style>
			{"
			.hero-countdown {
				display: flex;
				justify-content: center;
				gap: clamp(16px, 5vw, 48px);
				margin-top: 40px;
			}
			.count-unit {
				text-align: center;
				min-width: 64px;
			}
			.count-value {
				display: block;
				font-size: clamp(2rem, 6vw, 3.4rem);
				color: var(--cream);
				font-variant-numeric: tabular-nums;
			}
			.count-label {
				font-size: 0.85rem;
				letter-spacing: 0.2em;
				text-transform: uppercase;
				color: var(--tan);
			}
			"}
			</style>
			<div class="hero-countdown">
			{ units.into_iter().map(|(id, value, label)| html! {
				<div class="count-unit">
					<span id={id} class="count-value">{ value }</span>
					<span class="count-label">{ label }</span>
				</div>
			}).collect::<Html>() }
			</div>
		</>
	}
}
