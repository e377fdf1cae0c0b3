use std::rc::Rc;

use shared_data::EventConfig;
use yew::prelude::*;

use crate::countdown::CountdownTimer;

#[derive(Properties, PartialEq)]
pub struct ConfigProps {
	pub config: Rc<EventConfig>,
}

#[function_component(Hero)]
pub fn hero(props: &ConfigProps) -> Html {
	let config = &props.config;
	html! {
		<>
			<style>
			{"
			#hero {
				min-height: 100vh;
				max-width: none;
				margin: 0;
				padding: 0;
				display: flex;
				flex-direction: column;
				align-items: center;
				justify-content: center;
				background:
					linear-gradient(rgba(53, 64, 55, 0.82), rgba(53, 64, 55, 0.82)),
					var(--forest);
				text-align: center;
			}
			.hero-content h1 {
				font-size: clamp(3rem, 10vw, 5.5rem);
				color: var(--cream);
				margin: 0;
				font-weight: 400;
			}
			.hero-content .hero-date {
				font-size: 1.4rem;
				letter-spacing: 0.4em;
				color: var(--tan);
				margin-top: 18px;
			}
			.hero-scroll {
				position: absolute;
				bottom: 28px;
				color: var(--cream);
				font-size: 1.6rem;
				animation: bob 2s ease-in-out infinite;
			}
			@keyframes bob {
				0%, 100% { transform: translateY(0); }
				50% { transform: translateY(10px); }
			}
			"}
			</style>
			<section id="hero">
				<div class="hero-content">
					<h1 class="script">{ format!("{} & {}", config.groom, config.bride) }</h1>
					<div class="hero-date">{ config.date_line() }</div>
				</div>
				<CountdownTimer config={config.clone()} />
				<div class="hero-scroll">{ "⌄" }</div>
			</section>
		</>
	}
}

#[function_component(Invitation)]
pub fn invitation() -> Html {
	html! {
		<>
			<style>
			{"
			#about {
				text-align: center;
			}
			#about p {
				font-size: 1.25rem;
				line-height: 1.8;
				max-width: 640px;
				margin: 0 auto 16px auto;
			}
			"}
			</style>
			<section id="about">
				<h2 class="section-header fade-in">{ "Дорогие гости!" }</h2>
				<p class="fade-in">
					{ "Один день в году мы будем помнить всю жизнь, и мы хотим провести \
					   его рядом с самыми близкими людьми." }
				</p>
				<p class="fade-in">
					{ "С радостью приглашаем вас разделить с нами день нашей свадьбы." }
				</p>
			</section>
		</>
	}
}

struct ScheduleItem {
	time: &'static str,
	title: &'static str,
	details: &'static str,
}

const SCHEDULE: [ScheduleItem; 3] = [
	ScheduleItem {
		time: "15:30",
		title: "Сбор гостей",
		details: "Лёгкие закуски и приветственные напитки у входа в ресторан",
	},
	ScheduleItem {
		time: "16:00",
		title: "Церемония",
		details: "Самый торжественный момент — не опаздывайте, пожалуйста",
	},
	ScheduleItem {
		time: "17:00",
		title: "Банкет",
		details: "Ужин, тосты, танцы и немного сюрпризов до самой ночи",
	},
];

#[function_component(Schedule)]
pub fn schedule() -> Html {
	html! {
		<>
			<style>
			{"
			#schedule .cards {
				display: grid;
				grid-template-columns: repeat(3, 1fr);
				gap: 28px;
			}
			.event-card {
				background-color: #fffdf8;
				border: 1px solid var(--cream);
				border-radius: 8px;
				padding: 32px 24px;
				text-align: center;
			}
			.event-card .time {
				display: block;
				font-size: 2rem;
				color: var(--wine);
			}
			.event-card h3 {
				margin: 12px 0 8px 0;
				font-size: 1.4rem;
			}
			.event-card p {
				margin: 0;
				line-height: 1.5;
				color: var(--olive);
			}
			@media (max-width: 768px) {
				#schedule .cards {
					grid-template-columns: 1fr;
				}
			}
			"}
			</style>
			<section id="schedule">
				<h2 class="section-header fade-in">{ "Программа дня" }</h2>
				<div class="cards">
				{ SCHEDULE.iter().map(|item| html! {
					<div class="event-card fade-in">
						<span class="time">{ item.time }</span>
						<h3>{ item.title }</h3>
						<p>{ item.details }</p>
					</div>
				}).collect::<Html>() }
				</div>
			</section>
		</>
	}
}

#[function_component(DressCode)]
pub fn dress_code(props: &ConfigProps) -> Html {
	html! {
		<>
			<style>
			{"
			#dresscode {
				text-align: center;
			}
			#dresscode p {
				font-size: 1.2rem;
				line-height: 1.7;
				max-width: 620px;
				margin: 0 auto 32px auto;
			}
			.palette {
				display: flex;
				justify-content: center;
				gap: 18px;
				flex-wrap: wrap;
			}
			.swatch {
				width: 72px;
				height: 72px;
				border-radius: 50%;
				border: 2px solid #fffdf8;
				box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
			}
			.swatch-name {
				display: block;
				margin-top: 8px;
				font-size: 0.85rem;
				color: var(--olive);
			}
			"}
			</style>
			<section id="dresscode">
				<h2 class="section-header fade-in">{ "Дресс-код" }</h2>
				<p class="fade-in">
					{ "Мы будем очень рады, если вы поддержите палитру нашего вечера \
					   и выберете наряд в этих оттенках." }
				</p>
				<div class="palette fade-in">
				{ props.config.palette.into_iter().map(|color| html! {
					<div>
						<div class="swatch" style={format!("background-color: {color};")}></div>
						<span class="swatch-name">{ color }</span>
					</div>
				}).collect::<Html>() }
				</div>
			</section>
		</>
	}
}

#[function_component(Wishes)]
pub fn wishes() -> Html {
	html! {
		<>
			<style>
			{"
			#wishes .wish-cards {
				display: grid;
				grid-template-columns: 1fr 1fr;
				gap: 28px;
			}
			.wish-card {
				background-color: #fffdf8;
				border: 1px solid var(--cream);
				border-radius: 8px;
				padding: 28px;
				text-align: center;
			}
			.wish-card h3 {
				margin-top: 0;
			}
			.wish-card p {
				line-height: 1.6;
				margin-bottom: 0;
			}
			@media (max-width: 768px) {
				#wishes .wish-cards {
					grid-template-columns: 1fr;
				}
			}
			"}
			</style>
			<section id="wishes">
				<h2 class="section-header fade-in">{ "Пожелания" }</h2>
				<div class="wish-cards">
					<div class="wish-card fade-in">
						<h3>{ "Цветы" }</h3>
						<p>
							{ "Пожалуйста, не дарите нам букеты: мы не успеем насладиться их \
							   красотой. Лучше подарите бутылку вина для нашей семейной коллекции." }
						</p>
					</div>
					<div class="wish-card fade-in">
						<h3>{ "Подарки" }</h3>
						<p>
							{ "Самый главный подарок — ваше присутствие. А если хочется большего, \
							   мы будем благодарны вкладу в наше свадебное путешествие." }
						</p>
					</div>
				</div>
			</section>
		</>
	}
}

#[function_component(Footer)]
pub fn footer(props: &ConfigProps) -> Html {
	let config = &props.config;
	html! {
		<>
			<style>
			{"
			#footer {
				max-width: none;
				background-color: var(--forest);
				text-align: center;
				padding: 60px 24px;
			}
			#footer .script {
				font-size: 2.4rem;
				color: var(--cream);
			}
			#footer p {
				color: var(--tan);
				letter-spacing: 0.2em;
				margin: 12px 0 0 0;
			}
			"}
			</style>
			<section id="footer">
				<div class="script">{ format!("{} & {}", config.groom, config.bride) }</div>
				<p>{ config.date_line() }</p>
			</section>
		</>
	}
}
