use crate::{context::RenderContext, markup::Element};
use vrot_deps::{
	chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc},
	chrono_tz::Tz,
};

pub fn localtime<T: TimeZone>(context: &RenderContext, date: Option<&DateTime<T>>) -> String {
	let date = match date {
		Some(date) => date.with_timezone(&context.timezone),
		None => return String::new(),
	};
	Element::new("time")
		.attribute("datetime", date.to_rfc3339_opts(SecondsFormat::AutoSi, false))
		.attribute("class", "local-time")
		.child(format_date_time(&date))
		.render_to_string()
}

/// Anything older than two days falls back to [`localtime`].
pub fn humantime<T: TimeZone>(context: &RenderContext, date: Option<&DateTime<T>>) -> String {
	let date = match date {
		Some(date) => date.with_timezone(&context.timezone),
		None => return String::new(),
	};
	let elapsed = context.now.signed_duration_since(date.with_timezone(&Utc));
	if elapsed < Duration::days(1) {
		Element::new("span")
			.attribute("title", format_time(&date))
			.child(natural_time(elapsed))
			.render_to_string()
	} else if elapsed < Duration::days(2) {
		Element::new("span")
			.attribute("title", format_date_time(&date))
			.child(format!("Yesterday at {}", format_time(&date)))
			.render_to_string()
	} else {
		localtime(context, Some(&date))
	}
}

fn format_date_time(date: &DateTime<Tz>) -> String {
	date.format("%B %-d, %Y at %-I:%M %p").to_string()
}

fn format_time(date: &DateTime<Tz>) -> String {
	date.format("%-I:%M %p").to_string()
}

fn natural_time(elapsed: Duration) -> String {
	let seconds = elapsed.num_seconds();
	let suffix = if seconds < 0 { "from now" } else { "ago" };
	let seconds = seconds.abs();
	match seconds {
		0 => "now".to_owned(),
		1 => format!("a second {}", suffix),
		2..=59 => format!("{}\u{a0}seconds {}", seconds, suffix),
		60..=119 => format!("a minute {}", suffix),
		120..=3599 => format!("{}\u{a0}minutes {}", seconds / 60, suffix),
		3600..=7199 => format!("an hour {}", suffix),
		7200..=86399 => format!("{}\u{a0}hours {}", seconds / 3600, suffix),
		_ => format!("{} {}", count_days(seconds / 86400), suffix),
	}
}

fn count_days(days: i64) -> String {
	let (count, unit) = if days >= 365 {
		(days / 365, "year")
	} else if days >= 30 {
		(days / 30, "month")
	} else {
		(days, "day")
	};
	if count == 1 {
		format!("1\u{a0}{}", unit)
	} else {
		format!("{}\u{a0}{}s", count, unit)
	}
}
