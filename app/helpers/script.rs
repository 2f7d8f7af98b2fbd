use crate::{
	markup::{Element, Node},
	Options,
};

pub fn timezone_cookie_script(options: &Options) -> String {
	let cookie_name: String = options
		.timezone_cookie_name
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
		.collect();
	let script = format!(
		"document.cookie = `{}=${{encodeURIComponent(Intl.DateTimeFormat().resolvedOptions().timeZone)}};path=/;max-age=31536000;samesite=lax`",
		cookie_name,
	);
	Element::new("script")
		.child(Node::Raw(script.into()))
		.render_to_string()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_timezone_cookie_script() {
		insta::assert_snapshot!(
			timezone_cookie_script(&Options::default()),
			@"<script>document.cookie = `timezone=${encodeURIComponent(Intl.DateTimeFormat().resolvedOptions().timeZone)};path=/;max-age=31536000;samesite=lax`</script>"
		);
	}

	#[test]
	fn test_cookie_name_is_sanitized() {
		let options = Options {
			timezone_cookie_name: "tz`</script>".to_owned(),
			..Options::default()
		};
		assert!(timezone_cookie_script(&options).starts_with("<script>document.cookie = `tzscript="));
	}
}
