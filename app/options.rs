use vrot_deps::chrono_tz::{Tz, UTC};

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Options {
	pub timezone_cookie_name: String,
	pub default_timezone: Tz,
}

impl Default for Options {
	fn default() -> Options {
		Options {
			timezone_cookie_name: "timezone".to_owned(),
			default_timezone: UTC,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use vrot_deps::{chrono_tz::Asia::Tokyo, serde_json};

	#[test]
	fn test_defaults() {
		let options: Options = serde_json::from_str("{}").unwrap();
		assert_eq!(options, Options::default());
		assert_eq!(options.timezone_cookie_name, "timezone");
		assert_eq!(options.default_timezone, UTC);
	}

	#[test]
	fn test_deserialize() {
		let options: Options = serde_json::from_str(
			r#"{ "timezone_cookie_name": "tz", "default_timezone": "Asia/Tokyo" }"#,
		)
		.unwrap();
		assert_eq!(options.timezone_cookie_name, "tz");
		assert_eq!(options.default_timezone, Tokyo);
	}
}
