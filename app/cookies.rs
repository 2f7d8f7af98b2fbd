use std::collections::BTreeMap;
use vrot_deps::http::{header, HeaderMap};

pub fn parse_cookies(cookies_str: &str) -> BTreeMap<&str, &str> {
	let mut cookies = BTreeMap::new();
	for cookie in cookies_str.split(';') {
		let (key, value) = match cookie.split_once('=') {
			Some(pair) => pair,
			None => continue,
		};
		let key = key.trim();
		if key.is_empty() {
			continue;
		}
		let value = value.trim();
		let value = value
			.strip_prefix('"')
			.and_then(|value| value.strip_suffix('"'))
			.unwrap_or(value);
		cookies.entry(key).or_insert(value);
	}
	cookies
}

pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers
		.get_all(header::COOKIE)
		.iter()
		.filter_map(|cookie_header_value| cookie_header_value.to_str().ok())
		.find_map(|cookie_header_value| parse_cookies(cookie_header_value).get(name).copied())
}
