use std::{borrow::Cow, collections::BTreeMap};

/// Resolves a named route such as `"blog:index"` to its path.
pub trait Router {
	fn reverse(&self, name: &str) -> Option<Cow<'_, str>>;
}

pub type RouteMap = BTreeMap<&'static str, &'static str>;

impl Router for BTreeMap<&'static str, &'static str> {
	fn reverse(&self, name: &str) -> Option<Cow<'_, str>> {
		self.get(name).map(|path| Cow::Borrowed(*path))
	}
}

impl Router for BTreeMap<String, String> {
	fn reverse(&self, name: &str) -> Option<Cow<'_, str>> {
		self.get(name).map(|path| Cow::Borrowed(path.as_str()))
	}
}
