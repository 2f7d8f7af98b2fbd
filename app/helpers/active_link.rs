use crate::{context::RenderContext, routes::Router};
use vrot_deps::tracing;

/// The root path is always matched exactly.
pub fn active_link<'a>(
	context: &RenderContext,
	router: &impl Router,
	route: &str,
	active: &'a str,
	inactive: &'a str,
	exact: bool,
) -> &'a str {
	let path = match context.path() {
		Some(path) => path,
		None => return inactive,
	};
	let route_path = match router.reverse(route) {
		Some(route_path) => route_path,
		None => {
			tracing::debug!(route, "unable to resolve route");
			return inactive;
		}
	};
	let is_active = if exact || route_path == "/" {
		path == route_path
	} else {
		path.starts_with(route_path.as_ref())
	};
	if is_active {
		active
	} else {
		inactive
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{context::RequestInfo, routes::RouteMap};
	use vrot_deps::{chrono_tz::UTC, maplit::btreemap};

	fn context(path: &str) -> RenderContext {
		let mut context = RenderContext::new(UTC);
		context.request = Some(RequestInfo {
			path: path.to_owned(),
			query: None,
		});
		context
	}

	fn routes() -> RouteMap {
		btreemap! {
			"home" => "/",
			"blog:index" => "/blog/",
		}
	}

	#[test]
	fn test_exact_match() {
		let result = active_link(&context("/blog/"), &routes(), "blog:index", "active", "", true);
		assert_eq!(result, "active");
	}

	#[test]
	fn test_no_exact_match() {
		let context = context("/blog/post/1/");
		let result = active_link(&context, &routes(), "blog:index", "active", "", true);
		assert_eq!(result, "");
	}

	#[test]
	fn test_prefix_match() {
		let context = context("/blog/post/1/");
		let result = active_link(&context, &routes(), "blog:index", "active", "", false);
		assert_eq!(result, "active");
	}

	#[test]
	fn test_root_is_strict() {
		let about = context("/about/");
		assert_eq!(active_link(&about, &routes(), "home", "active", "", false), "");
		let home = context("/");
		assert_eq!(active_link(&home, &routes(), "home", "active", "", false), "active");
	}

	#[test]
	fn test_inactive_class() {
		let context = context("/about/");
		let result = active_link(&context, &routes(), "blog:index", "active", "inactive", false);
		assert_eq!(result, "inactive");
	}

	#[test]
	fn test_no_request() {
		let context = RenderContext::new(UTC);
		let result = active_link(&context, &routes(), "blog:index", "active", "inactive", false);
		assert_eq!(result, "inactive");
	}

	#[test]
	fn test_unknown_route() {
		let context = context("/blog/");
		let result = active_link(&context, &routes(), "missing", "active", "inactive", false);
		assert_eq!(result, "inactive");
	}
}
