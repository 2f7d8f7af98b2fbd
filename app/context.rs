use crate::{timezone::ActiveTimezone, Options};
use vrot_deps::{
	chrono::{DateTime, Utc},
	chrono_tz::Tz,
	hyper::Request,
};

#[derive(Clone, Debug, PartialEq)]
pub struct RequestInfo {
	pub path: String,
	pub query: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RenderContext {
	pub request: Option<RequestInfo>,
	pub timezone: Tz,
	pub now: DateTime<Utc>,
}

impl RenderContext {
	pub fn new(timezone: Tz) -> RenderContext {
		RenderContext {
			request: None,
			timezone,
			now: Utc::now(),
		}
	}

	pub fn from_request<B>(request: &Request<B>, options: &Options) -> RenderContext {
		let uri = request.uri();
		let request_info = RequestInfo {
			path: uri.path().to_owned(),
			query: uri.query().map(ToOwned::to_owned),
		};
		RenderContext {
			request: Some(request_info),
			timezone: ActiveTimezone::get(request).unwrap_or(options.default_timezone),
			now: Utc::now(),
		}
	}

	pub fn with_now(mut self, now: DateTime<Utc>) -> RenderContext {
		self.now = now;
		self
	}

	pub fn path(&self) -> Option<&str> {
		self.request.as_ref().map(|request| request.path.as_str())
	}

	pub fn query(&self) -> Option<&str> {
		self.request
			.as_ref()
			.and_then(|request| request.query.as_deref())
	}
}
