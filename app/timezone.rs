use crate::{
	cookies::get_cookie,
	error::{Error, Result},
	Options,
};
use std::future::Future;
use vrot_deps::{
	chrono_tz::Tz,
	hyper::{Body, Request, Response},
	percent_encoding::percent_decode_str,
	tracing,
};

/// Stored in the request's extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveTimezone(pub Tz);

impl ActiveTimezone {
	pub fn get<B>(request: &Request<B>) -> Option<Tz> {
		request
			.extensions()
			.get::<ActiveTimezone>()
			.map(|active_timezone| active_timezone.0)
	}
}

pub fn timezone_from_cookie<B>(request: &Request<B>, options: &Options) -> Result<Option<Tz>> {
	let value = match get_cookie(request.headers(), &options.timezone_cookie_name) {
		Some(value) => value,
		None => return Ok(None),
	};
	let name = percent_decode_str(value)
		.decode_utf8()
		.map_err(|_| Error::InvalidEncoding)?;
	let timezone = name.parse::<Tz>().map_err(|_| Error::UnknownTimezone {
		name: name.into_owned(),
	})?;
	Ok(Some(timezone))
}

/// Replaces any override set earlier.
pub fn activate_timezone<B>(request: &mut Request<B>, options: &Options) -> Tz {
	let timezone = match timezone_from_cookie(request, options) {
		Ok(Some(timezone)) => {
			tracing::trace!(timezone = timezone.name(), "activating timezone");
			timezone
		}
		Ok(None) => options.default_timezone,
		Err(error) => {
			tracing::debug!(%error, "falling back to the default timezone");
			options.default_timezone
		}
	};
	request.extensions_mut().insert(ActiveTimezone(timezone));
	timezone
}

/// Wraps a request handler so that every request it sees carries an [`ActiveTimezone`].
pub struct TimezoneMiddleware<H> {
	options: Options,
	handler: H,
}

impl<H, F> TimezoneMiddleware<H>
where
	H: Fn(Request<Body>) -> F,
	F: Future<Output = Response<Body>>,
{
	pub fn new(options: Options, handler: H) -> TimezoneMiddleware<H> {
		TimezoneMiddleware { options, handler }
	}

	pub async fn handle(&self, mut request: Request<Body>) -> Response<Body> {
		activate_timezone(&mut request, &self.options);
		(self.handler)(request).await
	}
}
