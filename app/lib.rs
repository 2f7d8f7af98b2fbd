//! Request timezone activation and view helpers.

pub mod context;
pub mod cookies;
pub mod error;
pub mod helpers;
pub mod markup;
mod options;
pub mod routes;
pub mod timezone;

pub use self::context::{RenderContext, RequestInfo};
pub use self::options::Options;
pub use self::timezone::{ActiveTimezone, TimezoneMiddleware};
