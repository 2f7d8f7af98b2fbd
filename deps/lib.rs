pub use chrono;
pub use chrono_tz;
pub use http;
pub use hyper;
pub use maplit;
pub use percent_encoding;
pub use serde_json;
pub use tracing;
pub use url;
