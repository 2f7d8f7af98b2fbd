mod active_link;
mod getitem;
mod query;
mod script;
mod time;

pub use self::active_link::active_link;
pub use self::getitem::{getitem, getitem_display};
pub use self::query::{query_param_replace, QueryParam};
pub use self::script::timezone_cookie_script;
pub use self::time::{humantime, localtime};
