use derive_more::{Display, Error};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Display, Debug, Error, PartialEq)]
pub enum Error {
	#[display(fmt = "the timezone cookie is not valid utf-8 once percent-decoded")]
	InvalidEncoding,
	#[display(fmt = "unknown timezone \"{}\"", name)]
	UnknownTimezone { name: String },
}
