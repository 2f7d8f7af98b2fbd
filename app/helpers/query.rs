use crate::context::RenderContext;
use vrot_deps::url::form_urlencoded;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryParam {
	Keep(String),
	Remove,
}

impl From<&str> for QueryParam {
	fn from(value: &str) -> QueryParam {
		QueryParam::Keep(value.to_owned())
	}
}

impl From<String> for QueryParam {
	fn from(value: String) -> QueryParam {
		QueryParam::Keep(value)
	}
}

pub fn query_param_replace(context: &RenderContext, overrides: &[(&str, QueryParam)]) -> String {
	let query = context.query().unwrap_or("");
	let mut params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
		.into_owned()
		.collect();
	for (name, param) in overrides {
		match param {
			QueryParam::Keep(value) => {
				match params.iter().position(|(key, _)| key == name) {
					Some(position) => {
						params[position].1 = value.clone();
						let mut index = 0;
						params.retain(|(key, _)| {
							let keep = key != name || index == position;
							index += 1;
							keep
						});
					}
					None => params.push(((*name).to_owned(), value.clone())),
				}
			}
			QueryParam::Remove => params.retain(|(key, _)| key != name),
		}
	}
	if params.is_empty() {
		return String::new();
	}
	let query = form_urlencoded::Serializer::new(String::new())
		.extend_pairs(params.iter())
		.finish();
	format!("?{}", query)
}
