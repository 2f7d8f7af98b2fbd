use std::convert::TryFrom;
use vrot_deps::serde_json::Value;

pub fn getitem<'a>(container: &'a Value, key: &Value) -> Option<&'a Value> {
	match (container, key) {
		(Value::Object(object), Value::String(key)) => object.get(key),
		(Value::Object(object), Value::Number(key)) => object.get(&key.to_string()),
		(Value::Array(array), Value::Number(index)) => {
			let index = index.as_i64()?;
			let index = if index < 0 {
				array.len().checked_sub(usize::try_from(index.checked_neg()?).ok()?)?
			} else {
				usize::try_from(index).ok()?
			};
			array.get(index)
		}
		_ => None,
	}
}

pub fn getitem_display(container: &Value, key: &Value) -> String {
	match getitem(container, key) {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(value)) => value.clone(),
		Some(value) => value.to_string(),
	}
}
