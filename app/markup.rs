use std::borrow::Cow;
use std::fmt::Write;

#[derive(Clone, Debug)]
pub enum Node {
	Raw(Cow<'static, str>),
	Text(Cow<'static, str>),
	Element(Element),
}

#[derive(Clone, Debug)]
pub struct Element {
	pub name: &'static str,
	pub attributes: Vec<(&'static str, Cow<'static, str>)>,
	pub children: Vec<Node>,
}

impl Element {
	pub fn new(name: &'static str) -> Element {
		Element {
			name,
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	pub fn attribute(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Element {
		self.attributes.push((key, value.into()));
		self
	}

	pub fn child(mut self, child: impl Into<Node>) -> Element {
		self.children.push(child.into());
		self
	}

	pub fn render_to_string(&self) -> String {
		self.to_string()
	}
}

impl From<Element> for Node {
	fn from(value: Element) -> Node {
		Node::Element(value)
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::Text(value.into())
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::Text(value.into())
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::Raw(raw) => f.write_str(raw),
			Node::Text(text) => escape(f, text),
			Node::Element(element) => write!(f, "{}", element),
		}
	}
}

impl std::fmt::Display for Element {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			write!(f, r#" {}=""#, key)?;
			escape(f, value)?;
			f.write_char('"')?;
		}
		write!(f, ">")?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)?;
		Ok(())
	}
}

fn escape(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
	for c in text.chars() {
		match c {
			'>' => f.write_str("&gt;")?,
			'<' => f.write_str("&lt;")?,
			'"' => f.write_str("&quot;")?,
			'&' => f.write_str("&amp;")?,
			'\'' => f.write_str("&#x27;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}
