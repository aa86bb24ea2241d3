//! Helpers for programs that talk in ASCII codes.

/// Output split into printable text and any values outside the ASCII range.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rendered {
	pub text: String,
	pub extra: Vec<i64>,
}

/// One input value per byte of `text`.
pub fn encode(text: &str) -> Vec<i64> {
	text.bytes().map(i64::from).collect()
}

/// Encode `line` followed by the newline the programs expect after each command.
pub fn encode_line(line: &str) -> Vec<i64> {
	let mut values = encode(line);
	values.push(i64::from(b'\n'));
	values
}

pub fn render(values: &[i64]) -> Rendered {
	let mut rendered = Rendered::default();
	for &value in values {
		match u8::try_from(value) {
			Ok(byte) if byte.is_ascii() => rendered.text.push(char::from(byte)),
			_ => rendered.extra.push(value),
		}
	}
	rendered
}
