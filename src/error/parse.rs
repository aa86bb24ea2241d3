use super::IntcodeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("invalid token {slice:?} at offset {offset}")]
	InvalidToken { offset: usize, slice: String },
	#[error("expected an integer at offset {offset}")]
	ExpectedInteger { offset: usize },
	#[error("expected a comma at offset {offset}")]
	ExpectedComma { offset: usize },
	#[error("program text contains no integers")]
	Empty,
}

impl IntcodeError for ParseError {}

pub type ParseResult<O = ()> = Result<O, ParseError>;
