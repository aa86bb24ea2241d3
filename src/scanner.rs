use crate::error::parse::*;
use logos::Logos;

/// Tokens of Intcode program text: a single line of comma separated integers.
#[derive(PartialEq, Eq, Debug, Clone, Logos)]
pub enum TokenKind {
	#[regex("-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
	Integer(i64),
	#[token(",")]
	Comma,

	#[error]
	#[regex(r"[ \t\r\n\f]+", logos::skip)]
	Error,
}

/// Parse program text into the initial memory image.
pub fn parse(source: &str) -> ParseResult<Vec<i64>> {
	let mut program = vec![];
	// true while an integer is required next
	let mut expect_integer = true;
	let mut lexer = TokenKind::lexer(source);
	while let Some(token) = lexer.next() {
		let offset = lexer.span().start;
		match token {
			TokenKind::Integer(value) if expect_integer => {
				program.push(value);
				expect_integer = false;
			}
			TokenKind::Integer(_) => return Err(ParseError::ExpectedComma { offset }),
			TokenKind::Comma if expect_integer => return Err(ParseError::ExpectedInteger { offset }),
			TokenKind::Comma => expect_integer = true,
			TokenKind::Error => {
				return Err(ParseError::InvalidToken {
					offset,
					slice: lexer.slice().to_string(),
				})
			}
		}
	}

	if program.is_empty() {
		Err(ParseError::Empty)
	} else if expect_integer {
		Err(ParseError::ExpectedInteger { offset: source.len() })
	} else {
		Ok(program)
	}
}
