use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CLIError {
	ExternalError(String, String),
	InvalidArgument(String),
	NotFound(String),
}

impl fmt::Display for CLIError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CLIError::ExternalError(kind, message) => write!(f, "{}: {}", kind, message),
			CLIError::InvalidArgument(arg) => write!(f, "invalid argument {:?}", arg),
			CLIError::NotFound(path) => write!(f, "{} not found", path),
		}
	}
}

impl std::error::Error for CLIError {}

macro_rules! external {
	($kind:expr) => {
		|e| CLIError::ExternalError($kind.into(), e.to_string())
	};
}

pub(crate) use external;

pub type CLIResult<O = ()> = Result<O, CLIError>;
