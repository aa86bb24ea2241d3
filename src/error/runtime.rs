use super::IntcodeError;
use thiserror::Error;

/// Fatal conditions raised while executing a [crate::Machine].
///
/// None of these are retried: the machine is left exactly as it was when the
/// faulting instruction was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
	#[error("unknown opcode {opcode} in word {word} at {ip}")]
	UnknownOpcode { word: i64, opcode: i64, ip: i64 },
	#[error("unknown addressing mode in word {word} for parameter {position}")]
	UnknownMode { word: i64, position: usize },
	#[error("address {0} is out of range")]
	OutOfRangeAddress(i64),
	#[error("immediate mode used for the write target of word {word} at {ip}")]
	InvalidWriteMode { word: i64, ip: i64 },
	#[error("instruction at {ip} needs {needed} parameters but only {available} remain")]
	MalformedInstruction { ip: i64, needed: usize, available: usize },
	#[error("no output has been produced")]
	NoOutputProduced,
	#[error("machines {waiting:?} are waiting for input that will never arrive")]
	Deadlock { waiting: Vec<usize> },
}

impl IntcodeError for RuntimeError {}

macro_rules! out_of_range {
	($addr:expr) => {
		Err(RuntimeError::OutOfRangeAddress($addr))
	};
}

pub(crate) use out_of_range;

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
