use super::IntcodeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
	#[error("{0}: {1}")]
	ExternalError(String, String),
	#[error("malformed snapshot header: {0:?}")]
	MalformedHeader(MalformedHeaderError),
	#[error("could not decode machine state: {0}")]
	Deserialize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedHeaderError {
	SnapshotDecl,
	Version,
}

impl IntcodeError for SnapshotError {}

pub type SnapshotResult<O = ()> = Result<O, SnapshotError>;
