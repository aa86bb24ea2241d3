use std::slice::Iter;

use crate::{error::snapshot::*, Machine, INTCODE_VER};

const SNAPSHOT: &str = "INTCODESNAPSHOT";

/// Serialize a machine, suspended or not, so it can be resumed later.
pub fn ser(machine: &Machine) -> SnapshotResult<Vec<u8>> {
	let mut output = vec![];
	output.extend(format!("{}\n{}\n", SNAPSHOT, INTCODE_VER).as_bytes());
	let state =
		bincode::serialize(machine).map_err(|e| SnapshotError::ExternalError("bincode::Error".into(), e.to_string()))?;
	output.extend(state);
	Ok(output)
}

pub fn de(input: &[u8]) -> SnapshotResult<Machine> {
	let mut iter = input.iter();
	consume(&mut iter, &format!("{}\n", SNAPSHOT), MalformedHeaderError::SnapshotDecl)?;
	consume(&mut iter, &format!("{}\n", INTCODE_VER), MalformedHeaderError::Version)?;

	bincode::deserialize(iter.as_slice()).map_err(|e| SnapshotError::Deserialize(e.to_string()))
}

fn consume(input: &mut Iter<u8>, expected: &str, kind: MalformedHeaderError) -> SnapshotResult {
	for i in expected.as_bytes() {
		if input.next() != Some(i) {
			return Err(SnapshotError::MalformedHeader(kind));
		}
	}

	Ok(())
}
