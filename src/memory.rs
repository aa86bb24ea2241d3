use crate::error::runtime::*;
use serde::{Deserialize, Serialize};

/// Growable, zero-initialised integer memory.
///
/// Reads beyond the current length yield `0` without growing; writes beyond it
/// grow the buffer (zero-filling the gap) first. The length never decreases.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
	cells: Vec<i64>,
}

impl Memory {
	pub fn new(program: Vec<i64>) -> Self {
		Self { cells: program }
	}

	pub fn read(&self, addr: i64) -> RuntimeResult<i64> {
		let idx = index(addr)?;
		Ok(self.cells.get(idx).copied().unwrap_or(0))
	}

	pub fn write(&mut self, addr: i64, value: i64) -> RuntimeResult {
		let idx = index(addr)?;
		if idx >= self.cells.len() {
			// unallocatable addresses are out of range
			let needed = idx.checked_add(1).ok_or(RuntimeError::OutOfRangeAddress(addr))?;
			self.cells
				.try_reserve(needed - self.cells.len())
				.map_err(|_| RuntimeError::OutOfRangeAddress(addr))?;
			self.cells.resize(needed, 0);
		}
		self.cells[idx] = value;
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	pub fn as_slice(&self) -> &[i64] {
		&self.cells
	}
}

fn index(addr: i64) -> RuntimeResult<usize> {
	match usize::try_from(addr) {
		Ok(idx) => Ok(idx),
		Err(_) => out_of_range!(addr),
	}
}
