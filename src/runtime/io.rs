use std::collections::VecDeque;

use super::{Machine, Status};
use crate::error::runtime::*;
use serde::{Deserialize, Serialize};

/// Input FIFO and append-only output log of a single machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
	pub(super) input: VecDeque<i64>,
	pub(super) output: Vec<i64>,
}

impl Machine {
	/// Replace the input queue. A waiting machine becomes runnable again.
	pub fn set_input<I: IntoIterator<Item = i64>>(&mut self, values: I) {
		self.io.input = values.into_iter().collect();
		self.wake();
	}

	/// Enqueue behind whatever input is still pending.
	pub fn append_input<I: IntoIterator<Item = i64>>(&mut self, values: I) {
		self.io.input.extend(values);
		self.wake();
	}

	fn wake(&mut self) {
		if self.status == Status::WaitingForInput {
			self.status = Status::Running;
		}
	}

	pub fn pending_input(&self) -> usize {
		self.io.input.len()
	}

	pub fn peek_output(&self) -> &[i64] {
		&self.io.output
	}

	/// Copy of every value emitted so far. The log is left intact.
	pub fn drain_output(&self) -> Vec<i64> {
		self.io.output.clone()
	}

	/// Remove and return everything emitted so far.
	pub fn take_output(&mut self) -> Vec<i64> {
		std::mem::take(&mut self.io.output)
	}

	pub fn last_output(&self) -> RuntimeResult<i64> {
		self.io.output.last().copied().ok_or(RuntimeError::NoOutputProduced)
	}

	/// Feed `values`, run, and hand back whatever the machine emitted.
	pub fn run_with_input<I: IntoIterator<Item = i64>>(&mut self, values: I) -> RuntimeResult<Vec<i64>> {
		self.append_input(values);
		self.run()?;
		Ok(self.take_output())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ECHO_TWICE: [i64; 9] = [3, 20, 4, 20, 3, 20, 4, 20, 99];

	#[test]
	fn input_is_fifo() {
		let mut machine = Machine::new(ECHO_TWICE.to_vec());
		machine.append_input([1]);
		machine.append_input([2, 3]);
		assert_eq!(machine.run(), Ok(Status::Halted));
		assert_eq!(machine.drain_output(), vec![1, 2]);
		assert_eq!(machine.pending_input(), 1);
	}

	#[test]
	fn set_input_replaces_queue() {
		let mut machine = Machine::new(ECHO_TWICE.to_vec());
		machine.append_input([1, 2]);
		machine.set_input([8, 9]);
		assert_eq!(machine.run(), Ok(Status::Halted));
		assert_eq!(machine.drain_output(), vec![8, 9]);
	}

	#[test]
	fn set_input_wakes_waiting_machine() {
		let mut machine = Machine::new(ECHO_TWICE.to_vec());
		assert_eq!(machine.run(), Ok(Status::WaitingForInput));
		machine.set_input([4]);
		assert_eq!(machine.status(), Status::Running);
		assert_eq!(machine.run(), Ok(Status::WaitingForInput));
		assert_eq!(machine.peek_output(), &[4]);
	}

	#[test]
	fn drain_keeps_log_take_clears_it() {
		let mut machine = Machine::new(vec![104, 1, 104, 2, 99]);
		machine.run().unwrap();
		assert_eq!(machine.drain_output(), vec![1, 2]);
		assert_eq!(machine.drain_output(), vec![1, 2]);
		assert_eq!(machine.last_output(), Ok(2));
		assert_eq!(machine.take_output(), vec![1, 2]);
		assert!(machine.peek_output().is_empty());
	}

	#[test]
	fn last_output_requires_output() {
		let machine = Machine::new(vec![99]);
		assert_eq!(machine.last_output(), Err(RuntimeError::NoOutputProduced));
	}

	#[test]
	fn run_with_input_returns_new_output() {
		let mut machine = Machine::new(ECHO_TWICE.to_vec());
		assert_eq!(machine.run_with_input([5]), Ok(vec![5]));
		assert!(machine.is_waiting());
		assert_eq!(machine.run_with_input([6]), Ok(vec![6]));
		assert!(machine.is_halted());
	}
}
