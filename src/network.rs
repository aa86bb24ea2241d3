//! Several machines wired output-to-input in a cycle.
//!
//! Each machine is primed with its own phase setting, then driven round-robin:
//! whatever one machine emits is queued as input for the next, and the last
//! machine feeds back into the first. Every machine is exclusively owned by the
//! ring, so a fault in one stops the ring without touching any other machine.

use crate::{error::runtime::*, Machine, Status};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Ring {
	machines: Vec<Machine>,
}

impl Ring {
	pub fn new(program: &[i64], phases: &[i64]) -> Self {
		let machines = phases
			.iter()
			.map(|&phase| {
				let mut machine = Machine::new(program.to_vec());
				machine.set_input([phase]);
				machine
			})
			.collect();
		Self { machines }
	}

	pub fn machines(&self) -> &[Machine] {
		&self.machines
	}

	/// Inject `signal` into the first machine and cycle until every machine has halted.
	///
	/// Returns the last value emitted by the final machine.
	pub fn run(&mut self, signal: i64) -> RuntimeResult<i64> {
		let count = self.machines.len();
		let Some(first) = self.machines.first_mut() else {
			return Err(RuntimeError::NoOutputProduced);
		};
		first.append_input([signal]);

		let mut last = None;
		let mut round = 0usize;
		while !self.machines.iter().all(Machine::is_halted) {
			let mut progressed = false;
			for idx in 0..count {
				let machine = &mut self.machines[idx];
				if machine.is_halted() {
					continue;
				}
				let before = (machine.instruction_pointer(), machine.pending_input());
				let status = machine.run()?;
				let produced = machine.take_output();
				progressed |= status == Status::Halted
					|| !produced.is_empty()
					|| before != (machine.instruction_pointer(), machine.pending_input());

				if idx == count - 1 {
					if let Some(&value) = produced.last() {
						last = Some(value);
					}
				}
				self.machines[(idx + 1) % count].append_input(produced);
			}
			trace!(round, "ring round complete");
			round += 1;

			if !progressed {
				let waiting = (0..count).filter(|&idx| self.machines[idx].is_waiting()).collect();
				return Err(RuntimeError::Deadlock { waiting });
			}
		}
		debug!(rounds = round, ?last, "ring halted");
		last.ok_or(RuntimeError::NoOutputProduced)
	}
}
