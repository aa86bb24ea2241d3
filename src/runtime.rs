/*
	# Intcode Machine
	Code is executed by fetching the word at the instruction pointer, splitting it into an opcode and
	per-parameter addressing modes, then running the handler for that opcode. The loop repeats until
	the program halts or an input instruction finds the input queue empty.

	## Suspension
	An input instruction with nothing to read leaves the instruction pointer on itself and parks the
	machine in `WaitingForInput`. Control returns to the caller, which may feed more input and run
	again; the same instruction is then retried.

	## Memory
	Parameters that point past the end of memory read as 0. Writes past the end grow memory.
*/

use std::str::FromStr;

use crate::error::{parse::ParseError, runtime::*};
use crate::instruction::{Instruction, Mode, Opcode};
use crate::memory::Memory;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

mod io;
pub use io::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
	Running,
	WaitingForInput,
	Halted,
}

/// One Intcode computer.
///
/// Every piece of mutable state lives here; `clone` produces a fully
/// independent machine that can be driven down a different path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
	memory: Memory,
	ip: i64,
	relative_base: i64,
	io: Channel,
	status: Status,
}

macro_rules! operation {
	(A, $self:ident.$op:ident, $i:expr) => {{ // Arithmetic
		let lhs = $self.param($i, 1)?;
		let rhs = $self.param($i, 2)?;
		$self.store($i, 3, lhs.$op(rhs))?;
		$self.ip += 4;
	}};

	(C, $self:ident.$op:tt, $i:expr) => {{ // Comparison
		let lhs = $self.param($i, 1)?;
		let rhs = $self.param($i, 2)?;
		$self.store($i, 3, (lhs $op rhs) as i64)?;
		$self.ip += 4;
	}};

	(J, $self:ident.$op:tt, $i:expr) => {{ // Jump
		let value = $self.param($i, 1)?;
		if value $op 0 {
			let target = $self.param($i, 2)?;
			// ip stays on the jump
			if target < 0 {
				return out_of_range!(target);
			}
			$self.ip = target;
		} else {
			$self.ip += 3;
		}
	}};
}

impl Machine {
	pub fn new(program: Vec<i64>) -> Self {
		Self {
			memory: Memory::new(program),
			ip: 0,
			relative_base: 0,
			io: Channel::default(),
			status: Status::Running,
		}
	}

	/// Run until the program halts or waits for input.
	///
	/// Calling this on a waiting machine retries the pending input instruction;
	/// calling it on a halted machine does nothing.
	pub fn run(&mut self) -> RuntimeResult<Status> {
		if self.status == Status::WaitingForInput {
			self.status = Status::Running;
		}
		while self.status == Status::Running {
			if let Err(error) = self.step() {
				debug!(ip = self.ip, %error, "machine faulted");
				return Err(error);
			}
		}
		match self.status {
			Status::WaitingForInput => debug!(ip = self.ip, "machine waiting for input"),
			_ => debug!(ip = self.ip, outputs = self.io.output.len(), "machine halted"),
		}
		Ok(self.status)
	}

	/// Execute exactly one instruction.
	pub fn step(&mut self) -> RuntimeResult<Status> {
		if self.status == Status::Halted {
			return Ok(Status::Halted);
		}
		let word = self.memory.read(self.ip)?;
		let instruction = Instruction::decode(word, self.ip)?;
		trace!(ip = self.ip, word, opcode = ?instruction.opcode, "step");
		match instruction.opcode {
			Opcode::Add => operation!(A, self.wrapping_add, &instruction),
			Opcode::Multiply => operation!(A, self.wrapping_mul, &instruction),
			Opcode::Input => self.input(&instruction)?,
			Opcode::Output => {
				let value = self.param(&instruction, 1)?;
				self.io.output.push(value);
				self.ip += 2;
			}
			Opcode::JumpIfTrue => operation!(J, self.!=, &instruction),
			Opcode::JumpIfFalse => operation!(J, self.==, &instruction),
			Opcode::LessThan => operation!(C, self.<, &instruction),
			Opcode::Equals => operation!(C, self.==, &instruction),
			Opcode::AdjustRelativeBase => {
				let offset = self.param(&instruction, 1)?;
				self.relative_base = self.relative_base.wrapping_add(offset);
				self.ip += 2;
			}
			Opcode::Halt => self.status = Status::Halted,
		}
		Ok(self.status)
	}

	fn input(&mut self, instruction: &Instruction) -> RuntimeResult {
		// The target is resolved before popping so a faulting write leaves the queue intact
		let addr = self.address(instruction, 1)?;
		match self.io.input.pop_front() {
			Some(value) => {
				self.memory.write(addr, value)?;
				self.ip += 2;
				self.status = Status::Running;
			}
			None => self.status = Status::WaitingForInput,
		}
		Ok(())
	}

	/// Raw parameter word `position` of the current instruction.
	fn raw(&self, position: usize) -> RuntimeResult<i64> {
		self.memory.read(self.ip + position as i64)
	}

	/// Resolve parameter `position` for reading.
	fn param(&self, instruction: &Instruction, position: usize) -> RuntimeResult<i64> {
		let raw = self.raw(position)?;
		match instruction.mode(position) {
			Mode::Position => self.memory.read(raw),
			Mode::Immediate => Ok(raw),
			Mode::Relative => self.memory.read(raw.wrapping_add(self.relative_base)),
		}
	}

	/// Resolve parameter `position` as a write target.
	fn address(&self, instruction: &Instruction, position: usize) -> RuntimeResult<i64> {
		let raw = self.raw(position)?;
		match instruction.mode(position) {
			Mode::Position => Ok(raw),
			Mode::Relative => Ok(raw.wrapping_add(self.relative_base)),
			Mode::Immediate => Err(RuntimeError::InvalidWriteMode {
				word: instruction.word,
				ip: self.ip,
			}),
		}
	}

	fn store(&mut self, instruction: &Instruction, position: usize, value: i64) -> RuntimeResult {
		let addr = self.address(instruction, position)?;
		self.memory.write(addr, value)
	}

	pub fn status(&self) -> Status {
		self.status
	}

	pub fn is_halted(&self) -> bool {
		self.status == Status::Halted
	}

	pub fn is_waiting(&self) -> bool {
		self.status == Status::WaitingForInput
	}

	pub fn instruction_pointer(&self) -> i64 {
		self.ip
	}

	pub fn relative_base(&self) -> i64 {
		self.relative_base
	}

	pub fn read_memory(&self, addr: i64) -> RuntimeResult<i64> {
		self.memory.read(addr)
	}

	/// Patch a memory cell directly, e.g. to set a program's parameters before running it.
	pub fn write_memory(&mut self, addr: i64, value: i64) -> RuntimeResult {
		self.memory.write(addr, value)
	}

	pub fn memory(&self) -> &[i64] {
		self.memory.as_slice()
	}

	pub fn memory_snapshot(&self) -> Vec<i64> {
		self.memory.as_slice().to_vec()
	}
}

impl From<Vec<i64>> for Machine {
	fn from(program: Vec<i64>) -> Self {
		Self::new(program)
	}
}

impl FromStr for Machine {
	type Err = ParseError;

	fn from_str(source: &str) -> Result<Self, Self::Err> {
		crate::scanner::parse(source).map(Machine::new)
	}
}
