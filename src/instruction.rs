/*
	P(x): value of parameter x after resolving its mode
	M(x): memory cell at address x
	IP  : instruction pointer
	RB  : relative base
*/
use crate::error::runtime::*;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

#[repr(i64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Opcode {
	Add = 1,                 // ADD  a b dst   M(dst) = P(a) + P(b)
	Multiply = 2,            // MUL  a b dst   M(dst) = P(a) * P(b)
	Input = 3,               // IN   dst       M(dst) = next input, suspends when there is none
	Output = 4,              // OUT  a         emit P(a)
	JumpIfTrue = 5,          // JNZ  a target  if P(a) != 0 then IP = P(target)
	JumpIfFalse = 6,         // JZ   a target  if P(a) == 0 then IP = P(target)
	LessThan = 7,            // LT   a b dst   M(dst) = P(a) < P(b)
	Equals = 8,              // EQ   a b dst   M(dst) = P(a) == P(b)
	AdjustRelativeBase = 9,  // ARB  a         RB += P(a)
	Halt = 99,               // HALT
}

impl Opcode {
	/// Number of parameter words following the instruction word.
	pub fn arity(self) -> usize {
		match self {
			Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => 3,
			Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
			Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
			Opcode::Halt => 0,
		}
	}

	/// 1-indexed position of the parameter this opcode stores into, if any.
	pub fn writes(self) -> Option<usize> {
		match self {
			Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => Some(3),
			Opcode::Input => Some(1),
			_ => None,
		}
	}

	pub fn mnemonic(self) -> &'static str {
		match self {
			Opcode::Add => "add",
			Opcode::Multiply => "mul",
			Opcode::Input => "in",
			Opcode::Output => "out",
			Opcode::JumpIfTrue => "jnz",
			Opcode::JumpIfFalse => "jz",
			Opcode::LessThan => "lt",
			Opcode::Equals => "eq",
			Opcode::AdjustRelativeBase => "arb",
			Opcode::Halt => "halt",
		}
	}
}

/// Addressing mode of a single parameter.
#[repr(i64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Mode {
	Position = 0,
	Immediate = 1,
	Relative = 2,
}

/// A decoded instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
	pub word: i64,
	pub opcode: Opcode,
	modes: [Mode; 3],
}

impl Instruction {
	pub fn decode(word: i64, ip: i64) -> RuntimeResult<Self> {
		let opcode = Opcode::from_i64(word % 100).ok_or(RuntimeError::UnknownOpcode {
			word,
			opcode: word % 100,
			ip,
		})?;
		let mut modes = [Mode::Position; 3];
		// Only the digits an opcode actually uses are validated
		for position in 1..=opcode.arity() {
			modes[position - 1] =
				Mode::from_i64(mode_digit(word, position)).ok_or(RuntimeError::UnknownMode { word, position })?;
		}
		Ok(Self { word, opcode, modes })
	}

	/// Mode of the 1-indexed parameter `position`.
	pub fn mode(&self, position: usize) -> Mode {
		self.modes[position - 1]
	}
}

/// `floor(word / 10^(position + 1)) mod 10`
fn mode_digit(word: i64, position: usize) -> i64 {
	(word / 10i64.pow(position as u32 + 1)) % 10
}
