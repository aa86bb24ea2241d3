//! Static listing of a program image.
//!
//! Programs freely mix code and data, so the walk is linear: anything that does
//! not decode as a complete instruction is shown as a data word.

use std::fmt;

use crate::error::runtime::*;
use crate::instruction::{Instruction, Mode, Opcode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
	pub mode: Mode,
	pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
	pub addr: usize,
	pub opcode: Opcode,
	pub operands: Vec<Operand>,
}

impl Decoded {
	/// Number of words this instruction occupies.
	pub fn len(&self) -> usize {
		1 + self.operands.len()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
	Op(Decoded),
	Data { addr: usize, value: i64 },
}

/// Decode the instruction at `addr`, requiring every parameter to lie inside `program`.
pub fn decode_at(program: &[i64], addr: usize) -> RuntimeResult<Decoded> {
	let ip = addr as i64;
	let word = match program.get(addr) {
		Some(&word) => word,
		None => return out_of_range!(ip),
	};
	let instruction = Instruction::decode(word, ip)?;
	let opcode = instruction.opcode;
	let available = program.len() - addr - 1;
	if available < opcode.arity() {
		return Err(RuntimeError::MalformedInstruction {
			ip,
			needed: opcode.arity(),
			available,
		});
	}
	if let Some(position) = opcode.writes() {
		if instruction.mode(position) == Mode::Immediate {
			return Err(RuntimeError::InvalidWriteMode { word, ip });
		}
	}

	let operands = (1..=opcode.arity())
		.map(|position| Operand {
			mode: instruction.mode(position),
			value: program[addr + position],
		})
		.collect();
	Ok(Decoded { addr, opcode, operands })
}

pub fn disassemble(program: &[i64]) -> Vec<Line> {
	let mut lines = vec![];
	let mut addr = 0;
	while addr < program.len() {
		match decode_at(program, addr) {
			Ok(decoded) => {
				addr += decoded.len();
				lines.push(Line::Op(decoded));
			}
			Err(_) => {
				lines.push(Line::Data {
					addr,
					value: program[addr],
				});
				addr += 1;
			}
		}
	}
	lines
}

impl fmt::Display for Operand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.mode {
			Mode::Position => write!(f, "[{}]", self.value),
			Mode::Immediate => write!(f, "#{}", self.value),
			Mode::Relative => write!(f, "r{:+}", self.value),
		}
	}
}

impl fmt::Display for Line {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Line::Op(decoded) => {
				write!(f, "{:04}: {:<4}", decoded.addr, decoded.opcode.mnemonic())?;
				for operand in &decoded.operands {
					write!(f, " {}", operand)?;
				}
				Ok(())
			}
			Line::Data { addr, value } => write!(f, "{:04}: .data {}", addr, value),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lists_code_then_data() {
		let lines = disassemble(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
		let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
		assert_eq!(
			rendered,
			vec![
				"0000: add  [9] [10] [3]",
				"0004: mul  [3] [11] [0]",
				"0008: halt",
				"0009: .data 30",
				"0010: .data 40",
				"0011: .data 50",
			]
		);
	}

	#[test]
	fn shows_modes() {
		let lines = disassemble(&[109, -1, 21101, 3, 4, 0, 204, 5]);
		assert_eq!(lines[0].to_string(), "0000: arb  #-1");
		assert_eq!(lines[1].to_string(), "0002: add  #3 #4 r+0");
		assert_eq!(lines[2].to_string(), "0006: out  r+5");
	}

	#[test]
	fn truncated_instruction_is_malformed() {
		assert_eq!(
			decode_at(&[1, 0, 0], 0),
			Err(RuntimeError::MalformedInstruction {
				ip: 0,
				needed: 3,
				available: 2
			})
		);
		let lines = disassemble(&[99, 1, 0]);
		assert_eq!(lines.len(), 3);
		assert!(matches!(lines[1], Line::Data { addr: 1, value: 1 }));
	}

	#[test]
	fn immediate_write_target_is_data() {
		assert_eq!(
			decode_at(&[1101, 1, 1, 0], 0).map(|d| d.len()),
			Ok(4)
		);
		assert!(matches!(
			decode_at(&[11101, 1, 1, 0], 0),
			Err(RuntimeError::InvalidWriteMode { .. })
		));
		assert_eq!(decode_at(&[99], 1), Err(RuntimeError::OutOfRangeAddress(1)));
	}
}
