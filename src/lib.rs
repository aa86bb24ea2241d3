//! An Intcode virtual machine.
//!
//! A [Machine] owns a growable integer memory, an instruction pointer, a
//! relative base and an input/output channel. Callers drive it by feeding input
//! and calling [Machine::run], which returns once the program halts or needs
//! more input. Machines are plain values: clone one to explore another path
//! from the same state.
//!
//! ```
//! let mut machine = intcode::load("3,9,8,9,10,9,4,9,99,-1,8").unwrap();
//! assert_eq!(machine.run_with_input([8]), Ok(vec![1]));
//! assert!(machine.is_halted());
//! ```

pub mod ascii;
pub mod disasm;
pub mod error;
pub mod instruction;
mod memory;
pub mod network;
mod runtime;
pub mod scanner;
pub mod snapshot;

pub use error::{parse::ParseError, runtime::RuntimeError, snapshot::SnapshotError};
pub use instruction::{Instruction, Mode, Opcode};
pub use network::Ring;
pub use runtime::{Channel, Machine, Status};
pub use scanner::TokenKind;

pub const INTCODE_VER: &str = env!("CARGO_PKG_VERSION");

/// Parse program text and build a machine from it.
pub fn load(source: &str) -> error::parse::ParseResult<Machine> {
	scanner::parse(source).map(Machine::new)
}
