mod error;
use error::*;
use std::{
	fs::{read, read_to_string, write},
	io::{self, ErrorKind},
	path::{Path, PathBuf},
	process,
};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use intcode::{ascii, disasm::{self, Line}, snapshot, Machine};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "intcode")]
#[command(about = "Run, resume and inspect Intcode programs")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run a program stored as comma separated integers
	Run {
		file: PathBuf,
		/// Overwrite a memory cell before running, e.g. `--patch 1=12`
		#[arg(long = "patch", value_parser = parse_patch)]
		patches: Vec<(i64, i64)>,
		#[command(flatten)]
		io: IoArgs,
	},
	/// Continue a machine saved with `--save`
	Resume {
		state: PathBuf,
		#[command(flatten)]
		io: IoArgs,
	},
	/// Print a listing of a program
	Disasm { file: PathBuf },
}

#[derive(Args, Debug)]
struct IoArgs {
	/// Comma separated input values
	#[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
	input: Vec<i64>,
	/// A line of text fed as ASCII codes, may be repeated
	#[arg(long = "line")]
	lines: Vec<String>,
	/// Print output as text
	#[arg(long)]
	ascii: bool,
	/// Save the machine here if it stops waiting for input
	#[arg(long)]
	save: Option<PathBuf>,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();
	if let Err(e) = execute(cli.command) {
		error!("{}", e);
		process::exit(1);
	}
}

fn execute(command: Command) -> CLIResult {
	match command {
		Command::Run { file, patches, io } => {
			let source = read_source(&file)?;
			let mut machine = intcode::load(&source).map_err(external!("ParseError"))?;
			for (addr, value) in patches {
				machine.write_memory(addr, value).map_err(external!("RuntimeError"))?;
			}
			drive(machine, io)
		}
		Command::Resume { state, io } => {
			let bytes = read(&state).map_err(|e| io_error(&state, e))?;
			let machine = snapshot::de(&bytes).map_err(external!("SnapshotError"))?;
			debug!(ip = machine.instruction_pointer(), "resuming");
			drive(machine, io)
		}
		Command::Disasm { file } => {
			let source = read_source(&file)?;
			let program = intcode::scanner::parse(&source).map_err(external!("ParseError"))?;
			for line in disasm::disassemble(&program) {
				println!("{}", paint(&line));
			}
			Ok(())
		}
	}
}

fn drive(mut machine: Machine, io: IoArgs) -> CLIResult {
	machine.append_input(io.input);
	for line in &io.lines {
		machine.append_input(ascii::encode_line(line));
	}
	machine.run().map_err(external!("RuntimeError"))?;
	print_output(&machine.take_output(), io.ascii);

	if machine.is_waiting() {
		eprintln!("{}", "waiting for input".yellow());
		if let Some(path) = io.save {
			let bytes = snapshot::ser(&machine).map_err(external!("SnapshotError"))?;
			write(&path, bytes).map_err(|e| io_error(&path, e))?;
			eprintln!("state saved to {}", path.display());
		}
	}
	Ok(())
}

fn print_output(output: &[i64], as_text: bool) {
	if as_text {
		let rendered = ascii::render(output);
		print!("{}", rendered.text);
		for value in rendered.extra {
			println!("{}", value);
		}
	} else {
		for value in output {
			println!("{}", value);
		}
	}
}

fn paint(line: &Line) -> String {
	match line {
		Line::Op(decoded) => {
			let operands: Vec<String> = decoded.operands.iter().map(ToString::to_string).collect();
			format!(
				"{} {:<4} {}",
				format!("{:04}:", decoded.addr).dimmed(),
				decoded.opcode.mnemonic().cyan().bold(),
				operands.join(" ")
			)
		}
		Line::Data { addr, value } => format!("{} {}", format!("{:04}:", addr).dimmed(), value.to_string().yellow()),
	}
}

fn parse_patch(arg: &str) -> Result<(i64, i64), String> {
	let invalid = || CLIError::InvalidArgument(arg.into()).to_string();
	let (addr, value) = arg.split_once('=').ok_or_else(invalid)?;
	Ok((addr.trim().parse().map_err(|_| invalid())?, value.trim().parse().map_err(|_| invalid())?))
}

fn read_source(path: &Path) -> CLIResult<String> {
	read_to_string(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, e: io::Error) -> CLIError {
	match e.kind() {
		ErrorKind::NotFound => CLIError::NotFound(path.display().to_string()),
		_ => CLIError::ExternalError("io::Error".into(), e.to_string()),
	}
}
