use std::process::ExitCode;

use clap::Parser;

use crate::args::ProgramArgs;
use crate::convert::convert_colors;

mod args;
mod convert;

fn main() -> ExitCode {
	let args = ProgramArgs::parse();

	match convert_colors(&args) {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
