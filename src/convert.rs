use anyhow::{Result, anyhow};
use colored::Colorize;

use websafe_rs::colors::convert::{format_color, parse_color};

use crate::args::ProgramArgs;

/// Converts every color argument in order. The first invalid token aborts
/// the whole run; lines already printed stay printed.
pub(crate) fn convert_colors(args: &ProgramArgs) -> Result<()> {
	for color in &args.color {
		let token = color.to_lowercase();

		let parsed = parse_color(&token, args.intro).map_err(|e| anyhow!(e))?;
		let result = format_color(parsed.quantize(), args.out);

		if args.verbose {
			println!("{token} {} {result}", "=>".dimmed());
		} else {
			println!("{result}");
		}
	}

	Ok(())
}
