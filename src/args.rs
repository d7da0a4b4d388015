use clap::Parser;
use const_format::formatcp;

use websafe_rs::colors::modes::ColorMode;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug)]
#[command(version = CLAP_VERSION, about = "Converts colors to their nearest web-safe equivalents")]
pub struct ProgramArgs {
	#[clap(required = true, help = "The colors to convert")]
	pub color: Vec<String>,

	#[clap(short, long, help = "Prints the input alongside every result")]
	pub verbose: bool,

	#[clap(short, long = "intro", value_enum, default_value_t = ColorMode::default(), help = "The input mode")]
	pub intro: ColorMode,

	#[clap(short, long = "out", value_enum, default_value_t = ColorMode::default(), help = "The output mode")]
	pub out: ColorMode,
}
