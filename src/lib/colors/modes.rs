use std::fmt;
use std::str::FromStr;

use crate::colors::convert::ConvertError;

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ColorMode {
	#[default] Hex,
	Rgb,
	Nat,
}

impl fmt::Display for ColorMode {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ColorMode::Hex => write!(f, "hex"),
			ColorMode::Rgb => write!(f, "rgb"),
			ColorMode::Nat => write!(f, "nat"),
		}
	}
}

impl FromStr for ColorMode {
	type Err = ConvertError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"hex" => Ok(ColorMode::Hex),
			"rgb" => Ok(ColorMode::Rgb),
			"nat" => Ok(ColorMode::Nat),
			_ => Err(ConvertError::UnknownMode { mode: s.to_string() }),
		}
	}
}
