use std::fmt::{Display, Formatter};

use crate::colors::modes::ColorMode;
use crate::colors::palette::Color;

const RGB_MAX: u64 = 0xFF;
const PACKED_MAX: u64 = 0xFFFFFF;

/// Parses a single color token according to the given input mode.
///
/// Hex and nat tokens describe the same 24-bit integer space in different
/// bases; both are zero-extended to three bytes with the most significant
/// byte becoming red. Rgb tokens carry the three channels separately.
pub fn parse_color(token: &str, mode: ColorMode) -> Result<Color, ConvertError> {
	match mode {
		ColorMode::Hex => parse_packed(token, ColorMode::Hex, 16),
		ColorMode::Nat => parse_packed(token, ColorMode::Nat, 10),
		ColorMode::Rgb => parse_rgb(token),
	}
}

fn parse_packed(token: &str, mode: ColorMode, radix: u32) -> Result<Color, ConvertError> {
	let n = u64::from_str_radix(token, radix)
		.map_err(|_| ConvertError::InvalidNumber { token: token.to_string(), mode })?;

	if n > PACKED_MAX {
		return Err(ConvertError::OutOfRange { value: n, mode });
	}

	Ok(Color::from(n as u32))
}

fn parse_rgb(token: &str) -> Result<Color, ConvertError> {
	let components = token.split_whitespace().collect::<Vec<&str>>();
	if components.len() != 3 {
		return Err(ConvertError::MalformedRgbInput { input: token.to_string(), count: components.len() });
	}

	let mut channels = [0_u8; 3];
	for (i, comp) in components.iter().enumerate() {
		let n = comp.parse::<u64>()
			.map_err(|_| ConvertError::InvalidNumber { token: comp.to_string(), mode: ColorMode::Rgb })?;

		if n > RGB_MAX {
			return Err(ConvertError::OutOfRange { value: n, mode: ColorMode::Rgb });
		}

		channels[i] = n as u8;
	}

	Ok(Color::from(channels))
}

/// Renders a color according to the given output mode.
pub fn format_color(color: Color, mode: ColorMode) -> String {
	match mode {
		ColorMode::Hex => format!("{:06x}", color.to_u32()),
		ColorMode::Rgb => format!("({}, {}, {})", color.r, color.g, color.b),
		ColorMode::Nat => color.to_u32().to_string(),
	}
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConvertError {
	UnknownMode { mode: String },
	InvalidNumber { token: String, mode: ColorMode },
	OutOfRange { value: u64, mode: ColorMode },
	MalformedRgbInput { input: String, count: usize },
}

impl Display for ConvertError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ConvertError::UnknownMode { mode } => write!(f, "Unknown color mode \"{mode}\" (expected hex, rgb, or nat)"),
			ConvertError::InvalidNumber { token, mode } => {
				let base = if *mode == ColorMode::Hex { 16 } else { 10 };
				write!(f, "\"{token}\" is not a valid base-{base} number for \"{mode}\"")
			}
			// the hex bounds are rendered in hex so the message matches the input base
			ConvertError::OutOfRange { value, mode } => match mode {
				ColorMode::Hex => write!(f, "{value:#x} is outside the allowed range for \"hex\": (0x0..{PACKED_MAX:#x})"),
				ColorMode::Nat => write!(f, "{value} is outside the allowed range for \"nat\": (0..{PACKED_MAX})"),
				ColorMode::Rgb => write!(f, "{value} is outside the allowed range for \"rgb\": (0..{RGB_MAX})"),
			},
			ConvertError::MalformedRgbInput { input, count } => {
				write!(f, "Expected exactly 3 rgb components, got {count}: \"{input}\"")
			}
		}
	}
}
