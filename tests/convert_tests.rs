use std::str::FromStr;

use websafe_rs::colors::convert::{ConvertError, format_color, parse_color};
use websafe_rs::colors::modes::ColorMode;
use websafe_rs::colors::palette::Color;

struct ConvertTest {
	pub input: String,
	pub intro: ColorMode,
	pub out: ColorMode,
	pub expected: String,
}

impl ConvertTest {
	fn new<S: Into<String>>(input: S, intro: ColorMode, out: ColorMode, expected: S) -> Self {
		Self {
			input: input.into(),
			intro,
			out,
			expected: expected.into(),
		}
	}
}

fn convert_data() -> Vec<ConvertTest> {
	vec![
		ConvertTest::new("0",        ColorMode::Hex, ColorMode::Rgb, "(0, 0, 0)"),
		ConvertTest::new("ffffff",   ColorMode::Hex, ColorMode::Rgb, "(255, 255, 255)"),
		ConvertTest::new("012345",   ColorMode::Hex, ColorMode::Hex, "003333"),
		ConvertTest::new("ff0000",   ColorMode::Hex, ColorMode::Hex, "ff0000"),
		ConvertTest::new("c8",       ColorMode::Hex, ColorMode::Rgb, "(0, 0, 204)"),
		ConvertTest::new("10 20 30", ColorMode::Rgb, ColorMode::Nat, "51"),
		ConvertTest::new("0 51 102", ColorMode::Rgb, ColorMode::Rgb, "(0, 51, 102)"),
		ConvertTest::new("200",      ColorMode::Nat, ColorMode::Hex, "0000cc"),
		ConvertTest::new("16777215", ColorMode::Nat, ColorMode::Nat, "16777215"),
		ConvertTest::new("16777215", ColorMode::Nat, ColorMode::Hex, "ffffff"),
	]
}

#[test]
fn color_conversion() {
	for (i, test) in convert_data().iter().enumerate() {
		let parsed = parse_color(&test.input, test.intro);
		assert!(parsed.is_ok(), "{i}: parsing failed!");

		let result = format_color(parsed.unwrap().quantize(), test.out);
		assert_eq!(result, test.expected, "{i}: converted color doesn't match!");
	}
}

#[test]
fn hex_format_parse_round_trip() {
	for packed in [0x000000_u32, 0x0000C8, 0x123456, 0xABCDEF, 0xFFFFFF] {
		let color = Color::from(packed);
		let formatted = format_color(color, ColorMode::Hex);
		assert_eq!(parse_color(&formatted, ColorMode::Hex), Ok(color));
	}
}

#[test]
fn hex_input_validation() {
	assert_eq!(
		parse_color("1000000", ColorMode::Hex),
		Err(ConvertError::OutOfRange { value: 0x1000000, mode: ColorMode::Hex })
	);
	assert_eq!(
		parse_color("ghijkl", ColorMode::Hex),
		Err(ConvertError::InvalidNumber { token: "ghijkl".to_string(), mode: ColorMode::Hex })
	);
}

#[test]
fn nat_input_validation() {
	assert_eq!(
		parse_color("16777216", ColorMode::Nat),
		Err(ConvertError::OutOfRange { value: 16777216, mode: ColorMode::Nat })
	);
	assert_eq!(
		parse_color("ff", ColorMode::Nat),
		Err(ConvertError::InvalidNumber { token: "ff".to_string(), mode: ColorMode::Nat })
	);
}

#[test]
fn rgb_input_validation() {
	assert_eq!(
		parse_color("300 0 0", ColorMode::Rgb),
		Err(ConvertError::OutOfRange { value: 300, mode: ColorMode::Rgb })
	);
	assert_eq!(
		parse_color("0 0", ColorMode::Rgb),
		Err(ConvertError::MalformedRgbInput { input: "0 0".to_string(), count: 2 })
	);
	assert_eq!(
		parse_color("0 0 0 0", ColorMode::Rgb),
		Err(ConvertError::MalformedRgbInput { input: "0 0 0 0".to_string(), count: 4 })
	);
	assert_eq!(
		parse_color("0 x 0", ColorMode::Rgb),
		Err(ConvertError::InvalidNumber { token: "x".to_string(), mode: ColorMode::Rgb })
	);
}

#[test]
fn hex_range_errors_render_in_hex() {
	let err = parse_color("1000000", ColorMode::Hex).unwrap_err();
	assert_eq!(err.to_string(), "0x1000000 is outside the allowed range for \"hex\": (0x0..0xffffff)");
}

#[test]
fn mode_parsing() {
	assert_eq!(ColorMode::from_str("hex"), Ok(ColorMode::Hex));
	assert_eq!(ColorMode::from_str("rgb"), Ok(ColorMode::Rgb));
	assert_eq!(ColorMode::from_str("nat"), Ok(ColorMode::Nat));
	assert_eq!(
		ColorMode::from_str("hsv"),
		Err(ConvertError::UnknownMode { mode: "hsv".to_string() })
	);
}
