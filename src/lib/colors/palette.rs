use std::fmt::{Display, Formatter};

/// The six channel values the 216-color web-safe palette is built from.
pub const WEB_SAFE_LEVELS: [u8; 6] = [0x00, 0x33, 0x66, 0x99, 0xCC, 0xFF];

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:06X}", self.to_u32())
	}
}

/// Returns the palette level nearest to the channel value `c`.
///
/// Scans the palette in order and only replaces the running selection when a
/// strictly smaller distance is found, so the first-seen minimal candidate
/// wins. With a step-0x33 palette no integer input is ever equidistant to two
/// levels, but the strict comparison keeps midpoint behavior well-defined
/// should the levels ever change.
pub fn nearest_level(c: u8) -> u8 {
	// every channel value has a level at distance < 0xFF, so this always shrinks
	let mut min_dist = 0xFF;
	let mut nearest = WEB_SAFE_LEVELS[0];

	for level in WEB_SAFE_LEVELS {
		let dist = c.abs_diff(level);
		if dist < min_dist {
			min_dist = dist;
			nearest = level;
		}
	}

	nearest
}

impl Color {
	pub fn to_u32(self) -> u32 {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		rgb
	}

	/// Snaps every channel to its nearest web-safe level, independently.
	///
	/// Channels don't influence each other, so the result can land in a
	/// different hue family than the input (012345 maps to 003333, a blue
	/// turning green). That drift is inherent to per-channel matching and is
	/// intentional here.
	pub fn quantize(self) -> Color {
		Color {
			r: nearest_level(self.r),
			g: nearest_level(self.g),
			b: nearest_level(self.b),
		}
	}

	pub fn is_web_safe(&self) -> bool {
		WEB_SAFE_LEVELS.contains(&self.r) && WEB_SAFE_LEVELS.contains(&self.g) && WEB_SAFE_LEVELS.contains(&self.b)
	}
}
