//! Visual theming for charts.
//!
//! Provides the default series palette and the colors used for axes, grid,
//! labels and tooltips.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0..=1`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// CSS string, `rgba()` when translucent.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			self.to_css_rgb()
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// `#rrggbb` hex string, ignoring alpha.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`, `#RGB`) and `rgb()`/`rgba()` functional notation.
	/// Named colors and anything malformed return `None`.
	pub fn parse(color_str: &str) -> Option<Self> {
		let s = color_str.trim();
		if let Some(digits) = s.strip_prefix('#') {
			if !digits.is_ascii() {
				return None;
			}
			let hex = |h: &str| u8::from_str_radix(h, 16).ok();
			return match digits.len() {
				6 => Some(Self::rgb(hex(&digits[0..2])?, hex(&digits[2..4])?, hex(&digits[4..6])?)),
				3 => {
					let short = |i: usize| hex(&digits[i..i + 1]).map(|v| v * 17);
					Some(Self::rgb(short(0)?, short(1)?, short(2)?))
				}
				_ => None,
			};
		}

		let args = s
			.strip_prefix("rgba(")
			.or_else(|| s.strip_prefix("rgb("))?
			.strip_suffix(')')?;
		let nums: Vec<&str> = args.split(',').map(str::trim).collect();
		if !(3..=4).contains(&nums.len()) {
			return None;
		}
		let a = match nums.get(3) {
			Some(alpha) => alpha.parse().ok()?,
			None => 1.0,
		};
		Some(Self::rgba(nums[0].parse().ok()?, nums[1].parse().ok()?, nums[2].parse().ok()?, a))
	}
}

/// Default series palette, cycled by dataset (or pie slice) position.
pub const PALETTE: [Color; 8] = [
	Color::rgb(59, 130, 246),  // Blue
	Color::rgb(16, 185, 129),  // Emerald
	Color::rgb(245, 158, 11),  // Amber
	Color::rgb(239, 68, 68),   // Red
	Color::rgb(139, 92, 246),  // Violet
	Color::rgb(236, 72, 153),  // Pink
	Color::rgb(6, 182, 212),   // Cyan
	Color::rgb(132, 204, 22),  // Lime
];

/// Palette color for position `index`; wraps around, never random.
pub fn palette_color(index: usize) -> Color {
	PALETTE[index % PALETTE.len()]
}

/// Colors for everything that is not a data mark.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
	/// Chart background.
	pub background: Color,
	/// Axis lines.
	pub axis: Color,
	/// Grid lines.
	pub grid: Color,
	/// Labels and hover outlines.
	pub text: Color,
	/// Tooltip box fill.
	pub tooltip_background: Color,
	/// Tooltip text.
	pub tooltip_text: Color,
	/// Stroke drawn between adjacent pie slices.
	pub slice_border: Color,
	/// How much a hovered mark is lightened.
	pub hover_lighten: f64,
}

impl ChartTheme {
	/// Dark theme matching the news app's default surface.
	pub fn dark() -> Self {
		Self {
			background: Color::rgba(0, 0, 0, 0.0),
			axis: Color::rgb(100, 116, 139),
			grid: Color::rgba(148, 163, 184, 0.15),
			text: Color::rgb(203, 213, 225),
			tooltip_background: Color::rgba(15, 23, 42, 0.92),
			tooltip_text: Color::rgb(241, 245, 249),
			slice_border: Color::rgb(30, 41, 59),
			hover_lighten: 0.2,
		}
	}

	/// Light variant for printed or exported charts.
	pub fn light() -> Self {
		Self {
			background: Color::rgb(255, 255, 255),
			axis: Color::rgb(71, 85, 105),
			grid: Color::rgba(100, 116, 139, 0.2),
			text: Color::rgb(30, 41, 59),
			tooltip_background: Color::rgba(255, 255, 255, 0.95),
			tooltip_text: Color::rgb(15, 23, 42),
			slice_border: Color::rgb(255, 255, 255),
			hover_lighten: 0.15,
		}
	}
}

impl Default for ChartTheme {
	fn default() -> Self {
		Self::dark()
	}
}
