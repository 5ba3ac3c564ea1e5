//! Locale-aware number formatting for tooltips, tick labels and table cells.

/// Digit and separator set used when printing numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberLocale {
	/// ASCII digits, `,` grouping, `.` decimal point.
	#[default]
	Latin,
	/// Extended Arabic-Indic digits, `٬` grouping, `٫` decimal point.
	Persian,
}

impl NumberLocale {
	fn group_separator(self) -> char {
		match self {
			NumberLocale::Latin => ',',
			NumberLocale::Persian => '٬',
		}
	}

	fn decimal_separator(self) -> char {
		match self {
			NumberLocale::Latin => '.',
			NumberLocale::Persian => '٫',
		}
	}

	fn percent_sign(self) -> char {
		match self {
			NumberLocale::Latin => '%',
			NumberLocale::Persian => '٪',
		}
	}

	fn digit(self, d: char) -> char {
		match self {
			NumberLocale::Latin => d,
			NumberLocale::Persian => d
				.to_digit(10)
				.and_then(|n| char::from_u32('۰' as u32 + n))
				.unwrap_or(d),
		}
	}
}

/// Most fraction digits printed for a raw value.
const VALUE_FRACTION_DIGITS: usize = 3;

/// Format a raw value with grouping separators and at most three fraction digits.
pub fn format_value(value: f64, locale: NumberLocale) -> String {
	format_fixed(value, VALUE_FRACTION_DIGITS, true, locale)
}

/// Format a percentage with exactly one fraction digit and a percent sign.
pub fn format_percent(percent: f64, locale: NumberLocale) -> String {
	let mut out = format_fixed(percent, 1, false, locale);
	out.push(locale.percent_sign());
	out
}

fn format_fixed(value: f64, digits: usize, trim: bool, locale: NumberLocale) -> String {
	let value = if value.is_finite() { value } else { 0.0 };
	let fixed = format!("{:.*}", digits, value.abs());
	let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
	let frac_part = if trim {
		frac_part.trim_end_matches('0')
	} else {
		frac_part
	};

	let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');
	let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
	if value < 0.0 && !is_zero {
		out.push('-');
	}

	let len = int_part.len();
	for (i, d) in int_part.chars().enumerate() {
		if i > 0 && (len - i) % 3 == 0 {
			out.push(locale.group_separator());
		}
		out.push(locale.digit(d));
	}

	if !frac_part.is_empty() {
		out.push(locale.decimal_separator());
		out.extend(frac_part.chars().map(|d| locale.digit(d)));
	}
	out
}
