//! Parsing RFC 822 / RFC 5322 date-time strings.
//!
//! Accepts the `date-time` production of RFC 5322 section 3.3 plus the obsolete forms of
//! section 4.3 that real mail still contains: comments and folding whitespace between any two
//! tokens, 2- and 3-digit years, legacy North American zone names, and single-letter military
//! zones. A leap-second reading of `60` is coerced down to `59`.
//!
//! Two deliberate relaxations beyond the RFC grammar:
//!
//! - Folding whitespace accepts a bare LF (not just CRLF) before the continuation blank, since
//!   messages that passed through Unix tooling commonly arrive that way.
//! - The day-of-week prefix, when present, is validated as a weekday name but never checked
//!   against the date itself; mail in the wild gets this wrong routinely and the date fields
//!   are authoritative.
//!
//! A `-0000` zone (and any unrecognized zone name) parses as [`TimeZone::Unknown`]: a zero
//! offset that is not a claim of UTC. Military single-letter zones parse as `Unknown` too,
//! except `J` which RFC 5322 leaves unassigned and which is rejected.
//!
//! # Examples
//!
//! ```
//! # use civiltime::rfc822::parse_rfc822;
//! # use civiltime::tz::TimeZone;
//! let z = parse_rfc822(b"Sat, 6 Jan 1990 12:14:19 -0800").unwrap();
//! assert_eq!(z.datetime.date().year(), 1990);
//! assert_eq!(z.datetime.time().hour(), 12);
//! assert_eq!(z.zone, TimeZone::Fixed(-8 * 3600));
//! ```

use core::{error, fmt};
use crate::calendar::{Month, Weekday};
use crate::datetime::{Date, DateTime, DateTimeError, Time};
use crate::tz::{TimeZone, ZonedDateTime};

/// The error type for RFC 822 date-time parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rfc822Error {
	/// The input ended before a complete date-time was read.
	TooShort,
	/// The day-of-week prefix was not a weekday abbreviation followed by a comma.
	InvalidDayOfWeek,
	/// The day of the month was not one or two digits.
	InvalidDay,
	/// The month was not one of the twelve case-sensitive abbreviations.
	InvalidMonth,
	/// The year was a single digit, overflowed, or resolved below 1900.
	InvalidYear,
	/// The time of day did not match `HH:MM` or `HH:MM:SS` with 2-digit fields.
	InvalidTime,
	/// The zone was a malformed numeric offset or the unassigned military letter `J`.
	InvalidZone,
	/// Printable characters remained after the date-time.
	TrailingInput,
	/// The fields were well-formed but name an impossible date or time.
	InvalidDate(DateTimeError)
}

impl fmt::Display for Rfc822Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rfc822Error::TooShort => f.write_str("Input too short"),
			Rfc822Error::InvalidDayOfWeek => f.write_str("Invalid day of week"),
			Rfc822Error::InvalidDay => f.write_str("Invalid day of month"),
			Rfc822Error::InvalidMonth => f.write_str("Invalid month"),
			Rfc822Error::InvalidYear => f.write_str("Invalid year"),
			Rfc822Error::InvalidTime => f.write_str("Invalid time of day"),
			Rfc822Error::InvalidZone => f.write_str("Invalid time zone"),
			Rfc822Error::TrailingInput => f.write_str("Trailing input after date-time"),
			Rfc822Error::InvalidDate(e) => write!(f, "Invalid date: {}", e)
		}
	}
}

impl error::Error for Rfc822Error {}

/// Skip a comment starting at `s[0] == b'('`, returning the index just past its closing
/// parenthesis. Comments nest, and a backslash escapes the following byte. Returns `None` if
/// the comment never closes.
fn skip_comment(s: &[u8]) -> Option<usize> {
	let mut depth = 0usize;
	let mut i = 0;
	while i < s.len() {
		match s[i] {
			b'(' => depth += 1,
			b')' => {
				depth -= 1;
				if depth == 0 {
					return Some(i + 1);
				}
			}
			// Escaped byte, even ')' or '('
			b'\\' => i += 1,
			_ => ()
		}
		i += 1;
	}
	None
}

/// Skip comments and folding whitespace: blanks, CRLF (or bare LF) immediately followed by a
/// blank, and parenthesized comments. Returns the empty slice if a comment never closes, which
/// downstream stages report as truncation.
fn skip_cfws(mut s: &[u8]) -> &[u8] {
	loop {
		match s.first() {
			Some(b' ' | b'\t') => s = &s[1..],
			Some(b'\r') if s.len() >= 3 && s[1] == b'\n' && (s[2] == b' ' || s[2] == b'\t') => {
				s = &s[3..];
			}
			Some(b'\n') if s.len() >= 2 && (s[1] == b' ' || s[1] == b'\t') => s = &s[2..],
			Some(b'(') => match skip_comment(s) {
				Some(n) => s = &s[n..],
				None => return &[]
			},
			_ => return s
		}
	}
}

/// Split off the leading run of ASCII digits.
fn digit_run(s: &[u8]) -> (&[u8], &[u8]) {
	let n = s.iter().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
	s.split_at(n)
}

/// Split off the leading run of ASCII letters.
fn alpha_run(s: &[u8]) -> (&[u8], &[u8]) {
	let n = s.iter().position(|b| !b.is_ascii_alphabetic()).unwrap_or(s.len());
	s.split_at(n)
}

/// Read a non-empty digit run as a number, or `None` on empty input or overflow.
fn digits(s: &[u8]) -> Option<u32> {
	if s.is_empty() {
		return None;
	}
	let mut v: u32 = 0;
	for &b in s {
		v = v.checked_mul(10)?.checked_add((b - b'0') as u32)?;
	}
	Some(v)
}

/// Resolve a year digit run per RFC 5322's obsolete forms: 2 digits below 50 mean 20xx, other
/// 2-digit values and all 3-digit values are offsets from 1900, and 4 or more digits are
/// literal. Anything resolving below 1900 is rejected.
fn resolve_year(run: &[u8]) -> Result<i16, Rfc822Error> {
	let v = digits(run).ok_or(Rfc822Error::InvalidYear)?;
	let year = match run.len() {
		0 | 1 => return Err(Rfc822Error::InvalidYear),
		2 if v < 50 => v + 2000,
		2 | 3 => v + 1900,
		_ => v
	};
	if year < 1900 || year > i16::MAX as u32 {
		Err(Rfc822Error::InvalidYear)
	} else {
		Ok(year as i16)
	}
}

/// Parse the zone token, returning the zone and the remaining input.
fn parse_zone(s: &[u8]) -> Result<(TimeZone, &[u8]), Rfc822Error> {
	match s.first().copied() {
		None => Err(Rfc822Error::TooShort),
		Some(sign @ (b'+' | b'-')) => {
			let (run, rest) = digit_run(&s[1..]);
			if run.len() != 4 {
				return Err(Rfc822Error::InvalidZone);
			}
			// Four digits cannot overflow
			let v = digits(run).ok_or(Rfc822Error::InvalidZone)?;
			let (hh, mm) = (v / 100, v % 100);
			if hh > 23 || mm > 59 {
				return Err(Rfc822Error::InvalidZone);
			}
			let zone = if v == 0 {
				// "-0000" asserts the offset is unknown; "+0000" asserts UTC
				if sign == b'-' { TimeZone::Unknown } else { TimeZone::Utc }
			} else {
				let off = (hh * 3600 + mm * 60) as i32;
				TimeZone::Fixed(if sign == b'-' { -off } else { off })
			};
			Ok((zone, rest))
		}
		Some(_) => {
			let (run, rest) = alpha_run(s);
			let zone = match run {
				b"" => return Err(Rfc822Error::InvalidZone),
				b"UT" | b"GMT" => TimeZone::Utc,
				b"EST" => TimeZone::Fixed(-5 * 3600),
				b"EDT" => TimeZone::Fixed(-4 * 3600),
				b"CST" => TimeZone::Fixed(-6 * 3600),
				b"CDT" => TimeZone::Fixed(-5 * 3600),
				b"MST" => TimeZone::Fixed(-7 * 3600),
				b"MDT" => TimeZone::Fixed(-6 * 3600),
				b"PST" => TimeZone::Fixed(-8 * 3600),
				b"PDT" => TimeZone::Fixed(-7 * 3600),
				// The military zone grammar skips J
				b"J" | b"j" => return Err(Rfc822Error::InvalidZone),
				_ => TimeZone::Unknown
			};
			Ok((zone, rest))
		}
	}
}

/// Parse an RFC 822 / RFC 5322 date-time, including the obsolete forms.
///
/// The zone token is required. Trailing comments and whitespace are allowed; any other
/// trailing printable character is an error.
///
/// # Errors
///
/// Returns the [`Rfc822Error`] variant naming the first token that failed, or
/// [`Rfc822Error::InvalidDate`] if every token was well-formed but the fields name an
/// impossible date or time (e.g. February 29 of a non-leap year).
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::Month;
/// # use civiltime::rfc822::parse_rfc822;
/// # use civiltime::tz::TimeZone;
/// let z = parse_rfc822(b"9 Jul 2002 13:11 +0000").unwrap();
/// assert_eq!(z.datetime.date().month(), Month::July);
/// assert_eq!(z.datetime.time().second(), 0);
/// assert!(z.zone.is_utc());
///
/// // "-0000" means the sender's offset is unknown, which is not a UTC claim
/// let z = parse_rfc822(b"21 Dec 2012 13:14:15 -0000").unwrap();
/// assert_eq!(z.zone, TimeZone::Unknown);
/// ```
pub fn parse_rfc822(input: &[u8]) -> Result<ZonedDateTime, Rfc822Error> {
	let mut s = skip_cfws(input);

	// Optional day-of-week prefix, validated as a name but never against the date
	if s.first().is_some_and(|b| b.is_ascii_alphabetic()) {
		let (run, rest) = alpha_run(s);
		if Weekday::from_abbrev(run).is_none() {
			return Err(Rfc822Error::InvalidDayOfWeek);
		}
		s = skip_cfws(rest);
		match s.first() {
			Some(b',') => s = skip_cfws(&s[1..]),
			_ => return Err(Rfc822Error::InvalidDayOfWeek)
		}
	}
	if s.is_empty() {
		return Err(Rfc822Error::TooShort);
	}

	// Day of the month, 1 or 2 digits
	let (run, rest) = digit_run(s);
	if run.is_empty() || run.len() > 2 {
		return Err(Rfc822Error::InvalidDay);
	}
	let day = digits(run).ok_or(Rfc822Error::InvalidDay)? as u8;
	s = skip_cfws(rest);
	if s.is_empty() {
		return Err(Rfc822Error::TooShort);
	}

	// Month abbreviation, case sensitive
	let (run, rest) = alpha_run(s);
	let mon = Month::from_abbrev(run).ok_or(Rfc822Error::InvalidMonth)?;
	s = skip_cfws(rest);
	if s.is_empty() {
		return Err(Rfc822Error::TooShort);
	}

	// Year, with the obsolete 2- and 3-digit forms
	let (run, rest) = digit_run(s);
	let year = resolve_year(run)?;
	s = skip_cfws(rest);
	if s.is_empty() {
		return Err(Rfc822Error::TooShort);
	}

	// HH:MM with an optional :SS; each field exactly two digits, CFWS tolerated around the
	// colons per the obsolete grammar
	let (run, rest) = digit_run(s);
	if run.len() != 2 {
		return Err(Rfc822Error::InvalidTime);
	}
	let hour = digits(run).ok_or(Rfc822Error::InvalidTime)? as u8;
	s = skip_cfws(rest);
	if s.first() != Some(&b':') {
		return Err(Rfc822Error::InvalidTime);
	}
	let (run, rest) = digit_run(skip_cfws(&s[1..]));
	if run.len() != 2 {
		return Err(Rfc822Error::InvalidTime);
	}
	let min = digits(run).ok_or(Rfc822Error::InvalidTime)? as u8;
	s = skip_cfws(rest);
	let mut sec = 0;
	if s.first() == Some(&b':') {
		let (run, rest) = digit_run(skip_cfws(&s[1..]));
		if run.len() != 2 {
			return Err(Rfc822Error::InvalidTime);
		}
		sec = digits(run).ok_or(Rfc822Error::InvalidTime)? as u8;
		// A positive leap second reads as second 60; fold it into the previous second
		if sec == 60 {
			sec = 59;
		}
		s = skip_cfws(rest);
	}

	// The zone token is mandatory
	let (zone, rest) = parse_zone(s)?;

	// Only comments and whitespace may follow
	for &b in skip_cfws(rest) {
		if (33..=126).contains(&b) {
			return Err(Rfc822Error::TrailingInput);
		}
	}

	let date = Date::new(year, mon, day).map_err(Rfc822Error::InvalidDate)?;
	let time = Time::new(hour, min, sec, 0).map_err(Rfc822Error::InvalidDate)?;
	Ok(ZonedDateTime { datetime: DateTime::new(date, time), zone })
}
