//! Exact conversions between the tick counter and external epoch formats.
//!
//! The crate's canonical instant representation is a signed count of hnsecs (100-nanosecond
//! ticks) since 0001-01-01T00:00:00 UTC. This module maps that counter to and from Unix
//! `time_t` seconds, FILETIME-style 64-bit tick counts (1601 epoch), DOS packed 32-bit
//! date/times, and the ISO fractional-second suffix text form. All mappings are exact integer
//! arithmetic; the only clamping is the documented `time_t` narrowing.
//!
//! # Examples
//!
//! ```
//! # use civiltime::epoch::{ticks_from_unix, unix_from_ticks, UNIX_EPOCH_TICKS};
//! assert_eq!(ticks_from_unix(0), UNIX_EPOCH_TICKS);
//! assert_eq!(unix_from_ticks(ticks_from_unix(1_718_617_807)), 1_718_617_807);
//! assert_eq!(unix_from_ticks(ticks_from_unix(-86_400)), -86_400);
//! ```

use core::{error, fmt};
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};
use crate::calendar::Month;
use crate::datetime::{Date, DateTime, DateTimeError, Time};
use crate::units::HNSECS_PER_SECOND;

/// Hnsecs from 0001-01-01T00:00:00 to the Unix epoch (1970-01-01T00:00:00).
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;
/// Hnsecs from 0001-01-01T00:00:00 to the FILETIME epoch (1601-01-01T00:00:00).
pub const FILETIME_EPOCH_TICKS: i64 = 504_911_232_000_000_000;
/// First year representable in the DOS packed date/time format.
const DOS_MIN_YEAR: i16 = 1980;
/// Last year representable in the DOS packed date/time format.
const DOS_MAX_YEAR: i16 = 2107;

/// The error type for epoch and text-suffix conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpochError {
	/// The all-zero DOS packed value is reserved as "no timestamp".
	ReservedDosTime,
	/// A DOS packed field failed calendar validation (e.g. a day of 0).
	InvalidDosTime(DateTimeError),
	/// The year cannot be encoded in the DOS format's [1980, 2107] range.
	DosYearOutOfRange(i16),
	/// The value cannot be represented as (or converted from) a FILETIME tick count.
	FiletimeOutOfRange,
	/// The ISO fractional-second suffix was malformed (missing leading dot, empty or overlong
	/// digit run, or a non-digit character).
	InvalidFraction
}

impl fmt::Display for EpochError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EpochError::ReservedDosTime => f.write_str("DOS time of zero is reserved"),
			EpochError::InvalidDosTime(e) => write!(f, "Invalid DOS time: {}", e),
			EpochError::DosYearOutOfRange(y) => write!(f, "Year not representable in DOS time: {}", y),
			EpochError::FiletimeOutOfRange => f.write_str("Value not representable as FILETIME"),
			EpochError::InvalidFraction => f.write_str("Malformed fractional-second suffix")
		}
	}
}

impl error::Error for EpochError {}

/// Convert Unix `time_t` seconds to ticks.
///
/// Exact for the entire range of Unix times whose tick count fits in `i64`; saturates at the
/// `i64` bounds beyond that.
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::ticks_from_unix;
/// assert_eq!(ticks_from_unix(0), 621_355_968_000_000_000);
/// assert_eq!(ticks_from_unix(1), 621_355_968_010_000_000);
/// assert_eq!(ticks_from_unix(-1), 621_355_967_990_000_000);
/// ```
pub const fn ticks_from_unix(seconds: i64) -> i64 {
	seconds
		.saturating_mul(HNSECS_PER_SECOND)
		.saturating_add(UNIX_EPOCH_TICKS)
}

/// Convert ticks to Unix `time_t` seconds, truncating sub-second ticks toward zero.
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::unix_from_ticks;
/// assert_eq!(unix_from_ticks(621_355_968_000_000_000), 0);
/// assert_eq!(unix_from_ticks(621_355_968_009_999_999), 0);
/// ```
pub const fn unix_from_ticks(ticks: i64) -> i64 {
	ticks.saturating_sub(UNIX_EPOCH_TICKS) / HNSECS_PER_SECOND
}

/// Convert ticks to 32-bit Unix `time_t` seconds, clamping on overflow.
///
/// When the result does not fit a 32-bit `time_t` it clamps to `i32::MIN`/`i32::MAX` rather
/// than wrapping or failing. This is the one documented clamp in the conversion set.
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::{ticks_from_unix, unix_from_ticks32};
/// assert_eq!(unix_from_ticks32(ticks_from_unix(951_868_800)), 951_868_800);
/// // Beyond 2038: clamps instead of wrapping
/// assert_eq!(unix_from_ticks32(ticks_from_unix(4_000_000_000)), i32::MAX);
/// assert_eq!(unix_from_ticks32(ticks_from_unix(-4_000_000_000)), i32::MIN);
/// ```
pub const fn unix_from_ticks32(ticks: i64) -> i32 {
	let v = unix_from_ticks(ticks);
	if v > i32::MAX as i64 {
		i32::MAX
	} else if v < i32::MIN as i64 {
		i32::MIN
	} else {
		v as i32
	}
}

/// Convert a FILETIME-style tick count (hnsecs since 1601-01-01T00:00:00) to ticks.
///
/// # Errors
///
/// Returns [`EpochError::FiletimeOutOfRange`] if `filetime` is negative or the adjusted
/// counter overflows `i64`.
pub const fn ticks_from_filetime(filetime: i64) -> Result<i64, EpochError> {
	if filetime < 0 {
		return Err(EpochError::FiletimeOutOfRange);
	}
	match filetime.checked_add(FILETIME_EPOCH_TICKS) {
		Some(t) => Ok(t),
		None => Err(EpochError::FiletimeOutOfRange)
	}
}

/// Convert ticks to a FILETIME-style tick count.
///
/// # Errors
///
/// Returns [`EpochError::FiletimeOutOfRange`] for instants before the 1601 epoch (FILETIME
/// counts are non-negative).
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::{filetime_from_ticks, ticks_from_filetime, FILETIME_EPOCH_TICKS};
/// assert_eq!(filetime_from_ticks(FILETIME_EPOCH_TICKS), Ok(0));
/// assert_eq!(ticks_from_filetime(0), Ok(FILETIME_EPOCH_TICKS));
/// assert!(filetime_from_ticks(FILETIME_EPOCH_TICKS - 1).is_err());
/// ```
pub const fn filetime_from_ticks(ticks: i64) -> Result<i64, EpochError> {
	if ticks < FILETIME_EPOCH_TICKS {
		Err(EpochError::FiletimeOutOfRange)
	} else {
		Ok(ticks - FILETIME_EPOCH_TICKS)
	}
}

/// Unpack a DOS 32-bit packed date/time into a calendar value.
///
/// Bit layout: bits 25-31 are the year offset from 1980, 21-24 the month, 16-20 the day,
/// 11-15 the hour, 5-10 the minute, and 0-4 the second divided by two.
///
/// # Errors
///
/// - [`EpochError::ReservedDosTime`] if `packed` is exactly zero (the "no timestamp" sentinel,
///   a convention rather than a numeric accident).
/// - [`EpochError::InvalidDosTime`] if any unpacked field fails calendar validation.
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::Month;
/// # use civiltime::epoch::{datetime_from_dos, EpochError};
/// // Jan 1, 1980 00:00:00
/// let dt = datetime_from_dos(0x0021_0000).unwrap();
/// assert_eq!(dt.date().year(), 1980);
/// assert_eq!(dt.date().month(), Month::January);
/// assert_eq!(dt.date().day(), 1);
/// assert_eq!(datetime_from_dos(0), Err(EpochError::ReservedDosTime));
/// ```
pub fn datetime_from_dos(packed: u32) -> Result<DateTime, EpochError> {
	if packed == 0 {
		return Err(EpochError::ReservedDosTime);
	}
	let year = DOS_MIN_YEAR + ((packed >> 25) & 0x7f) as i16;
	let monnum = ((packed >> 21) & 0x0f) as u8;
	let day = ((packed >> 16) & 0x1f) as u8;
	let hour = ((packed >> 11) & 0x1f) as u8;
	let min = ((packed >> 5) & 0x3f) as u8;
	let sec = ((packed & 0x1f) * 2) as u8;

	let mon = Month::from_number(monnum)
		.ok_or(EpochError::InvalidDosTime(DateTimeError::MonthOutOfRange(monnum)))?;
	let date = Date::new(year, mon, day).map_err(EpochError::InvalidDosTime)?;
	let time = Time::new(hour, min, sec, 0).map_err(EpochError::InvalidDosTime)?;
	Ok(DateTime::new(date, time))
}

/// Pack a calendar value into a DOS 32-bit date/time, truncating odd seconds down.
///
/// # Errors
///
/// Returns [`EpochError::DosYearOutOfRange`] if the year is outside [1980, 2107].
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::Month;
/// # use civiltime::datetime::{Date, DateTime, Time};
/// # use civiltime::epoch::dos_from_datetime;
/// let dt = DateTime::new(
/// 	Date::new(1980, Month::January, 1).unwrap(),
/// 	Time::MIDNIGHT
/// );
/// assert_eq!(dos_from_datetime(dt), Ok(0x0021_0000));
/// ```
pub fn dos_from_datetime(dt: DateTime) -> Result<u32, EpochError> {
	let year = dt.date().year();
	if year < DOS_MIN_YEAR || year > DOS_MAX_YEAR {
		return Err(EpochError::DosYearOutOfRange(year));
	}
	Ok(((year - DOS_MIN_YEAR) as u32) << 25
		| (dt.date().month().number() as u32) << 21
		| (dt.date().day() as u32) << 16
		| (dt.time().hour() as u32) << 11
		| (dt.time().minute() as u32) << 5
		| (dt.time().second() as u32) / 2)
}

/// An ISO fractional-second suffix, e.g. `.1234567`, stored inline.
///
/// Produced by [`fracsec_to_iso`]. The canonical form has trailing zeros stripped and is empty
/// for a zero fraction.
#[derive(Clone, Copy)]
pub struct IsoFraction {
	buf: [u8; 8],
	len: u8
}

impl IsoFraction {
	/// The suffix text, including the leading `.`; empty for a zero fraction.
	pub fn as_str(&self) -> &str {
		// Safety: the buffer is only ever filled with '.' and ASCII digits
		unsafe { core::str::from_utf8_unchecked(&self.buf[..self.len as usize]) }
	}

	/// Whether the suffix is empty (the fraction was zero).
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl fmt::Display for IsoFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Debug for IsoFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_str(), f)
	}
}

impl PartialEq for IsoFraction {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for IsoFraction {}

/// Format a fractional-second remainder as an ISO suffix.
///
/// The suffix is `.` followed by the 7-digit zero-padded hnsec count with trailing zeros
/// stripped; a zero fraction formats as the empty string.
///
/// # Panics
///
/// Panics if `hnsecs` is outside [0, 9999999]; callers must pre-normalize.
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::fracsec_to_iso;
/// assert_eq!(fracsec_to_iso(0).as_str(), "");
/// assert_eq!(fracsec_to_iso(1).as_str(), ".0000001");
/// assert_eq!(fracsec_to_iso(1_234_500).as_str(), ".12345");
/// assert_eq!(fracsec_to_iso(9_999_999).as_str(), ".9999999");
/// ```
pub fn fracsec_to_iso(hnsecs: u32) -> IsoFraction {
	assert!(hnsecs <= 9_999_999, "fractional hnsecs out of range: {}", hnsecs);
	if hnsecs == 0 {
		return IsoFraction { buf: [0; 8], len: 0 };
	}
	let mut buf = [0u8; 8];
	buf[0] = b'.';
	let mut v = hnsecs;
	let mut i = 7;
	while i >= 1 {
		buf[i] = b'0' + (v % 10) as u8;
		v /= 10;
		i -= 1;
	}
	// Strip trailing zeros; at least one digit remains since hnsecs != 0
	let mut len = 8;
	while buf[len - 1] == b'0' {
		len -= 1;
	}
	IsoFraction { buf, len: len as u8 }
}

/// Parse an ISO fractional-second suffix back into hnsecs.
///
/// Empty input means a zero fraction. Otherwise the input must be a leading `.` followed by
/// one to seven ASCII digits; shorter runs are right-padded with zeros to seven digits, so
/// `.12345` and `.1234500` both parse to 1234500.
///
/// # Errors
///
/// Returns [`EpochError::InvalidFraction`] on a missing leading dot, an empty digit run, more
/// than seven digits, or any non-digit character.
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::{fracsec_from_iso, EpochError};
/// assert_eq!(fracsec_from_iso(b""), Ok(0));
/// assert_eq!(fracsec_from_iso(b".1"), Ok(1_000_000));
/// assert_eq!(fracsec_from_iso(b".0000001"), Ok(1));
/// assert_eq!(fracsec_from_iso(b"1234567"), Err(EpochError::InvalidFraction));
/// assert_eq!(fracsec_from_iso(b".12345678"), Err(EpochError::InvalidFraction));
/// assert_eq!(fracsec_from_iso(b"."), Err(EpochError::InvalidFraction));
/// ```
pub fn fracsec_from_iso(bytes: &[u8]) -> Result<u32, EpochError> {
	if bytes.is_empty() {
		return Ok(0);
	}
	let digits = match bytes.split_first() {
		Some((b'.', rest)) => rest,
		_ => return Err(EpochError::InvalidFraction)
	};
	if digits.is_empty() || digits.len() > 7 {
		return Err(EpochError::InvalidFraction);
	}
	let mut r: u32 = 0;
	for &b in digits {
		match b {
			b'0'..=b'9' => r = r * 10 + (b - b'0') as u32,
			_ => return Err(EpochError::InvalidFraction)
		}
	}
	// Right-pad to 7 digits
	for _ in digits.len()..7 {
		r *= 10;
	}
	Ok(r)
}

/// Get the current time as ticks.
///
/// This function returns `None` if `libc::clock_gettime` fails. It is thread safe.
///
/// # Examples
///
/// ```
/// # use civiltime::epoch::{now_ticks, UNIX_EPOCH_TICKS};
/// let t = now_ticks().expect("Failed to get current time");
/// assert!(t > UNIX_EPOCH_TICKS);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub fn now_ticks() -> Option<i64> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => {
				let t = time.assume_init();
				Some(ticks_from_unix(t.tv_sec).saturating_add(t.tv_nsec as i64 / 100))
			}
			_ => None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unix_roundtrip_test() {
		for &u in &[0i64, 1, -1, 951_868_800, 1_718_617_807, -2_208_988_800, 253_402_300_799] {
			assert_eq!(unix_from_ticks(ticks_from_unix(u)), u, "unix: {}", u);
		}
		assert_eq!(ticks_from_unix(0), UNIX_EPOCH_TICKS);

		// Extreme inputs cannot panic
		ticks_from_unix(i64::MIN);
		ticks_from_unix(i64::MAX);
		unix_from_ticks(i64::MIN);
		unix_from_ticks(i64::MAX);
	}

	#[test]
	fn unix_narrowing_test() {
		assert_eq!(unix_from_ticks32(ticks_from_unix(951_868_800)), 951_868_800);
		assert_eq!(unix_from_ticks32(ticks_from_unix(-951_868_800)), -951_868_800);
		assert_eq!(unix_from_ticks32(ticks_from_unix(i32::MAX as i64)), i32::MAX);
		assert_eq!(unix_from_ticks32(ticks_from_unix(i32::MIN as i64)), i32::MIN);
		// Clamp, not wrap
		assert_eq!(unix_from_ticks32(ticks_from_unix(i32::MAX as i64 + 1)), i32::MAX);
		assert_eq!(unix_from_ticks32(ticks_from_unix(i32::MIN as i64 - 1)), i32::MIN);
	}

	#[test]
	fn unix_gmtime_test() {
		// Cross-check the full tick -> calendar pipeline against libc's gmtime_r
		use core::mem::MaybeUninit;

		for &u in &[5_097_600i64, 17_185_926, 94_694_400, 951_868_800, 1_718_617_807] {
			let utc = unsafe {
				let mut tm = MaybeUninit::<libc::tm>::uninit();
				libc::gmtime_r(&u, tm.as_mut_ptr());
				tm.assume_init()
			};
			let dt = DateTime::from_ticks(ticks_from_unix(u));
			assert_eq!(dt.date().year() as i32, utc.tm_year + 1900, "time: {}", u);
			assert_eq!(dt.date().month().number() as i32, utc.tm_mon + 1, "time: {}", u);
			assert_eq!(dt.date().day() as i32, utc.tm_mday, "time: {}", u);
			assert_eq!(dt.time().hour() as i32, utc.tm_hour, "time: {}", u);
			assert_eq!(dt.time().minute() as i32, utc.tm_min, "time: {}", u);
			assert_eq!(dt.time().second() as i32, utc.tm_sec, "time: {}", u);
			assert_eq!(dt.date().weekday().number() as i32, utc.tm_wday, "time: {}", u);
		}
	}

	#[test]
	fn filetime_test() {
		assert_eq!(ticks_from_filetime(0), Ok(FILETIME_EPOCH_TICKS));
		assert_eq!(filetime_from_ticks(FILETIME_EPOCH_TICKS), Ok(0));
		assert_eq!(filetime_from_ticks(UNIX_EPOCH_TICKS), Ok(UNIX_EPOCH_TICKS - FILETIME_EPOCH_TICKS));
		assert_eq!(ticks_from_filetime(UNIX_EPOCH_TICKS - FILETIME_EPOCH_TICKS), Ok(UNIX_EPOCH_TICKS));

		// Before the 1601 epoch
		assert_eq!(filetime_from_ticks(FILETIME_EPOCH_TICKS - 1), Err(EpochError::FiletimeOutOfRange));
		assert_eq!(filetime_from_ticks(0), Err(EpochError::FiletimeOutOfRange));
		// Negative and overflowing counters
		assert_eq!(ticks_from_filetime(-1), Err(EpochError::FiletimeOutOfRange));
		assert_eq!(ticks_from_filetime(i64::MAX), Err(EpochError::FiletimeOutOfRange));
	}

	#[test]
	fn dos_unpack_test() {
		// Jan 1, 1980 00:00:00 is the smallest meaningful packed value
		let dt = datetime_from_dos(0x0021_0000).unwrap();
		assert_eq!(dt.date(), Date::new(1980, Month::January, 1).unwrap());
		assert_eq!(dt.time(), Time::MIDNIGHT);

		// Zero is reserved, not a range error
		assert_eq!(datetime_from_dos(0), Err(EpochError::ReservedDosTime));

		// A day of 0 fails calendar validation
		assert_eq!(
			datetime_from_dos(0x0020_0000),
			Err(EpochError::InvalidDosTime(DateTimeError::DayOutOfRange {
				year: 1980,
				mon: Month::January,
				day: 0
			}))
		);
		// Month 15 is out of range
		assert_eq!(
			datetime_from_dos(0x01e1_0000),
			Err(EpochError::InvalidDosTime(DateTimeError::MonthOutOfRange(15)))
		);
	}

	#[test]
	fn dos_pack_test() {
		let dt = DateTime::new(
			Date::new(1980, Month::January, 1).unwrap(),
			Time::MIDNIGHT
		);
		assert_eq!(dos_from_datetime(dt), Ok(0x0021_0000));

		// Representable range is [1980, 2107]
		let dt = DateTime::new(Date::new(1979, Month::December, 31).unwrap(), Time::MIDNIGHT);
		assert_eq!(dos_from_datetime(dt), Err(EpochError::DosYearOutOfRange(1979)));
		let dt = DateTime::new(Date::new(2108, Month::January, 1).unwrap(), Time::MIDNIGHT);
		assert_eq!(dos_from_datetime(dt), Err(EpochError::DosYearOutOfRange(2108)));
		let dt = DateTime::new(Date::new(2107, Month::December, 31).unwrap(), Time::new(23, 59, 58, 0).unwrap());
		assert!(dos_from_datetime(dt).is_ok());
	}

	#[test]
	fn dos_roundtrip_test() {
		// Round-trip a spread of valid values at the format's 2-second resolution
		let mut dt = DateTime::new(
			Date::new(1980, Month::January, 1).unwrap(),
			Time::new(0, 0, 0, 0).unwrap()
		);
		for _ in 0..1000 {
			let packed = dos_from_datetime(dt).unwrap();
			assert_eq!(datetime_from_dos(packed), Ok(dt), "datetime: {:?}", dt);
			// Step by a prime-ish stride of even seconds to hit varied fields
			dt = dt.add_duration(crate::units::Duration::from_hnsecs(40_059_860_000_000));
			// Keep seconds even for exact round-tripping
			let t = dt.time();
			let sec = t.second() & !1;
			dt = DateTime::new(dt.date(), Time::new(t.hour(), t.minute(), sec, 0).unwrap());
		}

		// Odd seconds truncate down by one
		let dt = DateTime::new(
			Date::new(2000, Month::June, 15).unwrap(),
			Time::new(12, 30, 31, 0).unwrap()
		);
		let packed = dos_from_datetime(dt).unwrap();
		let back = datetime_from_dos(packed).unwrap();
		assert_eq!(back.time().second(), 30);
	}

	#[test]
	fn iso_fraction_format_test() {
		assert_eq!(fracsec_to_iso(0).as_str(), "");
		assert!(fracsec_to_iso(0).is_empty());
		assert_eq!(fracsec_to_iso(1).as_str(), ".0000001");
		assert_eq!(fracsec_to_iso(5_000_000).as_str(), ".5");
		assert_eq!(fracsec_to_iso(1_234_500).as_str(), ".12345");
		assert_eq!(fracsec_to_iso(1_234_567).as_str(), ".1234567");
		assert_eq!(fracsec_to_iso(9_999_999).as_str(), ".9999999");
	}

	#[test]
	#[should_panic]
	fn iso_fraction_contract_test() {
		fracsec_to_iso(10_000_000);
	}

	#[test]
	fn iso_fraction_parse_test() {
		assert_eq!(fracsec_from_iso(b""), Ok(0));
		assert_eq!(fracsec_from_iso(b".1"), Ok(1_000_000));
		assert_eq!(fracsec_from_iso(b".12345"), Ok(1_234_500));
		assert_eq!(fracsec_from_iso(b".1234567"), Ok(1_234_567));
		assert_eq!(fracsec_from_iso(b".0000001"), Ok(1));

		assert_eq!(fracsec_from_iso(b"."), Err(EpochError::InvalidFraction));
		assert_eq!(fracsec_from_iso(b"5"), Err(EpochError::InvalidFraction));
		assert_eq!(fracsec_from_iso(b".12345678"), Err(EpochError::InvalidFraction));
		assert_eq!(fracsec_from_iso(b".12a"), Err(EpochError::InvalidFraction));
		assert_eq!(fracsec_from_iso(b"x.1"), Err(EpochError::InvalidFraction));
	}

	#[test]
	fn iso_fraction_roundtrip_test() {
		// Canonical forms round-trip exactly over the whole hnsec range
		for h in 0..10_000_000u32 {
			let s = fracsec_to_iso(h);
			assert_eq!(fracsec_from_iso(s.as_str().as_bytes()), Ok(h), "hnsecs: {}", h);
		}
	}

	#[cfg(feature = "now")]
	#[test]
	fn now_ticks_test() {
		let t = now_ticks().expect("Failed to get current time");
		// Sometime after 2020
		assert!(t > ticks_from_unix(1_577_836_800));
	}
}
