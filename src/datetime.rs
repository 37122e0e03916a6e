//! Validated civil date/time values and calendar-safe arithmetic.
//!
//! [`Date`], [`Time`] and [`DateTime`] are immutable value types whose constructors validate
//! every field; arithmetic produces new values and revalidates. Adding whole months or years
//! is calendar-aware and takes a [`DayOverflow`] policy that decides what happens when the
//! landing month is too short for the day (January 31 plus one month is not a date). Adding a
//! fixed-unit [`Duration`] goes through the tick representation and carries through day, month
//! and year boundaries, including across the year 0 / year 1 boundary.
//!
//! # Examples
//!
//! ```
//! # use civiltime::calendar::Month;
//! # use civiltime::datetime::{Date, DayOverflow};
//! let d = Date::new(2000, Month::January, 31).unwrap();
//! assert_eq!(
//! 	d.add_months(1, DayOverflow::Allow).unwrap(),
//! 	Date::new(2000, Month::March, 2).unwrap()
//! );
//! assert_eq!(
//! 	d.add_months(1, DayOverflow::Clamp).unwrap(),
//! 	Date::new(2000, Month::February, 29).unwrap()
//! );
//! ```

use core::{error, fmt};
use core::ops::{Add, Sub};
use crate::calendar::{
	days_per_month,
	daycount_from_ymd,
	wday_from_daycount,
	ymd_from_daycount,
	Month,
	Weekday,
	MONTHS
};
use crate::units::{Duration, HNSECS_PER_DAY, HNSECS_PER_HOUR, HNSECS_PER_MINUTE, HNSECS_PER_SECOND};

/// The error type for constructing and transforming civil date/time values.
///
/// Each variant names the offending field and carries its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateTimeError {
	/// The month number was outside [1, 12].
	MonthOutOfRange(u8),
	/// The day was outside [1, N] where N is the length of the given month.
	DayOutOfRange { year: i16, mon: Month, day: u8 },
	/// The hour was outside [0, 23].
	HourOutOfRange(u8),
	/// The minute was outside [0, 59].
	MinuteOutOfRange(u8),
	/// The second was outside [0, 59].
	SecondOutOfRange(u8),
	/// The fractional-second remainder was outside [0, 9999999] hnsecs.
	FracOutOfRange(u32),
	/// Calendar arithmetic landed on a year outside the representable [`i16`] range.
	YearOutOfRange(i64)
}

impl fmt::Display for DateTimeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DateTimeError::MonthOutOfRange(m) => write!(f, "Month out of range: {}", m),
			DateTimeError::DayOutOfRange { year, mon, day } => {
				write!(f, "Day out of range for {:?} {}: {}", mon, year, day)
			}
			DateTimeError::HourOutOfRange(h) => write!(f, "Hour out of range: {}", h),
			DateTimeError::MinuteOutOfRange(m) => write!(f, "Minute out of range: {}", m),
			DateTimeError::SecondOutOfRange(s) => write!(f, "Second out of range: {}", s),
			DateTimeError::FracOutOfRange(x) => write!(f, "Fractional hnsecs out of range: {}", x),
			DateTimeError::YearOutOfRange(y) => write!(f, "Year out of range: {}", y)
		}
	}
}

impl error::Error for DateTimeError {}

/// Policy for month/year addition that lands on a day the target month does not have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayOverflow {
	/// Roll the excess days forward into the following month, e.g. January 31 plus one month
	/// becomes March 2 or March 3 (February 31, overflowed by 2 or 3 days).
	Allow,
	/// Clamp to the last valid day of the landing month, e.g. January 31 plus one month
	/// becomes February 28 or 29.
	Clamp
}

/// A validated proleptic-Gregorian calendar date.
///
/// Years use astronomical numbering (year 0 exists; negative years are B.C. dates). The year
/// range of [`i16`] keeps every representable date's tick count inside `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
	year: i16,
	mon: Month,
	day: u8
}

impl Date {
	/// Construct a date, validating the day against the month's length.
	///
	/// # Errors
	///
	/// Returns [`DateTimeError::DayOutOfRange`] if `day` is 0 or greater than the number of
	/// days in the given month and year.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// # use civiltime::datetime::{Date, DateTimeError};
	/// assert!(Date::new(2024, Month::February, 29).is_ok());
	/// assert_eq!(
	/// 	Date::new(2023, Month::February, 29),
	/// 	Err(DateTimeError::DayOutOfRange { year: 2023, mon: Month::February, day: 29 })
	/// );
	/// ```
	pub const fn new(year: i16, mon: Month, day: u8) -> Result<Date, DateTimeError> {
		if day == 0 || day > days_per_month(year, mon) {
			Err(DateTimeError::DayOutOfRange { year, mon, day })
		} else {
			Ok(Date { year, mon, day })
		}
	}

	/// The astronomical Gregorian calendar year.
	#[inline(always)]
	pub const fn year(self) -> i16 {
		self.year
	}

	/// The month.
	#[inline(always)]
	pub const fn month(self) -> Month {
		self.mon
	}

	/// The day of the month, [1, 31].
	#[inline(always)]
	pub const fn day(self) -> u8 {
		self.day
	}

	/// Whether this date falls in a leap year.
	#[inline(always)]
	pub const fn isleapyear(self) -> bool {
		crate::calendar::isleapyear(self.year)
	}

	/// The number of days since January 1 of year 1 (day 0); negative before that.
	#[inline(always)]
	pub const fn daycount(self) -> i64 {
		daycount_from_ymd(self.year, self.mon, self.day)
	}

	/// Construct a date from a day-count.
	///
	/// # Errors
	///
	/// Returns [`DateTimeError::YearOutOfRange`] if the day-count lands outside the `i16` year
	/// range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// # use civiltime::datetime::Date;
	/// assert_eq!(Date::from_daycount(0), Date::new(1, Month::January, 1));
	/// assert_eq!(Date::from_daycount(-1), Date::new(0, Month::December, 31));
	/// ```
	pub const fn from_daycount(days: i64) -> Result<Date, DateTimeError> {
		let (y, mon, day) = ymd_from_daycount(days);
		if y < i16::MIN as i64 || y > i16::MAX as i64 {
			Err(DateTimeError::YearOutOfRange(y))
		} else {
			Ok(Date { year: y as i16, mon, day })
		}
	}

	/// The weekday this date falls on.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::{Month, Weekday};
	/// # use civiltime::datetime::Date;
	/// let d = Date::new(1990, Month::January, 6).unwrap();
	/// assert_eq!(d.weekday(), Weekday::Saturday);
	/// ```
	#[inline(always)]
	pub const fn weekday(self) -> Weekday {
		wday_from_daycount(self.daycount())
	}

	/// Add `n` months (which may be negative), carrying into years as needed.
	///
	/// If the resulting day does not exist in the landing month, `overflow` decides whether
	/// the excess days roll forward into the following month or the day clamps to the landing
	/// month's last day.
	///
	/// # Errors
	///
	/// Returns [`DateTimeError::YearOutOfRange`] if the result leaves the `i16` year range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// # use civiltime::datetime::{Date, DayOverflow};
	/// let d = Date::new(1999, Month::January, 31).unwrap();
	/// assert_eq!(d.add_months(1, DayOverflow::Allow), Date::new(1999, Month::March, 3));
	/// assert_eq!(d.add_months(1, DayOverflow::Clamp), Date::new(1999, Month::February, 28));
	/// assert_eq!(d.add_months(-2, DayOverflow::Clamp), Date::new(1998, Month::November, 30));
	/// ```
	pub fn add_months(self, n: i64, overflow: DayOverflow) -> Result<Date, DateTimeError> {
		// Saturation cannot produce a wrong answer here: any saturated month count is already
		// far outside the i16 year range and fails the range check below
		let months = (self.year as i64 * 12 + (self.mon as u8 as i64 - 1)).saturating_add(n);
		let year = months.div_euclid(12);
		let mon = MONTHS[months.rem_euclid(12) as usize];
		if year < i16::MIN as i64 || year > i16::MAX as i64 {
			return Err(DateTimeError::YearOutOfRange(year));
		}
		Date::land(year as i16, mon, self.day, overflow)
	}

	/// Add `n` years (which may be negative), affecting only the year field.
	///
	/// The `overflow` policy only matters for February 29: in a non-leap landing year it
	/// becomes March 1 (`Allow`) or February 28 (`Clamp`).
	///
	/// # Errors
	///
	/// Returns [`DateTimeError::YearOutOfRange`] if the result leaves the `i16` year range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// # use civiltime::datetime::{Date, DayOverflow};
	/// let d = Date::new(2000, Month::February, 29).unwrap();
	/// assert_eq!(d.add_years(1, DayOverflow::Allow), Date::new(2001, Month::March, 1));
	/// assert_eq!(d.add_years(1, DayOverflow::Clamp), Date::new(2001, Month::February, 28));
	/// assert_eq!(d.add_years(4, DayOverflow::Clamp), Date::new(2004, Month::February, 29));
	/// ```
	pub fn add_years(self, n: i64, overflow: DayOverflow) -> Result<Date, DateTimeError> {
		let year = (self.year as i64).saturating_add(n);
		if year < i16::MIN as i64 || year > i16::MAX as i64 {
			return Err(DateTimeError::YearOutOfRange(year));
		}
		Date::land(year as i16, self.mon, self.day, overflow)
	}

	/// Resolve a landing (year, month, day) that may have an invalid day, per the overflow
	/// policy.
	fn land(year: i16, mon: Month, day: u8, overflow: DayOverflow) -> Result<Date, DateTimeError> {
		let max = days_per_month(year, mon);
		if day <= max {
			return Ok(Date { year, mon, day });
		}
		match overflow {
			DayOverflow::Clamp => Ok(Date { year, mon, day: max }),
			DayOverflow::Allow => {
				// Roll the excess into the following month via the day-count
				let excess = (day - max) as i64;
				Date::from_daycount(daycount_from_ymd(year, mon, max) + excess)
			}
		}
	}
}

/// A validated time of day with an optional fractional-second remainder in hnsecs.
///
/// No carry between fields is implied by construction; carry only happens through explicit
/// arithmetic on [`DateTime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
	hour: u8,
	min: u8,
	sec: u8,
	frac: u32
}

impl Time {
	/// Midnight.
	pub const MIDNIGHT: Time = Time { hour: 0, min: 0, sec: 0, frac: 0 };

	/// Construct a time of day, validating each field independently.
	///
	/// # Errors
	///
	/// Returns the corresponding [`DateTimeError`] variant for the first field outside its
	/// range: hour [0, 23], minute [0, 59], second [0, 59], frac [0, 9999999] hnsecs.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::datetime::{DateTimeError, Time};
	/// assert!(Time::new(23, 59, 59, 9_999_999).is_ok());
	/// assert_eq!(Time::new(24, 0, 0, 0), Err(DateTimeError::HourOutOfRange(24)));
	/// assert_eq!(Time::new(12, 0, 60, 0), Err(DateTimeError::SecondOutOfRange(60)));
	/// ```
	pub const fn new(hour: u8, min: u8, sec: u8, frac: u32) -> Result<Time, DateTimeError> {
		if hour > 23 {
			Err(DateTimeError::HourOutOfRange(hour))
		} else if min > 59 {
			Err(DateTimeError::MinuteOutOfRange(min))
		} else if sec > 59 {
			Err(DateTimeError::SecondOutOfRange(sec))
		} else if frac > 9_999_999 {
			Err(DateTimeError::FracOutOfRange(frac))
		} else {
			Ok(Time { hour, min, sec, frac })
		}
	}

	/// Hours, [0, 23].
	#[inline(always)]
	pub const fn hour(self) -> u8 {
		self.hour
	}

	/// Minutes, [0, 59].
	#[inline(always)]
	pub const fn minute(self) -> u8 {
		self.min
	}

	/// Seconds, [0, 59].
	#[inline(always)]
	pub const fn second(self) -> u8 {
		self.sec
	}

	/// Fractional-second remainder in hnsecs, [0, 9999999].
	#[inline(always)]
	pub const fn frac(self) -> u32 {
		self.frac
	}

	/// The number of hnsecs since midnight.
	pub const fn hnsecs_of_day(self) -> i64 {
		self.hour as i64 * HNSECS_PER_HOUR
			+ self.min as i64 * HNSECS_PER_MINUTE
			+ self.sec as i64 * HNSECS_PER_SECOND
			+ self.frac as i64
	}

	/// Rebuild a time of day from hnsecs since midnight. `hnsecs` must be in
	/// [0, `HNSECS_PER_DAY`).
	pub(crate) const fn from_hnsecs_of_day(hnsecs: i64) -> Time {
		Time {
			hour: (hnsecs / HNSECS_PER_HOUR) as u8,
			min: (hnsecs % HNSECS_PER_HOUR / HNSECS_PER_MINUTE) as u8,
			sec: (hnsecs % HNSECS_PER_MINUTE / HNSECS_PER_SECOND) as u8,
			frac: (hnsecs % HNSECS_PER_SECOND) as u32
		}
	}
}

/// A validated civil date and time of day.
///
/// A `DateTime` says nothing about time zones; pairing it with one is the job of
/// [`ZonedDateTime`][crate::tz::ZonedDateTime].
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::Month;
/// # use civiltime::datetime::{Date, DateTime, Time};
/// # use civiltime::units::{Duration, TimeUnit};
/// let dt = DateTime::new(
/// 	Date::new(1970, Month::January, 1).unwrap(),
/// 	Time::MIDNIGHT
/// );
/// // The Unix epoch, in hnsecs since 0001-01-01
/// assert_eq!(dt.ticks(), 621_355_968_000_000_000);
///
/// let later = dt + Duration::new(90, TimeUnit::Minutes).unwrap();
/// assert_eq!(later.time().hour(), 1);
/// assert_eq!(later.time().minute(), 30);
/// assert_eq!(later - dt, Duration::new(90, TimeUnit::Minutes).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
	date: Date,
	time: Time
}

impl DateTime {
	/// Pair a date with a time of day. Both halves are already validated by construction.
	#[inline(always)]
	pub const fn new(date: Date, time: Time) -> DateTime {
		DateTime { date, time }
	}

	/// The date half.
	#[inline(always)]
	pub const fn date(self) -> Date {
		self.date
	}

	/// The time-of-day half.
	#[inline(always)]
	pub const fn time(self) -> Time {
		self.time
	}

	/// The number of hnsecs since 0001-01-01T00:00:00.
	///
	/// Saturates at the `i64` bounds for dates more than roughly 29,000 years from the epoch
	/// (the extreme edges of the `i16` year range).
	pub const fn ticks(self) -> i64 {
		self.date
			.daycount()
			.saturating_mul(HNSECS_PER_DAY)
			.saturating_add(self.time.hnsecs_of_day())
	}

	/// Rebuild a date and time from hnsecs since 0001-01-01T00:00:00.
	///
	/// Total over the whole `i64` range: every tick count maps to a representable date.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// # use civiltime::datetime::{Date, DateTime, Time};
	/// let dt = DateTime::from_ticks(621_355_968_000_000_000);
	/// assert_eq!(dt.date(), Date::new(1970, Month::January, 1).unwrap());
	/// assert_eq!(dt.time(), Time::MIDNIGHT);
	/// ```
	pub const fn from_ticks(ticks: i64) -> DateTime {
		let days = ticks.div_euclid(HNSECS_PER_DAY);
		let rem = ticks.rem_euclid(HNSECS_PER_DAY);
		// The whole i64 tick range spans under 30,000 years, so the year always fits
		let (y, mon, day) = ymd_from_daycount(days);
		DateTime {
			date: Date { year: y as i16, mon, day },
			time: Time::from_hnsecs_of_day(rem)
		}
	}

	/// Add a fixed-unit duration, carrying through day, month and year boundaries as needed
	/// (including across the year 0 / year 1 boundary).
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// # use civiltime::datetime::{Date, DateTime, Time};
	/// # use civiltime::units::{Duration, TimeUnit};
	/// let dt = DateTime::new(
	/// 	Date::new(2023, Month::December, 31).unwrap(),
	/// 	Time::new(23, 59, 59, 0).unwrap()
	/// );
	/// let next = dt.add_duration(Duration::new(1, TimeUnit::Seconds).unwrap());
	/// assert_eq!(next.date(), Date::new(2024, Month::January, 1).unwrap());
	/// assert_eq!(next.time(), Time::MIDNIGHT);
	/// ```
	pub const fn add_duration(self, d: Duration) -> DateTime {
		DateTime::from_ticks(self.ticks().saturating_add(d.hnsecs()))
	}

	/// Add `n` months per [`Date::add_months`], leaving the time of day untouched.
	pub fn add_months(self, n: i64, overflow: DayOverflow) -> Result<DateTime, DateTimeError> {
		Ok(DateTime { date: self.date.add_months(n, overflow)?, time: self.time })
	}

	/// Add `n` years per [`Date::add_years`], leaving the time of day untouched.
	pub fn add_years(self, n: i64, overflow: DayOverflow) -> Result<DateTime, DateTimeError> {
		Ok(DateTime { date: self.date.add_years(n, overflow)?, time: self.time })
	}
}

impl Add<Duration> for DateTime {
	type Output = Self;

	/// Add `rhs` per [`DateTime::add_duration`].
	fn add(self, rhs: Duration) -> Self::Output {
		self.add_duration(rhs)
	}
}

impl Sub<Duration> for DateTime {
	type Output = Self;

	/// Subtract `rhs` per [`DateTime::add_duration`] with the sign flipped.
	fn sub(self, rhs: Duration) -> Self::Output {
		self.add_duration(-rhs)
	}
}

impl Sub for DateTime {
	type Output = Duration;

	/// The signed fixed-unit duration from `rhs` to `self`.
	fn sub(self, rhs: Self) -> Self::Output {
		Duration::from_hnsecs(self.ticks().saturating_sub(rhs.ticks()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::units::TimeUnit;

	fn date(y: i16, m: Month, d: u8) -> Date {
		Date::new(y, m, d).unwrap()
	}

	#[test]
	fn date_new_test() {
		assert!(Date::new(2024, Month::February, 29).is_ok());
		assert_eq!(
			Date::new(2023, Month::February, 29),
			Err(DateTimeError::DayOutOfRange { year: 2023, mon: Month::February, day: 29 })
		);
		assert_eq!(
			Date::new(2023, Month::April, 31),
			Err(DateTimeError::DayOutOfRange { year: 2023, mon: Month::April, day: 31 })
		);
		assert_eq!(
			Date::new(2023, Month::April, 0),
			Err(DateTimeError::DayOutOfRange { year: 2023, mon: Month::April, day: 0 })
		);
		// B.C. dates are fine, year 0 exists
		assert!(Date::new(0, Month::February, 29).is_ok());
		assert!(Date::new(-1, Month::December, 31).is_ok());
	}

	#[test]
	fn time_new_test() {
		assert!(Time::new(0, 0, 0, 0).is_ok());
		assert!(Time::new(23, 59, 59, 9_999_999).is_ok());
		assert_eq!(Time::new(24, 0, 0, 0), Err(DateTimeError::HourOutOfRange(24)));
		assert_eq!(Time::new(0, 60, 0, 0), Err(DateTimeError::MinuteOutOfRange(60)));
		assert_eq!(Time::new(0, 0, 60, 0), Err(DateTimeError::SecondOutOfRange(60)));
		assert_eq!(Time::new(0, 0, 0, 10_000_000), Err(DateTimeError::FracOutOfRange(10_000_000)));
	}

	#[test]
	fn add_months_test() {
		// The canonical overflow pair: Jan 31, 2000 + 1 month
		let d = date(2000, Month::January, 31);
		assert_eq!(d.add_months(1, DayOverflow::Allow), Ok(date(2000, Month::March, 2)));
		assert_eq!(d.add_months(1, DayOverflow::Clamp), Ok(date(2000, Month::February, 29)));

		// Non-leap year overflows one day further
		let d = date(1999, Month::January, 31);
		assert_eq!(d.add_months(1, DayOverflow::Allow), Ok(date(1999, Month::March, 3)));
		assert_eq!(d.add_months(1, DayOverflow::Clamp), Ok(date(1999, Month::February, 28)));

		// Carry through years, both directions
		let d = date(2023, Month::November, 15);
		assert_eq!(d.add_months(3, DayOverflow::Clamp), Ok(date(2024, Month::February, 15)));
		assert_eq!(d.add_months(-11, DayOverflow::Clamp), Ok(date(2022, Month::December, 15)));
		assert_eq!(d.add_months(-24, DayOverflow::Clamp), Ok(date(2021, Month::November, 15)));

		// Crossing the year 0 boundary
		let d = date(1, Month::January, 15);
		assert_eq!(d.add_months(-1, DayOverflow::Clamp), Ok(date(0, Month::December, 15)));

		// No-day-overflow additions ignore the policy
		let d = date(2024, Month::March, 31);
		assert_eq!(d.add_months(2, DayOverflow::Allow), Ok(date(2024, Month::May, 31)));
		assert_eq!(d.add_months(2, DayOverflow::Clamp), Ok(date(2024, Month::May, 31)));

		// Year range is enforced
		assert!(matches!(
			date(32767, Month::December, 1).add_months(1, DayOverflow::Clamp),
			Err(DateTimeError::YearOutOfRange(32768))
		));

		// Extreme offsets surface as range errors, never overflow
		let d = date(2024, Month::June, 15);
		assert!(matches!(
			d.add_months(i64::MAX, DayOverflow::Clamp),
			Err(DateTimeError::YearOutOfRange(_))
		));
		assert!(matches!(
			d.add_months(i64::MIN, DayOverflow::Allow),
			Err(DateTimeError::YearOutOfRange(_))
		));
	}

	#[test]
	fn add_years_test() {
		let d = date(2000, Month::February, 29);
		assert_eq!(d.add_years(1, DayOverflow::Allow), Ok(date(2001, Month::March, 1)));
		assert_eq!(d.add_years(1, DayOverflow::Clamp), Ok(date(2001, Month::February, 28)));
		assert_eq!(d.add_years(4, DayOverflow::Allow), Ok(date(2004, Month::February, 29)));
		assert_eq!(d.add_years(-4, DayOverflow::Allow), Ok(date(1996, Month::February, 29)));
		assert_eq!(d.add_years(-2000, DayOverflow::Clamp), Ok(date(0, Month::February, 29)));
		assert_eq!(d.add_years(-2001, DayOverflow::Clamp), Ok(date(-1, Month::February, 28)));

		assert!(matches!(
			d.add_years(31000, DayOverflow::Clamp),
			Err(DateTimeError::YearOutOfRange(33000))
		));

		// Extreme offsets surface as range errors, never overflow
		assert!(matches!(
			d.add_years(i64::MAX, DayOverflow::Clamp),
			Err(DateTimeError::YearOutOfRange(_))
		));
		assert!(matches!(
			d.add_years(i64::MIN, DayOverflow::Allow),
			Err(DateTimeError::YearOutOfRange(_))
		));
	}

	#[test]
	fn ticks_roundtrip_test() {
		let dt = DateTime::new(date(1970, Month::January, 1), Time::MIDNIGHT);
		assert_eq!(dt.ticks(), 621_355_968_000_000_000);
		assert_eq!(DateTime::from_ticks(621_355_968_000_000_000), dt);

		let dt = DateTime::new(
			date(1990, Month::January, 6),
			Time::new(12, 14, 19, 1_234_567).unwrap()
		);
		assert_eq!(DateTime::from_ticks(dt.ticks()), dt);

		// Negative ticks (before year 1)
		let dt = DateTime::new(date(0, Month::December, 31), Time::new(23, 59, 59, 9_999_999).unwrap());
		assert_eq!(dt.ticks(), -1);
		assert_eq!(DateTime::from_ticks(-1), dt);

		// Extreme inputs cannot panic
		DateTime::from_ticks(i64::MIN);
		DateTime::from_ticks(i64::MAX);
	}

	#[test]
	fn add_duration_test() {
		let dt = DateTime::new(date(2023, Month::December, 31), Time::new(23, 59, 59, 0).unwrap());
		let next = dt.add_duration(Duration::new(1, TimeUnit::Seconds).unwrap());
		assert_eq!(next, DateTime::new(date(2024, Month::January, 1), Time::MIDNIGHT));

		// Backwards across the B.C./A.D. boundary
		let dt = DateTime::new(date(1, Month::January, 1), Time::MIDNIGHT);
		let prev = dt.add_duration(Duration::from_hnsecs(-1));
		assert_eq!(prev.date(), date(0, Month::December, 31));
		assert_eq!(prev.time(), Time::new(23, 59, 59, 9_999_999).unwrap());

		// Weeks use the fixed ratio table
		let dt = DateTime::new(date(2024, Month::February, 26), Time::MIDNIGHT);
		let next = dt + Duration::new(1, TimeUnit::Weeks).unwrap();
		assert_eq!(next.date(), date(2024, Month::March, 4));
	}

	#[test]
	fn difference_test() {
		let a = DateTime::new(date(2024, Month::March, 1), Time::MIDNIGHT);
		let b = DateTime::new(date(2024, Month::February, 28), Time::MIDNIGHT);
		// 2024 is a leap year, so Feb 28 to Mar 1 is two days
		assert_eq!((a - b).total(TimeUnit::Days), Ok(2));
		assert_eq!((b - a).total(TimeUnit::Days), Ok(-2));

		let c = b + Duration::new(90, TimeUnit::Minutes).unwrap();
		assert_eq!((c - b).total(TimeUnit::Minutes), Ok(90));
	}

	#[test]
	fn weekday_test() {
		assert_eq!(date(1, Month::January, 1).weekday(), Weekday::Monday);
		assert_eq!(date(1990, Month::January, 6).weekday(), Weekday::Saturday);
		assert_eq!(date(2012, Month::December, 21).weekday(), Weekday::Friday);
		assert_eq!(date(0, Month::December, 31).weekday(), Weekday::Sunday);
	}
}
