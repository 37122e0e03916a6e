//! The time-unit vocabulary, its conversion ratios, and fixed-unit durations.
//!
//! Units form a fixed, totally ordered vocabulary from `hnsecs` (100-nanosecond ticks, the
//! finest unit used throughout the crate) up to `years`. The ratio table covers `hnsecs`
//! through `weeks`; months and years have no fixed hnsec length (it depends on the calendar),
//! so they are deliberately excluded from it. Callers needing month/year arithmetic must use
//! the calendar-aware operations on [`Date`][crate::datetime::Date], never a fixed ratio.
//!
//! # Examples
//!
//! ```
//! # use core::cmp::Ordering;
//! # use civiltime::units::{cmp_unit_names, Duration, TimeUnit};
//! assert_eq!(cmp_unit_names("minutes", "hours"), Ok(Ordering::Less));
//! assert_eq!(TimeUnit::Seconds.hnsecs_per(), Some(10_000_000));
//! assert_eq!(TimeUnit::Months.hnsecs_per(), None);
//! assert_eq!(Duration::new(90, TimeUnit::Minutes).unwrap().total(TimeUnit::Hours), Ok(1));
//! ```

use core::{error, fmt};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Hnsecs per microsecond.
pub const HNSECS_PER_USEC: i64 = 10;
/// Hnsecs per millisecond.
pub const HNSECS_PER_MSEC: i64 = 1000 * HNSECS_PER_USEC;
/// Hnsecs per second.
pub const HNSECS_PER_SECOND: i64 = 1000 * HNSECS_PER_MSEC;
/// Hnsecs per minute.
pub const HNSECS_PER_MINUTE: i64 = 60 * HNSECS_PER_SECOND;
/// Hnsecs per hour.
pub const HNSECS_PER_HOUR: i64 = 60 * HNSECS_PER_MINUTE;
/// Hnsecs per day.
pub const HNSECS_PER_DAY: i64 = 24 * HNSECS_PER_HOUR;
/// Hnsecs per week.
pub const HNSECS_PER_WEEK: i64 = 7 * HNSECS_PER_DAY;

/// The error type for time-unit lookups and conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitError {
	/// The supplied name is not in the unit vocabulary.
	UnrecognizedUnit,
	/// The unit has no fixed hnsec length (months and years are calendar-dependent).
	NotFixedLength
}

impl fmt::Display for UnitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			UnitError::UnrecognizedUnit => f.write_str("Unrecognized time unit"),
			UnitError::NotFixedLength => f.write_str("Time unit has no fixed length")
		}
	}
}

impl error::Error for UnitError {}

/// The fixed time-unit vocabulary, ordered smallest to largest.
///
/// The derived ordering is the magnitude ordering: `Hnsecs < Usecs < ... < Years`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
	/// 100 nanoseconds, the finest unit in the vocabulary.
	Hnsecs,
	Usecs,
	Msecs,
	Seconds,
	Minutes,
	Hours,
	Days,
	Weeks,
	/// Calendar-dependent; excluded from the fixed ratio table.
	Months,
	/// Calendar-dependent; excluded from the fixed ratio table.
	Years
}

/// All units, smallest to largest.
pub const UNITS: [TimeUnit; 10] = [
	TimeUnit::Hnsecs, TimeUnit::Usecs, TimeUnit::Msecs, TimeUnit::Seconds,
	TimeUnit::Minutes, TimeUnit::Hours, TimeUnit::Days, TimeUnit::Weeks,
	TimeUnit::Months, TimeUnit::Years
];

impl TimeUnit {
	/// The canonical name of this unit, as accepted by [`TimeUnit::from_name`].
	pub const fn name(self) -> &'static str {
		match self {
			TimeUnit::Hnsecs => "hnsecs",
			TimeUnit::Usecs => "usecs",
			TimeUnit::Msecs => "msecs",
			TimeUnit::Seconds => "seconds",
			TimeUnit::Minutes => "minutes",
			TimeUnit::Hours => "hours",
			TimeUnit::Days => "days",
			TimeUnit::Weeks => "weeks",
			TimeUnit::Months => "months",
			TimeUnit::Years => "years"
		}
	}

	/// Look up a unit by name.
	///
	/// # Errors
	///
	/// Returns [`UnitError::UnrecognizedUnit`] if `name` is not one of the ten canonical unit
	/// names. The match is case sensitive; there is no free-form parsing beyond this set.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::units::{TimeUnit, UnitError};
	/// assert_eq!(TimeUnit::from_name("weeks"), Ok(TimeUnit::Weeks));
	/// assert_eq!(TimeUnit::from_name("fortnights"), Err(UnitError::UnrecognizedUnit));
	/// ```
	pub fn from_name(name: &str) -> Result<TimeUnit, UnitError> {
		UNITS.iter()
			.find(|u| u.name() == name)
			.copied()
			.ok_or(UnitError::UnrecognizedUnit)
	}

	/// The number of hnsecs in one of this unit, or `None` for months and years.
	///
	/// Months and years have no fixed hnsec length; their conversion is calendar-dependent and
	/// must go through [`Date::add_months`][crate::datetime::Date::add_months] or
	/// [`Date::add_years`][crate::datetime::Date::add_years].
	pub const fn hnsecs_per(self) -> Option<i64> {
		match self {
			TimeUnit::Hnsecs => Some(1),
			TimeUnit::Usecs => Some(HNSECS_PER_USEC),
			TimeUnit::Msecs => Some(HNSECS_PER_MSEC),
			TimeUnit::Seconds => Some(HNSECS_PER_SECOND),
			TimeUnit::Minutes => Some(HNSECS_PER_MINUTE),
			TimeUnit::Hours => Some(HNSECS_PER_HOUR),
			TimeUnit::Days => Some(HNSECS_PER_DAY),
			TimeUnit::Weeks => Some(HNSECS_PER_WEEK),
			TimeUnit::Months | TimeUnit::Years => None
		}
	}
}

/// Compare two units by name using the vocabulary's magnitude order.
///
/// # Errors
///
/// Returns [`UnitError::UnrecognizedUnit`] if either name is not in the vocabulary.
///
/// # Examples
///
/// ```
/// # use core::cmp::Ordering;
/// # use civiltime::units::{cmp_unit_names, UnitError};
/// assert_eq!(cmp_unit_names("hnsecs", "years"), Ok(Ordering::Less));
/// assert_eq!(cmp_unit_names("days", "days"), Ok(Ordering::Equal));
/// assert_eq!(cmp_unit_names("weeks", "msecs"), Ok(Ordering::Greater));
/// assert_eq!(cmp_unit_names("weeks", "eons"), Err(UnitError::UnrecognizedUnit));
/// ```
pub fn cmp_unit_names(a: &str, b: &str) -> Result<Ordering, UnitError> {
	Ok(TimeUnit::from_name(a)?.cmp(&TimeUnit::from_name(b)?))
}

/// A fixed-unit span of time, denominated in hnsecs.
///
/// Durations are exact integer counts of 100-nanosecond ticks and may be negative. They can be
/// built from any fixed-length unit; months and years are rejected since their length depends
/// on where in the calendar they are applied.
///
/// # Examples
///
/// ```
/// # use civiltime::units::{Duration, TimeUnit, UnitError};
/// let d = Duration::new(90, TimeUnit::Minutes).unwrap();
/// assert_eq!(d.hnsecs(), 54_000_000_000);
/// assert_eq!(d.total(TimeUnit::Hours), Ok(1));
/// assert_eq!(d.total(TimeUnit::Minutes), Ok(90));
/// assert_eq!(Duration::new(1, TimeUnit::Years), Err(UnitError::NotFixedLength));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
	/// The zero-length duration.
	pub const ZERO: Duration = Duration(0);

	/// Construct a duration of `count` of the given fixed-length `unit`.
	///
	/// The product saturates at the `i64` bounds rather than wrapping.
	///
	/// # Errors
	///
	/// Returns [`UnitError::NotFixedLength`] for [`TimeUnit::Months`] and [`TimeUnit::Years`].
	pub const fn new(count: i64, unit: TimeUnit) -> Result<Duration, UnitError> {
		match unit.hnsecs_per() {
			Some(r) => Ok(Duration(count.saturating_mul(r))),
			None => Err(UnitError::NotFixedLength)
		}
	}

	/// Construct a duration directly from a hnsec count.
	#[inline(always)]
	pub const fn from_hnsecs(hnsecs: i64) -> Duration {
		Duration(hnsecs)
	}

	/// The total number of hnsecs in this duration.
	#[inline(always)]
	pub const fn hnsecs(self) -> i64 {
		self.0
	}

	/// The whole number of the given fixed-length `unit` in this duration, truncated toward
	/// zero.
	///
	/// # Errors
	///
	/// Returns [`UnitError::NotFixedLength`] for [`TimeUnit::Months`] and [`TimeUnit::Years`].
	pub const fn total(self, unit: TimeUnit) -> Result<i64, UnitError> {
		match unit.hnsecs_per() {
			Some(r) => Ok(self.0 / r),
			None => Err(UnitError::NotFixedLength)
		}
	}
}

impl Add for Duration {
	type Output = Self;

	/// Add two durations, saturating at the `i64` bounds.
	fn add(self, rhs: Self) -> Self::Output {
		Duration(self.0.saturating_add(rhs.0))
	}
}

impl AddAssign for Duration {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Sub for Duration {
	type Output = Self;

	/// Subtract two durations, saturating at the `i64` bounds.
	fn sub(self, rhs: Self) -> Self::Output {
		Duration(self.0.saturating_sub(rhs.0))
	}
}

impl SubAssign for Duration {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl Neg for Duration {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Duration(self.0.saturating_neg())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unit_order_test() {
		// The vocabulary is totally ordered smallest to largest
		for pair in UNITS.windows(2) {
			assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
		}
		assert_eq!(cmp_unit_names("hnsecs", "usecs"), Ok(Ordering::Less));
		assert_eq!(cmp_unit_names("years", "months"), Ok(Ordering::Greater));
		assert_eq!(cmp_unit_names("seconds", "seconds"), Ok(Ordering::Equal));
		assert_eq!(cmp_unit_names("", "seconds"), Err(UnitError::UnrecognizedUnit));
		assert_eq!(cmp_unit_names("seconds", "Seconds"), Err(UnitError::UnrecognizedUnit));
	}

	#[test]
	fn from_name_test() {
		for u in UNITS {
			assert_eq!(TimeUnit::from_name(u.name()), Ok(u));
		}
		assert_eq!(TimeUnit::from_name("hnsec"), Err(UnitError::UnrecognizedUnit));
		assert_eq!(TimeUnit::from_name("HNSECS"), Err(UnitError::UnrecognizedUnit));
	}

	#[test]
	fn ratio_table_test() {
		assert_eq!(TimeUnit::Hnsecs.hnsecs_per(), Some(1));
		assert_eq!(TimeUnit::Usecs.hnsecs_per(), Some(10));
		assert_eq!(TimeUnit::Msecs.hnsecs_per(), Some(10_000));
		assert_eq!(TimeUnit::Seconds.hnsecs_per(), Some(10_000_000));
		assert_eq!(TimeUnit::Minutes.hnsecs_per(), Some(600_000_000));
		assert_eq!(TimeUnit::Hours.hnsecs_per(), Some(36_000_000_000));
		assert_eq!(TimeUnit::Days.hnsecs_per(), Some(864_000_000_000));
		assert_eq!(TimeUnit::Weeks.hnsecs_per(), Some(6_048_000_000_000));
		assert_eq!(TimeUnit::Months.hnsecs_per(), None);
		assert_eq!(TimeUnit::Years.hnsecs_per(), None);
	}

	#[test]
	fn duration_test() {
		assert_eq!(Duration::new(1, TimeUnit::Seconds), Ok(Duration::from_hnsecs(10_000_000)));
		assert_eq!(Duration::new(-3, TimeUnit::Days), Ok(Duration::from_hnsecs(-2_592_000_000_000)));
		assert_eq!(Duration::new(5, TimeUnit::Months), Err(UnitError::NotFixedLength));
		assert_eq!(Duration::new(5, TimeUnit::Years), Err(UnitError::NotFixedLength));

		let d = Duration::new(36, TimeUnit::Hours).unwrap();
		assert_eq!(d.total(TimeUnit::Days), Ok(1));
		assert_eq!(d.total(TimeUnit::Minutes), Ok(2160));
		assert_eq!(d.total(TimeUnit::Months), Err(UnitError::NotFixedLength));

		// Negative totals truncate toward zero
		let d = Duration::new(-36, TimeUnit::Hours).unwrap();
		assert_eq!(d.total(TimeUnit::Days), Ok(-1));

		// Saturating arithmetic at the extremes cannot wrap
		assert_eq!(Duration::new(i64::MAX, TimeUnit::Weeks).unwrap().hnsecs(), i64::MAX);
		assert_eq!(
			Duration::from_hnsecs(i64::MAX) + Duration::from_hnsecs(1),
			Duration::from_hnsecs(i64::MAX)
		);
	}

	#[test]
	fn duration_ops_test() {
		let mut d = Duration::new(1, TimeUnit::Minutes).unwrap();
		d += Duration::new(30, TimeUnit::Seconds).unwrap();
		assert_eq!(d.total(TimeUnit::Seconds), Ok(90));
		d -= Duration::new(2, TimeUnit::Minutes).unwrap();
		assert_eq!(d.total(TimeUnit::Seconds), Ok(-30));
		assert_eq!(-d, Duration::new(30, TimeUnit::Seconds).unwrap());
	}
}
