//! Pure proleptic-Gregorian calendar arithmetic.
//!
//! This module provides the integer math underneath everything else in the crate: leap year
//! testing, days-per-month lookup, and conversions between a signed day-count (days since
//! January 1 of year 1, which is day 0 and a Monday) and (year, month, day) triples. Years use
//! astronomical numbering: year 0 exists and sits directly below year 1, so 1 B.C. is year 0,
//! 2 B.C. is year -1, and so on. All functions here are total over their stated domains and
//! thread safe (no state is touched).
//!
//! # Examples
//!
//! ```
//! # use civiltime::calendar::{daycount_from_ymd, ymd_from_daycount, wday_from_daycount, Month, Weekday};
//! assert_eq!(daycount_from_ymd(1, Month::January, 1), 0);
//! assert_eq!(ymd_from_daycount(719162), (1970, Month::January, 1));
//! assert_eq!(wday_from_daycount(0), Weekday::Monday);
//! assert_eq!(wday_from_daycount(-1), Weekday::Sunday);
//! ```

/// Days per non-leap year.
const DAYS_PER_NON_LEAP_YEAR: i64 = 365;
/// Leap years occur every 4 years...
const YEARS_PER_LEAP_YEAR_1: i64 = 4;
/// ... except every 100, unless it's the end of the era.
const YEARS_PER_LEAP_YEAR_2: i64 = 100;
/// Number of years per era.
const YEARS_PER_ERA: i64 = 400;
/// Number of days every 4 years.
const DAYS_PER_LEAP_YEAR_1: i64 = YEARS_PER_LEAP_YEAR_1 * DAYS_PER_NON_LEAP_YEAR;
/// Number of days every 100 years.
const DAYS_PER_LEAP_YEAR_2: i64 = YEARS_PER_LEAP_YEAR_2 * DAYS_PER_NON_LEAP_YEAR
                                + YEARS_PER_LEAP_YEAR_2 / YEARS_PER_LEAP_YEAR_1 - 1;
/// Number of days every era (400 years), excluding the last leap day.
const DAYS_PER_LEAP_YEAR_3: i64 = YEARS_PER_ERA * DAYS_PER_NON_LEAP_YEAR
                                + (YEARS_PER_ERA / YEARS_PER_LEAP_YEAR_2)
                                * (YEARS_PER_LEAP_YEAR_2 / YEARS_PER_LEAP_YEAR_1 - 1);
/// Number of days every era (400 years).
const DAYS_PER_ERA: i64 = DAYS_PER_LEAP_YEAR_3 + 1;
/// Days per week.
const DAYS_PER_WEEK: i64 = 7;
/// Days from March 1 of year 0 to January 1 of year 1 (the day-count epoch), in the rotated
/// Mar-Feb calendar used by the era algorithms.
const DAYS_FROM_MAR_0000_TO_JAN_0001: i64 = 306;

/// Months of the year, numbered 1 (January) through 12 (December).
///
/// This is a closed set; it is never extended.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
	January = 1,
	February = 2,
	March = 3,
	April = 4,
	May = 5,
	June = 6,
	July = 7,
	August = 8,
	September = 9,
	October = 10,
	November = 11,
	December = 12
}

/// All months in calendar order, for ordinal lookups.
pub const MONTHS: [Month; 12] = [
	Month::January, Month::February, Month::March, Month::April,
	Month::May, Month::June, Month::July, Month::August,
	Month::September, Month::October, Month::November, Month::December
];

impl Month {
	/// The 1-based month number.
	#[inline(always)]
	pub const fn number(self) -> u8 {
		self as u8
	}

	/// Look up a month by its 1-based number, returning `None` for anything outside [1, 12].
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// assert_eq!(Month::from_number(2), Some(Month::February));
	/// assert_eq!(Month::from_number(0), None);
	/// assert_eq!(Month::from_number(13), None);
	/// ```
	pub const fn from_number(n: u8) -> Option<Month> {
		if n >= 1 && n <= 12 {
			Some(MONTHS[(n - 1) as usize])
		} else {
			None
		}
	}

	/// The conventional 3-letter English abbreviation, as used by RFC 822 date-times.
	pub const fn abbrev(self) -> &'static str {
		match self {
			Month::January => "Jan",
			Month::February => "Feb",
			Month::March => "Mar",
			Month::April => "Apr",
			Month::May => "May",
			Month::June => "Jun",
			Month::July => "Jul",
			Month::August => "Aug",
			Month::September => "Sep",
			Month::October => "Oct",
			Month::November => "Nov",
			Month::December => "Dec"
		}
	}

	/// Look up a month by its 3-letter abbreviation. The match is case sensitive and exact;
	/// any other casing or spelling returns `None`.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// assert_eq!(Month::from_abbrev(b"Jul"), Some(Month::July));
	/// assert_eq!(Month::from_abbrev(b"JUL"), None);
	/// assert_eq!(Month::from_abbrev(b"July"), None);
	/// ```
	pub fn from_abbrev(name: &[u8]) -> Option<Month> {
		MONTHS.iter().find(|m| m.abbrev().as_bytes() == name).copied()
	}

	/// Forward cyclic distance from `self` to `target`, in months [0, 11].
	///
	/// The distance is 0 if the months are equal, and wraps through December into January.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Month;
	/// assert_eq!(Month::March.months_until(Month::March), 0);
	/// assert_eq!(Month::March.months_until(Month::May), 2);
	/// assert_eq!(Month::December.months_until(Month::January), 1);
	/// ```
	pub const fn months_until(self, target: Month) -> u8 {
		(target as u8 + 12 - self as u8) % 12
	}
}

/// Days of the week, numbered 0 (Sunday) through 6 (Saturday).
///
/// This is a closed set; it is never extended. The numbering matches `libc::tm`'s `tm_wday`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
	Sunday = 0,
	Monday = 1,
	Tuesday = 2,
	Wednesday = 3,
	Thursday = 4,
	Friday = 5,
	Saturday = 6
}

/// All weekdays in order, for ordinal lookups.
pub const WEEKDAYS: [Weekday; 7] = [
	Weekday::Sunday, Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday,
	Weekday::Thursday, Weekday::Friday, Weekday::Saturday
];

impl Weekday {
	/// The 0-based day number (0 = Sunday).
	#[inline(always)]
	pub const fn number(self) -> u8 {
		self as u8
	}

	/// Look up a weekday by its 0-based number, returning `None` for anything outside [0, 6].
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Weekday;
	/// assert_eq!(Weekday::from_number(0), Some(Weekday::Sunday));
	/// assert_eq!(Weekday::from_number(6), Some(Weekday::Saturday));
	/// assert_eq!(Weekday::from_number(7), None);
	/// ```
	pub const fn from_number(n: u8) -> Option<Weekday> {
		if n <= 6 {
			Some(WEEKDAYS[n as usize])
		} else {
			None
		}
	}

	/// The conventional 3-letter English abbreviation, as used by RFC 822 date-times.
	pub const fn abbrev(self) -> &'static str {
		match self {
			Weekday::Sunday => "Sun",
			Weekday::Monday => "Mon",
			Weekday::Tuesday => "Tue",
			Weekday::Wednesday => "Wed",
			Weekday::Thursday => "Thu",
			Weekday::Friday => "Fri",
			Weekday::Saturday => "Sat"
		}
	}

	/// Look up a weekday by its 3-letter abbreviation (case sensitive, exact).
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Weekday;
	/// assert_eq!(Weekday::from_abbrev(b"Sat"), Some(Weekday::Saturday));
	/// assert_eq!(Weekday::from_abbrev(b"sat"), None);
	/// ```
	pub fn from_abbrev(name: &[u8]) -> Option<Weekday> {
		WEEKDAYS.iter().find(|w| w.abbrev().as_bytes() == name).copied()
	}

	/// Forward cyclic distance from `self` to `target`, in days [0, 6].
	///
	/// The distance is 0 if the weekdays are equal, and wraps through Saturday into Sunday.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::calendar::Weekday;
	/// assert_eq!(Weekday::Friday.days_until(Weekday::Friday), 0);
	/// assert_eq!(Weekday::Friday.days_until(Weekday::Monday), 3);
	/// assert_eq!(Weekday::Saturday.days_until(Weekday::Sunday), 1);
	/// ```
	pub const fn days_until(self, target: Weekday) -> u8 {
		(target as u8 + 7 - self as u8) % 7
	}
}

/// Check whether a given `year` is a leap year.
///
/// Uses the Gregorian rule extended over the whole (astronomical) year range: divisible by 400
/// is a leap year, otherwise divisible by 100 is not, otherwise divisible by 4 is. The rule is
/// symmetric around year 0, so e.g. year -4 is a leap year just like year 4.
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::isleapyear;
/// assert_eq!(isleapyear(1900), false);
/// assert_eq!(isleapyear(2000), true);
/// assert_eq!(isleapyear(2024), true);
/// assert_eq!(isleapyear(0), true);
/// assert_eq!(isleapyear(-4), true);
/// assert_eq!(isleapyear(-100), false);
/// ```
#[inline(always)]
pub const fn isleapyear(year: i16) -> bool {
	if year % 400 == 0 {
		true
	} else if year % 100 == 0 {
		false
	} else {
		year % 4 == 0
	}
}

/// The number of days in a given month.
///
/// `year` must be the astronomical Gregorian calendar year (negative allowed). February's
/// length toggles on [`isleapyear`].
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::{days_per_month, Month};
/// assert_eq!(days_per_month(2024, Month::February), 29);
/// assert_eq!(days_per_month(2023, Month::February), 28);
/// assert_eq!(days_per_month(2023, Month::September), 30);
/// assert_eq!(days_per_month(2023, Month::December), 31);
/// ```
pub const fn days_per_month(year: i16, mon: Month) -> u8 {
	// Details: https://www.youtube.com/watch?v=J9KijLyP-yg&t=1470s
	let m = mon as u8;
	if m == 2 {
		if isleapyear(year) { 29 } else { 28 }
	} else {
		30 | (m ^ (m >> 3))
	}
}

/// Get the day-count for a given year, month, and day.
///
/// The day-count is the number of days since January 1 of year 1 (day 0). `year` is the
/// astronomical Gregorian calendar year; `day` is not validated against the month length here,
/// so e.g. February 30 maps onto March days (callers wanting validation use
/// [`Date::new`][crate::datetime::Date::new]).
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::{daycount_from_ymd, Month};
/// assert_eq!(daycount_from_ymd(1, Month::January, 1), 0);
/// assert_eq!(daycount_from_ymd(0, Month::December, 31), -1);
/// assert_eq!(daycount_from_ymd(1970, Month::January, 1), 719162);
/// assert_eq!(daycount_from_ymd(1601, Month::January, 1), 584388);
/// ```
pub const fn daycount_from_ymd(year: i16, mon: Month, day: u8) -> i64 {
	// The Gregorian calendar repeats every 400 years (an era), with internal repetition every
	// 100 and again every 4 years. Rotating the year to run Mar-Feb puts the leap day last,
	// which makes the per-era day math a handful of divisions. Euclidean division keeps the
	// era math correct for years before the epoch.
	//
	// More details: http://howardhinnant.github.io/date_algorithms.html#days_from_civil
	let m = mon as u8 as i64;
	let y = if m < 3 { year as i64 - 1 } else { year as i64 };
	let era = y.div_euclid(YEARS_PER_ERA);
	let yoe = y - era * YEARS_PER_ERA;
	let mp = if m > 2 { m - 3 } else { m + 9 };
	let doy = (153 * mp + 2) / 5 + day as i64 - 1;
	let doe = yoe * DAYS_PER_NON_LEAP_YEAR
			+ yoe / YEARS_PER_LEAP_YEAR_1
			- yoe / YEARS_PER_LEAP_YEAR_2
			+ doy;
	era * DAYS_PER_ERA + doe - DAYS_FROM_MAR_0000_TO_JAN_0001
}

/// Convert a day-count back into a (year, month, day) triple.
///
/// Inverse of [`daycount_from_ymd`], defined for the full `i64` range (years that do not fit
/// the [`Date`][crate::datetime::Date] type are returned as-is in the `i64`).
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::{ymd_from_daycount, Month};
/// assert_eq!(ymd_from_daycount(0), (1, Month::January, 1));
/// assert_eq!(ymd_from_daycount(-1), (0, Month::December, 31));
/// assert_eq!(ymd_from_daycount(719162), (1970, Month::January, 1));
/// ```
pub const fn ymd_from_daycount(days: i64) -> (i64, Month, u8) {
	// Inverse rotation of daycount_from_ymd, see the links there.
	let z = days.saturating_add(DAYS_FROM_MAR_0000_TO_JAN_0001);
	let era = z.div_euclid(DAYS_PER_ERA);
	let doe = z - era * DAYS_PER_ERA;
	let yoe = (doe
		       - doe / DAYS_PER_LEAP_YEAR_1
		       + doe / DAYS_PER_LEAP_YEAR_2
		       - doe / DAYS_PER_LEAP_YEAR_3
		      ) / DAYS_PER_NON_LEAP_YEAR;
	let y = yoe + era * YEARS_PER_ERA;
	let doy = doe - (DAYS_PER_NON_LEAP_YEAR * yoe
				   + yoe / YEARS_PER_LEAP_YEAR_1
				   - yoe / YEARS_PER_LEAP_YEAR_2);
	// Linear equation that calculates the month from a set day of year
	let mp = (5 * doy + 2) / 153;
	// Linear equation that calculates the day of month from a day of year and month number
	let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
	// Convert from Mar-Feb year to Jan-Dec year
	let (m, y) = if mp < 10 { (mp + 3, y) } else { (mp - 9, y + 1) };
	(y, MONTHS[(m - 1) as usize], d)
}

/// Get the weekday for a given day-count.
///
/// Day 0 (January 1 of year 1) is a Monday. The result is always in [Sunday, Saturday], with
/// no negative-modulo artifacts for day-counts before the epoch.
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::{wday_from_daycount, Weekday};
/// assert_eq!(wday_from_daycount(0), Weekday::Monday);
/// assert_eq!(wday_from_daycount(-1), Weekday::Sunday);
/// assert_eq!(wday_from_daycount(-2), Weekday::Saturday);
/// assert_eq!(wday_from_daycount(719162), Weekday::Thursday); // Jan 1, 1970
/// ```
pub const fn wday_from_daycount(days: i64) -> Weekday {
	WEEKDAYS[(days.rem_euclid(DAYS_PER_WEEK) as usize + 1) % 7]
}
